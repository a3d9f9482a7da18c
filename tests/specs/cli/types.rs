//! `varmodel types` specs

use crate::prelude::*;

#[test]
fn lists_every_builtin_type() {
    let run = cli().args(&["types"]).passes();
    run.stdout_has("KEYWORD")
        .stdout_has("LONG")
        .stdout_has("LONG, LONG[min] or LONG[min,max]")
        .stdout_has("CATALOG_OBJECT")
        .stdout_has("MODEL_FROM_URL");
}

#[test]
fn json_lists_keywords_in_order() {
    let json = cli().args(&["types", "--json"]).passes().stdout_json();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 23);

    let keywords: Vec<&str> = rows
        .iter()
        .map(|r| r["keyword"].as_str().unwrap())
        .collect();
    let mut sorted = keywords.clone();
    sorted.sort_unstable();
    assert_eq!(keywords, sorted);

    let long = rows.iter().find(|r| r["keyword"] == "LONG").unwrap();
    assert_eq!(long["output"], "long");
    let optional = rows.iter().find(|r| r["keyword"] == "OPTIONAL").unwrap();
    assert!(optional["output"].is_null());
}
