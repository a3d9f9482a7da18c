//! `varmodel check` specs
//!
//! Verify whole-file variable validation.

use crate::prelude::*;

const VALID: &str = r#"
[variables.retries]
value = "3"
model = "INTEGER[0,5]"

[variables.env]
value = "prod"
model = "LIST(dev,prod)"

[variables.note]
value = "free text"

[variables.since]
model = "DATETIME(yyyy-MM-dd)?"
"#;

#[test]
fn valid_file_reports_every_variable() {
    let project = Project::empty();
    project.file("vars.toml", VALID);

    project
        .varmodel()
        .args(&["check", "vars.toml"])
        .passes()
        .stdout_eq(
            "ok      env = prod\n\
             ok      note = free text\n\
             ok      retries = 3\n\
             ok      since = <none>\n",
        );
}

#[test]
fn failures_are_listed_and_exit_nonzero() {
    let project = Project::empty();
    project.file(
        "vars.toml",
        r#"
[variables.a]
value = "x"
model = "LONG"

[variables.b]
value = "1"
model = "LONG"

[variables.c]
value = "11"
model = "LONG[0,10]"
"#,
    );

    let run = project.varmodel().args(&["check", "vars.toml"]).fails();
    assert_eq!(run.code(), Some(1));
    run.stdout_has("FAILED  a (conversion)")
        .stdout_has("ok      b = 1")
        .stdout_has("FAILED  c (validation)")
        .stderr_has("2 variable(s) failed validation")
        .stderr_has("-> variable 'a'");
}

#[test]
fn expressions_see_sibling_variables() {
    let project = Project::empty();
    project.file(
        "vars.toml",
        r#"
[variables.min]
value = "5"

[variables.max]
value = "10"
model = "SPEL(#value|int > #min|int)"
"#,
    );

    project
        .varmodel()
        .args(&["check", "vars.toml", "--timeout", "5s"])
        .passes()
        .stdout_has("ok      max = 10");
}

#[test]
fn json_output_has_status_per_variable() {
    let project = Project::empty();
    project.file(
        "vars.toml",
        "[variables.flag]\nvalue = \"true\"\nmodel = \"BOOLEAN\"\n",
    );

    let run = project
        .varmodel()
        .args(&["check", "--json", "vars.toml"])
        .passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!([
            {"name": "flag", "status": "ok", "value": {"type": "boolean", "value": true}}
        ])
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let project = Project::empty();
    project.file("vars.toml", "[variables.x]\ntype = \"LONG\"\n");

    project
        .varmodel()
        .args(&["check", "vars.toml"])
        .fails()
        .stderr_has("cannot read vars.toml")
        .stderr_has("[variables.NAME]");
}

#[test]
fn missing_file_is_reported() {
    let project = Project::empty();
    project
        .varmodel()
        .args(&["check", "absent.toml"])
        .fails()
        .stderr_has("cannot read absent.toml");
}

#[test]
fn malformed_timeout_is_a_usage_error() {
    let project = Project::empty();
    project.file("vars.toml", VALID);

    let run = project
        .varmodel()
        .args(&["check", "vars.toml", "--timeout", "soon"])
        .fails();
    assert_eq!(run.code(), Some(2));
}
