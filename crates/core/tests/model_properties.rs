// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! End-to-end properties of the model engine.
//!
//! Each test goes through the public engine API only: build from a model
//! string, apply to raw values, check the outcome and its failure kind.

use proptest::prelude::*;
use varmodel_core::{FailureKind, FakeFetcher, ModelEngine, ModelError, ModelValue};
use yare::parameterized;

fn engine() -> ModelEngine {
    ModelEngine::new()
}

fn outcome(model: &str, raw: Option<&str>) -> Result<Option<ModelValue>, FailureKind> {
    engine()
        .parse_and_validate(model, raw, None)
        .map_err(|e| e.kind())
}

// =============================================================================
// Grammar
// =============================================================================

/// A model for every built-in keyword that is syntactically wrong for it
#[parameterized(
    boolean = { "BOOLEAN(x)" },
    cron = { "CRON[1]" },
    short = { "SHORT(1)" },
    integer = { "INTEGER[1" },
    long = { "LONG[1,2,3]" },
    float = { "FLOAT[a]" },
    double = { "DOUBLE[]" },
    datetime = { "DATETIME" },
    list = { "LIST" },
    regexp = { "REGEXP(()" },
    not_empty = { "NOT_EMPTY(1)" },
    spel = { "SPEL()" },
    spel2 = { "SPEL2(x)" },
    uri = { "URI(x)" },
    url = { "URL(x)" },
    catalog_object = { "CATALOG_OBJECT(a,b,c,d,e)" },
    global_file = { "GLOBAL_FILE(x)" },
    user_file = { "USER_FILE(x)" },
    hidden = { "HIDDEN(x)" },
    credential = { "CREDENTIAL(x)" },
    json = { "JSON(x)" },
    optional = { "OPTIONAL" },
    model_from_url = { "MODEL_FROM_URL()" },
)]
fn grammar_mismatch_is_syntax_failure(model: &str) {
    let err = engine().parser_validator(model).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Syntax, "{model}: {err}");
}

#[parameterized(
    long = { "LONG[10,0]" },
    short = { "SHORT[5,-5]" },
    double = { "DOUBLE[1.5,1.0]" },
    datetime = { "DATETIME(yyyy-MM-dd)[2021-01-01,2020-01-01]" },
)]
fn inverted_range_is_syntax_failure(model: &str) {
    assert!(engine().parser_validator(model).unwrap_err().is_syntax());
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn long_range_scenario() {
    assert_eq!(outcome("LONG[0,10]", Some("0")), Ok(Some(ModelValue::Long(0))));
    assert_eq!(outcome("LONG[0,10]", Some("10")), Ok(Some(ModelValue::Long(10))));
    assert_eq!(outcome("LONG[0,10]", Some("-1")), Err(FailureKind::Validation));
    assert_eq!(outcome("LONG[0,10]", Some("11")), Err(FailureKind::Validation));
    assert_eq!(outcome("LONG[0,10]", Some("abc")), Err(FailureKind::Conversion));
}

#[test]
fn list_scenario() {
    for v in ["a", "b", "c"] {
        assert!(outcome("LIST(a,b,c)", Some(v)).is_ok());
    }
    assert_eq!(outcome("LIST(a,b,c)", Some("d")), Err(FailureKind::Validation));
    assert!(engine().parser_validator("LIST(a,a,b)").unwrap_err().is_syntax());
}

#[test]
fn datetime_scenario() {
    let model = "DATETIME(yyyy-MM-dd)[2020-01-01,2020-12-31]";
    assert!(outcome(model, Some("2020-06-15")).is_ok());
    assert_eq!(outcome(model, Some("2021-01-01")), Err(FailureKind::Validation));
    assert_eq!(outcome(model, Some("15/06/2020")), Err(FailureKind::Conversion));
}

#[test]
fn optional_scenario() {
    assert_eq!(outcome("NOT_EMPTY?", None), Ok(None));
    assert_eq!(outcome("NOT_EMPTY?", Some("")), Ok(None));
    assert_eq!(
        outcome("NOT_EMPTY?", Some("x")),
        Ok(Some(ModelValue::String("x".into())))
    );
    assert_eq!(outcome("NOT_EMPTY", Some("")), Err(FailureKind::Validation));
}

#[test]
fn recursive_url_scenario() {
    let inner = "http://models.example.com/inner";
    let outer = "http://models.example.com/outer";
    let fetcher = FakeFetcher::new()
        .with_response(outer, format!("PA:MODEL_FROM_URL({})", inner))
        .with_response(inner, "LONG");
    let engine = ModelEngine::builder().with_fetcher(fetcher.clone()).build();

    let err = engine
        .parser_validator(&format!("MODEL_FROM_URL({})", outer))
        .unwrap_err();
    match &err {
        ModelError::Syntax { reason, .. } => assert!(reason.contains("recursive")),
        other => panic!("expected syntax failure, got {other:?}"),
    }
    assert_eq!(fetcher.calls().len(), 1);
}

#[test]
fn typed_request_for_wrong_type_fails_fast() {
    let pv = engine().parser_validator("LONG").unwrap();
    let err = pv.parse_as::<bool>(Some("1"), None).unwrap_err();
    assert!(err.is_conversion());
    assert!(err.to_string().contains("boolean"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn validation_is_idempotent(n in -20i64..20) {
        let pv = engine().parser_validator("LONG[0,10]").unwrap();
        let raw = n.to_string();
        match pv.convert(Some(&raw)) {
            Ok(value) => {
                let first = pv.validate(value.clone(), None);
                let second = pv.validate(value, None);
                prop_assert_eq!(first, second);
            }
            Err(e) => prop_assert!(false, "conversion failed: {}", e),
        }
    }

    #[test]
    fn list_membership_matches_entries(value in "[a-e]") {
        let accepted = outcome("LIST(a,b,c)", Some(&value)).is_ok();
        prop_assert_eq!(accepted, ["a", "b", "c"].contains(&value.as_str()));
    }

    #[test]
    fn long_range_agrees_with_comparison(n in any::<i64>()) {
        let accepted = outcome("LONG[-100,100]", Some(&n.to_string())).is_ok();
        prop_assert_eq!(accepted, (-100..=100).contains(&n));
    }

    #[test]
    fn regexp_agrees_with_raw_regex(value in "[a-zA-Z0-9 ]{0,10}") {
        let raw = regex::Regex::new("^[a-z]+$").unwrap();
        let accepted = outcome("REGEXP(^[a-z]+$)", Some(&value)).is_ok();
        prop_assert_eq!(accepted, raw.is_match(&value));
    }
}
