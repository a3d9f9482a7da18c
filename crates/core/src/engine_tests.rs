// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::adapters::{DataSpace, FakeDataSpace, FakeFetcher};
use std::time::Duration;
use crate::value::ValueKind;
use yare::parameterized;

#[parameterized(
    plain = { "LONG" },
    padded = { "  LONG  " },
    prefixed = { "PA:LONG" },
    prefixed_lower = { "pa:long" },
    prefixed_spaced = { " PA: LONG" },
)]
fn dispatches_after_trim_and_prefix(model: &str) {
    let pv = ModelEngine::new().parser_validator(model).unwrap();
    assert_eq!(pv.output(), ValueKind::Long);
}

#[test]
fn stored_model_is_normalized() {
    let pv = ModelEngine::new().parser_validator(" PA:LIST(a,b) ").unwrap();
    assert_eq!(pv.model(), "LIST(a,b)");
}

#[test]
fn custom_prefix() {
    let engine = ModelEngine::builder()
        .with_config(EngineConfig::default().with_model_prefix("X:"))
        .build();
    assert!(engine.parser_validator("X:BOOLEAN").is_ok());
    assert!(engine.parser_validator("PA:BOOLEAN").unwrap_err().is_syntax());
}

#[parameterized(
    empty = { "" },
    blank = { "   " },
    prefix_only = { "PA:" },
    no_keyword = { "[1,2]" },
    unknown = { "FOO" },
    unknown_with_args = { "FOO(1)" },
)]
fn malformed_dispatch_is_syntax_failure(model: &str) {
    let err = ModelEngine::new().parser_validator(model).unwrap_err();
    assert!(err.is_syntax(), "{model}: {err}");
}

#[test]
fn unknown_keyword_is_named() {
    let err = ModelEngine::new().parser_validator("FOO(1)").unwrap_err();
    assert!(err.to_string().contains("unknown model type 'FOO'"));
}

#[test]
fn trailing_question_mark_dispatches_to_optional() {
    let pv = ModelEngine::new().parser_validator("LONG?").unwrap();
    assert_eq!(pv.parse_and_validate(None, None).unwrap(), None);
}

#[test]
fn build_as_checks_grammar_of_named_type() {
    let engine = ModelEngine::new();
    assert!(engine.build_as("long", "LONG[1]").is_ok());
    assert!(engine.build_as("LONG", "BOOLEAN").unwrap_err().is_syntax());
    assert!(engine.build_as("NOPE", "LONG").unwrap_err().is_syntax());
}

#[test]
fn parse_and_validate_in_one_call() {
    let engine = ModelEngine::new();
    assert_eq!(
        engine
            .parse_and_validate("LONG[0,10]", Some("10"), None)
            .unwrap(),
        Some(ModelValue::Long(10))
    );
    assert!(engine
        .parse_and_validate("LONG[0,10", Some("10"), None)
        .unwrap_err()
        .is_syntax());
}

#[test]
fn builder_wires_adapters() {
    let engine = ModelEngine::builder()
        .with_data_space(FakeDataSpace::new().with_file(DataSpace::User, "a.txt"))
        .build();
    let pv = engine.parser_validator("USER_FILE").unwrap();
    assert!(pv.parse_and_validate(Some("a.txt"), None).is_ok());
    assert!(pv.parse_and_validate(Some("b.txt"), None).is_err());
}

#[test]
fn default_adapters_accept_catalog_and_files() {
    let engine = ModelEngine::default();
    assert!(engine
        .parse_and_validate("CATALOG_OBJECT", Some("bucket/object"), None)
        .is_ok());
    assert!(engine
        .parse_and_validate("GLOBAL_FILE", Some("any/file"), None)
        .is_ok());
}

#[test]
fn engine_and_parsers_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ModelEngine>();
    assert_send_sync::<Box<dyn ParserValidator>>();
}

#[test]
fn clones_share_registry() {
    let engine = ModelEngine::new();
    let clone = engine.clone();
    assert!(std::ptr::eq(engine.registry(), clone.registry()));
}

#[test]
fn builder_replaces_out_of_range_config() {
    let engine = ModelEngine::builder()
        .with_config(
            EngineConfig::default()
                .with_max_url_depth(0)
                .with_fetch_timeout(Duration::ZERO),
        )
        .build();

    assert_eq!(engine.config().max_url_depth, 1);
    assert_eq!(engine.config().fetch_timeout, Duration::from_secs(10));
}

#[test]
fn zero_depth_config_still_allows_one_fetch() {
    let url = "http://models.example.com/list.txt";
    let fetcher = FakeFetcher::new().with_response(url, "LIST(a,b)");
    let engine = ModelEngine::builder()
        .with_config(EngineConfig::default().with_max_url_depth(0))
        .with_fetcher(fetcher.clone())
        .build();

    let pv = engine
        .parser_validator(&format!("MODEL_FROM_URL({})", url))
        .unwrap();
    assert!(pv.parse_and_validate(Some("a"), None).is_ok());
    assert_eq!(fetcher.calls(), vec![url.to_string()]);
}
