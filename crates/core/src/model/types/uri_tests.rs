// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::super::test_support::{build, build_err};
use super::*;
use crate::adapters::FakeDataSpace;
use crate::engine::ModelEngine;
use crate::value::ModelValue;
use yare::parameterized;

#[parameterized(
    absolute = { "http://example.com/a?b=c#d" },
    relative = { "dir/file.txt" },
    rooted = { "/var/data" },
    escaped = { "a%20b" },
    urn = { "urn:isbn:0451450523" },
    empty = { "" },
)]
fn uri_accepts_references(raw: &str) {
    let pv = build("URI");
    assert_eq!(
        pv.parse_and_validate(Some(raw), None).unwrap(),
        Some(ModelValue::Uri(Uri::new_unchecked(raw)))
    );
}

#[parameterized(
    space = { "a b" },
    bad_escape = { "a%zz" },
    bad_scheme = { "1http://host" },
    brace = { "http://host/{x}" },
)]
fn uri_rejects_malformed_as_conversion(raw: &str) {
    let err = build("uri").parse_and_validate(Some(raw), None).unwrap_err();
    assert!(err.is_conversion());
}

#[parameterized(
    http = { "http://example.com" },
    https = { "https://example.com/path" },
    file = { "file:///tmp/x" },
    ftp = { "ftp://host/file" },
)]
fn url_accepts_known_schemes(raw: &str) {
    let pv = build("URL");
    assert!(matches!(
        pv.parse_and_validate(Some(raw), None).unwrap(),
        Some(ModelValue::Url(_))
    ));
}

#[parameterized(
    relative = { "example.com" },
    unknown_scheme = { "gopher://host" },
    garbage = { "http://" },
)]
fn url_rejects_as_conversion(raw: &str) {
    let err = build("URL").parse_and_validate(Some(raw), None).unwrap_err();
    assert!(err.is_conversion());
}

fn engine() -> ModelEngine {
    let spaces = FakeDataSpace::new()
        .with_file(DataSpace::User, "inputs/my data.csv")
        .with_file(DataSpace::Global, "shared/model.bin");
    ModelEngine::builder().with_data_space(spaces).build()
}

#[test]
fn user_file_checks_user_space() {
    let pv = engine().parser_validator("USER_FILE").unwrap();
    assert!(pv.parse_and_validate(Some("inputs/my data.csv"), None).is_ok());
    let err = pv
        .parse_and_validate(Some("shared/model.bin"), None)
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("user space"));
}

#[test]
fn global_file_checks_global_space() {
    let pv = engine().parser_validator("GLOBAL_FILE").unwrap();
    assert!(pv.parse_and_validate(Some("shared/model.bin"), None).is_ok());
    assert!(pv
        .parse_and_validate(Some("inputs/my data.csv"), None)
        .unwrap_err()
        .is_validation());
}

#[test]
fn file_reference_rejects_empty_and_malformed() {
    let pv = engine().parser_validator("USER_FILE").unwrap();
    assert!(pv.parse_and_validate(Some(""), None).unwrap_err().is_validation());
    assert!(pv.parse_and_validate(Some("a%zz"), None).unwrap_err().is_conversion());
}

#[parameterized(
    uri_args = { "URI(x)" },
    url_range = { "URL[1]" },
    file_args = { "USER_FILE(data)" },
)]
fn arguments_are_syntax_failures(model: &str) {
    assert!(build_err(model).is_syntax());
}
