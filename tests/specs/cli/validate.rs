//! `varmodel validate` specs
//!
//! Verify single model/value validation, exit codes and error reports.

use crate::prelude::*;

#[test]
fn value_in_range_prints_converted_value() {
    cli()
        .args(&["validate", "LONG[0,10]", "10"])
        .passes()
        .stdout_eq("10\n");
}

#[test]
fn negative_values_are_not_flags() {
    cli()
        .args(&["validate", "LONG[-5,5]", "-3"])
        .passes()
        .stdout_eq("-3\n");
}

#[test]
fn value_out_of_range_is_validation_failure() {
    let run = cli().args(&["validate", "LONG[0,10]", "11"]).fails();
    assert_eq!(run.code(), Some(1));
    run.stderr_has("error: validation failure: invalid value '11'")
        .stderr_has("must be between 0 and 10");
}

#[test]
fn unconvertible_value_is_conversion_failure() {
    cli()
        .args(&["validate", "LONG", "abc"])
        .fails()
        .stderr_has("error: conversion failure: cannot convert 'abc' to long")
        .stderr_has("must be a valid long");
}

#[test]
fn malformed_model_is_syntax_failure() {
    cli()
        .args(&["validate", "LIST(a,a,b)", "a"])
        .fails()
        .stderr_has("error: syntax failure")
        .stderr_has("varmodel types");
}

#[test]
fn unknown_model_type_is_named() {
    cli()
        .args(&["validate", "FOO(1)", "x"])
        .fails()
        .stderr_has("unknown model type 'FOO'");
}

#[test]
fn optional_model_accepts_absent_value() {
    cli()
        .args(&["validate", "NOT_EMPTY?"])
        .passes()
        .stdout_eq("<none>\n");
}

#[test]
fn prefixed_model_is_accepted() {
    cli()
        .args(&["validate", "PA:BOOLEAN", "TRUE"])
        .passes()
        .stdout_eq("true\n");
}

#[test]
fn json_output_is_tagged_by_type() {
    let run = cli()
        .args(&["validate", "--json", "DATETIME(yyyy-MM-dd)", "2020-06-15"])
        .passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!({
            "model": "DATETIME(yyyy-MM-dd)",
            "value": {"type": "date_time", "value": "2020-06-15T00:00:00"}
        })
    );
}

#[test]
fn context_variables_are_visible_to_expressions() {
    cli()
        .args(&[
            "validate",
            "--var",
            "floor=5",
            "SPEL(#value|int > #floor|int)",
            "7",
        ])
        .passes();
    cli()
        .args(&[
            "validate",
            "--var",
            "floor=9",
            "SPEL(#value|int > #floor|int)",
            "7",
        ])
        .fails()
        .stderr_has("validation failure");
}

#[test]
fn user_files_resolve_against_user_space() {
    let project = Project::empty();
    project.file("space/inputs/data.csv", "a,b\n");
    let space = project.path().join("space");
    let space = space.to_str().unwrap();

    project
        .varmodel()
        .args(&["--user-space", space, "validate", "USER_FILE", "inputs/data.csv"])
        .passes()
        .stdout_eq("inputs/data.csv\n");
    project
        .varmodel()
        .args(&["--user-space", space, "validate", "USER_FILE", "inputs/other.csv"])
        .fails()
        .stderr_has("file does not exist in the user space");
    project
        .varmodel()
        .args(&["--user-space", space, "validate", "USER_FILE", "../escape.csv"])
        .fails()
        .stderr_has("path escapes the user space");
}

#[test]
fn missing_space_root_is_reported() {
    cli()
        .args(&["--global-space", "/nonexistent/space", "validate", "BOOLEAN", "true"])
        .fails()
        .stderr_has("global space root does not exist");
}

#[test]
fn model_from_file_url_is_applied() {
    let project = Project::empty();
    project.file("models/port.txt", "\nPA:INTEGER[1,65535]\n");
    let model = format!("MODEL_FROM_URL({})", project.file_url("models/port.txt"));

    cli().args(&["validate", &model, "8080"]).passes().stdout_eq("8080\n");
    cli()
        .args(&["validate", &model, "0"])
        .fails()
        .stderr_has("validation failure");
}

#[test]
fn recursive_model_url_is_rejected() {
    let project = Project::empty();
    let inner = project.file_url("models/inner.txt");
    project.file("models/inner.txt", "LONG");
    project.file("models/outer.txt", &format!("MODEL_FROM_URL({})", inner));
    let model = format!("MODEL_FROM_URL({})", project.file_url("models/outer.txt"));

    cli()
        .args(&["validate", &model, "1"])
        .fails()
        .stderr_has("syntax failure")
        .stderr_has("recursive");
}

#[test]
fn config_file_changes_model_prefix() {
    let project = Project::empty();
    let config = project.file("varmodel.toml", "model_prefix = \"JOB:\"\n");
    let config = config.to_str().unwrap();

    cli()
        .args(&["--config", config, "validate", "JOB:LONG", "4"])
        .passes()
        .stdout_eq("4\n");
    cli()
        .args(&["--config", config, "validate", "PA:LONG", "4"])
        .fails()
        .stderr_has("syntax failure");
}

#[test]
fn invalid_config_file_is_reported() {
    let project = Project::empty();
    let config = project.file("varmodel.toml", "max_url_depth = 0\n");

    cli()
        .args(&["--config", config.to_str().unwrap(), "validate", "LONG", "1"])
        .fails()
        .stderr_has("cannot read")
        .stderr_has("max_url_depth must be at least 1");
}
