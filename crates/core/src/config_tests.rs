// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

#[test]
fn defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    assert_eq!(config.max_url_depth, 1);
    assert_eq!(config.model_prefix, "PA:");
}

#[test]
fn empty_toml_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn parses_humantime_timeout() {
    let config = EngineConfig::from_toml_str(
        r#"
        fetch_timeout = "2m 30s"
        max_url_depth = 3
        model_prefix = ""
        "#,
    )
    .unwrap();
    assert_eq!(config.fetch_timeout, Duration::from_secs(150));
    assert_eq!(config.max_url_depth, 3);
    assert_eq!(config.model_prefix, "");
}

#[test]
fn rejects_unknown_keys() {
    let result = EngineConfig::from_toml_str("retries = 3");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn rejects_zero_depth() {
    let result = EngineConfig::from_toml_str("max_url_depth = 0");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn rejects_zero_timeout() {
    let result = EngineConfig::from_toml_str(r#"fetch_timeout = "0s""#);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fetch_timeout = \"500ms\"").unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.fetch_timeout, Duration::from_millis(500));
}

#[test]
fn load_missing_file_reports_path() {
    let err = EngineConfig::load(Path::new("/nonexistent/varmodel.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/varmodel.toml"));
}
