// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Location models: `URI`, `URL`, `USER_FILE` and `GLOBAL_FILE`.

use crate::adapters::{DataSpace, DataSpaceAdapter};
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::static_grammar;
use crate::model::{AcceptAll, BaseParserValidator, ParserValidator, Validator};
use crate::value::{Uri, ValueKind};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use url::Url;

static_grammar!(pub(crate) URI = r"(?i)^URI$", "URI");
static_grammar!(pub(crate) URL = r"(?i)^URL$", "URL");
static_grammar!(pub(crate) USER_FILE = r"(?i)^USER_FILE$", "USER_FILE");
static_grammar!(pub(crate) GLOBAL_FILE = r"(?i)^GLOBAL_FILE$", "GLOBAL_FILE");

/// Characters allowed in a URI reference, with well-formed percent escapes
#[allow(clippy::expect_used)]
static URI_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]|%[0-9A-Fa-f]{2})*$")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").expect("constant regex pattern is valid")
});

/// URL schemes accepted by the `URL` model
const KNOWN_SCHEMES: &[&str] = &["http", "https", "ftp", "file", "jar", "mailto"];

fn check_uri_reference(raw: &str) -> Result<(), String> {
    if !URI_REFERENCE.is_match(raw) {
        return Err("contains characters not allowed in a URI".to_string());
    }
    // A colon before any '/', '?' or '#' ends a scheme
    let head_end = raw.find(['/', '?', '#']).unwrap_or(raw.len());
    if let Some(colon) = raw[..head_end].find(':') {
        if !SCHEME.is_match(&raw[..colon]) {
            return Err(format!("invalid scheme '{}'", &raw[..colon]));
        }
    }
    Ok(())
}

fn convert_uri(raw: &str) -> Result<Uri, ModelError> {
    let trimmed = raw.trim();
    check_uri_reference(trimmed)
        .map_err(|reason| ModelError::conversion(raw, ValueKind::Uri, reason))?;
    Ok(Uri::new_unchecked(trimmed))
}

/// File references may contain spaces in their paths.
fn convert_file_reference(raw: &str) -> Result<Uri, ModelError> {
    let trimmed = raw.trim();
    check_uri_reference(&trimmed.replace(' ', "%20"))
        .map_err(|reason| ModelError::conversion(raw, ValueKind::Uri, reason))?;
    Ok(Uri::new_unchecked(trimmed))
}

fn convert_url(raw: &str) -> Result<Url, ModelError> {
    let url = Url::parse(raw.trim()).map_err(|e| ModelError::conversion(raw, ValueKind::Url, e))?;
    if !KNOWN_SCHEMES.contains(&url.scheme()) {
        return Err(ModelError::conversion(
            raw,
            ValueKind::Url,
            format!("unknown protocol '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Delegates file existence to a data space
pub struct FileValidator {
    space: DataSpace,
    data_space: Arc<dyn DataSpaceAdapter>,
}

impl FileValidator {
    pub fn new(space: DataSpace, data_space: Arc<dyn DataSpaceAdapter>) -> Self {
        Self { space, data_space }
    }
}

impl Validator<Uri> for FileValidator {
    fn validate(&self, value: Uri, _context: Option<&ModelValidatorContext>) -> Result<Uri, ModelError> {
        let path = value.as_str();
        if path.is_empty() {
            return Err(ModelError::validation(&value, "file path is empty"));
        }
        match self.data_space.file_exists(self.space, path) {
            Ok(true) => Ok(value),
            Ok(false) => {
                let reason = format!("file does not exist in the {} space", self.space);
                Err(ModelError::validation(value, reason))
            }
            Err(e) => Err(ModelError::validation(value, e.to_string())),
        }
    }
}

pub(crate) fn build_uri(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    URI.parse(model)?;
    Ok(BaseParserValidator::new(model, convert_uri, AcceptAll).boxed())
}

pub(crate) fn build_url(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    URL.parse(model)?;
    Ok(BaseParserValidator::new(model, convert_url, AcceptAll).boxed())
}

pub(crate) fn build_user_file(
    ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    USER_FILE.parse(model)?;
    let validator = FileValidator::new(DataSpace::User, ctx.adapters().data_space.clone());
    Ok(BaseParserValidator::new(model, convert_file_reference, validator).boxed())
}

pub(crate) fn build_global_file(
    ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    GLOBAL_FILE.parse(model)?;
    let validator = FileValidator::new(DataSpace::Global, ctx.adapters().data_space.clone());
    Ok(BaseParserValidator::new(model, convert_file_reference, validator).boxed())
}

#[cfg(test)]
#[path = "uri_tests.rs"]
mod tests;
