// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! String models without parameters: `NOT_EMPTY`, `HIDDEN`, `CREDENTIAL`
//! and `JSON`.

use super::identity;
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::static_grammar;
use crate::model::{AcceptAll, BaseParserValidator, ParserValidator, Validator};

static_grammar!(pub(crate) NOT_EMPTY = r"(?i)^NOT_EMPTY$", "NOT_EMPTY");
static_grammar!(pub(crate) HIDDEN = r"(?i)^HIDDEN$", "HIDDEN");
static_grammar!(pub(crate) CREDENTIAL = r"(?i)^CREDENTIAL$", "CREDENTIAL");
static_grammar!(pub(crate) JSON = r"(?i)^JSON$", "JSON");

/// Rejects blank values
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmptyValidator;

impl Validator<String> for NotEmptyValidator {
    fn validate(
        &self,
        value: String,
        _context: Option<&ModelValidatorContext>,
    ) -> Result<String, ModelError> {
        if value.trim().is_empty() {
            return Err(ModelError::validation(value, "must not be empty"));
        }
        Ok(value)
    }
}

/// Accepts syntactically valid JSON documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValidator;

impl Validator<String> for JsonValidator {
    fn validate(
        &self,
        value: String,
        _context: Option<&ModelValidatorContext>,
    ) -> Result<String, ModelError> {
        match serde_json::from_str::<serde_json::Value>(&value) {
            Ok(_) => Ok(value),
            Err(e) => {
                let reason = format!("not valid JSON: {}", e);
                Err(ModelError::validation(value, reason))
            }
        }
    }
}

pub(crate) fn build_not_empty(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    NOT_EMPTY.parse(model)?;
    Ok(BaseParserValidator::new(model, identity, NotEmptyValidator).boxed())
}

/// Masked downstream; any value is accepted here.
pub(crate) fn build_hidden(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    HIDDEN.parse(model)?;
    Ok(BaseParserValidator::new(model, identity, AcceptAll).boxed())
}

pub(crate) fn build_credential(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    CREDENTIAL.parse(model)?;
    Ok(BaseParserValidator::new(model, identity, AcceptAll).boxed())
}

pub(crate) fn build_json(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    JSON.parse(model)?;
    Ok(BaseParserValidator::new(model, identity, JsonValidator).boxed())
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
