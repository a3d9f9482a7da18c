// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `REGEXP(pattern)`

use super::identity;
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::static_grammar;
use crate::model::{BaseParserValidator, ParserValidator, Validator};
use regex::Regex;

static_grammar!(pub(crate) GRAMMAR = r"(?i)^REGEXP\((.+)\)$", "REGEXP(pattern)");

/// Accepts values the pattern matches in full.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: String,
    regex: Regex,
}

impl RegexValidator {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }
}

impl Validator<String> for RegexValidator {
    fn validate(
        &self,
        value: String,
        _context: Option<&ModelValidatorContext>,
    ) -> Result<String, ModelError> {
        if self.regex.is_match(&value) {
            Ok(value)
        } else {
            let reason = format!("does not match pattern '{}'", self.pattern);
            Err(ModelError::validation(value, reason))
        }
    }
}

pub(crate) fn build(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let params = GRAMMAR.parse(model)?;
    let pattern = params.require(1)?;
    let validator = RegexValidator::new(pattern)
        .map_err(|e| ModelError::syntax(model, format!("invalid pattern: {}", e)))?;
    Ok(BaseParserValidator::new(model, identity, validator).boxed())
}

#[cfg(test)]
#[path = "regexp_tests.rs"]
mod tests;
