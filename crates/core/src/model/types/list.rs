// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `LIST(value1,value2,...)`

use super::identity;
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::{split_params, static_grammar};
use crate::model::{BaseParserValidator, ParserValidator, Validator};

static_grammar!(pub(crate) GRAMMAR = r"(?i)^LIST\((.+)\)$", "LIST(value1,value2,...)");

/// Accepts values equal, after trimming, to one of the listed entries.
#[derive(Debug, Clone)]
pub struct ListValidator {
    entries: Vec<String>,
}

impl ListValidator {
    /// Entries are trimmed and must be distinct. An empty entry is legal and
    /// lets the empty value be chosen explicitly.
    pub fn new(entries: &[&str]) -> Result<Self, String> {
        let mut seen: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.trim();
            if seen.iter().any(|s| s == entry) {
                return Err(format!("duplicate list entry '{}'", entry));
            }
            seen.push(entry.to_string());
        }
        Ok(Self { entries: seen })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Validator<String> for ListValidator {
    fn validate(
        &self,
        value: String,
        _context: Option<&ModelValidatorContext>,
    ) -> Result<String, ModelError> {
        if self.entries.iter().any(|e| e == value.trim()) {
            return Ok(value);
        }
        let reason = format!("must be one of [{}]", self.entries.join(", "));
        Err(ModelError::validation(value, reason))
    }
}

pub(crate) fn build(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let params = GRAMMAR.parse(model)?;
    let validator = ListValidator::new(&split_params(params.require(1)?))
        .map_err(|reason| ModelError::syntax(model, reason))?;
    Ok(BaseParserValidator::new(model, identity, validator).boxed())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
