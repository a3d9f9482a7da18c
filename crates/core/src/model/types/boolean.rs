// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `BOOLEAN`

use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::static_grammar;
use crate::model::{AcceptAll, BaseParserValidator, ParserValidator};
use crate::value::ValueKind;

static_grammar!(pub(crate) GRAMMAR = r"(?i)^BOOLEAN$", "BOOLEAN");

fn convert(raw: &str) -> Result<bool, ModelError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ModelError::conversion(
            raw,
            ValueKind::Boolean,
            "expected 'true' or 'false'",
        ))
    }
}

pub(crate) fn build(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    GRAMMAR.parse(model)?;
    Ok(BaseParserValidator::new(model, convert, AcceptAll).boxed())
}

#[cfg(test)]
#[path = "boolean_tests.rs"]
mod tests;
