// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional wrapper: `MODEL?`
//!
//! An absent or blank value short-circuits to "no value" without reaching
//! the wrapped model; anything else is delegated to it.

use super::ParserValidator;
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::value::{ModelValue, ValueKind};

/// Grammar quoted in syntax failures
pub const GRAMMAR: &str = "MODEL?";

#[derive(Debug)]
pub struct OptionalParserValidator {
    model: String,
    parent: Box<dyn ParserValidator>,
}

impl OptionalParserValidator {
    /// The model this wrapper delegates present values to
    pub fn parent(&self) -> &dyn ParserValidator {
        self.parent.as_ref()
    }
}

impl ParserValidator for OptionalParserValidator {
    fn model(&self) -> &str {
        &self.model
    }

    fn output(&self) -> ValueKind {
        self.parent.output()
    }

    fn convert(&self, raw: Option<&str>) -> Result<Option<ModelValue>, ModelError> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => self.parent.convert(Some(raw)),
            _ => Ok(None),
        }
    }

    fn validate(
        &self,
        value: Option<ModelValue>,
        context: Option<&ModelValidatorContext>,
    ) -> Result<Option<ModelValue>, ModelError> {
        match value {
            Some(value) => self.parent.validate(Some(value), context),
            None => Ok(None),
        }
    }
}

pub(crate) fn build(
    ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let Some(inner) = model.strip_suffix('?') else {
        return Err(ModelError::syntax(
            model,
            "optional model must end with '?'",
        ));
    };
    let inner = inner.trim_end();
    if inner.is_empty() {
        return Err(ModelError::grammar(model, GRAMMAR));
    }
    if inner.ends_with('?') {
        return Err(ModelError::syntax(model, "optional model cannot be nested"));
    }
    let parent = ctx.build(inner)?;
    Ok(Box::new(OptionalParserValidator {
        model: model.to_string(),
        parent,
    }))
}

#[cfg(test)]
#[path = "optional_tests.rs"]
mod tests;
