// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure kinds raised while building or applying a model.
//!
//! Every operation of the engine either produces a value or exactly one of
//! three failures:
//!
//! - **Syntax**: the model string itself is malformed
//! - **Conversion**: the raw value cannot be turned into the model's type
//! - **Validation**: the converted value violates the model's constraint

use crate::value::ValueKind;
use std::fmt;
use thiserror::Error;

/// A failure produced by the model engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The model string does not conform to its grammar
    #[error("invalid model '{model}': {reason}")]
    Syntax { model: String, reason: String },

    /// The raw value could not be converted to the model's output type
    #[error("cannot convert '{value}' to {target}: {reason}")]
    Conversion {
        value: String,
        target: ValueKind,
        reason: String,
    },

    /// The converted value does not satisfy the model
    #[error("invalid value '{value}': {reason}")]
    Validation { value: String, reason: String },
}

/// Discriminant of a [`ModelError`], for callers that map failures elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Syntax,
    Conversion,
    Validation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Syntax => write!(f, "syntax"),
            FailureKind::Conversion => write!(f, "conversion"),
            FailureKind::Validation => write!(f, "validation"),
        }
    }
}

impl ModelError {
    pub fn syntax(model: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::Syntax {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Syntax failure for a model that does not match the expected grammar.
    pub fn grammar(model: impl Into<String>, expected: &str) -> Self {
        ModelError::Syntax {
            model: model.into(),
            reason: format!("expected {}", expected),
        }
    }

    pub fn conversion(
        value: impl Into<String>,
        target: ValueKind,
        reason: impl fmt::Display,
    ) -> Self {
        ModelError::Conversion {
            value: value.into(),
            target,
            reason: reason.to_string(),
        }
    }

    /// Conversion failure for a missing raw value.
    pub fn absent(target: ValueKind) -> Self {
        ModelError::Conversion {
            value: String::new(),
            target,
            reason: "no value provided".to_string(),
        }
    }

    pub fn validation(value: impl fmt::Display, reason: impl Into<String>) -> Self {
        ModelError::Validation {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ModelError::Syntax { .. } => FailureKind::Syntax,
            ModelError::Conversion { .. } => FailureKind::Conversion,
            ModelError::Validation { .. } => FailureKind::Validation,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind() == FailureKind::Syntax
    }

    pub fn is_conversion(&self) -> bool {
        self.kind() == FailureKind::Conversion
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == FailureKind::Validation
    }

    /// Re-tag a failure raised while converting a range bound as a syntax
    /// failure of the enclosing model.
    pub(crate) fn into_syntax(self, model: &str, context: &str) -> Self {
        match self {
            ModelError::Syntax { .. } => self,
            other => ModelError::syntax(model, format!("{}: {}", context, other)),
        }
    }
}
