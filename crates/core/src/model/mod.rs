// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Model parser/validators.
//!
//! A parser/validator is built once from a model string and then applied to
//! raw values. Building matches the model against its type's grammar and
//! binds a [`Converter`] and a [`Validator`] to the extracted parameters;
//! applying converts the raw string and validates the result.
//!
//! - **grammar**: structural matching of model strings
//! - **range**: the `[min]` / `[min,max]` suffix of ordered types
//! - **types**: one module per leaf model family
//! - **optional**: the `?` wrapper
//! - **from_url**: `MODEL_FROM_URL` indirection
//!
//! # Example
//!
//! ```ignore
//! let engine = ModelEngine::new();
//! let pv = engine.parser_validator("LONG[0,10]")?;
//! assert_eq!(pv.parse_as::<i64>(Some("7"), None)?, Some(7));
//! ```

pub mod from_url;
pub mod grammar;
pub mod optional;
pub mod range;
pub mod types;

pub use grammar::{Grammar, Params};

use crate::context::ModelValidatorContext;
use crate::error::ModelError;
use crate::value::{ModelValue, ModelValueType, ValueKind};
use std::fmt;

/// Turns a raw string into a typed value.
pub trait Converter<T>: Send + Sync {
    fn convert(&self, raw: &str) -> Result<T, ModelError>;
}

impl<T, F> Converter<T> for F
where
    F: Fn(&str) -> Result<T, ModelError> + Send + Sync,
{
    fn convert(&self, raw: &str) -> Result<T, ModelError> {
        self(raw)
    }
}

/// Checks a converted value, returning it unchanged when accepted.
pub trait Validator<T>: Send + Sync {
    fn validate(&self, value: T, context: Option<&ModelValidatorContext>)
        -> Result<T, ModelError>;
}

/// Validator that accepts every value
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<T> Validator<T> for AcceptAll {
    fn validate(&self, value: T, _context: Option<&ModelValidatorContext>) -> Result<T, ModelError> {
        Ok(value)
    }
}

/// A model bound to its converter and validator.
///
/// `None` stands for "no value" and is only produced by optional models.
pub trait ParserValidator: fmt::Debug + Send + Sync {
    /// The trimmed model string this instance was built from
    fn model(&self) -> &str;

    /// The type of value this model produces
    fn output(&self) -> ValueKind;

    fn convert(&self, raw: Option<&str>) -> Result<Option<ModelValue>, ModelError>;

    fn validate(
        &self,
        value: Option<ModelValue>,
        context: Option<&ModelValidatorContext>,
    ) -> Result<Option<ModelValue>, ModelError>;

    fn parse_and_validate(
        &self,
        raw: Option<&str>,
        context: Option<&ModelValidatorContext>,
    ) -> Result<Option<ModelValue>, ModelError> {
        let value = self.convert(raw)?;
        self.validate(value, context)
    }
}

impl dyn ParserValidator {
    /// Parse and validate into a concrete Rust type.
    ///
    /// Fails before touching the value if the model does not produce `T`.
    pub fn parse_as<T: ModelValueType>(
        &self,
        raw: Option<&str>,
        context: Option<&ModelValidatorContext>,
    ) -> Result<Option<T>, ModelError> {
        if self.output() != T::KIND {
            return Err(ModelError::conversion(
                raw.unwrap_or_default(),
                T::KIND,
                format!("model '{}' produces {} values", self.model(), self.output()),
            ));
        }
        match self.parse_and_validate(raw, context)? {
            None => Ok(None),
            Some(value) => T::from_value(value)
                .map(Some)
                .ok_or_else(|| ModelError::conversion(raw.unwrap_or_default(), T::KIND, "type mismatch")),
        }
    }
}

/// Parser/validator for a leaf model: one converter, one validator.
pub struct BaseParserValidator<T> {
    model: String,
    converter: Box<dyn Converter<T>>,
    validator: Box<dyn Validator<T>>,
}

impl<T: ModelValueType> BaseParserValidator<T> {
    pub fn new(
        model: &str,
        converter: impl Converter<T> + 'static,
        validator: impl Validator<T> + 'static,
    ) -> Self {
        Self {
            model: model.trim().to_string(),
            converter: Box::new(converter),
            validator: Box::new(validator),
        }
    }

    pub fn boxed(self) -> Box<dyn ParserValidator> {
        Box::new(self)
    }
}

impl<T> fmt::Debug for BaseParserValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseParserValidator")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl<T: ModelValueType> ParserValidator for BaseParserValidator<T> {
    fn model(&self) -> &str {
        &self.model
    }

    fn output(&self) -> ValueKind {
        T::KIND
    }

    fn convert(&self, raw: Option<&str>) -> Result<Option<ModelValue>, ModelError> {
        let raw = raw.ok_or_else(|| ModelError::absent(T::KIND))?;
        let value = self.converter.convert(raw)?;
        Ok(Some(value.into_value()))
    }

    fn validate(
        &self,
        value: Option<ModelValue>,
        context: Option<&ModelValidatorContext>,
    ) -> Result<Option<ModelValue>, ModelError> {
        let value = value.ok_or_else(|| ModelError::absent(T::KIND))?;
        let shown = value.to_string();
        let typed = T::from_value(value).ok_or_else(|| {
            ModelError::conversion(shown, T::KIND, format!("model '{}' expects {}", self.model, T::KIND))
        })?;
        let validated = self.validator.validate(typed, context)?;
        Ok(Some(validated.into_value()))
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
