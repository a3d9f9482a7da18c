// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Range suffix shared by ordered scalar types.
//!
//! | Suffix        | Accepts            |
//! |---------------|--------------------|
//! | (none)        | every value        |
//! | `[min]`       | `value >= min`     |
//! | `[min,)`      | `value >= min`     |
//! | `[min,max]`   | `min <= value <= max` |
//!
//! Bounds are converted with the type's own converter. A bound that fails to
//! convert, or a closed range whose minimum exceeds its maximum, makes the
//! whole model a syntax failure.

use super::grammar::{split_params, Params};
use super::{Converter, Validator};
use crate::context::ModelValidatorContext;
use crate::error::ModelError;
use std::fmt;

/// Regex fragment for the optional range suffix; captures two groups.
pub(crate) const SUFFIX_PATTERN: &str = r"(?:\[(.*)\]|\[([^\]]*),\))?";

/// The suffix content captured by [`SUFFIX_PATTERN`] starting at `group`.
pub(crate) fn suffix<'m>(params: &Params<'m>, group: usize) -> Option<&'m str> {
    params.get(group).or_else(|| params.get(group + 1))
}

/// An interval over an ordered type.
#[derive(Debug, Clone, PartialEq)]
pub enum Range<T> {
    Any,
    AtLeast(T),
    Between(T, T),
}

impl<T> Range<T>
where
    T: PartialOrd + fmt::Display + Clone + Send + Sync,
{
    /// Build the range for `model` from the captured suffix content.
    ///
    /// `suffix` is the text between the brackets, or `None` for a bare model.
    pub fn parse(
        model: &str,
        suffix: Option<&str>,
        converter: &dyn Converter<T>,
    ) -> Result<Self, ModelError> {
        let Some(suffix) = suffix else {
            return Ok(Range::Any);
        };
        let bound = |token: &str, which: &str| {
            let value = converter
                .convert(token)
                .map_err(|e| e.into_syntax(model, &format!("invalid {} bound", which)))?;
            // NaN never orders, so it would reject every value
            if value.partial_cmp(&value).is_none() {
                return Err(ModelError::syntax(
                    model,
                    format!("invalid {} bound '{}': not comparable", which, token),
                ));
            }
            Ok(value)
        };
        match split_params(suffix).as_slice() {
            [min] if !min.is_empty() => Ok(Range::AtLeast(bound(min, "minimum")?)),
            [min, ""] if !min.is_empty() => Ok(Range::AtLeast(bound(min, "minimum")?)),
            [min, max] if !min.is_empty() => {
                let min = bound(min, "minimum")?;
                let max = bound(max, "maximum")?;
                if min > max {
                    return Err(ModelError::syntax(
                        model,
                        format!("range minimum {} is greater than maximum {}", min, max),
                    ));
                }
                Ok(Range::Between(min, max))
            }
            _ => Err(ModelError::syntax(
                model,
                format!("expected range [min] or [min,max], found [{}]", suffix),
            )),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        match self {
            Range::Any => true,
            Range::AtLeast(min) => value >= min,
            Range::Between(min, max) => value >= min && value <= max,
        }
    }
}

impl<T> Validator<T> for Range<T>
where
    T: PartialOrd + fmt::Display + Clone + Send + Sync,
{
    fn validate(&self, value: T, _context: Option<&ModelValidatorContext>) -> Result<T, ModelError> {
        if self.contains(&value) {
            return Ok(value);
        }
        let reason = match self {
            Range::Any => String::new(),
            Range::AtLeast(min) => format!("must be greater than or equal to {}", min),
            Range::Between(min, max) => format!("must be between {} and {}", min, max),
        };
        Err(ModelError::validation(value, reason))
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
