// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric types with an optional range: `SHORT`, `INTEGER`, `LONG`,
//! `FLOAT`, `DOUBLE`.

use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::static_grammar;
use crate::model::range::{self, Range};
use crate::model::{BaseParserValidator, Grammar, ParserValidator};
use crate::value::ModelValueType;
use std::fmt;
use std::str::FromStr;

static_grammar!(pub(crate) SHORT = &format!("(?i)^SHORT{}$", range::SUFFIX_PATTERN), "SHORT, SHORT[min] or SHORT[min,max]");
static_grammar!(pub(crate) INTEGER = &format!("(?i)^INTEGER{}$", range::SUFFIX_PATTERN), "INTEGER, INTEGER[min] or INTEGER[min,max]");
static_grammar!(pub(crate) LONG = &format!("(?i)^LONG{}$", range::SUFFIX_PATTERN), "LONG, LONG[min] or LONG[min,max]");
static_grammar!(pub(crate) FLOAT = &format!("(?i)^FLOAT{}$", range::SUFFIX_PATTERN), "FLOAT, FLOAT[min] or FLOAT[min,max]");
static_grammar!(pub(crate) DOUBLE = &format!("(?i)^DOUBLE{}$", range::SUFFIX_PATTERN), "DOUBLE, DOUBLE[min] or DOUBLE[min,max]");

/// A Rust number type backing a numeric model keyword.
pub(crate) trait NumericModel:
    ModelValueType + PartialOrd + fmt::Display + FromStr<Err: fmt::Display>
{
    fn grammar() -> &'static Grammar;
}

macro_rules! numeric_model {
    ($ty:ty, $grammar:ident) => {
        impl NumericModel for $ty {
            fn grammar() -> &'static Grammar {
                &$grammar
            }
        }
    };
}

numeric_model!(i16, SHORT);
numeric_model!(i32, INTEGER);
numeric_model!(i64, LONG);
numeric_model!(f32, FLOAT);
numeric_model!(f64, DOUBLE);

fn convert<T: NumericModel>(raw: &str) -> Result<T, ModelError> {
    raw.trim()
        .parse::<T>()
        .map_err(|e| ModelError::conversion(raw, T::KIND, e))
}

pub(crate) fn build<T: NumericModel>(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let params = T::grammar().parse(model)?;
    let range = Range::parse(model, range::suffix(&params, 1), &convert::<T>)?;
    Ok(BaseParserValidator::new(model, convert::<T>, range).boxed())
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod tests;
