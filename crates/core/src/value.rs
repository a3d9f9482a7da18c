// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed values produced by model conversion.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// The output type declared by a model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Boolean,
    Short,
    Integer,
    Long,
    Float,
    Double,
    DateTime,
    String,
    Uri,
    Url,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Short => "short",
            ValueKind::Integer => "integer",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::DateTime => "date-time",
            ValueKind::String => "string",
            ValueKind::Uri => "uri",
            ValueKind::Url => "url",
        };
        write!(f, "{}", name)
    }
}

/// A URI reference (absolute or relative) that passed syntax checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    pub(crate) fn new_unchecked(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A converted, validated variable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ModelValue {
    Boolean(bool),
    Short(i16),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    DateTime(NaiveDateTime),
    String(String),
    Uri(Uri),
    Url(Url),
}

impl ModelValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ModelValue::Boolean(_) => ValueKind::Boolean,
            ModelValue::Short(_) => ValueKind::Short,
            ModelValue::Integer(_) => ValueKind::Integer,
            ModelValue::Long(_) => ValueKind::Long,
            ModelValue::Float(_) => ValueKind::Float,
            ModelValue::Double(_) => ValueKind::Double,
            ModelValue::DateTime(_) => ValueKind::DateTime,
            ModelValue::String(_) => ValueKind::String,
            ModelValue::Uri(_) => ValueKind::Uri,
            ModelValue::Url(_) => ValueKind::Url,
        }
    }
}

impl fmt::Display for ModelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelValue::Boolean(b) => write!(f, "{}", b),
            ModelValue::Short(n) => write!(f, "{}", n),
            ModelValue::Integer(n) => write!(f, "{}", n),
            ModelValue::Long(n) => write!(f, "{}", n),
            ModelValue::Float(n) => write!(f, "{}", n),
            ModelValue::Double(n) => write!(f, "{}", n),
            ModelValue::DateTime(dt) => write!(f, "{}", dt),
            ModelValue::String(s) => write!(f, "{}", s),
            ModelValue::Uri(u) => write!(f, "{}", u),
            ModelValue::Url(u) => write!(f, "{}", u),
        }
    }
}

/// A Rust type that a model can produce.
///
/// Ties each concrete type to its [`ValueKind`] so typed requests can be
/// checked against a model's declared output before converting.
pub trait ModelValueType: Sized + Clone + Send + Sync + 'static {
    const KIND: ValueKind;

    fn into_value(self) -> ModelValue;

    fn from_value(value: ModelValue) -> Option<Self>;
}

macro_rules! model_value_type {
    ($ty:ty, $variant:ident) => {
        impl ModelValueType for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            fn into_value(self) -> ModelValue {
                ModelValue::$variant(self)
            }

            fn from_value(value: ModelValue) -> Option<Self> {
                match value {
                    ModelValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for ModelValue {
            fn from(v: $ty) -> Self {
                ModelValue::$variant(v)
            }
        }
    };
}

model_value_type!(bool, Boolean);
model_value_type!(i16, Short);
model_value_type!(i32, Integer);
model_value_type!(i64, Long);
model_value_type!(f32, Float);
model_value_type!(f64, Double);
model_value_type!(NaiveDateTime, DateTime);
model_value_type!(String, String);
model_value_type!(Uri, Uri);
model_value_type!(Url, Url);

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
