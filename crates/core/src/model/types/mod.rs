// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leaf model types.
//!
//! Each module owns the grammar statics and `build` functions for one family
//! of keywords. Builders have the registry's constructor signature so they
//! can be stored directly in a [`ModelTypeEntry`](crate::registry::ModelTypeEntry).

pub mod boolean;
pub mod catalog;
pub mod cron;
pub mod datetime;
pub mod list;
pub mod numeric;
pub mod regexp;
pub mod spel;
pub mod text;
pub mod uri;

use crate::error::ModelError;

/// Converter for string-typed models: the raw value, unchanged.
pub(crate) fn identity(raw: &str) -> Result<String, ModelError> {
    Ok(raw.to_string())
}
