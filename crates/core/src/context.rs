// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only side table available to validators during a validation call.

use std::collections::HashMap;

/// Other variables of the job being validated, by name.
///
/// Built by the caller for one validation call and only read by validators
/// that reference sibling variables (expression models).
#[derive(Debug, Clone, Default)]
pub struct ModelValidatorContext {
    variables: HashMap<String, String>,
}

impl ModelValidatorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn from_variables(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }
}
