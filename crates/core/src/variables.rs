// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation of a job's variables as a whole.
//!
//! Each variable with a model is validated with every variable's raw value
//! in the context, so expression models can refer to their siblings. All
//! failures are collected rather than stopping at the first.

use crate::context::ModelValidatorContext;
use crate::engine::ModelEngine;
use crate::error::ModelError;
use crate::value::ModelValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A variable declared by a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobVariable {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl JobVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            model: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// A failure attributed to one variable
#[derive(Debug, Clone, PartialEq)]
pub struct VariableError {
    pub name: String,
    pub error: ModelError,
}

impl fmt::Display for VariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "variable '{}': {}", self.name, self.error)
    }
}

/// Every failure found while validating a job's variables
#[derive(Debug, Clone, PartialEq)]
pub struct VariableErrors(pub Vec<VariableError>);

impl VariableErrors {
    pub fn errors(&self) -> &[VariableError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VariableErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} variable(s) failed validation:", self.0.len())?;
        for (i, e) in self.0.iter().enumerate() {
            writeln!(f, "  {}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl std::error::Error for VariableErrors {}

/// Build the context shared by every variable of a job.
pub fn variables_context(variables: &[JobVariable]) -> ModelValidatorContext {
    variables
        .iter()
        .fold(ModelValidatorContext::new(), |ctx, v| {
            ctx.with_variable(&v.name, v.value.clone().unwrap_or_default())
        })
}

/// Validate one variable against its model in `context`.
///
/// Variables without a model pass their raw value through as a string.
pub fn validate_variable(
    engine: &ModelEngine,
    variable: &JobVariable,
    context: &ModelValidatorContext,
) -> Result<Option<ModelValue>, ModelError> {
    match variable.model.as_deref() {
        Some(model) if !model.trim().is_empty() => {
            engine.parse_and_validate(model, variable.value.as_deref(), Some(context))
        }
        _ => Ok(variable.value.clone().map(ModelValue::String)),
    }
}

/// Validate every variable, returning converted values by name.
pub fn validate_variables(
    engine: &ModelEngine,
    variables: &[JobVariable],
) -> Result<BTreeMap<String, Option<ModelValue>>, VariableErrors> {
    let context = variables_context(variables);
    let mut values = BTreeMap::new();
    let mut errors = Vec::new();
    for variable in variables {
        match validate_variable(engine, variable, &context) {
            Ok(value) => {
                values.insert(variable.name.clone(), value);
            }
            Err(error) => errors.push(VariableError {
                name: variable.name.clone(),
                error,
            }),
        }
    }
    tracing::debug!(
        variables = variables.len(),
        failures = errors.len(),
        "validated job variables"
    );
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(VariableErrors(errors))
    }
}

#[cfg(test)]
#[path = "variables_tests.rs"]
mod tests;
