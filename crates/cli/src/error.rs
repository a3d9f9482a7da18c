// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error carries:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use std::path::Path;
use varmodel_core::{ModelError, VariableErrors};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures the CLI reports.
impl CliError {
    /// A model failed to build or a value failed to pass it.
    pub fn model_failure(model: &str, error: ModelError) -> Self {
        let err = CliError::new(format!("{} failure: {}", error.kind(), error));
        let err = match &error {
            ModelError::Syntax { .. } => err
                .with_context(format!("'{}' does not match the grammar of its type", model))
                .with_suggestion("List model types and their grammars: varmodel types"),
            ModelError::Conversion { target, .. } => err
                .with_context(format!("The value must be a valid {}", target))
                .with_suggestion("Check the value's format against the model"),
            ModelError::Validation { .. } => err
                .with_context(format!("The value was converted but rejected by '{}'", model)),
        };
        err.with_source(error)
    }

    /// One or more variables of a file failed.
    pub fn variables_failed(errors: VariableErrors) -> Self {
        let mut err = CliError::new(format!("{} variable(s) failed validation", errors.len()));
        for e in errors.errors() {
            err = err.with_context(e.to_string());
        }
        err.with_suggestion("Re-run a single variable with: varmodel validate <MODEL> <VALUE>")
            .with_source(errors)
    }

    /// A variable did not finish within its deadline.
    pub fn timed_out(name: &str, timeout: std::time::Duration) -> Self {
        CliError::new(format!(
            "variable '{}' timed out after {}",
            name,
            humantime::format_duration(timeout)
        ))
        .with_context("A MODEL_FROM_URL fetch or a catalog lookup may be slow")
        .with_suggestion("Raise the deadline with --timeout")
    }

    /// A file given on the command line could not be used.
    pub fn unreadable_file(path: &Path, error: impl std::error::Error + Send + Sync + 'static) -> Self {
        CliError::new(format!("cannot read {}", path.display()))
            .with_context(error.to_string())
            .with_source(error)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
