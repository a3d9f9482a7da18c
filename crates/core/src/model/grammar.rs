// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural matching of model strings.

use crate::error::ModelError;
use regex::Regex;

/// A model type's grammar: an anchored pattern plus the human-readable form
/// quoted in syntax failures.
#[derive(Debug)]
pub struct Grammar {
    regex: Regex,
    description: &'static str,
}

impl Grammar {
    pub fn compile(pattern: &str, description: &'static str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            description,
        })
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn matches(&self, model: &str) -> bool {
        self.regex.is_match(model)
    }

    /// Match `model` and extract its parameter groups.
    pub fn parse<'m>(&self, model: &'m str) -> Result<Params<'m>, ModelError> {
        let caps = self
            .regex
            .captures(model)
            .ok_or_else(|| ModelError::grammar(model, self.description))?;
        let groups = caps
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str()))
            .collect();
        Ok(Params {
            model,
            description: self.description,
            groups,
        })
    }
}

/// Parameter groups captured from a model string, numbered from 1.
#[derive(Debug, Clone)]
pub struct Params<'m> {
    model: &'m str,
    description: &'static str,
    groups: Vec<Option<&'m str>>,
}

impl<'m> Params<'m> {
    pub fn model(&self) -> &'m str {
        self.model
    }

    pub fn get(&self, index: usize) -> Option<&'m str> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i).copied().flatten())
    }

    /// A group that must be present and non-blank.
    pub fn require(&self, index: usize) -> Result<&'m str, ModelError> {
        match self.get(index) {
            Some(s) if !s.trim().is_empty() => Ok(s),
            _ => Err(ModelError::grammar(self.model, self.description)),
        }
    }
}

/// Declare a lazily compiled grammar static.
macro_rules! static_grammar {
    ($vis:vis $name:ident = $pattern:expr, $description:expr) => {
        #[allow(clippy::expect_used)]
        $vis static $name: std::sync::LazyLock<$crate::model::Grammar> =
            std::sync::LazyLock::new(|| {
                $crate::model::Grammar::compile($pattern, $description)
                    .expect("constant regex pattern is valid")
            });
    };
}
pub(crate) use static_grammar;

/// Split a comma-separated parameter list, trimming each entry.
pub fn split_params(s: &str) -> Vec<&str> {
    s.split(',').map(str::trim).collect()
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
