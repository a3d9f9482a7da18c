// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `varmodel validate <model> [value]` - Apply one model to one value

use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;
use varmodel_core::{ModelEngine, ModelValidatorContext, ModelValue};

#[derive(Args)]
pub struct ValidateArgs {
    /// Model string (e.g., "LONG[0,10]")
    pub model: String,

    /// Raw value; omit to validate an absent value
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Context variables visible to expression models (name=value)
    #[arg(long = "var", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid name=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// A successfully validated value
#[derive(Debug, Serialize)]
pub struct Validated {
    pub model: String,
    pub value: Option<ModelValue>,
}

impl fmt::Display for Validated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "<none>"),
        }
    }
}

pub fn validate(engine: &ModelEngine, args: ValidateArgs) -> Result<()> {
    let context = args
        .vars
        .into_iter()
        .fold(ModelValidatorContext::new(), |ctx, (name, value)| {
            ctx.with_variable(name, value)
        });

    let value = engine
        .parse_and_validate(&args.model, args.value.as_deref(), Some(&context))
        .map_err(|e| CliError::model_failure(&args.model, e))?;

    output::print(
        &Validated {
            model: args.model,
            value,
        },
        OutputFormat::from_json_flag(args.json),
    );
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
