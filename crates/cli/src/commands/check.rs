// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `varmodel check <file>` - Validate every variable declared in a file
//!
//! The file declares variables as TOML tables:
//!
//! ```toml
//! [variables.retries]
//! value = "3"
//! model = "INTEGER[0,5]"
//! ```
//!
//! Each variable runs on the blocking pool under its own deadline, so a
//! slow `MODEL_FROM_URL` fetch cannot stall the others.

use crate::error::CliError;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::Instant;
use varmodel_core::{
    validate_variable, variables_context, JobVariable, ModelEngine, ModelValue, VariableError,
    VariableErrors,
};

#[derive(Args)]
pub struct CheckArgs {
    /// TOML file declaring [variables.NAME] tables
    pub file: PathBuf,

    /// Deadline for each variable (e.g., "30s", "2m")
    #[arg(long, value_parser = humantime::parse_duration, default_value = "30s")]
    pub timeout: Duration,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VariablesFile {
    #[serde(default)]
    variables: BTreeMap<String, VariableEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VariableEntry {
    value: Option<String>,
    model: Option<String>,
}

/// Parse the variables declared in a TOML document, ordered by name.
pub fn parse_variables(content: &str) -> Result<Vec<JobVariable>, toml::de::Error> {
    let file: VariablesFile = toml::from_str(content)?;
    Ok(file
        .variables
        .into_iter()
        .map(|(name, entry)| JobVariable {
            name,
            value: entry.value,
            model: entry.model,
        })
        .collect())
}

fn load(path: &Path) -> Result<Vec<JobVariable>, CliError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CliError::unreadable_file(path, e))?;
    parse_variables(&content).map_err(|e| {
        CliError::unreadable_file(path, e)
            .with_suggestion("Declare each variable as [variables.NAME] with value and model keys")
    })
}

/// Outcome for one variable
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    Ok { value: Option<ModelValue> },
    Failed { kind: String, error: String },
    TimedOut,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub name: String,
    #[serde(flatten)]
    pub status: Status,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            Status::Ok { value: Some(value) } => write!(f, "ok      {} = {}", self.name, value),
            Status::Ok { value: None } => write!(f, "ok      {} = <none>", self.name),
            Status::Failed { kind, error } => {
                write!(f, "FAILED  {} ({}): {}", self.name, kind, error)
            }
            Status::TimedOut => write!(f, "TIMEOUT {}", self.name),
        }
    }
}

pub async fn check(engine: &ModelEngine, args: CheckArgs) -> Result<()> {
    let variables = load(&args.file)?;
    let context = variables_context(&variables);

    let tasks: Vec<_> = variables
        .into_iter()
        .map(|variable| {
            let deadline = Instant::now() + args.timeout;
            let name = variable.name.clone();
            let engine = engine.clone();
            let context = context.clone();
            let handle = tokio::task::spawn_blocking(move || {
                validate_variable(&engine, &variable, &context)
            });
            (name, deadline, handle)
        })
        .collect();

    let mut reports = Vec::with_capacity(tasks.len());
    let mut failures = Vec::new();
    let mut timed_out = Vec::new();
    for (name, deadline, handle) in tasks {
        let status = match tokio::time::timeout_at(deadline, handle).await {
            Ok(joined) => match joined.with_context(|| format!("validating '{}'", name))? {
                Ok(value) => Status::Ok { value },
                Err(error) => {
                    let status = Status::Failed {
                        kind: error.kind().to_string(),
                        error: error.to_string(),
                    };
                    failures.push(VariableError {
                        name: name.clone(),
                        error,
                    });
                    status
                }
            },
            Err(_) => {
                tracing::warn!(variable = %name, timeout = ?args.timeout, "variable timed out");
                timed_out.push(name.clone());
                Status::TimedOut
            }
        };
        reports.push(Report { name, status });
    }

    output::print_list(&reports, None, OutputFormat::from_json_flag(args.json));

    if !failures.is_empty() {
        return Err(CliError::variables_failed(VariableErrors(failures)).into());
    }
    if let Some(name) = timed_out.first() {
        return Err(CliError::timed_out(name, args.timeout).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
