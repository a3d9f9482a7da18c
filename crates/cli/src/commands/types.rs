// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `varmodel types` - List the registered model types

use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use varmodel_core::{ModelEngine, ValueKind};

#[derive(Args)]
pub struct TypesArgs {
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct TypeRow {
    pub keyword: String,
    /// None for wrappers whose output depends on the inner model
    pub output: Option<ValueKind>,
    pub grammar: String,
}

impl fmt::Display for TypeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self
            .output
            .map_or_else(|| "-".to_string(), |kind| kind.to_string());
        write!(f, "{:<16} {:<10} {}", self.keyword, output, self.grammar)
    }
}

pub fn rows(engine: &ModelEngine) -> Vec<TypeRow> {
    engine
        .registry()
        .entries()
        .map(|entry| TypeRow {
            keyword: entry.keyword().to_string(),
            output: entry.output(),
            grammar: entry.grammar().to_string(),
        })
        .collect()
}

pub fn types(engine: &ModelEngine, args: TypesArgs) {
    let header = format!("{:<16} {:<10} GRAMMAR", "KEYWORD", "OUTPUT");
    output::print_list(
        &rows(engine),
        Some(&header),
        OutputFormat::from_json_flag(args.json),
    );
}
