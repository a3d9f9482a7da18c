// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! varmodel - job variable model checker

mod adapters;
mod commands;
mod error;
mod output;

use adapters::EngineArgs;
use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, types, validate};
use error::CliError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "varmodel",
    version,
    about = "Parse and validate job variable models"
)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one value against a model
    Validate(validate::ValidateArgs),
    /// Validate every variable declared in a TOML file
    Check(check::CheckArgs),
    /// List registered model types
    Types(types::TypesArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let engine = adapters::make_engine(&cli.engine)?;

    match cli.command {
        Commands::Validate(args) => validate::validate(&engine, args)?,
        Commands::Check(args) => check::check(&engine, args).await?,
        Commands::Types(args) => types::types(&engine, args),
    }

    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
