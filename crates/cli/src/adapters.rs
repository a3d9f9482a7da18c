// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine factory for CLI commands

use crate::error::CliError;
use clap::Args;
use std::path::PathBuf;
use varmodel_adapters::{DirDataSpace, TracedCatalog, TracedDataSpace, TracedFetcher};
use varmodel_core::{EngineConfig, ModelEngine, NoOpCatalog, NoOpDataSpace, UrlModelFetcher};

/// Options shared by every command that builds an engine
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory backing USER_FILE models
    #[arg(long, global = true)]
    pub user_space: Option<PathBuf>,

    /// Directory backing GLOBAL_FILE models
    #[arg(long, global = true)]
    pub global_space: Option<PathBuf>,
}

/// Create an engine with traced production adapters
pub fn make_engine(args: &EngineArgs) -> Result<ModelEngine, CliError> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path).map_err(|e| CliError::unreadable_file(path, e))?,
        None => EngineConfig::default(),
    };
    tracing::debug!(?config, "engine configuration");

    let fetcher = TracedFetcher::new(UrlModelFetcher::new(config.fetch_timeout));
    let builder = ModelEngine::builder()
        .with_catalog(TracedCatalog::new(NoOpCatalog))
        .with_fetcher(fetcher);

    let builder = if args.user_space.is_none() && args.global_space.is_none() {
        builder.with_data_space(TracedDataSpace::new(NoOpDataSpace))
    } else {
        builder.with_data_space(TracedDataSpace::new(data_space(args)?))
    };

    Ok(builder.with_config(config).build())
}

fn data_space(args: &EngineArgs) -> Result<DirDataSpace, CliError> {
    let mut space = DirDataSpace::new();
    if let Some(root) = &args.user_space {
        space = space
            .with_user_root(root)
            .map_err(|e| CliError::unreadable_file(root, e))?;
    }
    if let Some(root) = &args.global_space {
        space = space
            .with_global_root(root)
            .map_err(|e| CliError::unreadable_file(root, e))?;
    }
    Ok(space)
}
