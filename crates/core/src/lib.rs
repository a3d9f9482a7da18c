// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! varmodel-core: job variable model parsing and validation
//!
//! This crate provides:
//! - The model grammar and a registry of model types (`LONG[0,10]`,
//!   `LIST(a,b)`, `DATETIME(yyyy-MM-dd)`, `CATALOG_OBJECT`, ...)
//! - Parser/validators that convert raw variable values to typed values
//! - The optional (`?`) and `MODEL_FROM_URL` wrappers
//! - Collaborator traits for catalog, data space and model fetching
//! - Whole-job variable validation

pub mod adapters;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod model;
pub mod registry;
pub mod value;
pub mod variables;

pub use adapters::{
    Adapters, CatalogAdapter, CatalogError, CatalogObjectRef, CatalogQuery, DataSpace,
    DataSpaceAdapter, DataSpaceError, FetchError, ModelFetcher, NoOpCatalog, NoOpDataSpace,
    UrlModelFetcher,
};
pub use config::{ConfigError, EngineConfig};
pub use context::ModelValidatorContext;
pub use engine::{BuildContext, EngineBuilder, ModelEngine};
pub use error::{FailureKind, ModelError};
pub use model::{AcceptAll, BaseParserValidator, Converter, ParserValidator, Validator};
pub use registry::{BuildFn, ModelRegistry, ModelType, ModelTypeEntry, RegistryBuilder};
pub use value::{ModelValue, ModelValueType, Uri, ValueKind};
pub use variables::{
    validate_variable, validate_variables, variables_context, JobVariable, VariableError,
    VariableErrors,
};

#[cfg(any(test, feature = "test-support"))]
pub use adapters::{CatalogCall, FakeCatalog, FakeCatalogObject, FakeDataSpace, FakeFetcher};
