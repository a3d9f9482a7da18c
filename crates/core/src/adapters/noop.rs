// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Accept-all adapters for deployments without a catalog or data spaces

use super::{
    CatalogAdapter, CatalogError, CatalogObjectRef, CatalogQuery, DataSpace, DataSpaceAdapter,
    DataSpaceError,
};

/// Catalog adapter that accepts every well-formed object reference
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCatalog;

impl CatalogAdapter for NoOpCatalog {
    fn check(&self, _query: &CatalogQuery, _object: &CatalogObjectRef) -> Result<(), CatalogError> {
        Ok(())
    }
}

/// Data space adapter that reports every file as present
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDataSpace;

impl DataSpaceAdapter for NoOpDataSpace {
    fn file_exists(&self, _space: DataSpace, _path: &str) -> Result<bool, DataSpaceError> {
        Ok(true)
    }
}
