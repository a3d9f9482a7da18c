// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use std::time::Instant;
use url::Url;
use varmodel_core::{
    CatalogAdapter, CatalogError, CatalogObjectRef, CatalogQuery, DataSpace, DataSpaceAdapter,
    DataSpaceError, FetchError, ModelFetcher,
};

/// Wrapper that adds tracing to any CatalogAdapter
#[derive(Clone)]
pub struct TracedCatalog<C> {
    inner: C,
}

impl<C> TracedCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: CatalogAdapter> CatalogAdapter for TracedCatalog<C> {
    fn check(&self, query: &CatalogQuery, object: &CatalogObjectRef) -> Result<(), CatalogError> {
        let span = tracing::info_span!("catalog.check", object = %object);
        let _guard = span.enter();

        tracing::debug!(
            kind = query.kind.as_deref(),
            content_type = query.content_type.as_deref(),
            bucket = query.bucket.as_deref(),
            object_name = query.object_name.as_deref(),
            "checking"
        );

        let start = Instant::now();
        let result = self.inner.check(query, object);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(
                elapsed_ms = elapsed.as_millis() as u64,
                "catalog object accepted"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "catalog check failed"
            ),
        }
        result
    }
}

/// Wrapper that adds tracing to any DataSpaceAdapter
#[derive(Clone)]
pub struct TracedDataSpace<D> {
    inner: D,
}

impl<D> TracedDataSpace<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: DataSpaceAdapter> DataSpaceAdapter for TracedDataSpace<D> {
    fn file_exists(&self, space: DataSpace, path: &str) -> Result<bool, DataSpaceError> {
        let span = tracing::info_span!("dataspace.file_exists", %space, path);
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.inner.file_exists(space, path);
        let elapsed = start.elapsed();

        match &result {
            Ok(exists) => tracing::debug!(
                exists,
                elapsed_ms = elapsed.as_millis() as u64,
                "checked"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "file check failed"
            ),
        }
        result
    }
}

/// Wrapper that adds tracing to any ModelFetcher
#[derive(Clone)]
pub struct TracedFetcher<F> {
    inner: F,
}

impl<F> TracedFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: ModelFetcher> ModelFetcher for TracedFetcher<F> {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let span = tracing::info_span!("model.fetch", url = %url);
        let _guard = span.enter();

        tracing::info!(scheme = url.scheme(), "starting");

        let start = Instant::now();
        let result = self.inner.fetch(url);
        let elapsed = start.elapsed();

        match &result {
            Ok(body) => tracing::info!(
                bytes = body.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "model fetched"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "fetch failed"
            ),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
