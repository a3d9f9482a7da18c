// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator adapters used by model validators
//!
//! The engine only parses model parameters and forwards them; existence
//! checks and remote reads are owned by these adapters:
//!
//! - **CatalogAdapter**: backs `CATALOG_OBJECT`
//! - **DataSpaceAdapter**: backs `USER_FILE` and `GLOBAL_FILE`
//! - **ModelFetcher**: backs `MODEL_FROM_URL`

mod fetch;
mod noop;

pub use fetch::UrlModelFetcher;
pub use noop::{NoOpCatalog, NoOpDataSpace};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CatalogCall, FakeCatalog, FakeCatalogObject, FakeDataSpace, FakeFetcher};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use url::Url;

// =============================================================================
// Catalog
// =============================================================================

/// Filters carried by a `CATALOG_OBJECT(kind,contentType,bucket,object)` model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub kind: Option<String>,
    pub content_type: Option<String>,
    pub bucket: Option<String>,
    pub object_name: Option<String>,
}

/// A `bucket/object[/revision]` reference taken from a variable value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogObjectRef {
    pub bucket: String,
    pub name: String,
    pub revision: Option<String>,
}

impl CatalogObjectRef {
    /// Parse `bucket/object` or `bucket/object/revision`.
    ///
    /// Revisions are commit timestamps and must be all digits.
    pub fn parse(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.trim().split('/').collect();
        let (bucket, name, revision) = match parts.as_slice() {
            [bucket, name] => (*bucket, *name, None),
            [bucket, name, revision] => (*bucket, *name, Some(*revision)),
            _ => {
                return Err(
                    "expected 'bucket/object' or 'bucket/object/revision'".to_string(),
                )
            }
        };
        if bucket.trim().is_empty() {
            return Err("bucket name is empty".to_string());
        }
        if name.trim().is_empty() {
            return Err("object name is empty".to_string());
        }
        if let Some(revision) = revision {
            if revision.is_empty() || !revision.chars().all(|c| c.is_ascii_digit()) {
                return Err(format!("revision '{}' is not a commit time", revision));
            }
        }
        Ok(Self {
            bucket: bucket.to_string(),
            name: name.to_string(),
            revision: revision.map(str::to_string),
        })
    }
}

impl fmt::Display for CatalogObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.name)?;
        if let Some(revision) = &self.revision {
            write!(f, "/{}", revision)?;
        }
        Ok(())
    }
}

/// Errors from catalog lookups
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog object not found: {0}")]
    NotFound(String),
    #[error("catalog object {object} does not match: {reason}")]
    Mismatch { object: String, reason: String },
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Adapter for the catalog service
pub trait CatalogAdapter: Send + Sync {
    /// Check that `object` exists and satisfies the filters in `query`
    fn check(&self, query: &CatalogQuery, object: &CatalogObjectRef) -> Result<(), CatalogError>;
}

// =============================================================================
// Data spaces
// =============================================================================

/// The file space a file reference is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSpace {
    User,
    Global,
}

impl fmt::Display for DataSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSpace::User => write!(f, "user"),
            DataSpace::Global => write!(f, "global"),
        }
    }
}

/// Errors from data space operations
#[derive(Debug, Error)]
pub enum DataSpaceError {
    #[error("path escapes the {space} space: {path}")]
    OutsideSpace { space: DataSpace, path: String },
    #[error("{space} space is not configured")]
    NotConfigured { space: DataSpace },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for user and global file spaces
pub trait DataSpaceAdapter: Send + Sync {
    fn file_exists(&self, space: DataSpace, path: &str) -> Result<bool, DataSpaceError>;
}

// =============================================================================
// Model fetching
// =============================================================================

/// Errors from fetching a remote model
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("not a local file URL: {0}")]
    InvalidFileUrl(String),
    #[error("failed to read {url}: {source}")]
    Io {
        url: String,
        source: std::io::Error,
    },
    #[error("HTTP request to {url} failed: {message}")]
    Http { url: String, message: String },
}

/// Reads the content behind a `MODEL_FROM_URL` location
pub trait ModelFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

// =============================================================================
// Bundle
// =============================================================================

/// The collaborators an engine hands to the validators it builds
#[derive(Clone)]
pub struct Adapters {
    pub catalog: Arc<dyn CatalogAdapter>,
    pub data_space: Arc<dyn DataSpaceAdapter>,
    pub fetcher: Arc<dyn ModelFetcher>,
}

impl Adapters {
    /// No-op catalog and data space, real URL fetching
    pub fn with_fetch_timeout(timeout: Duration) -> Self {
        Self {
            catalog: Arc::new(NoOpCatalog),
            data_space: Arc::new(NoOpDataSpace),
            fetcher: Arc::new(UrlModelFetcher::new(timeout)),
        }
    }
}

impl fmt::Debug for Adapters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapters").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "adapters_tests.rs"]
mod tests;
