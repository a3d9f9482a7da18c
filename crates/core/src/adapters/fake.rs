// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake adapters for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{
    CatalogAdapter, CatalogError, CatalogObjectRef, CatalogQuery, DataSpace, DataSpaceAdapter,
    DataSpaceError, FetchError, ModelFetcher,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use url::Url;

/// An object registered in a [`FakeCatalog`]
#[derive(Debug, Clone)]
pub struct FakeCatalogObject {
    pub bucket: String,
    pub name: String,
    pub kind: String,
    pub content_type: String,
    /// Known revisions; empty accepts any revision
    pub revisions: Vec<String>,
}

impl FakeCatalogObject {
    pub fn new(
        bucket: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            name: name.into(),
            kind: kind.into(),
            content_type: content_type.into(),
            revisions: Vec::new(),
        }
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revisions.push(revision.into());
        self
    }
}

/// Recorded catalog check
#[derive(Debug, Clone)]
pub struct CatalogCall {
    pub query: CatalogQuery,
    pub object: CatalogObjectRef,
}

/// In-memory catalog that records every check
#[derive(Clone, Default)]
pub struct FakeCatalog {
    objects: Arc<Mutex<Vec<FakeCatalogObject>>>,
    calls: Arc<Mutex<Vec<CatalogCall>>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, object: FakeCatalogObject) -> Self {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(object);
        self
    }

    /// Get all recorded checks
    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl CatalogAdapter for FakeCatalog {
    fn check(&self, query: &CatalogQuery, object: &CatalogObjectRef) -> Result<(), CatalogError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(CatalogCall {
                query: query.clone(),
                object: object.clone(),
            });

        let objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        let found = objects
            .iter()
            .find(|o| o.bucket == object.bucket && o.name == object.name)
            .ok_or_else(|| CatalogError::NotFound(object.to_string()))?;

        let mismatch = |reason: String| CatalogError::Mismatch {
            object: object.to_string(),
            reason,
        };

        if let Some(revision) = &object.revision {
            if !found.revisions.is_empty() && !found.revisions.contains(revision) {
                return Err(CatalogError::NotFound(object.to_string()));
            }
        }
        if let Some(kind) = &query.kind {
            if !found.kind.to_lowercase().starts_with(&kind.to_lowercase()) {
                return Err(mismatch(format!("kind '{}' is not '{}'", found.kind, kind)));
            }
        }
        if let Some(content_type) = &query.content_type {
            if !eq_ignore_case(&found.content_type, content_type) {
                return Err(mismatch(format!(
                    "content type '{}' is not '{}'",
                    found.content_type, content_type
                )));
            }
        }
        if let Some(bucket) = &query.bucket {
            if &found.bucket != bucket {
                return Err(mismatch(format!("bucket is not '{}'", bucket)));
            }
        }
        if let Some(name) = &query.object_name {
            if !found.name.contains(name.as_str()) {
                return Err(mismatch(format!("name does not contain '{}'", name)));
            }
        }
        Ok(())
    }
}

/// In-memory data spaces
#[derive(Clone, Default)]
pub struct FakeDataSpace {
    files: Arc<Mutex<HashSet<(DataSpace, String)>>>,
}

impl FakeDataSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, space: DataSpace, path: impl Into<String>) -> Self {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert((space, path.into()));
        self
    }
}

impl DataSpaceAdapter for FakeDataSpace {
    fn file_exists(&self, space: DataSpace, path: &str) -> Result<bool, DataSpaceError> {
        let files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        Ok(files.contains(&(space, path.to_string())))
    }
}

/// Model fetcher serving canned responses and recording every URL requested
#[derive(Clone, Default)]
pub struct FakeFetcher {
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, url: &str, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(url.to_string(), body.into());
        self
    }

    /// Get all requested URLs
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ModelFetcher for FakeFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());

        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Http {
                url: url.to_string(),
                message: "404 Not Found".to_string(),
            })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
