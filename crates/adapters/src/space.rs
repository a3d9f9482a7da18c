// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Data spaces backed by local directories.
//!
//! Each space maps to one root directory. File references are resolved
//! relative to that root and may not leave it.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use varmodel_core::{DataSpace, DataSpaceAdapter, DataSpaceError};

/// Errors from configuring a space root
#[derive(Debug, Error)]
pub enum SpaceRootError {
    #[error("{space} space root does not exist: {}", path.display())]
    Missing { space: DataSpace, path: PathBuf },
    #[error("{space} space root is not a directory: {}", path.display())]
    NotADirectory { space: DataSpace, path: PathBuf },
}

/// Data space adapter over a user and a global directory
#[derive(Debug, Clone, Default)]
pub struct DirDataSpace {
    user: Option<PathBuf>,
    global: Option<PathBuf>,
}

impl DirDataSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_root(self, root: impl Into<PathBuf>) -> Result<Self, SpaceRootError> {
        let root = checked_root(DataSpace::User, root.into())?;
        Ok(Self {
            user: Some(root),
            ..self
        })
    }

    pub fn with_global_root(self, root: impl Into<PathBuf>) -> Result<Self, SpaceRootError> {
        let root = checked_root(DataSpace::Global, root.into())?;
        Ok(Self {
            global: Some(root),
            ..self
        })
    }

    pub fn root(&self, space: DataSpace) -> Option<&Path> {
        match space {
            DataSpace::User => self.user.as_deref(),
            DataSpace::Global => self.global.as_deref(),
        }
    }

    /// Resolve `path` inside `space`.
    ///
    /// A leading `/` is relative to the space root. Parent components are
    /// rejected rather than normalized.
    pub fn resolve(&self, space: DataSpace, path: &str) -> Result<PathBuf, DataSpaceError> {
        let root = self
            .root(space)
            .ok_or(DataSpaceError::NotConfigured { space })?;
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(DataSpaceError::OutsideSpace {
                space,
                path: path.to_string(),
            });
        }
        Ok(root.join(relative))
    }
}

fn checked_root(space: DataSpace, path: PathBuf) -> Result<PathBuf, SpaceRootError> {
    if !path.exists() {
        return Err(SpaceRootError::Missing { space, path });
    }
    if !path.is_dir() {
        return Err(SpaceRootError::NotADirectory { space, path });
    }
    Ok(path)
}

impl DataSpaceAdapter for DirDataSpace {
    fn file_exists(&self, space: DataSpace, path: &str) -> Result<bool, DataSpaceError> {
        let resolved = self.resolve(space, path)?;
        Ok(resolved.try_exists()? && resolved.is_file())
    }
}

#[cfg(test)]
#[path = "space_tests.rs"]
mod tests;
