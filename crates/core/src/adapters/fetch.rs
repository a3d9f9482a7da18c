// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default model fetcher: local files and blocking HTTP

use super::{FetchError, ModelFetcher};
use std::time::{Duration, Instant};
use url::Url;

/// Fetches `file:` URLs from disk and `http(s):` URLs with a bounded GET
pub struct UrlModelFetcher {
    agent: ureq::Agent,
}

impl UrlModelFetcher {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
        }
    }

    fn fetch_http(&self, url: &Url) -> Result<String, FetchError> {
        let mut response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|e| FetchError::Http {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| FetchError::Http {
                url: url.to_string(),
                message: format!("failed to read response: {}", e),
            })
    }
}

impl ModelFetcher for UrlModelFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let start = Instant::now();
        let result = match url.scheme() {
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| FetchError::InvalidFileUrl(url.to_string()))?;
                std::fs::read_to_string(&path).map_err(|source| FetchError::Io {
                    url: url.to_string(),
                    source,
                })
            }
            "http" | "https" => self.fetch_http(url),
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        };

        tracing::debug!(
            url = %url,
            ok = result.is_ok(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "model fetch"
        );
        result
    }
}
