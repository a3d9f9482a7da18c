// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Model engine: registry, configuration and collaborators in one value.
//!
//! ```ignore
//! let engine = ModelEngine::builder()
//!     .with_config(EngineConfig::load(path)?)
//!     .with_catalog(my_catalog)
//!     .build();
//! let value = engine.parse_and_validate("LIST(dev,prod)", Some("dev"), None)?;
//! ```

use crate::adapters::{Adapters, CatalogAdapter, DataSpaceAdapter, ModelFetcher};
use crate::config::EngineConfig;
use crate::context::ModelValidatorContext;
use crate::error::ModelError;
use crate::model::ParserValidator;
use crate::registry::ModelRegistry;
use crate::value::ModelValue;
use std::sync::Arc;
use url::Url;

/// Keyword that a trailing `?` dispatches to
const OPTIONAL: &str = "OPTIONAL";

/// Builds parser/validators from model strings.
///
/// Cheap to clone; clones share the registry and adapters.
#[derive(Debug, Clone)]
pub struct ModelEngine {
    registry: Arc<ModelRegistry>,
    adapters: Adapters,
    config: EngineConfig,
}

impl Default for ModelEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelEngine {
    /// Built-in types, default configuration, no-op catalog and data spaces
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn adapters(&self) -> &Adapters {
        &self.adapters
    }

    fn context(&self) -> BuildContext<'_> {
        BuildContext {
            registry: &self.registry,
            adapters: &self.adapters,
            config: &self.config,
            url_chain: Vec::new(),
        }
    }

    /// Build the parser/validator for `model`, dispatching on its keyword.
    pub fn parser_validator(&self, model: &str) -> Result<Box<dyn ParserValidator>, ModelError> {
        self.context().build(model)
    }

    /// Build `model` as the type registered under `keyword`.
    pub fn build_as(
        &self,
        keyword: &str,
        model: &str,
    ) -> Result<Box<dyn ParserValidator>, ModelError> {
        self.context().build_as(keyword, model)
    }

    /// Build `model` and apply it to `raw` in one call.
    pub fn parse_and_validate(
        &self,
        model: &str,
        raw: Option<&str>,
        context: Option<&ModelValidatorContext>,
    ) -> Result<Option<ModelValue>, ModelError> {
        self.parser_validator(model)?
            .parse_and_validate(raw, context)
    }
}

/// Builder for [`ModelEngine`]
#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    registry: Option<Arc<ModelRegistry>>,
    catalog: Option<Arc<dyn CatalogAdapter>>,
    data_space: Option<Arc<dyn DataSpaceAdapter>>,
    fetcher: Option<Arc<dyn ModelFetcher>>,
}

impl EngineBuilder {
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: impl Into<Arc<ModelRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    pub fn with_catalog(mut self, catalog: impl CatalogAdapter + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    pub fn with_data_space(mut self, data_space: impl DataSpaceAdapter + 'static) -> Self {
        self.data_space = Some(Arc::new(data_space));
        self
    }

    pub fn with_fetcher(mut self, fetcher: impl ModelFetcher + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    /// Replace all three collaborators at once
    pub fn with_adapters(mut self, adapters: Adapters) -> Self {
        self.catalog = Some(adapters.catalog);
        self.data_space = Some(adapters.data_space);
        self.fetcher = Some(adapters.fetcher);
        self
    }

    pub fn build(self) -> ModelEngine {
        let config = self.config.sanitized();
        let defaults = Adapters::with_fetch_timeout(config.fetch_timeout);
        ModelEngine {
            registry: self
                .registry
                .unwrap_or_else(|| Arc::new(ModelRegistry::builtin())),
            adapters: Adapters {
                catalog: self.catalog.unwrap_or(defaults.catalog),
                data_space: self.data_space.unwrap_or(defaults.data_space),
                fetcher: self.fetcher.unwrap_or(defaults.fetcher),
            },
            config,
        }
    }
}

/// State available to model constructors while a model is being built.
///
/// Wrappers build their inner models through [`BuildContext::build`]; the
/// context also tracks the `MODEL_FROM_URL` chain that led to the current
/// model.
pub struct BuildContext<'a> {
    registry: &'a ModelRegistry,
    adapters: &'a Adapters,
    config: &'a EngineConfig,
    url_chain: Vec<Url>,
}

impl<'a> BuildContext<'a> {
    pub fn adapters(&self) -> &'a Adapters {
        self.adapters
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    pub fn registry(&self) -> &'a ModelRegistry {
        self.registry
    }

    /// URLs fetched so far to reach the model being built, outermost first
    pub fn url_chain(&self) -> &[Url] {
        &self.url_chain
    }

    /// Context for a model fetched from `url`
    pub(crate) fn following(&self, url: Url) -> BuildContext<'a> {
        let mut url_chain = self.url_chain.clone();
        url_chain.push(url);
        BuildContext {
            registry: self.registry,
            adapters: self.adapters,
            config: self.config,
            url_chain,
        }
    }

    /// Trim and drop the configured prefix (`PA:` by default).
    fn normalize<'m>(&self, model: &'m str) -> Result<&'m str, ModelError> {
        let mut model = model.trim();
        let prefix = self.config.model_prefix.as_str();
        if !prefix.is_empty()
            && model.len() >= prefix.len()
            && model.is_char_boundary(prefix.len())
            && model[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            model = model[prefix.len()..].trim_start();
        }
        if model.is_empty() {
            return Err(ModelError::syntax(model, "model is empty"));
        }
        Ok(model)
    }

    /// The keyword a model dispatches on: `OPTIONAL` for a trailing `?`,
    /// otherwise its leading identifier.
    pub fn keyword_of<'m>(&self, model: &'m str) -> &'m str {
        let model = self.normalize(model).unwrap_or("");
        if model.ends_with('?') {
            return OPTIONAL;
        }
        let end = model
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(model.len());
        &model[..end]
    }

    /// Build a model through the registry.
    pub fn build(&self, model: &str) -> Result<Box<dyn ParserValidator>, ModelError> {
        let normalized = self.normalize(model)?;
        let keyword = self.keyword_of(normalized);
        if keyword.is_empty() {
            return Err(ModelError::syntax(
                normalized,
                "model must start with a type keyword",
            ));
        }
        let entry = self.registry.resolve(keyword).ok_or_else(|| {
            ModelError::syntax(normalized, format!("unknown model type '{}'", keyword))
        })?;
        tracing::debug!(model = normalized, keyword = entry.keyword(), "building model");
        entry.build(self, normalized)
    }

    /// Build a model as the type registered under `keyword`.
    pub fn build_as(
        &self,
        keyword: &str,
        model: &str,
    ) -> Result<Box<dyn ParserValidator>, ModelError> {
        let normalized = self.normalize(model)?;
        let entry = self.registry.resolve(keyword).ok_or_else(|| {
            ModelError::syntax(normalized, format!("unknown model type '{}'", keyword))
        })?;
        tracing::debug!(model = normalized, keyword = entry.keyword(), "building model");
        entry.build(self, normalized)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
