// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! URL indirection: `MODEL_FROM_URL(url)`
//!
//! The model is fetched once, when the parser/validator is built. The first
//! non-empty line of the fetched content is built through the registry and
//! every call is delegated to it.

use super::grammar::static_grammar;
use super::ParserValidator;
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::value::{ModelValue, ValueKind};
use std::time::Instant;
use url::Url;

/// Registry keyword
pub const KEYWORD: &str = "MODEL_FROM_URL";

static_grammar!(pub(crate) GRAMMAR = r"(?i)^MODEL_FROM_URL\((.+)\)$", "MODEL_FROM_URL(url)");

#[derive(Debug)]
pub struct FromUrlParserValidator {
    model: String,
    url: Url,
    parent: Box<dyn ParserValidator>,
}

impl FromUrlParserValidator {
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The model built from the fetched content
    pub fn resolved(&self) -> &dyn ParserValidator {
        self.parent.as_ref()
    }
}

impl ParserValidator for FromUrlParserValidator {
    fn model(&self) -> &str {
        &self.model
    }

    fn output(&self) -> ValueKind {
        self.parent.output()
    }

    fn convert(&self, raw: Option<&str>) -> Result<Option<ModelValue>, ModelError> {
        self.parent.convert(raw)
    }

    fn validate(
        &self,
        value: Option<ModelValue>,
        context: Option<&ModelValidatorContext>,
    ) -> Result<Option<ModelValue>, ModelError> {
        self.parent.validate(value, context)
    }
}

const RECURSIVE: &str = "model received from URL is recursive";

pub(crate) fn build(
    ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let params = GRAMMAR.parse(model)?;
    let location = params.require(1)?.trim();
    let url = Url::parse(location)
        .map_err(|e| ModelError::syntax(model, format!("invalid URL '{}': {}", location, e)))?;
    if ctx.url_chain().contains(&url) || ctx.url_chain().len() >= ctx.config().max_url_depth {
        return Err(ModelError::syntax(model, RECURSIVE));
    }

    let start = Instant::now();
    let content = ctx
        .adapters()
        .fetcher
        .fetch(&url)
        .map_err(|e| ModelError::syntax(model, format!("cannot read model from URL: {}", e)))?;
    tracing::debug!(
        url = %url,
        depth = ctx.url_chain().len() + 1,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "fetched model"
    );

    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| ModelError::syntax(model, "model received from URL is empty"))?;

    let nested = ctx.following(url.clone());
    if nested.url_chain().len() >= ctx.config().max_url_depth
        && nested
            .keyword_of(line.trim_end_matches('?'))
            .eq_ignore_ascii_case(KEYWORD)
    {
        return Err(ModelError::syntax(model, RECURSIVE));
    }
    let parent = nested.build(line)?;

    Ok(Box::new(FromUrlParserValidator {
        model: model.to_string(),
        url,
        parent,
    }))
}

#[cfg(test)]
#[path = "from_url_tests.rs"]
mod tests;
