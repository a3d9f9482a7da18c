// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `CATALOG_OBJECT` and `CATALOG_OBJECT(kind[,contentType[,bucket[,object]]])`

use super::identity;
use crate::adapters::{CatalogAdapter, CatalogObjectRef, CatalogQuery};
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::{split_params, static_grammar};
use crate::model::{BaseParserValidator, ParserValidator, Validator};
use std::sync::Arc;

static_grammar!(
    pub(crate) GRAMMAR = r"(?i)^CATALOG_OBJECT(?:\((.*)\))?$",
    "CATALOG_OBJECT or CATALOG_OBJECT(kind,contentType,bucket,object)"
);

const MAX_PARAMS: usize = 4;

/// Build the catalog filters from the parenthesised parameters.
///
/// Parameters are positional; empty ones leave that filter unset.
pub fn parse_query(args: Option<&str>) -> Result<CatalogQuery, String> {
    let Some(args) = args else {
        return Ok(CatalogQuery::default());
    };
    let params = split_params(args);
    if params.len() > MAX_PARAMS {
        return Err(format!(
            "at most {} parameters are allowed, found {}",
            MAX_PARAMS,
            params.len()
        ));
    }
    let param = |i: usize| {
        params
            .get(i)
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string())
    };
    Ok(CatalogQuery {
        kind: param(0),
        content_type: param(1),
        bucket: param(2),
        object_name: param(3),
    })
}

/// Checks `bucket/object[/revision]` values against the catalog
pub struct CatalogObjectValidator {
    query: CatalogQuery,
    catalog: Arc<dyn CatalogAdapter>,
}

impl CatalogObjectValidator {
    pub fn new(query: CatalogQuery, catalog: Arc<dyn CatalogAdapter>) -> Self {
        Self { query, catalog }
    }
}

impl Validator<String> for CatalogObjectValidator {
    fn validate(
        &self,
        value: String,
        _context: Option<&ModelValidatorContext>,
    ) -> Result<String, ModelError> {
        let object = match CatalogObjectRef::parse(&value) {
            Ok(object) => object,
            Err(reason) => return Err(ModelError::validation(value, reason)),
        };
        match self.catalog.check(&self.query, &object) {
            Ok(()) => Ok(value),
            Err(e) => Err(ModelError::validation(value, e.to_string())),
        }
    }
}

pub(crate) fn build(
    ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let params = GRAMMAR.parse(model)?;
    let query = parse_query(params.get(1)).map_err(|reason| ModelError::syntax(model, reason))?;
    let validator = CatalogObjectValidator::new(query, ctx.adapters().catalog.clone());
    Ok(BaseParserValidator::new(model, identity, validator).boxed())
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
