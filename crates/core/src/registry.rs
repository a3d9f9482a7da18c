// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Model type registry.
//!
//! Maps case-insensitive keywords to the grammar, output kind and
//! constructor of each model type. A registry is immutable once built;
//! engines own one and share it between clones.

use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::types::{boolean, catalog, cron, datetime, list, numeric, regexp, spel, text, uri};
use crate::model::{from_url, optional, ParserValidator};
use crate::value::ValueKind;
use std::collections::BTreeMap;
use std::fmt;

/// Constructor stored in the registry
pub type BuildFn = fn(&BuildContext<'_>, &str) -> Result<Box<dyn ParserValidator>, ModelError>;

/// One registered model type
#[derive(Clone)]
pub struct ModelTypeEntry {
    keyword: String,
    output: Option<ValueKind>,
    grammar: String,
    build: BuildFn,
}

impl ModelTypeEntry {
    /// `output` is `None` for wrappers whose output depends on the wrapped model.
    pub fn new(
        keyword: impl Into<String>,
        output: Option<ValueKind>,
        grammar: impl Into<String>,
        build: BuildFn,
    ) -> Self {
        Self {
            keyword: keyword.into().to_ascii_uppercase(),
            output,
            grammar: grammar.into(),
            build,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn output(&self) -> Option<ValueKind> {
        self.output
    }

    pub fn grammar(&self) -> &str {
        &self.grammar
    }

    pub fn build(
        &self,
        ctx: &BuildContext<'_>,
        model: &str,
    ) -> Result<Box<dyn ParserValidator>, ModelError> {
        (self.build)(ctx, model)
    }
}

impl fmt::Debug for ModelTypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelTypeEntry")
            .field("keyword", &self.keyword)
            .field("output", &self.output)
            .field("grammar", &self.grammar)
            .finish_non_exhaustive()
    }
}

/// The built-in model types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    Boolean,
    Cron,
    Short,
    Integer,
    Long,
    Float,
    Double,
    DateTime,
    List,
    Regexp,
    NotEmpty,
    Spel,
    Spel2,
    Uri,
    Url,
    CatalogObject,
    GlobalFile,
    UserFile,
    Hidden,
    Credential,
    Json,
    Optional,
    ModelFromUrl,
}

impl ModelType {
    pub const ALL: [ModelType; 23] = [
        ModelType::Boolean,
        ModelType::Cron,
        ModelType::Short,
        ModelType::Integer,
        ModelType::Long,
        ModelType::Float,
        ModelType::Double,
        ModelType::DateTime,
        ModelType::List,
        ModelType::Regexp,
        ModelType::NotEmpty,
        ModelType::Spel,
        ModelType::Spel2,
        ModelType::Uri,
        ModelType::Url,
        ModelType::CatalogObject,
        ModelType::GlobalFile,
        ModelType::UserFile,
        ModelType::Hidden,
        ModelType::Credential,
        ModelType::Json,
        ModelType::Optional,
        ModelType::ModelFromUrl,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            ModelType::Boolean => "BOOLEAN",
            ModelType::Cron => "CRON",
            ModelType::Short => "SHORT",
            ModelType::Integer => "INTEGER",
            ModelType::Long => "LONG",
            ModelType::Float => "FLOAT",
            ModelType::Double => "DOUBLE",
            ModelType::DateTime => "DATETIME",
            ModelType::List => "LIST",
            ModelType::Regexp => "REGEXP",
            ModelType::NotEmpty => "NOT_EMPTY",
            ModelType::Spel => "SPEL",
            ModelType::Spel2 => "SPEL2",
            ModelType::Uri => "URI",
            ModelType::Url => "URL",
            ModelType::CatalogObject => "CATALOG_OBJECT",
            ModelType::GlobalFile => "GLOBAL_FILE",
            ModelType::UserFile => "USER_FILE",
            ModelType::Hidden => "HIDDEN",
            ModelType::Credential => "CREDENTIAL",
            ModelType::Json => "JSON",
            ModelType::Optional => "OPTIONAL",
            ModelType::ModelFromUrl => from_url::KEYWORD,
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Registry entry for this type
    pub fn entry(self) -> ModelTypeEntry {
        use ValueKind as K;
        let entry = |output: Option<ValueKind>, grammar: &str, build: BuildFn| {
            ModelTypeEntry::new(self.keyword(), output, grammar, build)
        };
        match self {
            ModelType::Boolean => entry(Some(K::Boolean), boolean::GRAMMAR.description(), boolean::build),
            ModelType::Cron => entry(Some(K::String), cron::GRAMMAR.description(), cron::build),
            ModelType::Short => entry(Some(K::Short), numeric::SHORT.description(), numeric::build::<i16>),
            ModelType::Integer => entry(Some(K::Integer), numeric::INTEGER.description(), numeric::build::<i32>),
            ModelType::Long => entry(Some(K::Long), numeric::LONG.description(), numeric::build::<i64>),
            ModelType::Float => entry(Some(K::Float), numeric::FLOAT.description(), numeric::build::<f32>),
            ModelType::Double => entry(Some(K::Double), numeric::DOUBLE.description(), numeric::build::<f64>),
            ModelType::DateTime => entry(Some(K::DateTime), datetime::GRAMMAR.description(), datetime::build),
            ModelType::List => entry(Some(K::String), list::GRAMMAR.description(), list::build),
            ModelType::Regexp => entry(Some(K::String), regexp::GRAMMAR.description(), regexp::build),
            ModelType::NotEmpty => entry(Some(K::String), text::NOT_EMPTY.description(), text::build_not_empty),
            ModelType::Spel => entry(Some(K::String), spel::SPEL.description(), spel::build_spel),
            ModelType::Spel2 => entry(Some(K::String), spel::SPEL2.description(), spel::build_spel2),
            ModelType::Uri => entry(Some(K::Uri), uri::URI.description(), uri::build_uri),
            ModelType::Url => entry(Some(K::Url), uri::URL.description(), uri::build_url),
            ModelType::CatalogObject => entry(Some(K::String), catalog::GRAMMAR.description(), catalog::build),
            ModelType::GlobalFile => entry(Some(K::Uri), uri::GLOBAL_FILE.description(), uri::build_global_file),
            ModelType::UserFile => entry(Some(K::Uri), uri::USER_FILE.description(), uri::build_user_file),
            ModelType::Hidden => entry(Some(K::String), text::HIDDEN.description(), text::build_hidden),
            ModelType::Credential => entry(Some(K::String), text::CREDENTIAL.description(), text::build_credential),
            ModelType::Json => entry(Some(K::String), text::JSON.description(), text::build_json),
            ModelType::Optional => entry(None, optional::GRAMMAR, optional::build),
            ModelType::ModelFromUrl => entry(None, from_url::GRAMMAR.description(), from_url::build),
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Immutable keyword → entry table
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: BTreeMap<String, ModelTypeEntry>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModelRegistry {
    /// Registry holding every built-in type
    pub fn builtin() -> Self {
        Self::builder().with_builtins().build()
    }

    /// Start from an empty registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn resolve(&self, keyword: &str) -> Option<&ModelTypeEntry> {
        self.entries.get(&keyword.to_ascii_uppercase())
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.resolve(keyword).is_some()
    }

    /// Entries in keyword order
    pub fn entries(&self) -> impl Iterator<Item = &ModelTypeEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assembles a [`ModelRegistry`]; later registrations replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<String, ModelTypeEntry>,
}

impl RegistryBuilder {
    pub fn with_builtins(self) -> Self {
        ModelType::ALL
            .into_iter()
            .fold(self, |builder, t| builder.with_type(t))
    }

    pub fn with_type(self, model_type: ModelType) -> Self {
        self.register(model_type.entry())
    }

    pub fn register(mut self, entry: ModelTypeEntry) -> Self {
        self.entries.insert(entry.keyword.clone(), entry);
        self
    }

    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
