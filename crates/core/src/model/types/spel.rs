// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expression predicates: `SPEL(expr)` and `SPEL2(name,expr)`.
//!
//! Expressions use the Jinja expression language. The value under test is
//! bound as `value` (or under the name given to `SPEL2`), the job's other
//! variables are bound by name and as the `variables` map. `#name` is
//! accepted as a reference to `name` so existing models keep working:
//!
//! ```text
//! SPEL(#value == 'prod' or variables['force'] == 'true')
//! SPEL2(threshold, threshold|int > 10)
//! ```

use super::identity;
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::static_grammar;
use crate::model::{BaseParserValidator, ParserValidator, Validator};
use minijinja::value::{Value, ValueKind};
use minijinja::Environment;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static_grammar!(pub(crate) SPEL = r"(?i)^SPEL\((.+)\)$", "SPEL(expression)");
static_grammar!(
    pub(crate) SPEL2 = r"(?i)^SPEL2\(\s*([A-Za-z_]\w*)\s*,(.+)\)$",
    "SPEL2(name,expression)"
);

static ENV: LazyLock<Environment<'static>> = LazyLock::new(Environment::new);

/// Drop the `#` sigil from variable references outside string literals.
pub fn translate_expression(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    let mut quote: Option<char> = None;
    let mut chars = expr.chars().peekable();
    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
                out.push(c);
            }
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                out.push(c);
            }
            None if c == '#' && chars.peek().is_some_and(|n| n.is_alphabetic() || *n == '_') => {}
            None => out.push(c),
        }
    }
    out
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Accepts values for which the expression evaluates to `true`.
#[derive(Debug, Clone)]
pub struct ExpressionValidator {
    binding: String,
    expression: String,
}

impl ExpressionValidator {
    /// Compile-check `expression`; `binding` names the value under test.
    pub fn new(binding: &str, expression: &str) -> Result<Self, minijinja::Error> {
        let expression = translate_expression(expression.trim());
        ENV.compile_expression(&expression)?;
        Ok(Self {
            binding: binding.to_string(),
            expression,
        })
    }

    fn evaluate(
        &self,
        value: &str,
        context: Option<&ModelValidatorContext>,
    ) -> Result<Value, minijinja::Error> {
        let mut root: BTreeMap<String, Value> = BTreeMap::new();
        if let Some(context) = context {
            for (name, v) in context.variables() {
                if is_identifier(name) {
                    root.insert(name.clone(), Value::from(v.as_str()));
                }
            }
            root.insert(
                "variables".to_string(),
                Value::from_serialize(context.variables()),
            );
        } else {
            root.insert(
                "variables".to_string(),
                Value::from_serialize(BTreeMap::<String, String>::new()),
            );
        }
        root.insert(self.binding.clone(), Value::from(value));
        ENV.compile_expression(&self.expression)?.eval(root)
    }
}

impl Validator<String> for ExpressionValidator {
    fn validate(
        &self,
        value: String,
        context: Option<&ModelValidatorContext>,
    ) -> Result<String, ModelError> {
        match self.evaluate(&value, context) {
            Ok(result) if result.kind() == ValueKind::Bool && result.is_true() => Ok(value),
            Ok(result) => {
                let reason = format!("expression '{}' evaluated to {}", self.expression, result);
                Err(ModelError::validation(value, reason))
            }
            Err(e) => {
                let reason = format!("expression '{}' failed: {}", self.expression, e);
                Err(ModelError::validation(value, reason))
            }
        }
    }
}

fn syntax(model: &str, e: minijinja::Error) -> ModelError {
    ModelError::syntax(model, format!("invalid expression: {}", e))
}

pub(crate) fn build_spel(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let params = SPEL.parse(model)?;
    let validator =
        ExpressionValidator::new("value", params.require(1)?).map_err(|e| syntax(model, e))?;
    Ok(BaseParserValidator::new(model, identity, validator).boxed())
}

pub(crate) fn build_spel2(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let params = SPEL2.parse(model)?;
    let validator = ExpressionValidator::new(params.require(1)?, params.require(2)?)
        .map_err(|e| syntax(model, e))?;
    Ok(BaseParserValidator::new(model, identity, validator).boxed())
}

#[cfg(test)]
#[path = "spel_tests.rs"]
mod tests;
