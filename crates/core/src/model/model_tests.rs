// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn positive_long() -> Box<dyn ParserValidator> {
    let convert = |raw: &str| {
        raw.trim()
            .parse::<i64>()
            .map_err(|e| ModelError::conversion(raw, ValueKind::Long, e))
    };
    let positive = |value: i64, _ctx: Option<&ModelValidatorContext>| {
        if value > 0 {
            Ok(value)
        } else {
            Err(ModelError::validation(value, "must be positive"))
        }
    };
    BaseParserValidator::new("  POSITIVE ", convert, FnValidator(positive)).boxed()
}

struct FnValidator<F>(F);

impl<F> Validator<i64> for FnValidator<F>
where
    F: Fn(i64, Option<&ModelValidatorContext>) -> Result<i64, ModelError> + Send + Sync,
{
    fn validate(
        &self,
        value: i64,
        context: Option<&ModelValidatorContext>,
    ) -> Result<i64, ModelError> {
        (self.0)(value, context)
    }
}

#[test]
fn base_trims_model() {
    let pv = positive_long();
    assert_eq!(pv.model(), "POSITIVE");
    assert_eq!(pv.output(), ValueKind::Long);
}

#[test]
fn base_converts_then_validates() {
    let pv = positive_long();
    assert_eq!(
        pv.parse_and_validate(Some("5"), None).unwrap(),
        Some(ModelValue::Long(5))
    );
    assert!(pv.parse_and_validate(Some("x"), None).unwrap_err().is_conversion());
    assert!(pv.parse_and_validate(Some("-5"), None).unwrap_err().is_validation());
}

#[test]
fn base_absent_value_is_conversion_failure() {
    let err = positive_long().parse_and_validate(None, None).unwrap_err();
    assert!(err.is_conversion());
    assert!(err.to_string().contains("long"));
}

#[test]
fn base_rejects_value_of_other_kind() {
    let err = positive_long()
        .validate(Some(ModelValue::String("5".into())), None)
        .unwrap_err();
    assert!(err.is_conversion());
}

#[test]
fn parse_as_returns_typed_value() {
    let pv = positive_long();
    assert_eq!(pv.parse_as::<i64>(Some("7"), None).unwrap(), Some(7));
}

#[test]
fn parse_as_wrong_type_fails_fast() {
    let pv = positive_long();
    let err = pv.parse_as::<String>(Some("7"), None).unwrap_err();
    match err {
        ModelError::Conversion { target, .. } => assert_eq!(target, ValueKind::String),
        other => panic!("expected conversion failure, got {other:?}"),
    }
}

#[test]
fn accept_all_returns_value_unchanged() {
    assert_eq!(AcceptAll.validate("x".to_string(), None).unwrap(), "x");
}
