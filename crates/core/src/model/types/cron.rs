// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `CRON`: 5-field (minute), 6-field (with seconds) and 7-field (with year)
//! cron expressions.
//!
//! Fields accept `*`, values, names (`JAN`, `MON`), ranges (`a-b`), steps
//! (`*/5`, `a-b/2`) and lists. Day-of-month and day-of-week also accept `?`
//! and the `L`, `W` and `#` forms.

use super::identity;
use crate::context::ModelValidatorContext;
use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::static_grammar;
use crate::model::{BaseParserValidator, ParserValidator, Validator};

static_grammar!(pub(crate) GRAMMAR = r"(?i)^CRON$", "CRON");

const MONTHS: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const DAYS: &[&str] = &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Special {
    None,
    DayOfMonth,
    DayOfWeek,
}

#[derive(Debug)]
struct Field {
    name: &'static str,
    min: u32,
    max: u32,
    names: &'static [&'static str],
    /// Value of the first name
    names_base: u32,
    special: Special,
}

const SECOND: Field = Field::plain("second", 0, 59);
const MINUTE: Field = Field::plain("minute", 0, 59);
const HOUR: Field = Field::plain("hour", 0, 23);
const DAY_OF_MONTH: Field = Field {
    special: Special::DayOfMonth,
    ..Field::plain("day-of-month", 1, 31)
};
const MONTH: Field = Field {
    names: MONTHS,
    names_base: 1,
    ..Field::plain("month", 1, 12)
};
const DAY_OF_WEEK: Field = Field {
    names: DAYS,
    names_base: 0,
    special: Special::DayOfWeek,
    ..Field::plain("day-of-week", 0, 7)
};
const YEAR: Field = Field::plain("year", 1970, 2099);

impl Field {
    const fn plain(name: &'static str, min: u32, max: u32) -> Self {
        Self {
            name,
            min,
            max,
            names: &[],
            names_base: 0,
            special: Special::None,
        }
    }

    fn value(&self, token: &str) -> Result<u32, String> {
        if let Some(pos) = self
            .names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(token))
        {
            return Ok(self.names_base + pos as u32);
        }
        let n: u32 = token
            .parse()
            .map_err(|_| format!("invalid {} value '{}'", self.name, token))?;
        if n < self.min || n > self.max {
            return Err(format!(
                "{} value {} is outside {}-{}",
                self.name, n, self.min, self.max
            ));
        }
        Ok(n)
    }

    fn check_special(&self, item: &str) -> Option<Result<(), String>> {
        let upper = item.to_ascii_uppercase();
        match self.special {
            Special::DayOfMonth => {
                if upper == "L" || upper == "LW" {
                    return Some(Ok(()));
                }
                if let Some(offset) = upper.strip_prefix("L-") {
                    return Some(self.value(offset).map(|_| ()));
                }
                if let Some(day) = upper.strip_suffix('W') {
                    return Some(self.value(day).map(|_| ()));
                }
                None
            }
            Special::DayOfWeek => {
                if upper == "L" {
                    return Some(Ok(()));
                }
                if let Some(day) = upper.strip_suffix('L') {
                    return Some(self.value(day).map(|_| ()));
                }
                if let Some((day, nth)) = upper.split_once('#') {
                    let nth_ok = matches!(nth.parse::<u32>(), Ok(1..=5));
                    if !nth_ok {
                        return Some(Err(format!("invalid occurrence '#{}'", nth)));
                    }
                    return Some(self.value(day).map(|_| ()));
                }
                None
            }
            Special::None => None,
        }
    }

    fn check_item(&self, item: &str) -> Result<(), String> {
        if item.is_empty() {
            return Err(format!("empty {} entry", self.name));
        }
        if let Some(result) = self.check_special(item) {
            return result;
        }
        let (base, step) = match item.split_once('/') {
            Some((base, step)) => (base, Some(step)),
            None => (item, None),
        };
        if let Some(step) = step {
            match step.parse::<u32>() {
                Ok(n) if n >= 1 => {}
                _ => return Err(format!("invalid {} step '{}'", self.name, step)),
            }
        }
        match base {
            "*" => Ok(()),
            "?" if self.special != Special::None && step.is_none() => Ok(()),
            _ => match base.split_once('-') {
                Some((from, to)) => {
                    self.value(from)?;
                    self.value(to)?;
                    Ok(())
                }
                None => self.value(base).map(|_| ()),
            },
        }
    }

    fn check(&self, field: &str) -> Result<(), String> {
        field.split(',').try_for_each(|item| self.check_item(item))
    }
}

/// Check a cron expression's shape and field values.
pub fn check_expression(expr: &str) -> Result<(), String> {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    let layout: &[&Field] = match fields.len() {
        5 => &[&MINUTE, &HOUR, &DAY_OF_MONTH, &MONTH, &DAY_OF_WEEK],
        6 => &[&SECOND, &MINUTE, &HOUR, &DAY_OF_MONTH, &MONTH, &DAY_OF_WEEK],
        7 => &[
            &SECOND,
            &MINUTE,
            &HOUR,
            &DAY_OF_MONTH,
            &MONTH,
            &DAY_OF_WEEK,
            &YEAR,
        ],
        n => return Err(format!("expected 5, 6 or 7 fields, found {}", n)),
    };
    layout
        .iter()
        .zip(&fields)
        .try_for_each(|(spec, field)| spec.check(field))
}

/// Accepts well-formed cron expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct CronValidator;

impl Validator<String> for CronValidator {
    fn validate(
        &self,
        value: String,
        _context: Option<&ModelValidatorContext>,
    ) -> Result<String, ModelError> {
        match check_expression(&value) {
            Ok(()) => Ok(value),
            Err(reason) => Err(ModelError::validation(
                value,
                format!("not a cron expression: {}", reason),
            )),
        }
    }
}

pub(crate) fn build(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    GRAMMAR.parse(model)?;
    Ok(BaseParserValidator::new(model, identity, CronValidator).boxed())
}

#[cfg(test)]
#[path = "cron_tests.rs"]
mod tests;
