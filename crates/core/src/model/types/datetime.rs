// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `DATETIME(format)` with an optional range.
//!
//! Formats use the familiar date pattern letters (`yyyy-MM-dd HH:mm:ss`)
//! and are translated to chrono format items when the model is built, so an
//! unknown letter is a syntax failure of the model rather than of the value.

use crate::engine::BuildContext;
use crate::error::ModelError;
use crate::model::grammar::static_grammar;
use crate::model::range::{self, Range};
use crate::model::{BaseParserValidator, Converter, ParserValidator};
use crate::value::ValueKind;
use chrono::format::{self, ParseResult, Parsed, StrftimeItems};
use chrono::NaiveDateTime;

static_grammar!(
    pub(crate) GRAMMAR = &format!(r"(?i)^DATETIME\(([^)]+)\){}$", range::SUFFIX_PATTERN),
    "DATETIME(format), DATETIME(format)[min] or DATETIME(format)[min,max]"
);

/// Translate a date pattern into a chrono format string.
pub fn translate_pattern(pattern: &str) -> Result<String, String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            // Quoted literal; '' is an escaped quote
            let mut j = i + 1;
            if chars.get(j) == Some(&'\'') {
                out.push('\'');
                i = j + 1;
                continue;
            }
            loop {
                match chars.get(j) {
                    None => return Err("unterminated quote".to_string()),
                    Some('\'') if chars.get(j + 1) == Some(&'\'') => {
                        out.push('\'');
                        j += 2;
                    }
                    Some('\'') => break,
                    Some('%') => {
                        out.push_str("%%");
                        j += 1;
                    }
                    Some(&other) => {
                        out.push(other);
                        j += 1;
                    }
                }
            }
            i = j + 1;
            continue;
        }
        if !c.is_ascii_alphabetic() {
            if c == '%' {
                out.push_str("%%");
            } else {
                out.push(c);
            }
            i += 1;
            continue;
        }

        let mut run = 1;
        while chars.get(i + run) == Some(&c) {
            run += 1;
        }
        let item = match (c, run) {
            ('y' | 'u', 2) => "%y",
            ('y' | 'u', _) => "%Y",
            ('M', 1 | 2) => "%m",
            ('M', 3) => "%b",
            ('M', _) => "%B",
            ('d', 1 | 2) => "%d",
            ('D', 1..=3) => "%j",
            ('H', 1 | 2) => "%H",
            ('h', 1 | 2) => "%I",
            ('m', 1 | 2) => "%M",
            ('s', 1 | 2) => "%S",
            ('S', 3) => "%3f",
            ('S', 6) => "%6f",
            ('S', 9) => "%9f",
            ('a', _) => "%p",
            ('E', 1..=3) => "%a",
            ('E', _) => "%A",
            ('Z' | 'X', _) => "%z",
            _ => {
                return Err(format!(
                    "unsupported pattern letters '{}'",
                    c.to_string().repeat(run)
                ))
            }
        };
        out.push_str(item);
        i += run;
    }
    Ok(out)
}

/// Parses date-times with a translated format.
#[derive(Debug, Clone)]
pub struct DateTimeConverter {
    pattern: String,
    format: String,
}

impl DateTimeConverter {
    pub fn new(pattern: &str) -> Result<Self, String> {
        Ok(Self {
            pattern: pattern.to_string(),
            format: translate_pattern(pattern)?,
        })
    }
}

/// Fill the fields a pattern left out the way date patterns do: the date
/// defaults to 1970-01-01, a missing day of month to 1 and the time of day
/// to midnight.
fn fill_defaults(parsed: &mut Parsed) -> ParseResult<()> {
    let has_year = parsed.year().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some()
        || parsed.isoyear_mod_100().is_some();
    if !has_year {
        parsed.set_year(1970)?;
    }
    let has_week_or_ordinal = parsed.ordinal().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();
    if !has_week_or_ordinal {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }
    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        // 12-hour clock without a marker reads as morning
        (None, Some(_)) => parsed.set_ampm(false)?,
        _ => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

impl Converter<NaiveDateTime> for DateTimeConverter {
    fn convert(&self, raw: &str) -> Result<NaiveDateTime, ModelError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, raw.trim(), StrftimeItems::new(&self.format))
            .and_then(|()| fill_defaults(&mut parsed))
            .and_then(|()| parsed.to_naive_datetime_with_offset(0))
            .map_err(|e| {
                ModelError::conversion(
                    raw,
                    ValueKind::DateTime,
                    format!("does not match '{}': {}", self.pattern, e),
                )
            })
    }
}

pub(crate) fn build(
    _ctx: &BuildContext<'_>,
    model: &str,
) -> Result<Box<dyn ParserValidator>, ModelError> {
    let params = GRAMMAR.parse(model)?;
    let pattern = params.require(1)?.trim();
    let converter = DateTimeConverter::new(pattern)
        .map_err(|reason| ModelError::syntax(model, format!("invalid date format: {}", reason)))?;
    let range = Range::parse(model, range::suffix(&params, 2), &converter)?;
    Ok(BaseParserValidator::new(model, converter, range).boxed())
}

#[cfg(test)]
#[path = "datetime_tests.rs"]
mod tests;
