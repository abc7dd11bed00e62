// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plottable values from attributes and from modifier JSON.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use smallvec::SmallVec;
use vizir_charts::{Plottable, PlottableValue};

use crate::attribute::AttributeValue;
use crate::dom::Element;

/// Parses a timestamp.
///
/// Accepts RFC 3339 with a `T` or space separator, an optional fraction, and `Z` or an offset.
/// A timestamp without an offset is taken as UTC, and a bare `YYYY-MM-DD` date is taken at UTC
/// midnight.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    // Every accepted form starts with a four digit year and a dash.
    if raw.len() < 10 || raw.as_bytes().get(4) != Some(&b'-') {
        return None;
    }
    let normalized = raw.replacen(' ', "T", 1);
    if let Ok(date) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Classifies a raw value: a date if it parses as one, then a finite number, then a string.
pub fn classify(raw: &str) -> Plottable {
    if let Some(date) = parse_date(raw) {
        Plottable::Date(date)
    } else if let Some(number) = raw.parse::<f64>().ok().filter(|n| n.is_finite()) {
        Plottable::Number(number)
    } else {
        Plottable::String(raw.to_owned())
    }
}

/// The attribute spellings accepted for a `snake_case` base name.
///
/// `x_start` is also accepted as `x-start` and `xStart`.
fn spellings(base: &str) -> SmallVec<[String; 3]> {
    let mut out: SmallVec<[String; 3]> = SmallVec::new();
    out.push(base.replace('_', "-"));
    out.push(base.to_owned());
    let mut camel = String::with_capacity(base.len());
    let mut upper = false;
    for ch in base.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            camel.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            camel.push(ch);
        }
    }
    out.push(camel);
    out.dedup();
    out
}

/// Returns the first spelling of `base` present on `element`, with its raw value.
fn find<'a>(element: &'a Element, base: &str) -> Option<(String, &'a str)> {
    spellings(base)
        .into_iter()
        .find_map(|name| element.attribute(&name).map(|value| (name, value)))
}

/// Resolves the plottable value named `base` (`snake_case`, e.g. `x_start`).
///
/// The value is read from `{base}` and the label from `{base}:label` (or `{base}-label`).
/// Returns `None` unless both are present and non-empty.
pub fn resolve_plottable(element: &Element, base: &str) -> Option<PlottableValue> {
    let (name, raw) = find(element, base)?;
    let label = element
        .attribute_ns(&name, "label")
        .or_else(|| element.attribute(&format!("{name}-label")))?;
    if raw.is_empty() || label.is_empty() {
        return None;
    }
    Some(PlottableValue {
        label: label.to_owned(),
        value: classify(raw),
    })
}

/// Reads the raw attribute named `base` as a fixed screen-space coordinate.
pub fn fixed_value(element: &Element, base: &str) -> Option<f64> {
    find(element, base).and_then(|(_, raw)| f64::parse(raw).ok())
}

/// A plottable value in modifier JSON: `{ "label": ..., "value": ... }`.
///
/// String values are tried as dates first; numbers stay numbers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct AnyPlottableValue {
    label: String,
    value: JsonScalar,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
enum JsonScalar {
    Number(f64),
    String(String),
}

impl From<AnyPlottableValue> for PlottableValue {
    fn from(value: AnyPlottableValue) -> Self {
        let plottable = match value.value {
            JsonScalar::Number(number) => Plottable::Number(number),
            JsonScalar::String(raw) => match parse_date(&raw) {
                Some(date) => Plottable::Date(date),
                None => Plottable::String(raw),
            },
        };
        Self {
            label: value.label,
            value: plottable,
        }
    }
}
