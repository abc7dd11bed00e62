// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plottable values: the typed inputs a mark reads along one dimension.

use chrono::{DateTime, Utc};

/// One typed data value.
///
/// A value is exactly one of a timestamp, a number, or a string. Marks compare the
/// [`PlottableKind`] of paired values (for example the two ends of a range) rather than the
/// values themselves.
#[derive(Clone, Debug, PartialEq)]
pub enum Plottable {
    /// A point in time (UTC).
    Date(DateTime<Utc>),
    /// A finite number.
    Number(f64),
    /// A categorical value.
    String(String),
}

/// The representation chosen for a [`Plottable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlottableKind {
    /// [`Plottable::Date`].
    Date,
    /// [`Plottable::Number`].
    Number,
    /// [`Plottable::String`].
    String,
}

impl Plottable {
    /// Returns which representation this value uses.
    pub fn kind(&self) -> PlottableKind {
        match self {
            Self::Date(_) => PlottableKind::Date,
            Self::Number(_) => PlottableKind::Number,
            Self::String(_) => PlottableKind::String,
        }
    }

    /// Returns the number, if this is a [`Plottable::Number`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is a [`Plottable::Date`].
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string, if this is a [`Plottable::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for Plottable {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for Plottable {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<String> for Plottable {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Plottable {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// A labelled [`Plottable`], the input a mark reads along one dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottableValue {
    /// Human-readable label (used for axis titles and legends).
    pub label: String,
    /// Typed value.
    pub value: Plottable,
}

impl PlottableValue {
    /// Creates a labelled value.
    pub fn new(label: impl Into<String>, value: impl Into<Plottable>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Returns the kind of the wrapped value.
    pub fn kind(&self) -> PlottableKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn accessors_only_answer_for_their_own_kind() {
        let n = Plottable::from(2.5);
        let s = Plottable::from("Gadgets");
        let d = Plottable::from(Utc.with_ymd_and_hms(2023, 6, 8, 0, 0, 0).unwrap());

        assert_eq!(n.as_f64(), Some(2.5));
        assert_eq!(n.as_str(), None);
        assert_eq!(s.as_str(), Some("Gadgets"));
        assert_eq!(s.as_f64(), None);
        assert!(d.as_date().is_some());
        assert_eq!(d.kind(), PlottableKind::Date);
    }

    #[test]
    fn labelled_values_compare_by_label_and_value() {
        assert_eq!(PlottableValue::new("X", 1.0), PlottableValue::new("X", 1.0));
        assert_ne!(PlottableValue::new("X", 1.0), PlottableValue::new("Y", 1.0));
        assert_ne!(PlottableValue::new("X", 1.0), PlottableValue::new("X", "1"));
    }
}
