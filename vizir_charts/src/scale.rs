// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale configuration: domains, ranges, scale types and discrete style scales.

use chrono::{DateTime, Utc};
use hashbrown::HashMap;

use crate::style::ShapeStyle;
use crate::symbol::SymbolShape;

/// The input domain of a scale.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleDomain {
    /// Inferred from data.
    Automatic {
        /// Force the domain to include zero.
        includes_zero: Option<bool>,
        /// Reverse the domain.
        reversed: Option<bool>,
    },
    /// A closed numeric interval.
    NumericRange {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },
    /// A closed date interval.
    DateRange {
        /// Lower bound.
        lower: DateTime<Utc>,
        /// Upper bound.
        upper: DateTime<Utc>,
    },
    /// An explicit list of categorical values.
    Values(Vec<String>),
}

/// How a scale maps its domain onto the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleType {
    /// Linear.
    Linear,
    /// Logarithmic.
    Log,
    /// Time.
    Date,
    /// Discrete categories.
    Category,
    /// Square root.
    SquareRoot,
    /// Power with an exponent.
    Power {
        /// Exponent.
        exponent: f64,
    },
    /// Symmetric log, optionally with a slope at zero.
    SymmetricLog {
        /// Slope at zero.
        slope_at_zero: Option<f64>,
    },
}

/// Padding between the scale range and the plot edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PlotDimensionScaleRange {
    /// The full plot dimension.
    #[default]
    PlotDimension,
    /// Equal padding at both ends.
    Padding(f64),
    /// Padding per end.
    StartEndPadding {
        /// Padding at the start.
        start: Option<f64>,
        /// Padding at the end.
        end: Option<f64>,
    },
}

/// Positional scale configuration for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScaleConfig {
    /// Input domain.
    pub domain: Option<ScaleDomain>,
    /// Output range.
    pub range: Option<PlotDimensionScaleRange>,
    /// Scale type.
    pub scale_type: Option<ScaleType>,
}

/// A discrete scale from categorical values to styles.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleScale<T> {
    /// An explicit value-to-style mapping.
    Mapping {
        /// Domain order.
        domain: Vec<String>,
        /// Style per domain value.
        mapping: HashMap<String, T>,
    },
    /// A domain and/or range; the chart pairs them up.
    Scale {
        /// Input domain.
        domain: Option<ScaleDomain>,
        /// Output styles, cycled over the domain.
        range: Option<Vec<T>>,
        /// Scale type.
        scale_type: Option<ScaleType>,
    },
}

impl<T> StyleScale<T> {
    /// Builds a mapping scale.
    ///
    /// With no explicit domain, the domain is the mapping's keys in sorted order. Domain values
    /// without a mapping entry are dropped.
    pub fn from_mapping(mapping: HashMap<String, T>, domain: Option<Vec<String>>) -> Self {
        let domain = match domain {
            Some(values) => values
                .into_iter()
                .filter(|key| mapping.contains_key(key))
                .collect(),
            None => {
                let mut keys: Vec<String> = mapping.keys().cloned().collect();
                keys.sort();
                keys
            }
        };
        Self::Mapping { domain, mapping }
    }

    /// Returns the style for a domain value, for mapping scales.
    pub fn style_for(&self, key: &str) -> Option<&T> {
        match self {
            Self::Mapping { mapping, .. } => mapping.get(key),
            Self::Scale { .. } => None,
        }
    }
}

/// A scale from categorical values to symbol shapes.
pub type SymbolScale = StyleScale<SymbolShape>;

/// A scale from categorical values to foreground styles.
pub type ForegroundStyleScale = StyleScale<ShapeStyle>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_scale_sorts_keys_without_domain() {
        let mut mapping = HashMap::new();
        mapping.insert("b".to_owned(), SymbolShape::Square);
        mapping.insert("a".to_owned(), SymbolShape::Circle);
        let scale = SymbolScale::from_mapping(mapping, None);
        let StyleScale::Mapping { domain, .. } = &scale else {
            panic!("expected a mapping scale");
        };
        assert_eq!(domain, &["a", "b"]);
        assert_eq!(scale.style_for("a"), Some(&SymbolShape::Circle));
    }

    #[test]
    fn mapping_scale_keeps_domain_order_and_drops_unmapped() {
        let mut mapping = HashMap::new();
        mapping.insert("a".to_owned(), SymbolShape::Circle);
        mapping.insert("b".to_owned(), SymbolShape::Square);
        let domain = vec!["b".to_owned(), "z".to_owned(), "a".to_owned()];
        let scale = SymbolScale::from_mapping(mapping, Some(domain));
        let StyleScale::Mapping { domain, .. } = &scale else {
            panic!("expected a mapping scale");
        };
        assert_eq!(domain, &["b", "a"]);
    }
}
