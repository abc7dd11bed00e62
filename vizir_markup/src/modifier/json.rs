// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON shapes shared by the modifier descriptors.

use core::fmt;
use core::marker::PhantomData;

use chrono::{DateTime, Utc};
use kurbo::{Cap, Join, Size, Stroke};
use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};
use vizir_charts::{
    FillStyle, Font, FontWeight, OverflowBoundary, OverflowStrategy, PlotDimensionScaleRange,
    ScaleDomain, ScaleType, TextStyle,
};

use crate::attribute::{AttributeValue, normalize_key};
use crate::plottable::parse_date;

/// A value spelled as a string and decoded with its [`AttributeValue`] impl.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Named<T>(pub(crate) T);

impl<'de, T: AttributeValue> Deserialize<'de> for Named<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(NamedVisitor(PhantomData))
    }
}

struct NamedVisitor<T>(PhantomData<T>);

impl<T: AttributeValue> Visitor<'_> for NamedVisitor<T> {
    type Value = Named<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} string", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Named<T>, E> {
        T::parse(v).map(Named).map_err(E::custom)
    }
}

/// Unwraps an optional [`Named`].
pub(crate) fn named<T>(value: Option<Named<T>>) -> Option<T> {
    value.map(|Named(inner)| inner)
}

/// A stroke: a bare line width, or a full stroke style object.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonStroke {
    Width(f64),
    Style(JsonStrokeStyle),
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct JsonStrokeStyle {
    #[serde(default = "unit_width", alias = "lineWidth")]
    line_width: f64,
    #[serde(default, alias = "lineCap")]
    line_cap: Option<Named<Cap>>,
    #[serde(default, alias = "lineJoin")]
    line_join: Option<Named<Join>>,
    #[serde(default, alias = "miterLimit")]
    miter_limit: Option<f64>,
    #[serde(default)]
    dash: Vec<f64>,
    #[serde(default, alias = "dashPhase")]
    dash_phase: f64,
}

fn unit_width() -> f64 {
    1.0
}

impl From<JsonStroke> for Stroke {
    fn from(stroke: JsonStroke) -> Self {
        match stroke {
            JsonStroke::Width(width) => Self::new(width),
            JsonStroke::Style(style) => {
                let mut stroke = Self::new(style.line_width);
                if let Some(Named(cap)) = style.line_cap {
                    stroke = stroke.with_caps(cap);
                }
                if let Some(Named(join)) = style.line_join {
                    stroke = stroke.with_join(join);
                }
                if let Some(limit) = style.miter_limit {
                    stroke = stroke.with_miter_limit(limit);
                }
                if !style.dash.is_empty() {
                    stroke = stroke.with_dashes(style.dash_phase, style.dash);
                }
                stroke
            }
        }
    }
}

/// A size: `[width, height]` or `{ "width": .., "height": .. }`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonSize {
    Pair([f64; 2]),
    Object { width: f64, height: f64 },
}

impl From<JsonSize> for Size {
    fn from(size: JsonSize) -> Self {
        match size {
            JsonSize::Pair([width, height]) | JsonSize::Object { width, height } => {
                Self::new(width, height)
            }
        }
    }
}

/// A fill style: `{ "eo_fill": false, "antialiased": true }`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub(crate) struct JsonFillStyle {
    #[serde(alias = "eoFill")]
    eo_fill: bool,
    antialiased: bool,
}

impl Default for JsonFillStyle {
    fn default() -> Self {
        let style = FillStyle::default();
        Self {
            eo_fill: style.eo_fill,
            antialiased: style.antialiased,
        }
    }
}

impl From<JsonFillStyle> for FillStyle {
    fn from(style: JsonFillStyle) -> Self {
        Self {
            eo_fill: style.eo_fill,
            antialiased: style.antialiased,
        }
    }
}

/// A font: a text style name, `{ "name", "size" }`, or `{ "size", "weight"? }`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonFont {
    Style(Named<TextStyle>),
    Custom {
        name: String,
        size: f64,
    },
    System {
        size: f64,
        #[serde(default)]
        weight: Option<Named<FontWeight>>,
    },
}

impl From<JsonFont> for Font {
    fn from(font: JsonFont) -> Self {
        match font {
            JsonFont::Style(Named(style)) => Self::Style(style),
            JsonFont::Custom { name, size } => Self::Custom { name, size },
            JsonFont::System { size, weight } => Self::System {
                size,
                weight: named(weight),
            },
        }
    }
}

/// An annotation overflow strategy: a name, or `["fit", boundary]`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(try_from = "RawOverflowStrategy")]
pub(crate) struct JsonOverflowStrategy(pub(crate) OverflowStrategy);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOverflowStrategy {
    Name(String),
    FitTo(String, Named<OverflowBoundary>),
}

impl TryFrom<RawOverflowStrategy> for JsonOverflowStrategy {
    type Error = String;

    fn try_from(raw: RawOverflowStrategy) -> Result<Self, Self::Error> {
        let strategy = match raw {
            RawOverflowStrategy::Name(name) => match normalize_key(&name).as_str() {
                "automatic" => OverflowStrategy::Automatic,
                "disabled" => OverflowStrategy::Disabled,
                "fit" => OverflowStrategy::Fit,
                "pad_scale" => OverflowStrategy::PadScale,
                _ => return Err(format!("unknown overflow strategy `{name}`")),
            },
            RawOverflowStrategy::FitTo(name, Named(boundary)) if normalize_key(&name) == "fit" => {
                OverflowStrategy::FitTo(boundary)
            }
            RawOverflowStrategy::FitTo(name, _) => {
                return Err(format!("unknown overflow strategy `{name}`"));
            }
        };
        Ok(Self(strategy))
    }
}

/// A date in JSON, in any form accepted by [`parse_date`].
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(try_from = "String")]
pub(crate) struct JsonDate(DateTime<Utc>);

impl TryFrom<String> for JsonDate {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        parse_date(&raw)
            .map(Self)
            .ok_or_else(|| format!("invalid date `{raw}`"))
    }
}

/// A scale domain, tagged by `type`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum JsonDomain {
    Automatic {
        #[serde(default, alias = "includesZero")]
        includes_zero: Option<bool>,
        #[serde(default)]
        reversed: Option<bool>,
    },
    #[serde(alias = "numericRange")]
    NumericRange {
        #[serde(alias = "lowerBound")]
        lower_bound: f64,
        #[serde(alias = "upperBound")]
        upper_bound: f64,
    },
    #[serde(alias = "dateRange")]
    DateRange {
        #[serde(alias = "lowerBound")]
        lower_bound: JsonDate,
        #[serde(alias = "upperBound")]
        upper_bound: JsonDate,
    },
    Values {
        values: Vec<String>,
    },
}

impl From<JsonDomain> for ScaleDomain {
    fn from(domain: JsonDomain) -> Self {
        match domain {
            JsonDomain::Automatic {
                includes_zero,
                reversed,
            } => Self::Automatic {
                includes_zero,
                reversed,
            },
            JsonDomain::NumericRange {
                lower_bound,
                upper_bound,
            } => Self::NumericRange {
                lower: lower_bound,
                upper: upper_bound,
            },
            JsonDomain::DateRange {
                lower_bound,
                upper_bound,
            } => Self::DateRange {
                lower: lower_bound.0,
                upper: upper_bound.0,
            },
            JsonDomain::Values { values } => Self::Values(values),
        }
    }
}

/// A scale type: a name, or `["power", exponent]` / `["symmetric_log", slope]`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(try_from = "RawScaleType")]
pub(crate) struct JsonScaleType(pub(crate) ScaleType);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScaleType {
    Name(String),
    Parameterized(String, f64),
}

impl TryFrom<RawScaleType> for JsonScaleType {
    type Error = String;

    fn try_from(raw: RawScaleType) -> Result<Self, Self::Error> {
        let scale = match raw {
            RawScaleType::Name(name) => match normalize_key(&name).as_str() {
                "linear" => ScaleType::Linear,
                "log" => ScaleType::Log,
                "date" => ScaleType::Date,
                "category" => ScaleType::Category,
                "square_root" => ScaleType::SquareRoot,
                "symmetric_log" => ScaleType::SymmetricLog {
                    slope_at_zero: None,
                },
                _ => return Err(format!("unknown scale type `{name}`")),
            },
            RawScaleType::Parameterized(name, value) => match normalize_key(&name).as_str() {
                "power" => ScaleType::Power { exponent: value },
                "symmetric_log" => ScaleType::SymmetricLog {
                    slope_at_zero: Some(value),
                },
                _ => return Err(format!("unknown parameterized scale type `{name}`")),
            },
        };
        Ok(Self(scale))
    }
}

/// A scale range: `{ "padding" }` or `{ "start_padding"?, "end_padding"? }`.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct JsonRange {
    padding: Option<f64>,
    #[serde(alias = "startPadding")]
    start_padding: Option<f64>,
    #[serde(alias = "endPadding")]
    end_padding: Option<f64>,
}

impl From<JsonRange> for PlotDimensionScaleRange {
    fn from(range: JsonRange) -> Self {
        match range {
            JsonRange {
                padding: Some(padding),
                ..
            } => Self::Padding(padding),
            JsonRange {
                start_padding: None,
                end_padding: None,
                ..
            } => Self::PlotDimension,
            JsonRange {
                start_padding,
                end_padding,
                ..
            } => Self::StartEndPadding {
                start: start_padding,
                end: end_padding,
            },
        }
    }
}
