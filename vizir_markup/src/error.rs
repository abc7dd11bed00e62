// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors and diagnostics.
//!
//! Resolution never fails as a whole. Per-attribute and per-modifier failures are recorded as
//! [`Diagnostic`]s and the offending piece degrades to a documented default (or to nothing).

use core::fmt;

use serde::Serialize;

/// A failure decoding one attribute value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// A required attribute is absent.
    #[error("missing attribute for {ty}")]
    Missing {
        /// Name of the target type.
        ty: &'static str,
    },
    /// The attribute is present but does not parse.
    #[error("invalid value `{value}` for {ty}")]
    Invalid {
        /// The raw value.
        value: String,
        /// Name of the target type.
        ty: &'static str,
    },
}

impl AttributeError {
    /// Builds an [`AttributeError::Invalid`] for `value`.
    pub fn invalid(value: &str, ty: &'static str) -> Self {
        Self::Invalid {
            value: value.to_owned(),
            ty,
        }
    }
}

/// A failure decoding one modifier descriptor.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ModifierError {
    #[error("`modifiers` is not a JSON array of objects: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("modifier has no string `type` discriminant")]
    MissingType,
    #[error("invalid `{kind}` modifier: {source}")]
    Invalid {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{kind}` modifier needs one of: {fields}")]
    MissingField {
        kind: &'static str,
        fields: &'static str,
    },
    #[error("`{kind}` modifier: {message}")]
    Value { kind: &'static str, message: String },
}

/// Errors loading markup from outside the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// The element tree JSON did not parse.
    #[error("failed to parse element tree: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// The content family an element or modifier was resolved in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Chart content (marks, plots).
    ChartContent,
    /// Axis content (`AxisMarks`).
    AxisContent,
    /// Axis marks (gridlines, ticks, labels).
    AxisMark,
    /// The chart root.
    Chart,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ChartContent => "chart content",
            Self::AxisContent => "axis content",
            Self::AxisMark => "axis mark",
            Self::Chart => "chart",
        })
    }
}

/// A non-fatal problem found while resolving markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An element tag is not known to its family; it resolves to an unsupported placeholder.
    #[error("unsupported {family} element `{tag}`")]
    UnsupportedElement {
        /// Family the element was resolved in.
        family: Family,
        /// The element's tag.
        tag: String,
    },
    /// A modifier `type` is not known to its family; the modifier is skipped.
    #[error("unknown {family} modifier `{modifier}`")]
    UnknownModifier {
        /// Family the modifier was decoded in.
        family: Family,
        /// The `type` discriminant.
        modifier: String,
    },
    /// A modifier failed to decode; it is skipped.
    #[error("invalid {family} modifier: {message}")]
    InvalidModifier {
        /// Family the modifier was decoded in.
        family: Family,
        /// What went wrong.
        message: String,
    },
    /// A mark's attributes match none of its supported shapes; it contributes no content.
    #[error("`{tag}` attributes match none of its supported shapes")]
    NoMatchingShape {
        /// The element's tag.
        tag: String,
    },
    /// The two ends of a plottable range have different value types; the range is ignored.
    #[error("`{tag}` range `{attribute}` mixes value types")]
    MixedRangeTypes {
        /// The element's tag.
        tag: String,
        /// Base name of the range, e.g. `x`.
        attribute: String,
    },
    /// An attribute is present but invalid; its default is used.
    #[error("`{tag}` attribute `{attribute}`: {message}")]
    InvalidAttribute {
        /// The element's tag.
        tag: String,
        /// The attribute name.
        attribute: String,
        /// What went wrong.
        message: String,
    },
    /// A modifier references a template key that no child carries.
    #[error("no template children with key `{key}`")]
    MissingTemplate {
        /// The template key.
        key: String,
    },
}
