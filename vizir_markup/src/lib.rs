// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative chart markup, resolved into [`vizir_charts`] content.
//!
//! Input is an [`Element`] tree: tags, string attributes and child nodes, typically produced by
//! a markup parser elsewhere. Resolution turns it into typed chart content:
//! - every attribute string is decoded through [`AttributeValue`];
//! - data attributes (`x`, `y`, `x-start`, `series`, ...) become [`vizir_charts::PlottableValue`]s,
//!   with the value's kind inferred from its spelling (date, then number, then string);
//! - each mark element picks its shape from which data attributes are present;
//! - the `modifiers` attribute, a JSON list of descriptors, wraps the built content.
//!
//! ```
//! use vizir_markup::{Element, ResolveOptions, resolve_chart};
//!
//! let chart = Element::new("Chart").with_child(
//!     Element::new("BarMark")
//!         .with_attribute("x", "Mon")
//!         .with_attribute("x:label", "Day")
//!         .with_attribute("y", "12")
//!         .with_attribute("y:label", "Sales")
//!         .with_attribute("modifiers", r#"[{"type":"opacity","opacity":0.5}]"#),
//! );
//! let resolved = resolve_chart(&chart, &ResolveOptions::default());
//! assert!(resolved.is_clean());
//! assert_eq!(resolved.value.content.marks().len(), 1);
//! ```
//!
//! Resolution never fails as a whole. Problems are collected as [`Diagnostic`]s next to the
//! resolved value, and logged through `tracing` unless
//! [`ResolveOptions::log_diagnostics`] is off.

mod attribute;
mod axis;
mod builder;
mod chart;
mod context;
mod dom;
mod error;
mod marks;
mod modifier;
mod plottable;
mod registry;
mod shape;

#[cfg(test)]
mod scenario_tests;

pub use attribute::{AttributeValue, normalize_key};
pub use chart::{resolve_axis_content, resolve_chart, resolve_chart_content};
pub use context::{ResolveOptions, Resolved, UnmatchedShapePolicy};
pub use dom::{Attribute, AttributeName, Attributes, Element, Node, TEMPLATE_ATTRIBUTE};
pub use error::{AttributeError, Diagnostic, Family, MarkupError};
pub use modifier::MODIFIERS_ATTRIBUTE;
pub use plottable::{classify, fixed_value, parse_date, resolve_plottable};
pub use registry::{AxisContentTag, AxisMarkTag, ChartTag, ContentTag};
