// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution options and the per-pass builder context.

use core::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::dom::Element;
use crate::error::{AttributeError, Diagnostic};

/// What happens when a mark's attributes match none of its supported shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedShapePolicy {
    /// Contribute no content, silently.
    Ignore,
    /// Contribute no content and record [`Diagnostic::NoMatchingShape`].
    #[default]
    Report,
}

/// Options for one resolution pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Handling of marks with no matching shape.
    pub unmatched_shape: UnmatchedShapePolicy,
    /// Keep unknown elements as `Unsupported` placeholders instead of dropping them.
    pub keep_unsupported: bool,
    /// Log each diagnostic with `tracing::warn!` as it is recorded.
    pub log_diagnostics: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            unmatched_shape: UnmatchedShapePolicy::Report,
            keep_unsupported: true,
            log_diagnostics: true,
        }
    }
}

impl ResolveOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unmatched-shape policy.
    pub fn with_unmatched_shape(mut self, policy: UnmatchedShapePolicy) -> Self {
        self.unmatched_shape = policy;
        self
    }

    /// Sets whether unknown elements are kept as placeholders.
    pub fn with_keep_unsupported(mut self, keep: bool) -> Self {
        self.keep_unsupported = keep;
        self
    }

    /// Sets whether diagnostics are logged as they are recorded.
    pub fn with_log_diagnostics(mut self, log: bool) -> Self {
        self.log_diagnostics = log;
        self
    }
}

/// A resolved value and the diagnostics recorded while resolving it.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<T> {
    /// The resolved value.
    pub value: T,
    /// Diagnostics, in the order they were recorded.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Resolved<T> {
    /// Returns `true` if no diagnostics were recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// State shared by every builder during one resolution pass.
///
/// Nested resolution (template content, masks, axis content) reuses the same context, so all
/// diagnostics of a pass end up in one list.
#[derive(Debug)]
pub(crate) struct BuilderContext<'a> {
    options: &'a ResolveOptions,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl<'a> BuilderContext<'a> {
    pub(crate) fn new(options: &'a ResolveOptions) -> Self {
        Self {
            options,
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn options(&self) -> &ResolveOptions {
        self.options
    }

    pub(crate) fn report(&self, diagnostic: Diagnostic) {
        if self.options.log_diagnostics {
            tracing::warn!(%diagnostic, "markup diagnostic");
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub(crate) fn finish<T>(self, value: T) -> Resolved<T> {
        Resolved {
            value,
            diagnostics: self.diagnostics.into_inner(),
        }
    }

    /// Decodes an optional attribute.
    ///
    /// Absent attributes yield `None`. Present but invalid attributes yield `None` and record
    /// [`Diagnostic::InvalidAttribute`].
    pub(crate) fn attribute<T: AttributeValue>(&self, element: &Element, name: &str) -> Option<T> {
        let raw = element.attribute(name)?;
        match T::parse(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                self.invalid_attribute(element, name, &err);
                None
            }
        }
    }

    /// Decodes an attribute, falling back to `default` when absent or invalid.
    pub(crate) fn attribute_or<T: AttributeValue>(
        &self,
        element: &Element,
        name: &str,
        default: T,
    ) -> T {
        self.attribute(element, name).unwrap_or(default)
    }

    pub(crate) fn invalid_attribute(&self, element: &Element, name: &str, err: &AttributeError) {
        self.report(Diagnostic::InvalidAttribute {
            tag: element.tag.clone(),
            attribute: name.to_owned(),
            message: err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizir_charts::MarkDimension;

    #[test]
    fn options_deserialize_with_defaults_for_missing_fields() {
        let options: ResolveOptions =
            serde_json::from_str(r#"{"unmatched_shape":"ignore"}"#).unwrap();
        assert_eq!(options.unmatched_shape, UnmatchedShapePolicy::Ignore);
        assert!(options.keep_unsupported);
        assert!(options.log_diagnostics);
    }

    #[test]
    fn invalid_attributes_record_a_diagnostic_and_fall_back() {
        let options = ResolveOptions::new().with_log_diagnostics(false);
        let ctx = BuilderContext::new(&options);
        let element = Element::new("BarMark").with_attribute("width", "wide");

        let width = ctx.attribute_or(&element, "width", MarkDimension::Automatic);
        let height: Option<MarkDimension> = ctx.attribute(&element, "height");

        assert_eq!(width, MarkDimension::Automatic);
        assert_eq!(height, None);
        let resolved = ctx.finish(());
        assert_eq!(resolved.diagnostics.len(), 1);
        assert!(matches!(
            &resolved.diagnostics[0],
            Diagnostic::InvalidAttribute { attribute, .. } if attribute == "width"
        ));
    }
}
