// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier decoding and application.
//!
//! An element's `modifiers` attribute holds a JSON array of descriptor objects. Each object has a
//! `type` discriminant (`snake_case` or `camelCase`) plus that modifier's arguments:
//!
//! ```json
//! [{ "type": "foreground_style", "style": "red" }, { "type": "zIndex", "value": 2 }]
//! ```
//!
//! Each content family decodes its own closed set of descriptors. Entries that fail to decode
//! are reported and skipped; the rest are folded onto the content in list order.

mod axis;
mod chart;
mod content;
pub(crate) mod json;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use vizir_charts::ContentNode;

pub(crate) use axis::{AxisContentDescriptor, AxisMarkDescriptor};
pub(crate) use chart::ChartDescriptor;
pub(crate) use content::ContentDescriptor;

use crate::attribute::normalize_key;
use crate::context::BuilderContext;
use crate::dom::Element;
use crate::error::{Diagnostic, Family, ModifierError};

/// The attribute holding an element's modifier list.
pub const MODIFIERS_ATTRIBUTE: &str = "modifiers";

/// A decodable modifier descriptor for one content family.
pub(crate) trait ModifierDescriptor: DeserializeOwned {
    /// The modifier this descriptor produces.
    type Modifier;
    /// Family used in diagnostics.
    const FAMILY: Family;
    /// The accepted `type` discriminants, in `snake_case`.
    const KINDS: &'static [&'static str];

    /// Finishes decoding, resolving any template references against `element`.
    fn into_modifier(
        self,
        element: &Element,
        ctx: &BuilderContext<'_>,
    ) -> Result<Self::Modifier, ModifierError>;
}

/// Decodes the `modifiers` attribute of `element` for family `D`.
///
/// A missing attribute is an empty chain.
pub(crate) fn decode_chain<D: ModifierDescriptor>(
    element: &Element,
    ctx: &BuilderContext<'_>,
) -> Vec<D::Modifier> {
    let Some(raw) = element.attribute(MODIFIERS_ATTRIBUTE) else {
        return Vec::new();
    };
    let entries: Vec<Map<String, Value>> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            report::<D>(ctx, &ModifierError::Malformed(err));
            return Vec::new();
        }
    };
    entries
        .into_iter()
        .filter_map(|entry| decode_entry::<D>(entry, element, ctx))
        .collect()
}

fn decode_entry<D: ModifierDescriptor>(
    mut entry: Map<String, Value>,
    element: &Element,
    ctx: &BuilderContext<'_>,
) -> Option<D::Modifier> {
    let Some(raw_kind) = entry.get("type").and_then(Value::as_str) else {
        report::<D>(ctx, &ModifierError::MissingType);
        return None;
    };
    let kind = normalize_key(raw_kind);
    if !D::KINDS.contains(&kind.as_str()) {
        ctx.report(Diagnostic::UnknownModifier {
            family: D::FAMILY,
            modifier: raw_kind.to_owned(),
        });
        return None;
    }
    entry.insert("type".into(), Value::String(kind.clone()));
    let decoded = serde_json::from_value::<D>(Value::Object(entry))
        .map_err(|source| ModifierError::Invalid { kind, source })
        .and_then(|descriptor| descriptor.into_modifier(element, ctx));
    match decoded {
        Ok(modifier) => Some(modifier),
        Err(err) => {
            report::<D>(ctx, &err);
            None
        }
    }
}

fn report<D: ModifierDescriptor>(ctx: &BuilderContext<'_>, err: &ModifierError) {
    ctx.report(Diagnostic::InvalidModifier {
        family: D::FAMILY,
        message: err.to_string(),
    });
}

/// Folds `modifiers` onto `content` in order; the last one ends up outermost.
///
/// Empty content stays empty.
pub(crate) fn apply_modifiers<N: ContentNode>(content: N, modifiers: Vec<N::Modifier>) -> N {
    if content.is_empty() {
        return content;
    }
    modifiers.into_iter().fold(content, N::modified)
}

#[cfg(test)]
mod tests {
    use vizir_charts::{ChartContent, ContentModifier};

    use super::*;
    use crate::context::ResolveOptions;

    fn decode(modifiers: &str) -> (Vec<ContentModifier>, Vec<Diagnostic>) {
        let options = ResolveOptions::new().with_log_diagnostics(false);
        let ctx = BuilderContext::new(&options);
        let element = Element::new("BarMark").with_attribute(MODIFIERS_ATTRIBUTE, modifiers);
        let chain = decode_chain::<ContentDescriptor>(&element, &ctx);
        (chain, ctx.finish(()).diagnostics)
    }

    #[test]
    fn missing_attribute_is_an_empty_chain() {
        let options = ResolveOptions::new();
        let ctx = BuilderContext::new(&options);
        let chain = decode_chain::<ContentDescriptor>(&Element::new("BarMark"), &ctx);
        assert!(chain.is_empty());
        assert!(ctx.finish(()).is_clean());
    }

    #[test]
    fn unknown_modifiers_are_reported_and_skipped() {
        let (chain, diagnostics) = decode(
            r#"[{"type":"opacity","opacity":0.5},{"type":"wobble"},{"type":"zIndex","value":3}]"#,
        );
        assert_eq!(
            chain,
            vec![ContentModifier::Opacity(0.5), ContentModifier::ZIndex(3)]
        );
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnknownModifier {
                family: Family::ChartContent,
                modifier: "wobble".into(),
            }]
        );
    }

    #[test]
    fn invalid_entries_are_reported_and_skipped() {
        let (chain, diagnostics) =
            decode(r#"[{"type":"opacity"},{"blur":1},{"type":"blur","radius":2}]"#);
        assert_eq!(chain, vec![ContentModifier::Blur(2.0)]);
        assert_eq!(diagnostics.len(), 2);
        assert!(
            diagnostics
                .iter()
                .all(|d| matches!(d, Diagnostic::InvalidModifier { .. })),
            "{diagnostics:?}"
        );
    }

    #[test]
    fn malformed_lists_drop_the_whole_chain() {
        let (chain, diagnostics) = decode(r#"{"type":"opacity","opacity":0.5}"#);
        assert!(chain.is_empty());
        assert!(matches!(
            diagnostics.as_slice(),
            [Diagnostic::InvalidModifier { family: Family::ChartContent, .. }]
        ));
    }

    #[test]
    fn modifiers_on_empty_content_are_skipped() {
        let content = apply_modifiers(ChartContent::Empty, vec![ContentModifier::Opacity(0.5)]);
        assert!(content.is_empty());
    }
}
