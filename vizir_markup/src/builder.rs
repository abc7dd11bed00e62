// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element builders.
//!
//! Each content family has a [`ContentBuilder`]: a closed tag registry, a lookup from tag to
//! content, and a modifier family. Building an element looks up its tag, builds the content,
//! then folds the element's modifier chain onto it.

use core::fmt::Debug;

use vizir_charts::{
    AreaMark, BarMark, ChartContent, ContentNode, LineMark, PointMark, RectangleMark, RuleMark,
    ViewRoot, ViewTemplate,
};

use crate::context::BuilderContext;
use crate::dom::{Element, Node};
use crate::error::{Diagnostic, Family};
use crate::marks::resolve_mark;
use crate::modifier::{ContentDescriptor, ModifierDescriptor, apply_modifiers, decode_chain};
use crate::registry::ContentTag;

/// Builds one content family from elements.
pub(crate) trait ContentBuilder {
    /// The content this family produces.
    type Content: ContentNode;
    /// The family's tag registry.
    type Tag: Copy + Debug;
    /// The family's modifier descriptors.
    type Modifier: ModifierDescriptor<Modifier = <Self::Content as ContentNode>::Modifier>;

    /// Family used in diagnostics.
    const FAMILY: Family;

    /// Looks up a tag in the family's registry.
    fn tag(name: &str) -> Option<Self::Tag>;

    /// Builds content for a known tag, before modifiers.
    fn lookup(tag: Self::Tag, element: &Element, ctx: &BuilderContext<'_>) -> Self::Content;
}

/// Builds one element, including its modifier chain.
pub(crate) fn build_element<B: ContentBuilder>(
    element: &Element,
    ctx: &BuilderContext<'_>,
) -> B::Content {
    let Some(tag) = B::tag(&element.tag) else {
        ctx.report(Diagnostic::UnsupportedElement {
            family: B::FAMILY,
            tag: element.tag.clone(),
        });
        return if ctx.options().keep_unsupported {
            B::Content::unsupported(&element.tag)
        } else {
            B::Content::empty()
        };
    };
    tracing::debug!(family = %B::FAMILY, ?tag, "building element");
    let content = B::lookup(tag, element, ctx);
    let modifiers = decode_chain::<B::Modifier>(element, ctx);
    apply_modifiers(content, modifiers)
}

/// Builds a node list in document order. Text nodes and template content are skipped.
pub(crate) fn build_nodes<B: ContentBuilder>(
    nodes: &[Node],
    ctx: &BuilderContext<'_>,
) -> B::Content {
    build_all::<B, _>(
        nodes
            .iter()
            .filter_map(Node::as_element)
            .filter(|element| element.template_key().is_none()),
        ctx,
    )
}

/// Builds the flow children of `element`.
pub(crate) fn build_children<B: ContentBuilder>(
    element: &Element,
    ctx: &BuilderContext<'_>,
) -> B::Content {
    build_all::<B, _>(element.flow_children(), ctx)
}

/// Builds the children of `element` carrying template key `key`.
///
/// A key no child carries is reported and builds empty content.
pub(crate) fn build_template<B: ContentBuilder>(
    element: &Element,
    key: &str,
    ctx: &BuilderContext<'_>,
) -> B::Content {
    let mut children = element.template_children(key).peekable();
    if children.peek().is_none() {
        ctx.report(Diagnostic::MissingTemplate { key: key.to_owned() });
        return B::Content::empty();
    }
    build_all::<B, _>(children, ctx)
}

fn build_all<'a, B: ContentBuilder, I: Iterator<Item = &'a Element>>(
    elements: I,
    ctx: &BuilderContext<'_>,
) -> B::Content {
    elements.fold(B::Content::empty(), |acc, element| {
        acc.concat(build_element::<B>(element, ctx))
    })
}

/// Collects the children of `element` carrying template key `key` as opaque view content.
///
/// A key no child carries is reported and yields an empty view.
pub(crate) fn view_template(
    element: &Element,
    key: &str,
    ctx: &BuilderContext<'_>,
) -> ViewTemplate {
    let roots: Vec<ViewRoot> = element
        .template_children(key)
        .map(|child| ViewRoot::Element(child.tag.clone()))
        .collect();
    if roots.is_empty() {
        ctx.report(Diagnostic::MissingTemplate { key: key.to_owned() });
    }
    ViewTemplate {
        key: Some(key.to_owned()),
        roots,
    }
}

/// Collects every child node of `element` as opaque view content.
///
/// Returns `None` when there are no element children and no non-blank text.
pub(crate) fn view_children(element: &Element) -> Option<ViewTemplate> {
    let roots: Vec<ViewRoot> = element
        .children
        .iter()
        .filter_map(|node| match node {
            Node::Element(child) => Some(ViewRoot::Element(child.tag.clone())),
            Node::Text(text) if !text.trim().is_empty() => Some(ViewRoot::Text(text.clone())),
            Node::Text(_) => None,
        })
        .collect();
    (!roots.is_empty()).then_some(ViewTemplate { key: None, roots })
}

/// Builds chart content: marks and plots.
#[derive(Debug)]
pub(crate) enum ChartContentBuilder {}

impl ContentBuilder for ChartContentBuilder {
    type Content = ChartContent;
    type Tag = ContentTag;
    type Modifier = ContentDescriptor;

    const FAMILY: Family = Family::ChartContent;

    fn tag(name: &str) -> Option<ContentTag> {
        ContentTag::from_tag(name)
    }

    fn lookup(tag: ContentTag, element: &Element, ctx: &BuilderContext<'_>) -> ChartContent {
        match tag {
            ContentTag::Plot => {
                ChartContent::Plot(build_children::<Self>(element, ctx).into_items())
            }
            ContentTag::AreaMark => resolve_mark::<AreaMark>(element, ctx),
            ContentTag::BarMark => resolve_mark::<BarMark>(element, ctx),
            ContentTag::LineMark => resolve_mark::<LineMark>(element, ctx),
            ContentTag::PointMark => resolve_mark::<PointMark>(element, ctx),
            ContentTag::RectangleMark => resolve_mark::<RectangleMark>(element, ctx),
            ContentTag::RuleMark => resolve_mark::<RuleMark>(element, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use vizir_charts::{ContentModifier, Mark};

    use super::*;
    use crate::context::ResolveOptions;

    fn bar(x: &str) -> Element {
        Element::new("BarMark")
            .with_attribute("x", x)
            .with_attribute("x:label", "Day")
            .with_attribute("y", "1")
            .with_attribute("y:label", "Count")
    }

    fn build(nodes: &[Node], options: &ResolveOptions) -> (ChartContent, Vec<Diagnostic>) {
        let ctx = BuilderContext::new(options);
        let content = build_nodes::<ChartContentBuilder>(nodes, &ctx);
        let resolved = ctx.finish(content);
        (resolved.value, resolved.diagnostics)
    }

    #[test]
    fn unknown_tags_become_unsupported_placeholders() {
        let options = ResolveOptions::new().with_log_diagnostics(false);
        let nodes: [Node; 2] = [bar("Mon").into(), Element::new("PieMark").into()];
        let (content, diagnostics) = build(&nodes, &options);
        assert!(matches!(
            content.items(),
            [ChartContent::Mark(_), ChartContent::Unsupported { tag }] if tag == "PieMark"
        ));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnsupportedElement {
                family: Family::ChartContent,
                tag: "PieMark".into(),
            }]
        );

        let options = options.with_keep_unsupported(false);
        let (content, _) = build(&nodes, &options);
        assert!(matches!(content, ChartContent::Mark(_)));
    }

    #[test]
    fn text_and_template_nodes_are_not_content() {
        let options = ResolveOptions::new().with_log_diagnostics(false);
        let nodes = [
            Node::Text("  ".into()),
            bar("Mon").with_attribute("template", "spare").into(),
            bar("Tue").into(),
        ];
        let (content, diagnostics) = build(&nodes, &options);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(content.marks().len(), 1);
    }

    #[test]
    fn plots_group_their_children_and_take_modifiers() {
        let options = ResolveOptions::new().with_log_diagnostics(false);
        let plot = Element::new("Plot")
            .with_attribute("modifiers", r#"[{"type":"opacity","opacity":0.5}]"#)
            .with_child(bar("Mon"))
            .with_child(bar("Tue"));
        let (content, diagnostics) = build(&[Node::from(plot)], &options);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let (modifiers, inner) = content.peel_modifiers();
        assert_eq!(modifiers, vec![&ContentModifier::Opacity(0.5)]);
        let ChartContent::Plot(items) = inner else {
            panic!("expected a plot, got {inner:?}");
        };
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| matches!(item, ChartContent::Mark(Mark::Bar(_)))));
    }

    #[test]
    fn missing_templates_build_nothing() {
        let options = ResolveOptions::new().with_log_diagnostics(false);
        let ctx = BuilderContext::new(&options);
        let content = build_template::<ChartContentBuilder>(&bar("Mon"), "nope", &ctx);
        assert!(content.is_empty());
        assert_eq!(
            ctx.finish(()).diagnostics,
            vec![Diagnostic::MissingTemplate { key: "nope".into() }]
        );
    }

    #[test]
    fn view_children_keep_elements_and_text_in_order() {
        let element = Element::new("AxisValueLabel")
            .with_text("\n  ")
            .with_child(Element::new("Image"))
            .with_text("km");
        let view = view_children(&element).unwrap();
        assert_eq!(
            view.roots,
            vec![ViewRoot::Element("Image".into()), ViewRoot::Text("km".into())]
        );
        assert_eq!(view_children(&Element::new("AxisValueLabel")), None);
    }
}
