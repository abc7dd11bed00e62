// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry points: resolve a chart root, or a bare content list.

use vizir_charts::{AxisContent, Chart, ChartContent};

use crate::axis::AxisContentBuilder;
use crate::builder::{ChartContentBuilder, build_children, build_nodes};
use crate::context::{BuilderContext, ResolveOptions, Resolved};
use crate::dom::{Element, Node};
use crate::error::{Diagnostic, Family};
use crate::modifier::{ChartDescriptor, decode_chain};
use crate::registry::ChartTag;

/// Resolves a `Chart` element into its content and chart modifiers.
///
/// Any other root tag is reported and resolves to an empty chart.
pub fn resolve_chart(root: &Element, options: &ResolveOptions) -> Resolved<Chart> {
    let ctx = BuilderContext::new(options);
    let chart = match ChartTag::from_tag(&root.tag) {
        Some(ChartTag::Chart) => {
            let content = build_children::<ChartContentBuilder>(root, &ctx);
            let modifiers = decode_chain::<ChartDescriptor>(root, &ctx);
            modifiers.into_iter().fold(Chart::new(content), Chart::with_modifier)
        }
        None => {
            ctx.report(Diagnostic::UnsupportedElement {
                family: Family::Chart,
                tag: root.tag.clone(),
            });
            Chart::default()
        }
    };
    let resolved = ctx.finish(chart);
    tracing::debug!(
        marks = resolved.value.content.marks().len(),
        diagnostics = resolved.diagnostics.len(),
        "resolved chart"
    );
    resolved
}

/// Resolves a list of chart content nodes, in document order.
pub fn resolve_chart_content(nodes: &[Node], options: &ResolveOptions) -> Resolved<ChartContent> {
    let ctx = BuilderContext::new(options);
    let content = build_nodes::<ChartContentBuilder>(nodes, &ctx);
    ctx.finish(content)
}

/// Resolves a list of axis content nodes, in document order.
pub fn resolve_axis_content(nodes: &[Node], options: &ResolveOptions) -> Resolved<AxisContent> {
    let ctx = BuilderContext::new(options);
    let content = build_nodes::<AxisContentBuilder>(nodes, &ctx);
    ctx.finish(content)
}
