// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark elements: shape inference plus per-mark extra attributes.

use vizir_charts::{
    AreaMark, BarMark, ChartContent, ChartMark, LineMark, MarkAxis, MarkGeometry, PointMark,
    RectangleMark, RuleMark, ShapeKind,
};

use crate::context::{BuilderContext, UnmatchedShapePolicy};
use crate::dom::Element;
use crate::error::Diagnostic;
use crate::shape::ShapeInputs;

/// Reads the extra attributes a mark type accepts for its resolved shape.
pub(crate) trait MarkOptions: ChartMark {
    /// Whether `(x, y_start, y_end)` is tried before `(y, x_start, x_end)`.
    const Y_RANGE_FIRST: bool = false;

    /// Applies extra attributes from `element`. The default reads none.
    fn read_options(self, _element: &Element, _ctx: &BuilderContext<'_>) -> Self {
        self
    }
}

impl MarkOptions for BarMark {
    fn read_options(mut self, element: &Element, ctx: &BuilderContext<'_>) -> Self {
        let (width, height, stacking) = match self.geometry() {
            MarkGeometry::Simple { .. } => (true, true, true),
            MarkGeometry::Range {
                axis: MarkAxis::Y, ..
            } => (true, false, false),
            MarkGeometry::Range {
                axis: MarkAxis::X, ..
            } => (false, true, false),
            MarkGeometry::FixedRange {
                axis: MarkAxis::X, ..
            } => (true, false, true),
            MarkGeometry::FixedRange {
                axis: MarkAxis::Y, ..
            } => (false, true, true),
            _ => (false, false, false),
        };
        if width && let Some(width) = ctx.attribute(element, "width") {
            self = self.with_width(width);
        }
        if height && let Some(height) = ctx.attribute(element, "height") {
            self = self.with_height(height);
        }
        if stacking && let Some(stacking) = ctx.attribute(element, "stacking") {
            self = self.with_stacking(stacking);
        }
        self
    }
}

impl MarkOptions for AreaMark {
    fn read_options(self, element: &Element, ctx: &BuilderContext<'_>) -> Self {
        match self.geometry().kind() {
            ShapeKind::Simple | ShapeKind::Series => match ctx.attribute(element, "stacking") {
                Some(stacking) => self.with_stacking(stacking),
                None => self,
            },
            _ => self,
        }
    }
}

impl MarkOptions for RectangleMark {
    fn read_options(mut self, element: &Element, ctx: &BuilderContext<'_>) -> Self {
        let (width, height) = match self.geometry() {
            MarkGeometry::Simple { .. } => (true, true),
            MarkGeometry::Range {
                axis: MarkAxis::Y, ..
            } => (true, false),
            MarkGeometry::Range {
                axis: MarkAxis::X, ..
            } => (false, true),
            _ => (false, false),
        };
        if width && let Some(width) = ctx.attribute(element, "width") {
            self = self.with_width(width);
        }
        if height && let Some(height) = ctx.attribute(element, "height") {
            self = self.with_height(height);
        }
        self
    }
}

impl MarkOptions for LineMark {}
impl MarkOptions for PointMark {}
impl MarkOptions for RuleMark {
    const Y_RANGE_FIRST: bool = true;
}

/// Resolves a mark element of type `M`.
///
/// A mark whose attributes match none of its shapes contributes no content.
pub(crate) fn resolve_mark<M: MarkOptions>(
    element: &Element,
    ctx: &BuilderContext<'_>,
) -> ChartContent {
    let Some(mark) = ShapeInputs::read(element)
        .resolve(M::SHAPES, M::Y_RANGE_FIRST, &element.tag, ctx)
        .and_then(M::try_from_geometry)
    else {
        if ctx.options().unmatched_shape == UnmatchedShapePolicy::Report {
            ctx.report(Diagnostic::NoMatchingShape {
                tag: element.tag.clone(),
            });
        }
        return ChartContent::Empty;
    };
    let mark = mark.read_options(element, ctx);
    tracing::trace!(tag = %element.tag, shape = ?mark.geometry().kind(), "resolved mark");
    ChartContent::Mark(mark.into())
}
