// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed chart content.
//!
//! This crate is the target model that chart frontends resolve into:
//! - **Marks** (bar, area, line, point, rectangle, rule) built from typed [`PlottableValue`]s.
//!   Each mark type declares the [`ShapeKind`]s it supports, and construction rejects any other
//!   geometry.
//! - **Content trees** ([`ChartContent`], [`AxisContent`], [`AxisMark`]) that concatenate sibling
//!   content in document order and wrap subtrees with modifiers.
//! - **Modifier families** ([`ContentModifier`], [`AxisMarkModifier`], [`AxisContentModifier`]),
//!   one per content tree, so a modifier cannot be applied to the wrong kind of content.
//! - **Chart configuration** ([`Chart`], [`ChartModifier`]): axes, axis labels, scales, legend.
//!
//! Rendering and layout are out of scope; values here describe *what* to draw.

mod area_mark;
mod axis;
mod bar_mark;
mod chart;
mod content;
mod format;
mod geometry;
mod legend;
mod line_mark;
mod mark;
mod modifier;
mod plottable;
mod point_mark;
mod rect_mark;
mod rule_mark;
mod scale;
mod style;
mod symbol;
mod time;

pub use area_mark::AreaMark;
pub use axis::{
    AxisContent, AxisGridLine, AxisMark, AxisMarkPosition, AxisMarkPreset, AxisMarkValues,
    AxisMarks, AxisMarksContent, AxisTick, AxisTickLength, AxisValueLabel,
    AxisValueLabelCollisionResolution, AxisValueLabelOrientation, AxisValueMarks,
};
pub use bar_mark::BarMark;
pub use chart::{
    AxisConfig, AxisLabel, AxisLabelTitle, Chart, ChartAxis, ChartDecoration, ChartModifier,
    Visibility,
};
pub use content::{ChartContent, ContentNode, ViewRoot, ViewTemplate};
pub use format::{AxisFormat, ByteCountFormat, ByteCountStyle, ByteCountUnits};
pub use geometry::{MarkAxis, MarkGeometry, ShapeKind, ShapeSet};
pub use legend::{ChartLegend, LegendPlacement};
pub use line_mark::LineMark;
pub use mark::{ChartMark, Mark, MarkKind};
pub use modifier::{
    Annotation, AxisContentModifier, AxisMarkModifier, ClipShape, ContentModifier, Offset,
    OverflowBoundary, OverflowResolution, OverflowStrategy, PositionAxis, StyleSource, Symbol,
    SymbolSize,
};
pub use plottable::{Plottable, PlottableKind, PlottableValue};
pub use point_mark::PointMark;
pub use rect_mark::RectangleMark;
pub use rule_mark::RuleMark;
pub use scale::{
    ForegroundStyleScale, PlotDimensionScaleRange, ScaleConfig, ScaleDomain, ScaleType,
    StyleScale, SymbolScale,
};
pub use style::{
    Alignment, AnnotationPosition, FillStyle, Font, FontWeight, HierarchicalLevel,
    HorizontalAlignment, InterpolationMethod, MarkDimension, MarkStackingMethod,
    RoundedCornerStyle, ShapeStyle, TextStyle, VerticalAlignment,
};
pub use symbol::SymbolShape;
pub use time::{CalendarComponent, CalendarIdentifier};

/// Re-exported geometry and paint types used in the public API.
pub use kurbo::{Point, Size, Stroke, Vec2};
pub use peniko::Color;
