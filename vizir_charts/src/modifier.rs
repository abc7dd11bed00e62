// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier families.
//!
//! There are three disjoint families, one per content tree:
//! - [`ContentModifier`] for [`crate::ChartContent`],
//! - [`AxisMarkModifier`] for [`crate::AxisMark`],
//! - [`AxisContentModifier`] for [`crate::AxisContent`] (currently no modifiers).

use kurbo::{Size, Stroke, Vec2};
use peniko::Color;

use crate::content::{ChartContent, ViewTemplate};
use crate::plottable::PlottableValue;
use crate::style::{
    Alignment, AnnotationPosition, FillStyle, Font, InterpolationMethod, MarkDimension,
    RoundedCornerStyle, ShapeStyle,
};
use crate::symbol::SymbolShape;

/// A modifier applied to chart content.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentModifier {
    /// Whether mark styles are aligned with the plot area (for gradients).
    AlignsMarkStylesWithPlotArea(bool),
    /// Attach an annotation view.
    Annotation(Annotation),
    /// Gaussian blur radius.
    Blur(f64),
    /// Clip to a shape.
    ClipShape {
        /// Shape to clip to.
        shape: ClipShape,
        /// Fill rule used for the clip.
        style: FillStyle,
    },
    /// Round the corners of rectangular marks.
    CornerRadius {
        /// Corner radius in points.
        radius: f64,
        /// Corner curvature.
        style: RoundedCornerStyle,
    },
    /// Foreground style, either fixed or derived from data.
    ForegroundStyle(StyleSource<ShapeStyle>),
    /// Curve interpolation for line and area marks.
    InterpolationMethod(InterpolationMethod),
    /// Line style, either fixed or derived from data.
    LineStyle(StyleSource<Stroke>),
    /// Mask with other chart content.
    Mask(Box<ChartContent>),
    /// Offset in points.
    Offset(Offset),
    /// Opacity in `[0, 1]`.
    Opacity(f64),
    /// Position marks within a group by a data value.
    Position {
        /// Data value determining the position.
        value: PlottableValue,
        /// Axis to position along; `None` lets the chart decide.
        axis: Option<PositionAxis>,
        /// Span of the group.
        span: MarkDimension,
    },
    /// Drop shadow.
    Shadow {
        /// Shadow color.
        color: Color,
        /// Blur radius.
        radius: f64,
        /// Shadow offset.
        offset: Vec2,
    },
    /// Point symbol.
    Symbol(Symbol),
    /// Point symbol size.
    SymbolSize(SymbolSize),
    /// Render order relative to siblings.
    ZIndex(i32),
}

/// A style that is either fixed or encoded from a data value.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleSource<T> {
    /// A fixed style.
    Fixed(T),
    /// Style chosen per distinct data value (e.g. one color per series).
    By(PlottableValue),
}

/// Annotation options.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Placement relative to the annotated mark.
    pub position: AnnotationPosition,
    /// Alignment of the annotation view.
    pub alignment: Alignment,
    /// Distance from the mark, in points.
    pub spacing: Option<f64>,
    /// What happens when the annotation does not fit.
    pub overflow_resolution: Option<OverflowResolution>,
    /// The annotation view.
    pub content: ViewTemplate,
}

/// Overflow handling for annotations, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverflowResolution {
    /// Horizontal strategy.
    pub x: OverflowStrategy,
    /// Vertical strategy.
    pub y: OverflowStrategy,
}

/// How an overflowing annotation is resolved along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverflowStrategy {
    /// Let the chart decide.
    Automatic,
    /// Allow overflow.
    Disabled,
    /// Move the annotation inside the default boundary.
    Fit,
    /// Move the annotation inside a specific boundary.
    FitTo(OverflowBoundary),
    /// Expand the scale so the annotation fits.
    PadScale,
}

/// Boundary used by [`OverflowStrategy::FitTo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverflowBoundary {
    /// Let the chart decide.
    Automatic,
    /// The whole chart.
    Chart,
    /// The plot area.
    Plot,
}

/// A clip shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// A rectangle.
    Rectangle,
    /// A rounded rectangle.
    RoundedRectangle,
    /// A circle.
    Circle,
    /// An ellipse.
    Ellipse,
    /// A capsule.
    Capsule,
    /// A custom shape provided by the view layer.
    Template(ViewTemplate),
}

/// Offsets applied by [`ContentModifier::Offset`], in points.
///
/// Ranged marks can offset each end independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// Offset the whole mark.
    Point(Vec2),
    /// Offset the ends of a horizontal range, and the vertical position.
    XRange {
        /// Start of the horizontal range.
        x_start: f64,
        /// End of the horizontal range.
        x_end: f64,
        /// Vertical position.
        y: f64,
    },
    /// Offset the horizontal position, and the ends of a vertical range.
    YRange {
        /// Horizontal position.
        x: f64,
        /// Start of the vertical range.
        y_start: f64,
        /// End of the vertical range.
        y_end: f64,
    },
    /// Offset the ends of both ranges.
    Ranges {
        /// Start of the horizontal range.
        x_start: f64,
        /// End of the horizontal range.
        x_end: f64,
        /// Start of the vertical range.
        y_start: f64,
        /// End of the vertical range.
        y_end: f64,
    },
}

/// Axis for [`ContentModifier::Position`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionAxis {
    /// Position along x.
    Horizontal,
    /// Position along y.
    Vertical,
}

/// A point symbol.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    /// A built-in shape.
    Shape(SymbolShape),
    /// Shape chosen per distinct data value.
    By(PlottableValue),
    /// A custom symbol view.
    View(ViewTemplate),
}

/// A point symbol size.
#[derive(Clone, Debug, PartialEq)]
pub enum SymbolSize {
    /// Size chosen per data value.
    By(PlottableValue),
    /// Area in square points.
    Area(f64),
    /// Bounding size in points.
    Size(Size),
}

/// A modifier applied to axis marks.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisMarkModifier {
    /// Label font.
    Font(Font),
    /// Foreground style.
    ForegroundStyle(ShapeStyle),
    /// Offset in points.
    Offset(Vec2),
}

/// A modifier applied to axis content.
///
/// There are no axis content modifiers, so a value of this type cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisContentModifier {}
