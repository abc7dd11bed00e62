// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling values carried by marks, modifiers and axis marks.
//!
//! These are deliberately small: the renderer owns their interpretation. Strokes use
//! [`kurbo::Stroke`] directly and colors use [`peniko::Color`].

use peniko::Color;

/// A paint for foreground content.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeStyle {
    /// A solid color.
    Color(Color),
    /// A level of the ambient foreground style.
    Hierarchical(HierarchicalLevel),
    /// The ambient tint (accent) color.
    Tint,
}

/// Levels of the ambient foreground style, from most to least prominent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HierarchicalLevel {
    /// Primary content.
    Primary,
    /// Secondary content.
    Secondary,
    /// Tertiary content.
    Tertiary,
    /// Quaternary content.
    Quaternary,
}

/// Corner curvature used by rounded rectangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundedCornerStyle {
    /// Quarter-circle corners.
    Circular,
    /// Continuously curved corners.
    #[default]
    Continuous,
}

/// Fill rule and antialiasing for clip shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FillStyle {
    /// Use the even-odd fill rule instead of non-zero.
    pub eo_fill: bool,
    /// Antialias shape edges.
    pub antialiased: bool,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            eo_fill: false,
            antialiased: true,
        }
    }
}

/// Horizontal alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Leading edge.
    Leading,
    /// Center.
    Center,
    /// Trailing edge.
    Trailing,
}

/// Vertical alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Top edge.
    Top,
    /// Center.
    Center,
    /// Bottom edge.
    Bottom,
}

/// A two-dimensional alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Alignment {
    /// Horizontal component.
    pub horizontal: HorizontalAlignment,
    /// Vertical component.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    /// Leading edge, vertically centered.
    pub const LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Center);
    /// Trailing edge, vertically centered.
    pub const TRAILING: Self = Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Center);
    /// Top edge, horizontally centered.
    pub const TOP: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Top);
    /// Bottom edge, horizontally centered.
    pub const BOTTOM: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Bottom);
    /// Top leading corner.
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    /// Top trailing corner.
    pub const TOP_TRAILING: Self = Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Top);
    /// Bottom leading corner.
    pub const BOTTOM_LEADING: Self =
        Self::new(HorizontalAlignment::Leading, VerticalAlignment::Bottom);
    /// Bottom trailing corner.
    pub const BOTTOM_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    /// Creates an alignment from its components.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Where an annotation (or legend, or axis label) is placed relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnnotationPosition {
    /// Let the chart decide.
    #[default]
    Automatic,
    /// On top of the content.
    Overlay,
    /// Above.
    Top,
    /// Below.
    Bottom,
    /// Before, in reading order.
    Leading,
    /// After, in reading order.
    Trailing,
    /// Above and before.
    TopLeading,
    /// Above and after.
    TopTrailing,
    /// Below and before.
    BottomLeading,
    /// Below and after.
    BottomTrailing,
}

/// Curve interpolation for line and area marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// Cardinal spline.
    Cardinal,
    /// Catmull-Rom spline.
    CatmullRom,
    /// Straight segments.
    Linear,
    /// Monotone cubic.
    Monotone,
    /// Steps centered on each point.
    StepCenter,
    /// Steps ending at each point.
    StepEnd,
    /// Steps starting at each point.
    StepStart,
}

/// The extent of a mark along one dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MarkDimension {
    /// Let the chart decide.
    #[default]
    Automatic,
    /// A fixed size in points.
    Fixed(f64),
    /// A fraction of the available step (`0.5` means half).
    Ratio(f64),
    /// The available step minus an inset in points.
    Inset(f64),
}

/// How stacked marks accumulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkStackingMethod {
    /// Stack from zero.
    Standard,
    /// Stack and normalize to the unit range.
    Normalized,
    /// Stack around a centered baseline.
    Center,
    /// Do not stack.
    Unstacked,
}

/// Text style for axis marks.
#[derive(Clone, Debug, PartialEq)]
pub enum Font {
    /// A semantic text style.
    Style(TextStyle),
    /// The system font at a size.
    System {
        /// Point size.
        size: f64,
        /// Weight, if not regular.
        weight: Option<FontWeight>,
    },
    /// A named font at a size.
    Custom {
        /// Font family or postscript name.
        name: String,
        /// Point size.
        size: f64,
    },
}

/// Semantic text styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "names are self-describing")]
pub enum TextStyle {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption,
    Caption2,
}

/// Font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "names are self-describing")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}
