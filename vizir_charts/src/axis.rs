// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis content: which axis marks are drawn, at which values, and how.
//!
//! An axis is described by [`AxisContent`], usually one or more [`AxisMarks`]. Each
//! [`AxisMarks`] either uses the chart's default gridline/tick/label triple, or carries custom
//! [`AxisMark`] content.

use kurbo::{Point, Stroke};

use crate::content::{ContentNode, ViewTemplate};
use crate::format::AxisFormat;
use crate::modifier::{AxisContentModifier, AxisMarkModifier};
use crate::style::Alignment;
use crate::time::{CalendarComponent, CalendarIdentifier};

/// Axis content tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AxisContent {
    /// Draws nothing.
    #[default]
    Empty,
    /// One set of axis marks.
    Marks(Box<AxisMarks>),
    /// Sibling content, in document order.
    Group(Vec<AxisContent>),
    /// An element the axis content family does not recognize.
    Unsupported {
        /// The element's tag.
        tag: String,
    },
}

impl AxisContent {
    /// Returns the top-level items.
    pub fn items(&self) -> &[Self] {
        match self {
            Self::Empty => &[],
            Self::Group(items) => items,
            other => core::slice::from_ref(other),
        }
    }
}

impl ContentNode for AxisContent {
    type Modifier = AxisContentModifier;

    fn empty() -> Self {
        Self::Empty
    }

    fn unsupported(tag: &str) -> Self {
        Self::Unsupported {
            tag: tag.to_owned(),
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn concat(self, next: Self) -> Self {
        match (self, next) {
            (Self::Empty, next) => next,
            (acc, Self::Empty) => acc,
            (Self::Group(mut items), next) => {
                items.push(next);
                Self::Group(items)
            }
            (acc, next) => Self::Group(vec![acc, next]),
        }
    }

    fn modified(self, modifier: AxisContentModifier) -> Self {
        match modifier {}
    }
}

/// Axis marks for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisMarks {
    /// Layout preset.
    pub preset: AxisMarkPreset,
    /// Which side of the plot the marks sit on.
    pub position: AxisMarkPosition,
    /// Values at which marks are drawn.
    pub values: AxisMarkValues,
    /// Stroke for the default gridlines and ticks.
    pub stroke: Option<Stroke>,
    /// Label format for the default labels.
    pub format: Option<AxisFormat>,
    /// Custom mark content.
    pub content: AxisMarksContent,
}

impl AxisMarks {
    /// Creates axis marks with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout preset.
    pub fn with_preset(mut self, preset: AxisMarkPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Sets the position.
    pub fn with_position(mut self, position: AxisMarkPosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the values.
    pub fn with_values(mut self, values: AxisMarkValues) -> Self {
        self.values = values;
        self
    }

    /// Sets the stroke for default gridlines and ticks.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the label format.
    pub fn with_format(mut self, format: AxisFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets custom mark content.
    pub fn with_content(mut self, content: AxisMarksContent) -> Self {
        self.content = content;
        self
    }
}

/// Axis layout presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisMarkPreset {
    /// Let the chart decide.
    #[default]
    Automatic,
    /// Marks extend past the plot area.
    Extended,
    /// Marks align with the plot edges.
    Aligned,
    /// Marks are drawn inside the plot area.
    Inset,
}

/// Axis placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisMarkPosition {
    /// Let the chart decide.
    #[default]
    Automatic,
    /// Leading edge.
    Leading,
    /// Trailing edge.
    Trailing,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

/// The values at which axis marks are drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisMarkValues {
    /// Values chosen by the chart.
    Automatic {
        /// Minimum distance between values.
        minimum_stride: Option<f64>,
        /// Preferred number of values.
        desired_count: Option<i64>,
        /// Extend the first value down to a round number.
        round_lower_bound: bool,
        /// Extend the last value up to a round number.
        round_upper_bound: bool,
    },
    /// Evenly spaced numeric values.
    Stride {
        /// Distance between values.
        by: f64,
        /// Extend the first value down to a multiple of `by`.
        round_lower_bound: bool,
        /// Extend the last value up to a multiple of `by`.
        round_upper_bound: bool,
    },
    /// Evenly spaced dates.
    CalendarStride {
        /// Calendar unit between values.
        component: CalendarComponent,
        /// Number of units between values.
        count: i64,
        /// Extend the first value down to a unit boundary.
        round_lower_bound: bool,
        /// Extend the last value up to a unit boundary.
        round_upper_bound: bool,
        /// Calendar system; `None` uses the current calendar.
        calendar: Option<CalendarIdentifier>,
    },
    /// Explicit values.
    Values(Vec<f64>),
}

impl Default for AxisMarkValues {
    fn default() -> Self {
        Self::Automatic {
            minimum_stride: None,
            desired_count: None,
            round_lower_bound: false,
            round_upper_bound: false,
        }
    }
}

/// Custom content of an [`AxisMarks`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AxisMarksContent {
    /// The chart's default gridline, tick and label.
    #[default]
    Default,
    /// The same marks at every value.
    Marks(AxisMark),
    /// Marks chosen per explicit value.
    PerValue(Vec<AxisValueMarks>),
}

/// The marks drawn at one explicit axis value.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisValueMarks {
    /// The axis value.
    pub value: f64,
    /// Marks drawn at that value.
    pub marks: AxisMark,
}

/// Axis mark content tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AxisMark {
    /// Draws nothing.
    #[default]
    Empty,
    /// A gridline.
    GridLine(AxisGridLine),
    /// A tick.
    Tick(AxisTick),
    /// A value label.
    ValueLabel(AxisValueLabel),
    /// Sibling marks, in document order.
    Group(Vec<AxisMark>),
    /// Marks wrapped with one modifier.
    Modified {
        /// The wrapped marks.
        content: Box<AxisMark>,
        /// The modifier applied to them.
        modifier: AxisMarkModifier,
    },
    /// An element the axis mark family does not recognize.
    Unsupported {
        /// The element's tag.
        tag: String,
    },
}

impl AxisMark {
    /// Returns the top-level items.
    pub fn items(&self) -> &[Self] {
        match self {
            Self::Empty => &[],
            Self::Group(items) => items,
            other => core::slice::from_ref(other),
        }
    }
}

impl ContentNode for AxisMark {
    type Modifier = AxisMarkModifier;

    fn empty() -> Self {
        Self::Empty
    }

    fn unsupported(tag: &str) -> Self {
        Self::Unsupported {
            tag: tag.to_owned(),
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn concat(self, next: Self) -> Self {
        match (self, next) {
            (Self::Empty, next) => next,
            (acc, Self::Empty) => acc,
            (Self::Group(mut items), next) => {
                items.push(next);
                Self::Group(items)
            }
            (acc, next) => Self::Group(vec![acc, next]),
        }
    }

    fn modified(self, modifier: AxisMarkModifier) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::Modified {
            content: Box::new(self),
            modifier,
        }
    }
}

/// A gridline across the plot area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisGridLine {
    /// Draw between values rather than at them.
    pub centered: bool,
    /// Line stroke.
    pub stroke: Option<Stroke>,
}

/// A tick at the plot edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTick {
    /// Draw between values rather than at them.
    pub centered: bool,
    /// Tick length.
    pub length: AxisTickLength,
    /// Tick stroke.
    pub stroke: Option<Stroke>,
}

/// Tick lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisTickLength {
    /// Let the chart decide.
    #[default]
    Automatic,
    /// Extend to the value label.
    Label,
    /// Extend to the longest value label.
    LongestLabel,
}

/// A label showing the axis value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisValueLabel {
    /// Draw between values rather than at them.
    pub centered: bool,
    /// Anchor point of the label, in unit coordinates.
    pub anchor: Option<Point>,
    /// Alignment of multi-line labels.
    pub multi_label_alignment: Option<Alignment>,
    /// What happens when labels collide.
    pub collision_resolution: AxisValueLabelCollisionResolution,
    /// Offset neighboring marks to make room for the label.
    pub offsets_marks: bool,
    /// Text orientation.
    pub orientation: AxisValueLabelOrientation,
    /// Horizontal spacing from the anchor.
    pub horizontal_spacing: Option<f64>,
    /// Vertical spacing from the anchor.
    pub vertical_spacing: Option<f64>,
    /// Label format; `None` uses [`AxisValueLabel::content`] or the default format.
    pub format: Option<AxisFormat>,
    /// Custom label view.
    pub content: Option<ViewTemplate>,
}

/// Collision handling for value labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisValueLabelCollisionResolution {
    /// Let the chart decide.
    #[default]
    Automatic,
    /// Drop labels greedily in value order.
    Greedy,
    /// Truncate labels.
    Truncate,
    /// Draw all labels.
    Disabled,
}

/// Text orientation for value labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisValueLabelOrientation {
    /// Let the chart decide.
    #[default]
    Automatic,
    /// Horizontal text.
    Horizontal,
    /// Text rotated a quarter turn counter-clockwise.
    Vertical,
    /// Text rotated a quarter turn clockwise.
    VerticalReversed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_marks_default_to_automatic_everything() {
        let marks = AxisMarks::new();
        assert_eq!(marks.preset, AxisMarkPreset::Automatic);
        assert_eq!(marks.position, AxisMarkPosition::Automatic);
        assert_eq!(marks.values, AxisMarkValues::default());
        assert_eq!(marks.content, AxisMarksContent::Default);
        assert!(marks.format.is_none());
    }

    #[test]
    fn axis_mark_concat_keeps_document_order() {
        let marks = AxisMark::empty()
            .concat(AxisMark::GridLine(AxisGridLine::default()))
            .concat(AxisMark::Tick(AxisTick::default()))
            .concat(AxisMark::ValueLabel(AxisValueLabel::default()));
        let kinds: Vec<_> = marks
            .items()
            .iter()
            .map(|m| match m {
                AxisMark::GridLine(_) => "grid",
                AxisMark::Tick(_) => "tick",
                AxisMark::ValueLabel(_) => "label",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, ["grid", "tick", "label"]);
    }
}
