// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark geometry: which constructor variant ("shape") a mark was built with.
//!
//! Every mark type supports a subset of shapes, declared as a [`ShapeSet`] constant on the
//! mark type (see [`crate::ChartMark::SHAPES`]). A [`MarkGeometry`] carries the resolved inputs
//! for exactly one shape.

use core::fmt;

use crate::plottable::PlottableValue;

/// A chart dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkAxis {
    /// The horizontal dimension.
    X,
    /// The vertical dimension.
    Y,
}

impl MarkAxis {
    /// Returns the other dimension.
    pub fn cross(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// The shape kinds a mark can be constructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `x` and `y` plottables.
    Simple,
    /// `x`, `y` and `series` plottables.
    Series,
    /// A plottable range on one axis and a plottable on the other.
    Range,
    /// [`ShapeKind::Range`] plus a `series` plottable.
    RangeSeries,
    /// A plottable on one axis and an optional fixed coordinate on the other.
    Fixed,
    /// A plottable on one axis and an optional fixed range on the other.
    FixedRange,
    /// A plottable range on one axis and an optional fixed coordinate on the other.
    RangeFixed,
    /// Plottable ranges on both axes.
    BidirectionalRange,
    /// A plottable range on one axis and an optional fixed range on the other.
    FixedBidirectionalRange,
}

impl ShapeKind {
    /// All shape kinds, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Simple,
        Self::Series,
        Self::Range,
        Self::RangeSeries,
        Self::Fixed,
        Self::FixedRange,
        Self::RangeFixed,
        Self::BidirectionalRange,
        Self::FixedBidirectionalRange,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A set of [`ShapeKind`]s, stored as a bitset.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShapeSet(u16);

impl ShapeSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a list of kinds.
    pub const fn of(kinds: &[ShapeKind]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Returns this set with `kind` added.
    pub const fn with(self, kind: ShapeKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Returns `true` if `kind` is in the set.
    pub const fn contains(self, kind: ShapeKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Returns `true` if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the kinds in the set, in [`ShapeKind::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = ShapeKind> {
        ShapeKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl fmt::Debug for ShapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The resolved inputs of a mark, for exactly one [`ShapeKind`].
///
/// For the ranged and fixed variants, `axis` names the dimension that carries plottable data:
/// - [`MarkGeometry::Range`] / [`MarkGeometry::RangeSeries`]: the axis of the plottable range;
///   `value` sits on the cross axis.
/// - the `Fixed*` variants: the axis of the plottable input; the fixed (screen-space) values
///   sit on the cross axis.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkGeometry {
    /// See [`ShapeKind::Simple`].
    Simple {
        /// Horizontal input.
        x: PlottableValue,
        /// Vertical input.
        y: PlottableValue,
    },
    /// See [`ShapeKind::Series`].
    Series {
        /// Horizontal input.
        x: PlottableValue,
        /// Vertical input.
        y: PlottableValue,
        /// Series grouping input.
        series: PlottableValue,
    },
    /// See [`ShapeKind::Range`].
    Range {
        /// Axis of the range.
        axis: MarkAxis,
        /// Cross-axis input.
        value: PlottableValue,
        /// Range start.
        start: PlottableValue,
        /// Range end.
        end: PlottableValue,
    },
    /// See [`ShapeKind::RangeSeries`].
    RangeSeries {
        /// Axis of the range.
        axis: MarkAxis,
        /// Cross-axis input.
        value: PlottableValue,
        /// Range start.
        start: PlottableValue,
        /// Range end.
        end: PlottableValue,
        /// Series grouping input.
        series: PlottableValue,
    },
    /// See [`ShapeKind::Fixed`].
    Fixed {
        /// Axis of the plottable input.
        axis: MarkAxis,
        /// Plottable input.
        value: PlottableValue,
        /// Fixed cross-axis coordinate.
        fixed: Option<f64>,
    },
    /// See [`ShapeKind::FixedRange`].
    FixedRange {
        /// Axis of the plottable input.
        axis: MarkAxis,
        /// Plottable input.
        value: PlottableValue,
        /// Fixed cross-axis start.
        start: Option<f64>,
        /// Fixed cross-axis end.
        end: Option<f64>,
    },
    /// See [`ShapeKind::RangeFixed`].
    RangeFixed {
        /// Axis of the plottable range.
        axis: MarkAxis,
        /// Range start.
        start: PlottableValue,
        /// Range end.
        end: PlottableValue,
        /// Fixed cross-axis coordinate.
        fixed: Option<f64>,
    },
    /// See [`ShapeKind::BidirectionalRange`].
    BidirectionalRange {
        /// Horizontal range start.
        x_start: PlottableValue,
        /// Horizontal range end.
        x_end: PlottableValue,
        /// Vertical range start.
        y_start: PlottableValue,
        /// Vertical range end.
        y_end: PlottableValue,
    },
    /// See [`ShapeKind::FixedBidirectionalRange`].
    FixedBidirectionalRange {
        /// Axis of the plottable range.
        axis: MarkAxis,
        /// Range start.
        start: PlottableValue,
        /// Range end.
        end: PlottableValue,
        /// Fixed cross-axis start.
        fixed_start: Option<f64>,
        /// Fixed cross-axis end.
        fixed_end: Option<f64>,
    },
}

impl MarkGeometry {
    /// Returns the shape kind of this geometry.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Simple { .. } => ShapeKind::Simple,
            Self::Series { .. } => ShapeKind::Series,
            Self::Range { .. } => ShapeKind::Range,
            Self::RangeSeries { .. } => ShapeKind::RangeSeries,
            Self::Fixed { .. } => ShapeKind::Fixed,
            Self::FixedRange { .. } => ShapeKind::FixedRange,
            Self::RangeFixed { .. } => ShapeKind::RangeFixed,
            Self::BidirectionalRange { .. } => ShapeKind::BidirectionalRange,
            Self::FixedBidirectionalRange { .. } => ShapeKind::FixedBidirectionalRange,
        }
    }

    /// Returns the axis carrying plottable data, for shapes that have one.
    pub fn axis(&self) -> Option<MarkAxis> {
        match self {
            Self::Range { axis, .. }
            | Self::RangeSeries { axis, .. }
            | Self::Fixed { axis, .. }
            | Self::FixedRange { axis, .. }
            | Self::RangeFixed { axis, .. }
            | Self::FixedBidirectionalRange { axis, .. } => Some(*axis),
            Self::Simple { .. } | Self::Series { .. } | Self::BidirectionalRange { .. } => None,
        }
    }

    /// Returns the series input, if any.
    pub fn series(&self) -> Option<&PlottableValue> {
        match self {
            Self::Series { series, .. } | Self::RangeSeries { series, .. } => Some(series),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_set_membership_matches_declared_kinds() {
        const SET: ShapeSet = ShapeSet::of(&[ShapeKind::Simple, ShapeKind::FixedRange]);
        assert!(SET.contains(ShapeKind::Simple));
        assert!(SET.contains(ShapeKind::FixedRange));
        assert!(!SET.contains(ShapeKind::Series));
        assert_eq!(
            SET.iter().collect::<Vec<_>>(),
            vec![ShapeKind::Simple, ShapeKind::FixedRange]
        );
        assert!(ShapeSet::EMPTY.is_empty());
        assert!(ShapeSet::EMPTY.with(ShapeKind::Series).contains(ShapeKind::Series));
    }

    #[test]
    fn geometry_reports_kind_and_data_axis() {
        let g = MarkGeometry::Range {
            axis: MarkAxis::Y,
            value: PlottableValue::new("X", 0.0),
            start: PlottableValue::new("S", 0.0),
            end: PlottableValue::new("E", 1.0),
        };
        assert_eq!(g.kind(), ShapeKind::Range);
        assert_eq!(g.axis(), Some(MarkAxis::Y));
        assert_eq!(g.series(), None);
        assert_eq!(MarkAxis::Y.cross(), MarkAxis::X);
    }
}
