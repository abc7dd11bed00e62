// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mark sum type and the capability trait shared by mark types.

use crate::geometry::{MarkGeometry, ShapeSet};
use crate::{AreaMark, BarMark, LineMark, PointMark, RectangleMark, RuleMark};

/// Mark type discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// [`AreaMark`].
    Area,
    /// [`BarMark`].
    Bar,
    /// [`LineMark`].
    Line,
    /// [`PointMark`].
    Point,
    /// [`RectangleMark`].
    Rectangle,
    /// [`RuleMark`].
    Rule,
}

/// A mark type with a declared set of supported shapes.
///
/// Construction is checked: [`ChartMark::try_from_geometry`] returns `None` for geometry whose
/// kind is not in [`ChartMark::SHAPES`], so a mark value always carries a supported shape.
pub trait ChartMark: Sized + Into<Mark> {
    /// Mark type discriminant.
    const KIND: MarkKind;
    /// Shapes this mark type can be constructed with.
    const SHAPES: ShapeSet;

    /// Builds a mark with default options, if `geometry` has a supported shape.
    fn try_from_geometry(geometry: MarkGeometry) -> Option<Self>;

    /// Returns the mark's geometry.
    fn geometry(&self) -> &MarkGeometry;
}

/// One resolved mark.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    /// An area mark.
    Area(AreaMark),
    /// A bar mark.
    Bar(BarMark),
    /// A line mark.
    Line(LineMark),
    /// A point mark.
    Point(PointMark),
    /// A rectangle mark.
    Rectangle(RectangleMark),
    /// A rule mark.
    Rule(RuleMark),
}

impl Mark {
    /// Returns the mark type.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Area(_) => MarkKind::Area,
            Self::Bar(_) => MarkKind::Bar,
            Self::Line(_) => MarkKind::Line,
            Self::Point(_) => MarkKind::Point,
            Self::Rectangle(_) => MarkKind::Rectangle,
            Self::Rule(_) => MarkKind::Rule,
        }
    }

    /// Returns the mark's geometry.
    pub fn geometry(&self) -> &MarkGeometry {
        match self {
            Self::Area(m) => m.geometry(),
            Self::Bar(m) => m.geometry(),
            Self::Line(m) => m.geometry(),
            Self::Point(m) => m.geometry(),
            Self::Rectangle(m) => m.geometry(),
            Self::Rule(m) => m.geometry(),
        }
    }
}

macro_rules! impl_into_mark {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Mark {
                fn from(mark: $ty) -> Self {
                    Self::$variant(mark)
                }
            }
        )*
    };
}

impl_into_mark!(
    AreaMark => Area,
    BarMark => Bar,
    LineMark => Line,
    PointMark => Point,
    RectangleMark => Rectangle,
    RuleMark => Rule,
);
