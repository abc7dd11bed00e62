// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle marks.

use crate::geometry::{MarkGeometry, ShapeKind, ShapeSet};
use crate::mark::{ChartMark, MarkKind};
use crate::style::MarkDimension;

/// A rectangle, either centered on a point or spanning ranges.
#[derive(Clone, Debug, PartialEq)]
pub struct RectangleMark {
    geometry: MarkGeometry,
    /// Rectangle width, for point and one-sided range geometry.
    pub width: Option<MarkDimension>,
    /// Rectangle height, for point and one-sided range geometry.
    pub height: Option<MarkDimension>,
}

impl RectangleMark {
    /// Creates a rectangle mark, if the geometry's shape is supported.
    pub fn new(geometry: MarkGeometry) -> Option<Self> {
        Self::SHAPES.contains(geometry.kind()).then_some(Self {
            geometry,
            width: None,
            height: None,
        })
    }

    /// Sets the rectangle width.
    pub fn with_width(mut self, width: MarkDimension) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the rectangle height.
    pub fn with_height(mut self, height: MarkDimension) -> Self {
        self.height = Some(height);
        self
    }
}

impl ChartMark for RectangleMark {
    const KIND: MarkKind = MarkKind::Rectangle;
    const SHAPES: ShapeSet = ShapeSet::of(&[
        ShapeKind::Simple,
        ShapeKind::Range,
        ShapeKind::BidirectionalRange,
        ShapeKind::FixedBidirectionalRange,
    ]);

    fn try_from_geometry(geometry: MarkGeometry) -> Option<Self> {
        Self::new(geometry)
    }

    fn geometry(&self) -> &MarkGeometry {
        &self.geometry
    }
}
