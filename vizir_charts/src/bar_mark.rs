// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar marks.

use crate::geometry::{MarkGeometry, ShapeKind, ShapeSet};
use crate::mark::{ChartMark, MarkKind};
use crate::style::{MarkDimension, MarkStackingMethod};

/// A bar (or a horizontal bar, for x-ranged geometry).
///
/// `width`, `height` and `stacking` are `None` when the element did not set them; the
/// renderer applies its own defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    geometry: MarkGeometry,
    /// Bar width.
    pub width: Option<MarkDimension>,
    /// Bar height.
    pub height: Option<MarkDimension>,
    /// Stacking behavior.
    pub stacking: Option<MarkStackingMethod>,
}

impl BarMark {
    /// Creates a bar mark with default options.
    ///
    /// Returns `None` if the geometry's shape is not in [`ChartMark::SHAPES`].
    pub fn new(geometry: MarkGeometry) -> Option<Self> {
        Self::SHAPES.contains(geometry.kind()).then_some(Self {
            geometry,
            width: None,
            height: None,
            stacking: None,
        })
    }

    /// Sets the bar width.
    pub fn with_width(mut self, width: MarkDimension) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the bar height.
    pub fn with_height(mut self, height: MarkDimension) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the stacking behavior.
    pub fn with_stacking(mut self, stacking: MarkStackingMethod) -> Self {
        self.stacking = Some(stacking);
        self
    }
}

impl ChartMark for BarMark {
    const KIND: MarkKind = MarkKind::Bar;
    const SHAPES: ShapeSet = ShapeSet::of(&[
        ShapeKind::Simple,
        ShapeKind::Range,
        ShapeKind::FixedRange,
        ShapeKind::FixedBidirectionalRange,
    ]);

    fn try_from_geometry(geometry: MarkGeometry) -> Option<Self> {
        Self::new(geometry)
    }

    fn geometry(&self) -> &MarkGeometry {
        &self.geometry
    }
}
