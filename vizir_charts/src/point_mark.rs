// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point marks.

use crate::geometry::{MarkGeometry, ShapeKind, ShapeSet};
use crate::mark::{ChartMark, MarkKind};

/// A symbol drawn at a position.
///
/// Besides `x`/`y` pairs, a point can be placed along one axis with a fixed (or default)
/// coordinate on the other axis.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMark {
    geometry: MarkGeometry,
}

impl PointMark {
    /// Creates a point mark, if the geometry's shape is supported.
    pub fn new(geometry: MarkGeometry) -> Option<Self> {
        Self::SHAPES
            .contains(geometry.kind())
            .then_some(Self { geometry })
    }
}

impl ChartMark for PointMark {
    const KIND: MarkKind = MarkKind::Point;
    const SHAPES: ShapeSet = ShapeSet::of(&[ShapeKind::Simple, ShapeKind::Fixed]);

    fn try_from_geometry(geometry: MarkGeometry) -> Option<Self> {
        Self::new(geometry)
    }

    fn geometry(&self) -> &MarkGeometry {
        &self.geometry
    }
}
