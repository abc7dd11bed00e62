// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line marks.

use crate::geometry::{MarkGeometry, ShapeKind, ShapeSet};
use crate::mark::{ChartMark, MarkKind};

/// One vertex of a polyline; marks sharing a series are joined.
#[derive(Clone, Debug, PartialEq)]
pub struct LineMark {
    geometry: MarkGeometry,
}

impl LineMark {
    /// Creates a line mark, if the geometry's shape is supported.
    pub fn new(geometry: MarkGeometry) -> Option<Self> {
        Self::SHAPES
            .contains(geometry.kind())
            .then_some(Self { geometry })
    }
}

impl ChartMark for LineMark {
    const KIND: MarkKind = MarkKind::Line;
    const SHAPES: ShapeSet = ShapeSet::of(&[ShapeKind::Simple, ShapeKind::Series]);

    fn try_from_geometry(geometry: MarkGeometry) -> Option<Self> {
        Self::new(geometry)
    }

    fn geometry(&self) -> &MarkGeometry {
        &self.geometry
    }
}
