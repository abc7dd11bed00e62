// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule marks.

use crate::geometry::{MarkGeometry, ShapeKind, ShapeSet};
use crate::mark::{ChartMark, MarkKind};

/// A straight line segment spanning a range, or a full-width/height reference line.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMark {
    geometry: MarkGeometry,
}

impl RuleMark {
    /// Creates a rule mark, if the geometry's shape is supported.
    pub fn new(geometry: MarkGeometry) -> Option<Self> {
        Self::SHAPES
            .contains(geometry.kind())
            .then_some(Self { geometry })
    }
}

impl ChartMark for RuleMark {
    const KIND: MarkKind = MarkKind::Rule;
    const SHAPES: ShapeSet = ShapeSet::of(&[ShapeKind::Range, ShapeKind::FixedRange]);

    fn try_from_geometry(geometry: MarkGeometry) -> Option<Self> {
        Self::new(geometry)
    }

    fn geometry(&self) -> &MarkGeometry {
        &self.geometry
    }
}
