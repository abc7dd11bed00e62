// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area marks.

use crate::geometry::{MarkGeometry, ShapeKind, ShapeSet};
use crate::mark::{ChartMark, MarkKind};
use crate::style::MarkStackingMethod;

/// A filled area between a baseline (or a range) and a value.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaMark {
    geometry: MarkGeometry,
    /// Stacking behavior, for simple and series areas.
    pub stacking: Option<MarkStackingMethod>,
}

impl AreaMark {
    /// Creates an area mark, if the geometry's shape is supported.
    pub fn new(geometry: MarkGeometry) -> Option<Self> {
        Self::SHAPES.contains(geometry.kind()).then_some(Self {
            geometry,
            stacking: None,
        })
    }

    /// Sets the stacking behavior.
    pub fn with_stacking(mut self, stacking: MarkStackingMethod) -> Self {
        self.stacking = Some(stacking);
        self
    }
}

impl ChartMark for AreaMark {
    const KIND: MarkKind = MarkKind::Area;
    const SHAPES: ShapeSet = ShapeSet::of(&[
        ShapeKind::Simple,
        ShapeKind::Series,
        ShapeKind::Range,
        ShapeKind::RangeSeries,
    ]);

    fn try_from_geometry(geometry: MarkGeometry) -> Option<Self> {
        Self::new(geometry)
    }

    fn geometry(&self) -> &MarkGeometry {
        &self.geometry
    }
}
