// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark shape inference.
//!
//! A mark element does not say which shape it is; the shape follows from which attributes are
//! present. [`ShapeInputs::resolve`] walks the shapes in a fixed priority order and returns the
//! first one that the mark type supports and whose inputs are all present:
//!
//! | # | Shape | Inputs |
//! |---|---|---|
//! | 1 | `Series` | `x`, `y`, `series` |
//! | 2 | `Simple` | `x`, `y` |
//! | 3 | `RangeSeries` | `x_start`, `x_end`, `y`, `series` |
//! | 4 | `Range` | `x_start`, `x_end`, `y` |
//! | 5 | `RangeSeries` | `x`, `y_start`, `y_end`, `series` |
//! | 6 | `Range` | `x`, `y_start`, `y_end` |
//! | 7 | `BidirectionalRange` | `x_start`, `x_end`, `y_start`, `y_end` |
//! | 8 | `Fixed` | `x`, fixed `y` |
//! | 9 | `Fixed` | `y`, fixed `x` |
//! | 10 | `FixedBidirectionalRange` | `x_start`, `x_end`, fixed `y_start`, `y_end` |
//! | 11 | `FixedBidirectionalRange` | `y_start`, `y_end`, fixed `x_start`, `x_end` |
//! | 12 | `RangeFixed` | `x_start`, `x_end`, fixed `y` |
//! | 13 | `RangeFixed` | `y_start`, `y_end`, fixed `x` |
//! | 14 | `FixedRange` | `x`, fixed `y_start`, `y_end` |
//! | 15 | `FixedRange` | `y`, fixed `x_start`, `x_end` |
//!
//! Marks that prefer vertical ranges (`RuleMark`) try rows 5 and 6 before rows 3 and 4.
//!
//! Fixed values are optional: they are the raw attribute parsed as a number, and are absent when
//! the attribute is missing or not numeric.
//!
//! A plottable range whose ends have different kinds is treated as absent. It is reported only
//! when it would otherwise have decided the shape.

use vizir_charts::{MarkAxis, MarkGeometry, PlottableValue, ShapeKind, ShapeSet};

use crate::context::BuilderContext;
use crate::dom::Element;
use crate::error::Diagnostic;
use crate::plottable::{fixed_value, resolve_plottable};

/// Plottable and fixed inputs read from a mark element.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ShapeInputs {
    x: Option<PlottableValue>,
    y: Option<PlottableValue>,
    x_start: Option<PlottableValue>,
    x_end: Option<PlottableValue>,
    y_start: Option<PlottableValue>,
    y_end: Option<PlottableValue>,
    series: Option<PlottableValue>,
    fixed_x: Option<f64>,
    fixed_y: Option<f64>,
    fixed_x_start: Option<f64>,
    fixed_x_end: Option<f64>,
    fixed_y_start: Option<f64>,
    fixed_y_end: Option<f64>,
}

impl ShapeInputs {
    /// Reads every shape input from `element`.
    pub(crate) fn read(element: &Element) -> Self {
        Self {
            x: resolve_plottable(element, "x"),
            y: resolve_plottable(element, "y"),
            x_start: resolve_plottable(element, "x_start"),
            x_end: resolve_plottable(element, "x_end"),
            y_start: resolve_plottable(element, "y_start"),
            y_end: resolve_plottable(element, "y_end"),
            series: resolve_plottable(element, "series"),
            fixed_x: fixed_value(element, "x"),
            fixed_y: fixed_value(element, "y"),
            fixed_x_start: fixed_value(element, "x_start"),
            fixed_x_end: fixed_value(element, "x_end"),
            fixed_y_start: fixed_value(element, "y_start"),
            fixed_y_end: fixed_value(element, "y_end"),
        }
    }

    /// Returns the highest-priority geometry in `shapes` whose inputs are present.
    ///
    /// Mixed-kind ranges are ignored. One is reported against `tag` when restoring it would
    /// change the result.
    pub(crate) fn resolve(
        &self,
        shapes: ShapeSet,
        y_range_first: bool,
        tag: &str,
        ctx: &BuilderContext<'_>,
    ) -> Option<MarkGeometry> {
        let mixed_axes: Vec<MarkAxis> = [MarkAxis::X, MarkAxis::Y]
            .into_iter()
            .filter(|&axis| {
                let (start, end) = self.range(axis);
                mixed(start, end)
            })
            .collect();

        let mut checked = self.clone();
        for &axis in &mixed_axes {
            checked.set_range(axis, None, None);
        }
        let geometry = checked.pick(shapes, y_range_first);

        for axis in mixed_axes {
            let (start, end) = self.range(axis);
            let mut raw = checked.clone();
            raw.set_range(axis, start.clone(), end.clone());
            if raw.pick(shapes, y_range_first) != geometry {
                ctx.report(Diagnostic::MixedRangeTypes {
                    tag: tag.into(),
                    attribute: match axis {
                        MarkAxis::X => "x",
                        MarkAxis::Y => "y",
                    }
                    .into(),
                });
            }
        }
        geometry
    }

    fn range(&self, axis: MarkAxis) -> (&Option<PlottableValue>, &Option<PlottableValue>) {
        match axis {
            MarkAxis::X => (&self.x_start, &self.x_end),
            MarkAxis::Y => (&self.y_start, &self.y_end),
        }
    }

    fn set_range(
        &mut self,
        axis: MarkAxis,
        start: Option<PlottableValue>,
        end: Option<PlottableValue>,
    ) {
        match axis {
            MarkAxis::X => (self.x_start, self.x_end) = (start, end),
            MarkAxis::Y => (self.y_start, self.y_end) = (start, end),
        }
    }

    /// Rows 3 to 6: a plottable range on `axis` against a plottable on the other axis.
    fn range_shape(&self, shapes: ShapeSet, axis: MarkAxis) -> Option<MarkGeometry> {
        let (start, end) = self.range(axis);
        let value = match axis {
            MarkAxis::X => &self.y,
            MarkAxis::Y => &self.x,
        };
        let ((start, end), value) = both(start, end).zip(value.as_ref())?;
        if shapes.contains(ShapeKind::RangeSeries)
            && let Some(series) = &self.series
        {
            return Some(MarkGeometry::RangeSeries {
                axis,
                value: value.clone(),
                start: start.clone(),
                end: end.clone(),
                series: series.clone(),
            });
        }
        if shapes.contains(ShapeKind::Range) {
            return Some(MarkGeometry::Range {
                axis,
                value: value.clone(),
                start: start.clone(),
                end: end.clone(),
            });
        }
        None
    }

    /// The priority walk itself, without mixed-range handling.
    fn pick(&self, shapes: ShapeSet, y_range_first: bool) -> Option<MarkGeometry> {
        use ShapeKind as K;

        let supports = |kind| shapes.contains(kind);
        let x_range = both(&self.x_start, &self.x_end);
        let y_range = both(&self.y_start, &self.y_end);

        if supports(K::Series)
            && let (Some(x), Some(y), Some(series)) = (&self.x, &self.y, &self.series)
        {
            return Some(MarkGeometry::Series {
                x: x.clone(),
                y: y.clone(),
                series: series.clone(),
            });
        }
        if supports(K::Simple)
            && let (Some(x), Some(y)) = (&self.x, &self.y)
        {
            return Some(MarkGeometry::Simple {
                x: x.clone(),
                y: y.clone(),
            });
        }
        let range_axes = if y_range_first {
            [MarkAxis::Y, MarkAxis::X]
        } else {
            [MarkAxis::X, MarkAxis::Y]
        };
        for axis in range_axes {
            if let Some(geometry) = self.range_shape(shapes, axis) {
                return Some(geometry);
            }
        }
        if supports(K::BidirectionalRange)
            && let (Some((x_start, x_end)), Some((y_start, y_end))) = (x_range, y_range)
        {
            return Some(MarkGeometry::BidirectionalRange {
                x_start: x_start.clone(),
                x_end: x_end.clone(),
                y_start: y_start.clone(),
                y_end: y_end.clone(),
            });
        }
        if supports(K::Fixed) {
            if let Some(x) = &self.x {
                return Some(MarkGeometry::Fixed {
                    axis: MarkAxis::X,
                    value: x.clone(),
                    fixed: self.fixed_y,
                });
            }
            if let Some(y) = &self.y {
                return Some(MarkGeometry::Fixed {
                    axis: MarkAxis::Y,
                    value: y.clone(),
                    fixed: self.fixed_x,
                });
            }
        }
        if supports(K::FixedBidirectionalRange) {
            if let Some((start, end)) = x_range {
                return Some(MarkGeometry::FixedBidirectionalRange {
                    axis: MarkAxis::X,
                    start: start.clone(),
                    end: end.clone(),
                    fixed_start: self.fixed_y_start,
                    fixed_end: self.fixed_y_end,
                });
            }
            if let Some((start, end)) = y_range {
                return Some(MarkGeometry::FixedBidirectionalRange {
                    axis: MarkAxis::Y,
                    start: start.clone(),
                    end: end.clone(),
                    fixed_start: self.fixed_x_start,
                    fixed_end: self.fixed_x_end,
                });
            }
        }
        if supports(K::RangeFixed) {
            if let Some((start, end)) = x_range {
                return Some(MarkGeometry::RangeFixed {
                    axis: MarkAxis::X,
                    start: start.clone(),
                    end: end.clone(),
                    fixed: self.fixed_y,
                });
            }
            if let Some((start, end)) = y_range {
                return Some(MarkGeometry::RangeFixed {
                    axis: MarkAxis::Y,
                    start: start.clone(),
                    end: end.clone(),
                    fixed: self.fixed_x,
                });
            }
        }
        if supports(K::FixedRange) {
            if let Some(x) = &self.x {
                return Some(MarkGeometry::FixedRange {
                    axis: MarkAxis::X,
                    value: x.clone(),
                    start: self.fixed_y_start,
                    end: self.fixed_y_end,
                });
            }
            if let Some(y) = &self.y {
                return Some(MarkGeometry::FixedRange {
                    axis: MarkAxis::Y,
                    value: y.clone(),
                    start: self.fixed_x_start,
                    end: self.fixed_x_end,
                });
            }
        }
        None
    }
}

fn both<'a>(
    start: &'a Option<PlottableValue>,
    end: &'a Option<PlottableValue>,
) -> Option<(&'a PlottableValue, &'a PlottableValue)> {
    start.as_ref().zip(end.as_ref())
}

fn mixed(start: &Option<PlottableValue>, end: &Option<PlottableValue>) -> bool {
    both(start, end).is_some_and(|(start, end)| start.kind() != end.kind())
}
