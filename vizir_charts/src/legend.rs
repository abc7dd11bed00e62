// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend configuration.

use crate::chart::Visibility;
use crate::content::ViewTemplate;
use crate::style::{Alignment, AnnotationPosition};

/// How the chart legend is shown.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartLegend {
    /// Show or hide the default legend.
    Visibility(Visibility),
    /// Place the legend, optionally with custom content.
    Placed(LegendPlacement),
}

/// Legend placement and content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendPlacement {
    /// Side of the plot the legend sits on.
    pub position: AnnotationPosition,
    /// Alignment within that side.
    pub alignment: Option<Alignment>,
    /// Distance from the plot, in points.
    pub spacing: Option<f64>,
    /// Custom legend view; `None` uses the default legend.
    pub content: Option<ViewTemplate>,
}
