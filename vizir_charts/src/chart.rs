// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart root: content plus chart-level configuration.

use crate::axis::AxisContent;
use crate::content::{ChartContent, ViewTemplate};
use crate::legend::ChartLegend;
use crate::scale::{ForegroundStyleScale, ScaleConfig, SymbolScale};
use crate::style::{Alignment, AnnotationPosition};

/// A resolved chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    /// Plotted content.
    pub content: ChartContent,
    /// Chart-level configuration, in the order it was declared.
    pub modifiers: Vec<ChartModifier>,
}

impl Chart {
    /// Creates a chart with no configuration.
    pub fn new(content: ChartContent) -> Self {
        Self {
            content,
            modifiers: Vec::new(),
        }
    }

    /// Appends a chart-level modifier.
    pub fn with_modifier(mut self, modifier: ChartModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Returns the last axis configuration declared for `axis`.
    pub fn axis(&self, axis: ChartAxis) -> Option<&AxisConfig> {
        self.modifiers.iter().rev().find_map(|m| match (m, axis) {
            (ChartModifier::XAxis(config), ChartAxis::X)
            | (ChartModifier::YAxis(config), ChartAxis::Y) => Some(config),
            _ => None,
        })
    }
}

/// A chart dimension, for chart-level modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartAxis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

/// Visibility of a chart element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Let the chart decide.
    #[default]
    Automatic,
    /// Always shown.
    Visible,
    /// Never shown.
    Hidden,
}

/// Chart-level configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartModifier {
    /// Horizontal axis.
    XAxis(AxisConfig),
    /// Vertical axis.
    YAxis(AxisConfig),
    /// Horizontal axis label.
    XAxisLabel(AxisLabel),
    /// Vertical axis label.
    YAxisLabel(AxisLabel),
    /// Horizontal scale.
    XScale(ScaleConfig),
    /// Vertical scale.
    YScale(ScaleConfig),
    /// Legend.
    Legend(ChartLegend),
    /// View drawn over the plot.
    Overlay(ChartDecoration),
    /// View drawn behind the plot.
    Background(ChartDecoration),
    /// Symbol scale.
    SymbolScale(SymbolScale),
    /// Foreground style scale.
    ForegroundStyleScale(ForegroundStyleScale),
}

/// Axis configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisConfig {
    /// Show or hide the default axis.
    Visibility(Visibility),
    /// Custom axis content.
    Content(AxisContent),
}

/// An axis title.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    /// Title text or view.
    pub title: AxisLabelTitle,
    /// Placement relative to the axis.
    pub position: AnnotationPosition,
    /// Alignment along the axis.
    pub alignment: Option<Alignment>,
    /// Distance from the axis, in points.
    pub spacing: Option<f64>,
}

/// The content of an [`AxisLabel`].
#[derive(Clone, Debug, PartialEq)]
pub enum AxisLabelTitle {
    /// Plain text.
    Text(String),
    /// A custom view.
    View(ViewTemplate),
}

/// A view drawn over or behind the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDecoration {
    /// Alignment within the plot area.
    pub alignment: Alignment,
    /// The view.
    pub content: ViewTemplate,
}
