// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol shapes for point-like marks and legends.

/// The built-in symbol shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolShape {
    /// A circle.
    Circle,
    /// A square (axis-aligned).
    Square,
    /// An upward-pointing triangle.
    Triangle,
    /// A square rotated by 45 degrees.
    Diamond,
    /// A regular pentagon.
    Pentagon,
    /// A plus sign.
    Plus,
    /// A diagonal cross.
    Cross,
    /// An asterisk.
    Asterisk,
}

impl SymbolShape {
    /// All shapes, in the default symbol-scale cycling order.
    pub const ALL: [Self; 8] = [
        Self::Circle,
        Self::Square,
        Self::Triangle,
        Self::Diamond,
        Self::Pentagon,
        Self::Plus,
        Self::Cross,
        Self::Asterisk,
    ];
}
