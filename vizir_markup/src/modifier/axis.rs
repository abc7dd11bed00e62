// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis modifier descriptors.

use kurbo::Vec2;
use serde::{Deserialize, Deserializer, de};
use vizir_charts::{AxisContentModifier, AxisMarkModifier, ShapeStyle};

use super::ModifierDescriptor;
use super::json::{JsonFont, Named};
use crate::context::BuilderContext;
use crate::dom::Element;
use crate::error::{Family, ModifierError};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum AxisMarkDescriptor {
    Font {
        font: JsonFont,
    },
    ForegroundStyle {
        style: Named<ShapeStyle>,
    },
    Offset {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
}

impl ModifierDescriptor for AxisMarkDescriptor {
    type Modifier = AxisMarkModifier;

    const FAMILY: Family = Family::AxisMark;
    const KINDS: &'static [&'static str] = &["font", "foreground_style", "offset"];

    fn into_modifier(
        self,
        _element: &Element,
        _ctx: &BuilderContext<'_>,
    ) -> Result<AxisMarkModifier, ModifierError> {
        Ok(match self {
            Self::Font { font } => AxisMarkModifier::Font(font.into()),
            Self::ForegroundStyle { style: Named(style) } => {
                AxisMarkModifier::ForegroundStyle(style)
            }
            Self::Offset { x, y } => AxisMarkModifier::Offset(Vec2::new(x, y)),
        })
    }
}

/// Axis content has no modifiers; every entry is reported as unknown before decoding.
#[derive(Debug)]
pub(crate) enum AxisContentDescriptor {}

impl<'de> Deserialize<'de> for AxisContentDescriptor {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(de::Error::custom("axis content takes no modifiers"))
    }
}

impl ModifierDescriptor for AxisContentDescriptor {
    type Modifier = AxisContentModifier;

    const FAMILY: Family = Family::AxisContent;
    const KINDS: &'static [&'static str] = &[];

    fn into_modifier(
        self,
        _element: &Element,
        _ctx: &BuilderContext<'_>,
    ) -> Result<AxisContentModifier, ModifierError> {
        match self {}
    }
}
