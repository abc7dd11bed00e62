// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart content modifier descriptors.

use kurbo::Vec2;
use peniko::Color;
use peniko::color::palette::css::BLACK;
use serde::Deserialize;
use vizir_charts::{
    Alignment, Annotation, AnnotationPosition, ClipShape, ContentModifier, InterpolationMethod,
    MarkDimension, Offset, OverflowResolution, PositionAxis, RoundedCornerStyle, ShapeStyle,
    StyleSource, Symbol, SymbolShape, SymbolSize,
};

use super::ModifierDescriptor;
use super::json::{
    JsonFillStyle, JsonOverflowStrategy, JsonSize, JsonStroke, Named, named,
};
use crate::attribute::normalize_key;
use crate::builder::{ChartContentBuilder, build_template, view_template};
use crate::context::BuilderContext;
use crate::dom::Element;
use crate::error::{Family, ModifierError};
use crate::plottable::AnyPlottableValue;

/// Shadow color when none is given.
const SHADOW_ALPHA: f32 = 0.33;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentDescriptor {
    AlignsMarkStylesWithPlotArea {
        #[serde(default = "yes")]
        aligns: bool,
    },
    Annotation {
        #[serde(default)]
        position: Option<Named<AnnotationPosition>>,
        #[serde(default)]
        alignment: Option<Named<Alignment>>,
        #[serde(default)]
        spacing: Option<f64>,
        #[serde(default, alias = "overflowResolution")]
        overflow_resolution: Option<(JsonOverflowStrategy, JsonOverflowStrategy)>,
        content: String,
    },
    Blur {
        radius: f64,
    },
    ClipShape {
        shape: String,
        #[serde(default)]
        style: JsonFillStyle,
    },
    CornerRadius {
        radius: f64,
        #[serde(default)]
        style: Option<Named<RoundedCornerStyle>>,
    },
    ForegroundStyle {
        #[serde(default)]
        value: Option<AnyPlottableValue>,
        #[serde(default)]
        style: Option<Named<ShapeStyle>>,
    },
    InterpolationMethod {
        method: Named<InterpolationMethod>,
    },
    LineStyle {
        #[serde(default)]
        value: Option<AnyPlottableValue>,
        #[serde(default)]
        style: Option<JsonStroke>,
    },
    Mask {
        content: String,
    },
    Offset {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
        #[serde(default, alias = "xStart")]
        x_start: Option<f64>,
        #[serde(default, alias = "xEnd")]
        x_end: Option<f64>,
        #[serde(default, alias = "yStart")]
        y_start: Option<f64>,
        #[serde(default, alias = "yEnd")]
        y_end: Option<f64>,
    },
    Opacity {
        opacity: f64,
    },
    Position {
        value: AnyPlottableValue,
        #[serde(default)]
        axis: Option<Named<PositionAxis>>,
        #[serde(default)]
        span: Option<Named<MarkDimension>>,
    },
    Shadow {
        #[serde(default)]
        color: Option<Named<Color>>,
        radius: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Symbol {
        #[serde(default)]
        shape: Option<Named<SymbolShape>>,
        #[serde(default)]
        value: Option<AnyPlottableValue>,
        #[serde(default)]
        content: Option<String>,
    },
    SymbolSize {
        #[serde(default)]
        value: Option<AnyPlottableValue>,
        #[serde(default)]
        area: Option<f64>,
        #[serde(default)]
        size: Option<JsonSize>,
    },
    ZIndex {
        value: i32,
    },
}

fn yes() -> bool {
    true
}

impl ModifierDescriptor for ContentDescriptor {
    type Modifier = ContentModifier;

    const FAMILY: Family = Family::ChartContent;
    const KINDS: &'static [&'static str] = &[
        "aligns_mark_styles_with_plot_area",
        "annotation",
        "blur",
        "clip_shape",
        "corner_radius",
        "foreground_style",
        "interpolation_method",
        "line_style",
        "mask",
        "offset",
        "opacity",
        "position",
        "shadow",
        "symbol",
        "symbol_size",
        "z_index",
    ];

    fn into_modifier(
        self,
        element: &Element,
        ctx: &BuilderContext<'_>,
    ) -> Result<ContentModifier, ModifierError> {
        let modifier = match self {
            Self::AlignsMarkStylesWithPlotArea { aligns } => {
                ContentModifier::AlignsMarkStylesWithPlotArea(aligns)
            }
            Self::Annotation {
                position,
                alignment,
                spacing,
                overflow_resolution,
                content,
            } => ContentModifier::Annotation(Annotation {
                position: named(position).unwrap_or_default(),
                alignment: named(alignment).unwrap_or_default(),
                spacing,
                overflow_resolution: overflow_resolution.map(|(x, y)| OverflowResolution {
                    x: x.0,
                    y: y.0,
                }),
                content: view_template(element, &content, ctx),
            }),
            Self::Blur { radius } => ContentModifier::Blur(radius),
            Self::ClipShape { shape, style } => ContentModifier::ClipShape {
                shape: clip_shape(&shape, element, ctx),
                style: style.into(),
            },
            Self::CornerRadius { radius, style } => ContentModifier::CornerRadius {
                radius,
                style: named(style).unwrap_or_default(),
            },
            Self::ForegroundStyle { value, style } => match (value, style) {
                (Some(value), None) => {
                    ContentModifier::ForegroundStyle(StyleSource::By(value.into()))
                }
                (None, Some(Named(style))) => {
                    ContentModifier::ForegroundStyle(StyleSource::Fixed(style))
                }
                (Some(_), Some(_)) => {
                    return Err(ModifierError::Value {
                        kind: "foreground_style",
                        message: "`value` and `style` are mutually exclusive".into(),
                    });
                }
                (None, None) => {
                    return Err(ModifierError::MissingField {
                        kind: "foreground_style",
                        fields: "`value`, `style`",
                    });
                }
            },
            Self::InterpolationMethod { method } => ContentModifier::InterpolationMethod(method.0),
            Self::LineStyle { value, style } => match (style, value) {
                (Some(style), _) => ContentModifier::LineStyle(StyleSource::Fixed(style.into())),
                (None, Some(value)) => ContentModifier::LineStyle(StyleSource::By(value.into())),
                (None, None) => {
                    return Err(ModifierError::MissingField {
                        kind: "line_style",
                        fields: "`style`, `value`",
                    });
                }
            },
            Self::Mask { content } => ContentModifier::Mask(Box::new(build_template::<
                ChartContentBuilder,
            >(
                element, &content, ctx
            ))),
            Self::Offset {
                x,
                y,
                x_start,
                x_end,
                y_start,
                y_end,
            } => ContentModifier::Offset(offset(x, y, x_start, x_end, y_start, y_end)),
            Self::Opacity { opacity } => ContentModifier::Opacity(opacity),
            Self::Position { value, axis, span } => ContentModifier::Position {
                value: value.into(),
                axis: named(axis),
                span: named(span).unwrap_or_default(),
            },
            Self::Shadow {
                color,
                radius,
                x,
                y,
            } => ContentModifier::Shadow {
                color: named(color).unwrap_or(BLACK.with_alpha(SHADOW_ALPHA)),
                radius,
                offset: Vec2::new(x, y),
            },
            Self::Symbol {
                shape,
                value,
                content,
            } => {
                let symbol = if let Some(Named(shape)) = shape {
                    Symbol::Shape(shape)
                } else if let Some(value) = value {
                    Symbol::By(value.into())
                } else if let Some(key) = content {
                    Symbol::View(view_template(element, &key, ctx))
                } else {
                    return Err(ModifierError::MissingField {
                        kind: "symbol",
                        fields: "`shape`, `value`, `content`",
                    });
                };
                ContentModifier::Symbol(symbol)
            }
            Self::SymbolSize { value, area, size } => {
                let size = if let Some(value) = value {
                    SymbolSize::By(value.into())
                } else if let Some(area) = area {
                    SymbolSize::Area(area)
                } else if let Some(size) = size {
                    SymbolSize::Size(size.into())
                } else {
                    return Err(ModifierError::MissingField {
                        kind: "symbol_size",
                        fields: "`value`, `area`, `size`",
                    });
                };
                ContentModifier::SymbolSize(size)
            }
            Self::ZIndex { value } => ContentModifier::ZIndex(value),
        };
        Ok(modifier)
    }
}

/// Resolves a builtin shape name, or else a template key.
fn clip_shape(shape: &str, element: &Element, ctx: &BuilderContext<'_>) -> ClipShape {
    match normalize_key(shape).as_str() {
        "rectangle" => ClipShape::Rectangle,
        "rounded_rectangle" => ClipShape::RoundedRectangle,
        "circle" => ClipShape::Circle,
        "ellipse" => ClipShape::Ellipse,
        "capsule" => ClipShape::Capsule,
        _ => ClipShape::Template(view_template(element, shape, ctx)),
    }
}

/// Picks the offset variant from which ranges are given. Unset values are zero.
fn offset(
    x: Option<f64>,
    y: Option<f64>,
    x_start: Option<f64>,
    x_end: Option<f64>,
    y_start: Option<f64>,
    y_end: Option<f64>,
) -> Offset {
    let has_x_range = x_start.is_some() || x_end.is_some();
    let has_y_range = y_start.is_some() || y_end.is_some();
    let or_zero = |v: Option<f64>| v.unwrap_or(0.0);
    match (has_x_range, has_y_range) {
        (true, true) => Offset::Ranges {
            x_start: or_zero(x_start),
            x_end: or_zero(x_end),
            y_start: or_zero(y_start),
            y_end: or_zero(y_end),
        },
        (false, true) => Offset::YRange {
            x: or_zero(x),
            y_start: or_zero(y_start),
            y_end: or_zero(y_end),
        },
        (true, false) => Offset::XRange {
            x_start: or_zero(x_start),
            x_end: or_zero(x_end),
            y: or_zero(y),
        },
        (false, false) => Offset::Point(Vec2::new(or_zero(x), or_zero(y))),
    }
}
