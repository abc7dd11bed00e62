// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart modifier descriptors.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::Deserialize;
use vizir_charts::{
    Alignment, AnnotationPosition, AxisConfig, AxisLabel, AxisLabelTitle, ChartDecoration,
    ChartLegend, ChartModifier, LegendPlacement, ScaleConfig, ScaleDomain, ShapeStyle, StyleScale,
    SymbolShape, Visibility,
};

use super::ModifierDescriptor;
use super::json::{JsonDomain, JsonRange, JsonScaleType, Named, named};
use crate::attribute::AttributeValue;
use crate::axis::AxisContentBuilder;
use crate::builder::{build_template, view_template};
use crate::context::BuilderContext;
use crate::dom::Element;
use crate::error::{Family, ModifierError};

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum ChartDescriptor {
    #[serde(rename = "chart_x_axis")]
    XAxis(AxisArgs),
    #[serde(rename = "chart_y_axis")]
    YAxis(AxisArgs),
    #[serde(rename = "chart_x_axis_label")]
    XAxisLabel(AxisLabelArgs),
    #[serde(rename = "chart_y_axis_label")]
    YAxisLabel(AxisLabelArgs),
    #[serde(rename = "chart_x_scale")]
    XScale(ScaleArgs),
    #[serde(rename = "chart_y_scale")]
    YScale(ScaleArgs),
    #[serde(rename = "chart_legend")]
    Legend(LegendArgs),
    #[serde(rename = "chart_overlay")]
    Overlay(DecorationArgs),
    #[serde(rename = "chart_background")]
    Background(DecorationArgs),
    #[serde(rename = "chart_symbol_scale")]
    SymbolScale(StyleScaleArgs<SymbolShape>),
    #[serde(rename = "chart_foreground_style_scale")]
    ForegroundStyleScale(StyleScaleArgs<ShapeStyle>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct AxisArgs {
    #[serde(default)]
    visibility: Option<Named<Visibility>>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AxisLabelArgs {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    position: Option<Named<AnnotationPosition>>,
    #[serde(default)]
    alignment: Option<Named<Alignment>>,
    #[serde(default)]
    spacing: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScaleArgs {
    #[serde(default)]
    domain: Option<JsonDomain>,
    #[serde(default)]
    range: Option<JsonRange>,
    #[serde(default, alias = "scaleType")]
    scale_type: Option<JsonScaleType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegendArgs {
    #[serde(default)]
    visibility: Option<Named<Visibility>>,
    #[serde(default)]
    position: Option<Named<AnnotationPosition>>,
    #[serde(default)]
    alignment: Option<Named<Alignment>>,
    #[serde(default)]
    spacing: Option<f64>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DecorationArgs {
    #[serde(default)]
    alignment: Option<Named<Alignment>>,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: AttributeValue"))]
pub(crate) struct StyleScaleArgs<T> {
    #[serde(default = "BTreeMap::new")]
    mapping: BTreeMap<String, Named<T>>,
    #[serde(default)]
    domain: Option<JsonDomain>,
    #[serde(default)]
    range: Option<Vec<Named<T>>>,
    #[serde(default, alias = "scaleType")]
    scale_type: Option<JsonScaleType>,
}

impl ModifierDescriptor for ChartDescriptor {
    type Modifier = ChartModifier;

    const FAMILY: Family = Family::Chart;
    const KINDS: &'static [&'static str] = &[
        "chart_x_axis",
        "chart_y_axis",
        "chart_x_axis_label",
        "chart_y_axis_label",
        "chart_x_scale",
        "chart_y_scale",
        "chart_legend",
        "chart_overlay",
        "chart_background",
        "chart_symbol_scale",
        "chart_foreground_style_scale",
    ];

    fn into_modifier(
        self,
        element: &Element,
        ctx: &BuilderContext<'_>,
    ) -> Result<ChartModifier, ModifierError> {
        Ok(match self {
            Self::XAxis(args) => {
                ChartModifier::XAxis(args.into_config("chart_x_axis", element, ctx)?)
            }
            Self::YAxis(args) => {
                ChartModifier::YAxis(args.into_config("chart_y_axis", element, ctx)?)
            }
            Self::XAxisLabel(args) => {
                ChartModifier::XAxisLabel(args.into_label("chart_x_axis_label", element, ctx)?)
            }
            Self::YAxisLabel(args) => {
                ChartModifier::YAxisLabel(args.into_label("chart_y_axis_label", element, ctx)?)
            }
            Self::XScale(args) => ChartModifier::XScale(args.into()),
            Self::YScale(args) => ChartModifier::YScale(args.into()),
            Self::Legend(args) => ChartModifier::Legend(args.into_legend(element, ctx)),
            Self::Overlay(args) => ChartModifier::Overlay(args.into_decoration(element, ctx)),
            Self::Background(args) => {
                ChartModifier::Background(args.into_decoration(element, ctx))
            }
            Self::SymbolScale(args) => ChartModifier::SymbolScale(args.into()),
            Self::ForegroundStyleScale(args) => {
                ChartModifier::ForegroundStyleScale(args.into())
            }
        })
    }
}

impl AxisArgs {
    fn into_config(
        self,
        kind: &'static str,
        element: &Element,
        ctx: &BuilderContext<'_>,
    ) -> Result<AxisConfig, ModifierError> {
        match (self.visibility, self.content) {
            (Some(Named(visibility)), _) => Ok(AxisConfig::Visibility(visibility)),
            (None, Some(key)) => Ok(AxisConfig::Content(build_template::<
                AxisContentBuilder,
            >(element, &key, ctx))),
            (None, None) => Err(ModifierError::MissingField {
                kind,
                fields: "`visibility`, `content`",
            }),
        }
    }
}

impl AxisLabelArgs {
    fn into_label(
        self,
        kind: &'static str,
        element: &Element,
        ctx: &BuilderContext<'_>,
    ) -> Result<AxisLabel, ModifierError> {
        let title = match (self.title, self.content) {
            (Some(title), _) => AxisLabelTitle::Text(title),
            (None, Some(key)) => AxisLabelTitle::View(view_template(element, &key, ctx)),
            (None, None) => {
                return Err(ModifierError::MissingField {
                    kind,
                    fields: "`title`, `content`",
                });
            }
        };
        Ok(AxisLabel {
            title,
            position: named(self.position).unwrap_or_default(),
            alignment: named(self.alignment),
            spacing: self.spacing,
        })
    }
}

impl From<ScaleArgs> for ScaleConfig {
    fn from(args: ScaleArgs) -> Self {
        Self {
            domain: args.domain.map(Into::into),
            range: args.range.map(Into::into),
            scale_type: args.scale_type.map(|JsonScaleType(scale)| scale),
        }
    }
}

impl LegendArgs {
    fn into_legend(self, element: &Element, ctx: &BuilderContext<'_>) -> ChartLegend {
        if let Some(Named(visibility)) = self.visibility {
            return ChartLegend::Visibility(visibility);
        }
        ChartLegend::Placed(LegendPlacement {
            position: named(self.position).unwrap_or_default(),
            alignment: named(self.alignment),
            spacing: self.spacing,
            content: self.content.map(|key| view_template(element, &key, ctx)),
        })
    }
}

impl DecorationArgs {
    fn into_decoration(self, element: &Element, ctx: &BuilderContext<'_>) -> ChartDecoration {
        ChartDecoration {
            alignment: named(self.alignment).unwrap_or(Alignment::CENTER),
            content: view_template(element, &self.content, ctx),
        }
    }
}

impl<T> From<StyleScaleArgs<T>> for StyleScale<T> {
    fn from(args: StyleScaleArgs<T>) -> Self {
        let domain = args.domain.map(ScaleDomain::from);
        if !args.mapping.is_empty() {
            let mapping: HashMap<String, T> = args
                .mapping
                .into_iter()
                .map(|(key, Named(style))| (key, style))
                .collect();
            let order = match domain {
                Some(ScaleDomain::Values(values)) => Some(values),
                _ => None,
            };
            return Self::from_mapping(mapping, order);
        }
        Self::Scale {
            domain,
            range: args
                .range
                .map(|range| range.into_iter().map(|Named(style)| style).collect()),
            scale_type: args.scale_type.map(|JsonScaleType(scale)| scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use vizir_charts::{AxisContent, PlotDimensionScaleRange, ScaleType, ViewRoot};

    use super::*;
    use crate::context::ResolveOptions;
    use crate::error::Diagnostic;
    use crate::modifier::{MODIFIERS_ATTRIBUTE, decode_chain};

    fn decode(element: &Element) -> (Vec<ChartModifier>, Vec<Diagnostic>) {
        let options = ResolveOptions::new().with_log_diagnostics(false);
        let ctx = BuilderContext::new(&options);
        let chain = decode_chain::<ChartDescriptor>(element, &ctx);
        (chain, ctx.finish(()).diagnostics)
    }

    fn chart(modifiers: serde_json::Value) -> Element {
        Element::new("Chart").with_attribute(MODIFIERS_ATTRIBUTE, modifiers.to_string())
    }

    #[test]
    fn axis_visibility_and_scales_decode() {
        let (chain, diagnostics) = decode(&chart(serde_json::json!([
            { "type": "chart_x_axis", "visibility": "hidden" },
            {
                "type": "chartYScale",
                "domain": { "type": "numeric_range", "lower_bound": 0, "upper_bound": 100 },
                "range": { "padding": 8 },
                "scale_type": ["power", 2],
            },
        ])));
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(
            chain,
            vec![
                ChartModifier::XAxis(AxisConfig::Visibility(Visibility::Hidden)),
                ChartModifier::YScale(ScaleConfig {
                    domain: Some(ScaleDomain::NumericRange {
                        lower: 0.0,
                        upper: 100.0
                    }),
                    range: Some(PlotDimensionScaleRange::Padding(8.0)),
                    scale_type: Some(ScaleType::Power { exponent: 2.0 }),
                }),
            ]
        );
    }

    #[test]
    fn axis_content_is_built_from_a_template() {
        let element = chart(serde_json::json!([{ "type": "chart_y_axis", "content": "y" }]))
            .with_child(
                Element::new("AxisMarks")
                    .with_attribute("template", "y")
                    .with_attribute("preset", "inset"),
            );
        let (chain, diagnostics) = decode(&element);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let [ChartModifier::YAxis(AxisConfig::Content(AxisContent::Marks(marks)))] =
            chain.as_slice()
        else {
            panic!("expected y axis marks, got {chain:?}");
        };
        assert_eq!(marks.preset, vizir_charts::AxisMarkPreset::Inset);
    }

    #[test]
    fn axis_labels_need_a_title_or_content() {
        let element = chart(serde_json::json!([
            { "type": "chart_x_axis_label", "position": "bottom" },
            { "type": "chart_x_axis_label", "title": "Revenue", "alignment": "leading" },
        ]));
        let (chain, diagnostics) = decode(&element);
        assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
        assert_eq!(
            chain,
            vec![ChartModifier::XAxisLabel(AxisLabel {
                title: AxisLabelTitle::Text("Revenue".into()),
                position: AnnotationPosition::Automatic,
                alignment: Some(Alignment::LEADING),
                spacing: None,
            })]
        );
    }

    #[test]
    fn legends_are_either_visibility_or_placement() {
        let element = chart(serde_json::json!([
            { "type": "chart_legend", "visibility": "visible" },
            { "type": "chart_legend", "position": "top", "spacing": 4 },
        ]));
        let (chain, _) = decode(&element);
        assert_eq!(
            chain,
            vec![
                ChartModifier::Legend(ChartLegend::Visibility(Visibility::Visible)),
                ChartModifier::Legend(ChartLegend::Placed(LegendPlacement {
                    position: AnnotationPosition::Top,
                    alignment: None,
                    spacing: Some(4.0),
                    content: None,
                })),
            ]
        );
    }

    #[test]
    fn decorations_default_to_centered_templates() {
        let element = chart(serde_json::json!([{ "type": "chart_overlay", "content": "o" }]))
            .with_child(Element::new("Circle").with_attribute("template", "o"));
        let (chain, diagnostics) = decode(&element);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let [ChartModifier::Overlay(decoration)] = chain.as_slice() else {
            panic!("expected an overlay, got {chain:?}");
        };
        assert_eq!(decoration.alignment, Alignment::CENTER);
        assert_eq!(decoration.content.roots, vec![ViewRoot::Element("Circle".into())]);
    }

    #[test]
    fn style_scale_mappings_sort_or_follow_the_values_domain() {
        let element = chart(serde_json::json!([
            { "type": "chart_symbol_scale", "mapping": { "b": "square", "a": "circle" } },
            {
                "type": "chart_foreground_style_scale",
                "mapping": { "Cats": "red", "Dogs": "blue" },
                "domain": { "type": "values", "values": ["Dogs", "Cats"] },
            },
            { "type": "chart_foreground_style_scale", "range": ["tint", "secondary"] },
        ]));
        let (chain, diagnostics) = decode(&element);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let [
            ChartModifier::SymbolScale(StyleScale::Mapping { domain: symbols, .. }),
            ChartModifier::ForegroundStyleScale(colors @ StyleScale::Mapping { domain: order, .. }),
            ChartModifier::ForegroundStyleScale(StyleScale::Scale { range: Some(range), .. }),
        ] = chain.as_slice()
        else {
            panic!("unexpected chain {chain:?}");
        };
        assert_eq!(symbols, &["a", "b"]);
        assert_eq!(order, &["Dogs", "Cats"]);
        assert_eq!(
            colors.style_for("Cats"),
            Some(&ShapeStyle::Color(css::RED))
        );
        assert_eq!(range.len(), 2);
    }
}
