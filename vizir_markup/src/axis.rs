// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis elements: `AxisMarks` and the axis marks it may contain.
//!
//! ```text
//! <AxisMarks values="stride" stride="month" count="3">
//!   <AxisGridLine centered />
//!   <AxisValueLabel format="date-time" />
//! </AxisMarks>
//! ```

use vizir_charts::{
    AxisContent, AxisFormat, AxisGridLine, AxisMark, AxisMarkValues, AxisMarks, AxisMarksContent,
    AxisTick, AxisValueLabel, AxisValueMarks, ByteCountFormat, CalendarComponent,
};

use crate::attribute::AttributeValue;
use crate::builder::{ContentBuilder, build_children, build_element, view_children};
use crate::context::BuilderContext;
use crate::dom::Element;
use crate::error::{AttributeError, Family};
use crate::modifier::{AxisContentDescriptor, AxisMarkDescriptor};
use crate::registry::{AxisContentTag, AxisMarkTag};

/// Builds axis content: `AxisMarks`.
#[derive(Debug)]
pub(crate) enum AxisContentBuilder {}

impl ContentBuilder for AxisContentBuilder {
    type Content = AxisContent;
    type Tag = AxisContentTag;
    type Modifier = AxisContentDescriptor;

    const FAMILY: Family = Family::AxisContent;

    fn tag(name: &str) -> Option<AxisContentTag> {
        AxisContentTag::from_tag(name)
    }

    fn lookup(tag: AxisContentTag, element: &Element, ctx: &BuilderContext<'_>) -> AxisContent {
        match tag {
            AxisContentTag::AxisMarks => AxisContent::Marks(Box::new(axis_marks(element, ctx))),
        }
    }
}

/// Builds axis marks: gridlines, ticks, value labels and `AxisValue` groups.
#[derive(Debug)]
pub(crate) enum AxisMarkBuilder {}

impl ContentBuilder for AxisMarkBuilder {
    type Content = AxisMark;
    type Tag = AxisMarkTag;
    type Modifier = AxisMarkDescriptor;

    const FAMILY: Family = Family::AxisMark;

    fn tag(name: &str) -> Option<AxisMarkTag> {
        AxisMarkTag::from_tag(name)
    }

    fn lookup(tag: AxisMarkTag, element: &Element, ctx: &BuilderContext<'_>) -> AxisMark {
        match tag {
            AxisMarkTag::AxisGridLine => AxisMark::GridLine(AxisGridLine {
                centered: ctx.attribute_or(element, "centered", false),
                stroke: ctx.attribute(element, "stroke"),
            }),
            AxisMarkTag::AxisTick => AxisMark::Tick(AxisTick {
                centered: ctx.attribute_or(element, "centered", false),
                length: ctx.attribute(element, "length").unwrap_or_default(),
                stroke: ctx.attribute(element, "stroke"),
            }),
            AxisMarkTag::AxisValueLabel => AxisMark::ValueLabel(value_label(element, ctx)),
            AxisMarkTag::AxisValue => build_children::<Self>(element, ctx),
        }
    }
}

fn axis_marks(element: &Element, ctx: &BuilderContext<'_>) -> AxisMarks {
    let mut marks = AxisMarks::new()
        .with_preset(ctx.attribute(element, "preset").unwrap_or_default())
        .with_position(ctx.attribute(element, "position").unwrap_or_default())
        .with_values(mark_values(element, ctx));
    if let Some(stroke) = ctx.attribute(element, "stroke") {
        marks = marks.with_stroke(stroke);
    }
    if let Some(format) = axis_format(element, ctx, None) {
        return marks.with_format(format);
    }

    let children: Vec<&Element> = element.flow_children().collect();
    let per_value = !children.is_empty()
        && children
            .iter()
            .all(|child| AxisMarkTag::from_tag(&child.tag) == Some(AxisMarkTag::AxisValue));
    if per_value {
        let mut values = Vec::new();
        let mut groups = Vec::new();
        for child in children {
            let Some(value) = required::<f64>(child, "value", ctx) else {
                continue;
            };
            values.push(value);
            groups.push(AxisValueMarks {
                value,
                marks: build_element::<AxisMarkBuilder>(child, ctx),
            });
        }
        return marks
            .with_values(AxisMarkValues::Values(values))
            .with_content(AxisMarksContent::PerValue(groups));
    }
    if !children.is_empty() {
        return marks.with_content(AxisMarksContent::Marks(build_children::<AxisMarkBuilder>(
            element, ctx,
        )));
    }
    marks
}

fn value_label(element: &Element, ctx: &BuilderContext<'_>) -> AxisValueLabel {
    let format = axis_format(element, ctx, Some("usd"));
    AxisValueLabel {
        centered: ctx.attribute_or(element, "centered", false),
        anchor: ctx.attribute(element, "anchor"),
        multi_label_alignment: ctx.attribute(element, "multi-label-alignment"),
        collision_resolution: ctx.attribute(element, "collision-resolution").unwrap_or_default(),
        offsets_marks: ctx.attribute_or(element, "offsets-marks", false),
        orientation: ctx.attribute(element, "orientation").unwrap_or_default(),
        horizontal_spacing: ctx.attribute(element, "horizontal-spacing"),
        vertical_spacing: ctx.attribute(element, "vertical-spacing"),
        content: if format.is_none() {
            view_children(element)
        } else {
            None
        },
        format,
    }
}

/// Reads the `values` attribute and its companions.
///
/// Absent or unusable values fall back to automatic defaults.
fn mark_values(element: &Element, ctx: &BuilderContext<'_>) -> AxisMarkValues {
    let Some(raw) = element.attribute("values") else {
        return AxisMarkValues::default();
    };
    let round_lower_bound = ctx.attribute_or(element, "round-lower-bound", false);
    let round_upper_bound = ctx.attribute_or(element, "round-upper-bound", false);
    match raw {
        "automatic" => AxisMarkValues::Automatic {
            minimum_stride: ctx.attribute(element, "minimum-stride"),
            desired_count: ctx.attribute(element, "desired-count"),
            round_lower_bound,
            round_upper_bound,
        },
        "stride" => {
            let stride = element.attribute("stride");
            if let Some(by) = stride.and_then(|raw| f64::parse(raw).ok()) {
                AxisMarkValues::Stride {
                    by,
                    round_lower_bound,
                    round_upper_bound,
                }
            } else if let Some(component) = required::<CalendarComponent>(element, "stride", ctx) {
                AxisMarkValues::CalendarStride {
                    component,
                    count: ctx.attribute_or(element, "count", 1),
                    round_lower_bound,
                    round_upper_bound,
                    calendar: ctx.attribute(element, "calendar"),
                }
            } else {
                AxisMarkValues::default()
            }
        }
        _ => {
            ctx.invalid_attribute(
                element,
                "values",
                &AttributeError::invalid(raw, "axis mark values"),
            );
            AxisMarkValues::default()
        }
    }
}

/// Reads the `format` attribute and its companions.
///
/// `default_currency` is used when `currency-code` is absent; without one a currency format is
/// reported and dropped.
fn axis_format(
    element: &Element,
    ctx: &BuilderContext<'_>,
    default_currency: Option<&str>,
) -> Option<AxisFormat> {
    let raw = element.attribute("format")?;
    let format = match raw {
        "date-time" | "date_time" => AxisFormat::DateTime,
        "iso8601" => AxisFormat::Iso8601,
        "number" => AxisFormat::Number,
        "percent" => AxisFormat::Percent,
        "currency" => {
            let code = match element.attribute("currency-code") {
                Some(code) => code.to_owned(),
                None => {
                    let Some(code) = default_currency else {
                        ctx.invalid_attribute(
                            element,
                            "currency-code",
                            &AttributeError::Missing { ty: "currency code" },
                        );
                        return None;
                    };
                    code.to_owned()
                }
            };
            AxisFormat::Currency { code }
        }
        "byte-count" | "byte_count" => AxisFormat::ByteCount(ByteCountFormat {
            style: ctx.attribute(element, "style").unwrap_or_default(),
            allowed_units: ctx.attribute(element, "allowed-units").unwrap_or_default(),
            spells_out_zero: ctx.attribute_or(element, "spells-out-zero", false),
            includes_actual_byte_count: ctx.attribute_or(
                element,
                "includes-actual-byte-count",
                false,
            ),
        }),
        _ => {
            ctx.invalid_attribute(element, "format", &AttributeError::invalid(raw, "axis format"));
            return None;
        }
    };
    Some(format)
}

/// Reads an attribute that must be present, reporting it when absent.
fn required<T: AttributeValue>(
    element: &Element,
    name: &str,
    ctx: &BuilderContext<'_>,
) -> Option<T> {
    if !element.has_attribute(name) {
        ctx.invalid_attribute(element, name, &AttributeError::Missing { ty: T::TYPE_NAME });
        return None;
    }
    ctx.attribute(element, name)
}

#[cfg(test)]
mod tests {
    use vizir_charts::{
        AxisMarkPosition, AxisMarkPreset, AxisTickLength, ByteCountStyle, ByteCountUnits,
        CalendarIdentifier, ContentNode, ViewRoot,
    };

    use super::*;
    use crate::context::ResolveOptions;
    use crate::error::Diagnostic;

    fn build(element: &Element) -> (AxisContent, Vec<Diagnostic>) {
        let options = ResolveOptions::new().with_log_diagnostics(false);
        let ctx = BuilderContext::new(&options);
        let content = build_element::<AxisContentBuilder>(element, &ctx);
        let resolved = ctx.finish(content);
        (resolved.value, resolved.diagnostics)
    }

    fn marks_of(content: AxisContent) -> AxisMarks {
        match content {
            AxisContent::Marks(marks) => *marks,
            other => panic!("expected axis marks, got {other:?}"),
        }
    }

    #[test]
    fn bare_axis_marks_use_defaults() {
        let (content, diagnostics) = build(&Element::new("AxisMarks"));
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(marks_of(content), AxisMarks::new());
    }

    #[test]
    fn attributes_configure_preset_position_and_stroke() {
        let element = Element::new("AxisMarks")
            .with_attribute("preset", "aligned")
            .with_attribute("position", "leading")
            .with_attribute("stroke", "2");
        let marks = marks_of(build(&element).0);
        assert_eq!(marks.preset, AxisMarkPreset::Aligned);
        assert_eq!(marks.position, AxisMarkPosition::Leading);
        assert_eq!(marks.stroke.map(|s| s.width), Some(2.0));
    }

    #[test]
    fn byte_count_format_defaults_to_binary() {
        let element = Element::new("AxisMarks")
            .with_attribute("format", "byte-count")
            .with_attribute("spells-out-zero", "")
            .with_child(Element::new("AxisTick"));
        let (content, diagnostics) = build(&element);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let marks = marks_of(content);
        assert_eq!(
            marks.format,
            Some(AxisFormat::ByteCount(ByteCountFormat {
                style: ByteCountStyle::Binary,
                allowed_units: ByteCountUnits::DEFAULT,
                spells_out_zero: true,
                includes_actual_byte_count: false,
            }))
        );
        assert_eq!(marks.content, AxisMarksContent::Default);
    }

    #[test]
    fn currency_needs_a_code_on_axis_marks() {
        let element = Element::new("AxisMarks").with_attribute("format", "currency");
        let (content, diagnostics) = build(&element);
        assert_eq!(marks_of(content).format, None);
        assert!(matches!(
            diagnostics.as_slice(),
            [Diagnostic::InvalidAttribute { attribute, .. }] if attribute == "currency-code"
        ));
    }

    #[test]
    fn value_labels_default_the_currency_code() {
        let element = Element::new("AxisMarks").with_child(
            Element::new("AxisValueLabel")
                .with_attribute("format", "currency")
                .with_text("ignored"),
        );
        let (content, diagnostics) = build(&element);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let AxisMarksContent::Marks(AxisMark::ValueLabel(label)) = marks_of(content).content else {
            panic!("expected a single value label");
        };
        assert_eq!(
            label.format,
            Some(AxisFormat::Currency { code: "usd".into() })
        );
        assert_eq!(label.content, None);
    }

    #[test]
    fn value_labels_without_format_keep_their_children() {
        let element = Element::new("AxisMarks").with_child(
            Element::new("AxisValueLabel")
                .with_attribute("orientation", "vertical-reversed")
                .with_text("Value"),
        );
        let AxisMarksContent::Marks(AxisMark::ValueLabel(label)) =
            marks_of(build(&element).0).content
        else {
            panic!("expected a single value label");
        };
        assert_eq!(
            label.orientation,
            vizir_charts::AxisValueLabelOrientation::VerticalReversed
        );
        assert_eq!(
            label.content.map(|view| view.roots),
            Some(vec![ViewRoot::Text("Value".into())])
        );
    }

    #[test]
    fn stride_values_accept_numbers_and_calendar_components() {
        let numeric = Element::new("AxisMarks")
            .with_attribute("values", "stride")
            .with_attribute("stride", "5")
            .with_attribute("round-upper-bound", "");
        assert_eq!(
            marks_of(build(&numeric).0).values,
            AxisMarkValues::Stride {
                by: 5.0,
                round_lower_bound: false,
                round_upper_bound: true,
            }
        );

        let calendar = Element::new("AxisMarks")
            .with_attribute("values", "stride")
            .with_attribute("stride", "week_of_year")
            .with_attribute("calendar", "iso8601");
        assert_eq!(
            marks_of(build(&calendar).0).values,
            AxisMarkValues::CalendarStride {
                component: CalendarComponent::WeekOfYear,
                count: 1,
                round_lower_bound: false,
                round_upper_bound: false,
                calendar: Some(CalendarIdentifier::Iso8601),
            }
        );
    }

    #[test]
    fn automatic_values_read_their_companions() {
        let element = Element::new("AxisMarks")
            .with_attribute("values", "automatic")
            .with_attribute("desired-count", "4");
        assert_eq!(
            marks_of(build(&element).0).values,
            AxisMarkValues::Automatic {
                minimum_stride: None,
                desired_count: Some(4),
                round_lower_bound: false,
                round_upper_bound: false,
            }
        );

        let unknown = Element::new("AxisMarks").with_attribute("values", "sometimes");
        let (content, diagnostics) = build(&unknown);
        assert_eq!(marks_of(content).values, AxisMarkValues::default());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn axis_value_children_become_per_value_marks() {
        let element = Element::new("AxisMarks")
            .with_child(
                Element::new("AxisValue")
                    .with_attribute("value", "1")
                    .with_child(Element::new("AxisTick").with_attribute("length", "label")),
            )
            .with_child(
                Element::new("AxisValue")
                    .with_attribute("value", "2")
                    .with_child(Element::new("AxisGridLine")),
            );
        let (content, diagnostics) = build(&element);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let marks = marks_of(content);
        assert_eq!(marks.values, AxisMarkValues::Values(vec![1.0, 2.0]));
        let AxisMarksContent::PerValue(groups) = marks.content else {
            panic!("expected per-value content");
        };
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].value, 1.0);
        assert_eq!(
            groups[0].marks,
            AxisMark::Tick(AxisTick {
                length: AxisTickLength::Label,
                ..AxisTick::default()
            })
        );
        assert!(matches!(groups[1].marks, AxisMark::GridLine(_)));
    }

    #[test]
    fn mixed_children_are_built_as_axis_marks() {
        let element = Element::new("AxisMarks")
            .with_child(Element::new("AxisGridLine"))
            .with_child(Element::new("AxisValue").with_child(Element::new("AxisTick")))
            .with_child(Element::new("Sparkle"));
        let (content, diagnostics) = build(&element);
        let AxisMarksContent::Marks(marks) = marks_of(content).content else {
            panic!("expected custom marks");
        };
        assert!(matches!(
            marks.items(),
            [AxisMark::GridLine(_), AxisMark::Tick(_), AxisMark::Unsupported { .. }]
        ));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnsupportedElement {
                family: Family::AxisMark,
                tag: "Sparkle".into(),
            }]
        );
    }

    #[test]
    fn axis_marks_apply_their_modifiers() {
        let element = Element::new("AxisMarks").with_child(Element::new("AxisTick").with_attribute(
            "modifiers",
            r#"[{"type":"offset","x":3},{"type":"font","font":"caption"}]"#,
        ));
        let AxisMarksContent::Marks(marks) = marks_of(build(&element).0).content else {
            panic!("expected custom marks");
        };
        let AxisMark::Modified { content, .. } = &marks else {
            panic!("expected modified marks, got {marks:?}");
        };
        assert!(matches!(**content, AxisMark::Modified { .. }));
        assert!(!marks.is_empty());
    }
}
