// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end resolution of markup fixtures.

use serde_json::json;
use vizir_charts::{
    AxisConfig, AxisFormat, AxisMarksContent, ByteCountFormat, ByteCountStyle, ChartAxis,
    ChartContent, ContentModifier, Mark, MarkAxis, MarkGeometry, Offset, Plottable,
    PlottableValue, ShapeKind, Vec2,
};

use crate::{
    Diagnostic, Element, Family, Node, ResolveOptions, resolve_chart, resolve_chart_content,
};

fn element(fixture: serde_json::Value) -> Element {
    serde_json::from_value(fixture).unwrap()
}

fn nodes(fixture: serde_json::Value) -> Vec<Node> {
    serde_json::from_value(fixture).unwrap()
}

fn quiet() -> ResolveOptions {
    ResolveOptions::new().with_log_diagnostics(false)
}

fn bar(x: &str, y: &str) -> serde_json::Value {
    json!({ "tag": "BarMark", "attributes": { "x": x, "x:label": "X", "y": y, "y:label": "Y" } })
}

#[test]
fn sibling_bars_resolve_in_document_order() {
    let resolved = resolve_chart_content(&nodes(json!([bar("0", "0"), bar("1", "1")])), &quiet());
    assert!(resolved.is_clean(), "{:?}", resolved.diagnostics);
    let geometries: Vec<_> = resolved
        .value
        .marks()
        .into_iter()
        .map(Mark::geometry)
        .cloned()
        .collect();
    assert_eq!(
        geometries,
        vec![
            MarkGeometry::Simple {
                x: PlottableValue::new("X", 0.0),
                y: PlottableValue::new("Y", 0.0),
            },
            MarkGeometry::Simple {
                x: PlottableValue::new("X", 1.0),
                y: PlottableValue::new("Y", 1.0),
            },
        ]
    );
}

#[test]
fn area_with_a_y_range_is_a_range_shape() {
    let area = json!({
        "tag": "AreaMark",
        "attributes": {
            "x": "0", "x:label": "X",
            "y-start": "0", "y-start:label": "S",
            "y-end": "1", "y-end:label": "E",
        },
    });
    let resolved = resolve_chart_content(&nodes(json!([area])), &quiet());
    let marks = resolved.value.marks();
    let [mark] = marks[..] else {
        panic!("expected one mark");
    };
    assert_eq!(
        mark.geometry(),
        &MarkGeometry::Range {
            axis: MarkAxis::Y,
            value: PlottableValue::new("X", 0.0),
            start: PlottableValue::new("S", 0.0),
            end: PlottableValue::new("E", 1.0),
        }
    );
}

#[test]
fn offset_with_only_x_defaults_y_to_zero() {
    let mut fixture = bar("0", "0");
    fixture["attributes"]["modifiers"] = json!(r#"[{"type":"offset","x":50}]"#);
    let resolved = resolve_chart_content(&nodes(json!([fixture])), &quiet());
    let (modifiers, inner) = resolved.value.peel_modifiers();
    assert_eq!(
        modifiers,
        vec![&ContentModifier::Offset(Offset::Point(Vec2::new(50.0, 0.0)))]
    );
    assert!(matches!(inner, ChartContent::Mark(Mark::Bar(_))));
}

#[test]
fn byte_count_axis_format_defaults_to_binary() {
    let chart = element(json!({
        "tag": "Chart",
        "attributes": { "modifiers": r#"[{"type":"chart_y_axis","content":"axis"}]"# },
        "children": [
            bar("0", "1024"),
            { "tag": "AxisMarks", "attributes": { "template": "axis", "format": "byte-count" } },
        ],
    }));
    let resolved = resolve_chart(&chart, &quiet());
    assert!(resolved.is_clean(), "{:?}", resolved.diagnostics);
    let Some(AxisConfig::Content(axis)) = resolved.value.axis(ChartAxis::Y) else {
        panic!("expected y axis content");
    };
    let [vizir_charts::AxisContent::Marks(marks)] = axis.items() else {
        panic!("expected one AxisMarks, got {axis:?}");
    };
    assert_eq!(
        marks.format,
        Some(AxisFormat::ByteCount(ByteCountFormat {
            style: ByteCountStyle::Binary,
            ..ByteCountFormat::default()
        }))
    );
    assert_eq!(marks.content, AxisMarksContent::Default);
}

#[test]
fn values_are_classified_date_then_number_then_string() {
    let point = |x: &str| {
        json!({ "tag": "PointMark", "attributes": { "x": x, "x:label": "X", "y": "1", "y:label": "Y" } })
    };
    let resolved = resolve_chart_content(
        &nodes(json!([point("2024-03-01"), point("2024"), point("March")])),
        &quiet(),
    );
    let kinds: Vec<_> = resolved
        .value
        .marks()
        .into_iter()
        .map(|mark| match mark.geometry() {
            MarkGeometry::Simple { x, .. } => x.value.kind(),
            other => panic!("unexpected geometry {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            vizir_charts::PlottableKind::Date,
            vizir_charts::PlottableKind::Number,
            vizir_charts::PlottableKind::String,
        ]
    );
}

#[test]
fn series_wins_over_simple() {
    let line = json!({
        "tag": "LineMark",
        "attributes": {
            "x": "1", "x:label": "X", "y": "2", "y:label": "Y",
            "series": "north", "series:label": "Region",
        },
    });
    let resolved = resolve_chart_content(&nodes(json!([line])), &quiet());
    let marks = resolved.value.marks();
    let [mark] = marks[..] else {
        panic!("expected one mark");
    };
    assert_eq!(mark.geometry().kind(), ShapeKind::Series);
    assert_eq!(
        mark.geometry().series(),
        Some(&PlottableValue::new("Region", Plottable::String("north".into())))
    );
}

#[test]
fn modifier_chains_wrap_in_list_order() {
    let mut fixture = bar("0", "0");
    fixture["attributes"]["modifiers"] = json!(
        r#"[{"type":"opacity","opacity":0.5},{"type":"blur","radius":2},{"type":"z_index","value":1}]"#
    );
    let resolved = resolve_chart_content(&nodes(json!([fixture])), &quiet());
    let (modifiers, _) = resolved.value.peel_modifiers();
    assert_eq!(
        modifiers,
        vec![
            &ContentModifier::ZIndex(1),
            &ContentModifier::Blur(2.0),
            &ContentModifier::Opacity(0.5),
        ]
    );
}

#[test]
fn resolution_is_deterministic() {
    let chart = element(json!({
        "tag": "Chart",
        "attributes": {
            "modifiers": r#"[{"type":"chart_symbol_scale","mapping":{"b":"square","a":"circle","c":"plus"}}]"#,
        },
        "children": [bar("a", "1"), { "tag": "Plot", "children": [bar("b", "2"), bar("c", "3")] }],
    }));
    let first = resolve_chart(&chart, &quiet());
    let second = resolve_chart(&chart, &quiet());
    assert_eq!(first.value, second.value);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn one_bad_tag_or_modifier_does_not_blank_the_chart() {
    let mut fixture = bar("1", "1");
    fixture["attributes"]["modifiers"] = json!(r#"[{"type":"sparkle"},{"type":"opacity","opacity":1}]"#);
    let resolved = resolve_chart_content(
        &nodes(json!([bar("0", "0"), { "tag": "HeatMark" }, fixture])),
        &quiet(),
    );
    assert_eq!(resolved.value.marks().len(), 2);
    assert_eq!(
        resolved.diagnostics,
        vec![
            Diagnostic::UnsupportedElement {
                family: Family::ChartContent,
                tag: "HeatMark".into(),
            },
            Diagnostic::UnknownModifier {
                family: Family::ChartContent,
                modifier: "sparkle".into(),
            },
        ]
    );
}

#[test]
fn template_children_feed_annotations_but_not_content() {
    let mut fixture = bar("0", "0");
    fixture["attributes"]["modifiers"] =
        json!(r#"[{"type":"annotation","content":"note"},{"type":"symbol","content":"missing"}]"#);
    fixture["children"] = json!([
        { "tag": "Text", "attributes": { "template": "note" }, "children": ["Peak"] },
    ]);
    let resolved = resolve_chart_content(&nodes(json!([fixture])), &quiet());
    assert_eq!(resolved.value.marks().len(), 1);
    assert_eq!(
        resolved.diagnostics,
        vec![Diagnostic::MissingTemplate {
            key: "missing".into()
        }]
    );
    let (modifiers, _) = resolved.value.peel_modifiers();
    let [ContentModifier::Symbol(_), ContentModifier::Annotation(annotation)] = modifiers[..]
    else {
        panic!("unexpected modifiers {modifiers:?}");
    };
    assert_eq!(annotation.content.roots.len(), 1);
}

#[test]
fn empty_marks_drop_their_modifiers() {
    let fixture = json!({
        "tag": "RuleMark",
        "attributes": { "modifiers": r#"[{"type":"opacity","opacity":0.2}]"# },
    });
    let resolved = resolve_chart_content(&nodes(json!([fixture])), &quiet());
    assert_eq!(resolved.value, ChartContent::Empty);
    assert_eq!(
        resolved.diagnostics,
        vec![Diagnostic::NoMatchingShape {
            tag: "RuleMark".into()
        }]
    );
}
