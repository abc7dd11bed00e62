// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed decoding of raw attribute strings.
//!
//! Named values accept `kebab-case`, `snake_case` and `camelCase` spellings: `longest-label`,
//! `longest_label` and `longestLabel` all decode to [`AxisTickLength::LongestLabel`].

use kurbo::{Cap, Join, Point, Stroke};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use vizir_charts::{
    Alignment, AnnotationPosition, AxisMarkPosition, AxisMarkPreset, AxisTickLength,
    AxisValueLabelCollisionResolution, AxisValueLabelOrientation, ByteCountStyle, ByteCountUnits,
    CalendarComponent, CalendarIdentifier, FontWeight, HierarchicalLevel, InterpolationMethod,
    MarkDimension, MarkStackingMethod, OverflowBoundary, PositionAxis, RoundedCornerStyle,
    ShapeStyle, SymbolShape, TextStyle, Visibility,
};

use crate::error::AttributeError;

/// A type that can be decoded from an attribute string.
pub trait AttributeValue: Sized {
    /// Name of the type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Parses a present attribute value.
    fn parse(raw: &str) -> Result<Self, AttributeError>;

    /// Decodes an optional attribute value. Absent values are [`AttributeError::Missing`].
    fn decode(raw: Option<&str>) -> Result<Self, AttributeError> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Err(AttributeError::Missing {
                ty: Self::TYPE_NAME,
            }),
        }
    }
}

/// Normalizes a name to `snake_case`.
///
/// Hyphens and spaces become underscores, and each ASCII uppercase letter after the first
/// character starts a new word.
pub fn normalize_key(raw: &str) -> String {
    let raw = raw.trim();
    let mut out = String::with_capacity(raw.len() + 4);
    for (i, ch) in raw.chars().enumerate() {
        match ch {
            '-' | ' ' => out.push('_'),
            c if c.is_ascii_uppercase() => {
                if i > 0 && !out.ends_with('_') {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
            }
            c => out.push(c),
        }
    }
    out
}

impl AttributeValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    /// Any value other than `false` is true.
    fn parse(raw: &str) -> Result<Self, AttributeError> {
        Ok(!raw.trim().eq_ignore_ascii_case("false"))
    }

    /// Absence is false.
    fn decode(raw: Option<&str>) -> Result<Self, AttributeError> {
        raw.map_or(Ok(false), Self::parse)
    }
}

impl AttributeValue for f64 {
    const TYPE_NAME: &'static str = "number";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        raw.trim()
            .parse::<Self>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AttributeError::invalid(raw, Self::TYPE_NAME))
    }
}

impl AttributeValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        raw.trim()
            .parse::<Self>()
            .map_err(|_| AttributeError::invalid(raw, Self::TYPE_NAME))
    }
}

impl AttributeValue for String {
    const TYPE_NAME: &'static str = "string";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        Ok(raw.to_owned())
    }
}

impl AttributeValue for MarkDimension {
    const TYPE_NAME: &'static str = "mark dimension";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        let value = raw.trim();
        let invalid = || AttributeError::invalid(raw, Self::TYPE_NAME);
        if value.eq_ignore_ascii_case("automatic") {
            return Ok(Self::Automatic);
        }
        if let Some(percent) = value.strip_suffix('%') {
            let ratio = f64::parse(percent).map_err(|_| invalid())?;
            return Ok(Self::Ratio(ratio / 100.0));
        }
        if let Some(inset) = value.strip_prefix('-') {
            return f64::parse(inset).map(Self::Inset).map_err(|_| invalid());
        }
        f64::parse(value).map(Self::Fixed).map_err(|_| invalid())
    }
}

impl AttributeValue for Stroke {
    const TYPE_NAME: &'static str = "stroke width";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        match f64::parse(raw) {
            Ok(width) if width >= 0.0 => Ok(Self::new(width)),
            _ => Err(AttributeError::invalid(raw, Self::TYPE_NAME)),
        }
    }
}

impl AttributeValue for Color {
    const TYPE_NAME: &'static str = "color";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        parse_color(raw.trim())
            .map(|color| color.to_alpha_color::<Srgb>())
            .map_err(|_| AttributeError::invalid(raw, Self::TYPE_NAME))
    }
}

impl AttributeValue for ShapeStyle {
    const TYPE_NAME: &'static str = "shape style";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        if normalize_key(raw) == "tint" {
            return Ok(Self::Tint);
        }
        if let Ok(level) = HierarchicalLevel::parse(raw) {
            return Ok(Self::Hierarchical(level));
        }
        <Color as AttributeValue>::parse(raw)
            .map(Self::Color)
            .map_err(|_| AttributeError::invalid(raw, Self::TYPE_NAME))
    }
}

impl AttributeValue for ByteCountUnits {
    const TYPE_NAME: &'static str = "byte count units";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        let mut units = Self::DEFAULT;
        for name in raw.split(',').filter(|name| !name.trim().is_empty()) {
            let unit = match normalize_key(name).as_str() {
                "default" => Self::DEFAULT,
                "all" => Self::ALL,
                "bytes" => Self::BYTES,
                "kb" => Self::KB,
                "mb" => Self::MB,
                "gb" => Self::GB,
                "tb" => Self::TB,
                "pb" => Self::PB,
                "eb" => Self::EB,
                "zb" => Self::ZB,
                "yb_or_higher" => Self::YB_OR_HIGHER,
                _ => return Err(AttributeError::invalid(raw, Self::TYPE_NAME)),
            };
            units.insert(unit);
        }
        Ok(units)
    }
}

/// Unit points, as used by value label anchors.
///
/// Accepts a named point (`top_leading`, `center`, ...) or an `x,y` pair.
impl AttributeValue for Point {
    const TYPE_NAME: &'static str = "unit point";

    fn parse(raw: &str) -> Result<Self, AttributeError> {
        let named = match normalize_key(raw).as_str() {
            "zero" | "top_leading" => Some((0.0, 0.0)),
            "top" => Some((0.5, 0.0)),
            "top_trailing" => Some((1.0, 0.0)),
            "leading" => Some((0.0, 0.5)),
            "center" => Some((0.5, 0.5)),
            "trailing" => Some((1.0, 0.5)),
            "bottom_leading" => Some((0.0, 1.0)),
            "bottom" => Some((0.5, 1.0)),
            "bottom_trailing" => Some((1.0, 1.0)),
            _ => None,
        };
        if let Some((x, y)) = named {
            return Ok(Self::new(x, y));
        }
        let (x, y) = raw
            .split_once(',')
            .ok_or_else(|| AttributeError::invalid(raw, Self::TYPE_NAME))?;
        match (f64::parse(x), f64::parse(y)) {
            (Ok(x), Ok(y)) => Ok(Self::new(x, y)),
            _ => Err(AttributeError::invalid(raw, Self::TYPE_NAME)),
        }
    }
}

macro_rules! named_values {
    ($($ty:ty => $name:literal { $($key:literal => $value:expr),+ $(,)? })*) => {
        $(
            impl AttributeValue for $ty {
                const TYPE_NAME: &'static str = $name;

                fn parse(raw: &str) -> Result<Self, AttributeError> {
                    match normalize_key(raw).as_str() {
                        $($key => Ok($value),)+
                        _ => Err(AttributeError::invalid(raw, Self::TYPE_NAME)),
                    }
                }
            }
        )*
    };
}

named_values! {
    Alignment => "alignment" {
        "center" => Self::CENTER,
        "leading" => Self::LEADING,
        "trailing" => Self::TRAILING,
        "top" => Self::TOP,
        "bottom" => Self::BOTTOM,
        "top_leading" => Self::TOP_LEADING,
        "top_trailing" => Self::TOP_TRAILING,
        "bottom_leading" => Self::BOTTOM_LEADING,
        "bottom_trailing" => Self::BOTTOM_TRAILING,
    }
    AnnotationPosition => "annotation position" {
        "automatic" => Self::Automatic,
        "overlay" => Self::Overlay,
        "top" => Self::Top,
        "bottom" => Self::Bottom,
        "leading" => Self::Leading,
        "trailing" => Self::Trailing,
        "top_leading" => Self::TopLeading,
        "top_trailing" => Self::TopTrailing,
        "bottom_leading" => Self::BottomLeading,
        "bottom_trailing" => Self::BottomTrailing,
    }
    AxisMarkPreset => "axis mark preset" {
        "automatic" => Self::Automatic,
        "extended" => Self::Extended,
        "aligned" => Self::Aligned,
        "inset" => Self::Inset,
    }
    AxisMarkPosition => "axis mark position" {
        "automatic" => Self::Automatic,
        "leading" => Self::Leading,
        "trailing" => Self::Trailing,
        "top" => Self::Top,
        "bottom" => Self::Bottom,
    }
    AxisTickLength => "tick length" {
        "automatic" => Self::Automatic,
        "label" => Self::Label,
        "longest_label" => Self::LongestLabel,
    }
    AxisValueLabelCollisionResolution => "collision resolution" {
        "automatic" => Self::Automatic,
        "greedy" => Self::Greedy,
        "truncate" => Self::Truncate,
        "disabled" => Self::Disabled,
    }
    AxisValueLabelOrientation => "label orientation" {
        "automatic" => Self::Automatic,
        "horizontal" => Self::Horizontal,
        "vertical" => Self::Vertical,
        "vertical_reversed" => Self::VerticalReversed,
    }
    Cap => "line cap" {
        "butt" => Self::Butt,
        "round" => Self::Round,
        "square" => Self::Square,
    }
    ByteCountStyle => "byte count style" {
        "file" => Self::File,
        "memory" => Self::Memory,
        "decimal" => Self::Decimal,
        "binary" => Self::Binary,
    }
    CalendarComponent => "calendar component" {
        "era" => Self::Era,
        "year" => Self::Year,
        "month" => Self::Month,
        "day" => Self::Day,
        "hour" => Self::Hour,
        "minute" => Self::Minute,
        "second" => Self::Second,
        "weekday" => Self::Weekday,
        "weekday_ordinal" => Self::WeekdayOrdinal,
        "quarter" => Self::Quarter,
        "week_of_month" => Self::WeekOfMonth,
        "week_of_year" => Self::WeekOfYear,
        "year_for_week_of_year" => Self::YearForWeekOfYear,
        "nanosecond" => Self::Nanosecond,
        "calendar" => Self::Calendar,
        "time_zone" => Self::TimeZone,
        "is_leap_month" => Self::IsLeapMonth,
    }
    CalendarIdentifier => "calendar identifier" {
        "gregorian" => Self::Gregorian,
        "buddhist" => Self::Buddhist,
        "chinese" => Self::Chinese,
        "coptic" => Self::Coptic,
        "ethiopic_amete_mihret" => Self::EthiopicAmeteMihret,
        "ethiopic_amete_alem" => Self::EthiopicAmeteAlem,
        "hebrew" => Self::Hebrew,
        "iso8601" => Self::Iso8601,
        "indian" => Self::Indian,
        "islamic" => Self::Islamic,
        "islamic_civil" => Self::IslamicCivil,
        "japanese" => Self::Japanese,
        "persian" => Self::Persian,
        "republic_of_china" => Self::RepublicOfChina,
        "islamic_tabular" => Self::IslamicTabular,
        "islamic_umm_al_qura" => Self::IslamicUmmAlQura,
    }
    FontWeight => "font weight" {
        "ultra_light" => Self::UltraLight,
        "thin" => Self::Thin,
        "light" => Self::Light,
        "regular" => Self::Regular,
        "medium" => Self::Medium,
        "semibold" => Self::Semibold,
        "bold" => Self::Bold,
        "heavy" => Self::Heavy,
        "black" => Self::Black,
    }
    HierarchicalLevel => "hierarchical level" {
        "primary" => Self::Primary,
        "secondary" => Self::Secondary,
        "tertiary" => Self::Tertiary,
        "quaternary" => Self::Quaternary,
    }
    InterpolationMethod => "interpolation method" {
        "cardinal" => Self::Cardinal,
        "catmull_rom" => Self::CatmullRom,
        "linear" => Self::Linear,
        "monotone" => Self::Monotone,
        "step_center" => Self::StepCenter,
        "step_end" => Self::StepEnd,
        "step_start" => Self::StepStart,
    }
    Join => "line join" {
        "bevel" => Self::Bevel,
        "miter" => Self::Miter,
        "round" => Self::Round,
    }
    MarkStackingMethod => "stacking method" {
        "standard" => Self::Standard,
        "normalized" => Self::Normalized,
        "center" => Self::Center,
        "unstacked" => Self::Unstacked,
    }
    OverflowBoundary => "overflow boundary" {
        "automatic" => Self::Automatic,
        "chart" => Self::Chart,
        "plot" => Self::Plot,
    }
    PositionAxis => "position axis" {
        "horizontal" => Self::Horizontal,
        "vertical" => Self::Vertical,
    }
    RoundedCornerStyle => "corner style" {
        "circular" => Self::Circular,
        "continuous" => Self::Continuous,
    }
    SymbolShape => "symbol shape" {
        "circle" => Self::Circle,
        "square" => Self::Square,
        "triangle" => Self::Triangle,
        "diamond" => Self::Diamond,
        "pentagon" => Self::Pentagon,
        "plus" => Self::Plus,
        "cross" => Self::Cross,
        "asterisk" => Self::Asterisk,
    }
    TextStyle => "text style" {
        "large_title" => Self::LargeTitle,
        "title" => Self::Title,
        "title2" => Self::Title2,
        "title3" => Self::Title3,
        "headline" => Self::Headline,
        "subheadline" => Self::Subheadline,
        "body" => Self::Body,
        "callout" => Self::Callout,
        "footnote" => Self::Footnote,
        "caption" => Self::Caption,
        "caption2" => Self::Caption2,
    }
    Visibility => "visibility" {
        "automatic" => Self::Automatic,
        "visible" => Self::Visible,
        "hidden" => Self::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_normalize_from_kebab_and_camel_case() {
        assert_eq!(normalize_key("longest-label"), "longest_label");
        assert_eq!(normalize_key("longestLabel"), "longest_label");
        assert_eq!(normalize_key("step_center"), "step_center");
        assert_eq!(normalize_key(" LargeTitle "), "large_title");
        assert_eq!(normalize_key("iso8601"), "iso8601");
    }

    #[test]
    fn booleans_are_true_when_present_unless_false() {
        assert_eq!(bool::decode(None), Ok(false));
        assert_eq!(bool::decode(Some("")), Ok(true));
        assert_eq!(bool::decode(Some("true")), Ok(true));
        assert_eq!(bool::decode(Some("false")), Ok(false));
    }

    #[test]
    fn mark_dimensions_cover_all_spellings() {
        assert_eq!(MarkDimension::parse("automatic"), Ok(MarkDimension::Automatic));
        assert_eq!(MarkDimension::parse("12"), Ok(MarkDimension::Fixed(12.0)));
        assert_eq!(MarkDimension::parse("50%"), Ok(MarkDimension::Ratio(0.5)));
        assert_eq!(MarkDimension::parse("-4"), Ok(MarkDimension::Inset(4.0)));
        assert!(MarkDimension::parse("wide").is_err());
    }

    #[test]
    fn numbers_reject_non_finite_values() {
        assert_eq!(f64::parse(" 2.5 "), Ok(2.5));
        assert!(f64::parse("NaN").is_err());
        assert!(f64::parse("inf").is_err());
        assert_eq!(i64::parse("3"), Ok(3));
        assert!(i64::parse("3.5").is_err());
    }

    #[test]
    fn missing_and_invalid_errors_name_the_type() {
        assert_eq!(
            SymbolShape::decode(None),
            Err(AttributeError::Missing { ty: "symbol shape" })
        );
        assert_eq!(
            SymbolShape::decode(Some("blob")),
            Err(AttributeError::invalid("blob", "symbol shape"))
        );
    }

    #[test]
    fn named_values_accept_any_case_convention() {
        assert_eq!(
            AxisTickLength::parse("longest-label"),
            Ok(AxisTickLength::LongestLabel)
        );
        assert_eq!(
            InterpolationMethod::parse("catmullRom"),
            Ok(InterpolationMethod::CatmullRom)
        );
        assert_eq!(
            CalendarIdentifier::parse("islamic-umm-al-qura"),
            Ok(CalendarIdentifier::IslamicUmmAlQura)
        );
        assert_eq!(Alignment::parse("topLeading"), Ok(Alignment::TOP_LEADING));
    }

    #[test]
    fn byte_count_units_parse_comma_sets() {
        let units = ByteCountUnits::parse("kb, mb").unwrap();
        assert!(units.contains(ByteCountUnits::KB));
        assert!(units.contains(ByteCountUnits::MB));
        assert!(!units.contains(ByteCountUnits::GB));
        assert!(ByteCountUnits::parse("default").unwrap().is_default());
        assert_eq!(ByteCountUnits::parse("all"), Ok(ByteCountUnits::ALL));
        assert!(ByteCountUnits::parse("kb,nibbles").is_err());
    }

    #[test]
    fn anchors_accept_names_and_pairs() {
        assert_eq!(Point::parse("top_trailing"), Ok(Point::new(1.0, 0.0)));
        assert_eq!(Point::parse("0.25,0.75"), Ok(Point::new(0.25, 0.75)));
        assert!(Point::parse("somewhere").is_err());
    }

    #[test]
    fn shape_styles_prefer_named_levels_over_colors() {
        assert_eq!(ShapeStyle::parse("tint"), Ok(ShapeStyle::Tint));
        assert_eq!(
            ShapeStyle::parse("secondary"),
            Ok(ShapeStyle::Hierarchical(HierarchicalLevel::Secondary))
        );
        assert!(matches!(ShapeStyle::parse("#ff0000"), Ok(ShapeStyle::Color(_))));
        assert!(ShapeStyle::parse("not a color").is_err());
    }

    #[test]
    fn strokes_take_a_non_negative_width() {
        assert_eq!(Stroke::parse("2").map(|s| s.width), Ok(2.0));
        assert!(Stroke::parse("-1").is_err());
    }
}
