// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element registries: the tags each content family understands.

macro_rules! tag_registry {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every registered tag, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Looks up a tag name.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the tag name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

tag_registry! {
    /// Chart content elements.
    ContentTag {
        /// An area mark.
        AreaMark,
        /// A bar mark.
        BarMark,
        /// A line mark.
        LineMark,
        /// A group of content built from the element's children.
        Plot,
        /// A point mark.
        PointMark,
        /// A rectangle mark.
        RectangleMark,
        /// A rule mark.
        RuleMark,
    }
}

tag_registry! {
    /// Axis content elements.
    AxisContentTag {
        /// A set of axis marks.
        AxisMarks,
    }
}

tag_registry! {
    /// Axis mark elements.
    AxisMarkTag {
        /// A gridline.
        AxisGridLine,
        /// A tick.
        AxisTick,
        /// A value label.
        AxisValueLabel,
        /// Marks drawn at one explicit value.
        AxisValue,
    }
}

tag_registry! {
    /// Chart root elements.
    ChartTag {
        /// The chart.
        Chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_their_names() {
        for tag in ContentTag::ALL {
            assert_eq!(ContentTag::from_tag(tag.name()), Some(*tag));
        }
        for tag in AxisMarkTag::ALL {
            assert_eq!(AxisMarkTag::from_tag(tag.name()), Some(*tag));
        }
    }

    #[test]
    fn lookups_are_case_sensitive_and_family_specific() {
        assert_eq!(ContentTag::from_tag("BarMark"), Some(ContentTag::BarMark));
        assert_eq!(ContentTag::from_tag("barmark"), None);
        assert_eq!(ContentTag::from_tag("AxisMarks"), None);
        assert_eq!(
            AxisContentTag::from_tag("AxisMarks"),
            Some(AxisContentTag::AxisMarks)
        );
        assert_eq!(ChartTag::from_tag("Plot"), None);
    }
}
