// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart content trees.
//!
//! Content is an ordered tree: leaves are marks, [`ChartContent::Group`] concatenates siblings in
//! document order, and [`ChartContent::Modified`] wraps a subtree with one modifier. A chain of
//! modifiers nests, so the last modifier applied is the outermost wrapper.

use crate::mark::Mark;
use crate::modifier::ContentModifier;

/// Operations shared by the content tree families (chart content, axis content, axis marks).
///
/// Each family has its own modifier type, so a modifier for one family cannot be applied to
/// another.
pub trait ContentNode: Sized {
    /// The modifier family that applies to this content.
    type Modifier;

    /// Returns content that draws nothing.
    fn empty() -> Self;

    /// Returns a placeholder for an element tag the family does not know.
    fn unsupported(tag: &str) -> Self;

    /// Returns `true` if this content draws nothing.
    fn is_empty(&self) -> bool;

    /// Appends `next` after `self`, flattening groups and dropping empty content.
    fn concat(self, next: Self) -> Self;

    /// Wraps this content with a modifier. Empty content stays empty.
    fn modified(self, modifier: Self::Modifier) -> Self;
}

/// Opaque view content, owned by the host view layer.
///
/// Annotations, custom symbols and legends carry views rather than chart content. The chart
/// layer only records which template was selected and what it contains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewTemplate {
    /// Key of the template the content was selected by, if any.
    pub key: Option<String>,
    /// Root nodes, in document order.
    pub roots: Vec<ViewRoot>,
}

/// One root node of a [`ViewTemplate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewRoot {
    /// An element, by tag name.
    Element(String),
    /// A text node.
    Text(String),
}

impl ViewTemplate {
    /// Returns `true` if the template has no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// A chart content tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ChartContent {
    /// Draws nothing.
    #[default]
    Empty,
    /// One mark.
    Mark(Mark),
    /// A plot: grouped content produced by one element.
    Plot(Vec<ChartContent>),
    /// Sibling content, in document order.
    Group(Vec<ChartContent>),
    /// Content wrapped with one modifier.
    Modified {
        /// The wrapped content.
        content: Box<ChartContent>,
        /// The modifier applied to it.
        modifier: ContentModifier,
    },
    /// An element the chart content family does not recognize.
    Unsupported {
        /// The element's tag.
        tag: String,
    },
}

impl ChartContent {
    /// Returns the top-level items: the members of a group, nothing for empty content, or the
    /// content itself.
    pub fn items(&self) -> &[Self] {
        match self {
            Self::Empty => &[],
            Self::Group(items) => items,
            other => core::slice::from_ref(other),
        }
    }

    /// Consumes the content and returns its top-level items (see [`ChartContent::items`]).
    pub fn into_items(self) -> Vec<Self> {
        match self {
            Self::Empty => Vec::new(),
            Self::Group(items) => items,
            other => vec![other],
        }
    }

    /// Collects every mark in the tree, in document order.
    pub fn marks(&self) -> Vec<&Mark> {
        let mut out = Vec::new();
        self.collect_marks(&mut out);
        out
    }

    fn collect_marks<'a>(&'a self, out: &mut Vec<&'a Mark>) {
        match self {
            Self::Empty | Self::Unsupported { .. } => {}
            Self::Mark(mark) => out.push(mark),
            Self::Plot(items) | Self::Group(items) => {
                for item in items {
                    item.collect_marks(out);
                }
            }
            Self::Modified { content, .. } => content.collect_marks(out),
        }
    }

    /// Returns the modifiers wrapping this node, outermost first, and the innermost content.
    pub fn peel_modifiers(&self) -> (Vec<&ContentModifier>, &Self) {
        let mut modifiers = Vec::new();
        let mut node = self;
        while let Self::Modified { content, modifier } = node {
            modifiers.push(modifier);
            node = &**content;
        }
        (modifiers, node)
    }
}

impl From<Mark> for ChartContent {
    fn from(mark: Mark) -> Self {
        Self::Mark(mark)
    }
}

impl ContentNode for ChartContent {
    type Modifier = ContentModifier;

    fn empty() -> Self {
        Self::Empty
    }

    fn unsupported(tag: &str) -> Self {
        Self::Unsupported {
            tag: tag.to_owned(),
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn concat(self, next: Self) -> Self {
        match (self, next) {
            (Self::Empty, next) => next,
            (acc, Self::Empty) => acc,
            (Self::Group(mut items), next) => {
                items.push(next);
                Self::Group(items)
            }
            (acc, next) => Self::Group(vec![acc, next]),
        }
    }

    fn modified(self, modifier: ContentModifier) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::Modified {
            content: Box::new(self),
            modifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BarMark, MarkGeometry, PlottableValue};

    fn bar(x: f64) -> ChartContent {
        let geometry = MarkGeometry::Simple {
            x: PlottableValue::new("X", x),
            y: PlottableValue::new("Y", x),
        };
        Mark::from(BarMark::new(geometry).unwrap()).into()
    }

    #[test]
    fn concat_flattens_groups_and_drops_empty() {
        let content = ChartContent::Empty
            .concat(bar(0.0))
            .concat(ChartContent::Empty)
            .concat(bar(1.0))
            .concat(bar(2.0));
        let ChartContent::Group(items) = &content else {
            panic!("expected a group, got {content:?}");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(content.marks().len(), 3);
    }

    #[test]
    fn modifiers_nest_with_the_last_applied_outermost() {
        let content = bar(0.0)
            .modified(ContentModifier::Opacity(0.5))
            .modified(ContentModifier::ZIndex(2));
        let (modifiers, inner) = content.peel_modifiers();
        assert_eq!(
            modifiers,
            vec![&ContentModifier::ZIndex(2), &ContentModifier::Opacity(0.5)]
        );
        assert!(matches!(inner, ChartContent::Mark(_)));
    }

    #[test]
    fn modifying_empty_content_is_a_no_op() {
        let content = ChartContent::Empty.modified(ContentModifier::Opacity(0.5));
        assert!(content.is_empty());
        assert!(content.items().is_empty());
    }
}
