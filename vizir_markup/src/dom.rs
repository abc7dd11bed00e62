// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A read-only markup element tree.
//!
//! The tree is produced by a markup parser outside this crate. For fixtures and tools it can be
//! deserialized from JSON:
//!
//! ```json
//! { "tag": "BarMark", "attributes": { "x": "0", "x:label": "X" }, "children": [] }
//! ```
//!
//! Attributes may also be given as a list of `[name, value]` pairs. A `:` in an attribute name
//! separates the namespace from the name, so `x:label` is the `label` attribute in the `x`
//! namespace. A bare JSON string in `children` is a text node.

use core::fmt;

use serde::Deserialize;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use smallvec::SmallVec;

use crate::error::MarkupError;

/// The attribute that marks a child as out-of-flow template content.
pub const TEMPLATE_ATTRIBUTE: &str = "template";

/// A compound attribute name: an optional namespace and a name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeName {
    /// Namespace, e.g. `x` in `x:label`.
    pub namespace: Option<String>,
    /// Name, e.g. `label` in `x:label`.
    pub name: String,
}

impl AttributeName {
    /// Creates a name without a namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    /// Creates a namespaced name.
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }

    /// Parses `namespace:name` (or a plain `name`).
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((namespace, name)) => Self::namespaced(namespace, name),
            None => Self::new(raw),
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{namespace}:{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: AttributeName,
    /// Raw attribute value.
    pub value: String,
}

/// A markup node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A text node.
    Text(String),
    /// An element.
    Element(Element),
}

impl Node {
    /// Returns the element, if this is an element node.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A markup element: tag, ordered attributes, ordered children.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Attributes, in document order.
    #[serde(default)]
    pub attributes: Attributes,
    /// Child nodes, in document order.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Ordered element attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(SmallVec<[Attribute; 4]>);

impl Attributes {
    /// Iterates the attributes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, name: AttributeName, value: String) {
        self.0.push(Attribute { name, value });
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(AttributesVisitor)
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of attribute names to strings, or a list of [name, value] pairs")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Attributes, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut out = Attributes::default();
        while let Some((name, value)) = map.next_entry::<String, String>()? {
            out.push(AttributeName::parse(&name), value);
        }
        Ok(out)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Attributes, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = Attributes::default();
        while let Some((name, value)) = seq.next_element::<(String, String)>()? {
            out.push(AttributeName::parse(&name), value);
        }
        Ok(out)
    }
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::default(),
            children: Vec::new(),
        }
    }

    /// Parses an element tree from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, MarkupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds an attribute; `name` may be `namespace:name`.
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push(AttributeName::parse(name), value.into());
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Returns the value of an attribute without a namespace.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace.is_none() && a.name.name == name)
            .map(|a| a.value.as_str())
    }

    /// Returns the value of a namespaced attribute.
    pub fn attribute_ns(&self, namespace: &str, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace.as_deref() == Some(namespace) && a.name.name == name)
            .map(|a| a.value.as_str())
    }

    /// Returns `true` if the attribute is present (with any value).
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Returns the `template` key, if this element is template content.
    pub fn template_key(&self) -> Option<&str> {
        self.attribute(TEMPLATE_ATTRIBUTE)
    }

    /// Iterates element children, including template content.
    pub fn element_children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Iterates element children that are part of normal flow (not template content).
    pub fn flow_children(&self) -> impl Iterator<Item = &Self> {
        self.element_children()
            .filter(|child| child.template_key().is_none())
    }

    /// Iterates element children whose `template` key is `key`.
    pub fn template_children<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Self> {
        self.element_children()
            .filter(move |child| child.template_key() == Some(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_attributes_split_on_the_first_colon() {
        let name = AttributeName::parse("x-start:label");
        assert_eq!(name.namespace.as_deref(), Some("x-start"));
        assert_eq!(name.name, "label");
        assert_eq!(name.to_string(), "x-start:label");
        assert_eq!(AttributeName::parse("x"), AttributeName::new("x"));
    }

    #[test]
    fn element_deserializes_map_and_pair_attributes() {
        let from_map = Element::from_json_str(
            r#"{"tag":"BarMark","attributes":{"x":"0","x:label":"X"},"children":["hi"]}"#,
        )
        .unwrap();
        let from_pairs =
            Element::from_json_str(r#"{"tag":"BarMark","attributes":[["x","0"],["x:label","X"]]}"#)
                .unwrap();

        assert_eq!(from_map.attribute("x"), Some("0"));
        assert_eq!(from_map.attribute_ns("x", "label"), Some("X"));
        assert_eq!(from_map.attribute("label"), None);
        assert_eq!(from_map.children, vec![Node::Text("hi".into())]);
        assert_eq!(from_map.attributes, from_pairs.attributes);
    }

    #[test]
    fn template_children_are_excluded_from_flow() {
        let element = Element::new("Chart")
            .with_child(Element::new("BarMark"))
            .with_child(Element::new("Text").with_attribute("template", "note"))
            .with_text("ignored");
        assert_eq!(element.flow_children().count(), 1);
        assert_eq!(element.template_children("note").count(), 1);
        assert_eq!(element.template_children("other").count(), 0);
    }
}
