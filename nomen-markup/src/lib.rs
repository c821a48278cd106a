//! Element/text trees and their HTML serialization.
//!
//! A tree is built once, bottom-up, and then only read:
//!
//! ```
//! use nomen_markup::{Element, Node};
//!
//! let node: Node = Element::new("span")
//!     .with_attr("style", "color: rgb(255, 140, 0);")
//!     .with_text("Ä")
//!     .into();
//!
//! assert_eq!(node.to_html(), r#"<span style="color: rgb(255, 140, 0);">Ä</span>"#);
//! ```
//!
//! # Escaping
//!
//! Nothing is escaped. Text content and attribute values are written
//! verbatim, so callers must hand in markup-safe strings. Existing deck
//! files rely on this raw passthrough.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use core::fmt;

use indexmap::IndexMap;

/// Attribute map of an [`Element`], serialized in insertion order.
pub type Attrs = IndexMap<String, String>;

/// A node of a markup tree: either an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag, attributes and children.
    Element(Element),
    /// Raw text content.
    Text(String),
}

impl Node {
    /// Build an element node from its parts.
    ///
    /// Tag and attribute names are not validated.
    pub fn element(
        tag: impl Into<String>,
        attrs: impl IntoIterator<Item = (String, String)>,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            attrs: attrs.into_iter().collect(),
            children: children.into_iter().collect(),
        })
    }

    /// Build a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Returns `Some(&str)` if this is text content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Returns `Some(&Element)` if this is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Concatenation of every text leaf below this node, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Serialize to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Write HTML to a string buffer.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => e.write_html(out),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Serialize a tree to HTML.
///
/// Pre-order: open tag with attributes, then the children, then the close
/// tag. Text is emitted as-is.
pub fn render(node: &Node) -> String {
    node.to_html()
}

/// An element: tag name, attributes, and owned children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    attrs: Attrs,
    children: Vec<Node>,
}

impl Element {
    /// Create a new element with just a tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    ///
    /// Setting an existing name replaces the value but keeps its position.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add several child nodes.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Add text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// All attributes, in insertion order.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }

    /// Child nodes in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterate over child elements (skipping text nodes).
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| c.as_element())
    }

    /// Write HTML to a string buffer.
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (k, v) in &self.attrs {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            out.push_str(v);
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_builder_api() {
        let elem = Element::new("root")
            .with_attr("id", "123")
            .with_child(Element::new("child").with_text("hello world"));

        assert_eq!(elem.tag(), "root");
        assert_eq!(elem.get_attr("id"), Some("123"));
        assert_eq!(elem.children().len(), 1);

        let child = elem.child_elements().next().unwrap();
        assert_eq!(child.tag(), "child");
        assert_eq!(Node::from(child.clone()).text_content(), "hello world");
    }

    #[test]
    fn bare_element_has_no_trailing_space() {
        assert_eq!(Node::from(Element::new("br")).to_html(), "<br></br>");
        assert_eq!(render(&Element::new("span").with_text("x").into()), "<span>x</span>");
    }

    #[test]
    fn attrs_keep_insertion_order() {
        let html = Node::from(
            Element::new("a")
                .with_attr("z", "1")
                .with_attr("a", "2")
                .with_attr("m", "3"),
        )
        .to_html();
        assert_eq!(html, r#"<a z="1" a="2" m="3"></a>"#);
    }

    #[test]
    fn replacing_attr_keeps_position() {
        let e = Element::new("a")
            .with_attr("x", "1")
            .with_attr("y", "2")
            .with_attr("x", "3");
        let names: Vec<_> = e.attrs().keys().map(String::as_str).collect();
        assert_eq!(names, ["x", "y"]);
        assert_eq!(e.get_attr("x"), Some("3"));
    }

    #[test]
    fn text_is_not_escaped() {
        let node = Node::element(
            "span",
            [("title".to_owned(), "a\"b".to_owned())],
            [Node::text("<b>&</b>")],
        );
        assert_eq!(node.to_html(), r#"<span title="a"b"><b>&</b></span>"#);
    }

    #[test]
    fn text_content_is_preorder() {
        let node = Node::from(
            Element::new("p")
                .with_text("a")
                .with_child(
                    Element::new("b")
                        .with_text("b")
                        .with_child(Element::new("i").with_text("c")),
                )
                .with_text("d"),
        );
        assert_eq!(node.text_content(), "abcd");
    }
}
