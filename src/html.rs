//! HTML-backed elements
//!
//! Markup is parsed with html5ever into an `RcDom`; the first element of the
//! body becomes the wrapped node. Parsing goes through the full document
//! algorithm, so table-only fragments such as a bare `<tr>` are dropped the
//! same way a browser would drop them outside a table.
//!
//! Every element holds the document node. Dropping the document empties the
//! children of all its descendants, handles or not.

use crate::element::{Dump, Element};
use crate::error::MatchError;
use html5ever::serialize::{SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, serialize, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

/// An element node inside a parsed HTML tree
#[derive(Clone)]
pub struct HtmlElement {
    document: Handle,
    handle: Handle,
}

impl HtmlElement {
    /// Parse `markup` and wrap its first element
    pub fn parse(markup: &str) -> Result<Self, MatchError> {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(markup);
        let document = dom.document.clone();
        find_element(&document, "body")
            .and_then(|body| first_child_element(&body))
            .map(|handle| HtmlElement { document, handle })
            .ok_or_else(|| MatchError::NoElement(markup.to_string()))
    }

    /// First descendant element with the given tag name
    pub fn find(&self, tag: &str) -> Option<HtmlElement> {
        self.handle
            .children
            .borrow()
            .iter()
            .find_map(|child| find_element(child, tag))
            .map(|handle| self.wrap(handle))
    }

    /// Child elements, in document order
    pub fn children(&self) -> Vec<HtmlElement> {
        self.handle
            .children
            .borrow()
            .iter()
            .filter(|child| matches!(child.data, NodeData::Element { .. }))
            .map(|child| self.wrap(child.clone()))
            .collect()
    }

    fn wrap(&self, handle: Handle) -> HtmlElement {
        HtmlElement {
            document: self.document.clone(),
            handle,
        }
    }

    pub fn tag_name(&self) -> String {
        match &self.handle.data {
            NodeData::Element { name, .. } => name.local.to_string(),
            _ => String::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        match &self.handle.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == name)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    /// Classes listed in the `class` attribute
    pub fn classes(&self) -> Vec<String> {
        self.attr("class")
            .map(|value| value.split_ascii_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Dump for HtmlElement {
    /// Outer HTML of the element
    fn dump(&self) -> String {
        let mut output = Vec::new();
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..Default::default()
        };
        let serializable = SerializableHandle::from(self.handle.clone());
        serialize(&mut output, &serializable, opts)
            .ok()
            .and_then(|_| String::from_utf8(output).ok())
            .unwrap_or_else(|| format!("<{}>", self.tag_name()))
    }
}

impl Element for HtmlElement {
    fn text(&self) -> Option<String> {
        let mut text = String::new();
        collect_text(&self.handle, &mut text);
        Some(text)
    }

    fn has_class(&self, name: &str) -> bool {
        self.attr("class")
            .is_some_and(|value| value.split_ascii_whitespace().any(|class| class == name))
    }
}

impl std::fmt::Debug for HtmlElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HtmlElement").field(&self.dump()).finish()
    }
}

/// Depth-first search for an element named `tag`, `node` included
fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data {
        if &*name.local == tag {
            return Some(node.clone());
        }
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

fn first_child_element(node: &Handle) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wraps_first_element() {
        let el = HtmlElement::parse("<p class=\"lead\">Hi</p><p>Second</p>").unwrap();
        assert_eq!(el.tag_name(), "p");
        assert_eq!(el.text().as_deref(), Some("Hi"));
    }

    #[test]
    fn test_parse_without_element() {
        assert_eq!(
            HtmlElement::parse("just text").unwrap_err(),
            MatchError::NoElement("just text".to_string())
        );
    }

    #[test]
    fn test_text_collects_descendants_untrimmed() {
        let el = HtmlElement::parse("<div>  Hello <b>World</b>  </div>").unwrap();
        assert_eq!(el.text().as_deref(), Some("  Hello World  "));
    }

    #[test]
    fn test_has_class_splits_on_whitespace() {
        let el = HtmlElement::parse("<div class=\"ng-hide  foo\n bar\"></div>").unwrap();
        assert!(el.has_class("ng-hide"));
        assert!(el.has_class("foo"));
        assert!(el.has_class("bar"));
        assert!(!el.has_class("ng"));
        assert_eq!(el.classes(), vec!["ng-hide", "foo", "bar"]);
    }

    #[test]
    fn test_no_class_attribute() {
        let el = HtmlElement::parse("<span>x</span>").unwrap();
        assert!(!el.has_class("x"));
        assert!(el.classes().is_empty());
    }

    #[test]
    fn test_find_and_children() {
        let el = HtmlElement::parse("<ul><li>One</li><li class=\"active\">Two</li></ul>").unwrap();
        let children = el.children();
        assert_eq!(children.len(), 2);
        assert!(children[1].has_class("active"));
        assert_eq!(el.find("li").and_then(|li| li.text()).as_deref(), Some("One"));
        assert!(el.find("table").is_none());
    }

    #[test]
    fn test_dump_is_outer_html() {
        let el = HtmlElement::parse("<div class=\"foo\">Hello <b>World</b></div>").unwrap();
        assert_eq!(el.dump(), "<div class=\"foo\">Hello <b>World</b></div>");
    }

    #[test]
    fn test_found_element_outlives_parent() {
        let item = {
            let list = HtmlElement::parse("<ul><li><a>Home</a></li></ul>").unwrap();
            list.find("li").unwrap()
        };
        assert_eq!(item.text().as_deref(), Some("Home"));
        assert_eq!(item.dump(), "<li><a>Home</a></li>");
        assert_eq!(item.children().len(), 1);
    }

    #[test]
    fn test_class_list_splits_on_ascii_whitespace_only() {
        let el = HtmlElement::parse("<div class=\"a\u{00A0}b c\">x</div>").unwrap();
        assert!(!el.has_class("a"));
        assert!(el.has_class("a\u{00A0}b"));
        assert!(el.has_class("c"));
        assert_eq!(el.classes(), vec!["a\u{00A0}b", "c"]);
    }

    #[test]
    fn test_attr() {
        let el = HtmlElement::parse("<a href=\"/home\" id=\"nav\">Home</a>").unwrap();
        assert_eq!(el.attr("href").as_deref(), Some("/home"));
        assert_eq!(el.attr("id").as_deref(), Some("nav"));
        assert_eq!(el.attr("title"), None);
    }
}
