//! Factories for in-memory elements

use crate::element::{Dump, Element};

/// An element built in memory, with fixed text and classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubElement {
    tag: String,
    text: Option<String>,
    classes: Vec<String>,
}

/// Make an empty element with the given tag
pub fn element(tag: &str) -> StubElement {
    StubElement {
        tag: tag.to_string(),
        text: Some(String::new()),
        classes: Vec::new(),
    }
}

impl StubElement {
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Make the element report no text at all
    pub fn without_text(mut self) -> Self {
        self.text = None;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl Dump for StubElement {
    fn dump(&self) -> String {
        let class_attr = if self.classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", self.classes.join(" "))
        };
        format!(
            "<{tag}{class_attr}>{text}</{tag}>",
            tag = self.tag,
            text = self.text.as_deref().unwrap_or_default()
        )
    }
}

impl Element for StubElement {
    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_without_classes() {
        assert_eq!(element("span").with_text("hi").dump(), "<span>hi</span>");
    }

    #[test]
    fn test_dump_with_classes() {
        let li = element("li").with_classes(["active", "first"]);
        assert_eq!(li.dump(), "<li class=\"active first\"></li>");
    }

    #[test]
    fn test_without_text() {
        let div = element("div").with_text("x").without_text();
        assert_eq!(div.text(), None);
        assert_eq!(div.dump(), "<div></div>");
    }

    #[test]
    fn test_has_class_is_exact() {
        let div = element("div").with_class("ng-hide-animate");
        assert!(div.has_class("ng-hide-animate"));
        assert!(!div.has_class("ng-hide"));
    }
}
