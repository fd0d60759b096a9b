//! Element capability traits
//!
//! Matchers never look at a concrete node type. They only need an element to
//! report its rendered text and whether it carries a CSS class, plus a way to
//! render itself in failure messages ([`Dump`]).

/// Diagnostic rendering of a value, used only in failure messages
pub trait Dump {
    fn dump(&self) -> String;
}

/// A rendered UI node as seen by the matchers
pub trait Element: Dump {
    /// Rendered text of the node and its descendants, untrimmed.
    ///
    /// `None` stands for a node whose text is unavailable. Matchers treat it
    /// as non-matching rather than as an error.
    fn text(&self) -> Option<String>;

    /// Whether the node's class list contains `name`
    fn has_class(&self, name: &str) -> bool;
}

impl<T: Dump + ?Sized> Dump for &T {
    fn dump(&self) -> String {
        (**self).dump()
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn text(&self) -> Option<String> {
        (**self).text()
    }

    fn has_class(&self, name: &str) -> bool {
        (**self).has_class(name)
    }
}
