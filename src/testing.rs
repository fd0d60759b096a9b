//! Testing utilities
//!
//! [`factories`] builds in-memory elements for exercising matchers without
//! parsing markup. Prefer [`HtmlElement`](crate::html::HtmlElement) when the
//! behavior under test depends on how real markup renders its text.
//!
//! ```rust,ignore
//! use dom_matchers::expect;
//! use dom_matchers::testing::factories::element;
//!
//! let banner = element("div").with_text(" Saved ").with_class("ng-hide");
//! expect(&banner).to_have_text("Saved").to_be_hidden();
//! ```

pub mod factories;
