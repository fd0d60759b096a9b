//! # dom-matchers
//!
//! Assertion matchers for DOM-like elements: text content, substring
//! presence, CSS class membership and visibility.
//!
//! A test builds its own matcher table during setup with
//! [`install`](registry::install) and asserts through [`expect`]:
//!
//! ```rust,ignore
//! use dom_matchers::{expect, html::HtmlElement};
//!
//! let toast = HtmlElement::parse("<div class=\"toast ng-hide\"> Saved </div>")?;
//! expect(&toast).to_have_text("Saved").to_be_hidden();
//! expect(&toast).not().to_have_class("error");
//! ```
//!
//! Any type implementing [`Element`] can be asserted on. For tests that do
//! not need real markup, see the [testing module](testing).

pub mod dump;
pub mod element;
pub mod error;
pub mod expect;
pub mod html;
pub mod matchers;
pub mod registry;
pub mod testing;

pub use element::{Dump, Element};
pub use error::MatchError;
pub use expect::{expect, expect_with, Expectation};
pub use matchers::{Comparator, MatchResult, MatcherKind};
pub use registry::{install, install_into, MatcherRegistry};
