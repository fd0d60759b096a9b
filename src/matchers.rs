//! Matchers for DOM-like elements
//!
//! A matcher is a named, pure comparison between an [`Element`] and an
//! optional expected value. Four are built in:
//!
//! | Name            | Passes when                                        |
//! |-----------------|----------------------------------------------------|
//! | `toHaveText`    | the element text, trimmed, equals the expected text |
//! | `toContainText` | the element text contains the expected text        |
//! | `toHaveClass`   | the element carries the expected class             |
//! | `toBeHidden`    | the element carries the hidden class (`ng-hide`)   |
//!
//! Every comparison produces a [`MatchResult`]. Its message is worded from the
//! `pass` flag alone: a passing result reads "not to have", a failing one
//! "to have". That single message is correct for both polarities, since a
//! negated expectation only fails when the comparison passes.
//!
//! Matchers are resolved by name through a
//! [`MatcherRegistry`](crate::registry::MatcherRegistry); [`MatcherKind`] is
//! the typed view of the built-in names.

mod builtins;
mod text;

pub use builtins::{
    to_be_hidden, to_contain_text, to_have_class, to_have_text, BeHidden, ContainText, HaveClass,
    HaveText,
};
pub use text::TextMatch;

use crate::element::Element;
use crate::error::MatchError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Class whose presence marks an element as hidden
pub const HIDDEN_CLASS: &str = "ng-hide";

/// Outcome of a single comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub pass: bool,
    pub message: String,
}

/// A named comparison function that can be registered in a matcher table
pub trait Comparator: Send + Sync {
    /// The name the matcher is invoked by (e.g., "toHaveText")
    fn name(&self) -> &str;

    /// Whether the matcher reads an expected value
    fn takes_expected(&self) -> bool {
        true
    }

    /// Compare `actual` against `expected`
    fn compare(
        &self,
        actual: &dyn Element,
        expected: Option<&str>,
    ) -> Result<MatchResult, MatchError>;
}

/// The built-in matchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatcherKind {
    #[serde(rename = "toHaveText")]
    HaveText,
    #[serde(rename = "toContainText")]
    ContainText,
    #[serde(rename = "toHaveClass")]
    HaveClass,
    #[serde(rename = "toBeHidden")]
    BeHidden,
}

impl MatcherKind {
    pub const ALL: [MatcherKind; 4] = [
        MatcherKind::HaveText,
        MatcherKind::ContainText,
        MatcherKind::HaveClass,
        MatcherKind::BeHidden,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatcherKind::HaveText => "toHaveText",
            MatcherKind::ContainText => "toContainText",
            MatcherKind::HaveClass => "toHaveClass",
            MatcherKind::BeHidden => "toBeHidden",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        MatcherKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn takes_expected(self) -> bool {
        !matches!(self, MatcherKind::BeHidden)
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatcherKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatcherKind::from_name(s).ok_or_else(|| MatchError::MatcherNotFound(s.to_string()))
    }
}

fn have_phrase(pass: bool) -> &'static str {
    if pass {
        "not to have"
    } else {
        "to have"
    }
}

pub(crate) fn text_result(pass: bool, dump: &str, expected: &str) -> MatchResult {
    MatchResult {
        pass,
        message: format!(
            "Expected '{}' {} the text '{}'",
            dump,
            have_phrase(pass),
            expected
        ),
    }
}

pub(crate) fn class_result(pass: bool, dump: &str, expected: &str) -> MatchResult {
    MatchResult {
        pass,
        message: format!(
            "Expected '{}' {} a class '{}'.",
            dump,
            have_phrase(pass),
            expected
        ),
    }
}
