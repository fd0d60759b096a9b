//! Fluent expectation API
//!
//! ```rust,ignore
//! expect(&banner)
//!     .to_have_text("Saved")
//!     .to_contain_text("Sav")
//!     .not()
//!     .to_have_class("error");
//! ```
//!
//! Assertions panic with the matcher's message when the outcome disagrees with
//! the expectation's polarity, which is how the test harness reports a failed
//! assertion. [`Expectation::try_to`] reports the same outcome as a `Result`.

use crate::element::Element;
use crate::error::MatchError;
use crate::matchers::{MatchResult, MatcherKind};
use crate::registry::MatcherRegistry;

enum Table<'a> {
    Installed(MatcherRegistry),
    Borrowed(&'a MatcherRegistry),
}

impl Table<'_> {
    fn get(&self) -> &MatcherRegistry {
        match self {
            Table::Installed(registry) => registry,
            Table::Borrowed(registry) => registry,
        }
    }
}

/// Start an expectation against the built-in matchers
pub fn expect(actual: &dyn Element) -> Expectation<'_> {
    Expectation {
        actual,
        negated: false,
        table: Table::Installed(MatcherRegistry::with_defaults()),
    }
}

/// Start an expectation resolving matchers in `registry`
pub fn expect_with<'a>(registry: &'a MatcherRegistry, actual: &'a dyn Element) -> Expectation<'a> {
    Expectation {
        actual,
        negated: false,
        table: Table::Borrowed(registry),
    }
}

pub struct Expectation<'a> {
    actual: &'a dyn Element,
    negated: bool,
    table: Table<'a>,
}

impl<'a> Expectation<'a> {
    /// Flip the polarity of the assertions that follow
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn to_have_text(self, expected: &str) -> Self {
        self.to(MatcherKind::HaveText.name(), Some(expected))
    }

    pub fn to_contain_text(self, expected: &str) -> Self {
        self.to(MatcherKind::ContainText.name(), Some(expected))
    }

    pub fn to_have_class(self, expected: &str) -> Self {
        self.to(MatcherKind::HaveClass.name(), Some(expected))
    }

    pub fn to_be_hidden(self) -> Self {
        self.to(MatcherKind::BeHidden.name(), None)
    }

    /// Assert with the matcher registered as `name`
    pub fn to(self, name: &str, expected: Option<&str>) -> Self {
        if let Err(err) = self.try_to(name, expected) {
            panic!("{}", err);
        }
        self
    }

    /// Evaluate the matcher registered as `name` without panicking
    ///
    /// Returns the comparison result when it agrees with the polarity and
    /// `MatchError::AssertionFailed` carrying its message otherwise.
    pub fn try_to(&self, name: &str, expected: Option<&str>) -> Result<MatchResult, MatchError> {
        let result = self.table.get().compare(name, self.actual, expected)?;
        if result.pass == self.negated {
            return Err(MatchError::AssertionFailed(result.message));
        }
        Ok(result)
    }
}
