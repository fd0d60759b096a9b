//! Built-in comparators
//!
//! Each comparator carries a [`Dumper`] so the rendering of `actual` in its
//! message can be limited by configuration. The free functions use the
//! default, unlimited dumper.

use super::{
    class_result, text_result, Comparator, MatchResult, MatcherKind, TextMatch, HIDDEN_CLASS,
};
use crate::dump::Dumper;
use crate::element::Element;
use crate::error::MatchError;

fn require_expected<'e>(
    kind: MatcherKind,
    expected: Option<&'e str>,
) -> Result<&'e str, MatchError> {
    expected.ok_or_else(|| MatchError::MissingExpected(kind.name().to_string()))
}

fn compare_text(dumper: &Dumper, actual: &dyn Element, pattern: TextMatch) -> MatchResult {
    let text = actual.text();
    let pass = pattern.matches(text.as_deref());
    text_result(pass, &dumper.render(actual), pattern.expected())
}

fn compare_class(dumper: &Dumper, actual: &dyn Element, class: &str) -> MatchResult {
    let pass = actual.has_class(class);
    class_result(pass, &dumper.render(actual), class)
}

/// `toHaveText`: trimmed text equals the expected text
#[derive(Debug, Clone, Default)]
pub struct HaveText {
    pub dumper: Dumper,
}

impl Comparator for HaveText {
    fn name(&self) -> &str {
        MatcherKind::HaveText.name()
    }

    fn takes_expected(&self) -> bool {
        MatcherKind::HaveText.takes_expected()
    }

    fn compare(
        &self,
        actual: &dyn Element,
        expected: Option<&str>,
    ) -> Result<MatchResult, MatchError> {
        let expected = require_expected(MatcherKind::HaveText, expected)?;
        Ok(compare_text(
            &self.dumper,
            actual,
            TextMatch::Trimmed(expected.to_string()),
        ))
    }
}

/// `toContainText`: text contains the expected substring
#[derive(Debug, Clone, Default)]
pub struct ContainText {
    pub dumper: Dumper,
}

impl Comparator for ContainText {
    fn name(&self) -> &str {
        MatcherKind::ContainText.name()
    }

    fn takes_expected(&self) -> bool {
        MatcherKind::ContainText.takes_expected()
    }

    fn compare(
        &self,
        actual: &dyn Element,
        expected: Option<&str>,
    ) -> Result<MatchResult, MatchError> {
        let expected = require_expected(MatcherKind::ContainText, expected)?;
        Ok(compare_text(
            &self.dumper,
            actual,
            TextMatch::Contains(expected.to_string()),
        ))
    }
}

/// `toHaveClass`: the element carries the expected class
#[derive(Debug, Clone, Default)]
pub struct HaveClass {
    pub dumper: Dumper,
}

impl Comparator for HaveClass {
    fn name(&self) -> &str {
        MatcherKind::HaveClass.name()
    }

    fn takes_expected(&self) -> bool {
        MatcherKind::HaveClass.takes_expected()
    }

    fn compare(
        &self,
        actual: &dyn Element,
        expected: Option<&str>,
    ) -> Result<MatchResult, MatchError> {
        let expected = require_expected(MatcherKind::HaveClass, expected)?;
        Ok(compare_class(&self.dumper, actual, expected))
    }
}

/// `toBeHidden`: the element carries the hidden class
#[derive(Debug, Clone)]
pub struct BeHidden {
    pub hidden_class: String,
    pub dumper: Dumper,
}

impl Default for BeHidden {
    fn default() -> Self {
        BeHidden {
            hidden_class: HIDDEN_CLASS.to_string(),
            dumper: Dumper::default(),
        }
    }
}

impl Comparator for BeHidden {
    fn name(&self) -> &str {
        MatcherKind::BeHidden.name()
    }

    fn takes_expected(&self) -> bool {
        MatcherKind::BeHidden.takes_expected()
    }

    /// `expected` is ignored
    fn compare(
        &self,
        actual: &dyn Element,
        _expected: Option<&str>,
    ) -> Result<MatchResult, MatchError> {
        Ok(compare_class(&self.dumper, actual, &self.hidden_class))
    }
}

pub fn to_have_text(actual: &dyn Element, expected: &str) -> MatchResult {
    compare_text(
        &Dumper::default(),
        actual,
        TextMatch::Trimmed(expected.to_string()),
    )
}

pub fn to_contain_text(actual: &dyn Element, expected: &str) -> MatchResult {
    compare_text(
        &Dumper::default(),
        actual,
        TextMatch::Contains(expected.to_string()),
    )
}

pub fn to_have_class(actual: &dyn Element, expected: &str) -> MatchResult {
    compare_class(&Dumper::default(), actual, expected)
}

pub fn to_be_hidden(actual: &dyn Element) -> MatchResult {
    compare_class(&Dumper::default(), actual, HIDDEN_CLASS)
}
