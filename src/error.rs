//! Error types for matcher lookup and evaluation

use std::fmt;

/// Errors that can occur while resolving or evaluating a matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No matcher is registered under this name
    MatcherNotFound(String),
    /// The matcher needs an expected value and none was given
    MissingExpected(String),
    /// The comparison disagreed with the expectation's polarity
    AssertionFailed(String),
    /// Markup did not contain an element to wrap
    NoElement(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::MatcherNotFound(name) => write!(f, "No matcher registered as '{}'", name),
            MatchError::MissingExpected(name) => {
                write!(f, "Matcher '{}' requires an expected value", name)
            }
            MatchError::AssertionFailed(message) => write!(f, "{}", message),
            MatchError::NoElement(markup) => write!(f, "No element found in markup: {}", markup),
        }
    }
}

impl std::error::Error for MatchError {}
