//! Text matching patterns

/// Text matching patterns for element text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    /// Exact match after trimming leading and trailing whitespace
    Trimmed(String),
    /// Text contains substring
    Contains(String),
}

impl TextMatch {
    /// Check if the actual text matches this pattern.
    ///
    /// Absent text never matches.
    pub fn matches(&self, actual: Option<&str>) -> bool {
        let Some(actual) = actual else {
            return false;
        };
        match self {
            TextMatch::Trimmed(expected) => actual.trim() == expected,
            TextMatch::Contains(substring) => actual.contains(substring.as_str()),
        }
    }

    /// The expected text as written by the test author
    pub fn expected(&self) -> &str {
        match self {
            TextMatch::Trimmed(expected) | TextMatch::Contains(expected) => expected,
        }
    }
}
