//! Rendering elements for failure messages

use crate::element::Element;
use dom_matchers_config::DumpConfig;

const ELLIPSIS: &str = "...";

/// Renders an element's [`Dump`](crate::element::Dump) output, optionally
/// truncated to a maximum number of characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dumper {
    /// 0 means unlimited
    max_length: usize,
}

impl Dumper {
    pub fn new(max_length: usize) -> Self {
        Dumper { max_length }
    }

    pub fn from_config(config: &DumpConfig) -> Self {
        Dumper::new(config.max_length)
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn render(&self, actual: &dyn Element) -> String {
        truncate(actual.dump(), self.max_length)
    }
}

fn truncate(dump: String, max_length: usize) -> String {
    if max_length == 0 || dump.chars().count() <= max_length {
        return dump;
    }
    let mut shortened: String = dump.chars().take(max_length).collect();
    shortened.push_str(ELLIPSIS);
    shortened
}
