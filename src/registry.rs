//! Matcher registry for lookup by name
//!
//! This module provides the matcher table assertions resolve names against.
//! Tables are plain values: each test context builds its own with
//! [`install`] instead of sharing a global one, so registrations made by one
//! test can never leak into another.

use crate::dump::Dumper;
use crate::element::Element;
use crate::error::MatchError;
use crate::matchers::{BeHidden, Comparator, ContainText, HaveClass, HaveText, MatchResult};
use dom_matchers_config::MatchersConfig;
use std::collections::HashMap;
use std::fmt;

/// Registry of matchers
///
/// Matchers can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let registry = install();
/// let result = registry.compare("toHaveText", &element, Some("Hello"))?;
/// assert!(result.pass);
/// ```
pub struct MatcherRegistry {
    matchers: HashMap<String, Box<dyn Comparator>>,
}

impl MatcherRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        MatcherRegistry {
            matchers: HashMap::new(),
        }
    }

    /// Register a matcher
    ///
    /// If a matcher with the same name already exists, it will be replaced.
    pub fn register<C: Comparator + 'static>(&mut self, matcher: C) {
        let name = matcher.name().to_string();
        let replaced = self.matchers.insert(name.clone(), Box::new(matcher)).is_some();
        tracing::debug!(matcher = %name, replaced, "registered matcher");
    }

    /// Get a matcher by name
    pub fn get(&self, name: &str) -> Result<&dyn Comparator, MatchError> {
        self.matchers
            .get(name)
            .map(|m| m.as_ref())
            .ok_or_else(|| MatchError::MatcherNotFound(name.to_string()))
    }

    /// Check if a matcher exists
    pub fn has(&self, name: &str) -> bool {
        self.matchers.contains_key(name)
    }

    /// Number of registered matchers
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// List all registered matcher names (sorted)
    pub fn list_matchers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.matchers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Run the named matcher against `actual`
    ///
    /// Matchers that take an expected value are never called without one.
    pub fn compare(
        &self,
        name: &str,
        actual: &dyn Element,
        expected: Option<&str>,
    ) -> Result<MatchResult, MatchError> {
        let matcher = self.get(name)?;
        if matcher.takes_expected() && expected.is_none() {
            return Err(MatchError::MissingExpected(name.to_string()));
        }
        let result = matcher.compare(actual, expected)?;
        tracing::trace!(matcher = name, pass = result.pass, "compared");
        Ok(result)
    }

    /// Create a registry with the built-in matchers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        install_into(&mut registry);
        registry
    }

    /// Create a registry with the built-in matchers, tuned by configuration
    pub fn from_config(config: &MatchersConfig) -> Self {
        let mut registry = Self::new();
        register_builtins(
            &mut registry,
            Dumper::from_config(&config.dump),
            &config.matchers.hidden_class,
        );
        registry
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherRegistry")
            .field("matchers", &self.list_matchers())
            .finish()
    }
}

/// Build a fresh matcher table holding the built-in matchers.
///
/// Call this during each test's setup.
pub fn install() -> MatcherRegistry {
    MatcherRegistry::with_defaults()
}

/// (Re)register the built-in matchers into an existing table.
///
/// Same-named entries are overwritten, so installing twice leaves the table
/// exactly as installing once.
pub fn install_into(registry: &mut MatcherRegistry) {
    register_builtins(registry, Dumper::default(), crate::matchers::HIDDEN_CLASS);
}

fn register_builtins(registry: &mut MatcherRegistry, dumper: Dumper, hidden_class: &str) {
    registry.register(HaveText { dumper });
    registry.register(ContainText { dumper });
    registry.register(HaveClass { dumper });
    registry.register(BeHidden {
        hidden_class: hidden_class.to_string(),
        dumper,
    });
    tracing::debug!(count = registry.len(), hidden_class, "installed matchers");
}
