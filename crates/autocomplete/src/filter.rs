//! Candidate filtering.
//!
//! The default predicate is a case-insensitive prefix match of the option's
//! key against the input text. A custom predicate receives the raw option and
//! the raw text and owns its matching semantics entirely, including case
//! folding and what an empty text means; the widget does not fold case on its
//! behalf.
//!
//! # Example
//!
//! ```rust
//! use autocomplete::filter::Filter;
//! use autocomplete::identity::Resolver;
//!
//! let options: Vec<String> = ["one", "one1", "one2", "two"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let filtered = Filter::prefix().apply(&options, "ON", &Resolver::keyed());
//! assert_eq!(filtered.indices, vec![0, 1, 2]);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::{AutocompleteError, Result};
use crate::identity::Resolver;

type PredicateFn<T> = Arc<dyn Fn(&T, &str) -> std::result::Result<bool, String> + Send + Sync>;

/// Case-insensitive prefix test used by the default filter.
pub fn prefix_match(key: &str, text: &str) -> bool {
    key.to_lowercase().starts_with(&text.to_lowercase())
}

/// Result of one filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filtered {
    /// Indices into the option set, in option order.
    pub indices: Vec<usize>,
    /// Options excluded because the predicate failed on them.
    pub errors: Vec<AutocompleteError>,
}

/// Decides which options are candidates for an input text.
pub struct Filter<T> {
    predicate: Option<PredicateFn<T>>,
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
        }
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::prefix()
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("custom", &self.predicate.is_some())
            .finish()
    }
}

impl<T> Filter<T> {
    /// The default case-insensitive key prefix filter.
    #[must_use]
    pub fn prefix() -> Self {
        Self { predicate: None }
    }

    /// Returns true if a custom predicate is installed.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.predicate.is_some()
    }
}

impl<T: 'static> Filter<T> {
    /// Uses a caller-supplied predicate.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Some(Arc::new(move |option: &T, text: &str| {
                Ok(predicate(option, text))
            })),
        }
    }

    /// Uses a caller-supplied predicate that may fail.
    ///
    /// An option whose predicate fails is excluded from the candidates.
    pub fn try_custom<F, E>(predicate: F) -> Self
    where
        F: Fn(&T, &str) -> std::result::Result<bool, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Self {
            predicate: Some(Arc::new(move |option: &T, text: &str| {
                predicate(option, text).map_err(|e| e.to_string())
            })),
        }
    }

    /// Tests a single option.
    pub fn matches(&self, option: &T, text: &str, resolver: &Resolver<T>) -> Result<bool> {
        match &self.predicate {
            Some(predicate) => {
                predicate(option, text).map_err(|message| AutocompleteError::Predicate {
                    key: resolver.key(option),
                    message,
                })
            }
            None => Ok(prefix_match(&resolver.key(option), text)),
        }
    }

    /// Filters the whole option set, preserving option order.
    pub fn apply(&self, options: &[T], text: &str, resolver: &Resolver<T>) -> Filtered {
        let mut filtered = Filtered::default();
        for (index, option) in options.iter().enumerate() {
            match self.matches(option, text, resolver) {
                Ok(true) => filtered.indices.push(index),
                Ok(false) => {}
                Err(err) => {
                    warn!(error = %err, "excluding option from candidates");
                    filtered.errors.push(err);
                }
            }
        }
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        ["one", "one1", "one2", "two", "Three"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_prefix_match() {
        assert!(prefix_match("Three", "th"));
        assert!(prefix_match("one", "ONE"));
        assert!(prefix_match("anything", ""));
        assert!(!prefix_match("two", "wo"));
    }

    #[test]
    fn test_default_filter_prefix() {
        let filtered = Filter::prefix().apply(&options(), "on", &Resolver::keyed());
        assert_eq!(filtered.indices, vec![0, 1, 2]);
        assert!(filtered.errors.is_empty());
    }

    #[test]
    fn test_default_filter_empty_text_matches_all() {
        let filtered = Filter::prefix().apply(&options(), "", &Resolver::keyed());
        assert_eq!(filtered.indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_custom_predicate_owns_case() {
        // Substring, case-sensitive: the widget does not lowercase for it.
        let filter = Filter::custom(|o: &String, t: &str| o.contains(t));
        let filtered = filter.apply(&options(), "T", &Resolver::keyed());
        assert_eq!(filtered.indices, vec![4]);
    }

    #[test]
    fn test_custom_predicate_empty_text_policy() {
        let filter = Filter::custom(|_: &String, t: &str| !t.is_empty());
        let filtered = filter.apply(&options(), "", &Resolver::keyed());
        assert!(filtered.indices.is_empty());
    }

    #[test]
    fn test_failing_predicate_excludes_option() {
        let filter = Filter::try_custom(|o: &String, _t: &str| {
            if o == "two" {
                Err("cannot compare")
            } else {
                Ok(true)
            }
        });
        let filtered = filter.apply(&options(), "x", &Resolver::keyed());
        assert_eq!(filtered.indices, vec![0, 1, 2, 4]);
        assert_eq!(
            filtered.errors,
            vec![AutocompleteError::Predicate {
                key: "two".into(),
                message: "cannot compare".into(),
            }]
        );
    }

    #[test]
    fn test_default_uses_resolver_key() {
        let resolver = Resolver::new(|o: &(u32, &'static str)| o.1.to_string());
        let opts = vec![(1, "apple"), (2, "banana"), (3, "apricot")];
        let filtered = Filter::prefix().apply(&opts, "AP", &resolver);
        assert_eq!(filtered.indices, vec![0, 2]);
    }
}
