//! Option identity: canonical keys and display labels.
//!
//! Options are never compared by reference or by `PartialEq`. Two options are
//! the same option exactly when their keys are equal, and the key is what
//! selection lookup, deduplication, and list keys all go through.
//!
//! The default key of a string is the string itself. Structured values are
//! keyed by their compact JSON serialization; `serde_json` objects keep their
//! fields in sorted order, so the serialization is canonical.
//!
//! # Example
//!
//! ```rust
//! use autocomplete::identity::Resolver;
//! use serde_json::json;
//!
//! let resolver = Resolver::<serde_json::Value>::keyed();
//! assert_eq!(resolver.key(&json!("one")), "one");
//! assert_eq!(resolver.key(&json!({"b": 2, "a": 1})), r#"{"a":1,"b":2}"#);
//! assert_eq!(resolver.key_opt(None), "");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::error::{AutocompleteError, Result};

/// Values that know their own canonical key.
pub trait Keyed {
    /// Returns the canonical key.
    fn option_key(&self) -> String;
}

impl Keyed for String {
    fn option_key(&self) -> String {
        self.clone()
    }
}

impl Keyed for &str {
    fn option_key(&self) -> String {
        (*self).to_string()
    }
}

impl Keyed for serde_json::Value {
    fn option_key(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl<T: Keyed> Keyed for Option<T> {
    fn option_key(&self) -> String {
        self.as_ref().map(Keyed::option_key).unwrap_or_default()
    }
}

/// Keys any serializable value by its canonical JSON form.
///
/// Serialization failures (e.g. maps with non-string keys) resolve to the
/// empty key with a warning.
pub fn canonical_key<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(json) => json.option_key(),
        Err(err) => {
            warn!(error = %err, "option is not serializable; using empty key");
            String::new()
        }
    }
}

type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type LabelFn<T> = Arc<dyn Fn(&T) -> std::result::Result<String, String> + Send + Sync>;

/// Derives keys and labels for options of type `T`.
pub struct Resolver<T> {
    key: KeyFn<T>,
    label: Option<LabelFn<T>>,
}

impl<T> Clone for Resolver<T> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            label: self.label.clone(),
        }
    }
}

impl<T> fmt::Debug for Resolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("custom_label", &self.label.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Keyed + 'static> Default for Resolver<T> {
    fn default() -> Self {
        Self::keyed()
    }
}

impl<T: Keyed + 'static> Resolver<T> {
    /// Uses [`Keyed::option_key`].
    #[must_use]
    pub fn keyed() -> Self {
        Self::new(Keyed::option_key)
    }
}

impl<T: Serialize + 'static> Resolver<T> {
    /// Uses [`canonical_key`].
    #[must_use]
    pub fn serialized() -> Self {
        Self::new(|option: &T| canonical_key(option))
    }
}

impl<T: 'static> Resolver<T> {
    /// Creates a resolver from a key function.
    ///
    /// The function must be deterministic for the lifetime of the dataset.
    pub fn new<F>(key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            key: Arc::new(key),
            label: None,
        }
    }

    /// Replaces the key function, keeping any custom label.
    #[must_use]
    pub fn with_key<F>(mut self, key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.key = Arc::new(key);
        self
    }

    /// Overrides the display label.
    #[must_use]
    pub fn with_label<F>(mut self, label: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.label = Some(Arc::new(move |option: &T| Ok(label(option))));
        self
    }

    /// Overrides the display label with a function that may fail.
    #[must_use]
    pub fn with_try_label<F, E>(mut self, label: F) -> Self
    where
        F: Fn(&T) -> std::result::Result<String, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        self.label = Some(Arc::new(move |option: &T| {
            label(option).map_err(|e| e.to_string())
        }));
        self
    }

    /// Returns the option's key.
    pub fn key(&self, option: &T) -> String {
        (self.key)(option)
    }

    /// Returns the key of a possibly absent option; absent is the empty key.
    pub fn key_opt(&self, option: Option<&T>) -> String {
        option.map(|o| self.key(o)).unwrap_or_default()
    }

    /// Returns true if both options have the same key.
    pub fn same(&self, a: &T, b: &T) -> bool {
        self.key(a) == self.key(b)
    }

    /// Returns the display label, or the error from a custom label function.
    pub fn try_label(&self, option: &T) -> Result<String> {
        match &self.label {
            Some(label) => label(option).map_err(|message| AutocompleteError::Label {
                key: self.key(option),
                message,
            }),
            None => Ok(self.key(option)),
        }
    }

    /// Returns the display label, falling back to the key on failure.
    pub fn label(&self, option: &T) -> String {
        self.try_label(option).unwrap_or_else(|err| {
            warn!(error = %err, "falling back to option key for label");
            self.key(option)
        })
    }

    /// Label of a possibly absent option; absent is the empty label.
    pub fn label_opt(&self, option: Option<&T>) -> String {
        option.map(|o| self.label(o)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct City {
        name: &'static str,
        zip: u32,
    }

    #[test]
    fn test_string_key_is_identity() {
        let r = Resolver::<String>::keyed();
        assert_eq!(r.key(&"Two".to_string()), "Two");
        assert_eq!(r.label(&"Two".to_string()), "Two");
    }

    #[test]
    fn test_json_key_is_order_independent() {
        let r = Resolver::<serde_json::Value>::keyed();
        let a = json!({"name": "Oslo", "zip": 150});
        let b = json!({"zip": 150, "name": "Oslo"});
        assert!(r.same(&a, &b));
        assert_eq!(r.key(&json!(null)), "");
        assert_eq!(r.key(&json!(42)), "42");
    }

    #[test]
    fn test_serialized_struct_key() {
        let r = Resolver::<City>::serialized();
        let key = r.key(&City { name: "Oslo", zip: 150 });
        assert_eq!(key, r#"{"name":"Oslo","zip":150}"#);
    }

    #[test]
    fn test_absent_option_is_empty() {
        let r = Resolver::<String>::keyed();
        assert_eq!(r.key_opt(None), "");
        assert_eq!(r.label_opt(None), "");
        assert_eq!(Option::<String>::None.option_key(), "");
    }

    #[test]
    fn test_custom_label_keeps_key() {
        let r = Resolver::<String>::keyed().with_label(|s| s.to_uppercase());
        let opt = "two".to_string();
        assert_eq!(r.label(&opt), "TWO");
        assert_eq!(r.key(&opt), "two");
    }

    #[test]
    fn test_failing_label_falls_back_to_key() {
        let r = Resolver::<String>::keyed().with_try_label(|s: &String| {
            if s.is_empty() {
                Err("empty")
            } else {
                Ok(format!("<{s}>"))
            }
        });
        assert_eq!(r.label(&"a".to_string()), "<a>");
        assert_eq!(r.label(&String::new()), "");
        assert!(matches!(
            r.try_label(&String::new()),
            Err(AutocompleteError::Label { .. })
        ));
    }

    #[test]
    fn test_custom_key_function() {
        let r = Resolver::new(|city: &City| city.name.to_lowercase());
        assert_eq!(r.key(&City { name: "Oslo", zip: 1 }), "oslo");
        assert!(r.same(&City { name: "Oslo", zip: 1 }, &City { name: "OSLO", zip: 2 }));
    }
}
