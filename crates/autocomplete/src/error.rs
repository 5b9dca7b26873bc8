//! Error types.
//!
//! None of these errors abort the widget. Callback failures are reported per
//! option and the widget carries on with a safe fallback; they are typed so
//! that hosts and tests can observe exactly what went wrong.

use thiserror::Error;

/// Errors surfaced by the autocomplete widget.
///
/// Stores messages as `String` so the type stays `Clone` and `PartialEq`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteError {
    /// A custom filter predicate failed for one option.
    ///
    /// The option is left out of the candidate list.
    #[error("filter predicate failed for option {key:?}: {message}")]
    Predicate {
        /// Key of the option being tested.
        key: String,
        /// The predicate's error message.
        message: String,
    },

    /// A custom label function failed for one option.
    ///
    /// The option's key is displayed instead.
    #[error("label function failed for option {key:?}: {message}")]
    Label {
        /// Key of the option being labelled.
        key: String,
        /// The label function's error message.
        message: String,
    },

    /// The supplied value's shape does not match the selection mode.
    #[error("selection mode mismatch: widget is {expected}, value is {found}")]
    ModeMismatch {
        /// The widget's mode.
        expected: &'static str,
        /// The shape of the value that was supplied.
        found: &'static str,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AutocompleteError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true for errors raised by caller-supplied callbacks.
    pub fn is_callback_failure(&self) -> bool {
        matches!(self, Self::Predicate { .. } | Self::Label { .. })
    }
}

/// A specialized [`Result`] type for autocomplete operations.
pub type Result<T> = std::result::Result<T, AutocompleteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AutocompleteError::Predicate {
            key: "two".into(),
            message: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "filter predicate failed for option \"two\": boom"
        );

        let err = AutocompleteError::ModeMismatch {
            expected: "multiple",
            found: "single",
        };
        assert_eq!(
            err.to_string(),
            "selection mode mismatch: widget is multiple, value is single"
        );

        assert_eq!(
            AutocompleteError::config("max_visible must be at least 1").to_string(),
            "invalid configuration: max_visible must be at least 1"
        );
    }

    #[test]
    fn test_callback_failure_classification() {
        let label = AutocompleteError::Label {
            key: "k".into(),
            message: "m".into(),
        };
        assert!(label.is_callback_failure());
        assert!(!AutocompleteError::config("x").is_callback_failure());
    }
}
