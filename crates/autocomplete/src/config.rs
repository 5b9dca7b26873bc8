//! Serializable widget configuration.
//!
//! [`Config`] collects every plain setting of the widget in one place so a
//! host can keep it in a JSON file, and tests can build one directly.
//!
//! # Examples
//!
//! ```rust
//! use autocomplete::config::Config;
//!
//! let config = Config::from_json(r#"{ "multiple": true, "debounce_ms": 250 }"#).unwrap();
//! assert!(config.multiple);
//! assert_eq!(config.max_visible, 5);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AutocompleteError, Result};
use crate::selection::Mode;

/// Widget settings that do not involve callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Config naturally has boolean flags"
)]
pub struct Config {
    // ========================================================================
    // Selection
    // ========================================================================
    /// Allow more than one option to be selected.
    pub multiple: bool,

    /// Close the overlay after a single-mode commit.
    pub close_on_select: bool,

    // ========================================================================
    // Interaction
    // ========================================================================
    /// The field ignores input.
    pub disabled: bool,

    /// Options are being fetched; the field ignores input.
    pub loading: bool,

    /// Wrap navigation at both ends of the list.
    pub loop_navigation: bool,

    /// Quiet period before candidates are recomputed, in milliseconds.
    pub debounce_ms: u64,

    // ========================================================================
    // Display
    // ========================================================================
    /// Shown in an empty field.
    pub placeholder: String,

    /// Line above the field.
    pub label: Option<String>,

    /// Line below the field.
    pub description: Option<String>,

    /// Most candidates shown at once.
    pub max_visible: usize,

    /// Show a message when no option matches.
    pub show_no_results: bool,

    /// The message shown when no option matches.
    pub no_results_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            multiple: false,
            close_on_select: true,
            disabled: false,
            loading: false,
            loop_navigation: true,
            debounce_ms: 1000,
            placeholder: String::new(),
            label: None,
            description: None,
            max_visible: 5,
            show_no_results: true,
            no_results_text: "No results found.".to_string(),
        }
    }
}

impl Config {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AutocompleteError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AutocompleteError::config(e.to_string()))
    }

    /// Checks settings that cannot work together.
    pub fn validate(&self) -> Result<()> {
        if self.max_visible == 0 {
            return Err(AutocompleteError::config("max_visible must be at least 1"));
        }
        Ok(())
    }

    /// The debounce delay.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// The selection mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        Mode::from_multiple(self.multiple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = Config::default();
        assert!(!config.multiple);
        assert!(config.close_on_select);
        assert!(config.loop_navigation);
        assert_eq!(config.debounce(), Duration::from_millis(1000));
        assert_eq!(config.max_visible, 5);
        assert_eq!(config.no_results_text, "No results found.");
        assert_eq!(config.mode(), Mode::Single);
    }

    #[test]
    fn config_new_equals_default() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn config_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{"multiple": true, "label": "Fruit"}"#).unwrap();
        assert_eq!(config.mode(), Mode::Multiple);
        assert_eq!(config.label.as_deref(), Some("Fruit"));
        assert_eq!(config.debounce_ms, 1000);
    }

    #[test]
    fn config_validate_rejects_zero_visible() {
        let config = Config {
            max_visible: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AutocompleteError::Config(_))));
        assert!(Config::from_json(r#"{"max_visible": 0}"#).is_err());
    }

    #[test]
    fn config_malformed_json() {
        let err = Config::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn config_serialization() {
        let config = Config {
            placeholder: "Search".to_string(),
            debounce_ms: 300,
            ..Config::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
