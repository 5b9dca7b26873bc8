//! Selection state: the committed value and the changes requested against it.
//!
//! The widget never owns the authoritative selection. [`toggle`] and [`clear`]
//! compute the value the widget *asks for*; the host decides whether to apply
//! it and hands the result back through `set_value`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AutocompleteError, Result};
use crate::identity::Resolver;

/// Single or multiple selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// At most one option.
    #[default]
    Single,
    /// An ordered set of options.
    Multiple,
}

impl Mode {
    /// Mode for a `multiple` flag.
    #[must_use]
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple { Self::Multiple } else { Self::Single }
    }

    /// Returns true for [`Mode::Multiple`].
    #[must_use]
    pub fn is_multiple(self) -> bool {
        self == Self::Multiple
    }

    fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

/// A committed value whose shape follows the selection mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// Single mode: nothing or one option.
    Single(Option<T>),
    /// Multiple mode: options in the order they were selected.
    Multiple(Vec<T>),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl<T> Selection<T> {
    /// The empty selection for a mode.
    #[must_use]
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Single => Self::Single(None),
            Mode::Multiple => Self::Multiple(Vec::new()),
        }
    }

    /// The mode this value's shape belongs to.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Multiple(_) => Mode::Multiple,
        }
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of selected options.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(value) => usize::from(value.is_some()),
            Self::Multiple(values) => values.len(),
        }
    }

    /// Selected options in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::Single(value) => value.as_slice().iter(),
            Self::Multiple(values) => values.iter(),
        }
    }

    /// The single selected option, in single mode.
    #[must_use]
    pub fn as_single(&self) -> Option<&T> {
        match self {
            Self::Single(value) => value.as_ref(),
            Self::Multiple(_) => None,
        }
    }

    /// The selected options, in multiple mode.
    #[must_use]
    pub fn as_multiple(&self) -> Option<&[T]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(values) => Some(values),
        }
    }

    /// Fails with [`AutocompleteError::ModeMismatch`] if the shape is wrong for `mode`.
    pub fn check_mode(&self, mode: Mode) -> Result<()> {
        if self.mode() == mode {
            Ok(())
        } else {
            Err(AutocompleteError::ModeMismatch {
                expected: mode.name(),
                found: self.mode().name(),
            })
        }
    }
}

impl<T: 'static> Selection<T> {
    /// Key-membership test, mode-aware. An empty single selection contains nothing.
    pub fn contains(&self, option: &T, resolver: &Resolver<T>) -> bool {
        let key = resolver.key(option);
        self.iter().any(|selected| resolver.key(selected) == key)
    }

    /// Reshapes a caller value to `mode` and drops duplicate keys.
    ///
    /// A single value in multiple mode becomes a one-element sequence; a
    /// sequence in single mode keeps its first element.
    pub fn normalize(self, mode: Mode, resolver: &Resolver<T>) -> Self {
        if let Err(err) = self.check_mode(mode) {
            warn!(error = %err, "normalizing selection to widget mode");
        }
        match (self, mode) {
            (Self::Single(value), Mode::Single) => Self::Single(value),
            (Self::Single(value), Mode::Multiple) => Self::Multiple(value.into_iter().collect()),
            (Self::Multiple(values), Mode::Single) => Self::Single(values.into_iter().next()),
            (Self::Multiple(values), Mode::Multiple) => {
                let before = values.len();
                let mut seen = HashSet::new();
                let deduped: Vec<T> = values
                    .into_iter()
                    .filter(|v| seen.insert(resolver.key(v)))
                    .collect();
                if deduped.len() != before {
                    warn!(
                        dropped = before - deduped.len(),
                        "dropping options with duplicate keys from selection"
                    );
                }
                Self::Multiple(deduped)
            }
        }
    }
}

/// A requested change: the new value plus the text the field should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<T> {
    /// The value the widget asks the host to commit.
    pub value: Selection<T>,
    /// The input text after the change.
    pub input: String,
}

/// Computes the change for toggling `option` against `current`.
///
/// - Single mode: the selected option is cleared (text emptied); any other
///   option replaces it and the text shows its label.
/// - Multiple mode: a selected option is removed, keeping the order of the
///   rest; an unselected one is appended. The text is emptied either way.
pub fn toggle<T: Clone + 'static>(
    current: &Selection<T>,
    option: &T,
    resolver: &Resolver<T>,
) -> Change<T> {
    let key = resolver.key(option);
    match current {
        Selection::Single(selected) => {
            let already = selected
                .as_ref()
                .is_some_and(|s| resolver.key(s) == key);
            if already {
                Change {
                    value: Selection::Single(None),
                    input: String::new(),
                }
            } else {
                Change {
                    value: Selection::Single(Some(option.clone())),
                    input: resolver.label(option),
                }
            }
        }
        Selection::Multiple(selected) => {
            let mut next: Vec<T> = selected
                .iter()
                .filter(|s| resolver.key(s) != key)
                .cloned()
                .collect();
            if next.len() == selected.len() {
                next.push(option.clone());
            }
            Change {
                value: Selection::Multiple(next),
                input: String::new(),
            }
        }
    }
}

/// Computes the change for clearing the selection.
pub fn clear<T>(mode: Mode) -> Change<T> {
    Change {
        value: Selection::empty(mode),
        input: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    fn resolver() -> Resolver<String> {
        Resolver::keyed()
    }

    #[test]
    fn test_single_toggle_selects_and_sets_label() {
        let r = resolver().with_label(|o| format!("#{o}"));
        let change = toggle(&Selection::Single(None), &s("two"), &r);
        assert_eq!(change.value, Selection::Single(Some(s("two"))));
        assert_eq!(change.input, "#two");
    }

    #[test]
    fn test_single_toggle_same_clears() {
        let change = toggle(&Selection::Single(Some(s("two"))), &s("two"), &resolver());
        assert_eq!(change.value, Selection::Single(None));
        assert_eq!(change.input, "");
    }

    #[test]
    fn test_single_toggle_other_replaces() {
        let change = toggle(&Selection::Single(Some(s("one"))), &s("two"), &resolver());
        assert_eq!(change.value, Selection::Single(Some(s("two"))));
    }

    #[test]
    fn test_single_empty_contains_nothing() {
        // An empty-keyed option is not "selected" by an empty selection.
        assert!(!Selection::Single(None).contains(&s(""), &resolver()));
    }

    #[test]
    fn test_single_toggle_empty_key_from_none_selects() {
        let r = resolver();
        let change = toggle(&Selection::Single(None), &s(""), &r);
        assert_eq!(change.value, Selection::Single(Some(s(""))));
        assert_eq!(change.input, "");

        let back = toggle(&change.value, &s(""), &r);
        assert_eq!(back.value, Selection::Single(None));
    }

    #[test]
    fn test_multiple_toggle_appends_and_removes() {
        let r = resolver();
        let one = toggle(&Selection::Multiple(vec![]), &s("one"), &r);
        let two = toggle(&one.value, &s("two"), &r);
        assert_eq!(two.value, Selection::Multiple(vec![s("one"), s("two")]));
        assert_eq!(two.input, "");

        let removed = toggle(&two.value, &s("one"), &r);
        assert_eq!(removed.value, Selection::Multiple(vec![s("two")]));
    }

    #[test]
    fn test_multiple_remove_preserves_order() {
        let current = Selection::Multiple(vec![s("a"), s("b"), s("c"), s("d")]);
        let change = toggle(&current, &s("b"), &resolver());
        assert_eq!(change.value, Selection::Multiple(vec![s("a"), s("c"), s("d")]));
    }

    #[test]
    fn test_clear_per_mode() {
        assert_eq!(clear::<String>(Mode::Single).value, Selection::Single(None));
        assert_eq!(clear::<String>(Mode::Multiple).value, Selection::Multiple(vec![]));
    }

    #[test]
    fn test_contains_uses_keys() {
        let r = Resolver::new(|o: &String| o.to_lowercase());
        let current = Selection::Multiple(vec![s("One")]);
        assert!(current.contains(&s("ONE"), &r));
        assert!(!current.contains(&s("two"), &r));
    }

    #[test]
    fn test_check_mode() {
        assert!(Selection::<String>::Single(None).check_mode(Mode::Single).is_ok());
        assert_eq!(
            Selection::<String>::Multiple(vec![]).check_mode(Mode::Single),
            Err(AutocompleteError::ModeMismatch {
                expected: "single",
                found: "multiple",
            })
        );
    }

    #[test]
    fn test_normalize_mismatches() {
        let r = resolver();
        assert_eq!(
            Selection::Single(Some(s("a"))).normalize(Mode::Multiple, &r),
            Selection::Multiple(vec![s("a")])
        );
        assert_eq!(
            Selection::Single(None).normalize(Mode::Multiple, &r),
            Selection::Multiple(vec![])
        );
        assert_eq!(
            Selection::Multiple(vec![s("a"), s("b")]).normalize(Mode::Single, &r),
            Selection::Single(Some(s("a")))
        );
    }

    #[test]
    fn test_normalize_drops_duplicate_keys() {
        let value = Selection::Multiple(vec![s("a"), s("b"), s("a")]);
        assert_eq!(
            value.normalize(Mode::Multiple, &resolver()),
            Selection::Multiple(vec![s("a"), s("b")])
        );
    }

    #[test]
    fn test_len_and_iter() {
        let value = Selection::Multiple(vec![s("x"), s("y")]);
        assert_eq!(value.len(), 2);
        assert_eq!(value.iter().cloned().collect::<Vec<_>>(), vec![s("x"), s("y")]);
        assert!(Selection::<String>::Single(None).is_empty());
        assert_eq!(Selection::Single(Some(s("x"))).len(), 1);
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&Mode::Multiple).unwrap();
        assert_eq!(json, "\"multiple\"");
        assert!(Mode::from_multiple(true).is_multiple());
    }
}
