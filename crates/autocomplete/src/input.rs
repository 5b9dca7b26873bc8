//! The text field's edit buffer.
//!
//! A single-line buffer of chars with a cursor. [`InputBuffer::handle_key`]
//! reports whether the *text* changed, since only text changes feed the
//! filter; pure cursor motion does not.

use crate::key::{Binding, KeyMsg, KeyType, matches};

/// Key bindings for editing inside the field.
#[derive(Debug, Clone)]
pub struct EditKeyMap {
    /// Cursor one char right.
    pub character_forward: Binding,
    /// Cursor one char left.
    pub character_backward: Binding,
    /// Cursor to start of line.
    pub line_start: Binding,
    /// Cursor to end of line.
    pub line_end: Binding,
    /// Delete the char before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the char under the cursor.
    pub delete_character_forward: Binding,
    /// Delete from line start to the cursor.
    pub delete_before_cursor: Binding,
    /// Delete from the cursor to line end.
    pub delete_after_cursor: Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: Binding,
}

impl Default for EditKeyMap {
    fn default() -> Self {
        Self {
            character_forward: Binding::new().keys(&["right", "ctrl+f"]),
            character_backward: Binding::new().keys(&["left", "ctrl+b"]),
            line_start: Binding::new().keys(&["home", "ctrl+a"]),
            line_end: Binding::new().keys(&["end", "ctrl+e"]),
            delete_character_backward: Binding::new().keys(&["backspace", "ctrl+h"]),
            delete_character_forward: Binding::new().keys(&["delete", "ctrl+d"]),
            delete_before_cursor: Binding::new().keys(&["ctrl+u"]),
            delete_after_cursor: Binding::new().keys(&["ctrl+k"]),
            delete_word_backward: Binding::new().keys(&["alt+backspace", "ctrl+w"]),
        }
    }
}

/// Replaces tabs and line breaks with spaces and drops other control chars.
fn sanitize(runes: &[char]) -> Vec<char> {
    runes
        .iter()
        .filter_map(|&c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Single-line text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: Vec<char>,
    pos: usize,
    char_limit: usize,
}

impl InputBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Returns true if there is no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in chars.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Maximum number of chars, 0 for unlimited.
    #[must_use]
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Sets the maximum number of chars, 0 for unlimited.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
        if limit > 0 && self.value.len() > limit {
            self.value.truncate(limit);
            self.pos = self.pos.min(limit);
        }
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        let mut runes = sanitize(&s.chars().collect::<Vec<_>>());
        if self.char_limit > 0 {
            runes.truncate(self.char_limit);
        }
        self.value = runes;
        self.pos = self.value.len();
    }

    /// Applies an editing key. Returns true if the text changed.
    pub fn handle_key(&mut self, key: &KeyMsg, keymap: &EditKeyMap) -> bool {
        let before = self.value.len();
        let snapshot = self.value.clone();
        let key_str = key.to_string();

        if matches(&key_str, &[&keymap.delete_word_backward]) {
            self.delete_word_backward();
        } else if matches(&key_str, &[&keymap.delete_character_backward]) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches(&key_str, &[&keymap.delete_character_forward]) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches(&key_str, &[&keymap.character_backward]) {
            self.pos = self.pos.saturating_sub(1);
        } else if matches(&key_str, &[&keymap.character_forward]) {
            self.pos = (self.pos + 1).min(self.value.len());
        } else if matches(&key_str, &[&keymap.line_start]) {
            self.pos = 0;
        } else if matches(&key_str, &[&keymap.line_end]) {
            self.pos = self.value.len();
        } else if matches(&key_str, &[&keymap.delete_before_cursor]) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if matches(&key_str, &[&keymap.delete_after_cursor]) {
            self.value.truncate(self.pos);
        } else if key.key_type == KeyType::Space {
            self.insert(&[' ']);
        } else if key.key_type == KeyType::Runes && !key.alt {
            self.insert(&key.runes);
        }

        self.value.len() != before || self.value != snapshot
    }

    fn insert(&mut self, runes: &[char]) {
        let mut runes = sanitize(runes);
        if self.char_limit > 0 {
            let available = self.char_limit.saturating_sub(self.value.len());
            runes.truncate(available);
        }
        let count = runes.len();
        self.value.splice(self.pos..self.pos, runes);
        self.pos += count;
    }

    fn delete_word_backward(&mut self) {
        let end = self.pos;
        let mut start = end;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..end);
        self.pos = start;
    }
}
