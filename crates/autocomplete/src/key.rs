//! Key events and key bindings.
//!
//! [`KeyMsg`] renders to a canonical string (`"enter"`, `"ctrl+n"`,
//! `"alt+down"`, `"a"`), and a [`Binding`] is a set of such strings. The
//! widget's [`KeyMap`] decides which bindings drive the option list; every
//! other key goes to the text field.
//!
//! # Example
//!
//! ```rust
//! use autocomplete::key::{Binding, KeyMsg, KeyType, matches};
//!
//! let next = Binding::new().keys(&["down", "ctrl+n"]).help("↓", "next");
//! assert!(matches(KeyMsg::from_type(KeyType::Down), &[&next]));
//! assert!(!matches(KeyMsg::from_char('j'), &[&next]));
//! ```

use std::fmt;

/// A keystroke delivered to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The kind of key pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
    /// Whether the runes arrived as a bracketed paste.
    pub paste: bool,
}

impl KeyMsg {
    /// Creates a key message for a non-character key.
    #[must_use]
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
            paste: false,
        }
    }

    /// Creates a key message for a single typed character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self::from_runes(vec![c])
    }

    /// Creates a key message for several characters at once (IME, paste).
    #[must_use]
    pub fn from_runes(runes: Vec<char>) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes,
            alt: false,
            paste: false,
        }
    }

    /// Sets the Alt modifier.
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Marks the runes as pasted.
    #[must_use]
    pub fn with_paste(mut self) -> Self {
        self.paste = true;
        self
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            if self.paste {
                write!(f, "[")?;
            }
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            if self.paste {
                write!(f, "]")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// The keys the widget distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character input.
    Runes,
    Enter,
    Esc,
    Tab,
    ShiftTab,
    Backspace,
    Delete,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PgUp,
    PgDown,
    CtrlA,
    CtrlB,
    CtrlC,
    CtrlD,
    CtrlE,
    CtrlF,
    CtrlG,
    CtrlH,
    CtrlJ,
    CtrlK,
    CtrlL,
    CtrlN,
    CtrlO,
    CtrlP,
    CtrlQ,
    CtrlR,
    CtrlS,
    CtrlT,
    CtrlU,
    CtrlV,
    CtrlW,
    CtrlX,
    CtrlY,
    CtrlZ,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runes => "runes",
            Self::Enter => "enter",
            Self::Esc => "esc",
            Self::Tab => "tab",
            Self::ShiftTab => "shift+tab",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::Space => " ",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::PgUp => "pgup",
            Self::PgDown => "pgdown",
            Self::CtrlA => "ctrl+a",
            Self::CtrlB => "ctrl+b",
            Self::CtrlC => "ctrl+c",
            Self::CtrlD => "ctrl+d",
            Self::CtrlE => "ctrl+e",
            Self::CtrlF => "ctrl+f",
            Self::CtrlG => "ctrl+g",
            Self::CtrlH => "ctrl+h",
            Self::CtrlJ => "ctrl+j",
            Self::CtrlK => "ctrl+k",
            Self::CtrlL => "ctrl+l",
            Self::CtrlN => "ctrl+n",
            Self::CtrlO => "ctrl+o",
            Self::CtrlP => "ctrl+p",
            Self::CtrlQ => "ctrl+q",
            Self::CtrlR => "ctrl+r",
            Self::CtrlS => "ctrl+s",
            Self::CtrlT => "ctrl+t",
            Self::CtrlU => "ctrl+u",
            Self::CtrlV => "ctrl+v",
            Self::CtrlW => "ctrl+w",
            Self::CtrlX => "ctrl+x",
            Self::CtrlY => "ctrl+y",
            Self::CtrlZ => "ctrl+z",
        };
        write!(f, "{name}")
    }
}

fn ctrl_key(c: char) -> Option<KeyType> {
    let kt = match c.to_ascii_lowercase() {
        'a' => KeyType::CtrlA,
        'b' => KeyType::CtrlB,
        'c' => KeyType::CtrlC,
        'd' => KeyType::CtrlD,
        'e' => KeyType::CtrlE,
        'f' => KeyType::CtrlF,
        'g' => KeyType::CtrlG,
        'h' => KeyType::CtrlH,
        'i' => KeyType::Tab,
        'j' => KeyType::CtrlJ,
        'k' => KeyType::CtrlK,
        'l' => KeyType::CtrlL,
        'm' => KeyType::Enter,
        'n' => KeyType::CtrlN,
        'o' => KeyType::CtrlO,
        'p' => KeyType::CtrlP,
        'q' => KeyType::CtrlQ,
        'r' => KeyType::CtrlR,
        's' => KeyType::CtrlS,
        't' => KeyType::CtrlT,
        'u' => KeyType::CtrlU,
        'v' => KeyType::CtrlV,
        'w' => KeyType::CtrlW,
        'x' => KeyType::CtrlX,
        'y' => KeyType::CtrlY,
        'z' => KeyType::CtrlZ,
        _ => return None,
    };
    Some(kt)
}

/// Converts a crossterm key event into a [`KeyMsg`].
///
/// Keys the widget has no use for (function keys, insert, media keys)
/// become an empty rune message, which the text field ignores.
impl From<crossterm::event::KeyEvent> for KeyMsg {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let alt = event.modifiers.contains(KeyModifiers::ALT);

        let key_type = match event.code {
            KeyCode::Char(c) if ctrl => match ctrl_key(c) {
                Some(kt) => kt,
                None => {
                    return Self {
                        key_type: KeyType::Runes,
                        runes: vec![c],
                        alt,
                        paste: false,
                    };
                }
            },
            KeyCode::Char(' ') => KeyType::Space,
            KeyCode::Char(c) => {
                return Self {
                    key_type: KeyType::Runes,
                    runes: vec![c],
                    alt,
                    paste: false,
                };
            }
            KeyCode::Enter => KeyType::Enter,
            KeyCode::Esc => KeyType::Esc,
            KeyCode::Tab if shift => KeyType::ShiftTab,
            KeyCode::Tab => KeyType::Tab,
            KeyCode::BackTab => KeyType::ShiftTab,
            KeyCode::Backspace => KeyType::Backspace,
            KeyCode::Delete => KeyType::Delete,
            KeyCode::Up => KeyType::Up,
            KeyCode::Down => KeyType::Down,
            KeyCode::Left => KeyType::Left,
            KeyCode::Right => KeyType::Right,
            KeyCode::Home => KeyType::Home,
            KeyCode::End => KeyType::End,
            KeyCode::PageUp => KeyType::PgUp,
            KeyCode::PageDown => KeyType::PgDown,
            _ => {
                return Self {
                    key_type: KeyType::Runes,
                    runes: Vec::new(),
                    alt,
                    paste: false,
                };
            }
        };

        Self {
            key_type,
            runes: Vec::new(),
            alt,
            paste: false,
        }
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Keys as shown to the user (e.g. "↑/ctrl+p").
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key strings that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding.
    #[must_use]
    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.disabled = !enabled;
        self
    }

    /// Returns the keys.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help text.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }
}

/// Returns true if `key` matches any enabled binding.
pub fn matches<K: fmt::Display>(key: K, bindings: &[&Binding]) -> bool {
    let key_str = key.to_string();
    bindings
        .iter()
        .filter(|b| b.enabled())
        .any(|b| b.keys.iter().any(|k| *k == key_str))
}

/// Bindings that drive the option list.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Highlight the next candidate.
    pub next: Binding,
    /// Highlight the previous candidate.
    pub prev: Binding,
    /// Toggle the highlighted candidate.
    pub commit: Binding,
    /// Close the overlay.
    pub dismiss: Binding,
    /// Clear the selection.
    pub clear: Binding,
    /// Open the overlay without typing.
    pub open: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            next: Binding::new().keys(&["down", "ctrl+n"]).help("↓", "next"),
            prev: Binding::new().keys(&["up", "ctrl+p"]).help("↑", "previous"),
            commit: Binding::new().keys(&["enter"]).help("enter", "select"),
            dismiss: Binding::new().keys(&["esc"]).help("esc", "close"),
            clear: Binding::new().keys(&["ctrl+x"]).help("ctrl+x", "clear"),
            open: Binding::new().keys(&["alt+down"]).help("alt+↓", "open"),
        }
    }
}

impl KeyMap {
    /// Bindings worth listing in a help line.
    #[must_use]
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next, &self.prev, &self.commit, &self.dismiss]
    }
}
