#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Autocomplete
//!
//! A headless autocomplete/combobox component in the Elm architecture: a
//! text field backed by a filtered, navigable option list, with single or
//! multiple selection.
//!
//! The crate is organised around the widget's state machine:
//! - **identity** - Canonical option keys and display labels
//! - **filter** - Candidate filtering (prefix match or custom predicate)
//! - **debounce** - Cancellable trailing timer for recomputes
//! - **selection** - Committed value and toggle/clear requests
//! - **navigation** - Highlighted candidate tracking
//! - **overlay** - Open state and the positioning collaborator
//! - **render** - Item renderers and styles
//! - **input** - The field's edit buffer
//! - **key** - Key messages and bindings
//! - **config** - Serializable settings
//! - **autocomplete** - The widget tying it all together
//!
//! ## Example
//!
//! ```rust
//! use autocomplete::prelude::*;
//!
//! let mut ac = Autocomplete::new(vec!["apple".to_string(), "banana".to_string()]);
//! ac.focus();
//! ac.update(Message::new(KeyMsg::from_type(KeyType::Down)));
//! assert_eq!(ac.active_option().map(String::as_str), Some("apple"));
//!
//! let requested = ac.update(Message::new(KeyMsg::from_type(KeyType::Enter)));
//! assert!(requested.is_none());
//! assert_eq!(ac.input(), "apple");
//! ```

pub mod autocomplete;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod identity;
pub mod input;
pub mod key;
pub mod message;
pub mod navigation;
pub mod overlay;
pub mod render;
pub mod selection;

pub use autocomplete::Autocomplete;
pub use error::{AutocompleteError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::autocomplete::{Autocomplete, ChipRemoveMsg, ClearMsg};
    pub use crate::config::Config;
    pub use crate::debounce::{Debounce, FilterTickMsg};
    pub use crate::error::AutocompleteError;
    pub use crate::filter::{Filter, Filtered, prefix_match};
    pub use crate::identity::{Keyed, Resolver, canonical_key};
    pub use crate::input::{EditKeyMap, InputBuffer};
    pub use crate::key::{Binding, KeyMap, KeyMsg, KeyType, matches};
    pub use crate::message::{BlurMsg, Cmd, FocusMsg, Message, Model};
    pub use crate::overlay::{AnchoredOverlay, HoverMsg, ItemCommitMsg, NoopOverlay};
    pub use crate::render::{DefaultRenderer, OptionRenderer, RenderContext, Styles};
    pub use crate::selection::{Change, Mode, Selection};
}
