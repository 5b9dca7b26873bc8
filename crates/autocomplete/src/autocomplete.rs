//! The autocomplete widget.
//!
//! [`Autocomplete`] is a text field backed by a filtered, navigable option
//! list. It is a controlled component: the committed selection belongs to the
//! host. Toggling or clearing only *requests* a change through `on_change`;
//! the displayed selection advances when the host passes the new value back
//! with [`Autocomplete::set_value`].
//!
//! # Example
//!
//! ```rust
//! use autocomplete::prelude::*;
//! use std::time::Duration;
//!
//! let options: Vec<String> = ["one", "one1", "one2", "two"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut ac = Autocomplete::new(options).debounce(Duration::ZERO);
//! ac.focus();
//!
//! // Typing schedules a debounced recompute; run it and feed the tick back.
//! let tick = ac.set_input("on").and_then(Cmd::execute).unwrap();
//! ac.update(tick);
//!
//! assert_eq!(ac.candidates(), vec!["one", "one1", "one2"]);
//! assert_eq!(ac.active_index(), Some(0));
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::debounce::{Debounce, FilterTickMsg};
use crate::error::AutocompleteError;
use crate::filter::Filter;
use crate::identity::{Keyed, Resolver};
use crate::input::{EditKeyMap, InputBuffer};
use crate::key::{KeyMap, KeyMsg, matches};
use crate::message::{BlurMsg, Cmd, FocusMsg, Message, Model};
use crate::navigation::Navigation;
use crate::overlay::{AnchoredOverlay, HoverMsg, ItemCommitMsg, Overlay};
use crate::render::{DefaultRenderer, OptionRenderer, RenderContext, Styles, paint};
use crate::selection::{self, Change, Mode, Selection};

/// The remove cross on the selected chip at `index` was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipRemoveMsg {
    /// Position in the multiple-mode selection.
    pub index: usize,
}

/// The clear button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearMsg;

type ChangeFn<T> = Arc<dyn Fn(&Selection<T>) + Send + Sync>;
type InputChangeFn = Arc<dyn Fn(&str) + Send + Sync>;

/// A text field with a filtered, navigable option list.
pub struct Autocomplete<T> {
    options: Vec<T>,
    resolver: Resolver<T>,
    filter: Filter<T>,
    value: Selection<T>,
    mode: Mode,

    input: InputBuffer,
    edit_keys: EditKeyMap,
    key_map: KeyMap,

    candidates: Vec<usize>,
    filter_errors: Vec<AutocompleteError>,
    generation: u64,
    navigation: Navigation,
    overlay: Overlay,
    debounce: Debounce,
    // A pending recompute was cancelled by `suspend`.
    stale: bool,

    disabled: bool,
    loading: bool,
    focused: bool,
    close_on_select: bool,

    placeholder: String,
    label: Option<String>,
    description: Option<String>,
    renderer: Option<Arc<dyn OptionRenderer<T>>>,
    styles: Styles,
    max_visible: usize,
    show_no_results: bool,
    no_results_text: String,
    width: usize,
    offset: usize,

    on_change: Option<ChangeFn<T>>,
    on_input_change: Option<InputChangeFn>,
}

impl<T> fmt::Debug for Autocomplete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("options", &self.options.len())
            .field("mode", &self.mode)
            .field("input", &self.input.value())
            .field("candidates", &self.candidates)
            .field("generation", &self.generation)
            .field("active", &self.navigation.active())
            .field("open", &self.overlay.is_open())
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl<T: Keyed + Clone + Send + Sync + 'static> Autocomplete<T> {
    /// Creates a widget over `options`, keyed by [`Keyed::option_key`].
    #[must_use]
    pub fn new(options: Vec<T>) -> Self {
        Self::with_resolver(options, Resolver::keyed())
    }

    /// Creates a widget from a [`Config`].
    #[must_use]
    pub fn from_config(options: Vec<T>, config: &Config) -> Self {
        Self::new(options).config(config)
    }
}

impl<T: Clone + Send + Sync + 'static> Autocomplete<T> {
    /// Creates a widget over `options` with an explicit identity resolver.
    #[must_use]
    pub fn with_resolver(options: Vec<T>, resolver: Resolver<T>) -> Self {
        let defaults = Config::default();
        let mut ac = Self {
            options,
            resolver,
            filter: Filter::prefix(),
            value: Selection::empty(Mode::Single),
            mode: Mode::Single,
            input: InputBuffer::new(),
            edit_keys: EditKeyMap::default(),
            key_map: KeyMap::default(),
            candidates: Vec::new(),
            filter_errors: Vec::new(),
            generation: 0,
            navigation: Navigation::new(defaults.loop_navigation),
            overlay: Overlay::default(),
            debounce: Debounce::new(defaults.debounce()),
            stale: false,
            disabled: false,
            loading: false,
            focused: false,
            close_on_select: defaults.close_on_select,
            placeholder: defaults.placeholder,
            label: None,
            description: None,
            renderer: None,
            styles: Styles::default(),
            max_visible: defaults.max_visible,
            show_no_results: defaults.show_no_results,
            no_results_text: defaults.no_results_text,
            width: 0,
            offset: 0,
            on_change: None,
            on_input_change: None,
        };
        ac.refresh();
        ac
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Applies every setting in `config`.
    #[must_use]
    pub fn config(self, config: &Config) -> Self {
        let ac = self
            .multiple(config.multiple)
            .disabled(config.disabled)
            .loading(config.loading)
            .placeholder(config.placeholder.clone())
            .debounce(config.debounce())
            .max_visible(config.max_visible)
            .close_on_select(config.close_on_select)
            .loop_navigation(config.loop_navigation)
            .show_no_results(config.show_no_results)
            .no_results_text(config.no_results_text.clone());
        let ac = match &config.label {
            Some(label) => ac.label(label.clone()),
            None => ac,
        };
        match &config.description {
            Some(description) => ac.description(description.clone()),
            None => ac,
        }
    }

    /// Switches between single and multiple selection.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.mode = Mode::from_multiple(multiple);
        let value = std::mem::take(&mut self.value);
        self.value = if value.is_empty() {
            Selection::empty(self.mode)
        } else {
            value.normalize(self.mode, &self.resolver)
        };
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Sets the loading flag.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    /// Sets the text shown in an empty field.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the line shown above the field.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the line shown below the field.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the default prefix filter with a custom predicate.
    ///
    /// The predicate sees the raw option and the raw input text; it owns case
    /// folding and the meaning of an empty text.
    #[must_use]
    pub fn filter_options<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
    {
        self.filter = Filter::custom(predicate);
        self.refresh();
        self
    }

    /// Like [`filter_options`](Self::filter_options), for a predicate that
    /// may fail. A failing option is excluded and a warning is logged.
    #[must_use]
    pub fn try_filter_options<F, E>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &str) -> Result<bool, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        self.filter = Filter::try_custom(predicate);
        self.refresh();
        self
    }

    /// Overrides the display label.
    #[must_use]
    pub fn option_label<F>(mut self, label: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.resolver = self.resolver.with_label(label);
        self
    }

    /// Overrides the display label with a function that may fail. A failing
    /// label falls back to the option key.
    #[must_use]
    pub fn try_option_label<F, E>(mut self, label: F) -> Self
    where
        F: Fn(&T) -> Result<String, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        self.resolver = self.resolver.with_try_label(label);
        self
    }

    /// Overrides the key used for equality and the default filter.
    #[must_use]
    pub fn option_key<F>(mut self, key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.resolver = self.resolver.with_key(key);
        self.refresh();
        self
    }

    /// Replaces the default item renderer.
    #[must_use]
    pub fn render_option<R>(mut self, renderer: R) -> Self
    where
        R: OptionRenderer<T> + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Called with every requested selection.
    #[must_use]
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&Selection<T>) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Called with the field text after every keystroke or `set_input`.
    ///
    /// A commit that rewrites the field does not call it.
    #[must_use]
    pub fn on_input_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_input_change = Some(Arc::new(f));
        self
    }

    /// Installs the positioning collaborator.
    #[must_use]
    pub fn overlay<O: AnchoredOverlay + 'static>(mut self, host: O) -> Self {
        self.overlay.set_host(Box::new(host));
        self
    }

    /// Sets the quiet period before candidates are recomputed.
    #[must_use]
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce.set_delay(delay);
        self
    }

    /// Sets how many candidates are shown at once (at least 1).
    #[must_use]
    pub fn max_visible(mut self, n: usize) -> Self {
        self.max_visible = n.max(1);
        self.sync_scroll();
        self
    }

    /// Sets the list key bindings.
    #[must_use]
    pub fn key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Sets the field editing key bindings.
    #[must_use]
    pub fn edit_key_map(mut self, edit_keys: EditKeyMap) -> Self {
        self.edit_keys = edit_keys;
        self
    }

    /// Sets the styles.
    #[must_use]
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the line width handed to renderers; 0 renders at natural width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether a single-mode commit closes the overlay.
    #[must_use]
    pub fn close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    /// Sets whether navigation wraps at the ends of the list.
    #[must_use]
    pub fn loop_navigation(mut self, looping: bool) -> Self {
        self.navigation.set_looping(looping);
        self
    }

    /// Sets whether an empty list shows a message.
    #[must_use]
    pub fn show_no_results(mut self, show: bool) -> Self {
        self.show_no_results = show;
        self
    }

    /// Sets the empty-list message.
    #[must_use]
    pub fn no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }

    // ========================================================================
    // Props
    // ========================================================================

    /// Installs the host's authoritative value.
    ///
    /// A value of the wrong shape for the mode is normalized and a warning is
    /// logged; duplicate keys are dropped.
    pub fn set_value(&mut self, value: Selection<T>) {
        self.value = value.normalize(self.mode, &self.resolver);
    }

    /// The committed value, as last supplied by the host.
    #[must_use]
    pub fn value(&self) -> &Selection<T> {
        &self.value
    }

    /// The selection mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Raises or lowers the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.suspend();
        } else {
            self.resume();
        }
    }

    /// Raises or lowers the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.suspend();
        } else {
            self.resume();
        }
    }

    /// Returns true if the field is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns true while options are loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns true unless disabled or loading.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Replaces the option set and recomputes candidates immediately.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        self.refresh();
    }

    /// The full option set.
    #[must_use]
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// The id carried by this widget's debounce ticks.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.debounce.id()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Requests toggling `option` and returns the requested value.
    ///
    /// The change goes to `on_change`; [`value`](Self::value) is unchanged.
    pub fn toggle(&mut self, option: &T) -> Selection<T> {
        debug!(key = %self.resolver.key(option), mode = ?self.mode, "toggle requested");
        let change = selection::toggle(&self.value, option, &self.resolver);
        self.request(change)
    }

    /// Requests clearing the selection and returns the requested value.
    pub fn clear(&mut self) -> Selection<T> {
        debug!(mode = ?self.mode, "clear requested");
        self.request(selection::clear(self.mode))
    }

    /// Returns true if an option with the same key is selected.
    pub fn is_selected(&self, option: &T) -> bool {
        self.value.contains(option, &self.resolver)
    }

    /// Returns true if the clear affordance should be offered.
    #[must_use]
    pub fn clear_visible(&self) -> bool {
        self.is_interactive() && !self.value.is_empty()
    }

    /// Toggles the highlighted candidate, if the highlight is valid for the
    /// list currently shown.
    pub fn commit_active(&mut self) -> Option<Selection<T>> {
        if !self.is_interactive() {
            return None;
        }
        let index = self.navigation.commit_index(self.candidates.len())?;
        let option = self.options.get(self.candidates[index])?.clone();
        let value = self.toggle(&option);
        if !self.mode.is_multiple() && self.close_on_select {
            self.close();
        }
        Some(value)
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Replaces the field text as if it had been typed.
    ///
    /// Returns the debounce command to run, if a recompute was scheduled.
    pub fn set_input(&mut self, text: &str) -> Option<Cmd> {
        if self.input.value() == text {
            return None;
        }
        self.input.set_value(text);
        self.text_changed()
    }

    /// The field text.
    #[must_use]
    pub fn input(&self) -> String {
        self.input.value()
    }

    // ========================================================================
    // Candidates and navigation
    // ========================================================================

    /// The candidates currently shown, in option order.
    #[must_use]
    pub fn candidates(&self) -> Vec<&T> {
        self.candidates
            .iter()
            .filter_map(|&i| self.options.get(i))
            .collect()
    }

    /// Indices of the current candidates into [`options`](Self::options).
    #[must_use]
    pub fn candidate_indices(&self) -> &[usize] {
        &self.candidates
    }

    /// Errors from custom callbacks during the last recompute.
    #[must_use]
    pub fn filter_errors(&self) -> &[AutocompleteError] {
        &self.filter_errors
    }

    /// Counts candidate list replacements.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The highlighted index into [`candidates`](Self::candidates).
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.navigation.active()
    }

    /// The highlighted candidate.
    #[must_use]
    pub fn active_option(&self) -> Option<&T> {
        let index = self.navigation.commit_index(self.candidates.len())?;
        self.options.get(self.candidates[index])
    }

    /// Recomputes candidates now and cancels any pending recompute.
    pub fn refresh(&mut self) {
        self.debounce.cancel();
        self.stale = false;
        self.recompute();
    }

    // ========================================================================
    // Overlay and focus
    // ========================================================================

    /// Returns true while the overlay is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Opens the overlay. Refused while disabled or loading.
    pub fn open(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.overlay.open()
    }

    /// Closes the overlay.
    pub fn close(&mut self) -> bool {
        self.overlay.close()
    }

    /// Returns true if the field has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Gives the field focus; the overlay opens if there is text.
    pub fn focus(&mut self) {
        self.focused = true;
        if !self.input.is_empty() {
            self.open();
        }
    }

    /// Removes focus and dismisses the overlay.
    pub fn blur(&mut self) {
        self.focused = false;
        self.close();
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Handles a message, returning a command for the host to run.
    pub fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<FilterTickMsg>() {
            if tick.id == self.debounce.id() && self.debounce.accept(tick) {
                self.recompute();
            }
            return None;
        }
        if msg.is::<FocusMsg>() {
            self.focus();
            return None;
        }
        if msg.is::<BlurMsg>() {
            self.blur();
            return None;
        }

        if !self.is_interactive() {
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        if let Some(hover) = msg.downcast_ref::<HoverMsg>() {
            if self.navigation.set(hover.index, self.candidates.len()) {
                self.after_active_change();
            }
            return None;
        }
        if let Some(commit) = msg.downcast_ref::<ItemCommitMsg>() {
            if self.navigation.set(commit.index, self.candidates.len()) {
                self.after_active_change();
                self.commit_active();
            }
            return None;
        }
        if let Some(chip) = msg.downcast_ref::<ChipRemoveMsg>() {
            let option = self
                .value
                .as_multiple()
                .and_then(|values| values.get(chip.index))
                .cloned();
            if let Some(option) = option {
                self.toggle(&option);
            }
            return None;
        }
        if msg.is::<ClearMsg>() && self.clear_visible() {
            self.clear();
        }
        None
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if !self.focused {
            return None;
        }

        if matches(key, &[&self.key_map.next]) {
            self.open();
            self.navigation.next(self.candidates.len());
            self.after_active_change();
        } else if matches(key, &[&self.key_map.prev]) {
            self.open();
            self.navigation.prev(self.candidates.len());
            self.after_active_change();
        } else if matches(key, &[&self.key_map.open]) {
            self.open();
        } else if matches(key, &[&self.key_map.commit]) {
            self.commit_active();
        } else if matches(key, &[&self.key_map.dismiss]) {
            self.close();
        } else if matches(key, &[&self.key_map.clear]) {
            if self.clear_visible() {
                self.clear();
            }
        } else if self.input.handle_key(key, &self.edit_keys) {
            return self.text_changed();
        }
        None
    }

    /// A keystroke changed the text: re-highlight, notify and reschedule.
    fn text_changed(&mut self) -> Option<Cmd> {
        let text = self.text_edited();
        if let Some(on_input_change) = &self.on_input_change {
            on_input_change(&text);
        }
        if !self.is_interactive() {
            self.stale = true;
            return None;
        }
        if !text.is_empty() {
            self.open();
        }
        Some(self.debounce.schedule())
    }

    fn text_edited(&mut self) -> String {
        let text = self.input.value();
        self.navigation.on_text_change(&text, self.candidates.len());
        self.after_active_change();
        text
    }

    fn request(&mut self, change: Change<T>) -> Selection<T> {
        let Change { value, input } = change;
        if let Some(on_change) = &self.on_change {
            on_change(&value);
        }
        if self.input.value() != input {
            self.input.set_value(&input);
            self.text_edited();
            self.refresh();
        }
        value
    }

    fn recompute(&mut self) {
        let text = self.input.value();
        let filtered = self.filter.apply(&self.options, &text, &self.resolver);
        self.candidates = filtered.indices;
        self.filter_errors = filtered.errors;
        self.generation += 1;
        debug!(
            candidates = self.candidates.len(),
            generation = self.generation,
            "recomputed candidates"
        );
        self.navigation.on_list_replaced(self.candidates.len());
        self.after_active_change();
    }

    fn suspend(&mut self) {
        if self.debounce.is_pending() {
            self.stale = true;
        }
        self.debounce.cancel();
        self.overlay.close();
    }

    /// Runs the recompute `suspend` cancelled once both flags are down.
    fn resume(&mut self) {
        if self.stale && self.is_interactive() {
            debug!("running recompute cancelled while suspended");
            self.refresh();
        }
    }

    fn after_active_change(&mut self) {
        self.sync_scroll();
        self.overlay.notify_active(self.navigation.active());
    }

    fn sync_scroll(&mut self) {
        if let Some(active) = self.navigation.active() {
            if active < self.offset {
                self.offset = active;
            } else if active >= self.offset + self.max_visible {
                self.offset = active + 1 - self.max_visible;
            }
        }
        let max_offset = self.candidates.len().saturating_sub(self.max_visible);
        self.offset = self.offset.min(max_offset);
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Renders the widget.
    #[must_use]
    pub fn view(&self) -> String {
        let mut lines = Vec::new();

        if let Some(label) = &self.label {
            lines.push(paint(self.styles.label, label));
        }
        lines.push(self.field_view());
        if self.is_open() {
            lines.extend(self.list_view());
        }
        if let Some(description) = &self.description {
            lines.push(paint(self.styles.description, description));
        }

        lines.join("\n")
    }

    fn field_view(&self) -> String {
        let mut parts = Vec::new();

        if let Selection::Multiple(values) = &self.value {
            for option in values {
                let chip = format!("{} ×", self.resolver.label(option));
                parts.push(paint(self.styles.chip, &chip));
            }
        }

        if !self.input.is_empty() {
            parts.push(paint(self.styles.text, &self.input.value()));
        } else if !self.placeholder.is_empty() && self.value.is_empty() {
            parts.push(paint(self.styles.placeholder, &self.placeholder));
        }

        if self.loading {
            parts.push(paint(self.styles.indicator, "…"));
        } else if self.clear_visible() {
            parts.push(paint(self.styles.indicator, "×"));
        }

        parts.join(" ")
    }

    fn list_view(&self) -> Vec<String> {
        if self.candidates.is_empty() {
            if self.show_no_results {
                return vec![paint(self.styles.no_results, &self.no_results_text)];
            }
            return Vec::new();
        }

        let default = DefaultRenderer::new(&self.styles);
        let renderer: &dyn OptionRenderer<T> = match &self.renderer {
            Some(renderer) => renderer.as_ref(),
            None => &default,
        };
        let active = self.navigation.active();
        let end = (self.offset + self.max_visible).min(self.candidates.len());

        (self.offset..end)
            .filter_map(|index| {
                let option = self.options.get(self.candidates[index])?;
                let ctx = RenderContext {
                    index,
                    is_active: active == Some(index),
                    is_selected: self.is_selected(option),
                    label: self.resolver.label(option),
                    width: self.width,
                };
                Some(renderer.render(option, &ctx))
            })
            .collect()
    }
}

impl<T: Clone + Send + Sync + 'static> Model for Autocomplete<T> {
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        Autocomplete::update(self, msg)
    }

    fn view(&self) -> String {
        Autocomplete::view(self)
    }
}
