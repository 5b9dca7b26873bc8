//! Option rendering and widget styles.
//!
//! A renderer turns one candidate into one line of text. It sees the option
//! and a [`RenderContext`] and returns a string; it has no access to the
//! widget, so it cannot move the highlight or change the selection.

use crossterm::style::{Color, ContentStyle, Stylize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What a renderer knows about the candidate it is drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Position in the candidate list.
    pub index: usize,
    /// The candidate is highlighted.
    pub is_active: bool,
    /// The candidate is part of the committed selection.
    pub is_selected: bool,
    /// The resolved display label.
    pub label: String,
    /// Columns available for the line.
    pub width: usize,
}

/// Draws one candidate.
pub trait OptionRenderer<T>: Send + Sync {
    /// Renders `option` as a single line.
    fn render(&self, option: &T, ctx: &RenderContext) -> String;
}

impl<T, F> OptionRenderer<T> for F
where
    F: Fn(&T, &RenderContext) -> String + Send + Sync,
{
    fn render(&self, option: &T, ctx: &RenderContext) -> String {
        self(option, ctx)
    }
}

/// Visual styles for every part of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// The label line above the field.
    pub label: ContentStyle,
    /// The description line below the field.
    pub description: ContentStyle,
    /// Placeholder text in an empty field.
    pub placeholder: ContentStyle,
    /// Typed text.
    pub text: ContentStyle,
    /// The highlighted candidate.
    pub active: ContentStyle,
    /// Selected candidates that are not highlighted.
    pub selected: ContentStyle,
    /// Selected options shown as chips in multiple mode.
    pub chip: ContentStyle,
    /// The empty-list message.
    pub no_results: ContentStyle,
    /// Loading and clear marks at the end of the field.
    pub indicator: ContentStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            label: ContentStyle::new().bold(),
            description: ContentStyle::new().with(Color::DarkGrey),
            placeholder: ContentStyle::new().with(Color::DarkGrey),
            text: ContentStyle::new(),
            active: ContentStyle::new().with(Color::Magenta).bold(),
            selected: ContentStyle::new().with(Color::Cyan),
            chip: ContentStyle::new().on(Color::DarkGrey),
            no_results: ContentStyle::new().with(Color::DarkGrey).italic(),
            indicator: ContentStyle::new().with(Color::DarkGrey),
        }
    }
}

impl Styles {
    /// Styles that emit no escape sequences.
    #[must_use]
    pub fn plain() -> Self {
        let none = ContentStyle::new();
        Self {
            label: none,
            description: none,
            placeholder: none,
            text: none,
            active: none,
            selected: none,
            chip: none,
            no_results: none,
            indicator: none,
        }
    }
}

/// Applies `style` to `text`, producing a string with escape sequences.
pub(crate) fn paint(style: ContentStyle, text: &str) -> String {
    style.apply(text).to_string()
}

/// Label padded to the line width followed by a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRenderer {
    active: ContentStyle,
    selected: ContentStyle,
}

impl Default for DefaultRenderer {
    fn default() -> Self {
        Self::new(&Styles::default())
    }
}

impl DefaultRenderer {
    /// Creates a renderer using the item styles from `styles`.
    #[must_use]
    pub fn new(styles: &Styles) -> Self {
        Self {
            active: styles.active,
            selected: styles.selected,
        }
    }
}

impl<T> OptionRenderer<T> for DefaultRenderer {
    fn render(&self, _option: &T, ctx: &RenderContext) -> String {
        let checkbox = if ctx.is_selected { "[x]" } else { "[ ]" };
        // Label column leaves room for " [x]".
        let label_width = ctx.width.saturating_sub(4);
        let line = format!("{} {checkbox}", fit(&ctx.label, label_width));
        if ctx.is_active {
            paint(self.active, &line)
        } else if ctx.is_selected {
            paint(self.selected, &line)
        } else {
            line
        }
    }
}

/// Truncates `s` with an ellipsis or pads it with spaces to exactly `width`
/// columns. A width of 0 leaves `s` unchanged.
#[must_use]
pub fn fit(s: &str, width: usize) -> String {
    if width == 0 {
        return s.to_string();
    }
    let current = s.width();
    if current <= width {
        return format!("{s}{}", " ".repeat(width - current));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
