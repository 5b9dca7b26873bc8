//! Active (highlighted) candidate tracking.
//!
//! The active index is always `None` or a valid index into the current
//! candidate list. Every operation takes the current list length, and a list
//! replacement that leaves the index out of bounds resets it to `None`
//! instead of clamping it onto an unrelated option.

/// Highlight state for the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active: Option<usize>,
    highlight_first: bool,
    looping: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Navigation {
    /// Creates navigation state. With `looping`, moving past either end wraps.
    #[must_use]
    pub fn new(looping: bool) -> Self {
        Self {
            active: None,
            highlight_first: false,
            looping,
        }
    }

    /// The highlighted index, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Sets whether navigation wraps at the ends.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Applies the text-change rule.
    ///
    /// Non-empty text highlights the first candidate, both now and in the list
    /// the pending recompute will produce. Empty text clears the highlight.
    pub fn on_text_change(&mut self, text: &str, len: usize) {
        if text.is_empty() {
            self.active = None;
            self.highlight_first = false;
        } else {
            self.active = first(len);
            self.highlight_first = true;
        }
    }

    /// Revalidates the highlight against a freshly computed list.
    pub fn on_list_replaced(&mut self, len: usize) {
        if std::mem::take(&mut self.highlight_first) {
            self.active = first(len);
        } else if self.active.is_some_and(|i| i >= len) {
            self.active = None;
        }
    }

    /// Moves the highlight down.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.active = None;
            return;
        }
        self.active = Some(match self.active {
            None => 0,
            Some(i) if i + 1 >= len => {
                if self.looping {
                    0
                } else {
                    len - 1
                }
            }
            Some(i) => i + 1,
        });
    }

    /// Moves the highlight up.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.active = None;
            return;
        }
        self.active = Some(match self.active {
            None => len - 1,
            Some(0) => {
                if self.looping {
                    len - 1
                } else {
                    0
                }
            }
            Some(i) => (i - 1).min(len - 1),
        });
    }

    /// Highlights `index` if it is inside the list; returns whether it was.
    pub fn set(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    /// The index Enter should commit, if it is valid for a list of `len`.
    #[must_use]
    pub fn commit_index(&self, len: usize) -> Option<usize> {
        self.active.filter(|&i| i < len)
    }
}

fn first(len: usize) -> Option<usize> {
    (len > 0).then_some(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_change_highlights_first() {
        let mut nav = Navigation::default();
        nav.on_text_change("on", 4);
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_empty_text_clears() {
        let mut nav = Navigation::default();
        nav.on_text_change("o", 4);
        nav.on_text_change("", 4);
        assert_eq!(nav.active(), None);
        nav.on_list_replaced(4);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_text_change_on_empty_list_then_results() {
        let mut nav = Navigation::default();
        nav.on_text_change("o", 0);
        assert_eq!(nav.active(), None);
        nav.on_list_replaced(3);
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_shrink_resets_rather_than_clamps() {
        let mut nav = Navigation::default();
        nav.set(3, 4);
        nav.on_list_replaced(2);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_in_bounds_survives_replacement() {
        let mut nav = Navigation::default();
        nav.set(1, 4);
        nav.on_list_replaced(2);
        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn test_loop_wraps_both_ends() {
        let mut nav = Navigation::new(true);
        nav.next(3);
        assert_eq!(nav.active(), Some(0));
        nav.prev(3);
        assert_eq!(nav.active(), Some(2));
        nav.next(3);
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_from_none_prev_goes_last() {
        let mut nav = Navigation::new(true);
        nav.prev(5);
        assert_eq!(nav.active(), Some(4));
    }

    #[test]
    fn test_without_loop_stops_at_ends() {
        let mut nav = Navigation::new(false);
        nav.set(2, 3);
        nav.next(3);
        assert_eq!(nav.active(), Some(2));
        nav.set(0, 3);
        nav.prev(3);
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut nav = Navigation::default();
        nav.next(0);
        assert_eq!(nav.active(), None);
        nav.prev(0);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_set_out_of_bounds_ignored() {
        let mut nav = Navigation::default();
        assert!(!nav.set(5, 2));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_commit_index_checks_bounds() {
        let mut nav = Navigation::default();
        nav.set(2, 3);
        assert_eq!(nav.commit_index(3), Some(2));
        assert_eq!(nav.commit_index(2), None);
    }
}
