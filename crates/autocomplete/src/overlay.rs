//! The anchored overlay: open state plus the positioning collaborator.
//!
//! Positioning, collision avoidance, focus management and accessibility
//! wiring live outside the widget behind [`AnchoredOverlay`]. The widget
//! tells it when to open or close and which item is highlighted, and hears
//! back from it through [`HoverMsg`] and [`ItemCommitMsg`].

use std::fmt;

use tracing::debug;

/// The floating panel that shows the candidate list.
pub trait AnchoredOverlay: Send {
    /// Shows or hides the panel.
    fn set_open(&mut self, open: bool);

    /// The highlighted item changed; a positioning layer may scroll to it.
    fn on_active_change(&mut self, _index: Option<usize>) {}
}

/// An overlay collaborator that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOverlay;

impl AnchoredOverlay for NoopOverlay {
    fn set_open(&mut self, _open: bool) {}
}

/// The pointer is over the candidate at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverMsg {
    /// Index into the candidate list.
    pub index: usize,
}

/// The candidate at `index` was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCommitMsg {
    /// Index into the candidate list.
    pub index: usize,
}

/// Open/closed flag, mirrored to the collaborator on every transition.
pub struct Overlay {
    open: bool,
    host: Box<dyn AnchoredOverlay>,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new(Box::new(NoopOverlay))
    }
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl Overlay {
    /// Creates a closed overlay driving `host`.
    #[must_use]
    pub fn new(host: Box<dyn AnchoredOverlay>) -> Self {
        Self { open: false, host }
    }

    /// Replaces the collaborator, carrying the current state over to it.
    pub fn set_host(&mut self, mut host: Box<dyn AnchoredOverlay>) {
        host.set_open(self.open);
        self.host = host;
    }

    /// Returns true while the panel is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the panel. Returns true if it was closed.
    pub fn open(&mut self) -> bool {
        self.transition(true)
    }

    /// Closes the panel. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        self.transition(false)
    }

    /// Forwards the highlighted index to the collaborator.
    pub fn notify_active(&mut self, index: Option<usize>) {
        self.host.on_active_change(index);
    }

    fn transition(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        debug!(open, "overlay transition");
        self.host.set_open(open);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl AnchoredOverlay for Recorder {
        fn set_open(&mut self, open: bool) {
            self.0.lock().unwrap().push(format!("open={open}"));
        }

        fn on_active_change(&mut self, index: Option<usize>) {
            self.0.lock().unwrap().push(format!("active={index:?}"));
        }
    }

    #[test]
    fn test_starts_closed() {
        assert!(!Overlay::default().is_open());
    }

    #[test]
    fn test_transitions_reach_host_once() {
        let rec = Recorder::default();
        let mut overlay = Overlay::new(Box::new(rec.clone()));

        assert!(overlay.open());
        assert!(!overlay.open());
        assert!(overlay.close());
        assert!(!overlay.close());

        assert_eq!(*rec.0.lock().unwrap(), vec!["open=true", "open=false"]);
    }

    #[test]
    fn test_notify_active() {
        let rec = Recorder::default();
        let mut overlay = Overlay::new(Box::new(rec.clone()));
        overlay.notify_active(Some(2));
        assert_eq!(*rec.0.lock().unwrap(), vec!["active=Some(2)"]);
    }

    #[test]
    fn test_set_host_syncs_state() {
        let mut overlay = Overlay::default();
        overlay.open();
        let rec = Recorder::default();
        overlay.set_host(Box::new(rec.clone()));
        assert_eq!(*rec.0.lock().unwrap(), vec!["open=true"]);
    }
}
