//! Trailing debounce for candidate recomputation.
//!
//! Every keystroke schedules a timer; scheduling again supersedes the
//! previous one. A superseded timer is released two ways: its shared
//! cancellation flag is raised, so the sleeping command yields no message at
//! all, and its tag no longer matches, so a tick that was already in flight is
//! rejected. Exactly one tick is accepted per quiet period.
//!
//! # Example
//!
//! ```rust
//! use autocomplete::debounce::{Debounce, FilterTickMsg};
//! use std::time::Duration;
//!
//! let mut debounce = Debounce::new(Duration::ZERO);
//! let stale = debounce.schedule();
//! let fresh = debounce.schedule();
//!
//! assert!(stale.execute().is_none());
//! let tick = fresh.execute().unwrap().downcast::<FilterTickMsg>().unwrap();
//! assert!(debounce.accept(&tick));
//! assert!(!debounce.accept(&tick));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tracing::trace;

use crate::message::{Cmd, Message};

/// Delay used when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Sent when a debounce timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTickMsg {
    /// Id of the debounce that scheduled the timer.
    pub id: u64,
    tag: u64,
}

impl FilterTickMsg {
    /// Creates a tick message.
    #[must_use]
    pub fn new(id: u64, tag: u64) -> Self {
        Self { id, tag }
    }

    /// The scheduling epoch this tick belongs to.
    #[must_use]
    pub fn tag(&self) -> u64 {
        self.tag
    }
}

/// A cancellable trailing-edge timer.
#[derive(Debug)]
pub struct Debounce {
    id: u64,
    tag: u64,
    delay: Duration,
    pending: Option<Arc<AtomicBool>>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debounce {
    /// Creates an idle debounce with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            delay,
            pending: None,
        }
    }

    /// Unique id, carried by every tick this debounce schedules.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current scheduling epoch.
    #[must_use]
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// The configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay for timers scheduled from now on.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Returns true while a scheduled timer has neither fired nor been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancels any pending timer and schedules a new one.
    pub fn schedule(&mut self) -> Cmd {
        self.cancel();
        self.tag = self.tag.wrapping_add(1);

        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending = Some(Arc::clone(&cancelled));

        let id = self.id;
        let tag = self.tag;
        let delay = self.delay;
        Cmd::new_optional(move || {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            if cancelled.load(Ordering::Acquire) {
                return None;
            }
            Some(Message::new(FilterTickMsg { id, tag }))
        })
    }

    /// Releases the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(cancelled) = self.pending.take() {
            cancelled.store(true, Ordering::Release);
        }
    }

    /// Accepts a tick if it belongs to the pending timer, consuming it.
    pub fn accept(&mut self, tick: &FilterTickMsg) -> bool {
        if tick.id != self.id || tick.tag != self.tag || self.pending.is_none() {
            trace!(
                id = tick.id,
                tag = tick.tag,
                current = self.tag,
                "ignoring stale filter tick"
            );
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}
