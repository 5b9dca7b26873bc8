//! Messages, commands, and the component model.
//!
//! The widget follows the Elm Architecture: every input (keystroke, focus
//! change, timer expiry, pointer signal from the overlay) arrives as a
//! [`Message`], and the only side effect the widget requests is a [`Cmd`]
//! that the host program runs and feeds back as another message.

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// # Example
///
/// ```rust
/// use autocomplete::message::Message;
/// use autocomplete::message::FocusMsg;
///
/// let msg = Message::new(FocusMsg);
/// assert!(msg.is::<FocusMsg>());
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Wraps any sendable value as a message.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Takes the message back out as `M`, if that is what it holds.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Borrows the message as `M`, if that is what it holds.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Returns true if the message holds an `M`.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

/// A deferred side effect that may produce a message.
///
/// Commands are lazy: building one does nothing until the host calls
/// [`Cmd::execute`], usually on a worker thread.
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Creates a command that always yields a message.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Creates a command that may yield nothing.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Runs the command.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

/// A component driven by messages.
pub trait Model: Send + 'static {
    /// Returns a startup command, if any.
    fn init(&self) -> Option<Cmd>;

    /// Processes one message to completion.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Renders the current state.
    fn view(&self) -> String;
}

/// The text field gained focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMsg;

/// The text field lost focus (outside interaction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurMsg;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_downcast() {
        struct TestMsg(i32);

        let msg = Message::new(TestMsg(42));
        assert!(msg.is::<TestMsg>());
        let inner = msg.downcast::<TestMsg>().unwrap();
        assert_eq!(inner.0, 42);
    }

    #[test]
    fn test_message_downcast_wrong_type() {
        let msg = Message::new(FocusMsg);
        assert!(!msg.is::<BlurMsg>());
        assert!(msg.downcast_ref::<BlurMsg>().is_none());
    }

    #[test]
    fn test_cmd_execute() {
        let cmd = Cmd::new(|| Message::new(BlurMsg));
        let msg = cmd.execute().unwrap();
        assert!(msg.is::<BlurMsg>());
    }

    #[test]
    fn test_cmd_optional_none() {
        let cmd = Cmd::new_optional(|| None);
        assert!(cmd.execute().is_none());
    }
}
