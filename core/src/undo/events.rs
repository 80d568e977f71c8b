//! Undo notification channel.
//!
//! Consumers (menu items, toolbar buttons, history panels) subscribe to
//! [`UndoEvent`]s to refresh their enabled state. Handlers run synchronously
//! on the thread that triggered the event.

use std::fmt;

/// Point events fired by an undo engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndoEvent {
    BeforeUndo,
    UndoCompleted,
    BeforeRedo,
    RedoCompleted,
    /// The retained history changed: a commit, purge, store or restore.
    StateChanged,
}

/// Handle returned by [`UndoEvents::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Event handler signature.
pub type UndoEventHandler = Box<dyn FnMut(UndoEvent) + Send>;

/// Registry of event handlers.
#[derive(Default)]
pub struct UndoEvents {
    next_id: u64,
    handlers: Vec<(SubscriptionId, UndoEventHandler)>,
}

impl UndoEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler. Handlers are called in subscription order.
    pub fn subscribe(&mut self, handler: UndoEventHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Removes a handler. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, event: UndoEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    /// Number of subscribed handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for UndoEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoEvents")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
