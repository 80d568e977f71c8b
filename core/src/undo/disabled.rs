//! No-op undo implementation.

use super::engine::RuntimeUndo;
use super::events::{SubscriptionId, UndoEventHandler, UndoEvents};
use super::record::Record;

/// [`RuntimeUndo`] that never records anything.
///
/// Hand this to contexts where undo tracking is switched off entirely, so
/// callers keep talking to the same interface. Subscriptions are accepted
/// but never receive an event.
#[derive(Debug, Default)]
pub struct DisabledUndo {
    events: UndoEvents,
}

impl DisabledUndo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RuntimeUndo for DisabledUndo {
    fn is_enabled(&self) -> bool {
        false
    }

    fn set_enabled(&mut self, _enabled: bool) {}

    fn can_undo(&self) -> bool {
        false
    }

    fn can_redo(&self) -> bool {
        false
    }

    fn is_recording(&self) -> bool {
        false
    }

    fn begin_record(&mut self) {}

    fn end_record(&mut self) {}

    fn record_object(&mut self, _record: Record) {}

    fn undo(&mut self) {}

    fn redo(&mut self) {}

    fn purge(&mut self) {}

    fn store(&mut self) {}

    fn restore(&mut self) {}

    fn subscribe(&mut self, handler: UndoEventHandler) -> SubscriptionId {
        self.events.subscribe(handler)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}
