//! The undo/redo engine.
//!
//! [`UndoEngine`] records [`Record`]s into [`Transaction`]s and keeps them
//! in a bounded [`UndoStack`]. Undo and redo apply whole transactions and
//! skip over transactions that turn out to change nothing, so a stale or
//! redundant entry never swallows a user's undo keystroke.
//!
//! # Grouping
//!
//! Records made between [`begin_record`](RuntimeUndo::begin_record) and
//! [`end_record`](RuntimeUndo::end_record) form one transaction. Groups may
//! nest; nested groups are flattened into the outermost one, which commits
//! when its matching `end_record` is called. Records made outside a group
//! are committed immediately as single-record transactions.
//!
//! # Suspended logs
//!
//! [`store`](RuntimeUndo::store) parks the current log and starts a fresh
//! one, [`restore`](RuntimeUndo::restore) throws the fresh one away and
//! brings the parked log back. Editors use this around play mode so that
//! edits made while simulating do not mix with the authoring history.
//! Groups never span a swap: `store` commits the open group into the parked
//! log, and `restore` drops a group left open in the discarded one.

use std::fmt;

use super::config::{RestorePolicy, UndoConfig};
use super::error::{UndoError, UndoResult};
use super::events::{SubscriptionId, UndoEvent, UndoEventHandler, UndoEvents};
use super::record::{Record, Transaction};
use super::stack::UndoStack;

/// Interface shared by [`UndoEngine`] and
/// [`DisabledUndo`](super::DisabledUndo).
///
/// Every mutating operation is a silent no-op while the undo system is
/// disabled, so callers never need to branch on the enabled flag.
pub trait RuntimeUndo: Send {
    fn is_enabled(&self) -> bool;

    /// Enables or disables recording and replay.
    ///
    /// An open record group stays open while disabled and keeps collecting
    /// records once the engine is enabled again.
    fn set_enabled(&mut self, enabled: bool);

    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    /// Returns `true` while a record group is open.
    fn is_recording(&self) -> bool;

    /// Opens a record group.
    fn begin_record(&mut self);

    /// Closes a record group, committing it if it is the outermost one.
    fn end_record(&mut self);

    /// Records a change, either into the open group or as its own
    /// transaction.
    fn record_object(&mut self, record: Record);

    /// Reverts the most recent transaction that changes something.
    fn undo(&mut self);

    /// Reapplies the next undone transaction that changes something.
    fn redo(&mut self);

    /// Purges every retained record and empties the history.
    fn purge(&mut self);

    /// Suspends the current history and starts an empty one. An open
    /// record group is committed to the suspended history first.
    fn store(&mut self);

    /// Discards the current history, including any record group opened in
    /// it, and resumes the last suspended one.
    fn restore(&mut self);

    fn subscribe(&mut self, handler: UndoEventHandler) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Bounded multi-level undo/redo engine.
pub struct UndoEngine {
    enabled: bool,
    group: Option<Vec<Record>>,
    group_depth: usize,
    stack: UndoStack<Transaction>,
    stored: Vec<UndoStack<Transaction>>,
    restore_policy: RestorePolicy,
    events: UndoEvents,
}

impl UndoEngine {
    /// Creates an enabled engine retaining up to `capacity` transactions.
    ///
    /// Returns [`UndoError::InvalidArgument`] when `capacity` is zero.
    pub fn new(capacity: usize) -> UndoResult<Self> {
        Self::with_config(UndoConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: UndoConfig) -> UndoResult<Self> {
        let stack = UndoStack::new(config.capacity)?;
        log::debug!(
            "Undo engine created (capacity {}, restore policy {:?})",
            config.capacity,
            config.restore_policy
        );
        Ok(Self {
            enabled: config.enabled,
            group: None,
            group_depth: 0,
            stack,
            stored: Vec::new(),
            restore_policy: config.restore_policy,
            events: UndoEvents::new(),
        })
    }

    /// Drops all history, suspended logs and the open group without purging,
    /// and re-enables the engine. Subscriptions are kept.
    pub fn reset(&mut self) {
        self.enabled = true;
        self.group = None;
        self.group_depth = 0;
        self.stack.clear();
        self.stored.clear();
    }

    /// Number of transactions that can be undone.
    pub fn undo_count(&self) -> usize {
        self.stack.len()
    }

    /// Number of transactions that can be redone.
    pub fn redo_count(&self) -> usize {
        self.stack.redo_len()
    }

    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Number of suspended logs.
    pub fn stored_depth(&self) -> usize {
        self.stored.len()
    }

    pub fn restore_policy(&self) -> RestorePolicy {
        self.restore_policy
    }

    fn commit(&mut self, transaction: Transaction) {
        let records = transaction.len();
        let evicted = self.stack.push(transaction);
        if !evicted.is_empty() {
            log::trace!("Purging {} unreachable transaction(s)", evicted.len());
        }
        for mut transaction in evicted {
            transaction.purge();
        }
        log::debug!(
            "Committed transaction with {records} record(s), {} undoable",
            self.stack.len()
        );
        self.events.emit(UndoEvent::StateChanged);
    }

    fn invariant_violated(operation: &str, err: &UndoError) {
        debug_assert!(false, "{operation}: {err}");
        log::error!("{operation}: undo stack invariant violated: {err}");
    }
}

impl RuntimeUndo for UndoEngine {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn can_undo(&self) -> bool {
        self.stack.can_pop()
    }

    fn can_redo(&self) -> bool {
        self.stack.can_restore()
    }

    fn is_recording(&self) -> bool {
        self.group.is_some()
    }

    fn begin_record(&mut self) {
        if !self.enabled {
            return;
        }
        if self.group.is_none() {
            self.group = Some(Vec::new());
        }
        self.group_depth += 1;
    }

    fn end_record(&mut self) {
        if !self.enabled {
            return;
        }
        if self.group.is_none() {
            log::warn!("end_record called without a matching begin_record");
            return;
        }
        self.group_depth -= 1;
        if self.group_depth > 0 {
            return;
        }
        match self.group.take() {
            Some(records) if !records.is_empty() => self.commit(Transaction::new(records)),
            _ => log::trace!("Empty record group discarded"),
        }
    }

    fn record_object(&mut self, record: Record) {
        if !self.enabled {
            return;
        }
        match &mut self.group {
            Some(group) => group.push(record),
            None => self.commit(record.into()),
        }
    }

    fn undo(&mut self) {
        if !self.enabled || !self.stack.can_pop() {
            return;
        }
        self.events.emit(UndoEvent::BeforeUndo);
        let mut skipped = 0usize;
        loop {
            let changed = match self.stack.pop() {
                Ok(transaction) => transaction.apply(),
                Err(err) => {
                    Self::invariant_violated("undo", &err);
                    break;
                }
            };
            if changed {
                break;
            }
            skipped += 1;
            if !self.stack.can_pop() {
                break;
            }
        }
        if skipped > 0 {
            log::trace!("Undo skipped {skipped} transaction(s) with no effect");
        }
        self.events.emit(UndoEvent::UndoCompleted);
    }

    fn redo(&mut self) {
        if !self.enabled || !self.stack.can_restore() {
            return;
        }
        self.events.emit(UndoEvent::BeforeRedo);
        let mut skipped = 0usize;
        loop {
            let changed = match self.stack.restore() {
                Ok(transaction) => transaction.apply(),
                Err(err) => {
                    Self::invariant_violated("redo", &err);
                    break;
                }
            };
            if changed {
                break;
            }
            skipped += 1;
            if !self.stack.can_restore() {
                break;
            }
        }
        if skipped > 0 {
            log::trace!("Redo skipped {skipped} transaction(s) with no effect");
        }
        self.events.emit(UndoEvent::RedoCompleted);
    }

    fn purge(&mut self) {
        if !self.enabled {
            return;
        }
        for transaction in self.stack.iter_mut() {
            transaction.purge();
        }
        self.stack.clear();
        log::debug!("Undo history purged");
        self.events.emit(UndoEvent::StateChanged);
    }

    fn store(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(records) = self.group.take() {
            self.group_depth = 0;
            log::debug!("Open record group committed before storing the history");
            if !records.is_empty() {
                self.commit(Transaction::new(records));
            }
        }
        let fresh = self.stack.empty_like();
        let suspended = std::mem::replace(&mut self.stack, fresh);
        self.stored.push(suspended);
        log::debug!("Undo history stored (depth {})", self.stored.len());
        self.events.emit(UndoEvent::StateChanged);
    }

    fn restore(&mut self) {
        if !self.enabled {
            return;
        }
        let open_group = self.group.take();
        self.group_depth = 0;
        if self.restore_policy == RestorePolicy::Purge {
            for mut record in open_group.into_iter().flatten() {
                record.purge();
            }
            for transaction in self.stack.iter_mut() {
                transaction.purge();
            }
        }
        self.stack.clear();
        if let Some(previous) = self.stored.pop() {
            self.stack = previous;
        }
        log::debug!("Undo history restored (depth {})", self.stored.len());
        self.events.emit(UndoEvent::StateChanged);
    }

    fn subscribe(&mut self, handler: UndoEventHandler) -> SubscriptionId {
        self.events.subscribe(handler)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

impl fmt::Debug for UndoEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoEngine")
            .field("enabled", &self.enabled)
            .field("recording", &self.group.is_some())
            .field("group_depth", &self.group_depth)
            .field("stack", &self.stack)
            .field("stored_depth", &self.stored.len())
            .field("restore_policy", &self.restore_policy)
            .field("events", &self.events)
            .finish()
    }
}
