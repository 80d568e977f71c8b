//! Undo records and transactions.
//!
//! A [`Record`] captures one undoable change as data plus two strategy
//! closures:
//!
//! - **apply** pushes the captured state back onto the target and reports
//!   whether anything observable changed. It must return `false` when the
//!   target already matches the state, and when the target is gone.
//! - **purge** runs once when the record is permanently evicted from
//!   history, e.g. to finish destroying an object whose creation was undone.
//!
//! Targets are held through a [`Weak`] handle. The host owns its objects and
//! may drop them at any time; [`Record::target`] then returns `None`.
//!
//! A [`Transaction`] is the atomic undo/redo step: an ordered list of records
//! applied together.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

/// Type-erased, non-owning handle to a record target.
pub type TargetRef = Weak<dyn Any + Send + Sync>;

/// Apply strategy: restores the record's state, returns `true` on change.
pub type ApplyFn = Box<dyn Fn(&Record) -> bool + Send + Sync>;

/// Purge strategy: invoked at most once when the record is evicted.
pub type PurgeFn = Box<dyn FnOnce(&Record) + Send + Sync>;

/// Builds a [`TargetRef`] from a shared host object.
pub fn target_ref<T: Any + Send + Sync>(target: &Arc<T>) -> TargetRef {
    let weak: Weak<T> = Arc::downgrade(target);
    weak
}

/// A single undoable change to one target.
pub struct Record {
    target: Option<TargetRef>,
    state: Box<dyn Any + Send + Sync>,
    apply: ApplyFn,
    purge: Option<PurgeFn>,
    label: Option<String>,
    purged: bool,
}

impl Record {
    /// Creates a record with the given target handle, captured state and
    /// apply strategy. The purge strategy defaults to doing nothing.
    pub fn new<S, F>(target: Option<TargetRef>, state: S, apply: F) -> Self
    where
        S: Any + Send + Sync,
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        Self {
            target,
            state: Box::new(state),
            apply: Box::new(apply),
            purge: None,
            label: None,
            purged: false,
        }
    }

    /// Sets the purge strategy.
    #[must_use]
    pub fn with_purge<P>(mut self, purge: P) -> Self
    where
        P: FnOnce(&Record) + Send + Sync + 'static,
    {
        self.purge = Some(Box::new(purge));
        self
    }

    /// Attaches a short description, used in log output.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the target if it is still alive and has type `T`.
    pub fn target<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let target = self.target.as_ref()?.upgrade()?;
        target.downcast::<T>().ok()
    }

    /// Returns `true` if the record was created with a target that has
    /// since been dropped.
    pub fn is_target_dead(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| target.strong_count() == 0)
    }

    /// Returns the captured state if it has type `S`.
    pub fn state<S: Any>(&self) -> Option<&S> {
        self.state.downcast_ref::<S>()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Runs the apply strategy.
    pub fn apply(&self) -> bool {
        (self.apply)(self)
    }

    /// Runs the purge strategy. Subsequent calls do nothing.
    pub fn purge(&mut self) {
        if self.purged {
            return;
        }
        self.purged = true;
        if let Some(purge) = self.purge.take() {
            purge(self);
        }
    }

    pub fn is_purged(&self) -> bool {
        self.purged
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("label", &self.label)
            .field("has_target", &self.target.is_some())
            .field("target_dead", &self.is_target_dead())
            .field("purged", &self.purged)
            .finish()
    }
}

/// An atomic group of records undone and redone together.
#[derive(Debug, Default)]
pub struct Transaction {
    records: Vec<Record>,
}

impl Transaction {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Applies every record in order.
    ///
    /// All records are applied even after one reports a change. Returns
    /// `true` if any of them changed something.
    pub fn apply(&self) -> bool {
        self.records
            .iter()
            .fold(false, |changed, record| record.apply() | changed)
    }

    /// Purges every record.
    pub fn purge(&mut self) {
        for record in &mut self.records {
            record.purge();
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Record> for Transaction {
    fn from(record: Record) -> Self {
        Self::new(vec![record])
    }
}
