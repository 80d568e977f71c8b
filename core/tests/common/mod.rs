//! Shared fixtures for the undo integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};
use rtundo_core::undo::{Record, RuntimeUndo, Shared, UndoEvent, shared, target_ref};

/// Installs a test logger once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An integer cell standing in for a host object field.
pub fn cell(value: i32) -> Shared<i32> {
    shared(value)
}

/// Snapshot of the cell's current value; applying writes it back.
pub fn snapshot(cell: &Shared<i32>) -> Record {
    let state = *cell.read();
    Record::new(Some(target_ref(cell)), state, |record| {
        let (Some(cell), Some(&state)) = (record.target::<RwLock<i32>>(), record.state::<i32>())
        else {
            return false;
        };
        let mut value = cell.write();
        if *value == state {
            return false;
        }
        *value = state;
        true
    })
}

/// A record that moves the cell between `before` and `after`, whichever it
/// is not currently holding. Every apply is a real change.
pub fn toggle(cell: &Shared<i32>, before: i32, after: i32) -> Record {
    Record::new(Some(target_ref(cell)), (before, after), |record| {
        let (Some(cell), Some(&(before, after))) =
            (record.target::<RwLock<i32>>(), record.state::<(i32, i32)>())
        else {
            return false;
        };
        let mut value = cell.write();
        *value = if *value == after { before } else { after };
        true
    })
}

/// Purge counter shared between a test and the records it creates.
#[derive(Debug, Clone, Default)]
pub struct PurgeCounter(Arc<AtomicUsize>);

impl PurgeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Attaches a counting purge strategy to `record`.
    pub fn track(&self, record: Record) -> Record {
        let counter = Arc::clone(&self.0);
        record.with_purge(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }
}

/// Collects every event fired by `undo`.
pub fn event_log(undo: &mut dyn RuntimeUndo) -> Arc<Mutex<Vec<UndoEvent>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    undo.subscribe(Box::new(move |event| sink.lock().push(event)));
    log
}

pub fn count_events(log: &Mutex<Vec<UndoEvent>>, event: UndoEvent) -> usize {
    log.lock().iter().filter(|e| **e == event).count()
}
