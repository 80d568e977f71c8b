//! Runtime undo/redo engine.
//!
//! Edits are captured as [`Record`]s: a weak handle to the edited object,
//! a snapshot of its state, and a closure that writes the snapshot back.
//! Records are grouped into [`Transaction`]s, which live in a bounded
//! circular [`UndoStack`]. Undoing and redoing both *apply* snapshots, so
//! the usual pattern is to record an object before and after changing it:
//!
//! ```ignore
//! undo.record_value(&light, |l| l.intensity, |l, v| l.intensity = v);
//! light.write().intensity = 2.0;
//! undo.record_value(&light, |l| l.intensity, |l, v| l.intensity = v);
//! ```
//!
//! Transactions whose records change nothing are skipped during traversal,
//! which is what lets the "before" and "after" snapshots pair up.
//!
//! - [`RuntimeUndo`] — the engine interface, with [`UndoEngine`] and the
//!   no-op [`DisabledUndo`]
//! - [`RecordExt`] — typed record builders for host objects
//! - [`UndoEvents`] — change notifications
//! - [`UndoConfig`] — capacity and policy settings, loadable from TOML
//!
//! # Suspended histories
//!
//! [`RuntimeUndo::store`] parks the current history and starts an empty one
//! (for example while a modal tool is open); [`RuntimeUndo::restore`] drops
//! the temporary history and brings the parked one back. What happens to the
//! dropped records is controlled by [`RestorePolicy`].

mod builders;
mod config;
mod disabled;
mod engine;
mod error;
mod events;
mod host;
mod lifecycle;
mod record;
mod selection;
mod stack;
mod transform;
mod value;

pub use builders::RecordExt;
pub use config::{DEFAULT_CAPACITY, RestorePolicy, UndoConfig, load_config};
pub use disabled::DisabledUndo;
pub use engine::{RuntimeUndo, UndoEngine};
pub use error::{UndoError, UndoResult};
pub use events::{SubscriptionId, UndoEvent, UndoEventHandler, UndoEvents};
pub use host::{ActiveState, SelectionHost, Shared, TransformHost, shared};
pub use lifecycle::active_state_record;
pub use record::{ApplyFn, PurgeFn, Record, TargetRef, Transaction, target_ref};
pub use selection::{SelectionState, selection_record};
pub use stack::UndoStack;
pub use transform::{Placement, TransformState, transform_record};
pub use value::{Component, Field, value_record};
