//! Convenience recording API on top of [`RuntimeUndo::record_object`].
//!
//! [`RecordExt`] is implemented for every [`RuntimeUndo`], including
//! `dyn RuntimeUndo`. All methods do nothing while the engine is disabled;
//! in particular the create/destroy helpers then leave the object's active
//! flag untouched.
//!
//! # Create and destroy
//!
//! Each helper pair brackets the actual host operation, usually in two
//! groups so selection changes are captured on both sides:
//!
//! ```ignore
//! undo.begin_record();
//! undo.begin_destroy_object(&node);
//! undo.record_selection(&selection);
//! undo.end_record();
//!
//! undo.untracked(|| selection.write().clear());
//!
//! undo.begin_record();
//! undo.destroy_object(&node);
//! undo.record_selection(&selection);
//! undo.end_record();
//! ```

use super::engine::RuntimeUndo;
use super::host::{ActiveState, SelectionHost, Shared, TransformHost};
use super::lifecycle::active_state_record;
use super::selection::selection_record;
use super::transform::{Placement, transform_record};
use super::value::{Component, Field, value_record};

/// Typed record builders for host objects.
pub trait RecordExt: RuntimeUndo {
    /// Records the current value of one field of `target`.
    fn record_value<T, V, G, S>(&mut self, target: &Shared<T>, get: G, set: S)
    where
        T: Send + Sync + 'static,
        V: Clone + PartialEq + Send + Sync + 'static,
        G: Fn(&T) -> V + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        if !self.is_enabled() {
            return;
        }
        self.record_object(value_record(target, get, set));
    }

    /// Records every field in `fields` as one transaction (or into the
    /// already open group).
    fn record_fields<T: Send + Sync + 'static>(&mut self, target: &Shared<T>, fields: &[Field<T>]) {
        if !self.is_enabled() || fields.is_empty() {
            return;
        }
        self.begin_record();
        for field in fields {
            self.record_object(field.capture(target));
        }
        self.end_record();
    }

    /// Records all undoable fields of a component.
    fn record_component<C: Component>(&mut self, target: &Shared<C>) {
        self.record_fields(target, &C::fields());
    }

    /// Records the transform of `target`, plus its hierarchy placement when
    /// `placement` is given.
    fn record_transform<T: TransformHost>(
        &mut self,
        target: &Shared<T>,
        placement: Option<Placement<T::Handle>>,
    ) {
        if !self.is_enabled() {
            return;
        }
        self.record_object(transform_record(target, placement));
    }

    /// Records the current selection.
    fn record_selection<S: SelectionHost>(&mut self, selection: &Shared<S>) {
        if !self.is_enabled() {
            return;
        }
        self.record_object(selection_record(selection));
    }

    /// Call before creating an object: undoing the creation deactivates it.
    fn begin_register_create_object<T: ActiveState>(&mut self, target: &Shared<T>) {
        if !self.is_enabled() {
            return;
        }
        self.record_object(active_state_record(target, false));
    }

    /// Activates a freshly created object and records it as active.
    fn register_created_object<T: ActiveState>(&mut self, target: &Shared<T>) {
        if !self.is_enabled() {
            return;
        }
        target.write().set_active(true);
        self.record_object(active_state_record(target, true));
    }

    /// Call before deleting an object: undoing the deletion reactivates it.
    fn begin_destroy_object<T: ActiveState>(&mut self, target: &Shared<T>) {
        if !self.is_enabled() {
            return;
        }
        self.record_object(active_state_record(target, true));
    }

    /// Deactivates an object and records it as deleted. It is destroyed
    /// for real once this record is purged.
    fn destroy_object<T: ActiveState>(&mut self, target: &Shared<T>) {
        if !self.is_enabled() {
            return;
        }
        target.write().set_active(false);
        self.record_object(active_state_record(target, false));
    }

    /// Runs `f` with recording switched off, restoring the previous enabled
    /// state afterwards.
    fn untracked<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let enabled = self.is_enabled();
        self.set_enabled(false);
        let result = f();
        self.set_enabled(enabled);
        result
    }
}

impl<U: RuntimeUndo + ?Sized> RecordExt for U {}
