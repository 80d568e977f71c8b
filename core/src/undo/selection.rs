//! Selection records.

use parking_lot::RwLock;

use super::host::{SelectionHost, Shared};
use super::record::{Record, target_ref};

/// Captured selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<O> {
    pub objects: Vec<O>,
    pub active: Option<O>,
}

/// Builds a record restoring the current selection.
///
/// Only the selected objects are compared when deciding whether anything
/// changed. On restore the previously active object is moved to the front
/// of the list (and added if it was missing), matching how the editor
/// orders a selection.
pub fn selection_record<S: SelectionHost>(selection: &Shared<S>) -> Record {
    let state = {
        let selection = selection.read();
        SelectionState {
            objects: selection.objects(),
            active: selection.active_object(),
        }
    };
    Record::new(Some(target_ref(selection)), state, |record| {
        let (Some(selection), Some(state)) = (
            record.target::<RwLock<S>>(),
            record.state::<SelectionState<S::Object>>(),
        ) else {
            return false;
        };
        let mut selection = selection.write();
        if selection.objects() == state.objects {
            return false;
        }

        if state.objects.is_empty() {
            selection.select(None, Vec::new());
            return true;
        }

        let mut objects = state.objects.clone();
        if let Some(active) = &state.active {
            objects.retain(|object| object != active);
            objects.insert(0, active.clone());
        }
        selection.select(state.active.clone(), objects);
        true
    })
}
