//! Transform records.

use parking_lot::RwLock;

use super::host::{Shared, TransformHost};
use super::record::{Record, target_ref};
use crate::math::Trs;

/// Where an object sits in the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<H> {
    pub parent: Option<H>,
    pub sibling_index: usize,
}

impl<H> Placement<H> {
    pub fn new(parent: Option<H>, sibling_index: usize) -> Self {
        Self {
            parent,
            sibling_index,
        }
    }

    /// Reads the current placement of `target`.
    pub fn of<T: TransformHost<Handle = H>>(target: &T) -> Self {
        Self::new(target.parent(), target.sibling_index())
    }
}

/// Captured state of a transform record.
#[derive(Debug, Clone)]
pub struct TransformState<H> {
    pub trs: Trs,
    /// `None` records position, rotation and scale only.
    pub placement: Option<Placement<H>>,
}

/// Builds a record restoring the current TRS of `target` and, if given,
/// `placement`.
///
/// Pass the placement the object had *before* a reparent so undo puts it
/// back; pass `None` for pure moves.
pub fn transform_record<T: TransformHost>(
    target: &Shared<T>,
    placement: Option<Placement<T::Handle>>,
) -> Record {
    let state = TransformState {
        trs: target.read().trs(),
        placement,
    };
    Record::new(Some(target_ref(target)), state, |record| {
        let (Some(target), Some(state)) = (
            record.target::<RwLock<T>>(),
            record.state::<TransformState<T::Handle>>(),
        ) else {
            return false;
        };
        let mut target = target.write();

        let mut changed = !target.trs().approx_eq(&state.trs);
        if let Some(placement) = &state.placement {
            changed |= target.parent() != placement.parent
                || target.sibling_index() != placement.sibling_index;
        }
        if !changed {
            return false;
        }

        if let Some(placement) = &state.placement {
            target.set_placement(placement.parent.clone(), placement.sibling_index);
        }
        target.set_trs(state.trs);
        true
    })
}
