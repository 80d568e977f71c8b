//! Host collaborator traits.
//!
//! The undo engine does not know the editor's object model. Record builders
//! talk to host objects through these traits, and host objects are shared
//! with the engine as [`Shared<T>`] so records can hold non-owning handles
//! to them.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::math::Trs;

/// A host object shared between the scene and undo records.
pub type Shared<T> = Arc<RwLock<T>>;

/// Wraps a value into a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}

/// Objects that can be deactivated instead of destroyed outright.
///
/// Deleting an object in the editor only deactivates it, so the deletion
/// can be undone. The object is really destroyed once the record that could
/// bring it back is purged from history.
pub trait ActiveState: Send + Sync + 'static {
    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);

    /// Destroys the object for good.
    fn destroy(&mut self);
}

/// Objects with a transform and a place in a hierarchy.
pub trait TransformHost: Send + Sync + 'static {
    /// How the host refers to parent objects.
    type Handle: Clone + PartialEq + Send + Sync + 'static;

    fn trs(&self) -> Trs;

    fn set_trs(&mut self, trs: Trs);

    fn parent(&self) -> Option<Self::Handle>;

    /// Position among the parent's children.
    fn sibling_index(&self) -> usize;

    /// Reparents the object and moves it to `sibling_index`.
    fn set_placement(&mut self, parent: Option<Self::Handle>, sibling_index: usize);
}

/// The editor's current selection.
pub trait SelectionHost: Send + Sync + 'static {
    type Object: Clone + PartialEq + Send + Sync + 'static;

    /// Selected objects in selection order.
    fn objects(&self) -> Vec<Self::Object>;

    fn active_object(&self) -> Option<Self::Object>;

    /// Replaces the selection.
    fn select(&mut self, active: Option<Self::Object>, objects: Vec<Self::Object>);
}
