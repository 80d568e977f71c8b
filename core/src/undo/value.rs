//! Value records: snapshot one field, write it back on undo.
//!
//! Values are captured by clone, so a `Vec` field is deep-copied at record
//! time and later in-place edits of the live vector never leak into the
//! snapshot. Change detection uses `PartialEq`, which for sequences means
//! element-wise equality.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::host::Shared;
use super::record::{Record, target_ref};

/// Builds a record that restores `get(target)` as it is now.
pub fn value_record<T, V, G, S>(target: &Shared<T>, get: G, set: S) -> Record
where
    T: Send + Sync + 'static,
    V: Clone + PartialEq + Send + Sync + 'static,
    G: Fn(&T) -> V + Send + Sync + 'static,
    S: Fn(&mut T, V) + Send + Sync + 'static,
{
    let snapshot = get(&target.read());
    Record::new(Some(target_ref(target)), snapshot, move |record| {
        let (Some(target), Some(state)) = (record.target::<RwLock<T>>(), record.state::<V>())
        else {
            return false;
        };
        let mut target = target.write();
        if get(&target) == *state {
            return false;
        }
        set(&mut target, state.clone());
        true
    })
}

type Capture<T> = Arc<dyn Fn(&Shared<T>) -> Record + Send + Sync>;

/// A named getter/setter pair, erased over the field's value type.
///
/// The host builds these from whatever it knows about a component's
/// serializable fields.
pub struct Field<T> {
    name: &'static str,
    capture: Capture<T>,
}

impl<T: Send + Sync + 'static> Field<T> {
    pub fn new<V, G, S>(name: &'static str, get: G, set: S) -> Self
    where
        V: Clone + PartialEq + Send + Sync + 'static,
        G: Fn(&T) -> V + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let get = Arc::new(get);
        let set = Arc::new(set);
        Self {
            name,
            capture: Arc::new(move |target: &Shared<T>| {
                let get = Arc::clone(&get);
                let set = Arc::clone(&set);
                value_record(target, move |t: &T| get(t), move |t: &mut T, v| set(t, v))
                    .with_label(name)
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Snapshots this field of `target`.
    pub fn capture(&self, target: &Shared<T>) -> Record {
        (self.capture)(target)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            capture: Arc::clone(&self.capture),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Components that list their undoable fields.
pub trait Component: Send + Sync + Sized + 'static {
    fn fields() -> Vec<Field<Self>>;
}
