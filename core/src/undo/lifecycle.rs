//! Create/destroy records.
//!
//! Object creation and deletion are recorded as active-flag toggles. A
//! deleted object stays in the scene, deactivated, for as long as some
//! record can bring it back. When a record that last saw the object
//! inactive is purged and the object is still inactive, it is destroyed.

use parking_lot::RwLock;

use super::host::{ActiveState, Shared};
use super::record::{Record, target_ref};

/// Builds a record that sets the active flag of `target` to `active`.
pub fn active_state_record<T: ActiveState>(target: &Shared<T>, active: bool) -> Record {
    Record::new(Some(target_ref(target)), active, |record| {
        let (Some(target), Some(&active)) = (record.target::<RwLock<T>>(), record.state::<bool>())
        else {
            return false;
        };
        let mut target = target.write();
        if target.is_active() == active {
            return false;
        }
        target.set_active(active);
        true
    })
    .with_purge(|record| {
        let (Some(target), Some(&active)) = (record.target::<RwLock<T>>(), record.state::<bool>())
        else {
            return;
        };
        if active {
            return;
        }
        let mut target = target.write();
        if !target.is_active() {
            log::debug!("Destroying object deactivated by purged undo record");
            target.destroy();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undo::host::shared;

    #[derive(Debug)]
    struct Object {
        active: bool,
        destroyed: bool,
    }

    impl ActiveState for Object {
        fn is_active(&self) -> bool {
            self.active
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }

        fn destroy(&mut self) {
            self.destroyed = true;
        }
    }

    fn object(active: bool) -> Shared<Object> {
        shared(Object {
            active,
            destroyed: false,
        })
    }

    #[test]
    fn toggles_active_flag() {
        let obj = object(true);
        let record = active_state_record(&obj, false);
        assert!(record.apply());
        assert!(!obj.read().active);
        assert!(!record.apply());
    }

    #[test]
    fn purge_destroys_inactive_object() {
        let obj = object(false);
        let mut record = active_state_record(&obj, false);
        record.purge();
        assert!(obj.read().destroyed);
    }

    #[test]
    fn purge_spares_reactivated_object() {
        let obj = object(false);
        let mut record = active_state_record(&obj, false);
        obj.write().active = true;
        record.purge();
        assert!(!obj.read().destroyed);
    }

    #[test]
    fn purge_of_active_record_does_nothing() {
        let obj = object(false);
        let mut record = active_state_record(&obj, true);
        record.purge();
        assert!(!obj.read().destroyed);
    }

    #[test]
    fn purge_tolerates_dropped_target() {
        let obj = object(false);
        let mut record = active_state_record(&obj, false);
        drop(obj);
        record.purge();
        assert!(record.is_purged());
    }
}
