//! Editor-style workflows built on the record builders: duplicating and
//! deleting objects with selection, inspector edits, and play mode.

mod common;

use rstest::rstest;

use common::init_logging;
use rtundo_core::math::{Trs, Vec3, quat_from_rotation_y};
use rtundo_core::undo::{
    ActiveState, Component, Field, Placement, RecordExt, RestorePolicy, RuntimeUndo,
    SelectionHost, Shared, TransformHost, UndoConfig, UndoEngine, shared,
};

#[derive(Debug, Clone)]
struct GameObject {
    id: u32,
    name: String,
    active: bool,
    destroyed: bool,
    trs: Trs,
    parent: Option<u32>,
    sibling_index: usize,
}

impl GameObject {
    fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            destroyed: false,
            trs: Trs::identity(),
            parent: None,
            sibling_index: 0,
        }
    }
}

impl ActiveState for GameObject {
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

impl TransformHost for GameObject {
    type Handle = u32;

    fn trs(&self) -> Trs {
        self.trs
    }

    fn set_trs(&mut self, trs: Trs) {
        self.trs = trs;
    }

    fn parent(&self) -> Option<u32> {
        self.parent
    }

    fn sibling_index(&self) -> usize {
        self.sibling_index
    }

    fn set_placement(&mut self, parent: Option<u32>, sibling_index: usize) {
        self.parent = parent;
        self.sibling_index = sibling_index;
    }
}

impl Component for GameObject {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new("name", |o: &GameObject| o.name.clone(), |o, v| o.name = v),
            Field::new("trs", |o: &GameObject| o.trs, |o, v| o.trs = v),
        ]
    }
}

#[derive(Debug, Default)]
struct Selection {
    objects: Vec<u32>,
    active: Option<u32>,
}

impl SelectionHost for Selection {
    type Object = u32;

    fn objects(&self) -> Vec<u32> {
        self.objects.clone()
    }

    fn active_object(&self) -> Option<u32> {
        self.active
    }

    fn select(&mut self, active: Option<u32>, objects: Vec<u32>) {
        self.active = active;
        self.objects = objects;
    }
}

fn select(selection: &Shared<Selection>, ids: &[u32]) {
    selection.write().select(ids.first().copied(), ids.to_vec());
}

/// Duplicates `source`, selecting the copy, the way an editor's
/// duplicate command does.
fn duplicate(
    undo: &mut dyn RuntimeUndo,
    selection: &Shared<Selection>,
    source: &Shared<GameObject>,
    id: u32,
) -> Shared<GameObject> {
    let copy = shared(GameObject {
        id,
        active: false,
        ..source.read().clone()
    });

    undo.begin_record();
    undo.begin_register_create_object(&copy);
    undo.record_selection(selection);
    undo.end_record();

    undo.untracked(|| select(selection, &[id]));

    undo.begin_record();
    undo.register_created_object(&copy);
    undo.record_selection(selection);
    undo.end_record();

    copy
}

/// Deletes every object in `objects`, clearing the selection.
fn delete(
    undo: &mut dyn RuntimeUndo,
    selection: &Shared<Selection>,
    objects: &[&Shared<GameObject>],
) {
    undo.begin_record();
    for object in objects {
        undo.begin_destroy_object(object);
    }
    undo.record_selection(selection);
    undo.end_record();

    undo.untracked(|| select(selection, &[]));

    undo.begin_record();
    for object in objects {
        undo.destroy_object(object);
    }
    undo.record_selection(selection);
    undo.end_record();
}

#[test]
fn duplicate_undo_redo() {
    init_logging();
    let mut undo = UndoEngine::new(32).unwrap();
    let selection = shared(Selection::default());
    let cube = shared(GameObject::new(1, "cube"));
    select(&selection, &[1]);

    let copy = duplicate(&mut undo, &selection, &cube, 2);
    assert!(copy.read().active);
    assert_eq!(selection.read().objects, vec![2]);

    undo.undo();
    assert!(!copy.read().active);
    assert_eq!(selection.read().objects, vec![1]);

    undo.redo();
    assert!(copy.read().active);
    assert_eq!(selection.read().objects, vec![2]);
    assert_eq!(selection.read().active, Some(2));
}

#[test]
fn delete_multiple_then_undo() {
    init_logging();
    let mut undo = UndoEngine::new(32).unwrap();
    let selection = shared(Selection::default());
    let a = shared(GameObject::new(1, "a"));
    let b = shared(GameObject::new(2, "b"));
    select(&selection, &[2, 1]);

    delete(&mut undo, &selection, &[&a, &b]);
    assert!(!a.read().active && !b.read().active);
    assert!(selection.read().objects.is_empty());

    undo.undo();
    assert!(a.read().active && b.read().active);
    assert_eq!(selection.read().objects, vec![2, 1]);
    assert_eq!(selection.read().active, Some(2));
}

#[test]
fn undone_duplicate_is_destroyed_by_next_edit() {
    init_logging();
    let mut undo = UndoEngine::new(32).unwrap();
    let selection = shared(Selection::default());
    let cube = shared(GameObject::new(1, "cube"));

    let copy = duplicate(&mut undo, &selection, &cube, 2);
    undo.undo();
    assert!(!copy.read().destroyed);

    undo.record_value(&cube, |o| o.name.clone(), |o, v| o.name = v);
    assert!(copy.read().destroyed);
    assert!(!cube.read().destroyed);
}

#[test]
fn deleted_object_is_destroyed_when_evicted() {
    init_logging();
    let mut undo = UndoEngine::new(2).unwrap();
    let selection = shared(Selection::default());
    let cube = shared(GameObject::new(1, "cube"));

    delete(&mut undo, &selection, &[&cube]);
    assert!(!cube.read().destroyed);

    let other = shared(GameObject::new(9, "other"));
    undo.record_value(&other, |o| o.name.clone(), |o, v| o.name = v);
    assert!(!cube.read().destroyed);
    undo.record_value(&other, |o| o.name.clone(), |o, v| o.name = v);
    assert!(cube.read().destroyed);
}

#[test]
fn inspector_edit_of_whole_component() {
    init_logging();
    let mut undo = UndoEngine::new(32).unwrap();
    let cube = shared(GameObject::new(1, "cube"));
    let turned = Trs::identity().with_rotation(quat_from_rotation_y(0.5));

    undo.record_component(&cube);
    {
        let mut cube = cube.write();
        cube.name = "turned cube".into();
        cube.trs = turned;
    }
    undo.record_component(&cube);

    undo.undo();
    assert_eq!(cube.read().name, "cube");
    assert!(cube.read().trs.approx_eq(&Trs::identity()));

    undo.redo();
    assert_eq!(cube.read().name, "turned cube");
    assert!(cube.read().trs.approx_eq(&turned));
}

#[test]
fn drag_into_new_parent() {
    init_logging();
    let mut undo = UndoEngine::new(32).unwrap();
    let cube = shared(GameObject::new(1, "cube"));

    undo.begin_record();
    let before = Placement::of(&*cube.read());
    undo.record_transform(&cube, Some(before));
    undo.end_record();

    {
        let mut cube = cube.write();
        cube.set_placement(Some(7), 2);
        cube.trs.position = Vec3::new(-1.0, 0.0, 4.0);
    }

    undo.begin_record();
    let after = Placement::of(&*cube.read());
    undo.record_transform(&cube, Some(after));
    undo.end_record();

    undo.undo();
    assert_eq!(cube.read().parent, None);
    assert_eq!(cube.read().sibling_index, 0);
    assert!(cube.read().trs.approx_eq(&Trs::identity()));

    undo.redo();
    assert_eq!(cube.read().parent, Some(7));
    assert_eq!(cube.read().sibling_index, 2);
}

#[rstest]
#[case::purge(RestorePolicy::Purge, true)]
#[case::discard(RestorePolicy::Discard, false)]
fn leaving_play_mode(#[case] policy: RestorePolicy, #[case] destroyed: bool) {
    init_logging();
    let config = UndoConfig::default()
        .with_capacity(16)
        .with_restore_policy(policy);
    let mut undo = UndoEngine::with_config(config).unwrap();
    let selection = shared(Selection::default());
    let cube = shared(GameObject::new(1, "cube"));

    undo.record_value(&cube, |o| o.name.clone(), |o, v| o.name = v);
    undo.store();

    let spawned = duplicate(&mut undo, &selection, &cube, 2);
    undo.undo();
    assert!(!spawned.read().active);

    undo.restore();
    assert_eq!(spawned.read().destroyed, destroyed);
    assert_eq!(undo.undo_count(), 1);
}

#[test]
fn engine_from_toml_config() {
    init_logging();
    let config = UndoConfig::from_toml_str(
        r#"
        capacity = 3
        restore_policy = "discard"
        "#,
    )
    .unwrap();
    let mut undo = UndoEngine::with_config(config).unwrap();
    assert_eq!(undo.capacity(), 3);
    assert_eq!(undo.restore_policy(), RestorePolicy::Discard);
    assert!(undo.is_enabled());

    let cube = shared(GameObject::new(1, "cube"));
    for _ in 0..5 {
        undo.record_value(&cube, |o| o.id, |o, v| o.id = v);
    }
    assert_eq!(undo.undo_count(), 3);
}
