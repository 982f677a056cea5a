//! Tests for the state holder and its navigation binding.

use super::*;
use crate::model::Filter;
use crate::navigation::MemoryLocation;

fn add(field: &str) -> Action {
    Action::AddField {
        field: field.to_string(),
        pos: None,
    }
}

fn store_with(fragment: &str) -> Store<MemoryLocation> {
    Store::new(MemoryLocation::new(fragment))
}

#[test]
fn starts_empty_without_fragment() {
    let store = store_with("");
    assert_eq!(store.state(), &State::default());
}

#[test]
fn starts_empty_with_malformed_fragment() {
    let store = store_with("%7Bgarbage");
    assert_eq!(store.state(), &State::default());
}

#[test]
fn restores_state_from_fragment() {
    let mut original = store_with("");
    original.dispatch(add("ts"));
    original.dispatch(Action::FilterPresent {
        field: "ts".to_string(),
        present: true,
    });

    let restored = store_with(&original.location().read());
    assert_eq!(restored.state(), original.state());
}

#[test]
fn dispatch_writes_encoded_state() {
    let mut store = store_with("");
    store.dispatch(add("a"));
    assert_eq!(store.location().read(), fragment::encode(store.state()));
    assert_eq!(store.state().fields, vec!["a".to_string()]);
}

#[test]
fn dispatch_replaces_history_entry_instead_of_pushing() {
    let mut store = store_with("");
    store.dispatch(add("a"));
    store.dispatch(add("b"));
    assert_eq!(store.location().len(), 1);
}

#[test]
fn dispatch_does_not_trigger_navigation() {
    let mut store = store_with("");
    store.dispatch(add("a"));
    assert!(!store.sync_navigation());
}

#[test]
fn back_navigation_restores_previous_dataset_state() {
    let mut store = store_with("");
    store.dispatch(add("a"));
    let first = store.state().clone();

    // Selecting another dataset pushes a fresh entry.
    store.location_mut().push("");
    assert!(!store.sync_navigation());
    store.dispatch(Action::Replace(State::default().into()));
    store.dispatch(add("z"));

    assert!(store.location_mut().back());
    assert!(store.sync_navigation());
    assert_eq!(store.state(), &first);

    // The resync wrote the same state back without queuing another change.
    assert!(!store.sync_navigation());
    assert_eq!(store.location().read(), fragment::encode(&first));
}

#[test]
fn navigation_to_malformed_fragment_resets_state() {
    let mut store = store_with("");
    store.dispatch(add("a"));
    store.location_mut().push("%7Bbroken");
    store.location_mut().back();
    store.location_mut().forward();

    assert!(store.sync_navigation());
    assert_eq!(store.state(), &State::default());
}

#[test]
fn navigation_with_partial_fragment_keeps_unlisted_keys() {
    let mut store = store_with("");
    store.dispatch(Action::FilterPresent {
        field: "ts".to_string(),
        present: false,
    });

    store.location_mut().push(r#"{"fields":["x"]}"#);
    store.location_mut().back();
    store.location_mut().forward();
    assert!(store.sync_navigation());

    assert_eq!(store.state().fields, vec!["x".to_string()]);
    assert_eq!(
        store.state().filter_for("ts"),
        Some(&Filter::Present { present: false })
    );
}

#[test]
fn sync_without_change_is_noop() {
    let mut store = store_with("");
    store.dispatch(add("a"));
    let before = store.state().clone();
    assert!(!store.sync_navigation());
    assert_eq!(store.state(), &before);
}
