//! Counter lifecycle tests driving the store the way a host UI would:
//! actions arrive as tagged JSON values and the state is read back after
//! every dispatch.

use reducer_store::{counter::counter_store, CounterAction, CounterState, RawAction, StoreError};

/// Decode a JSON action string as the UI event layer would emit it.
fn raw(json: &str) -> RawAction {
    serde_json::from_str(json).unwrap()
}

#[test]
fn increment_from_zero() {
    let mut store = counter_store(0);
    store.dispatch_raw(&raw(r#"{"type":"increment"}"#)).unwrap();
    assert_eq!(store.current(), &CounterState { count: 1 });
}

#[test]
fn three_decrements_from_five() {
    let mut store = counter_store(5);
    for _ in 0..3 {
        store.dispatch_raw(&raw(r#"{"type":"decrement"}"#)).unwrap();
    }
    assert_eq!(store.current(), &CounterState { count: 2 });
}

#[test]
fn n_increments_raise_count_by_n() {
    for start in [-4i64, 0, 17] {
        let mut store = counter_store(start);
        let n = 25;
        for _ in 0..n {
            store.dispatch(&CounterAction::Increment);
        }
        assert_eq!(store.current().count, start + n);
    }
}

#[test]
fn increment_then_decrement_is_identity() {
    for start in [-1i64, 0, 42] {
        let mut store = counter_store(start);
        store.dispatch(&CounterAction::Increment);
        store.dispatch(&CounterAction::Decrement);
        assert_eq!(store.current(), &CounterState { count: start });
    }
}

#[test]
fn reset_is_rejected_and_state_preserved() {
    let mut store = counter_store(0);
    let err = store.dispatch_raw(&raw(r#"{"type":"reset"}"#)).unwrap_err();
    assert_eq!(
        err,
        StoreError::UnrecognizedAction {
            kind: "reset".to_string()
        }
    );
    assert_eq!(store.current(), &CounterState { count: 0 });

    // The failed dispatch is fatal to that call only.
    store.dispatch_raw(&raw(r#"{"type":"increment"}"#)).unwrap();
    assert_eq!(store.current(), &CounterState { count: 1 });
}

#[test]
fn mixed_sequence_of_ui_events() {
    let mut store = counter_store(0);
    let events = [
        r#"{"type":"increment"}"#,
        r#"{"type":"increment"}"#,
        r#"{"type":"decrement"}"#,
        r#"{"type":"increment","payload":null}"#,
    ];
    for event in events {
        store.dispatch_raw(&raw(event)).unwrap();
    }
    assert_eq!(store.current(), &CounterState { count: 2 });
}
