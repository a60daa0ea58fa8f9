//! Counter state and actions, the reference use of the reducer store.
//!
//! # Design
//! `CounterAction` is a closed enum, so the reducer's match is exhaustive
//! and typed dispatch cannot hit an unknown action. The runtime
//! "unrecognized action" failure only exists at the `RawAction` boundary,
//! where discriminators arrive as strings from the host UI.

use serde::{Deserialize, Serialize};

use crate::action::RawAction;
use crate::error::StoreError;
use crate::store::Store;

/// State for the counter example. Serializable so a host UI can render it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

/// Recognized counter actions. Neither carries a payload; a `RawAction`
/// payload is ignored during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl TryFrom<&RawAction> for CounterAction {
    type Error = StoreError;

    fn try_from(raw: &RawAction) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "increment" => Ok(CounterAction::Increment),
            "decrement" => Ok(CounterAction::Decrement),
            other => Err(StoreError::UnrecognizedAction {
                kind: other.to_string(),
            }),
        }
    }
}

/// Transition function for the counter. Increment adds exactly 1, decrement
/// subtracts exactly 1; there is no floor, so the count may go negative.
pub fn reduce(prev: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => CounterState {
            count: prev.count + 1,
        },
        CounterAction::Decrement => CounterState {
            count: prev.count - 1,
        },
    }
}

/// A store wired to the counter reducer, starting from `count`.
pub fn counter_store(count: i64) -> Store<CounterState, CounterAction> {
    Store::new(CounterState { count }, reduce)
}
