//! Reducer-based state container.
//!
//! # Overview
//! A `Store` owns a single state value and replaces it through a pure
//! transition function in response to dispatched actions. State is never
//! mutated in place: each dispatch derives a fresh value from the previous
//! state and the action, so readers always observe the store fully in one
//! state or another.
//!
//! # Design
//! - The store is an explicitly owned value passed to whoever needs to read
//!   or dispatch — no process-wide singleton.
//! - Recognized actions are a plain enum, so typed dispatch is infallible;
//!   the match inside the reducer is exhaustive.
//! - Untrusted tagged values (`{"type": ..., "payload": ...}`) enter through
//!   `dispatch_raw`, which rejects unknown discriminators with
//!   `UnrecognizedAction` before the reducer ever runs.
//! - `dispatch` takes `&mut self`, so the borrow checker already serializes
//!   dispatches; a multi-threaded host adds its own lock around the store.

pub mod action;
pub mod counter;
pub mod error;
pub mod store;

pub use action::RawAction;
pub use counter::{CounterAction, CounterState};
pub use error::StoreError;
pub use store::{Reducer, Store};
