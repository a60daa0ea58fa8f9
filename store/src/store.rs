//! Generic reducer store.
//!
//! # Design
//! The store pairs a state value with a transition function and exposes two
//! entry points: `dispatch` for already-typed actions and `dispatch_raw` for
//! tagged values arriving from a host UI. The reducer is a plain `fn`
//! pointer taking the previous state by reference and returning the next
//! state, which keeps transitions pure by construction — they cannot hold
//! captured mutable environment.

use crate::action::RawAction;
use crate::error::StoreError;

/// Pure transition function: computes the next state from the previous state
/// and an action. Must not mutate the previous state or reach into external
/// mutable state.
pub type Reducer<S, A> = fn(&S, &A) -> S;

/// Owner of the current state value plus the dispatch entry point.
///
/// The state is created once at construction, replaced (never mutated) on
/// every successful dispatch, and dropped with the store.
#[derive(Debug)]
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
}

impl<S, A> Store<S, A> {
    /// Create a store holding `initial_state`. Accepts any value of the
    /// state type; never fails.
    pub fn new(initial_state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state: initial_state,
            reducer,
        }
    }

    /// The latest state snapshot. The store is always fully in one state or
    /// another, never in-between.
    pub fn current(&self) -> &S {
        &self.state
    }

    /// Apply the transition function and replace the current state with its
    /// result, returning the new state.
    ///
    /// Typed dispatch is infallible: every variant of the action enum is
    /// handled by the reducer's exhaustive match.
    pub fn dispatch(&mut self, action: &A) -> &S {
        self.state = (self.reducer)(&self.state, action);
        &self.state
    }

    /// Decode a tagged value into an action, then dispatch it.
    ///
    /// An unrecognized `type` discriminator fails with
    /// `StoreError::UnrecognizedAction` before the reducer runs; the stored
    /// state is untouched and the store remains usable.
    pub fn dispatch_raw(&mut self, raw: &RawAction) -> Result<&S, StoreError>
    where
        A: for<'r> TryFrom<&'r RawAction, Error = StoreError>,
    {
        let action = A::try_from(raw)?;
        Ok(self.dispatch(&action))
    }
}
