//! Error type for the reducer store.
//!
//! # Design
//! There is exactly one failure mode: a raw action whose discriminator no
//! transition function handles. Store construction and snapshot reads never
//! fail, and typed dispatch cannot fail because the action enum is matched
//! exhaustively.

use std::fmt;

/// Errors returned by `Store::dispatch_raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The raw action's `type` discriminator is not handled by the store's
    /// action type. The dispatch is refused and the state is unchanged.
    UnrecognizedAction { kind: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnrecognizedAction { kind } => {
                write!(f, "unrecognized action type: {kind:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
