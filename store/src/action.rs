//! Wire form of a dispatched action.
//!
//! # Design
//! A UI layer emits actions as tagged JSON objects, `{"type": "...",
//! "payload": ...}`. `RawAction` is that shape as plain data; converting it
//! into a concrete action enum happens at the store boundary via `TryFrom`,
//! which is where an unknown discriminator is rejected.

use serde::{Deserialize, Serialize};

/// A tagged action as produced by a host UI: a `type` discriminator plus an
/// optional payload. The payload is carried opaquely; each action type
/// decides whether to use it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl RawAction {
    /// A payload-less action with the given discriminator.
    pub fn of_kind(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            payload: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_type_only_object() {
        let raw: RawAction = serde_json::from_str(r#"{"type":"increment"}"#).unwrap();
        assert_eq!(raw.kind, "increment");
        assert!(raw.payload.is_none());
    }

    #[test]
    fn deserializes_with_payload() {
        let raw: RawAction =
            serde_json::from_str(r#"{"type":"decrement","payload":{"step":2}}"#).unwrap();
        assert_eq!(raw.kind, "decrement");
        assert_eq!(raw.payload.unwrap()["step"], 2);
    }

    #[test]
    fn serializes_without_null_payload() {
        let raw = RawAction::of_kind("increment");
        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"type":"increment"}"#);
    }

    #[test]
    fn rejects_missing_type_field() {
        let result: Result<RawAction, _> = serde_json::from_str(r#"{"payload":1}"#);
        assert!(result.is_err());
    }
}
