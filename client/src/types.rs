//! Domain DTOs for the todo API.
//!
//! # Design
//! Ids are sequential integers assigned by the server, so `u64` rather than
//! a UUID. The types mirror the mock-server's schema but are defined
//! independently; integration tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 12,
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }
}
