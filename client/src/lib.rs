//! API client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host — a UI layer or a
//! test harness — executes the actual HTTP round-trip, making the core fully
//! deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - Each operation (list, get by id, create) is split into `build_*`
//!   (produces request) and `parse_*` (consumes response), so the I/O
//!   boundary is explicit.
//! - All failures surface as typed `ApiError` values; raw transport errors
//!   are never passed through to callers.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo};
