//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are described as plain data. The client builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — the host is responsible for executing the actual
//! I/O. This keeps the client deterministic: unit tests exercise the full
//! build/parse surface without a socket in sight.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods. The host executes this request
/// against the network and returns the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `TodoClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
