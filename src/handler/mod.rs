//! Request handler module
//!
//! Routing dispatch for the API surface: a closed set of exact-match routes
//! with a JSON 404 fallback.

pub mod router;
pub mod routes;

// Re-export main entry point
pub use router::handle_request;
