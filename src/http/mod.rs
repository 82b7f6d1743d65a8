//! HTTP protocol layer module
//!
//! Response building and CORS handling, decoupled from routing logic.

pub mod cors;
pub mod response;

pub use response::{build_json_response, build_not_found_response, build_preflight_response};
