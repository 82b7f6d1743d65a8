//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Every request resolves to exactly
//! one response: a preflight answer, a canned route body, or a 404 echoing
//! the unmatched path. Dispatch ignores the request method except for the
//! OPTIONS short-circuit, and never reads the request body.

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::routes::ApiRoute;
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);

    let response = respond(&method, &path);

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        let mut entry = AccessLogEntry::new(peer_addr.to_string(), method.to_string(), path);
        entry.query = query;
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Map a method and path to a response.
///
/// Total over all inputs: every method x path combination yields a defined
/// response, and the preflight check runs before any routing is evaluated.
pub fn respond(method: &Method, path: &str) -> Response<Full<Bytes>> {
    // CORS preflight short-circuit: 200, empty body, no routing
    if *method == Method::OPTIONS {
        return http::build_preflight_response();
    }

    match ApiRoute::from_path(path) {
        Some(route) => http::build_json_response(
            StatusCode::OK,
            &serde_json::json!({ "message": route.message() }),
        ),
        None => http::build_not_found_response(path),
    }
}
