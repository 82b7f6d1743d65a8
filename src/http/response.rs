//! HTTP response building module
//!
//! Builders for the handful of response shapes this server produces. Every
//! builder attaches the CORS header set and none of them can panic: a failed
//! build degrades to a plain fallback response and is logged.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::cors;
use crate::logger;

/// Build a JSON response with the given status
pub fn build_json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response body: {e}"));
            return build_fallback_response();
        }
    };

    cors::apply(Response::builder().status(status))
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_u16(), &e);
            build_fallback_response()
        })
}

/// Build the CORS preflight response: 200 with an empty body
pub fn build_preflight_response() -> Response<Full<Bytes>> {
    cors::apply(Response::builder().status(StatusCode::OK))
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the 404 response, echoing the unmatched path back to the caller
pub fn build_not_found_response(pathname: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "API endpoint not found",
        "pathname": pathname,
    });
    build_json_response(StatusCode::NOT_FOUND, &body)
}

/// Last-resort 500 when a response itself cannot be built
fn build_fallback_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(
        r#"{"error":"Internal server error"}"#,
    )));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

fn log_build_error(status: u16, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_json_response() {
        let body = serde_json::json!({"message": "pong"});
        let response = build_json_response(StatusCode::OK, &body);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");

        let bytes = body_bytes(response).await;
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["message"], "pong");
    }

    #[tokio::test]
    async fn test_preflight_response_empty_body() {
        let response = build_preflight_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("Access-Control-Allow-Methods"));

        let bytes = body_bytes(response).await;
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_echoes_pathname() {
        let response = build_not_found_response("/api/unknown");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = body_bytes(response).await;
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["error"], "API endpoint not found");
        assert_eq!(parsed["pathname"], "/api/unknown");
    }
}
