//! CORS header module
//!
//! The API is consumed cross-origin by the portfolio frontend, so every
//! response carries the same permissive CORS header set, including 404s and
//! preflight answers.

use hyper::http::response::Builder;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Attach the CORS header set to a response builder
pub fn apply(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;
    use hyper::Response;

    #[test]
    fn test_apply_sets_all_three_headers() {
        let response = apply(Response::builder().status(200))
            .body(Full::new(Bytes::new()))
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            headers["Access-Control-Allow-Methods"],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers["Access-Control-Allow-Headers"],
            "Content-Type, Authorization"
        );
    }
}
