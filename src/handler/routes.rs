//! Route table module
//!
//! The API surface is a closed set of exact-match paths. Each known route
//! carries a canned JSON message; everything else is a 404.

/// Known API routes, matched by exact path equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    /// `/api/ping` - deployment liveness ping
    Ping,
    /// `/api/demo` - demo endpoint
    Demo,
}

impl ApiRoute {
    /// Look up a route by exact path. No prefix or wildcard matching.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/api/ping" => Some(Self::Ping),
            "/api/demo" => Some(Self::Demo),
            _ => None,
        }
    }

    /// The path this route is served under
    pub const fn path(self) -> &'static str {
        match self {
            Self::Ping => "/api/ping",
            Self::Demo => "/api/demo",
        }
    }

    /// Canned response message for this route
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ping => "Hello from Vercel serverless function!",
            Self::Demo => "Hello from demo API!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_exact() {
        assert_eq!(ApiRoute::from_path("/api/ping"), Some(ApiRoute::Ping));
        assert_eq!(ApiRoute::from_path("/api/demo"), Some(ApiRoute::Demo));
    }

    #[test]
    fn test_from_path_no_prefix_match() {
        // Exact match only: sub-paths and near-misses fall through
        assert_eq!(ApiRoute::from_path("/api/ping/"), None);
        assert_eq!(ApiRoute::from_path("/api/ping/extra"), None);
        assert_eq!(ApiRoute::from_path("/api"), None);
        assert_eq!(ApiRoute::from_path("/"), None);
        assert_eq!(ApiRoute::from_path(""), None);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [ApiRoute::Ping, ApiRoute::Demo] {
            assert_eq!(ApiRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiRoute::Ping.message(),
            "Hello from Vercel serverless function!"
        );
        assert_eq!(ApiRoute::Demo.message(), "Hello from demo API!");
    }
}
