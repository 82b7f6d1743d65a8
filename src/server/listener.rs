// Listener module
// Creates the TCP listener the accept loop runs on

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// `SO_REUSEADDR` allows rebinding the port while the previous socket is
/// still in TIME_WAIT, so the server can be restarted immediately.
pub fn create_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_listener_ephemeral_port() {
        let addr = "127.0.0.1:0".parse().unwrap();
        let listener = create_listener(addr).unwrap();
        let local = listener.local_addr().unwrap();
        assert_ne!(local.port(), 0);
    }

    #[tokio::test]
    async fn test_rebind_same_port() {
        let addr = "127.0.0.1:0".parse().unwrap();
        let listener = create_listener(addr).unwrap();
        let local = listener.local_addr().unwrap();
        drop(listener);

        // SO_REUSEADDR makes the immediate rebind succeed
        let rebound = create_listener(local);
        assert!(rebound.is_ok());
    }
}
