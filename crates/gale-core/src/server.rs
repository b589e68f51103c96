//! Connection handling
//!
//! One request per connection: read the head, dispatch, write the response,
//! close. The accept loop itself lives in the server binary; each accepted
//! connection is independent and shares only read-only state.

use crate::{Dispatcher, Fetch, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, ToSocketAddrs};
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub hostname: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hostname: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

impl ServerConfig {
    /// The address the listener binds to
    pub fn addr(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}

/// Create the listening socket with the usual options applied
pub fn bind_listener(config: &ServerConfig) -> std::io::Result<std::net::TcpListener> {
    let addr: SocketAddr = config
        .addr()
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| std::io::Error::other("could not resolve bind address"))?;

    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR - allow binding to an address in TIME_WAIT
    socket.set_reuse_address(true)?;

    // TCP_NODELAY - disable Nagle's algorithm for lower latency
    socket.set_nodelay(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    Ok(socket.into())
}

/// Serve a single connection: one request in, one response out.
///
/// The per-connection RNG is seeded from system entropy; it only has to be
/// uniform, not cryptographically strong.
pub async fn serve_connection<F: Fetch>(
    stream: TcpStream,
    dispatcher: &Dispatcher<F>,
) -> Result<()> {
    let mut rng = StdRng::from_os_rng();
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let bytes = dispatcher.respond(&mut reader, &mut rng).await;

    write_half.write_all(&bytes).await?;
    write_half.flush().await?;
    write_half.shutdown().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 9000);
        assert_eq!(config.addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_bind_listener_ephemeral_port() {
        let config = ServerConfig {
            hostname: "127.0.0.1".to_string(),
            port: 0,
        };
        let listener = bind_listener(&config).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
