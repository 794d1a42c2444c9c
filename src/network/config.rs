//! Server configuration

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Default game port
pub const DEFAULT_PORT: u16 = 25565;

/// Accept loop settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Alamat listener
    pub bind_addr: SocketAddr,
    /// Kapasitas `mio::Events` per poll
    pub events_capacity: usize,
    /// Poll timeout; `None` blocks until the listener is readable
    pub poll_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            events_capacity: 128,
            poll_timeout: None,
        }
    }
}
