//! Network Layer: TCP Accept Loop
//!
//! Menggunakan mio untuk non-blocking I/O (epoll/kqueue/IOCP).
//! Packet framing dan per-connection handling belum ada.

mod config;
mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use server::Server;
