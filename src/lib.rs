//! gomine - Game Server Network Skeleton
//!
//! Arsitektur:
//! - Network: mio accept loop, client handler masih no-op
//! - Protocol: cursor-based big-endian payload reader

pub mod network;
pub mod protocol;
