//! Accept loop dengan event-driven I/O
//!
//! Menggunakan mio untuk non-blocking accept. Setiap koneksi diserahkan ke
//! client handler, yang untuk sekarang langsung menutup stream.

use std::io;
use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use mio::net::{TcpListener as MioTcpListener, TcpStream};
use mio::{Events, Interest, Poll, Token};

use super::ServerConfig;

const SERVER_TOKEN: Token = Token(0);

/// Game server accept loop
///
/// Single-threaded: satu `Poll`, satu listener.
pub struct Server {
    poll: Poll,
    events: Events,
    listener: MioTcpListener,
    poll_timeout: Option<Duration>,
    accepted: u64,
}

impl Server {
    /// Bind listener dan register ke poll
    pub fn bind(config: &ServerConfig) -> io::Result<Self> {
        let poll = Poll::new()?;

        let listener = TcpListener::bind(config.bind_addr)?;
        listener.set_nonblocking(true)?;
        let mut listener = MioTcpListener::from_std(listener);

        poll.registry()
            .register(&mut listener, SERVER_TOKEN, Interest::READABLE)?;

        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            poll,
            events: Events::with_capacity(config.events_capacity),
            listener,
            poll_timeout: config.poll_timeout,
            accepted: 0,
        })
    }

    /// Address the listener actually bound to (useful with port 0).
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Total connections accepted since bind
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Run server event loop
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.poll_once(self.poll_timeout)?;
        }
    }

    /// One poll iteration. Returns the number of connections accepted.
    pub fn poll_once(&mut self, timeout: Option<Duration>) -> io::Result<usize> {
        match self.poll.poll(&mut self.events, timeout) {
            Ok(()) => {}
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => return Ok(0),
            Err(e) => return Err(e),
        }

        let listener_ready = self
            .events
            .iter()
            .any(|event| event.token() == SERVER_TOKEN);

        if !listener_ready {
            return Ok(0);
        }
        Ok(self.accept_connections())
    }

    /// Accept sampai WouldBlock
    fn accept_connections(&mut self) -> usize {
        let mut accepted = 0;
        loop {
            match self.listener.accept() {
                Ok((stream, addr)) => {
                    self.accepted += 1;
                    accepted += 1;
                    tracing::info!("New connection from {} (#{})", addr, self.accepted);
                    handle_client(stream, addr);
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(ref e) if is_per_connection_error(e) => {
                    // Readiness edge-triggered: backlog harus dikuras sampai WouldBlock
                    tracing::warn!("Accept error: {}", e);
                }
                Err(e) => {
                    // e.g. EMFILE; next readable event retries
                    tracing::warn!("Accept failed, pausing until next event: {}", e);
                    break;
                }
            }
        }
        accepted
    }
}

/// Errors that only affect the connection being accepted. The rest of the
/// backlog is still acceptable after one of these.
fn is_per_connection_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::Interrupted
    )
}

/// Per-connection handler. No packet handling exists yet; dropping the
/// stream closes it.
fn handle_client(stream: TcpStream, addr: SocketAddr) {
    tracing::debug!("Closing connection from {}", addr);
    drop(stream);
}
