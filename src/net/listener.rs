//! TCP listener setup and single accept.
//!
//! # Responsibilities
//! - Create an IPv4 stream socket with `SO_REUSEADDR` set
//! - Bind to the wildcard address on the configured port
//! - Listen with a minimal backlog
//! - Accept exactly one inbound connection per serve
//!
//! `std::net::TcpListener::bind` exposes neither the reuse-address option nor
//! the backlog, so the socket is built through `socket2` and converted once it
//! is listening.

use std::net::{Ipv4Addr, SocketAddr, TcpListener};

use socket2::{Domain, Socket, Type};
use thiserror::Error;

use crate::config::ListenerConfig;
use crate::net::session::Session;

/// Error type for listener operations.
///
/// Both variants are fatal for the invocation: a serve that fails to bind
/// never reaches accept, and a serve that fails to accept never reaches the
/// relay loop.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Socket creation, bind, or listen failed.
    #[error("failed to bind: {0}")]
    Bind(#[source] std::io::Error),
    /// Failed to accept a connection.
    #[error("failed to accept: {0}")]
    Accept(#[source] std::io::Error),
}

/// A bound, listening TCP socket that accepts a single connection.
///
/// The listening socket is closed when this value is dropped, on every exit
/// path, so a port is always released by the time a serve returns.
pub struct Listener {
    /// The underlying TCP listener.
    inner: TcpListener,
    /// Read buffer size handed to accepted sessions.
    read_buffer_bytes: usize,
}

impl Listener {
    /// Bind to the wildcard IPv4 address on the configured port.
    ///
    /// Sets `SO_REUSEADDR` before binding so repeated runs on the same port
    /// do not fail spuriously on lingering `TIME_WAIT` sockets. Port 0
    /// requests an ephemeral port from the OS; use [`Listener::local_addr`]
    /// to discover the assigned port.
    pub fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let socket =
            Socket::new(Domain::IPV4, Type::STREAM, None).map_err(ListenerError::Bind)?;
        socket.set_reuse_address(true).map_err(ListenerError::Bind)?;

        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
        socket.bind(&addr.into()).map_err(ListenerError::Bind)?;

        let backlog = i32::try_from(config.backlog).unwrap_or(i32::MAX);
        socket.listen(backlog).map_err(ListenerError::Bind)?;

        let listener: TcpListener = socket.into();
        let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

        tracing::info!(
            address = %local_addr,
            backlog = config.backlog,
            "Listener bound"
        );

        Ok(Self {
            inner: listener,
            read_buffer_bytes: config.read_buffer_bytes,
        })
    }

    /// Block until one inbound connection arrives and return it as a session.
    pub fn accept(&self) -> Result<Session, ListenerError> {
        let (stream, addr) = self.inner.accept().map_err(ListenerError::Accept)?;

        let session = Session::new(stream, addr, self.read_buffer_bytes);

        tracing::debug!(
            peer_addr = %addr,
            session_id = %session.id(),
            "Connection accepted"
        );

        Ok(session)
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }
}
