//! Accepted-connection session and the read-until-close relay.
//!
//! # Responsibilities
//! - Own the accepted peer socket for its lifetime
//! - Relay every received chunk to the output sink in arrival order
//! - Classify how the session ended (peer close, read error, sink error)

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global atomic counter for session IDs.
/// Relaxed ordering is sufficient since we only need uniqueness.
static SESSION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a session, used to correlate log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Generate a new unique session ID.
    pub fn new() -> Self {
        Self(SESSION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// How a session ended.
///
/// None of these are failures of the serve: a session that ends abruptly has
/// already delivered whatever bytes arrived, and there is no retry semantic
/// for a broken connection.
#[derive(Debug)]
pub enum SessionEnd {
    /// Zero-length read: the client closed its end.
    PeerClosed,
    /// Transport-level read error after the connection was established.
    ReadError(io::Error),
    /// The output sink rejected a write.
    SinkError(io::Error),
}

impl SessionEnd {
    /// True for a client-initiated, graceful close.
    pub fn is_clean(&self) -> bool {
        matches!(self, SessionEnd::PeerClosed)
    }
}

impl std::fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEnd::PeerClosed => write!(f, "peer closed"),
            SessionEnd::ReadError(e) => write!(f, "read error: {}", e),
            SessionEnd::SinkError(e) => write!(f, "sink error: {}", e),
        }
    }
}

/// Result of relaying one session to completion.
#[derive(Debug)]
pub struct SessionOutcome {
    /// Total bytes received and written to the sink.
    pub bytes_received: u64,
    /// How the session ended.
    pub end: SessionEnd,
}

/// One accepted client connection.
///
/// The peer socket is owned exclusively by this value and closed when it is
/// dropped, on every exit path of the relay.
pub struct Session {
    stream: TcpStream,
    peer_addr: SocketAddr,
    id: SessionId,
    read_buffer_bytes: usize,
}

impl Session {
    /// Wrap an accepted stream in a session.
    pub fn new(stream: TcpStream, peer_addr: SocketAddr, read_buffer_bytes: usize) -> Self {
        Self {
            stream,
            peer_addr,
            id: SessionId::new(),
            read_buffer_bytes,
        }
    }

    /// Get this session's ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Get the peer's address.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Relay all bytes from the peer to `sink` until the session ends.
    ///
    /// Blocks on each read. Every non-empty chunk is written to the sink
    /// verbatim, in arrival order, and flushed before the next read. The loop
    /// ends on a zero-length read (peer close), a read error, or a sink
    /// write failure; interrupted reads are retried.
    pub fn relay_to<W: Write>(mut self, sink: &mut W) -> SessionOutcome {
        let mut buf = vec![0u8; self.read_buffer_bytes];
        let mut bytes_received: u64 = 0;

        let end = loop {
            match self.stream.read(&mut buf) {
                Ok(0) => break SessionEnd::PeerClosed,
                Ok(n) => {
                    if let Err(e) = sink.write_all(&buf[..n]).and_then(|()| sink.flush()) {
                        break SessionEnd::SinkError(e);
                    }
                    bytes_received += n as u64;
                    tracing::trace!(session_id = %self.id, bytes = n, "Chunk relayed");
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => break SessionEnd::ReadError(e),
            }
        };

        tracing::debug!(
            session_id = %self.id,
            peer_addr = %self.peer_addr,
            bytes_received,
            end = %end,
            "Session ended"
        );

        SessionOutcome { bytes_received, end }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::trace!(session_id = %self.id, "Peer socket released");
    }
}
