//! Socket handling: listener lifecycle and the accepted-session relay.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (reuse-addr socket, bind 0.0.0.0:port, listen)
//!     → accept (exactly one connection per serve)
//!     → session.rs (blocking read loop → output sink)
//!     → SessionOutcome
//! ```
//!
//! # Design Decisions
//! - Strictly blocking I/O on a single thread; the lifecycle is linear and
//!   each transition is irreversible
//! - Setup and accept failures are fatal for the serve; failures after the
//!   connection is established end the session and are reported in the
//!   outcome, not as errors

pub mod listener;
pub mod session;

use std::io::Write;

use crate::config::ListenerConfig;

pub use listener::{Listener, ListenerError};
pub use session::{Session, SessionEnd, SessionId, SessionOutcome};

/// Bind, accept one connection, and relay its bytes to `sink` until it ends.
///
/// Blocks the calling thread for the whole lifecycle. At most one accepted
/// connection exists at any time; the listening socket accepts exactly once
/// and both sockets are closed by the time this returns.
///
/// `Err` means the serve never completed a session: socket setup or the
/// single accept failed. A session cut short by a transport or sink error is
/// still `Ok` — the bytes that arrived were already delivered, and the
/// outcome records how the session ended.
pub fn serve_once<W: Write>(
    config: &ListenerConfig,
    sink: &mut W,
) -> Result<SessionOutcome, ListenerError> {
    let listener = Listener::bind(config)?;
    let session = listener.accept()?;
    Ok(session.relay_to(sink))
}
