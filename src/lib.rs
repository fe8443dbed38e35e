//! Diagnostic TCP Listener Library
//!
//! Binds one IPv4 port, accepts a single client connection, streams every
//! received byte to an output sink, and returns when the client disconnects.
//! Built for verifying network reachability and byte delivery, not for
//! serving traffic.

pub mod config;
pub mod net;
pub mod observability;
pub mod version;

pub use config::{ListenerConfig, SinkConfig};
pub use net::{serve_once, Listener, ListenerError, SessionEnd, SessionOutcome};

use std::io;

/// Serve exactly one connection on `port`, relaying received bytes to stdout.
///
/// Blocks the calling thread until the client disconnects or a transport
/// error cuts the session short; both are normal returns carrying the
/// session outcome. Socket creation, bind, listen, and accept failures are
/// fatal and surface as `Err`. Port 0 requests an ephemeral port from the OS.
pub fn run(port: u16) -> Result<SessionOutcome, ListenerError> {
    let config = ListenerConfig {
        port,
        ..ListenerConfig::default()
    };

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    net::serve_once(&config, &mut sink)
}
