//! Shared utilities for integration testing.

use std::io::Write;
use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::thread::{self, JoinHandle};

use portsink::config::ListenerConfig;
use portsink::net::{Listener, ListenerError, SessionOutcome};

/// A listener config bound to an OS-assigned ephemeral port.
pub fn ephemeral_config() -> ListenerConfig {
    ListenerConfig {
        port: 0,
        ..ListenerConfig::default()
    }
}

/// Loopback address for a port bound on the wildcard address.
pub fn loopback(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, port))
}

/// Bind in the calling thread (so the assigned port is known before any
/// client connects), then accept and relay one session on a background
/// thread, capturing the sink.
pub fn serve_one_in_background(
    config: &ListenerConfig,
) -> (
    SocketAddr,
    JoinHandle<Result<(SessionOutcome, Vec<u8>), ListenerError>>,
) {
    let listener = Listener::bind(config).expect("bind should succeed");
    let port = listener.local_addr().expect("local_addr").port();

    let handle = thread::spawn(move || {
        let session = listener.accept()?;
        let mut sink = Vec::new();
        let outcome = session.relay_to(&mut sink);
        Ok((outcome, sink))
    });

    (loopback(port), handle)
}

/// Connect, send each chunk as a separate write, then close the connection.
#[allow(dead_code)]
pub fn send_chunks_and_close(addr: SocketAddr, chunks: &[&[u8]]) {
    let mut stream = TcpStream::connect(addr).expect("connect should succeed");
    for chunk in chunks {
        stream.write_all(chunk).expect("write should succeed");
        stream.flush().expect("flush should succeed");
    }
}
