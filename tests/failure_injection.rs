//! Failure-path coverage: setup failures on occupied ports and sessions cut
//! short by a connection reset.

mod common;

use std::time::Duration;

use socket2::{Domain, Socket, Type};

use common::{ephemeral_config, serve_one_in_background};
use portsink::config::ListenerConfig;
use portsink::net::{serve_once, Listener, ListenerError};

#[test]
fn occupied_port_fails_setup_before_accept() {
    let holder = Listener::bind(&ephemeral_config()).expect("holder bind");
    let port = holder.local_addr().expect("local_addr").port();

    let config = ListenerConfig {
        port,
        ..ListenerConfig::default()
    };
    let mut sink = Vec::new();
    match serve_once(&config, &mut sink) {
        Err(ListenerError::Bind(_)) => {}
        Ok(_) => panic!("serving on an occupied port should fail"),
        Err(other) => panic!("expected Bind error, got {other}"),
    }
    assert!(sink.is_empty());
}

#[test]
fn connection_reset_ends_session_normally() {
    let (addr, server) = serve_one_in_background(&ephemeral_config());

    // Zero linger makes the close send RST instead of FIN, which surfaces on
    // the server as a read error rather than a clean peer close.
    let client = Socket::new(Domain::IPV4, Type::STREAM, None).expect("socket");
    client.connect(&addr.into()).expect("connect");
    client
        .set_linger(Some(Duration::from_secs(0)))
        .expect("set_linger");
    drop(client);

    // An abrupt end is still a completed serve, not an error.
    let (_outcome, _sink) = server
        .join()
        .expect("server thread")
        .expect("serve should return normally after a reset");
}

#[test]
fn port_released_after_abrupt_session_end() {
    let (addr, server) = serve_one_in_background(&ephemeral_config());

    let client = Socket::new(Domain::IPV4, Type::STREAM, None).expect("socket");
    client.connect(&addr.into()).expect("connect");
    client
        .set_linger(Some(Duration::from_secs(0)))
        .expect("set_linger");
    drop(client);

    server
        .join()
        .expect("server thread")
        .expect("serve should return normally after a reset");

    // The port must be free again even though the session ended abruptly.
    let config = ListenerConfig {
        port: addr.port(),
        ..ListenerConfig::default()
    };
    Listener::bind(&config).expect("rebinding the released port should succeed");
}
