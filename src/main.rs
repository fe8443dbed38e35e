//! Diagnostic TCP listener.
//!
//! Binds a single IPv4 port, accepts one client connection, prints every
//! received byte to stdout, and exits when that client disconnects.
//!
//! ```text
//!     client ──TCP──▶ listener ──accept──▶ session ──bytes──▶ stdout
//!                                                (diagnostics → stderr)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use portsink::config::{load_config, SinkConfig};
use portsink::net::serve_once;
use portsink::observability::logging;
use portsink::version;

#[derive(Parser)]
#[command(name = "portsink")]
#[command(version, about = "One-shot diagnostic TCP listener: accepts a single client and streams its bytes to stdout", long_about = None)]
struct Cli {
    /// TCP port to listen on; overrides the config file [default: 9000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                // Logging is not up yet; report directly on stderr.
                eprintln!("portsink: {}", err);
                return ExitCode::FAILURE;
            }
        },
        None => SinkConfig::default(),
    };
    if let Some(port) = cli.port {
        config.listener.port = port;
    }

    logging::init(&config.log.filter);

    // Echo the invocation once for diagnostics.
    tracing::debug!(argv = ?std::env::args().collect::<Vec<_>>(), "Invocation");

    tracing::info!(
        version = version::version(),
        port = config.listener.port,
        "portsink starting"
    );

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    match serve_once(&config.listener, &mut sink) {
        Ok(outcome) => {
            tracing::info!(
                bytes_received = outcome.bytes_received,
                end = %outcome.end,
                "Server exited"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Fatal listener failure");
            ExitCode::FAILURE
        }
    }
}
