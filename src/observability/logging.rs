//! Structured logging.
//!
//! # Responsibilities
//! - Install the global tracing subscriber
//! - Honor `RUST_LOG` when set, fall back to the configured filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Events go to stderr so the stdout byte sink stays clean

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset. Panics if a global
/// subscriber is already installed, so call this once at startup.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
