//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal config works.

use serde::{Deserialize, Serialize};

/// Root configuration for the diagnostic listener.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SinkConfig {
    /// Listener configuration (port, backlog, read buffer).
    pub listener: ListenerConfig,

    /// Logging settings.
    pub log: LogConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// TCP port to bind on all IPv4 interfaces. Port 0 requests an ephemeral
    /// port from the OS.
    pub port: u16,

    /// Accept queue depth. One pending connection suffices for a listener
    /// that accepts exactly once per serve.
    pub backlog: u32,

    /// Read buffer size in bytes. Affects throughput only; any size >= 1
    /// delivers bytes unchanged.
    pub read_buffer_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port: 9000,
            backlog: 1,
            read_buffer_bytes: 4096,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default tracing filter, overridden by `RUST_LOG` when set.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "portsink=info".to_string(),
        }
    }
}
