//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validate_config (semantic checks)
//!     → SinkConfig (immutable for the run)
//!     → CLI --port flag overrides the listener port
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the tool runs with no config file at all
//! - Config is read once at startup; the process serves one connection and
//!   exits, so there is nothing to reload

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError, ValidationError};
pub use schema::{ListenerConfig, LogConfig, SinkConfig};
