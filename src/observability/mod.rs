//! Observability subsystem.
//!
//! # Responsibilities
//! - Initialize structured logging
//!
//! # Design Decisions
//! - Diagnostics are written to stderr: stdout is the byte sink and must
//!   carry nothing but received payload

pub mod logging;
