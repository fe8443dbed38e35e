//! Version reporting for startup diagnostics.

/// The crate version as baked in at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
