//! Logging setup shared by hosts embedding the shipping-rate crates.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! embedding process's job.

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
