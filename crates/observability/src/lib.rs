//! Tracing/logging setup shared by storefront binaries and tests.

/// Initialize process-wide tracing with the format chosen by
/// `COURTSIDE_LOG_FORMAT` (JSON unless set to `pretty`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    crate::tracing::init_with(LogFormat::from_env());
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use crate::tracing::{LOG_FORMAT_VAR, LogFormat, init_with};
