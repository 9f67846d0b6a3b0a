//! Tracing/logging setup shared by warehouse binaries.

/// Initialize process-wide logging with the format chosen by the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
