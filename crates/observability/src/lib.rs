//! Tracing/logging setup shared by the workspace binaries.

/// Initialize process-wide structured (JSON) logging. Used by the HTTP server.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::Json);
}

/// Initialize human-readable single-line logging. Used by command-line tools.
pub fn init_compact() {
    tracing::init(tracing::LogFormat::Compact);
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
