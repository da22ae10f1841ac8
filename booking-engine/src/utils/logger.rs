//! Logging Infrastructure
//!
//! Structured logging setup for binaries and integration tests that
//! want engine events on stderr.

/// Initialize the logger at the default `info` level
pub fn init_logger() {
    init_logger_with_level("info");
}

/// Initialize the logger with an explicit level
pub fn init_logger_with_level(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
