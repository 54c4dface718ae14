//! Tunable defaults shared across the callsight crates.

/// Maximum number of messages sent to the completion service per call.
///
/// The conversation history is truncated to this suffix before each request;
/// the system preamble is not pinned and drops out once the history exceeds
/// the window.
pub const MAX_WINDOW_MESSAGES: usize = 10;

/// Default completion request timeout in seconds.
pub const COMPLETION_TIMEOUT_SECS: u64 = 300;

/// Default maximum number of connections in the database pool.
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Default database connection acquire timeout in seconds.
pub const DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default idle connection timeout in seconds.
pub const DB_IDLE_TIMEOUT_SECS: u64 = 600;

/// Stage processed by a deployment unless overridden via `STAGE`.
pub const STAGE: &str = "analysis";

/// Listen address for the HTTP entry point unless overridden via `BIND_ADDR`.
pub const BIND_ADDR: &str = "0.0.0.0:8000";
