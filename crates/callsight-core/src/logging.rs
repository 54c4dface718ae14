//! Structured logging field name constants for callsight.
//!
//! All crates use these constants for consistent structured logging fields so
//! log aggregation tools can query by standardized names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, job completions |
//! | DEBUG | Decision points, intermediate values, config choices |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "db", "inference", "jobs"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "processor", "runner", "status", "pool", "openai"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "process", "complete", "mark_running", "is_completed"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// External job identifier (one call recording).
pub const MEDIA_CODE: &str = "media_code";

/// Pipeline stage being processed ("transcript" / "analysis").
pub const STAGE: &str = "stage";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of user questions in a prompt spec.
pub const PROMPT_COUNT: &str = "prompt_count";

/// Number of messages in the window sent to the completion service.
pub const WINDOW_LEN: &str = "window_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of rows affected by a status write.
pub const ROWS_AFFECTED: &str = "rows_affected";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for completion.
pub const MODEL: &str = "model";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
