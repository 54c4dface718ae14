//! # callsight-jobs
//!
//! The stage-gated, idempotent feedback job processor.
//!
//! This crate provides:
//! - [`JobProcessor`] — idempotency check → claim → conversation run →
//!   terminal resolution, with at-most-once processing per
//!   (media code, stage)
//! - [`ConversationRunner`] — the bounded-window multi-turn driver
//! - [`StaticPromptCatalog`] — the built-in prompt sequence
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use callsight_core::Stage;
//! use callsight_db::Database;
//! use callsight_inference::OpenAICompletionClient;
//! use callsight_jobs::JobProcessor;
//!
//! let db = Database::connect("postgres://…").await?;
//! let client = Arc::new(OpenAICompletionClient::from_env()?);
//!
//! let processor = JobProcessor::new(
//!     Arc::new(db.status),
//!     Arc::new(db.conversations),
//!     Arc::new(db.prompts),
//!     client,
//!     Stage::Analysis,
//! );
//!
//! processor.process(&event).await?;
//! ```

pub mod processor;
pub mod prompts;
pub mod runner;

// Re-export core types
pub use callsight_core::*;

pub use processor::JobProcessor;
pub use prompts::StaticPromptCatalog;
pub use runner::ConversationRunner;
