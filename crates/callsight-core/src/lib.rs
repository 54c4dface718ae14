//! # callsight-core
//!
//! Core types, traits, and abstractions for the callsight feedback pipeline.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other callsight crates depend on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{
    Feedback, Message, ProcessEvent, PromptSpec, Role, Stage, StageState, StageStatus, Transcript,
};
pub use traits::{CompletionClient, ConversationStore, PromptCatalog, StatusStore};
