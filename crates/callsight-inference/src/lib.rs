//! # callsight-inference
//!
//! Completion service adapter for callsight.
//!
//! This crate provides:
//! - The OpenAI-compatible [`CompletionClient`](callsight_core::CompletionClient)
//!   implementation used in production
//! - Chat completion wire types
//! - A scripted mock client (feature `mock`) for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use callsight_core::{CompletionClient, Message};
//! use callsight_inference::OpenAICompletionClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = OpenAICompletionClient::from_env().unwrap();
//!     let reply = client
//!         .complete(&[Message::user("Give me pros of the pitch")])
//!         .await
//!         .unwrap();
//!     println!("{}", reply.content);
//! }
//! ```

pub mod openai;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use callsight_core::*;

pub use openai::{OpenAICompletionClient, OpenAIConfig, DEFAULT_GEN_MODEL, DEFAULT_OPENAI_URL};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCompletionClient;
