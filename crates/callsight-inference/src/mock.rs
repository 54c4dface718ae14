//! Mock completion client for deterministic testing.
//!
//! Replies are scripted in order; once the script runs out the default reply
//! is used. Every received window is recorded for assertion.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = MockCompletionClient::new()
//!     .with_replies(["Pros: …", "Cons: …"])
//!     .failing_on_call(3, "rate limited");
//!
//! let reply = client.complete(&window).await?;
//! assert_eq!(client.call_count(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use callsight_core::{CompletionClient, Error, Message, Result};

/// Scripted mock implementation of [`CompletionClient`].
#[derive(Clone)]
pub struct MockCompletionClient {
    scripted: Arc<Mutex<VecDeque<String>>>,
    default_reply: String,
    fail_on_call: Option<(usize, String)>,
    calls: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockCompletionClient {
    /// Create a new mock client with a generic default reply.
    pub fn new() -> Self {
        Self {
            scripted: Arc::new(Mutex::new(VecDeque::new())),
            default_reply: "Mock reply".to_string(),
            fail_on_call: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the reply used once the script is exhausted.
    pub fn with_default_reply(mut self, reply: impl Into<String>) -> Self {
        self.default_reply = reply.into();
        self
    }

    /// Queue scripted replies, consumed in order.
    pub fn with_replies<I, S>(self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripted
            .lock()
            .unwrap()
            .extend(replies.into_iter().map(Into::into));
        self
    }

    /// Fail the n-th call (1-indexed) with the given message.
    pub fn failing_on_call(mut self, n: usize, message: impl Into<String>) -> Self {
        self.fail_on_call = Some((n, message.into()));
        self
    }

    /// All windows received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, messages: &[Message]) -> Result<Message> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(messages.to_vec());
            calls.len()
        };

        if let Some((n, ref message)) = self.fail_on_call {
            if call_number == n {
                return Err(Error::Completion(message.clone()));
            }
        }

        let reply = self
            .scripted
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_reply.clone());

        Ok(Message::assistant(reply))
    }
}
