//! Bounded-context multi-turn conversation driver.

use std::sync::Arc;

use tracing::debug;

use callsight_core::{
    defaults, CompletionClient, Feedback, Message, PromptSpec, Result, Transcript,
};

/// Drives the prompt sequence against the completion service, one turn at a
/// time, truncating the accumulated history to a fixed window before each call.
///
/// The system preamble is not pinned: once the history outgrows the window the
/// oldest turns fall out, preamble first. Sequencing is strictly sequential —
/// each call depends on the previous reply — and the first failure aborts the
/// whole run with nothing persisted.
pub struct ConversationRunner {
    client: Arc<dyn CompletionClient>,
    window: usize,
}

impl ConversationRunner {
    /// Create a runner with the default window size.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            window: defaults::MAX_WINDOW_MESSAGES,
        }
    }

    /// Override the window size (clamped to at least 1).
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// The configured window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Run the full prompt sequence for one transcript.
    ///
    /// The conversation opens with the prompt spec's system preamble, then the
    /// transcript text as the first user turn, then each user question in
    /// order. One completion is requested per user turn. The returned
    /// feedback holds the accumulated exchange minus the system preamble, so
    /// the persisted artifact always starts with the transcript-derived turn.
    pub async fn run(&self, transcript: &Transcript, prompts: &PromptSpec) -> Result<Feedback> {
        let mut messages: Vec<Message> = prompts.system.clone();
        let preamble_len = messages.len();

        let mut turns = Vec::with_capacity(prompts.questions.len() + 1);
        turns.push(Message::user(transcript.text.clone()));
        turns.extend(prompts.questions.iter().cloned());

        for turn in turns {
            debug!(
                subsystem = "jobs",
                component = "runner",
                op = "ask",
                media_code = %transcript.media_code,
                prompt = %turn.content,
                "Asking"
            );

            messages.push(turn);

            let start = messages.len().saturating_sub(self.window);
            let reply = self.client.complete(&messages[start..]).await?;

            debug!(
                subsystem = "jobs",
                component = "runner",
                op = "ask",
                media_code = %transcript.media_code,
                window_len = messages.len() - start,
                response_len = reply.content.len(),
                "Reply received"
            );

            messages.push(reply);
        }

        Ok(Feedback {
            media_code: transcript.media_code.clone(),
            messages: messages.split_off(preamble_len),
        })
    }
}
