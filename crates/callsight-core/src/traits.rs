//! Core traits for the pipeline's pluggable collaborators.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Feedback, Message, PromptSpec, Stage, Transcript};

/// Durable record of per-job, per-stage processing status.
///
/// Each write is a single statement scoped to rows matching the media code.
/// Writes for an unknown `media_code` affect zero rows and return `Ok` —
/// callers must not assume a silent miss raises.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// True iff the stage has already reached terminal success for this job.
    async fn is_completed(&self, media_code: &str, stage: Stage) -> Result<bool>;

    /// Claim the job by writing the `running` state.
    async fn mark_running(&self, media_code: &str, stage: Stage, comment: &str) -> Result<()>;

    /// Resolve the job as succeeded.
    async fn mark_succeeded(&self, media_code: &str, stage: Stage, comment: &str) -> Result<()>;

    /// Resolve the job as failed, recording the failure text as the comment.
    async fn mark_error(&self, media_code: &str, stage: Stage, comment: &str) -> Result<()>;
}

/// Durable store of transcript text (input) and feedback transcripts (output),
/// keyed by media code.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Fetch the transcript for a media code.
    ///
    /// Returns [`crate::Error::TranscriptNotFound`] when no transcript exists.
    async fn fetch_transcript(&self, media_code: &str) -> Result<Transcript>;

    /// Persist the feedback artifact. Reruns overwrite: last write wins.
    async fn store_feedback(&self, feedback: &Feedback) -> Result<()>;
}

/// Supplies the ordered prompt sequence to issue for a job.
#[async_trait]
pub trait PromptCatalog: Send + Sync {
    /// Resolve the prompt spec for the job identified by `media_code`.
    async fn prompts_for(&self, media_code: &str) -> Result<PromptSpec>;
}

/// Stateless adapter to the remote text-generation service.
///
/// Each call is independent; the caller supplies the full context window every
/// time. Failures surface as [`crate::Error::Completion`] and are not retried
/// here — retry policy belongs to the invoking transport.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Given an ordered message window, return the next assistant message.
    async fn complete(&self, messages: &[Message]) -> Result<Message>;
}
