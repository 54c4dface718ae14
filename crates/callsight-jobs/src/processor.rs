//! Idempotent stage-gated job processor.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument};

use callsight_core::{
    CompletionClient, ConversationStore, ProcessEvent, PromptCatalog, Result, Stage, StatusStore,
};

use crate::runner::ConversationRunner;

/// Orchestrates one feedback job: idempotency check → claim → conversation
/// run → terminal resolution.
///
/// The stage is fixed per deployment instance. Collaborators are pluggable so
/// storage and inference backends can be swapped without touching the gate
/// logic.
pub struct JobProcessor {
    status: Arc<dyn StatusStore>,
    conversations: Arc<dyn ConversationStore>,
    prompts: Arc<dyn PromptCatalog>,
    runner: ConversationRunner,
    stage: Stage,
}

impl JobProcessor {
    /// Create a processor for the given stage.
    pub fn new(
        status: Arc<dyn StatusStore>,
        conversations: Arc<dyn ConversationStore>,
        prompts: Arc<dyn PromptCatalog>,
        client: Arc<dyn CompletionClient>,
        stage: Stage,
    ) -> Self {
        Self {
            status,
            conversations,
            prompts,
            runner: ConversationRunner::new(client),
            stage,
        }
    }

    /// Override the conversation window size.
    pub fn with_window(mut self, window: usize) -> Self {
        self.runner = self.runner.with_window(window);
        self
    }

    /// The stage this processor handles.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Process one inbound event.
    ///
    /// A job already in terminal success returns immediately with no side
    /// effects — redelivered events are no-ops. Otherwise the job is claimed
    /// with a `running` status and resolved to exactly one of `succeeded` or
    /// `error`; failures are recorded on the status row before propagating, so
    /// the stage is never left `running` on exit.
    #[instrument(
        skip(self, event),
        fields(media_code = %event.media_code, stage = %self.stage)
    )]
    pub async fn process(&self, event: &ProcessEvent) -> Result<()> {
        let media_code = event.media_code.as_str();
        let start = Instant::now();

        info!(
            subsystem = "jobs",
            component = "processor",
            op = "process",
            "Processing event"
        );

        if self.status.is_completed(media_code, self.stage).await? {
            info!(
                subsystem = "jobs",
                component = "processor",
                op = "process",
                "Feedback already generated, skipping"
            );
            return Ok(());
        }

        self.status
            .mark_running(media_code, self.stage, "Started processing..")
            .await?;

        match self.run(media_code).await {
            Ok(message_count) => {
                info!(
                    subsystem = "jobs",
                    component = "processor",
                    op = "process",
                    message_count = message_count,
                    duration_ms = start.elapsed().as_millis() as u64,
                    success = true,
                    "Feedback generated successfully"
                );
                Ok(())
            }
            Err(e) => {
                let comment = e.to_string();
                error!(
                    subsystem = "jobs",
                    component = "processor",
                    op = "process",
                    error = %comment,
                    duration_ms = start.elapsed().as_millis() as u64,
                    success = false,
                    "Feedback generation failed"
                );

                if let Err(status_err) = self
                    .status
                    .mark_error(media_code, self.stage, &comment)
                    .await
                {
                    error!(
                        subsystem = "jobs",
                        component = "processor",
                        op = "mark_error",
                        error = %status_err,
                        "Failed to record error status"
                    );
                }

                Err(e)
            }
        }
    }

    /// The fallible body of a claimed job: fetch inputs, drive the
    /// conversation, persist the artifact, resolve the status. Returns the
    /// number of persisted feedback messages.
    async fn run(&self, media_code: &str) -> Result<usize> {
        let transcript = self.conversations.fetch_transcript(media_code).await?;
        let prompts = self.prompts.prompts_for(media_code).await?;

        let feedback = self.runner.run(&transcript, &prompts).await?;
        let message_count = feedback.messages.len();

        self.conversations.store_feedback(&feedback).await?;

        self.status
            .mark_succeeded(
                media_code,
                self.stage,
                "Feedback generated successfully..",
            )
            .await?;

        Ok(message_count)
    }
}
