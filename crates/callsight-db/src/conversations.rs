//! Conversation store: transcript text in, feedback transcripts out.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::{debug, info};

use callsight_core::{ConversationStore, Error, Feedback, Result, Transcript};

/// PostgreSQL implementation of [`ConversationStore`].
///
/// Transcripts are read-only input produced by the upstream transcription
/// stage; feedback rows are upserted, so a rerun overwrites the prior artifact.
pub struct PgConversationStore {
    pool: PgPool,
}

impl PgConversationStore {
    /// Create a new PgConversationStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationStore for PgConversationStore {
    async fn fetch_transcript(&self, media_code: &str) -> Result<Transcript> {
        let text: Option<String> =
            sqlx::query_scalar("SELECT text FROM transcripts WHERE media_code = $1")
                .bind(media_code)
                .fetch_optional(&self.pool)
                .await
                .map_err(Error::Database)?;

        let text = text.ok_or_else(|| Error::TranscriptNotFound(media_code.to_string()))?;

        debug!(
            subsystem = "db",
            component = "conversations",
            op = "fetch_transcript",
            media_code = media_code,
            text_len = text.len(),
            "Fetched transcript"
        );

        Ok(Transcript {
            media_code: media_code.to_string(),
            text,
        })
    }

    async fn store_feedback(&self, feedback: &Feedback) -> Result<()> {
        let payload: JsonValue = serde_json::to_value(&feedback.messages)?;

        sqlx::query(
            "INSERT INTO feedbacks (media_code, feedback, updated_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (media_code)
             DO UPDATE SET feedback = EXCLUDED.feedback,
                           updated_at = EXCLUDED.updated_at",
        )
        .bind(&feedback.media_code)
        .bind(&payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        info!(
            subsystem = "db",
            component = "conversations",
            op = "store_feedback",
            media_code = %feedback.media_code,
            message_count = feedback.messages.len(),
            "Stored feedback"
        );

        Ok(())
    }
}
