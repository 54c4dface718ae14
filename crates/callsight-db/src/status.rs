//! Status store implementation over the media status table.
//!
//! Jobs are addressed by their external `media_code`, joined against the
//! `media_def` table; the processor never sees internal media ids. Each stage
//! maps to its own status column on `media_status`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info};

use callsight_core::{Error, Result, Stage, StageState, StatusStore};

/// PostgreSQL implementation of [`StatusStore`].
pub struct PgStatusStore {
    pool: PgPool,
}

impl PgStatusStore {
    /// Create a new PgStatusStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Map a stage to its status column on `media_status`.
    ///
    /// The column name is a compile-time constant, never spliced from input;
    /// all values go through bind parameters.
    fn stage_column(stage: Stage) -> &'static str {
        match stage {
            Stage::Transcript => "transcript_status",
            Stage::Analysis => "analysis_status",
        }
    }

    /// Write a stage state with its comment.
    ///
    /// Affects zero rows for an unknown media code and returns `Ok`.
    async fn set_state(
        &self,
        media_code: &str,
        stage: Stage,
        state: StageState,
        comment: &str,
    ) -> Result<()> {
        let column = Self::stage_column(stage);
        let query = format!(
            "UPDATE media_status ms
             SET {column} = $1,
                 comments = $2,
                 updated_at = $3
             WHERE EXISTS (
                 SELECT 1
                 FROM media_def md
                 WHERE ms.media_id = md.media_id
                   AND md.media_code = $4
             )"
        );

        let result = sqlx::query(&query)
            .bind(state.as_str())
            .bind(comment)
            .bind(Utc::now())
            .bind(media_code)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        info!(
            subsystem = "db",
            component = "status",
            op = "set_state",
            media_code = media_code,
            stage = %stage,
            state = state.as_str(),
            rows_affected = result.rows_affected(),
            "Updated stage status"
        );

        Ok(())
    }
}

#[async_trait]
impl StatusStore for PgStatusStore {
    async fn is_completed(&self, media_code: &str, stage: Stage) -> Result<bool> {
        let column = Self::stage_column(stage);
        let query = format!(
            "SELECT COUNT(*)
             FROM media_def md
             JOIN media_status ms ON ms.media_id = md.media_id
             WHERE ms.{column} <> $1
               AND md.media_code = $2"
        );

        let not_done: i64 = sqlx::query_scalar(&query)
            .bind(StageState::Succeeded.as_str())
            .bind(media_code)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "status",
            op = "is_completed",
            media_code = media_code,
            stage = %stage,
            not_done = not_done,
            "Checked stage completion"
        );

        Ok(not_done == 0)
    }

    async fn mark_running(&self, media_code: &str, stage: Stage, comment: &str) -> Result<()> {
        self.set_state(media_code, stage, StageState::Running, comment)
            .await
    }

    async fn mark_succeeded(&self, media_code: &str, stage: Stage, comment: &str) -> Result<()> {
        self.set_state(media_code, stage, StageState::Succeeded, comment)
            .await
    }

    async fn mark_error(&self, media_code: &str, stage: Stage, comment: &str) -> Result<()> {
        self.set_state(media_code, stage, StageState::Error, comment)
            .await
    }
}
