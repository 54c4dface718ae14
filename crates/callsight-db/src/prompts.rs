//! Prompt catalog backed by per-tenant prompt tables.
//!
//! The system preamble is rendered from the media owner's organization and
//! role; the user questions come from `prompt_defs` rows for the owner's
//! group, in `seq` order.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;

use callsight_core::{Error, Message, PromptCatalog, PromptSpec, Result};

/// PostgreSQL implementation of [`PromptCatalog`].
pub struct PgPromptCatalog {
    pool: PgPool,
}

impl PgPromptCatalog {
    /// Create a new PgPromptCatalog with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Render the system preamble for a representative of `organization`
    /// working as `role_title`.
    fn system_messages(organization: &str, role_title: &str) -> Vec<Message> {
        vec![
            Message::system(format!(
                "This is a call transcription between a representative and a \
                 prospect customer. The representative works for {organization} \
                 as {role_title} and speaks to multiple customers daily to sell \
                 the organization's services."
            )),
            Message::system(
                "During the call the representative explains the organization's \
                 services, resolves customer queries, and aims to provide the \
                 best buying experience.",
            ),
            Message::system(
                "You are a sales analyst with 10 years of experience analyzing \
                 calls made by sales representatives, providing insights and \
                 suggestions that improve their sales process.",
            ),
        ]
    }
}

#[async_trait]
impl PromptCatalog for PgPromptCatalog {
    async fn prompts_for(&self, media_code: &str) -> Result<PromptSpec> {
        let owner = sqlx::query(
            "SELECT ud.organization, ud.role_title
             FROM media_def md
             JOIN user_def ud ON ud.user_id = md.user_id
             WHERE md.media_code = $1",
        )
        .bind(media_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or_else(|| {
            Error::Internal(format!("no media owner found for media code {media_code}"))
        })?;

        let organization: String = owner.get("organization");
        let role_title: String = owner.get("role_title");

        let rows = sqlx::query(
            "SELECT pd.content
             FROM prompt_defs pd
             JOIN user_def ud ON ud.group_cd = pd.group_cd
             JOIN media_def md ON md.user_id = ud.user_id
             WHERE md.media_code = $1
             ORDER BY pd.seq",
        )
        .bind(media_code)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        let questions: Vec<Message> = rows
            .into_iter()
            .map(|row| Message::user(row.get::<String, _>("content")))
            .collect();

        debug!(
            subsystem = "db",
            component = "prompts",
            op = "prompts_for",
            media_code = media_code,
            prompt_count = questions.len(),
            "Resolved prompt spec"
        );

        Ok(PromptSpec {
            system: Self::system_messages(&organization, &role_title),
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsight_core::Role;

    #[test]
    fn test_system_messages_render_owner_details() {
        let system = PgPromptCatalog::system_messages("Vertocity", "Account Executive");

        assert_eq!(system.len(), 3);
        assert!(system.iter().all(|m| m.role == Role::System));
        assert!(system[0].content.contains("Vertocity"));
        assert!(system[0].content.contains("Account Executive"));
    }
}
