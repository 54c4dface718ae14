//! Built-in prompt catalog used when no per-tenant prompt data exists.

use async_trait::async_trait;

use callsight_core::{Message, PromptCatalog, PromptSpec, Result};

/// Fixed prompt catalog: a sales-analyst system preamble plus a canned set of
/// feedback questions, identical for every job.
#[derive(Clone)]
pub struct StaticPromptCatalog {
    spec: PromptSpec,
}

impl StaticPromptCatalog {
    /// Create a catalog serving the given spec for every media code.
    pub fn new(spec: PromptSpec) -> Self {
        Self { spec }
    }

    /// The built-in sales feedback prompt sequence.
    pub fn sales_feedback() -> Self {
        let system = Message::system(
            "The Senior Sales Analyst is responsible for analyzing sales calls, \
             providing constructive feedback to the sales representatives, \
             identifying areas of improvement, and recommending changes to \
             secure closures. The role involves delivering a critical \
             evaluation of sales efforts through a 10-point rating system, \
             aiming at enhancing the overall sales performance.\n\
             \n\
             Key Responsibilities:\n\
             Analyze Sales Calls: Systematically review and analyze recorded \
             sales calls to identify key trends, strengths, weaknesses, \
             opportunities, and threats.\n\
             Provide Feedback: Offer detailed, actionable feedback to sales \
             representatives, outlining the pros and cons of their approach \
             and suggesting improvements.\n\
             Rate Sales Efforts: Implement a 10-point rating system to \
             evaluate sales efforts based on predefined criteria, including \
             communication skills, product knowledge, and negotiation \
             techniques.\n\
             \n\
             This is a conversation between a sales representative and a \
             potential customer.",
        );

        let questions = [
            "Give me pros of the pitch",
            "Give me cons of the pitch",
            "Give me a detailed feedback on what are the areas of improvement.",
            "Give me 10 key metrics and their ratings and overall rating.",
        ];

        Self::new(PromptSpec {
            system: vec![system],
            questions: questions.iter().map(|q| Message::user(*q)).collect(),
        })
    }
}

#[async_trait]
impl PromptCatalog for StaticPromptCatalog {
    async fn prompts_for(&self, _media_code: &str) -> Result<PromptSpec> {
        Ok(self.spec.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsight_core::Role;

    #[tokio::test]
    async fn serves_the_same_spec_for_every_media_code() {
        let catalog = StaticPromptCatalog::sales_feedback();

        let a = catalog.prompts_for("mc-1").await.unwrap();
        let b = catalog.prompts_for("mc-2").await.unwrap();

        assert_eq!(a.system.len(), b.system.len());
        assert_eq!(a.questions.len(), b.questions.len());
        assert_eq!(a.questions.len(), 4);
        assert!(a.system[0].role == Role::System);
        assert!(a.questions.iter().all(|q| q.role == Role::User));
    }
}
