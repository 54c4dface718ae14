//! Domain models for the media feedback pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A named phase of the media pipeline, tracked independently per job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Transcript,
    Analysis,
}

impl Stage {
    /// Stable string code used in configuration and inbound events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Transcript => "transcript",
            Stage::Analysis => "analysis",
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transcript" => Ok(Stage::Transcript),
            "analysis" => Ok(Stage::Analysis),
            other => Err(Error::InvalidStage(other.to_string())),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-stage processing state.
///
/// Transitions only `pending → running → {succeeded, error}`; re-entry into
/// `running` from `succeeded` is blocked by the processor's idempotency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    Pending,
    Running,
    Succeeded,
    Error,
}

impl StageState {
    /// Stable string code stored in the status columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageState::Pending => "pending",
            StageState::Running => "running",
            StageState::Succeeded => "succeeded",
            StageState::Error => "error",
        }
    }

    /// Parse a stored status code; unknown codes fall back to `Pending`.
    pub fn from_code(s: &str) -> StageState {
        match s {
            "pending" => StageState::Pending,
            "running" => StageState::Running,
            "succeeded" => StageState::Succeeded,
            "error" => StageState::Error,
            _ => StageState::Pending,
        }
    }

    /// True for states after which no further processing occurs without reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageState::Succeeded | StageState::Error)
    }

    /// True only for `succeeded` — the set the idempotency check gates on.
    /// An `error` stage stays eligible for transport-driven redelivery.
    pub fn is_terminal_success(&self) -> bool {
        matches!(self, StageState::Succeeded)
    }
}

/// Durable status record for one (media_code, stage) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageStatus {
    pub stage: Stage,
    pub state: StageState,
    pub comment: String,
    pub updated_at: DateTime<Utc>,
}

/// Speaker role in a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One conversation turn sent to or received from the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Immutable transcript text produced by the upstream transcription stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub media_code: String,
    pub text: String,
}

/// Persisted feedback artifact: the full exchange minus the system preamble.
///
/// Serializes as `{"media_code": …, "feedback": [{"role": …, "content": …}, …]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub media_code: String,
    #[serde(rename = "feedback")]
    pub messages: Vec<Message>,
}

/// Ordered prompt sequence for one job: system preamble plus user questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptSpec {
    pub system: Vec<Message>,
    pub questions: Vec<Message>,
}

/// Inbound trigger event.
///
/// Only `media_code` drives the processor; the remaining fields are consumed
/// by the transcript/feedback storage collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessEvent {
    pub media_code: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub trans_bucket: Option<String>,
    #[serde(default)]
    pub trans_file: Option<String>,
    #[serde(default)]
    pub analysis_bucket: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_stage_round_trip() {
        for stage in [Stage::Transcript, Stage::Analysis] {
            assert_eq!(Stage::from_str(stage.as_str()).unwrap(), stage);
        }
    }

    #[test]
    fn test_stage_from_str_rejects_unknown() {
        let err = Stage::from_str("upload").unwrap_err();
        match err {
            crate::Error::InvalidStage(s) => assert_eq!(s, "upload"),
            other => panic!("Expected InvalidStage, got {:?}", other),
        }
    }

    #[test]
    fn test_stage_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Stage::Analysis).unwrap(), "\"analysis\"");
        let stage: Stage = serde_json::from_str("\"transcript\"").unwrap();
        assert_eq!(stage, Stage::Transcript);
    }

    #[test]
    fn test_stage_state_codes_round_trip() {
        for state in [
            StageState::Pending,
            StageState::Running,
            StageState::Succeeded,
            StageState::Error,
        ] {
            assert_eq!(StageState::from_code(state.as_str()), state);
        }
    }

    #[test]
    fn test_stage_state_unknown_code_falls_back_to_pending() {
        assert_eq!(StageState::from_code("C"), StageState::Pending);
        assert_eq!(StageState::from_code(""), StageState::Pending);
    }

    #[test]
    fn test_stage_state_terminal_sets() {
        assert!(StageState::Succeeded.is_terminal());
        assert!(StageState::Error.is_terminal());
        assert!(!StageState::Running.is_terminal());
        assert!(!StageState::Pending.is_terminal());

        assert!(StageState::Succeeded.is_terminal_success());
        assert!(!StageState::Error.is_terminal_success());
    }

    #[test]
    fn test_stage_status_serde_round_trip() {
        let status = StageStatus {
            stage: Stage::Analysis,
            state: StageState::Running,
            comment: "Started processing..".to_string(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_string(&status).unwrap();
        let back: StageStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stage, Stage::Analysis);
        assert_eq!(back.state, StageState::Running);
        assert_eq!(back.comment, status.comment);
    }

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("Give me pros of the pitch");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Give me pros of the pitch");

        assert_eq!(Message::system("ctx").role, Role::System);
        assert_eq!(Message::assistant("ok").role, Role::Assistant);
    }

    #[test]
    fn test_message_serde_shape() {
        let json = serde_json::to_string(&Message::assistant("Looks solid.")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"Looks solid."}"#);
    }

    #[test]
    fn test_feedback_serializes_with_feedback_key() {
        let feedback = Feedback {
            media_code: "1508202300000014".to_string(),
            messages: vec![Message::user("q"), Message::assistant("a")],
        };

        let value = serde_json::to_value(&feedback).unwrap();
        assert_eq!(value["media_code"], "1508202300000014");
        assert!(value["feedback"].is_array());
        assert_eq!(value["feedback"].as_array().unwrap().len(), 2);
        assert_eq!(value["feedback"][0]["role"], "user");
    }

    #[test]
    fn test_process_event_requires_media_code() {
        let event: ProcessEvent =
            serde_json::from_str(r#"{"media_code": "abc123"}"#).unwrap();
        assert_eq!(event.media_code, "abc123");
        assert!(event.user_id.is_none());

        let missing = serde_json::from_str::<ProcessEvent>(r#"{"user_id": "u1"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_process_event_passthrough_fields() {
        let event: ProcessEvent = serde_json::from_str(
            r#"{
                "media_code": "1508202300000014",
                "user_id": "u42",
                "trans_bucket": "callsight-transcript",
                "trans_file": "1508202300000014.transcript.txt",
                "analysis_bucket": "callsight-analysis"
            }"#,
        )
        .unwrap();

        assert_eq!(event.user_id.as_deref(), Some("u42"));
        assert_eq!(event.trans_bucket.as_deref(), Some("callsight-transcript"));
        assert_eq!(event.analysis_bucket.as_deref(), Some("callsight-analysis"));
    }
}
