//! callsight-api - HTTP entry point for the callsight feedback pipeline.
//!
//! Receives inbound media events, extracts the job identifier, and delegates
//! to the stage-gated [`JobProcessor`]. The durable signal of a job's outcome
//! is always the status row; the HTTP response only tells the transport
//! whether to redeliver.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use callsight_core::{defaults, ProcessEvent, PromptCatalog, Stage};
use callsight_db::Database;
use callsight_inference::OpenAICompletionClient;
use callsight_jobs::{JobProcessor, StaticPromptCatalog};

struct AppState {
    processor: JobProcessor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "callsight=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    // A bad stage value is a config error; fail startup, never retry.
    let stage: Stage = std::env::var("STAGE")
        .unwrap_or_else(|_| defaults::STAGE.to_string())
        .parse()?;

    let db = Database::connect(&database_url).await?;
    let client = Arc::new(OpenAICompletionClient::from_env()?);

    let prompts: Arc<dyn PromptCatalog> = match std::env::var("PROMPT_SOURCE").as_deref() {
        Ok("static") => Arc::new(StaticPromptCatalog::sales_feedback()),
        _ => Arc::new(db.prompts),
    };

    let processor = JobProcessor::new(
        Arc::new(db.status),
        Arc::new(db.conversations),
        prompts,
        client,
        stage,
    );

    let state = Arc::new(AppState { processor });

    let app = Router::new()
        .route("/", get(welcome).post(handle_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| defaults::BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(
        subsystem = "api",
        addr = %bind_addr,
        stage = %stage,
        "callsight-api listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

async fn welcome() -> &'static str {
    "welcome"
}

async fn handle_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<ProcessEvent>,
) -> impl IntoResponse {
    info!(
        subsystem = "api",
        media_code = %event.media_code,
        "Received event"
    );

    match state.processor.process(&event).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            error!(
                subsystem = "api",
                media_code = %event.media_code,
                error = %e,
                "Event processing failed"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
