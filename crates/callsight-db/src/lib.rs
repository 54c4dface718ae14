//! # callsight-db
//!
//! PostgreSQL storage layer for callsight.
//!
//! This crate provides:
//! - Connection pool management
//! - The per-stage status store (idempotency gate backing)
//! - Transcript/feedback conversation storage
//! - The per-tenant prompt catalog
//!
//! ## Example
//!
//! ```rust,ignore
//! use callsight_db::Database;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/callsight").await?;
//!     let done = db.status.is_completed("1508202300000014", Stage::Analysis).await?;
//!     println!("already processed: {done}");
//!     Ok(())
//! }
//! ```

pub mod conversations;
pub mod pool;
pub mod prompts;
pub mod status;

// Re-export core types
pub use callsight_core::*;

pub use conversations::PgConversationStore;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use prompts::PgPromptCatalog;
pub use status::PgStatusStore;

/// Combined database context with all stores.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::PgPool,
    /// Per-stage status store.
    pub status: PgStatusStore,
    /// Transcript and feedback storage.
    pub conversations: PgConversationStore,
    /// Per-tenant prompt catalog.
    pub prompts: PgPromptCatalog,
}

impl Database {
    /// Connect with default pool configuration.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url).await?;
        Ok(Self::from_pool(pool))
    }

    /// Connect with custom pool configuration.
    pub async fn connect_with(database_url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(database_url, config).await?;
        Ok(Self::from_pool(pool))
    }

    /// Build the store set over an existing pool.
    pub fn from_pool(pool: sqlx::PgPool) -> Self {
        Self {
            status: PgStatusStore::new(pool.clone()),
            conversations: PgConversationStore::new(pool.clone()),
            prompts: PgPromptCatalog::new(pool.clone()),
            pool,
        }
    }
}
