//! Record store port
//!
//! Everything the dashboard reads or writes goes through [`RecordStore`].
//! [`PgStore`] is the production adapter; [`super::MemoryStore`] backs tests
//! and `serve --memory`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repos::{
    AgentConfig, AgentConfigRepo, DbError, PipelineRun, PipelineRunRepo, Post, PostRepo,
};
use crate::models::{AgentPrompt, PostPatch};

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, DbError>;

/// Single-table operations over the pipeline tables.
///
/// Each method is one round trip with no retry and no transaction spanning
/// calls. Operations that target a missing row report it through their
/// return value rather than an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short backend name for health output and logs.
    fn backend(&self) -> &'static str;

    /// All posts ordered by creation time, oldest first.
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    /// Finds a post by ID.
    ///
    /// Returns `None` when no post has that ID.
    async fn get_post(&self, id: Uuid) -> StoreResult<Option<Post>>;

    /// Applies `patch` and refreshes `updated_at`.
    ///
    /// Returns `false` when no post has that ID.
    async fn update_post(&self, id: Uuid, patch: &PostPatch) -> StoreResult<bool>;

    /// Deletes a post permanently.
    ///
    /// Returns `false` when no post has that ID.
    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;

    /// All pipeline runs ordered by execution time, oldest first.
    async fn list_pipeline_runs(&self) -> StoreResult<Vec<PipelineRun>>;

    /// The agent configuration singleton, `None` if it was never seeded.
    async fn get_agent_config(&self) -> StoreResult<Option<AgentConfig>>;

    /// Replaces the agent prompt.
    ///
    /// Returns `false` when the singleton row is missing.
    async fn update_agent_config(&self, prompt: &AgentPrompt) -> StoreResult<bool>;
}

/// PostgreSQL-backed record store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        PostRepo::new(&self.pool).list().await
    }

    async fn get_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        PostRepo::new(&self.pool).get(id).await
    }

    async fn update_post(&self, id: Uuid, patch: &PostPatch) -> StoreResult<bool> {
        PostRepo::new(&self.pool).update(id, patch).await
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        PostRepo::new(&self.pool).delete(id).await
    }

    async fn list_pipeline_runs(&self) -> StoreResult<Vec<PipelineRun>> {
        PipelineRunRepo::new(&self.pool).list().await
    }

    async fn get_agent_config(&self) -> StoreResult<Option<AgentConfig>> {
        AgentConfigRepo::new(&self.pool).get().await
    }

    async fn update_agent_config(&self, prompt: &AgentPrompt) -> StoreResult<bool> {
        AgentConfigRepo::new(&self.pool).update(prompt).await
    }
}
