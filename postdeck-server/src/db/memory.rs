//! In-memory record store for tests and local demos.
//!
//! Mirrors the PostgreSQL adapter: ascending timestamp order with NULLs
//! last, silent no-ops on unknown IDs, unique `notion_page_id`. The insert
//! and seed helpers stand in for the external pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::repos::{AgentConfig, DbError, PipelineRun, Post, AGENT_CONFIG_ID};
use super::store::{RecordStore, StoreResult};
use crate::models::{AgentPrompt, PostPatch, PostStatus};

/// Post as the pipeline inserts it. Unset columns take the table defaults.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub notion_page_id: String,
    pub title: Option<String>,
    pub original_content: Option<String>,
    pub linkedin_post: Option<String>,
    pub short_post: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewPost {
    pub fn new(notion_page_id: impl Into<String>) -> Self {
        Self {
            notion_page_id: notion_page_id.into(),
            ..Default::default()
        }
    }
}

/// Pipeline run as the pipeline records it.
#[derive(Debug, Clone, Default)]
pub struct NewPipelineRun {
    pub flow_execution: Option<String>,
    pub pages_found: i32,
    pub pages_ok: i32,
    pub pages_error: i32,
    pub error_detail: Option<String>,
    pub executed_at: Option<DateTime<Utc>>,
}

/// Thread-safe in-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    posts: Vec<Post>,
    runs: Vec<PipelineRun>,
    config: Option<AgentConfig>,
}

impl MemoryStore {
    /// Creates an empty store with no agent configuration row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a post the way the pipeline would.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Duplicate`] when `notion_page_id` is taken.
    pub async fn insert_post(&self, new: NewPost) -> StoreResult<Post> {
        let mut state = self.state.write().await;
        if state
            .posts
            .iter()
            .any(|p| p.notion_page_id == new.notion_page_id)
        {
            return Err(DbError::Duplicate {
                resource: "post",
                key: new.notion_page_id,
            });
        }

        let now = Utc::now();
        let created_at = new.created_at.unwrap_or(now);
        let post = Post {
            id: Uuid::new_v4(),
            notion_page_id: new.notion_page_id,
            title: new.title,
            original_content: new.original_content,
            linkedin_post: new.linkedin_post,
            short_post: new.short_post,
            hashtags: new.hashtags,
            status: Some(
                new.status
                    .unwrap_or_else(|| PostStatus::Generated.as_str().to_owned()),
            ),
            created_at: Some(created_at),
            updated_at: Some(created_at),
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    /// Record a pipeline run.
    pub async fn insert_run(&self, new: NewPipelineRun) -> PipelineRun {
        let run = PipelineRun {
            id: Uuid::new_v4(),
            flow_execution: new.flow_execution,
            pages_found: Some(new.pages_found),
            pages_ok: Some(new.pages_ok),
            pages_error: Some(new.pages_error),
            error_detail: new.error_detail,
            executed_at: Some(new.executed_at.unwrap_or_else(Utc::now)),
        };
        self.state.write().await.runs.push(run.clone());
        run
    }

    /// Seed (or reseed) the agent configuration singleton.
    pub async fn seed_config(&self, prompt: impl Into<String>) {
        self.state.write().await.config = Some(AgentConfig {
            id: AGENT_CONFIG_ID,
            prompt: prompt.into(),
            updated_at: Some(Utc::now()),
        });
    }
}

/// Sort key placing NULL timestamps after all others, like `ORDER BY ... ASC`.
fn nulls_last(ts: Option<DateTime<Utc>>) -> (bool, Option<DateTime<Utc>>) {
    (ts.is_none(), ts)
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let mut posts = self.state.read().await.posts.clone();
        posts.sort_by_key(|p| nulls_last(p.created_at));
        Ok(posts)
    }

    async fn get_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let state = self.state.read().await;
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update_post(&self, id: Uuid, patch: &PostPatch) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let Some(post) = state.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };

        if let Some(title) = &patch.title {
            post.title = Some(title.clone());
        }
        if let Some(body) = &patch.linkedin_post {
            post.linkedin_post = Some(body.clone());
        }
        if let Some(short) = &patch.short_post {
            post.short_post = Some(short.clone());
        }
        if let Some(tags) = &patch.hashtags {
            post.hashtags = Some(tags.clone());
        }
        if let Some(status) = &patch.status {
            post.status = Some(status.clone());
        }
        post.updated_at = Some(Utc::now());
        Ok(true)
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        Ok(state.posts.len() < before)
    }

    async fn list_pipeline_runs(&self) -> StoreResult<Vec<PipelineRun>> {
        let mut runs = self.state.read().await.runs.clone();
        runs.sort_by_key(|r| nulls_last(r.executed_at));
        Ok(runs)
    }

    async fn get_agent_config(&self) -> StoreResult<Option<AgentConfig>> {
        Ok(self.state.read().await.config.clone())
    }

    async fn update_agent_config(&self, prompt: &AgentPrompt) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let Some(config) = state.config.as_mut() else {
            return Ok(false);
        };
        config.prompt = prompt.as_str().to_owned();
        config.updated_at = Some(Utc::now());
        Ok(true)
    }
}
