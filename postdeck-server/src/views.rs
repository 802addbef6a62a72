//! Read models for the dashboard screens
//!
//! Every figure here is computed over full List results; the store does no
//! aggregation. Fine for the handful of rows one pipeline produces, not
//! meant for large tables.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::{PipelineRun, Post, RecordStore, StoreResult};
use crate::models::PostStatus;

/// How many posts the dashboard lists under "recent".
pub const RECENT_POSTS: usize = 6;

/// Landing page figures
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub total_posts: usize,
    pub published_posts: usize,
    pub generated_posts: usize,
    pub total_runs: usize,
    pub successful_runs: usize,
    pub last_run: Option<PipelineRun>,
    /// Newest first
    pub recent_posts: Vec<Post>,
}

impl DashboardView {
    /// `posts` and `runs` in store order (oldest first).
    ///
    /// Counts match the stored column exactly; a NULL status counts as
    /// neither published nor generated.
    pub fn build(posts: &[Post], runs: &[PipelineRun]) -> Self {
        let count_status = |status: PostStatus| {
            posts
                .iter()
                .filter(|p| p.status.as_deref() == Some(status.as_str()))
                .count()
        };

        Self {
            total_posts: posts.len(),
            published_posts: count_status(PostStatus::Published),
            generated_posts: count_status(PostStatus::Generated),
            total_runs: runs.len(),
            successful_runs: runs.iter().filter(|r| r.succeeded()).count(),
            last_run: runs.last().cloned(),
            recent_posts: posts.iter().rev().take(RECENT_POSTS).cloned().collect(),
        }
    }
}

/// Posts list, newest first
#[derive(Debug, Clone, Serialize)]
pub struct PostsView {
    pub count: usize,
    pub posts: Vec<Post>,
}

impl PostsView {
    pub fn build(mut posts: Vec<Post>) -> Self {
        posts.reverse();
        Self {
            count: posts.len(),
            posts,
        }
    }
}

/// Pipeline history and totals
#[derive(Debug, Clone, Serialize)]
pub struct PipelineView {
    pub total_runs: usize,
    pub successful_runs: usize,
    pub total_pages_ok: i64,
    pub total_pages_error: i64,
    /// Newest first
    pub runs: Vec<PipelineRun>,
}

impl PipelineView {
    pub fn build(mut runs: Vec<PipelineRun>) -> Self {
        let total_runs = runs.len();
        let successful_runs = runs.iter().filter(|r| r.succeeded()).count();
        let total_pages_ok = runs.iter().map(PipelineRun::pages_ok).sum();
        let total_pages_error = runs.iter().map(PipelineRun::pages_error).sum();
        runs.reverse();

        Self {
            total_runs,
            successful_runs,
            total_pages_ok,
            total_pages_error,
            runs,
        }
    }
}

/// Settings editor contents
#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub prompt: Option<String>,
    pub chars: usize,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Load the dashboard. The two reads are independent and not mutually
/// consistent.
pub async fn dashboard(store: &dyn RecordStore) -> StoreResult<DashboardView> {
    let (posts, runs) = tokio::try_join!(store.list_posts(), store.list_pipeline_runs())?;
    Ok(DashboardView::build(&posts, &runs))
}

pub async fn posts(store: &dyn RecordStore) -> StoreResult<PostsView> {
    Ok(PostsView::build(store.list_posts().await?))
}

/// Single post, `None` when it does not exist.
pub async fn post(store: &dyn RecordStore, id: Uuid) -> StoreResult<Option<Post>> {
    store.get_post(id).await
}

pub async fn pipeline(store: &dyn RecordStore) -> StoreResult<PipelineView> {
    Ok(PipelineView::build(store.list_pipeline_runs().await?))
}

pub async fn settings(store: &dyn RecordStore) -> StoreResult<SettingsView> {
    let config = store.get_agent_config().await?;
    Ok(match config {
        Some(c) => SettingsView {
            chars: c.prompt.chars().count(),
            prompt: Some(c.prompt),
            updated_at: c.updated_at,
        },
        None => SettingsView {
            prompt: None,
            chars: 0,
            updated_at: None,
        },
    })
}
