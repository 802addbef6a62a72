//! Dashboard endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::posts::PostResponse;
use crate::db::PipelineRun;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::views::{self, DashboardView};

/// Dashboard response; recent posts share the `/posts` shape
#[derive(Serialize)]
pub struct DashboardResponse {
    pub total_posts: usize,
    pub published_posts: usize,
    pub generated_posts: usize,
    pub total_runs: usize,
    pub successful_runs: usize,
    pub last_run: Option<PipelineRun>,
    pub recent_posts: Vec<PostResponse>,
}

impl From<DashboardView> for DashboardResponse {
    fn from(view: DashboardView) -> Self {
        Self {
            total_posts: view.total_posts,
            published_posts: view.published_posts,
            generated_posts: view.generated_posts,
            total_runs: view.total_runs,
            successful_runs: view.successful_runs,
            last_run: view.last_run,
            recent_posts: view.recent_posts.into_iter().map(PostResponse::from).collect(),
        }
    }
}

/// GET /dashboard - headline counts, last run, recent posts
async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Json<DashboardResponse>, ApiError> {
    let view = views::dashboard(state.store.as_ref()).await?;
    Ok(Json(DashboardResponse::from(view)))
}

/// Dashboard routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(dashboard))
}
