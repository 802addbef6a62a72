//! Pipeline run endpoints (read-only)

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::views::{self, PipelineView};

/// GET /pipeline - run history (newest first) with totals
async fn pipeline(State(state): State<Arc<AppState>>) -> Result<Json<PipelineView>, ApiError> {
    Ok(Json(views::pipeline(state.store.as_ref()).await?))
}

/// Pipeline routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/pipeline", get(pipeline))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use super::super::test_support::{app, json_request};
    use crate::db::{MemoryStore, NewPipelineRun};

    #[tokio::test]
    async fn empty_history() {
        let (status, body) =
            json_request(app(&MemoryStore::new()), Method::GET, "/pipeline", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_runs"], 0);
        assert_eq!(body["runs"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn totals_over_all_runs() {
        let store = MemoryStore::new();
        store
            .insert_run(NewPipelineRun {
                flow_execution: Some("exec-a".into()),
                pages_found: 4,
                pages_ok: 3,
                pages_error: 1,
                error_detail: Some("page 4: empty body".into()),
                ..Default::default()
            })
            .await;

        let (_, body) = json_request(app(&store), Method::GET, "/pipeline", None).await;
        assert_eq!(body["successful_runs"], 0);
        assert_eq!(body["total_pages_ok"], 3);
        assert_eq!(body["runs"][0]["flow_execution"], "exec-a");
    }
}
