//! Agent settings endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::actions;
use crate::db::AGENT_CONFIG_ID;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::views::{self, SettingsView};

/// Update prompt request
#[derive(Deserialize)]
pub struct UpdatePromptRequest {
    pub prompt: String,
}

/// Update result
#[derive(Serialize)]
pub struct UpdatePromptResponse {
    pub updated: bool,
    pub revalidate: Vec<String>,
}

/// GET /settings - current agent prompt
async fn get_settings(State(state): State<Arc<AppState>>) -> Result<Json<SettingsView>, ApiError> {
    Ok(Json(views::settings(state.store.as_ref()).await?))
}

/// PUT /settings - replace the agent prompt
///
/// The configuration row is never created here; a missing row is a 404.
async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdatePromptRequest>,
) -> Result<Json<UpdatePromptResponse>, ApiError> {
    let outcome = actions::update_agent_config(state.store.as_ref(), &req.prompt).await?;
    if !outcome.value {
        return Err(ApiError::not_found("agent config", AGENT_CONFIG_ID));
    }

    Ok(Json(UpdatePromptResponse {
        updated: outcome.value,
        revalidate: outcome.revalidate,
    }))
}

/// Settings routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
