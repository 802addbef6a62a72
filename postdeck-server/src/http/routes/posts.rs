//! Post endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::actions;
use crate::db::Post;
use crate::http::error::ApiError;
use crate::http::extractors::ValidUuid;
use crate::http::server::AppState;
use crate::models::{PostEdit, PostStatus};
use crate::views;

/// Post response
#[derive(Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub notion_page_id: String,
    pub title: Option<String>,
    pub original_content: Option<String>,
    pub linkedin_post: Option<String>,
    pub short_post: Option<String>,
    pub hashtags: Vec<String>,
    pub status: String,
    pub status_label: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        let status = p.status().to_owned();
        Self {
            status_label: PostStatus::label_for(&status).to_owned(),
            status,
            id: p.id,
            notion_page_id: p.notion_page_id,
            title: p.title,
            original_content: p.original_content,
            linkedin_post: p.linkedin_post,
            short_post: p.short_post,
            hashtags: p.hashtags.unwrap_or_default(),
            created_at: p.created_at.map(|t| t.to_rfc3339()),
            updated_at: p.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Posts list response
#[derive(Serialize)]
pub struct PostListResponse {
    pub count: usize,
    pub posts: Vec<PostResponse>,
}

/// Update result
#[derive(Serialize)]
pub struct UpdateResponse {
    pub updated: bool,
    pub revalidate: Vec<String>,
}

/// Delete result
#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub revalidate: Vec<String>,
}

/// GET /posts - all posts, newest first
async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<PostListResponse>, ApiError> {
    let view = views::posts(state.store.as_ref()).await?;

    Ok(Json(PostListResponse {
        count: view.count,
        posts: view.posts.into_iter().map(PostResponse::from).collect(),
    }))
}

/// GET /posts/{id} - a single post
async fn get_post(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<PostResponse>, ApiError> {
    let post = views::post(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("post", id))?;

    Ok(Json(PostResponse::from(post)))
}

/// PATCH /posts/{id} - edit any subset of title, bodies, hashtags, status
async fn update_post(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
    Json(edit): Json<PostEdit>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let outcome = actions::update_post(state.store.as_ref(), id, edit).await?;

    Ok(Json(UpdateResponse {
        updated: outcome.value,
        revalidate: outcome.revalidate,
    }))
}

/// DELETE /posts/{id} - remove a post permanently
async fn delete_post(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<DeleteResponse>, ApiError> {
    let outcome = actions::delete_post(state.store.as_ref(), id).await?;

    Ok(Json(DeleteResponse {
        deleted: outcome.value,
        revalidate: outcome.revalidate,
    }))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post).patch(update_post).delete(delete_post))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use uuid::Uuid;

    use super::super::test_support::{app, json_request};
    use crate::db::{MemoryStore, NewPost};

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryStore::new();
        store.insert_post(NewPost::new("older")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        store.insert_post(NewPost::new("newer")).await.unwrap();

        let (status, body) = json_request(app(&store), Method::GET, "/posts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["posts"][0]["notion_page_id"], "newer");
        assert_eq!(body["posts"][1]["status_label"], "Generated");
    }

    #[tokio::test]
    async fn unknown_post_is_404() {
        let path = format!("/posts/{}", Uuid::new_v4());
        let (status, body) =
            json_request(app(&MemoryStore::new()), Method::GET, &path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn malformed_id_is_400() {
        let (status, body) =
            json_request(app(&MemoryStore::new()), Method::GET, "/posts/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn patch_then_get() {
        let store = MemoryStore::new();
        let post = store.insert_post(NewPost::new("ext-1")).await.unwrap();
        let path = format!("/posts/{}", post.id);

        let (status, body) = json_request(
            app(&store),
            Method::PATCH,
            &path,
            Some(json!({ "status": "published", "hashtags": "#rust #axum" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updated"], true);
        assert_eq!(body["revalidate"], json!(["/posts", path]));

        let (_, body) = json_request(app(&store), Method::GET, &path, None).await;
        assert_eq!(body["status"], "published");
        assert_eq!(body["hashtags"], json!(["#rust", "#axum"]));
    }

    #[tokio::test]
    async fn patch_rejects_unknown_status() {
        let store = MemoryStore::new();
        let post = store.insert_post(NewPost::new("ext-1")).await.unwrap();
        let path = format!("/posts/{}", post.id);

        let (status, _) = json_request(
            app(&store),
            Method::PATCH,
            &path,
            Some(json!({ "status": "scheduled" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        let post = store.insert_post(NewPost::new("ext-1")).await.unwrap();
        let path = format!("/posts/{}", post.id);

        let (status, body) = json_request(app(&store), Method::DELETE, &path, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], true);

        let (status, body) = json_request(app(&store), Method::DELETE, &path, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], false);

        let (status, _) = json_request(app(&store), Method::GET, &path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
