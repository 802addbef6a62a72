//! Post repository
//!
//! Rows are inserted by the external pipeline, keyed by `notion_page_id`.
//! This repository only reads, patches and deletes them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;
use crate::models::{PostPatch, PostStatus};

/// Post record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub notion_page_id: String,
    pub title: Option<String>,
    pub original_content: Option<String>,
    pub linkedin_post: Option<String>,
    pub short_post: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Stored status, or the column default when NULL.
    pub fn status(&self) -> &str {
        self.status
            .as_deref()
            .unwrap_or(PostStatus::Generated.as_str())
    }

    /// Title for display, falling back to the external page id.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => &self.notion_page_id,
        }
    }

    /// Tags as a slice (empty when NULL).
    pub fn tags(&self) -> &[String] {
        self.hashtags.as_deref().unwrap_or(&[])
    }
}

const POST_COLUMNS: &str = "id, notion_page_id, title, original_content, linkedin_post, \
                            short_post, hashtags, status, created_at, updated_at";

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All posts, oldest first.
    pub async fn list(&self) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// A single post by ID, `None` when no row matches.
    pub async fn get(&self, id: Uuid) -> Result<Option<Post>, DbError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1 LIMIT 1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// NULL parameters keep the current column value. Returns whether a row
    /// matched; an unknown ID is not an error.
    pub async fn update(&self, id: Uuid, patch: &PostPatch) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                title = COALESCE($2, title),
                linkedin_post = COALESCE($3, linkedin_post),
                short_post = COALESCE($4, short_post),
                hashtags = COALESCE($5, hashtags),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.linkedin_post.as_deref())
        .bind(patch.short_post.as_deref())
        .bind(patch.hashtags.clone())
        .bind(patch.status.as_deref())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a post. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
