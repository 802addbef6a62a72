//! Operator write actions
//!
//! Each action is `(store, typed input) -> typed result or error`. Input is
//! validated before the store is touched. A successful action names the
//! views it made stale so the caller can refresh them; nothing is
//! invalidated implicitly.

use serde::Serialize;
use uuid::Uuid;

use crate::db::{DbError, RecordStore};
use crate::models::{AgentPrompt, PostEdit, ValidationError};

/// Value returned by an action plus the views it made stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome<T> {
    pub value: T,
    pub revalidate: Vec<String>,
}

impl<T> ActionOutcome<T> {
    fn new(value: T, revalidate: Vec<String>) -> Self {
        Self { value, revalidate }
    }
}

/// Why an action failed
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Rejected before reaching the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store call failed
    #[error(transparent)]
    Db(#[from] DbError),
}

pub type ActionResult<T> = Result<ActionOutcome<T>, ActionError>;

/// Path of the posts list view.
pub const POSTS_VIEW: &str = "/posts";
/// Path of the settings view.
pub const SETTINGS_VIEW: &str = "/settings";

/// Path of a post detail view.
pub fn post_view(id: Uuid) -> String {
    format!("{POSTS_VIEW}/{id}")
}

/// Save an operator edit to a post.
///
/// The value is `false` when no post matched; the store treats that as a
/// no-op, so the stale views are reported either way.
pub async fn update_post(store: &dyn RecordStore, id: Uuid, edit: PostEdit) -> ActionResult<bool> {
    let patch = edit.into_patch()?;
    if patch.is_empty() {
        tracing::debug!(%id, "edit changes no column; refreshing updated_at only");
    }
    let updated = store.update_post(id, &patch).await?;

    if updated {
        tracing::info!(%id, status = ?patch.status, "post updated");
    } else {
        tracing::debug!(%id, "post update matched no row");
    }

    Ok(ActionOutcome::new(
        updated,
        vec![POSTS_VIEW.to_owned(), post_view(id)],
    ))
}

/// Delete a post permanently. The value is `false` when no post matched.
pub async fn delete_post(store: &dyn RecordStore, id: Uuid) -> ActionResult<bool> {
    let deleted = store.delete_post(id).await?;

    if deleted {
        tracing::info!(%id, "post deleted");
    } else {
        tracing::debug!(%id, "post delete matched no row");
    }

    Ok(ActionOutcome::new(deleted, vec![POSTS_VIEW.to_owned()]))
}

/// Replace the agent prompt with trimmed operator input.
///
/// Empty input is rejected without a store call. The value is `false` when
/// the configuration row does not exist; it is not created.
pub async fn update_agent_config(store: &dyn RecordStore, raw_prompt: &str) -> ActionResult<bool> {
    let prompt = AgentPrompt::new(raw_prompt)?;
    let updated = store.update_agent_config(&prompt).await?;

    if updated {
        tracing::info!(chars = prompt.as_str().chars().count(), "agent prompt updated");
    } else {
        tracing::warn!("agent_config row missing; prompt not saved");
    }

    Ok(ActionOutcome::new(updated, vec![SETTINGS_VIEW.to_owned()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, NewPost};
    use crate::models::TagsInput;

    #[tokio::test]
    async fn update_reports_stale_views() {
        let store = MemoryStore::new();
        let post = store.insert_post(NewPost::new("ext-1")).await.unwrap();

        let edit = PostEdit {
            status: Some("draft".into()),
            hashtags: Some(TagsInput::Raw("#one  #two".into())),
            ..Default::default()
        };
        let outcome = update_post(&store, post.id, edit).await.unwrap();

        assert!(outcome.value);
        assert_eq!(
            outcome.revalidate,
            vec!["/posts".to_owned(), format!("/posts/{}", post.id)]
        );

        let saved = store.get_post(post.id).await.unwrap().unwrap();
        assert_eq!(saved.status(), "draft");
        assert_eq!(saved.tags(), ["#one", "#two"]);
    }

    #[tokio::test]
    async fn invalid_status_never_reaches_store() {
        let store = MemoryStore::new();
        let post = store.insert_post(NewPost::new("ext-1")).await.unwrap();

        let edit = PostEdit {
            title: Some("changed".into()),
            status: Some("archived".into()),
            ..Default::default()
        };
        let err = update_post(&store, post.id, edit).await.unwrap_err();
        assert!(matches!(err, ActionError::Validation(_)));

        let unchanged = store.get_post(post.id).await.unwrap().unwrap();
        assert_eq!(unchanged, post);
    }

    #[tokio::test]
    async fn delete_unknown_is_not_an_error() {
        let store = MemoryStore::new();
        let outcome = delete_post(&store, Uuid::new_v4()).await.unwrap();
        assert!(!outcome.value);
        assert_eq!(outcome.revalidate, vec!["/posts".to_owned()]);
    }

    #[tokio::test]
    async fn empty_prompt_rejected() {
        let store = MemoryStore::new();
        store.seed_config("keep me").await;

        let err = update_agent_config(&store, "   \n").await.unwrap_err();
        assert!(matches!(
            err,
            ActionError::Validation(ValidationError::Empty { field: "prompt" })
        ));
        assert_eq!(store.get_agent_config().await.unwrap().unwrap().prompt, "keep me");
    }

    #[tokio::test]
    async fn prompt_saved_trimmed() {
        let store = MemoryStore::new();
        store.seed_config("old").await;

        let outcome = update_agent_config(&store, "\n  Be concise.  ").await.unwrap();
        assert!(outcome.value);
        assert_eq!(outcome.revalidate, vec!["/settings".to_owned()]);
        assert_eq!(
            store.get_agent_config().await.unwrap().unwrap().prompt,
            "Be concise."
        );
    }

    #[tokio::test]
    async fn prompt_without_singleton_reports_false() {
        let store = MemoryStore::new();
        let outcome = update_agent_config(&store, "hello").await.unwrap();
        assert!(!outcome.value);
    }
}
