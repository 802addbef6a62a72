//! Agent configuration repository
//!
//! `agent_config` holds one row by convention, keyed by [`AGENT_CONFIG_ID`].
//! The row is seeded outside postdeck; it is never inserted or deleted here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::AgentPrompt;

/// Key of the singleton row
pub const AGENT_CONFIG_ID: i32 = 1;

/// Agent configuration record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AgentConfig {
    pub id: i32,
    pub prompt: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Agent configuration repository
pub struct AgentConfigRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AgentConfigRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The singleton row, `None` if it was never seeded.
    pub async fn get(&self) -> Result<Option<AgentConfig>, DbError> {
        let config = sqlx::query_as::<_, AgentConfig>(
            "SELECT id, prompt, updated_at FROM agent_config WHERE id = $1",
        )
        .bind(AGENT_CONFIG_ID)
        .fetch_optional(self.pool)
        .await?;

        Ok(config)
    }

    /// Replace the prompt of the singleton row.
    ///
    /// Returns `false` when the row is missing; nothing is inserted.
    pub async fn update(&self, prompt: &AgentPrompt) -> Result<bool, DbError> {
        let result = sqlx::query(
            "UPDATE agent_config SET prompt = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(AGENT_CONFIG_ID)
        .bind(prompt.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
