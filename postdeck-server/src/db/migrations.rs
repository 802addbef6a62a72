//! Schema for the pipeline tables
//!
//! The external pipeline owns these tables and writes to them directly, so
//! the column names, types and defaults below are a shared contract.
//! Statements are idempotent; the agent_config row is never seeded here.

use sqlx::PgPool;

use super::repos::DbError;

const POSTS: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    notion_page_id VARCHAR(255) NOT NULL UNIQUE,
    title TEXT,
    original_content TEXT,
    linkedin_post TEXT,
    short_post TEXT,
    hashtags TEXT[],
    status VARCHAR(50) DEFAULT 'generated',
    created_at TIMESTAMPTZ DEFAULT NOW(),
    updated_at TIMESTAMPTZ DEFAULT NOW()
)
"#;

const PIPELINE_RUNS: &str = r#"
CREATE TABLE IF NOT EXISTS pipeline_runs (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    flow_execution VARCHAR(255),
    pages_found INTEGER DEFAULT 0,
    pages_ok INTEGER DEFAULT 0,
    pages_error INTEGER DEFAULT 0,
    error_detail TEXT,
    executed_at TIMESTAMPTZ DEFAULT NOW()
)
"#;

const AGENT_CONFIG: &str = r#"
CREATE TABLE IF NOT EXISTS agent_config (
    id INTEGER PRIMARY KEY DEFAULT 1,
    prompt TEXT NOT NULL,
    updated_at TIMESTAMPTZ DEFAULT NOW()
)
"#;

/// Create any missing pipeline tables.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");

    for (table, ddl) in [
        ("posts", POSTS),
        ("pipeline_runs", PIPELINE_RUNS),
        ("agent_config", AGENT_CONFIG),
    ] {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "table ready");
    }

    tracing::info!("Schema migrations complete");
    Ok(())
}
