//! Repository implementations for database access
//!
//! One repository per table, each statement a single round trip:
//! - No JOINs, no aggregation, no pagination (views aggregate in memory)
//! - Zero matched rows is reported, never raised
//! - No transactions spanning calls

pub mod posts;
pub mod pipeline_runs;
pub mod agent_config;

pub use posts::{Post, PostRepo};
pub use pipeline_runs::{PipelineRun, PipelineRunRepo};
pub use agent_config::{AgentConfig, AgentConfigRepo, AGENT_CONFIG_ID};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("duplicate {resource}: '{key}'")]
    Duplicate { resource: &'static str, key: String },
}
