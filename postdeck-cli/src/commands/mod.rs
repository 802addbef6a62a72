//! Command implementations for the postdeck CLI

pub mod dashboard;
pub mod pipeline;
pub mod posts;
pub mod serve;
pub mod settings;
pub mod theme;

// Re-export main dispatcher functions for flat access from main.rs
pub use dashboard::run_dashboard;
pub use pipeline::run_pipeline;
pub use posts::run_posts;
pub use serve::run_serve;
pub use settings::run_settings;
pub use theme::run_theme;

use anyhow::{Context, Result};
use postdeck_server::db::{create_pool, PgStore};

/// Resolve the database URL from the flag/env value.
pub fn database_url(arg: Option<String>) -> Result<String> {
    arg.or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.postdeck/.env")
}

/// Connect to PostgreSQL for a one-shot command.
pub async fn connect(database_url_arg: Option<String>) -> Result<PgStore> {
    let url = database_url(database_url_arg)?;
    let pool = create_pool(&url)
        .await
        .context("Failed to connect to database")?;
    Ok(PgStore::new(pool))
}
