//! HTTP server command
//!
//! Serves the dashboard JSON API over PostgreSQL, or over an empty
//! in-memory store with `--memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use postdeck_server::db::{create_pool, migrations, MemoryStore, PgStore, RecordStore};
use postdeck_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create missing pipeline tables before serving
    #[arg(long, conflicts_with = "memory")]
    pub migrate: bool,

    /// Serve an empty in-memory store instead of PostgreSQL
    #[arg(long)]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, database_url: Option<String>) -> Result<()> {
    let store: Arc<dyn RecordStore> = if args.memory {
        tracing::warn!("Serving in-memory store; nothing will be persisted");
        Arc::new(MemoryStore::new())
    } else {
        let url = super::database_url(database_url)?;
        let pool = create_pool(&url)
            .await
            .context("Failed to create database pool")?;

        if args.migrate {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }
        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting postdeck server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
