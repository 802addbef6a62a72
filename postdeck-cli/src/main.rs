//! postdeck CLI - content pipeline dashboard
//!
//! Entry point for the `postdeck` command-line tool:
//! - `serve` runs the JSON API over PostgreSQL (or an in-memory store)
//! - `posts`, `pipeline`, `dashboard`, `settings` read and edit the records directly
//! - `theme` switches the terminal color scheme stored in ~/.postdeck/client.toml

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod confirm;
mod render;
mod tracing_setup;

use config::ClientConfig;
use render::Output;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "postdeck",
    author,
    version,
    about = "Dashboard for an automated social-post generation pipeline",
    long_about = "Browse generated posts, edit or delete them, review pipeline run history, \
                  and edit the generation agent's prompt. Records live in PostgreSQL and are \
                  written by an external pipeline."
)]
struct Cli {
    /// Print machine-readable JSON instead of styled text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// PostgreSQL connection string
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Client preferences file (default: ~/.postdeck/client.toml)
    #[arg(long, global = true, env = "POSTDECK_CLIENT_CONFIG")]
    client_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// List, show, edit or delete generated posts
    Posts(commands::posts::PostsArgs),
    /// Show pipeline run history with page totals
    Pipeline,
    /// Show headline counts, the last run and recent posts
    Dashboard,
    /// Show or replace the agent prompt
    Settings(commands::settings::SettingsArgs),
    /// Show or change the color theme
    Theme(commands::theme::ThemeArgs),
}

/// Load `.env` files: ~/.postdeck/.env first, then the working directory.
fn load_env_files() {
    if let Some(home) = dirs::home_dir() {
        dotenvy::from_path(home.join(".postdeck/.env")).ok();
    }
    dotenvy::dotenv().ok();
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env_files();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let config_path = cli.client_config.unwrap_or_else(ClientConfig::default_path);
    let client = ClientConfig::load(&config_path)?;
    let output = Output::new(cli.json, client.theme);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, cli.database_url).await?,
        Commands::Posts(args) => commands::run_posts(args, cli.database_url, &output).await?,
        Commands::Pipeline => commands::run_pipeline(cli.database_url, &output).await?,
        Commands::Dashboard => commands::run_dashboard(cli.database_url, &output).await?,
        Commands::Settings(args) => commands::run_settings(args, cli.database_url, &output).await?,
        Commands::Theme(args) => {
            commands::run_theme(args, client, &config_path)?;
        }
    }
    Ok(())
}
