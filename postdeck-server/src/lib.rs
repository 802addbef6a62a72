//! postdeck-server: record store and HTTP API for the postdeck dashboard
//!
//! The tables read here (`posts`, `pipeline_runs`, `agent_config`) are
//! written by an external content pipeline. postdeck lists, edits and
//! deletes posts, shows pipeline history, and edits the agent prompt.
//!
//! Layers, bottom-up:
//! - [`db`]: single-table operations behind the [`db::RecordStore`] trait
//! - [`actions`]: validated writes that report which views went stale
//! - [`views`]: screen read models aggregated over full List results
//! - [`http`]: axum routes serving the views and actions as JSON

pub mod actions;
pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use db::{MemoryStore, PgStore, RecordStore};
pub use http::{run_server, ServerConfig};
