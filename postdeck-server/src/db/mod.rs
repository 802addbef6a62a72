//! Database layer - connection pool, repositories and record stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - One statement per operation, single table, no JOINs
//! - Absence is a value (`Option`/`bool`), not an error
//! - No caching: every read hits the backend

pub mod pool;
pub mod migrations;
pub mod repos;
pub mod store;
pub mod memory;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use store::{PgStore, RecordStore, StoreResult};
pub use memory::{MemoryStore, NewPipelineRun, NewPost};
