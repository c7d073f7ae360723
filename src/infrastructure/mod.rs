//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Database connection and schema (db)
//! - Starter content (seed)
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - HTML templates (templates)
//! - Repository implementations (repositories)
//! - Application state (state)

pub mod config;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod state;
pub mod templates;

pub use repositories::*;
pub use state::AppState;
pub use templates::{TemplateName, Templates};
