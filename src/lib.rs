//! Biblios Library Catalog Server
//!
//! A Rust implementation of the Biblios library catalog backend, providing
//! a REST JSON API over a relational catalog, a rebuildable graph mirror of
//! the same data, and a proxy to an external text-generation service.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
