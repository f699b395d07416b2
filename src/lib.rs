//! Bookshelf
//!
//! A small REST JSON API over an in-memory book catalog, with checkout and
//! return operations that move a book's available quantity.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
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

impl AppState {
    /// Build the state, seeding the catalog when the configuration asks for it
    pub fn new(config: AppConfig) -> Self {
        let repository = if config.catalog.seed {
            repository::Repository::seeded()
        } else {
            repository::Repository::default()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
