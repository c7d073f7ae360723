//! Application state containing the page store and templates

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::PageRepository;
use crate::infrastructure::SeaOrmPageRepository;
use crate::infrastructure::templates::Templates;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Page repository
    pub pages: Arc<dyn PageRepository>,
    /// Compiled view/edit templates
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Create a new AppState backed by the SeaORM page repository
    pub fn new(db: DatabaseConnection, templates: Templates) -> Self {
        Self::with_repository(Arc::new(SeaOrmPageRepository::new(db)), templates)
    }

    /// Create an AppState over any repository implementation
    pub fn with_repository(pages: Arc<dyn PageRepository>, templates: Templates) -> Self {
        Self {
            pages,
            templates: Arc::new(templates),
        }
    }
}
