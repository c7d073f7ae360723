//! Domain error types
//!
//! These errors are framework-agnostic and represent wiki-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// No stored page carries the requested title
    NotFound,
    /// More than one stored row shares a title
    MultipleMatches { title: String },
    /// Database/persistence error
    Database(String),
    /// Template rendering error
    Template(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Page not found"),
            DomainError::MultipleMatches { title } => {
                write!(f, "Multiple pages stored under title '{}'", title)
            }
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::Template(msg) => write!(f, "Template error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
