//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{DomainError, Page, Title};

/// Repository trait for Page entity
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Load the single page stored under `title`.
    ///
    /// Fails with [`DomainError::NotFound`] when nothing is stored and with
    /// [`DomainError::MultipleMatches`] when more than one row shares the title.
    async fn load(&self, title: &Title) -> Result<Page, DomainError>;

    /// Store a page, replacing any previous body under the same title
    async fn save(&self, page: &Page) -> Result<(), DomainError>;
}
