//! Domain layer - Pure wiki abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum) apart
//! from the `DbErr` conversion on the error type.
//! Only value types, trait definitions and domain error types.

pub mod errors;
pub mod page;
pub mod repositories;

pub use errors::DomainError;
pub use page::{FRONT_PAGE, Page, Title};
pub use repositories::*;
