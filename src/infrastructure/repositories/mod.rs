//! Repository implementations using SeaORM

pub mod page_repository;

pub use page_repository::SeaOrmPageRepository;
