//! Storage abstraction for catalog items.
//!
//! The handler layer only ever talks to [`ItemRepository`]; which backend sits
//! behind it is decided at startup from configuration.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Item;

pub mod database;
pub mod memory;

pub use database::DbItemRepository;
pub use memory::InMemoryItemRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("item {0} already exists")]
    Duplicate(Uuid),

    #[error("item {0} does not exist")]
    Missing(Uuid),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Every call is atomic on its own; callers get no guarantee across calls.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Item>>;

    /// A missing item is `Ok(None)`, not an error.
    async fn get(&self, id: Uuid) -> RepositoryResult<Option<Item>>;

    /// Persist a fully populated item. Fails with `Duplicate` if the id is taken.
    async fn create(&self, item: Item) -> RepositoryResult<()>;

    /// Replace the stored item with the same id. Fails with `Missing` if absent.
    async fn update(&self, item: Item) -> RepositoryResult<()>;

    /// Fails with `Missing` if absent.
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
