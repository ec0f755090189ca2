use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ItemRepository, RepositoryError, RepositoryResult};
use crate::models::Item;

/// Map-backed store, used when no database is configured and in tests.
///
/// `list` returns items ordered by creation time, ties broken by id.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<Uuid, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> RepositoryResult<Vec<Item>> {
        let mut items: Vec<Item> = self.items.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.created_date.cmp(&b.created_date).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn get(&self, id: Uuid) -> RepositoryResult<Option<Item>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn create(&self, item: Item) -> RepositoryResult<()> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(RepositoryError::Duplicate(item.id));
        }
        items.insert(item.id, item);
        Ok(())
    }

    async fn update(&self, item: Item) -> RepositoryResult<()> {
        let mut items = self.items.write().await;
        match items.get_mut(&item.id) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(RepositoryError::Missing(item.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        match self.items.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::Missing(id)),
        }
    }
}

