//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use threadbare_core::catalog::{
    distinct_categories, filter_items, sort_items, CatalogQuery, Item, NewItem,
};
use threadbare_core::storage::{ItemRepository, Result};

/// In-memory storage backend for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<i64, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn search_items(&self, query: &CatalogQuery) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        let all: Vec<Item> = items.values().cloned().collect();

        let mut found: Vec<Item> = filter_items(&all, query).into_iter().cloned().collect();
        sort_items(&mut found, query.sort, query.direction);
        Ok(found)
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        let items = self.items.read().await;
        Ok(distinct_categories(items.values()))
    }

    async fn count_items(&self) -> Result<u64> {
        let items = self.items.read().await;
        Ok(items.len() as u64)
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item> {
        let mut items = self.items.write().await;
        // Ids start at 1 and follow the highest existing id.
        let id = items.keys().next_back().map_or(1, |last| last + 1);
        let created = item.clone().into_item(id);
        items.insert(id, created.clone());
        Ok(created)
    }
}
