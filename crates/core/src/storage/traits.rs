use async_trait::async_trait;

use crate::catalog::{CatalogQuery, Item, NewItem};

use super::Result;

/// Repository for inventory items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its ID.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Runs a catalog query: filters, then orders the whole result set.
    async fn search_items(&self, query: &CatalogQuery) -> Result<Vec<Item>>;

    /// Gets the distinct categories across every item, ascending.
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// Counts all items.
    async fn count_items(&self) -> Result<u64>;

    /// Inserts a new item and returns it with its assigned ID.
    async fn create_item(&self, item: &NewItem) -> Result<Item>;
}
