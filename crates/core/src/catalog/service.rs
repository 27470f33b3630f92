//! Catalog listing: parameters in, ordered items and category facets out.

use serde::Serialize;

use super::error::CatalogError;
use super::query::{CatalogParams, CatalogQuery};
use super::types::Item;
use crate::storage::ItemRepository;

/// One rendered catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub items: Vec<Item>,
    /// Distinct categories across the whole store, not just `items`.
    pub categories: Vec<String>,
    #[serde(skip)]
    pub query: CatalogQuery,
}

/// Parses the parameters and runs the query against the repository.
///
/// Nothing is fetched when the parameters are invalid.
pub async fn run_catalog(
    repo: &dyn ItemRepository,
    params: &CatalogParams,
) -> Result<CatalogPage, CatalogError> {
    let query = params.parse()?;
    let items = repo.search_items(&query).await?;
    let categories = repo.list_categories().await?;

    Ok(CatalogPage {
        items,
        categories,
        query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::catalog::{
        distinct_categories, filter_items, sample_items, sort_items, NewItem, QueryError,
    };
    use crate::storage::{RepositoryError, Result};

    /// Vec-backed repository that counts how often it is queried.
    struct FixedRepository {
        items: Vec<Item>,
        calls: AtomicUsize,
    }

    impl FixedRepository {
        fn seeded() -> Self {
            Self {
                items: sample_items()
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| item.into_item(i as i64 + 1))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ItemRepository for FixedRepository {
        async fn get_item(&self, id: i64) -> Result<Option<Item>> {
            Ok(self.items.iter().find(|i| i.id == id).cloned())
        }

        async fn search_items(&self, query: &CatalogQuery) -> Result<Vec<Item>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut items: Vec<Item> = filter_items(&self.items, query)
                .into_iter()
                .cloned()
                .collect();
            sort_items(&mut items, query.sort, query.direction);
            Ok(items)
        }

        async fn list_categories(&self) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(distinct_categories(&self.items))
        }

        async fn count_items(&self) -> Result<u64> {
            Ok(self.items.len() as u64)
        }

        async fn create_item(&self, _item: &NewItem) -> Result<Item> {
            Err(RepositoryError::QueryFailed("read only".to_string()))
        }
    }

    struct BrokenRepository;

    #[async_trait]
    impl ItemRepository for BrokenRepository {
        async fn get_item(&self, _id: i64) -> Result<Option<Item>> {
            Err(RepositoryError::ConnectionFailed("gone".to_string()))
        }

        async fn search_items(&self, _query: &CatalogQuery) -> Result<Vec<Item>> {
            Err(RepositoryError::ConnectionFailed("gone".to_string()))
        }

        async fn list_categories(&self) -> Result<Vec<String>> {
            Err(RepositoryError::ConnectionFailed("gone".to_string()))
        }

        async fn count_items(&self) -> Result<u64> {
            Err(RepositoryError::ConnectionFailed("gone".to_string()))
        }

        async fn create_item(&self, _item: &NewItem) -> Result<Item> {
            Err(RepositoryError::ConnectionFailed("gone".to_string()))
        }
    }

    fn names(page: &CatalogPage) -> Vec<&str> {
        page.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_default_listing_is_newest_first() {
        let repo = FixedRepository::seeded();

        let page = run_catalog(&repo, &CatalogParams::default()).await.unwrap();

        assert_eq!(
            names(&page),
            vec![
                "Denim Jeans",
                "Vintage Sweater",
                "Leather Boots",
                "Retro T-Shirt",
                "Vintage Denim Jacket",
            ]
        );
        assert_eq!(page.categories, vec!["Bottoms", "Footwear", "Jackets", "Tops"]);
    }

    #[tokio::test]
    async fn test_categories_ignore_filters() {
        let repo = FixedRepository::seeded();
        let params = CatalogParams {
            category: Some("Tops".to_string()),
            ..Default::default()
        };

        let page = run_catalog(&repo, &params).await.unwrap();

        assert_eq!(names(&page), vec!["Vintage Sweater", "Retro T-Shirt"]);
        assert_eq!(page.categories.len(), 4);
    }

    #[tokio::test]
    async fn test_invalid_params_skip_the_store() {
        let repo = FixedRepository::seeded();
        let params = CatalogParams {
            min_price: Some("abc".to_string()),
            ..Default::default()
        };

        let result = run_catalog(&repo, &params).await;

        assert!(matches!(
            result,
            Err(CatalogError::Query(QueryError::InvalidPrice { .. }))
        ));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repository_failure_is_reported() {
        let result = run_catalog(&BrokenRepository, &CatalogParams::default()).await;

        assert!(matches!(result, Err(CatalogError::Repository(_))));
    }
}
