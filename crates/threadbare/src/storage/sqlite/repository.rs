//! SQLite repository implementation.
//!
//! Implements the repository traits from `threadbare_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use threadbare_core::catalog::{CatalogQuery, Item, NewItem};
use threadbare_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_item};
use super::error::map_tokio_rusqlite_error;
use super::functions::register_functions;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on the single background thread owned by the
/// `tokio_rusqlite::Connection`.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema and the SQL functions queries use.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            register_functions(conn).map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item", id.to_string()))
    }

    async fn search_items(&self, query: &CatalogQuery) -> Result<Vec<Item>> {
        let (sql, params) = schema::build_search_query(query);
        tracing::debug!(sql = %sql, params = params.len(), "Running catalog query");

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params.iter()), row_to_item)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item", ""))
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_DISTINCT_CATEGORIES)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([], |row| row.get::<_, String>(0))
                    .map_err(wrap_err)?;

                let mut categories = Vec::new();
                for row_result in rows {
                    categories.push(row_result.map_err(wrap_err)?);
                }
                Ok(categories)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item", ""))
    }

    async fn count_items(&self) -> Result<u64> {
        let count = self
            .conn
            .call(|conn| {
                conn.query_row(schema::COUNT_ITEMS, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item", ""))?;

        u64::try_from(count).map_err(|e| RepositoryError::InvalidData(e.to_string()))
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item> {
        let new_item = item.clone();
        let date_added = format_datetime(&item.date_added);

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ITEM,
                    rusqlite::params![
                        new_item.name,
                        new_item.category,
                        new_item.size,
                        new_item.condition,
                        new_item.price,
                        new_item.quantity,
                        date_added,
                        new_item.notes,
                        new_item.image_url,
                        new_item.image_file
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item", item.name.clone()))?;

        Ok(item.clone().into_item(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use threadbare_core::catalog::{
        sample_items, sample_items_at, CatalogParams, SortDirection, SortKey,
    };

    async fn seeded() -> SqliteRepository {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        for item in sample_items() {
            repo.create_item(&item).await.unwrap();
        }
        repo
    }

    async fn search(repo: &SqliteRepository, params: CatalogParams) -> Vec<String> {
        let query = params.parse().unwrap();
        repo.search_items(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let items = sample_items();

        let first = repo.create_item(&items[0]).await.unwrap();
        let second = repo.create_item(&items[1]).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count_items().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_item_round_trips_fields() {
        let newest = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::microseconds(250);
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let created = repo
            .create_item(&sample_items_at(newest).remove(4).with_image_file("jeans.jpg"))
            .await
            .unwrap();

        let item = repo.get_item(created.id).await.unwrap().unwrap();

        assert_eq!(item, created);
        assert_eq!(item.name, "Denim Jeans");
        assert_eq!(item.date_added, newest);
        assert_eq!(item.image_file.as_deref(), Some("jeans.jpg"));
        assert_eq!(item.image_url, None);
    }

    #[tokio::test]
    async fn test_get_missing_item_is_none() {
        let repo = seeded().await;
        assert_eq!(repo.get_item(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_default_order_is_newest_first() {
        let repo = seeded().await;

        let names = search(&repo, CatalogParams::default()).await;

        assert_eq!(
            names,
            vec![
                "Denim Jeans",
                "Vintage Sweater",
                "Leather Boots",
                "Retro T-Shirt",
                "Vintage Denim Jacket",
            ]
        );
    }

    #[tokio::test]
    async fn test_category_tops() {
        let repo = seeded().await;

        let names = search(
            &repo,
            CatalogParams {
                category: Some("Tops".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(names, vec!["Vintage Sweater", "Retro T-Shirt"]);
    }

    #[tokio::test]
    async fn test_price_window() {
        let repo = seeded().await;

        let names = search(
            &repo,
            CatalogParams {
                min_price: Some("90".to_string()),
                max_price: Some("150".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(names, vec!["Vintage Denim Jacket"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_conjunctive() {
        let repo = seeded().await;

        let denim = search(
            &repo,
            CatalogParams {
                q: Some("DENIM".to_string()),
                sort_by: Some("name".to_string()),
                sort_order: Some("asc".to_string()),
                ..Default::default()
            },
        )
        .await;
        let denim_jacket = search(
            &repo,
            CatalogParams {
                q: Some("denim jacket".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(denim, vec!["Denim Jeans", "Vintage Denim Jacket"]);
        assert_eq!(denim_jacket, vec!["Vintage Denim Jacket"]);
    }

    #[tokio::test]
    async fn test_search_matches_notes_and_size() {
        let repo = seeded().await;

        let wool = search(
            &repo,
            CatalogParams {
                q: Some("wool".to_string()),
                ..Default::default()
            },
        )
        .await;
        let size = search(
            &repo,
            CatalogParams {
                q: Some("42".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(wool, vec!["Vintage Sweater"]);
        assert_eq!(size, vec!["Leather Boots"]);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = seeded().await;

        let names = search(
            &repo,
            CatalogParams {
                q: Some("%".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let repo = seeded().await;
        repo.create_item(&NewItem::new("CAFÉ Jacket", "Jackets", "L", "Good", 65.0, 1))
            .await
            .unwrap();

        for term in ["CAFÉ", "café", "Café jacket"] {
            let names = search(
                &repo,
                CatalogParams {
                    q: Some(term.to_string()),
                    ..Default::default()
                },
            )
            .await;

            assert_eq!(names, vec!["CAFÉ Jacket"], "term {term:?}");
        }
    }

    #[tokio::test]
    async fn test_search_with_null_notes() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.create_item(&NewItem::new("Wool Scarf", "Accessories", "One", "Good", 15.0, 1))
            .await
            .unwrap();

        let names = search(
            &repo,
            CatalogParams {
                q: Some("scarf".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(names, vec!["Wool Scarf"]);
    }

    #[tokio::test]
    async fn test_sort_orders() {
        let repo = seeded().await;

        let by_price = |order: &str| CatalogParams {
            sort_by: Some("price".to_string()),
            sort_order: Some(order.to_string()),
            ..Default::default()
        };
        let price_desc = repo
            .search_items(&by_price("desc").parse().unwrap())
            .await
            .unwrap();
        let price_asc = repo
            .search_items(&by_price("asc").parse().unwrap())
            .await
            .unwrap();

        assert!(price_desc.windows(2).all(|w| w[0].price >= w[1].price));
        assert!(price_asc.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[tokio::test]
    async fn test_name_sort_defaults_to_descending() {
        let repo = seeded().await;
        let query = CatalogParams {
            sort_by: Some("name".to_string()),
            sort_order: Some("sideways".to_string()),
            ..Default::default()
        }
        .parse()
        .unwrap();
        assert_eq!(query.sort, SortKey::Name);
        assert_eq!(query.direction, SortDirection::Descending);

        let items = repo.search_items(&query).await.unwrap();

        assert!(items.windows(2).all(|w| w[0].name >= w[1].name));
    }

    #[tokio::test]
    async fn test_categories_are_distinct_and_sorted() {
        let repo = seeded().await;

        let categories = repo.list_categories().await.unwrap();

        assert_eq!(categories, vec!["Bottoms", "Footwear", "Jackets", "Tops"]);
    }

    #[tokio::test]
    async fn test_file_database_persists_between_connections() {
        let path = std::env::temp_dir().join(format!(
            "threadbare-test-{}-{}.db",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let path_str = path.to_string_lossy().to_string();

        {
            let repo = SqliteRepository::new(&path_str).await.unwrap();
            repo.create_item(&sample_items()[0]).await.unwrap();
        }

        let reopened = SqliteRepository::new(&path_str).await.unwrap();
        assert_eq!(reopened.count_items().await.unwrap(), 1);

        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
