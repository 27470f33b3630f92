mod error;
mod mock_data;
mod operations;
mod query;
mod service;
mod sorting;
mod types;

pub use error::{CatalogError, QueryError};
pub use mock_data::{sample_items, sample_items_at};
pub use operations::{distinct_categories, filter_items, item_matches, item_matches_term};
pub use query::{CatalogParams, CatalogQuery, SortDirection, SortKey};
pub use service::{run_catalog, CatalogPage};
pub use sorting::{compare_items, sort_items};
pub use types::{format_price, Item, NewItem};
