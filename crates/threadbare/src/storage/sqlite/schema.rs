//! SQLite schema definitions, SQL query constants and catalog query composition.
//!
//! Everything here is pure data or pure functions - no I/O.

use rusqlite::types::Value;
use threadbare_core::catalog::{CatalogQuery, SortDirection, SortKey};

use super::functions::FOLD_CASE;

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Inventory items
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    size TEXT NOT NULL,
    condition TEXT NOT NULL,
    price REAL NOT NULL,
    quantity INTEGER NOT NULL,
    date_added TEXT NOT NULL,
    notes TEXT,
    image_url TEXT,
    image_file TEXT
);

-- Indexes for the catalog filters and default ordering
CREATE INDEX IF NOT EXISTS idx_items_category ON items(category);
CREATE INDEX IF NOT EXISTS idx_items_price ON items(price);
CREATE INDEX IF NOT EXISTS idx_items_date_added ON items(date_added);
"#;

/// Column list shared by every item query; matches `row_to_item`.
const ITEM_COLUMNS: &str =
    "id, name, category, size, condition, price, quantity, date_added, notes, image_url, image_file";

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name, category, size, condition, price, quantity, date_added, notes, image_url, image_file)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, category, size, condition, price, quantity, date_added, notes, image_url, image_file
FROM items
WHERE id = ?1
"#;

pub const SELECT_DISTINCT_CATEGORIES: &str = r#"
SELECT DISTINCT category
FROM items
ORDER BY category ASC
"#;

pub const COUNT_ITEMS: &str = r#"
SELECT COUNT(*)
FROM items
"#;

/// Columns a single search term is matched against.
const SEARCH_COLUMNS: [&str; 5] = ["name", "category", "size", "condition", "notes"];

/// Builds the SELECT statement and positional parameters for a catalog query.
///
/// Each search term becomes one OR-group over the searchable columns, and the
/// groups are ANDed together with the category and price filters.
pub fn build_search_query(query: &CatalogQuery) -> (String, Vec<Value>) {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    for term in &query.terms {
        params.push(Value::Text(like_pattern(term)));
        let index = params.len();
        let group = SEARCH_COLUMNS
            .iter()
            .map(|column| format!("{FOLD_CASE}({column}) LIKE ?{index} ESCAPE '\\'"))
            .collect::<Vec<_>>()
            .join(" OR ");
        clauses.push(format!("({group})"));
    }

    if let Some(category) = &query.category {
        params.push(Value::Text(category.clone()));
        clauses.push(format!("category = ?{}", params.len()));
    }

    if let Some(min) = query.min_price {
        params.push(Value::Real(min));
        clauses.push(format!("price >= ?{}", params.len()));
    }

    if let Some(max) = query.max_price {
        params.push(Value::Real(max));
        clauses.push(format!("price <= ?{}", params.len()));
    }

    let mut sql = format!("SELECT {ITEM_COLUMNS} FROM items");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(&order_by_clause(query.sort, query.direction));

    (sql, params)
}

/// ORDER BY for a sort key; the id breaks ties in the same direction.
pub fn order_by_clause(sort: SortKey, direction: SortDirection) -> String {
    let column = match sort {
        SortKey::Price => "price",
        SortKey::Name => "name",
        SortKey::DateAdded => "date_added",
    };
    let dir = match direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };
    format!(" ORDER BY {column} {dir}, id {dir}")
}

/// Lower-cased `%term%` pattern with LIKE wildcards escaped.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
