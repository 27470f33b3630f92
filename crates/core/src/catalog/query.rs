//! Catalog query parameters and their validated form.
//!
//! [`CatalogParams`] is exactly what arrives on the query string. Parsing it
//! yields a [`CatalogQuery`] that storage backends can execute without
//! re-checking anything.

use serde::{Deserialize, Serialize};

use super::error::QueryError;
use crate::serde::deserialize_optional_string;

/// Raw query-string parameters accepted by the catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub min_price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub max_price: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl CatalogParams {
    /// Validates the parameters.
    ///
    /// Fails only when a price bound is present but not a number. Infinite
    /// bounds are accepted; NaN is not.
    pub fn parse(&self) -> Result<CatalogQuery, QueryError> {
        let search = self.q.as_deref().unwrap_or_default().trim().to_string();
        let terms = search.split_whitespace().map(str::to_string).collect();

        let category = self.category.clone().filter(|c| !c.is_empty());
        let min_price = parse_price("min_price", self.min_price.as_deref())?;
        let max_price = parse_price("max_price", self.max_price.as_deref())?;

        let sort = SortKey::from_param(self.sort_by.as_deref());
        let direction = sort.direction_for(self.sort_order.as_deref().unwrap_or("desc"));

        Ok(CatalogQuery {
            search,
            terms,
            category,
            min_price,
            max_price,
            sort,
            direction,
        })
    }
}

fn parse_price(field: &'static str, value: Option<&str>) -> Result<Option<f64>, QueryError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(price) if !price.is_nan() => Ok(Some(price)),
        _ => Err(QueryError::InvalidPrice {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Column the catalog is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Price,
    Name,
    #[default]
    DateAdded,
}

impl SortKey {
    /// Maps `sort_by`; anything unrecognised sorts by date added.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("price") => SortKey::Price,
            Some("name") => SortKey::Name,
            _ => SortKey::DateAdded,
        }
    }

    /// Query-string value for this key.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Name => "name",
            SortKey::DateAdded => "date_added",
        }
    }

    /// Resolves `sort_order` for this key.
    ///
    /// Price and date are descending only for a literal `desc`; name is
    /// ascending only for a literal `asc`. The two rules disagree for any
    /// other value and both are kept as is.
    pub fn direction_for(&self, sort_order: &str) -> SortDirection {
        match self {
            SortKey::Price | SortKey::DateAdded => {
                if sort_order == "desc" {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                }
            }
            SortKey::Name => {
                if sort_order == "asc" {
                    SortDirection::Ascending
                } else {
                    SortDirection::Descending
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Query-string value for this direction.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A validated catalog query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogQuery {
    /// The trimmed search string, kept for echoing back into the form.
    pub search: String,
    /// Whitespace-separated search terms; every one must match some field.
    pub terms: Vec<String>,
    /// Exact, case-sensitive category filter.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    pub sort: SortKey,
    pub direction: SortDirection,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            terms: Vec::new(),
            category: None,
            min_price: None,
            max_price: None,
            sort: SortKey::DateAdded,
            direction: SortDirection::Descending,
        }
    }
}
