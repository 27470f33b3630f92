use std::collections::BTreeSet;

use super::query::CatalogQuery;
use super::types::Item;

/// Returns true if `term` occurs, ignoring case, in any searchable field.
///
/// Searchable fields are name, category, size, condition and notes.
pub fn item_matches_term(item: &Item, term: &str) -> bool {
    let needle = term.to_lowercase();
    [
        Some(item.name.as_str()),
        Some(item.category.as_str()),
        Some(item.size.as_str()),
        Some(item.condition.as_str()),
        item.notes.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Returns true if the item passes every filter in the query.
pub fn item_matches(item: &Item, query: &CatalogQuery) -> bool {
    query.terms.iter().all(|term| item_matches_term(item, term))
        && query.category.as_ref().is_none_or(|c| &item.category == c)
        && query.min_price.is_none_or(|min| item.price >= min)
        && query.max_price.is_none_or(|max| item.price <= max)
}

/// Filters items by the query, without ordering them.
pub fn filter_items<'a>(items: &'a [Item], query: &CatalogQuery) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item_matches(item, query))
        .collect()
}

/// Distinct categories across all items, in ascending order.
pub fn distinct_categories<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
