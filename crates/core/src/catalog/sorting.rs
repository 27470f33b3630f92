use std::cmp::Ordering;

use super::query::{SortDirection, SortKey};
use super::types::Item;

/// Compares two items by a sort key, ascending.
///
/// Ties fall back to the id so the order is total.
pub fn compare_items(a: &Item, b: &Item, key: SortKey) -> Ordering {
    let primary = match key {
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::DateAdded => a.date_added.cmp(&b.date_added),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Sorts items in place by key and direction.
pub fn sort_items(items: &mut [Item], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = compare_items(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
