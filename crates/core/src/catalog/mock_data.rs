//! Sample inventory for seeding an empty store.
//!
//! Pure functions with no side effects, usable from unit tests and the
//! startup seeder alike.

use chrono::{DateTime, Duration, Utc};

use super::types::NewItem;

/// The five sample items, dated relative to now.
pub fn sample_items() -> Vec<NewItem> {
    sample_items_at(Utc::now())
}

/// The five sample items, with the last one dated at `newest`.
///
/// Each item is one second older than the next, so insertion order and
/// date order agree.
///
/// # Example
///
/// ```
/// use threadbare_core::catalog::sample_items_at;
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let items = sample_items_at(now);
///
/// assert_eq!(items.len(), 5);
/// assert_eq!(items[4].date_added, now);
/// ```
pub fn sample_items_at(newest: DateTime<Utc>) -> Vec<NewItem> {
    let items = vec![
        NewItem::new("Vintage Denim Jacket", "Jackets", "M", "Good", 99.00, 1)
            .with_notes("Classic 90s denim jacket in excellent condition"),
        NewItem::new("Retro T-Shirt", "Tops", "L", "Excellent", 49.00, 2)
            .with_notes("Vintage band t-shirt from the 80s"),
        NewItem::new("Leather Boots", "Footwear", "42", "Good", 199.00, 1)
            .with_notes("Vintage leather boots, barely worn"),
        NewItem::new("Vintage Sweater", "Tops", "S", "Excellent", 79.00, 1)
            .with_notes("Hand-knitted wool sweater from the 70s"),
        NewItem::new("Denim Jeans", "Bottoms", "32", "Good", 89.00, 2)
            .with_notes("Classic 90s high-waisted jeans"),
    ];

    let last = items.len() as i64 - 1;
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| item.with_date_added(newest - Duration::seconds(last - i as i64)))
        .collect()
}
