//! Startup seeding of the sample inventory.

use threadbare_core::catalog::sample_items;
use threadbare_core::storage::{ItemRepository, Result};

/// Inserts the sample items when the store is empty.
///
/// Returns how many items were inserted. A store that already holds
/// anything is left alone, so running this on every start is safe.
pub async fn seed_if_empty(repo: &dyn ItemRepository) -> Result<usize> {
    let existing = repo.count_items().await?;
    if existing > 0 {
        tracing::debug!(existing, "Item store already populated, skipping seed");
        return Ok(0);
    }

    let items = sample_items();
    for item in &items {
        let created = repo.create_item(item).await?;
        tracing::trace!(item_id = created.id, name = %created.name, "Seeded item");
    }

    tracing::info!(count = items.len(), "Seeded sample items");
    Ok(items.len())
}
