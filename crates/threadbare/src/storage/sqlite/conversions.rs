//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use threadbare_core::catalog::Item;

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, name, category, size, condition, price, quantity,
/// date_added, notes, image_url, image_file
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    let date_added: String = row.get(7)?;

    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        size: row.get(3)?,
        condition: row.get(4)?,
        price: row.get(5)?,
        quantity: row.get(6)?,
        date_added: parse_datetime(7, &date_added)?,
        notes: row.get(8)?,
        image_url: row.get(9)?,
        image_file: row.get(10)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Fixed-width RFC 3339 with microseconds, so text order is time order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
