//! Application-defined SQL functions registered on every connection.
//!
//! SQLite's built-in `lower()` only folds ASCII, so search uses `fold_case`,
//! which lowercases with the same Unicode rules as the in-memory backend.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// Name of the Unicode-aware lowercase function.
pub const FOLD_CASE: &str = "fold_case";

/// Registers the functions the catalog queries rely on.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        FOLD_CASE,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|s| s.to_lowercase()))
        },
    )
}
