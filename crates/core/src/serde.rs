//! Serde helper functions for query-string deserialization.
//!
//! HTML forms submit every field, so an untouched input arrives as an empty
//! string rather than being absent.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty or blank strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
