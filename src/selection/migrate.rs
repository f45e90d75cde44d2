//! Upgrade path from the legacy boolean selection format
//!
//! Before tags existed, selections were stored as `{"Artist": true}`. The
//! migration maps `true` to the primary tag and drops every falsy entry.
//! Entries already holding a tag id pass through, so running the migration
//! on migrated data returns it unchanged.

use super::types::{SelectionMap, SelectionTag};
use serde_json::Value;
use tracing::warn;

/// Whether `raw` still contains entries in the legacy boolean format
#[must_use]
pub fn is_legacy_format(raw: &Value) -> bool {
    raw.as_object()
        .is_some_and(|entries| entries.values().any(Value::is_boolean))
}

/// Convert a stored selection document into a [`SelectionMap`]
///
/// - `true` → [`SelectionTag::PRIMARY`]
/// - `false`, `null`, `""` → omitted (unset)
/// - a known tag id → that tag
/// - anything else → dropped and logged
///
/// A document that is not a JSON object yields an empty map.
#[must_use]
pub fn legacy_bool_map_to_tag_map(raw: &Value) -> SelectionMap {
    let Some(entries) = raw.as_object() else {
        if !raw.is_null() {
            warn!("stored selections are not an object, starting empty");
        }
        return SelectionMap::new();
    };

    entries
        .iter()
        .filter_map(|(name, value)| match value {
            Value::Bool(true) => Some((name.clone(), SelectionTag::PRIMARY)),
            Value::Bool(false) | Value::Null => None,
            Value::String(id) if id.is_empty() => None,
            Value::String(id) => match SelectionTag::parse(id) {
                Some(tag) => Some((name.clone(), tag)),
                None => {
                    warn!(artist = %name, tag = %id, "dropping unknown selection tag");
                    None
                }
            },
            other => {
                warn!(artist = %name, value = %other, "dropping malformed selection entry");
                None
            }
        })
        .collect()
}
