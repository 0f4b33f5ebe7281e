//! The catalog as a whole: every string table in one place, lookups across
//! tables, and a serializable snapshot used by `httpconst export`.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::http::status::{STATUS_CODES, StatusEntry};
use crate::http::{
    auth_schemes, cache_directives, content_codings, forwarded, headers, link_relations,
    media_types, methods, preferences, range_units, transfer_codings,
};
use crate::registry::{Case, Entry, Table};

/// Every string table, in the order they are listed and exported.
pub static TABLES: [&Table; 11] = [
    &headers::HEADER_FIELDS,
    &methods::METHODS,
    &media_types::MEDIA_TYPES,
    &auth_schemes::AUTH_SCHEMES,
    &cache_directives::CACHE_DIRECTIVES,
    &content_codings::CONTENT_CODINGS,
    &transfer_codings::TRANSFER_CODINGS,
    &range_units::RANGE_UNITS,
    &link_relations::LINK_RELATIONS,
    &forwarded::FORWARDED_PARAMETERS,
    &preferences::PREFERENCES,
];

/// Table with the given key, e.g. `header_fields`. Keys match exactly.
pub fn table(key: &str) -> Option<&'static Table> {
    TABLES.iter().copied().find(|t| t.key() == key)
}

/// Like [`table`], but reports an unknown key as an error.
pub fn require_table(key: &str) -> Result<&'static Table> {
    table(key).ok_or_else(|| CatalogError::UnknownTable(key.to_string()))
}

/// Every table holding `value`, with the matching entry. A literal such as
/// `gzip` legitimately appears in more than one registry.
pub fn find_anywhere(value: &str) -> Vec<(&'static Table, &'static Entry)> {
    TABLES
        .iter()
        .copied()
        .filter_map(|t| t.find(value).map(|e| (t, e)))
        .collect()
}

/// Entry named `name` in table `key`.
pub fn lookup(key: &str, name: &str) -> Result<&'static Entry> {
    let table = require_table(key)?;
    table.get(name).ok_or_else(|| CatalogError::NotFound {
        table: key.to_string(),
        query: name.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct ExportedTable {
    pub title: &'static str,
    pub registry: &'static str,
    pub case: Case,
    pub entries: IndexMap<&'static str, &'static str>,
}

impl From<&Table> for ExportedTable {
    fn from(table: &Table) -> Self {
        Self {
            title: table.title(),
            registry: table.registry(),
            case: table.case(),
            entries: table.to_map(),
        }
    }
}

/// Snapshot of the whole catalog.
#[derive(Debug, Serialize)]
pub struct Export {
    pub tables: IndexMap<&'static str, ExportedTable>,
    pub status_codes: &'static [StatusEntry],
}

impl Export {
    pub fn new() -> Self {
        Self {
            tables: TABLES
                .iter()
                .map(|t| (t.key(), ExportedTable::from(*t)))
                .collect(),
            status_codes: STATUS_CODES,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for Export {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_keys_are_unique() {
        let keys: HashSet<_> = TABLES.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), TABLES.len());
    }

    #[test]
    fn test_table_by_key() {
        assert_eq!(table("header_fields").map(|t| t.len()), Some(headers::HEADER_FIELDS.len()));
        assert!(table("Header_Fields").is_none());
        assert!(matches!(require_table("nope"), Err(CatalogError::UnknownTable(k)) if k == "nope"));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("header_fields", "CONTENT_TYPE").unwrap().value, "Content-Type");
        assert!(matches!(
            lookup("methods", "BREW"),
            Err(CatalogError::NotFound { table, query }) if table == "methods" && query == "BREW"
        ));
    }

    #[test]
    fn test_find_anywhere_spans_tables() {
        let hits: Vec<_> = find_anywhere("gzip").iter().map(|(t, e)| (t.key(), e.name)).collect();
        assert!(hits.contains(&("content_codings", "GZIP")));
        assert!(hits.contains(&("transfer_codings", "GZIP")));
        assert!(find_anywhere("definitely-not-registered").is_empty());
    }

    #[test]
    fn test_export_round_trips_through_toml() {
        let text = Export::new().to_toml().unwrap();
        let parsed: toml::Table = toml::from_str(&text).unwrap();

        let content_type = parsed
            .get("tables")
            .and_then(|t| t.get("header_fields"))
            .and_then(|t| t.get("entries"))
            .and_then(|t| t.get("CONTENT_TYPE"))
            .and_then(|v| v.as_str());
        assert_eq!(content_type, Some("Content-Type"));

        let statuses = parsed.get("status_codes").and_then(|v| v.as_array()).unwrap();
        assert_eq!(statuses.len(), STATUS_CODES.len());
        let ok = statuses
            .iter()
            .find(|row| row.get("code").and_then(|c| c.as_integer()) == Some(200))
            .unwrap();
        assert_eq!(ok.get("phrase").and_then(|p| p.as_str()), Some("OK"));
    }
}
