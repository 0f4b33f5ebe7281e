//! Building blocks shared by every constant table.
//!
//! A [`Table`] is an immutable, ordered list of [`Entry`] values as declared in
//! source. Lookups by symbolic name and by literal value go through two
//! indexes which are built the first time they are needed and never touched
//! again, so a `Table` can live in a `static`.
//!
//! Tables are declared with the [`string_table!`] macro, which also emits one
//! `pub const` per entry so calling code can write `headers::CONTENT_TYPE`
//! instead of retyping `"Content-Type"`.

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::Serialize;

/// One registered literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    /// Symbolic identifier, e.g. `CONTENT_TYPE`.
    pub name: &'static str,
    /// Registered literal, e.g. `Content-Type`.
    pub value: &'static str,
    /// Specification the literal originates from.
    pub defined_in: &'static str,
}

/// How values of a table compare to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Compared byte for byte (methods).
    Sensitive,
    /// Compared after ASCII case folding (field names, media types, tokens,
    /// link relation types).
    Insensitive,
}

impl Case {
    fn fold(self, value: &str) -> String {
        match self {
            Case::Sensitive => value.to_string(),
            Case::Insensitive => value.to_ascii_lowercase(),
        }
    }
}

pub struct Table {
    key: &'static str,
    title: &'static str,
    registry: &'static str,
    case: Case,
    entries: &'static [Entry],
    by_name: OnceCell<IndexMap<&'static str, usize>>,
    by_value: OnceCell<IndexMap<String, usize>>,
}

impl Table {
    pub const fn new(
        key: &'static str,
        title: &'static str,
        registry: &'static str,
        case: Case,
        entries: &'static [Entry],
    ) -> Self {
        Self {
            key,
            title,
            registry,
            case,
            entries,
            by_name: OnceCell::new(),
            by_value: OnceCell::new(),
        }
    }

    /// Stable machine key, e.g. `header_fields`.
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Location of the registry this table is a snapshot of.
    pub fn registry(&self) -> &'static str {
        self.registry
    }

    pub fn case(&self) -> Case {
        self.case
    }

    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the given symbolic name. Names always match exactly.
    pub fn get(&self, name: &str) -> Option<&'static Entry> {
        let index = self.by_name.get_or_init(|| {
            tracing::trace!(table = self.key, "building name index");
            self.entries
                .iter()
                .enumerate()
                .map(|(i, e)| (e.name, i))
                .collect()
        });
        index.get(name).map(|&i| &self.entries[i])
    }

    /// Entry whose literal equals `value`, folding ASCII case when the table
    /// is case-insensitive.
    pub fn find(&self, value: &str) -> Option<&'static Entry> {
        let index = self.by_value.get_or_init(|| {
            tracing::trace!(table = self.key, "building value index");
            let mut index = IndexMap::with_capacity(self.entries.len());
            for (i, entry) in self.entries.iter().enumerate() {
                // first declaration wins; duplicates are caught by tests
                index.entry(self.case.fold(entry.value)).or_insert(i);
            }
            index
        });
        index.get(&self.case.fold(value)).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Ordered `name -> value` view, used for export.
    pub fn to_map(&self) -> IndexMap<&'static str, &'static str> {
        self.entries.iter().map(|e| (e.name, e.value)).collect()
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("key", &self.key)
            .field("case", &self.case)
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'static Entry;
    type IntoIter = std::slice::Iter<'static, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Declares one `pub const` per entry and a [`Table`] static holding them all.
///
/// ```ignore
/// string_table! {
///     pub static RANGE_UNITS = "range_units", "Range Units",
///         "https://www.iana.org/assignments/http-parameters", Case::Insensitive;
///     BYTES => "bytes", "RFC 9110, Section 14.1.2";
/// }
/// ```
macro_rules! string_table {
    (
        $(#[$meta:meta])*
        $vis:vis static $table:ident = $key:literal, $title:literal, $registry:literal, $case:expr;
        $( $name:ident => $value:literal, $defined_in:literal; )*
    ) => {
        $(
            #[doc = concat!("`", $value, "`, defined in ", $defined_in, ".")]
            pub const $name: &str = $value;
        )*

        $(#[$meta])*
        $vis static $table: $crate::registry::Table = $crate::registry::Table::new(
            $key,
            $title,
            $registry,
            $case,
            &[
                $(
                    $crate::registry::Entry {
                        name: stringify!($name),
                        value: $value,
                        defined_in: $defined_in,
                    },
                )*
            ],
        );
    };
}

/// Assertions shared by the per-table test modules.
#[cfg(test)]
pub(crate) mod invariants {
    use super::Table;
    use std::collections::HashSet;

    pub fn names_are_unique(table: &Table) {
        let mut seen = HashSet::new();
        for entry in table {
            assert!(seen.insert(entry.name), "{}: duplicate name {}", table.key(), entry.name);
        }
    }

    pub fn values_are_unique(table: &Table) {
        let mut seen = HashSet::new();
        for entry in table {
            let folded = match table.case() {
                super::Case::Sensitive => entry.value.to_string(),
                super::Case::Insensitive => entry.value.to_ascii_lowercase(),
            };
            assert!(seen.insert(folded), "{}: duplicate value {}", table.key(), entry.value);
        }
    }

    pub fn reverse_lookup_recovers_name(table: &Table) {
        for entry in table {
            let found = table.find(entry.value).expect("value must resolve");
            assert_eq!(found.name, entry.name, "{}: {}", table.key(), entry.value);
            assert_eq!(table.get(entry.name), Some(entry));
        }
    }

    pub fn check_all(table: &Table) {
        assert!(!table.is_empty());
        names_are_unique(table);
        values_are_unique(table);
        reverse_lookup_recovers_name(table);
        for entry in table {
            assert!(!entry.defined_in.is_empty(), "{}: {} has no reference", table.key(), entry.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    string_table! {
        static SAMPLE = "sample", "Sample", "https://example.invalid", Case::Insensitive;
        ALPHA => "Alpha", "RFC 0001";
        BETA_GAMMA => "Beta-Gamma", "RFC 0002";
    }

    string_table! {
        static STRICT = "strict", "Strict", "https://example.invalid", Case::Sensitive;
        LOWER => "x", "RFC 0003";
    }

    #[test]
    fn test_macro_emits_constants() {
        assert_eq!(ALPHA, "Alpha");
        assert_eq!(BETA_GAMMA, "Beta-Gamma");
        assert_eq!(SAMPLE.len(), 2);
        assert_eq!(SAMPLE.key(), "sample");
    }

    #[test]
    fn test_get_by_name_is_exact() {
        assert_eq!(SAMPLE.get("ALPHA").map(|e| e.value), Some("Alpha"));
        assert!(SAMPLE.get("alpha").is_none());
    }

    #[test]
    fn test_find_folds_case_when_insensitive() {
        assert_eq!(SAMPLE.find("beta-gamma").map(|e| e.name), Some("BETA_GAMMA"));
        assert!(SAMPLE.contains("ALPHA"));
        assert!(!SAMPLE.contains("delta"));
    }

    #[test]
    fn test_find_is_exact_when_sensitive() {
        assert!(STRICT.contains("x"));
        assert!(!STRICT.contains("X"));
    }

    #[test]
    fn test_to_map_keeps_declaration_order() {
        let map = SAMPLE.to_map();
        let names: Vec<_> = map.keys().copied().collect();
        assert_eq!(names, vec!["ALPHA", "BETA_GAMMA"]);
    }

    #[test]
    fn test_invariants_hold_for_sample() {
        invariants::check_all(&SAMPLE);
        invariants::check_all(&STRICT);
    }
}
