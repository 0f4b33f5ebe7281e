//! Catalog-wide properties checked through the public API only.

use std::collections::HashSet;

use httpconst::catalog::{self, TABLES};
use httpconst::http::status::{self, HttpStatus, STATUS_CODES};
use httpconst::http::{content_codings, headers, media_types, methods};
use httpconst::Case;

#[test]
fn test_known_values() {
    assert_eq!(headers::CONTENT_TYPE, "Content-Type");
    assert_eq!(methods::PATCH, "PATCH");
    assert_eq!(media_types::TEXT_EVENT_STREAM, "text/event-stream");
    assert_eq!(HttpStatus::Ok.code(), 200);
    assert_eq!(status::reason_phrase(200), Some("OK"));
}

#[test]
fn test_status_aliases_are_consistent() {
    for entry in STATUS_CODES {
        let by_code = HttpStatus::from_code(entry.code).unwrap();
        let by_name = status::by_mnemonic(entry.name).unwrap();
        assert_eq!(by_code, by_name);
        assert_eq!(status::reason_phrase(entry.code), Some(by_name.reason_phrase()));
    }
}

#[test]
fn test_every_table_round_trips_values_to_names() {
    for table in TABLES {
        let mut names = HashSet::new();
        for entry in table.entries() {
            assert!(names.insert(entry.name), "{}: {}", table.key(), entry.name);
            let found = table.find(entry.value).unwrap();
            assert_eq!(found.name, entry.name, "{}: {}", table.key(), entry.value);
        }
    }
}

#[test]
fn test_case_insensitive_tables_fold_on_lookup() {
    for table in TABLES.iter().filter(|t| t.case() == Case::Insensitive) {
        for entry in table.entries() {
            let upper = entry.value.to_ascii_uppercase();
            assert_eq!(table.find(&upper).map(|e| e.name), Some(entry.name));
        }
    }
}

#[test]
fn test_x_prefixed_codings_stay_distinct() {
    assert_ne!(content_codings::GZIP, content_codings::X_GZIP);
    assert_ne!(content_codings::COMPRESS, content_codings::X_COMPRESS);
}

#[test]
fn test_tables_are_reachable_by_key() {
    for table in TABLES {
        let again = catalog::table(table.key()).unwrap();
        assert!(std::ptr::eq(table, again));
    }
}
