//! End-to-end tests of the `httpconst` binary.
mod common;

use common::{httpconst, httpconst_with_config};

#[test]
fn test_get_prints_literal() {
    let r = httpconst(&["get", "header_fields", "CONTENT_TYPE"]);
    assert!(r.success, "{}", r.stderr);
    assert_eq!(r.stdout, "Content-Type\n");
}

#[test]
fn test_get_accepts_loose_names_by_default() {
    let r = httpconst(&["get", "media_types", "application-json"]);
    assert!(r.success, "{}", r.stderr);
    assert_eq!(r.stdout, "application/json\n");
}

#[test]
fn test_get_maps_punctuation_to_underscores() {
    let r = httpconst(&["get", "link_relations", "openid2.local_id"]);
    assert!(r.success, "{}", r.stderr);
    assert_eq!(r.stdout, "openid2.local_id\n");

    let r = httpconst(&["get", "media_types", "application/vnd.api+json"]);
    assert!(r.success, "{}", r.stderr);
    assert_eq!(r.stdout, "application/vnd.api+json\n");
}

#[test]
fn test_get_strict_names_from_config() {
    let r = httpconst_with_config("case_insensitive_names = false\n", &["get", "header_fields", "content_type"]);
    assert!(!r.success);
    assert!(r.stderr.contains("no entry matching"));
}

#[test]
fn test_get_unknown_table_fails() {
    let r = httpconst(&["get", "nope", "X"]);
    assert!(!r.success);
    assert!(r.stderr.contains("unknown table: nope"));
}

#[test]
fn test_find_across_tables() {
    let r = httpconst(&["find", "gzip"]);
    assert!(r.success, "{}", r.stderr);
    let lines = r.lines();
    assert!(lines.contains(&"content_codings\tGZIP\tgzip"));
    assert!(lines.contains(&"transfer_codings\tGZIP\tgzip"));
}

#[test]
fn test_find_in_one_table() {
    let r = httpconst(&["find", "x-gzip", "--table", "content_codings"]);
    assert!(r.success, "{}", r.stderr);
    assert_eq!(r.lines(), vec!["content_codings\tX_GZIP\tx-gzip"]);
}

#[test]
fn test_find_miss_fails() {
    let r = httpconst(&["find", "not-a-registered-literal"]);
    assert!(!r.success);
    assert!(r.stderr.contains("in catalog"), "{}", r.stderr);
}

#[test]
fn test_find_miss_names_requested_table() {
    let r = httpconst(&["find", "nope", "--table", "methods"]);
    assert!(!r.success);
    assert!(r.stderr.contains("no entry matching \"nope\" in methods"), "{}", r.stderr);
}

#[test]
fn test_status_by_code_and_mnemonic() {
    let by_code = httpconst(&["status", "404"]);
    let by_name = httpconst(&["status", "NOT_FOUND"]);
    assert!(by_code.success && by_name.success);
    assert_eq!(by_code.stdout, by_name.stdout);
    assert!(by_code.stdout.starts_with("404 Not Found\tNOT_FOUND\tClient Error\t"));
}

#[test]
fn test_status_unregistered_code_fails() {
    let r = httpconst(&["status", "299"]);
    assert!(!r.success);
    assert!(r.stderr.contains("unregistered status code: 299"));
}

#[test]
fn test_status_toml_format() {
    let r = httpconst(&["--format", "toml", "status", "418"]);
    assert!(r.success, "{}", r.stderr);
    let row: toml::Table = toml::from_str(&r.stdout).unwrap();
    assert_eq!(row.get("code").and_then(|v| v.as_integer()), Some(418));
    assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("IM_A_TEAPOT"));
}

#[test]
fn test_tables_lists_every_table() {
    let r = httpconst(&["tables"]);
    assert!(r.success, "{}", r.stderr);
    assert_eq!(r.lines().len(), httpconst::catalog::TABLES.len());
    assert!(r.stdout.contains("header_fields\t"));
}

#[test]
fn test_format_from_config() {
    let r = httpconst_with_config("format = \"toml\"\n", &["tables"]);
    assert!(r.success, "{}", r.stderr);
    let doc: toml::Table = toml::from_str(&r.stdout).unwrap();
    let rows = doc.get("rows").and_then(|v| v.as_array()).unwrap();
    assert_eq!(rows.len(), httpconst::catalog::TABLES.len());
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let r = httpconst_with_config("format = [", &["get", "methods", "GET"]);
    assert!(r.success, "{}", r.stderr);
    assert_eq!(r.stdout, "GET\n");
    assert!(r.stderr.contains("falling back to defaults"));
}

#[test]
fn test_export_is_valid_toml() {
    let r = httpconst(&["export"]);
    assert!(r.success, "{}", r.stderr);
    let doc: toml::Table = toml::from_str(&r.stdout).unwrap();
    assert!(doc.contains_key("tables"));
    assert!(doc.contains_key("status_codes"));
}
