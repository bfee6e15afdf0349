//! Tests for the decode module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn test_decode_top_level_array() {
    let decoder = JsonDecoder::new();
    let body = r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#;

    let records: Vec<Value> = decoder.decode(body).unwrap().collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["id"].to_string(), "1");
}

#[test]
fn test_decode_nested_path() {
    let decoder = JsonDecoder::with_path("$.data[*]");
    let body = r#"{"data": [{"id": "a"}, {"id": "b"}], "meta": {"count": 2}}"#;

    let records: Vec<Value> = decoder.decode(body).unwrap().collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["id"], "b");
}

#[test]
fn test_decode_simple_dot_path() {
    let decoder = JsonDecoder::with_path("$.result.items");
    let body = r#"{"result": {"items": [{"id": 1}]}}"#;

    let records: Vec<Value> = decoder.decode(body).unwrap().collect();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_decimal_precision_preserved() {
    // 19.10 must round-trip as "19.10", not 19.1 or a float artifact.
    let decoder = JsonDecoder::new();
    let body = r#"[{"price": 19.10, "qty": 3.000}]"#;

    let records: Vec<Value> = decoder.decode(body).unwrap().collect();
    assert_eq!(records[0]["price"].to_string(), "19.10");
    assert_eq!(records[0]["qty"].to_string(), "3.000");
}

#[test]
fn test_large_decimal_preserved() {
    let decoder = JsonDecoder::new();
    let body = r#"[{"total": 123456789012345678901234567890.123456789}]"#;

    let records: Vec<Value> = decoder.decode(body).unwrap().collect();
    assert_eq!(
        records[0]["total"].to_string(),
        "123456789012345678901234567890.123456789"
    );
}

#[test]
fn test_decode_is_idempotent() {
    let decoder = JsonDecoder::new();
    let body = r#"[{"id": 1, "price": 0.10}, {"id": 2, "price": 0.20}]"#;

    let first: Vec<Value> = decoder.decode(body).unwrap().collect();
    let second: Vec<Value> = decoder.decode(body).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn test_empty_array_yields_empty_sequence() {
    let decoder = JsonDecoder::new();
    let records = decoder.decode("[]").unwrap();
    assert_eq!(records.remaining(), 0);
    assert_eq!(records.count(), 0);
}

#[test]
fn test_wildcard_over_object_yields_member_values() {
    // `$[*]` applied to an object selects its member values, so a keyed
    // response body still decodes to one record per member.
    let decoder = JsonDecoder::new();
    let body = r#"{"first": {"id": 1}, "second": {"id": 2}}"#;

    let records: Vec<Value> = decoder.decode(body).unwrap().collect();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(Value::is_object));
}

#[test]
fn test_path_matching_nothing_yields_empty_sequence() {
    let decoder = JsonDecoder::with_path("$.data[*]");
    let body = r#"{"other": [1, 2, 3]}"#;

    let records: Vec<Value> = decoder.decode(body).unwrap().collect();
    assert!(records.is_empty());
}

#[test]
fn test_malformed_json_is_an_error() {
    let decoder = JsonDecoder::new();
    let err = decoder.decode("{not json").unwrap_err();
    assert!(err.to_string().contains("Failed to parse JSON"));
}

#[test]
fn test_truncated_body_is_an_error() {
    let decoder = JsonDecoder::new();
    assert!(decoder.decode(r#"[{"id": 1},"#).is_err());
}

#[test]
fn test_records_are_single_pass() {
    let decoder = JsonDecoder::new();
    let mut records = decoder.decode(r#"[{"id": 1}, {"id": 2}]"#).unwrap();

    assert_eq!(records.remaining(), 2);
    let _ = records.next();
    assert_eq!(records.remaining(), 1);
    let _ = records.next();
    assert!(records.next().is_none());
}

#[test]
fn test_order_matches_page_order() {
    let decoder = JsonDecoder::new();
    let body = r#"[{"n": "first"}, {"n": "second"}, {"n": "third"}]"#;

    let names: Vec<String> = decoder
        .decode(body)
        .unwrap()
        .map(|r| r["n"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}
