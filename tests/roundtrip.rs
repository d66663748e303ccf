//! End-to-end conformance tests for the JSON core.
//!
//! Exercises the documented contract of parse and write together: round-trip
//! equality, idempotent rendition, duplicate-key rejection, escape fidelity,
//! numeric tagging, and strict bounds checking.

use indoc::indoc;
use jsondoc::{parse, write, DataType, ErrorKind, JsonArray, JsonObject, JsonValue};

// ============================================================================
// Round-trip: parse(write(v)) reproduces v
// ============================================================================

fn sample_tree() -> JsonValue {
    let mut address = JsonObject::new();
    address.insert("host", "db.internal");
    address.insert("port", 3306i32);

    let mut tags = JsonArray::new();
    tags.push("primary");
    tags.push("replica");

    let mut root = JsonObject::new();
    root.insert("address", address);
    root.insert("tags", tags);
    root.insert("ratio", 0.75);
    root.insert("enabled", true);
    root.insert("comment", JsonValue::Null);
    JsonValue::Object(root)
}

#[test]
fn roundtrip_reproduces_tree() {
    let original = sample_tree();
    let reparsed = parse(&write(&original)).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn roundtrip_is_idempotent() {
    let original = sample_tree();
    let first = write(&original);
    let second = write(&parse(&first).unwrap());
    assert_eq!(first, second);
}

#[test]
fn roundtrip_int64_collapses_to_int() {
    // Wide tags survive writing but come back as Int/Double.
    let value = JsonValue::Int64(5);
    let reparsed = parse(&write(&value)).unwrap();
    assert_eq!(reparsed, JsonValue::Int(5));
}

#[test]
fn roundtrip_uint64_collapses_to_double() {
    let value = JsonValue::Uint64(u64::MAX);
    let reparsed = parse(&write(&value)).unwrap();
    assert_eq!(reparsed.kind(), DataType::Double);
    assert_eq!(reparsed.as_double().unwrap(), u64::MAX as f64);
}

// ============================================================================
// Empty containers
// ============================================================================

#[test]
fn empty_object_roundtrip() {
    let value = parse("{}").unwrap();
    assert_eq!(value.as_object().unwrap().len(), 0);
    assert_eq!(write(&value), "{}");
}

#[test]
fn empty_array_roundtrip() {
    let value = parse("[]").unwrap();
    assert_eq!(value.as_array().unwrap().len(), 0);
    assert_eq!(write(&value), "[]");
}

// ============================================================================
// Duplicate keys
// ============================================================================

#[test]
fn duplicate_member_rejected() {
    let err = parse(r#"{"a":1,"a":2}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(err.to_string().contains("duplicate member: a"));
}

// ============================================================================
// Escape fidelity
// ============================================================================

#[test]
fn escapes_decode_and_reencode() {
    let value = parse(r#""a\nb\"c""#).unwrap();
    assert_eq!(value.as_str().unwrap(), "a\nb\"c");

    let text = write(&value);
    assert_eq!(text, r#""a\nb\"c""#);
}

// ============================================================================
// Numeric tagging
// ============================================================================

#[test]
fn integer_text_tags_int() {
    assert_eq!(parse("3").unwrap(), JsonValue::Int(3));
}

#[test]
fn decimal_point_tags_double() {
    assert_eq!(parse("3.0").unwrap(), JsonValue::Double(3.0));
    assert_eq!(parse("3.5").unwrap(), JsonValue::Double(3.5));
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn missing_value_names_unexpected_brace() {
    let err = parse(r#"{"a":}"#).unwrap_err();
    assert!(err.to_string().contains("unexpected token: }"));
}

#[test]
fn unterminated_array_reports_end_of_data() {
    let err = parse("[1,2").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of data");
}

#[test]
fn incomplete_boolean_literal_rejected() {
    let err = parse("tru").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert!(err.to_string().contains("tru"));
}

#[test]
fn trailing_garbage_rejected() {
    assert!(parse("{} {}").is_err());
    assert!(parse("1 2").is_err());
}

// ============================================================================
// Range access
// ============================================================================

#[test]
fn array_index_at_len_is_out_of_range() {
    let value = parse("[1, 2, 3]").unwrap();
    let array = value.as_array().unwrap();
    assert!(array.at(2).is_ok());

    let err = array.at(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn object_get_absent_key_is_range_error() {
    let value = parse(r#"{"a": 1}"#).unwrap();
    let err = value.as_object().unwrap().get("b").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.to_string(), "no member named b");
}

// ============================================================================
// Accessor contract
// ============================================================================

#[test]
fn accessors_fail_on_wrong_tag() {
    let value = parse(r#"{"n": 1}"#).unwrap();
    let n = value.as_object().unwrap().get("n").unwrap();
    assert_eq!(n.as_int().unwrap(), 1);

    let err = n.as_str().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.to_string(), "expected string, found int");
}

// ============================================================================
// Non-standard `undefined` extension
// ============================================================================

#[test]
fn undefined_parses_as_null() {
    assert_eq!(parse("undefined").unwrap(), JsonValue::Null);

    let value = parse(r#"{"a": undefined}"#).unwrap();
    assert!(value.as_object().unwrap().get("a").unwrap().is_null());
}

// ============================================================================
// Realistic documents
// ============================================================================

#[test]
fn parses_a_realistic_document() {
    let input = indoc! {r#"
        {
            "schema": "inventory",
            "version": 3,
            "tables": [
                {"name": "parts", "rows": 1204},
                {"name": "orders", "rows": 88}
            ],
            "fill_factor": 0.8,
            "owner": null
        }
    "#};

    let value = parse(input).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("schema").unwrap().as_str().unwrap(), "inventory");
    assert_eq!(object.get("version").unwrap().as_int().unwrap(), 3);
    assert_eq!(object.get("fill_factor").unwrap().as_double().unwrap(), 0.8);
    assert!(object.get("owner").unwrap().is_null());

    let tables = object.get("tables").unwrap().as_array().unwrap();
    assert_eq!(tables.len(), 2);
    let orders = tables.at(1).unwrap().as_object().unwrap();
    assert_eq!(orders.get("rows").unwrap().as_int().unwrap(), 88);

    // Formatting the reparsed text is a fixed point.
    let formatted = write(&value);
    assert_eq!(write(&parse(&formatted).unwrap()), formatted);
}

#[test]
fn members_iterate_in_key_order() {
    let value = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let keys: Vec<String> = value
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, ["alpha", "mid", "zeta"]);
}
