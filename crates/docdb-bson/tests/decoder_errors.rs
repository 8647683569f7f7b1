//! Decoder failure modes and the silent-skip policy for wire types
//! the value model does not carry.

use docdb_bson::wire::constants::*;
use docdb_bson::wire::WireError;
use docdb_bson::{decode, DecodeError, Value};

/// Hand-assembles a wire document from raw element bytes.
fn frame(elements: &[u8]) -> Vec<u8> {
    let size = (elements.len() + 5) as i32;
    let mut out = size.to_le_bytes().to_vec();
    out.extend_from_slice(elements);
    out.push(0);
    out
}

fn element(tag: u8, key: &str, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    out.extend_from_slice(key.as_bytes());
    out.push(0);
    out.extend_from_slice(payload);
    out
}

#[test]
fn short_buffer_fails_initialization() {
    assert_eq!(decode(&[]), Err(DecodeError::InitFailed));
    assert_eq!(decode(&[5, 0, 0, 0]), Err(DecodeError::InitFailed));
}

#[test]
fn header_size_beyond_buffer_fails_initialization() {
    assert_eq!(decode(&[10, 0, 0, 0, 0]), Err(DecodeError::InitFailed));
}

#[test]
fn undersized_header_fails_initialization() {
    assert_eq!(decode(&[4, 0, 0, 0, 0]), Err(DecodeError::InitFailed));
}

#[test]
fn missing_terminator_fails_initialization() {
    assert_eq!(decode(&[5, 0, 0, 0, 1]), Err(DecodeError::InitFailed));
}

#[test]
fn unknown_element_tag_is_corrupt() {
    let data = frame(&element(0x20, "a", &[]));
    assert_eq!(
        decode(&data),
        Err(DecodeError::Corrupt(WireError::UnknownTag(0x20)))
    );
}

#[test]
fn truncated_string_payload_is_corrupt() {
    // Stated string length runs far past the frame.
    let data = frame(&element(TAG_STRING, "a", &100i32.to_le_bytes()));
    assert_eq!(
        decode(&data),
        Err(DecodeError::Corrupt(WireError::UnexpectedEof))
    );
}

#[test]
fn invalid_utf8_in_string_is_corrupt() {
    let mut payload = 2i32.to_le_bytes().to_vec();
    payload.extend_from_slice(&[0xff, 0x00]);
    let data = frame(&element(TAG_STRING, "a", &payload));
    assert_eq!(
        decode(&data),
        Err(DecodeError::Corrupt(WireError::InvalidUtf8))
    );
}

#[test]
fn string_without_nul_terminator_is_corrupt() {
    // Stated length covers two bytes, but the last one is not NUL.
    let mut payload = 2i32.to_le_bytes().to_vec();
    payload.extend_from_slice(b"xy");
    let data = frame(&element(TAG_STRING, "a", &payload));
    assert_eq!(
        decode(&data),
        Err(DecodeError::Corrupt(WireError::MissingTerminator))
    );
}

#[test]
fn nested_document_without_terminator_is_corrupt() {
    // Nested frame with a plausible size but a non-zero final byte.
    let nested = [5u8, 0, 0, 0, 1];
    let data = frame(&element(TAG_DOCUMENT, "sub", &nested));
    assert_eq!(
        decode(&data),
        Err(DecodeError::Corrupt(WireError::MissingTerminator))
    );
}

#[test]
fn no_partial_result_on_late_corruption() {
    // A perfectly good field followed by a broken one: the whole
    // decode fails, the good field is not returned.
    let mut elements = element(TAG_INT32, "ok", &1i32.to_le_bytes());
    elements.extend_from_slice(&element(0x42, "bad", &[]));
    let data = frame(&elements);
    assert_eq!(
        decode(&data),
        Err(DecodeError::Corrupt(WireError::UnknownTag(0x42)))
    );
}

#[test]
fn unsupported_wire_scalars_are_skipped() {
    let mut elements = element(TAG_INT32, "a", &1i32.to_le_bytes());
    elements.extend_from_slice(&element(TAG_NULL, "n", &[]));
    // binary: i32 length, subtype byte, bytes
    let mut bin = 3i32.to_le_bytes().to_vec();
    bin.push(0);
    bin.extend_from_slice(&[1, 2, 3]);
    elements.extend_from_slice(&element(TAG_BINARY, "bin", &bin));
    // regex: two cstrings
    elements.extend_from_slice(&element(TAG_REGEX, "r", b"ab\0i\0"));
    elements.extend_from_slice(&element(TAG_UNDEFINED, "u", &[]));
    elements.extend_from_slice(&element(TAG_MIN_KEY, "min", &[]));
    elements.extend_from_slice(&element(TAG_DECIMAL128, "dec", &[0u8; 16]));
    elements.extend_from_slice(&element(TAG_INT32, "z", &2i32.to_le_bytes()));

    let back = decode(&frame(&elements)).expect("decode");
    let map = back.as_document().unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "z"]);
}

#[test]
fn skipped_code_and_symbol_fields() {
    // code / symbol carry a length-prefixed string payload.
    let mut code = 3i32.to_le_bytes().to_vec();
    code.extend_from_slice(b"fn\0");
    let mut elements = element(TAG_CODE, "c", &code);
    elements.extend_from_slice(&element(TAG_SYMBOL, "s", &code));
    elements.extend_from_slice(&element(TAG_INT32, "k", &9i32.to_le_bytes()));

    let back = decode(&frame(&elements)).expect("decode");
    let map = back.as_document().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["k"], Value::Int32(9));
}

#[test]
fn timestamp_decodes_to_placeholder_zero() {
    let mut payload = 11i32.to_le_bytes().to_vec();
    payload.extend_from_slice(&22i32.to_le_bytes());
    let data = frame(&element(TAG_TIMESTAMP, "ts", &payload));
    let back = decode(&data).expect("decode");
    assert_eq!(back.as_document().unwrap()["ts"], Value::Int64(0));
}

#[test]
fn duplicate_wire_keys_last_wins() {
    let mut elements = element(TAG_INT32, "a", &1i32.to_le_bytes());
    elements.extend_from_slice(&element(TAG_INT32, "a", &2i32.to_le_bytes()));
    let back = decode(&frame(&elements)).expect("decode");
    let map = back.as_document().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["a"], Value::Int32(2));
}

#[test]
fn datetime_milliseconds_truncate_to_seconds() {
    let data = frame(&element(TAG_DATETIME, "t", &1999i64.to_le_bytes()));
    let back = decode(&data).expect("decode");
    assert_eq!(back.as_document().unwrap()["t"], Value::DateTime(1));

    let data = frame(&element(TAG_DATETIME, "t", &(-1999i64).to_le_bytes()));
    let back = decode(&data).expect("decode");
    assert_eq!(back.as_document().unwrap()["t"], Value::DateTime(-1));
}

#[test]
fn corrupt_nested_document_aborts_the_whole_decode() {
    // Nested frame claims a size larger than what remains.
    let mut nested = 64i32.to_le_bytes().to_vec();
    nested.push(0);
    let data = frame(&element(TAG_DOCUMENT, "sub", &nested));
    assert_eq!(
        decode(&data),
        Err(DecodeError::Corrupt(WireError::UnexpectedEof))
    );
}
