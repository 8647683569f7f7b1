//! [`Value`] → wire document encoder with runtime type inference.

use crate::classify::{classify, Shape};
use crate::error::EncodeError;
use crate::sentinel::{self, Extended};
use crate::value::{Document, Value};
use crate::wire::{DocumentBuilder, RawDocument};

/// Encodes a value as a top-level wire document.
///
/// The root must classify as a document: a native array, an
/// array-shaped document, or a scalar root fails with
/// [`EncodeError::RootNotDocument`]. Everything below the root is
/// classified recursively; ambiguous or unsupported values are
/// resolved by classification and omission, never by further errors.
pub fn encode(value: &Value) -> Result<RawDocument, EncodeError> {
    match value {
        Value::Document(map) if classify(map) == Shape::Document => Ok(encode_document(map)),
        _ => Err(EncodeError::RootNotDocument),
    }
}

/// Encodes a flat alternating key/value sequence, appending fields
/// strictly in input order with no re-ordering and no de-duplication:
/// a repeated key produces two wire fields with that name.
///
/// The sequence must have even length
/// ([`EncodeError::OddArgumentCount`]) and every key must be a string
/// or a number, converted to its decimal form
/// ([`EncodeError::InvalidKeyType`]). Values go through the same
/// classification as [`encode`]. This entry point exists because some
/// command documents (compound sorts, index specs) are
/// order-sensitive while a generic map offers no order guarantee.
pub fn encode_ordered(items: &[Value]) -> Result<RawDocument, EncodeError> {
    if items.len() % 2 != 0 {
        return Err(EncodeError::OddArgumentCount);
    }
    let mut builder = DocumentBuilder::new();
    for pair in items.chunks_exact(2) {
        let key = field_name(&pair[0]).ok_or(EncodeError::InvalidKeyType)?;
        append_value(&mut builder, &key, &pair[1]);
    }
    Ok(builder.finish())
}

fn encode_document(map: &Document) -> RawDocument {
    let mut builder = DocumentBuilder::new();
    for (key, value) in map {
        append_value(&mut builder, key, value);
    }
    builder.finish()
}

/// Encodes an array-shaped document, re-keying the elements "1".."N"
/// to wire field names "0".."N-1" in index order. The classifier
/// guarantees every index is present.
fn encode_array_shaped(map: &Document) -> RawDocument {
    let mut builder = DocumentBuilder::new();
    for i in 1..=map.len() {
        if let Some(value) = map.get(i.to_string().as_str()) {
            append_value(&mut builder, &(i - 1).to_string(), value);
        }
    }
    builder.finish()
}

fn encode_sequence(items: &[Value]) -> RawDocument {
    let mut builder = DocumentBuilder::new();
    for (i, value) in items.iter().enumerate() {
        append_value(&mut builder, &i.to_string(), value);
    }
    builder.finish()
}

/// Classifies one value and appends the corresponding wire field.
/// Sub-documents are built, copied into the parent, and dropped
/// before this returns.
fn append_value(builder: &mut DocumentBuilder, key: &str, value: &Value) {
    match value {
        Value::Double(f) => append_number(builder, key, *f),
        Value::Int32(i) => append_integer(builder, key, *i as i64),
        Value::Int64(i) => append_integer(builder, key, *i),
        Value::String(s) => match sentinel::parse(s) {
            Some(Extended::ObjectId(id)) => builder.append_object_id(key, &id),
            // Any other string — including one that starts with a NUL
            // byte without matching a known tag — is literal text.
            None => builder.append_string(key, s),
        },
        Value::Boolean(b) => builder.append_boolean(key, *b),
        Value::DateTime(secs) => builder.append_datetime_ms(key, secs.saturating_mul(1000)),
        Value::ObjectId(id) => builder.append_object_id(key, id),
        Value::Document(map) => match classify(map) {
            Shape::Array => {
                let doc = encode_array_shaped(map);
                builder.append_array(key, &doc);
            }
            Shape::Document => {
                let doc = encode_document(map);
                builder.append_document(key, &doc);
            }
        },
        Value::Array(items) => {
            let doc = encode_sequence(items);
            builder.append_array(key, &doc);
        }
        // A pre-encoded document is embedded by copy, always under
        // the document tag regardless of its field names.
        Value::Raw(doc) => builder.append_document(key, doc),
        // Skip branch: unsupported kinds drop the field entirely.
        Value::Null => {}
    }
}

/// Deterministic integer width selection: the i32 range gets int32,
/// the rest int64. The source variant is not remembered.
fn append_integer(builder: &mut DocumentBuilder, key: &str, value: i64) {
    if value >= i32::MIN as i64 && value <= i32::MAX as i64 {
        builder.append_int32(key, value as i32);
    } else {
        builder.append_int64(key, value);
    }
}

/// A double whose truncation equals itself becomes an integer field,
/// so 3.0 encodes as int32 3. Values outside the i64 range (and NaN
/// or infinities) stay doubles.
fn append_number(builder: &mut DocumentBuilder, key: &str, value: f64) {
    let truncated = value.trunc();
    if truncated == value && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        append_integer(builder, key, value as i64);
    } else {
        builder.append_double(key, value);
    }
}

/// Ordered-encoder key conversion: strings pass through, numbers take
/// their decimal form (integral doubles render without a fraction).
fn field_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Int32(i) => Some(i.to_string()),
        Value::Int64(i) => Some(i.to_string()),
        Value::Double(f) => {
            let truncated = f.trunc();
            if truncated == *f && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                Some((truncated as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        _ => None,
    }
}
