//! The dynamic value model the codec converts to and from.

use std::fmt;

use indexmap::IndexMap;

use crate::sentinel::{self, Extended};
use crate::wire::RawDocument;

/// Field-name-to-value mapping. Field order is significant on the
/// wire; a decoded document keeps wire order, while documents built
/// by application code carry whatever order the map happens to hold.
pub type Document = IndexMap<String, Value>;

/// 12-byte document identifier, canonically written as 24 lowercase
/// hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Canonical 24-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        use fmt::Write;
        let mut out = String::with_capacity(24);
        for byte in self.0 {
            // infallible on String
            let _ = write!(out, "{byte:02x}");
        }
        out
    }

    /// Parses the canonical hex form. Accepts either case on input;
    /// anything other than exactly 24 hex characters is rejected.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 24 {
            return None;
        }
        let mut out = [0u8; 12];
        for (i, pair) in bytes.chunks_exact(2).enumerate() {
            let hi = hex_digit(pair[0])?;
            let lo = hex_digit(pair[1])?;
            out[i] = (hi << 4) | lo;
        }
        Some(Self(out))
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Dynamic value as seen by application code. `DateTime` holds whole
/// seconds since the Unix epoch (wire datetimes are milliseconds and
/// truncate on decode). `Raw` carries an already-encoded document
/// that the encoder embeds by copy. `Null` exists in the model but is
/// never written to the wire: encoding it omits the field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Double(f64),
    Int32(i32),
    Int64(i64),
    String(String),
    Boolean(bool),
    DateTime(i64),
    ObjectId(ObjectId),
    Document(Document),
    Array(Vec<Value>),
    Raw(RawDocument),
    Null,
}

impl Value {
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view across both integer widths.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(i) => Some(*i as i64),
            Value::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Recovers an extended value from its legacy sentinel string
    /// form (see [`crate::sentinel`]).
    pub fn from_sentinel(s: &str) -> Option<Value> {
        match sentinel::parse(s)? {
            Extended::ObjectId(id) => Some(Value::ObjectId(id)),
        }
    }

    /// Legacy sentinel string form, for values that have one.
    pub fn to_sentinel(&self) -> Option<String> {
        match self {
            Value::ObjectId(id) => Some(sentinel::encode_object_id(id)),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else {
                    Value::Double(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Document(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Double(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Int32(i) => serde_json::Value::from(i),
            Value::Int64(i) => serde_json::Value::from(i),
            Value::String(s) => serde_json::Value::String(s),
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::DateTime(secs) => serde_json::Value::from(secs),
            Value::ObjectId(id) => serde_json::Value::String(sentinel::encode_object_id(&id)),
            Value::Document(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Array(items) => serde_json::Value::Array(
                items.into_iter().map(serde_json::Value::from).collect(),
            ),
            Value::Raw(_) => serde_json::Value::Null,
            Value::Null => serde_json::Value::Null,
        }
    }
}
