//! Append-only wire document writer.

use super::constants::*;
use crate::value::ObjectId;

/// A finished, immutable wire document. Owned by whoever requested
/// it; embedding one into a parent document copies its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    bytes: Vec<u8>,
}

impl RawDocument {
    /// Wraps bytes received from an external driver. No validation
    /// happens here; [`crate::decode`] validates on traversal.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Builds a wire document field by field. Fields land in exactly the
/// order they are appended; duplicate field names are written
/// verbatim. The size header is backpatched by [`finish`].
///
/// [`finish`]: DocumentBuilder::finish
pub struct DocumentBuilder {
    buf: Vec<u8>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        // Four bytes reserved for the size header.
        Self { buf: vec![0u8; 4] }
    }

    fn element(&mut self, tag: u8, key: &str) {
        self.buf.push(tag);
        // Field names are cstrings; an embedded NUL truncates the name.
        for byte in key.bytes() {
            if byte == 0 {
                break;
            }
            self.buf.push(byte);
        }
        self.buf.push(0);
    }

    pub fn append_double(&mut self, key: &str, value: f64) {
        self.element(TAG_DOUBLE, key);
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn append_string(&mut self, key: &str, value: &str) {
        self.element(TAG_STRING, key);
        let bytes = value.as_bytes();
        self.buf
            .extend_from_slice(&((bytes.len() as i32) + 1).to_le_bytes());
        self.buf.extend_from_slice(bytes);
        self.buf.push(0);
    }

    pub fn append_boolean(&mut self, key: &str, value: bool) {
        self.element(TAG_BOOLEAN, key);
        self.buf.push(value as u8);
    }

    /// Appends a UTC datetime in milliseconds since the epoch.
    pub fn append_datetime_ms(&mut self, key: &str, millis: i64) {
        self.element(TAG_DATETIME, key);
        self.buf.extend_from_slice(&millis.to_le_bytes());
    }

    pub fn append_int32(&mut self, key: &str, value: i32) {
        self.element(TAG_INT32, key);
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn append_int64(&mut self, key: &str, value: i64) {
        self.element(TAG_INT64, key);
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn append_object_id(&mut self, key: &str, id: &ObjectId) {
        self.element(TAG_OBJECT_ID, key);
        self.buf.extend_from_slice(id.as_bytes());
    }

    /// Embeds a finished document by copy.
    pub fn append_document(&mut self, key: &str, doc: &RawDocument) {
        self.element(TAG_DOCUMENT, key);
        self.buf.extend_from_slice(doc.as_bytes());
    }

    /// Embeds a finished document by copy under the array tag.
    pub fn append_array(&mut self, key: &str, doc: &RawDocument) {
        self.element(TAG_ARRAY, key);
        self.buf.extend_from_slice(doc.as_bytes());
    }

    pub fn finish(mut self) -> RawDocument {
        self.buf.push(0);
        let size = self.buf.len() as i32;
        self.buf[0..4].copy_from_slice(&size.to_le_bytes());
        RawDocument { bytes: self.buf }
    }
}
