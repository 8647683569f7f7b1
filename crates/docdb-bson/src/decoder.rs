//! Wire document → [`Value`] decoder.

use crate::error::DecodeError;
use crate::value::{Document, ObjectId, Value};
use crate::wire::constants::*;
use crate::wire::{Cursor, WireError};

/// Decodes a complete wire document into a [`Value::Document`].
///
/// Containers recurse with a mode: embedded documents become
/// [`Value::Document`] keyed by wire field names (a duplicated field
/// name overwrites, last wins), embedded arrays become
/// [`Value::Array`] with elements in wire order, their field names
/// ignored. A wire timestamp decodes to integer 0 under its key — a
/// placeholder carried from the reference behavior, not an error.
/// Wire scalar types outside the supported mapping are parsed past
/// and produce no entry at all.
///
/// Fails with [`DecodeError::InitFailed`] when the header is
/// malformed and traversal cannot begin, and with
/// [`DecodeError::Corrupt`] when the element stream breaks
/// mid-document. Both are fatal; no partial structure is returned.
///
/// Recursion depth equals input nesting depth; no explicit limit is
/// imposed, so pathologically deep input can exhaust the call stack.
pub fn decode(data: &[u8]) -> Result<Value, DecodeError> {
    // Header sanity before any traversal: minimum frame, a size that
    // fits the buffer, and the trailing terminator in place.
    if data.len() < 5 {
        return Err(DecodeError::InitFailed);
    }
    let size = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    if size < 5 || size as usize > data.len() || data[size as usize - 1] != 0 {
        return Err(DecodeError::InitFailed);
    }
    let mut cur = Cursor::new(data);
    let mut map = Document::new();
    read_fields(&mut cur, |key, value| {
        map.insert(key.to_owned(), value);
    })?;
    Ok(Value::Document(map))
}

/// Walks one document frame, invoking `emit` for every decodable
/// field and skipping the rest. Leaves the cursor one past the
/// frame's terminator.
fn read_fields<F>(cur: &mut Cursor<'_>, mut emit: F) -> Result<(), WireError>
where
    F: FnMut(&str, Value),
{
    let start = cur.pos();
    let size = cur.i32_le()?;
    if size < 5 {
        return Err(WireError::InvalidHeader);
    }
    let end = start
        .checked_add(size as usize)
        .ok_or(WireError::UnexpectedEof)?;
    if end > cur.len() {
        return Err(WireError::UnexpectedEof);
    }
    while cur.pos() < end - 1 {
        let tag = cur.u8()?;
        if tag == 0 {
            break;
        }
        let key = cur.cstr()?;
        if let Some(value) = read_element(cur, tag)? {
            emit(key, value);
        }
    }
    // The frame must close with its NUL terminator; trailing slack
    // before it is tolerated, a non-zero final byte is not.
    if cur.byte_at(end - 1) != Some(0) {
        return Err(WireError::MissingTerminator);
    }
    cur.seek(end)
}

fn read_document(cur: &mut Cursor<'_>) -> Result<Document, WireError> {
    let mut map = Document::new();
    read_fields(cur, |key, value| {
        map.insert(key.to_owned(), value);
    })?;
    Ok(map)
}

fn read_array(cur: &mut Cursor<'_>) -> Result<Vec<Value>, WireError> {
    let mut items = Vec::new();
    read_fields(cur, |_key, value| items.push(value))?;
    Ok(items)
}

/// Decodes one element payload. `Ok(None)` is the skip branch: the
/// payload was parsed past but the field produces no entry.
fn read_element(cur: &mut Cursor<'_>, tag: u8) -> Result<Option<Value>, WireError> {
    match tag {
        TAG_DOUBLE => Ok(Some(Value::Double(cur.f64_le()?))),
        TAG_STRING => Ok(Some(Value::String(cur.string()?.to_owned()))),
        TAG_DOCUMENT => Ok(Some(Value::Document(read_document(cur)?))),
        TAG_ARRAY => Ok(Some(Value::Array(read_array(cur)?))),
        TAG_BOOLEAN => Ok(Some(Value::Boolean(cur.u8()? != 0))),
        // Wire datetimes are milliseconds; the model holds whole
        // seconds, truncating toward zero.
        TAG_DATETIME => Ok(Some(Value::DateTime(cur.i64_le()? / 1000))),
        TAG_OBJECT_ID => {
            let raw = cur.bytes(12)?;
            let mut bytes = [0u8; 12];
            bytes.copy_from_slice(raw);
            Ok(Some(Value::ObjectId(ObjectId::from_bytes(bytes))))
        }
        TAG_INT32 => Ok(Some(Value::Int32(cur.i32_le()?))),
        TAG_INT64 => Ok(Some(Value::Int64(cur.i64_le()?))),
        // Timestamps are not supported; the key still appears, mapped
        // to integer 0.
        TAG_TIMESTAMP => {
            cur.i32_le()?;
            cur.i32_le()?;
            Ok(Some(Value::Int64(0)))
        }
        // Everything below is parsed past and dropped: no key is
        // emitted for the field.
        TAG_BINARY => {
            let len = cur.i32_le()?;
            if len < 0 {
                return Err(WireError::UnexpectedEof);
            }
            cur.u8()?;
            cur.bytes(len as usize)?;
            Ok(None)
        }
        TAG_UNDEFINED | TAG_NULL | TAG_MIN_KEY | TAG_MAX_KEY => Ok(None),
        TAG_REGEX => {
            cur.cstr()?;
            cur.cstr()?;
            Ok(None)
        }
        TAG_DB_POINTER => {
            cur.string()?;
            cur.bytes(12)?;
            Ok(None)
        }
        TAG_CODE | TAG_SYMBOL => {
            cur.string()?;
            Ok(None)
        }
        TAG_CODE_WITH_SCOPE => {
            let total = cur.i32_le()?;
            if total < 4 {
                return Err(WireError::InvalidHeader);
            }
            cur.bytes(total as usize - 4)?;
            Ok(None)
        }
        TAG_DECIMAL128 => {
            cur.bytes(16)?;
            Ok(None)
        }
        other => Err(WireError::UnknownTag(other)),
    }
}
