//! Extended-type sentinel protocol.
//!
//! A small set of wire types has no native counterpart in generic
//! key/value structures, so they travel through the string channel
//! in a tagged form: byte 0 is NUL, byte 1 is the wire type tag, and
//! everything from byte 2 on is a type-specific textual payload.
//! Today the only extended type is the object id, whose payload is
//! its 24-character hex form.
//!
//! Inside the core model extended values are ordinary [`Value`]
//! variants; the sentinel string form exists only at the legacy
//! application boundary.
//!
//! [`Value`]: crate::value::Value

use crate::value::ObjectId;
use crate::wire::constants::TAG_OBJECT_ID;

/// Extended wire value recovered from a sentinel string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extended {
    ObjectId(ObjectId),
}

/// Builds the sentinel string form of an object id.
pub fn encode_object_id(id: &ObjectId) -> String {
    let mut out = String::with_capacity(26);
    out.push('\0');
    out.push(TAG_OBJECT_ID as char);
    out.push_str(&id.to_hex());
    out
}

/// Recognizes a sentinel string. Anything that is not a well-formed
/// sentinel returns `None` — including a string that merely starts
/// with a NUL byte, carries an unknown tag, or has a malformed
/// payload. Such strings are treated as literal text by the encoder.
pub fn parse(s: &str) -> Option<Extended> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != 0 {
        return None;
    }
    match bytes[1] {
        TAG_OBJECT_ID => ObjectId::parse_hex(&s[2..]).map(Extended::ObjectId),
        _ => None,
    }
}
