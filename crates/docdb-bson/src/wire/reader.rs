//! Bounds-checked cursor over wire document bytes.

use thiserror::Error;

/// Byte-level failure while reading a wire document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid UTF-8 in string data")]
    InvalidUtf8,
    #[error("unknown element type tag: 0x{0:02x}")]
    UnknownTag(u8),
    #[error("malformed document header")]
    InvalidHeader,
    #[error("missing NUL terminator")]
    MissingTerminator,
}

/// Forward-only reader borrowing the input buffer. All reads are
/// bounds-checked; string reads return slices of the input rather
/// than copies.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying input.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Byte at an absolute position, without moving the cursor.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.data.get(pos).copied()
    }

    /// Moves the cursor to an absolute position within the input.
    pub fn seek(&mut self, pos: usize) -> Result<(), WireError> {
        if pos > self.data.len() {
            return Err(WireError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos.checked_add(n).ok_or(WireError::UnexpectedEof)?;
        if end > self.data.len() {
            return Err(WireError::UnexpectedEof);
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub fn u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    pub fn i32_le(&mut self) -> Result<i32, WireError> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn i64_le(&mut self) -> Result<i64, WireError> {
        let b = self.take(8)?;
        Ok(i64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    pub fn f64_le(&mut self) -> Result<f64, WireError> {
        let b = self.take(8)?;
        Ok(f64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    pub fn bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        self.take(n)
    }

    /// Reads a NUL-terminated string and consumes the terminator.
    pub fn cstr(&mut self) -> Result<&'a str, WireError> {
        let start = self.pos;
        while self.pos < self.data.len() && self.data[self.pos] != 0 {
            self.pos += 1;
        }
        if self.pos >= self.data.len() {
            return Err(WireError::UnexpectedEof);
        }
        let s = std::str::from_utf8(&self.data[start..self.pos])
            .map_err(|_| WireError::InvalidUtf8)?;
        self.pos += 1;
        Ok(s)
    }

    /// Reads a length-prefixed string. The stated length counts the
    /// trailing NUL, which must be present; it is consumed but not
    /// returned.
    pub fn string(&mut self) -> Result<&'a str, WireError> {
        let len = self.i32_le()?;
        if len < 1 {
            return Err(WireError::UnexpectedEof);
        }
        let payload = self.take(len as usize)?;
        if payload[payload.len() - 1] != 0 {
            return Err(WireError::MissingTerminator);
        }
        std::str::from_utf8(&payload[..payload.len() - 1]).map_err(|_| WireError::InvalidUtf8)
    }
}
