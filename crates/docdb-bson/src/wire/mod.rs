//! Minimal little-endian wire layer for the binary document format.
//!
//! A wire document is `i32 total size | elements | 0x00`, where each
//! element is `type tag | cstring field name | payload`. This module
//! only moves bytes; type inference and the value model live above it.

pub mod constants;
pub mod reader;
pub mod writer;

pub use reader::{Cursor, WireError};
pub use writer::{DocumentBuilder, RawDocument};
