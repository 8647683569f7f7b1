//! Bidirectional codec between the BSON-style binary document format
//! and a dynamic nested key/value model, with runtime type inference
//! on encode and an order-preserving alternate encoder for
//! order-sensitive command documents.
//!
//! Encoding classifies every container with the boundary heuristic in
//! [`classify`] and picks canonical wire types for ambiguous scalars;
//! decoding is a recursive visitor over the wire bytes. Both
//! directions are synchronous recursive descents with no depth limit.
//!
//! ```
//! use docdb_bson::{decode, encode, Document, Value};
//!
//! let mut doc = Document::new();
//! doc.insert("name".to_owned(), Value::String("ada".to_owned()));
//! doc.insert("visits".to_owned(), Value::Int64(3));
//!
//! let raw = encode(&Value::Document(doc)).unwrap();
//! let decoded = decode(raw.as_bytes()).unwrap();
//!
//! // Numeric width is chosen from the value, not the source variant.
//! let map = decoded.as_document().unwrap();
//! assert_eq!(map["visits"], Value::Int32(3));
//! ```

pub mod classify;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod sentinel;
pub mod value;
pub mod wire;

pub use classify::{classify, Shape};
pub use decoder::decode;
pub use encoder::{encode, encode_ordered};
pub use error::{DecodeError, EncodeError};
pub use value::{Document, ObjectId, Value};
pub use wire::{DocumentBuilder, RawDocument};
