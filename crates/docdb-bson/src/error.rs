//! Codec error taxonomy.
//!
//! Hard errors abort the whole conversion and propagate to the
//! caller; there is no partial result and no retry that would help.
//! Unsupported value kinds are a separate, non-error category: the
//! encoder and decoder drop them silently (see the skip branches in
//! [`crate::encoder`] and [`crate::decoder`]).

use thiserror::Error;

use crate::wire::WireError;

/// Fatal decode failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The header is malformed and traversal cannot begin.
    #[error("cannot initialize traversal of the binary document")]
    InitFailed,
    /// Traversal started but the element stream is malformed.
    #[error("corrupt binary document: {0}")]
    Corrupt(#[from] WireError),
}

/// Fatal encode failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The root value classifies as an array (or is not a container
    /// at all); arrays can never be top-level wire documents.
    #[error("top-level value must encode as a document, not an array")]
    RootNotDocument,
    /// The ordered encoder was given an odd number of items.
    #[error("ordered encoding requires an even number of key/value items")]
    OddArgumentCount,
    /// An ordered-encoder key is neither a string nor a number.
    #[error("ordered encoding keys must be strings or numbers")]
    InvalidKeyType,
}
