use docdb_bson::{DecodeError, EncodeError};
use thiserror::Error;

use crate::transport::TransportError;

/// Failure of a command-layer operation: either the codec rejected a
/// value at the boundary, or the driver reported an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("driver error: {0}")]
    Transport(#[from] TransportError),
}
