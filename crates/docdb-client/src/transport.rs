//! The external driver seam.
//!
//! Everything below this trait — connections, sessions, command
//! execution, retries — belongs to the driver implementation. This
//! crate only moves already-encoded documents across the boundary.

use std::fmt;

use docdb_bson::RawDocument;
use thiserror::Error;

/// Failure reported by the external driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Fully qualified collection name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    pub database: String,
    pub collection: String,
}

impl Namespace {
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.database, self.collection)
    }
}

/// Options for find-and-modify. The sort specification is taken
/// pre-encoded because its field order is significant; build it with
/// [`docdb_bson::encode_ordered`].
#[derive(Debug, Clone, Default)]
pub struct FindAndModifyOptions {
    pub sort: Option<RawDocument>,
    pub update: Option<RawDocument>,
    pub fields: Option<RawDocument>,
    pub remove: bool,
    pub upsert: bool,
    pub return_new: bool,
}

/// Storage operations the command layer delegates to. Updates carry
/// multi-update semantics; `find` honors skip/limit and an optional
/// projection.
pub trait Transport {
    type Cursor: TransportCursor;

    fn count(&self, ns: &Namespace, filter: &RawDocument) -> Result<i64, TransportError>;

    fn insert(&self, ns: &Namespace, document: &RawDocument) -> Result<(), TransportError>;

    fn delete(&self, ns: &Namespace, filter: &RawDocument) -> Result<(), TransportError>;

    fn update(
        &self,
        ns: &Namespace,
        filter: &RawDocument,
        update: &RawDocument,
    ) -> Result<(), TransportError>;

    fn find(
        &self,
        ns: &Namespace,
        filter: &RawDocument,
        skip: u32,
        limit: u32,
        fields: Option<&RawDocument>,
    ) -> Result<Self::Cursor, TransportError>;

    fn find_and_modify(
        &self,
        ns: &Namespace,
        query: &RawDocument,
        options: &FindAndModifyOptions,
    ) -> Result<RawDocument, TransportError>;
}

/// Streaming result of a find. Dropping the cursor releases it.
pub trait TransportCursor {
    fn next(&mut self) -> Result<Option<RawDocument>, TransportError>;
}
