//! Thin command layer over an external document-database driver.
//!
//! The codec in [`docdb_bson`] does the real work; this crate only
//! wires it to a [`Transport`]: application values are encoded on
//! the way into count/insert/delete/update/find/find-and-modify, and
//! every document the driver returns is decoded before it reaches
//! application code. Connection, collection, and cursor lifecycle
//! all belong to the transport implementation.

pub mod client;
pub mod error;
pub mod transport;

pub use client::{Client, Collection, Cursor, Database, FindAndModify};
pub use error::ClientError;
pub use transport::{
    FindAndModifyOptions, Namespace, Transport, TransportCursor, TransportError,
};

pub use docdb_bson::{encode_ordered, RawDocument, Value};

use once_cell::sync::OnceCell;

static INIT: OnceCell<()> = OnceCell::new();

/// Process-wide driver initialization. Idempotent: the first call
/// per process performs the one-time setup and returns `true`; every
/// later call is a no-op returning `false`. [`Client::new`] invokes
/// this, so callers only need it when they want initialization to
/// happen eagerly at startup.
pub fn init() -> bool {
    INIT.set(()).is_ok()
}
