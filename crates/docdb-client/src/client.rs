//! Client, database, and collection handles.
//!
//! These are thin pass-through wrappers: every operation encodes its
//! value arguments with [`docdb_bson::encode`], hands the resulting
//! documents to the [`Transport`], and decodes whatever documents
//! come back before returning them. No command logic lives here.

use docdb_bson::{decode, encode, RawDocument, Value};

use crate::error::ClientError;
use crate::transport::{FindAndModifyOptions, Namespace, Transport, TransportCursor};

/// Entry point over an external transport. Construction triggers the
/// process-wide [`crate::init`] exactly once per process.
pub struct Client<T: Transport> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        crate::init();
        Self { transport }
    }

    pub fn database(&self, name: impl Into<String>) -> Database<'_, T> {
        Database {
            client: self,
            name: name.into(),
        }
    }
}

/// Named database handle.
pub struct Database<'a, T: Transport> {
    client: &'a Client<T>,
    name: String,
}

impl<'a, T: Transport> Database<'a, T> {
    pub fn collection(&self, name: impl Into<String>) -> Collection<'a, T> {
        Collection {
            client: self.client,
            ns: Namespace::new(self.name.clone(), name),
        }
    }
}

/// Find-and-modify arguments at the value level. The sort document
/// stays pre-encoded (see [`FindAndModifyOptions::sort`]).
#[derive(Debug, Clone, Default)]
pub struct FindAndModify {
    pub sort: Option<RawDocument>,
    pub update: Option<Value>,
    pub fields: Option<Value>,
    pub remove: bool,
    pub upsert: bool,
    pub return_new: bool,
}

/// Named collection handle; the unit all storage operations run
/// against.
pub struct Collection<'a, T: Transport> {
    client: &'a Client<T>,
    ns: Namespace,
}

impl<'a, T: Transport> Collection<'a, T> {
    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    pub fn count(&self, filter: &Value) -> Result<i64, ClientError> {
        let filter = encode(filter)?;
        Ok(self.client.transport.count(&self.ns, &filter)?)
    }

    pub fn insert(&self, document: &Value) -> Result<(), ClientError> {
        let document = encode(document)?;
        Ok(self.client.transport.insert(&self.ns, &document)?)
    }

    pub fn delete(&self, filter: &Value) -> Result<(), ClientError> {
        let filter = encode(filter)?;
        Ok(self.client.transport.delete(&self.ns, &filter)?)
    }

    /// Multi-document update: every document matching `filter` gets
    /// `update` applied by the driver.
    pub fn update(&self, filter: &Value, update: &Value) -> Result<(), ClientError> {
        let filter = encode(filter)?;
        let update = encode(update)?;
        Ok(self.client.transport.update(&self.ns, &filter, &update)?)
    }

    pub fn find(
        &self,
        filter: &Value,
        skip: u32,
        limit: u32,
        fields: Option<&Value>,
    ) -> Result<Cursor<T::Cursor>, ClientError> {
        let filter = encode(filter)?;
        let fields = fields.map(encode).transpose()?;
        let inner = self
            .client
            .transport
            .find(&self.ns, &filter, skip, limit, fields.as_ref())?;
        Ok(Cursor { inner })
    }

    /// Runs find-and-modify and decodes the driver's reply document.
    pub fn find_and_modify(
        &self,
        query: &Value,
        options: FindAndModify,
    ) -> Result<Value, ClientError> {
        let query = encode(query)?;
        let options = FindAndModifyOptions {
            sort: options.sort,
            update: options.update.as_ref().map(encode).transpose()?,
            fields: options.fields.as_ref().map(encode).transpose()?,
            remove: options.remove,
            upsert: options.upsert,
            return_new: options.return_new,
        };
        let reply = self
            .client
            .transport
            .find_and_modify(&self.ns, &query, &options)?;
        Ok(decode(reply.as_bytes())?)
    }
}

/// Decoding iterator over a find result. Each call pulls one raw
/// document from the transport and decodes it on the spot.
pub struct Cursor<C: TransportCursor> {
    inner: C,
}

impl<C: TransportCursor> Cursor<C> {
    pub fn next(&mut self) -> Result<Option<Value>, ClientError> {
        match self.inner.next()? {
            Some(raw) => Ok(Some(decode(raw.as_bytes())?)),
            None => Ok(None),
        }
    }
}
