//! This module defines the ports the import service requires

use crate::{error::BoxError, model::StoredItem};

/// Trait for reading whole objects out of an object store
pub trait ObjectSource: Send + Sync + 'static {
    /// The error type that can occur
    type Err: Into<BoxError> + Send;

    /// fetch the full content of the object at `key` in `bucket`
    fn fetch(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Err>> + Send;
}

/// Trait for upserting records into the key-value table
pub trait RecordSink: Send + Sync + 'static {
    /// The error type that can occur
    type Err: Into<BoxError> + Send;

    /// write the record, replacing any existing record with the same id
    fn put_record(&self, record: StoredItem) -> impl Future<Output = Result<(), Self::Err>> + Send;
}
