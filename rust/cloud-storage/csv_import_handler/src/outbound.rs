//! Adapters from the monorepo clients onto the domain ports

use crate::{
    domain::ports::{ObjectSource, RecordSink},
    model::StoredItem,
};

#[cfg(test)]
pub mod mock;

impl ObjectSource for s3_client::S3 {
    type Err = anyhow::Error;

    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, Self::Err> {
        self.get(bucket, key).await
    }
}

impl RecordSink for dynamodb_client::DynamodbClient {
    type Err = anyhow::Error;

    async fn put_record(&self, record: StoredItem) -> Result<(), Self::Err> {
        self.records.put_record(&record).await
    }
}
