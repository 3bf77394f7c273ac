use aws_config::SdkConfig;
use serde::Serialize;

mod put_record;

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    pub records: RecordTable,
}

impl DynamodbClient {
    pub fn new(aws_config: &SdkConfig, records_table: &str) -> Self {
        let client = aws_sdk_dynamodb::Client::new(aws_config);

        Self::new_from_client(client, records_table)
    }

    pub fn new_from_client(client: aws_sdk_dynamodb::Client, records_table: &str) -> Self {
        Self {
            records: RecordTable {
                table: records_table.to_string(),
                client,
            },
        }
    }
}

/// A table whose items are written with plain upserts keyed by the table's partition key
#[derive(Debug, Clone)]
pub struct RecordTable {
    table: String,
    client: aws_sdk_dynamodb::Client,
}

impl RecordTable {
    /// The name of the underlying dynamodb table
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Writes the record, replacing any existing item with the same key
    #[tracing::instrument(skip(self, record), fields(table=%self.table))]
    pub async fn put_record<T: Serialize>(&self, record: &T) -> anyhow::Result<()> {
        put_record::put_record(&self.client, &self.table, record).await
    }
}
