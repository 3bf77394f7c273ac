use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::tracing;

use crate::{error::ImportError, parse::RowRecord};

/// Column used as the record key
pub const ID_COLUMN: &str = "id";
/// Column used as the record payload
pub const VALUE_COLUMN: &str = "value";

const CONFIRMATION_MESSAGE: &str = "CSV processed successfully";

/// The object a notification points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

impl ObjectRef {
    /// Reads the bucket and key out of the first record of the notification.
    /// Any further records are ignored.
    #[tracing::instrument(skip(event))]
    pub fn from_s3_event(event: &S3Event) -> Result<Self, ImportError> {
        let record = event.records.first().ok_or_else(|| {
            ImportError::InvalidNotification("notification contains no records".to_string())
        })?;

        if event.records.len() > 1 {
            tracing::warn!(
                record_count = event.records.len(),
                "only the first record of the notification is processed"
            );
        }

        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ImportError::InvalidNotification("expected bucket".to_string()))?;

        let key = record
            .s3
            .object
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ImportError::InvalidNotification("expected key".to_string()))?;

        Ok(Self {
            bucket: bucket.to_string(),
            key: decode_object_key(key)?,
        })
    }
}

/// S3 notifications carry the key form encoded, spaces arrive as `+`
fn decode_object_key(key: &str) -> Result<String, ImportError> {
    let key = key.replace('+', " ");
    urlencoding::decode(&key)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ImportError::InvalidNotification(format!("unable to decode key {key}: {e}")))
}

/// The item written to the records table for one row
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub id: String,
    pub value: String,
}

impl TryFrom<&RowRecord> for StoredItem {
    type Error = ImportError;

    fn try_from(row: &RowRecord) -> Result<Self, Self::Error> {
        let required = |field: &'static str| {
            row.get(field)
                .map(str::to_string)
                .ok_or(ImportError::MissingField {
                    line: row.line(),
                    field,
                })
        };

        Ok(Self {
            id: required(ID_COLUMN)?,
            value: required(VALUE_COLUMN)?,
        })
    }
}

/// The outcome of importing one object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows_written: usize,
}

/// What the lambda returns to its invoker once every row is written
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub status_code: u16,
    pub body: String,
}

impl ImportResponse {
    /// 200 with the json encoded confirmation message as body
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: serde_json::Value::String(CONFIRMATION_MESSAGE.to_string()).to_string(),
        }
    }
}
