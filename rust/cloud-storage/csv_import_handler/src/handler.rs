use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{
    domain::{
        ports::{ObjectSource, RecordSink},
        service,
    },
    model::{ImportResponse, ObjectRef},
};


/// Processes the s3 event
/// Only the first record of the notification is imported
#[tracing::instrument(skip(objects, records, event), fields(request_id=%event.context.request_id))]
pub async fn handler<O, R>(
    objects: &O,
    records: &R,
    event: LambdaEvent<S3Event>,
) -> Result<ImportResponse, Error>
where
    O: ObjectSource,
    R: RecordSink,
{
    tracing::info!(
        "processing s3 records record_count={}",
        event.payload.records.len()
    );

    let object = ObjectRef::from_s3_event(&event.payload).inspect_err(|e| {
        tracing::error!(error=?e, "invalid s3 notification");
    })?;

    let summary = service::import_object(objects, records, &object)
        .await
        .inspect_err(|e| {
            tracing::error!(error=?e, bucket=%object.bucket, key=%object.key, "unable to import object");
        })?;

    tracing::info!(
        rows_written = summary.rows_written,
        bucket = %object.bucket,
        key = %object.key,
        "import complete"
    );

    Ok(ImportResponse::success())
}
