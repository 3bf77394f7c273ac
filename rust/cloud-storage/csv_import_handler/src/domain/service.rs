use crate::{
    domain::ports::{ObjectSource, RecordSink},
    error::ImportError,
    model::{ID_COLUMN, ImportSummary, ObjectRef, StoredItem, VALUE_COLUMN},
    parse,
};


/// Fetches the object, parses it and writes one record per row in file order.
///
/// Writes are issued one at a time and the first failure stops the import.
/// Records written before the failure are left in place.
#[tracing::instrument(skip(objects, records), fields(bucket=%object.bucket, key=%object.key))]
pub async fn import_object<O, R>(
    objects: &O,
    records: &R,
    object: &ObjectRef,
) -> Result<ImportSummary, ImportError>
where
    O: ObjectSource,
    R: RecordSink,
{
    let bytes = objects
        .fetch(&object.bucket, &object.key)
        .await
        .map_err(|e| ImportError::Fetch {
            bucket: object.bucket.clone(),
            key: object.key.clone(),
            source: e.into(),
        })?;
    tracing::trace!(size = bytes.len(), "object retrieved");

    let parsed = parse::parse_object(&bytes)?;
    tracing::trace!(row_count = parsed.rows.len(), "object parsed");

    if parsed.rows.is_empty() {
        tracing::info!("object has no data rows");
        return Ok(ImportSummary { rows_written: 0 });
    }

    parsed.require_columns(&[ID_COLUMN, VALUE_COLUMN])?;

    let mut rows_written = 0;
    for row in &parsed.rows {
        let item = StoredItem::try_from(row).inspect_err(|e| {
            tracing::error!(error=?e, rows_written, "invalid row");
        })?;
        let id = item.id.clone();

        if let Err(e) = records.put_record(item).await {
            let err = ImportError::Write {
                line: row.line(),
                id,
                source: e.into(),
            };
            tracing::error!(error=?err, rows_written, "unable to write record");
            return Err(err);
        }

        rows_written += 1;
    }

    Ok(ImportSummary { rows_written })
}
