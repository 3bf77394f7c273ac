use anyhow::Context;
use aws_sdk_s3 as s3;

/// Gets a given item from the bucket
/// The whole body is buffered in memory before returning
#[tracing::instrument(skip(client))]
pub(crate) async fn get(client: &s3::Client, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
    let resp = match client.get_object().bucket(bucket).key(key).send().await {
        Ok(resp) => resp,
        Err(e) => {
            if e.as_service_error().map(|e| e.is_no_such_key()) == Some(true) {
                anyhow::bail!("item {key} does not exist in bucket {bucket}");
            }

            return Err(e).context(format!("could not get item {key} from bucket {bucket}"));
        }
    };

    tracing::trace!(content_length=?resp.content_length(), "got object");

    let body = resp
        .body
        .collect()
        .await
        .context("could not collect body")?;

    Ok(body.into_bytes().to_vec())
}
