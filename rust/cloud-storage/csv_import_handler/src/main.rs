#![recursion_limit = "256"]

use anyhow::Context;
use aws_lambda_events::s3::S3Event;
use csv_import_handler::{config::Config, handler::handler};
use import_entrypoint::ImportEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = ImportEntrypoint::default().init();

    tracing::trace!(environment=%entrypoint.environment(), "initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;
    tracing::trace!(config=?config, "initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    let s3_client = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let dynamodb_client = dynamodb_client::DynamodbClient::new(&aws_config, &config.table_name);
    tracing::trace!(table=%dynamodb_client.records.table(), "initialized dynamodb client");

    let shared_s3_client = &s3_client;
    let shared_dynamodb_client = &dynamodb_client;

    let func = service_fn(move |event: LambdaEvent<S3Event>| async move {
        handler(shared_s3_client, shared_dynamodb_client, event).await
    });

    run(func).await
}
