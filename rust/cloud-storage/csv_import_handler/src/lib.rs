pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod model;
pub mod outbound;
pub mod parse;

#[cfg(test)]
/// Used in testing to build s3 notifications from the put event fixture
pub(crate) fn load_put_event_fixture() -> serde_json::Value {
    serde_json::from_str(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/s3-put-event.json"
    )))
    .expect("fixture should be valid json")
}
