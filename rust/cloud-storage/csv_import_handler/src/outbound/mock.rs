//! This module provides [mockall::mock] concrete structs [MockBucket] and [MockTable] which can be used for testing

use crate::{
    domain::ports::{ObjectSource, RecordSink},
    model::StoredItem,
};
use mockall::{mock, predicate::eq};
use std::sync::{Arc, Mutex};

mock! {
    pub Bucket {}
    impl ObjectSource for Bucket {
        type Err = anyhow::Error;

        fn fetch(
            &self,
            bucket: &str,
            key: &str,
        ) -> impl Future<Output = Result<Vec<u8>, anyhow::Error>> + Send;
    }
}

mock! {
    pub Table {}
    impl RecordSink for Table {
        type Err = anyhow::Error;

        fn put_record(&self, record: StoredItem) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
    }
}

/// A bucket holding one object with the given content
pub fn bucket_with_object(
    bucket: &'static str,
    key: &'static str,
    content: &'static str,
) -> MockBucket {
    let mut mock = MockBucket::new();
    mock.expect_fetch()
        .with(eq(bucket), eq(key))
        .returning(move |_, _| Box::pin(async move { Ok(content.as_bytes().to_vec()) }));
    mock
}

/// A table which accepts every write and appends it to `writes`
pub fn recording_table(writes: Arc<Mutex<Vec<StoredItem>>>) -> MockTable {
    let mut mock = MockTable::new();
    mock.expect_put_record().returning(move |record| {
        let writes = writes.clone();
        Box::pin(async move {
            writes.lock().unwrap().push(record);
            Ok(())
        })
    });
    mock
}
