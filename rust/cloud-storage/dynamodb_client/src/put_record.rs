use anyhow::Context;
use aws_sdk_dynamodb::Client;
use serde::Serialize;
use serde_dynamo::Item;

/// Serializes the record into a dynamodb item
pub(crate) fn to_item<T: Serialize>(record: &T) -> anyhow::Result<Item> {
    serde_dynamo::to_item(record).context("could not serialize record into dynamodb item")
}

/// Puts the record into the table. Existing items with the same key are overwritten.
pub(crate) async fn put_record<T: Serialize>(
    client: &Client,
    table: &str,
    record: &T,
) -> anyhow::Result<()> {
    let item = to_item(record)?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .send()
        .await
        .context("could not put item, dynamodb")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::AttributeValue;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Color {
        id: String,
        value: String,
    }

    #[test]
    fn numeric_looking_strings_stay_strings() {
        let item = to_item(&Color {
            id: "1".to_string(),
            value: "red".to_string(),
        })
        .unwrap();

        let item: HashMap<String, AttributeValue> = item.into();

        assert_eq!(item.len(), 2);
        assert_eq!(item.get("id"), Some(&AttributeValue::S("1".to_string())));
        assert_eq!(
            item.get("value"),
            Some(&AttributeValue::S("red".to_string()))
        );
    }

    #[test]
    fn non_map_records_are_rejected() {
        assert!(to_item(&"just a string").is_err());
    }
}
