use std::time::Duration;

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::client::Waiters;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput,
    ScalarAttributeType,
};

use crate::error::RentalsError;
use crate::record::{ATTR_ID, ATTR_QUANTITY, Item};
use crate::store::{RentalStore, StoreFuture, TableSpec};

/// DynamoDB backend.
///
/// Works against AWS or any DynamoDB-compatible endpoint (DynamoDB Local,
/// LocalStack); the endpoint is chosen when the `Client` is built.
pub struct DynamoStore {
    client: Client,
    /// Max time to wait for a new table to become visible. `None` = don't wait.
    table_wait: Option<Duration>,
}

impl DynamoStore {
    pub fn new(client: Client) -> Self {
        Self { client, table_wait: None }
    }

    pub fn with_table_wait(mut self, max_wait: Duration) -> Self {
        self.table_wait = if max_wait.is_zero() { None } else { Some(max_wait) };
        self
    }
}

impl RentalStore for DynamoStore {
    fn create_table(&self, spec: &TableSpec) -> StoreFuture<'_, ()> {
        let spec = spec.clone();
        Box::pin(async move {
            let id_attr = AttributeDefinition::builder()
                .attribute_name(ATTR_ID)
                .attribute_type(ScalarAttributeType::S)
                .build()?;
            let hash_key = KeySchemaElement::builder()
                .attribute_name(ATTR_ID)
                .key_type(KeyType::Hash)
                .build()?;
            let throughput = ProvisionedThroughput::builder()
                .read_capacity_units(spec.read_capacity)
                .write_capacity_units(spec.write_capacity)
                .build()?;

            self.client
                .create_table()
                .table_name(&spec.name)
                .attribute_definitions(id_attr)
                .key_schema(hash_key)
                .provisioned_throughput(throughput)
                .send()
                .await
                .map_err(|e| RentalsError::remote("CreateTable", DisplayErrorContext(&e)))?;

            if let Some(max_wait) = self.table_wait {
                tracing::debug!(table = %spec.name, ?max_wait, "waiting for table");
                self.client
                    .wait_until_table_exists()
                    .table_name(&spec.name)
                    .wait(max_wait)
                    .await
                    .map_err(|e| RentalsError::remote("DescribeTable", DisplayErrorContext(&e)))?;
            }
            Ok(())
        })
    }

    fn put_item(&self, table: &str, item: Item) -> StoreFuture<'_, ()> {
        let table = table.to_owned();
        Box::pin(async move {
            self.client
                .put_item()
                .table_name(table)
                .set_item(Some(item))
                .send()
                .await
                .map_err(|e| RentalsError::remote("PutItem", DisplayErrorContext(&e)))?;
            Ok(())
        })
    }

    fn scan(&self, table: &str, projection: Option<&str>) -> StoreFuture<'_, Vec<Item>> {
        let table = table.to_owned();
        let projection = projection.map(str::to_owned);
        Box::pin(async move {
            let output = self
                .client
                .scan()
                .table_name(table)
                .set_projection_expression(projection)
                .send()
                .await
                .map_err(|e| RentalsError::remote("Scan", DisplayErrorContext(&e)))?;
            if output.last_evaluated_key.is_some() {
                tracing::warn!("scan returned more than one page, only the first is read");
            }
            Ok(output.items.unwrap_or_default())
        })
    }

    fn update_quantity(&self, table: &str, id: &str, quantity: i64) -> StoreFuture<'_, ()> {
        let table = table.to_owned();
        let id = id.to_owned();
        Box::pin(async move {
            // UpdateItem upserts; the condition turns a missing key into a no-op.
            let result = self
                .client
                .update_item()
                .table_name(table)
                .key(ATTR_ID, AttributeValue::S(id.clone()))
                .update_expression("SET #qty = :qty")
                .condition_expression("attribute_exists(#id)")
                .expression_attribute_names("#qty", ATTR_QUANTITY)
                .expression_attribute_names("#id", ATTR_ID)
                .expression_attribute_values(":qty", AttributeValue::N(quantity.to_string()))
                .send()
                .await;

            match result {
                Ok(_) => Ok(()),
                Err(e)
                    if e
                        .as_service_error()
                        .is_some_and(|se| se.is_conditional_check_failed_exception()) =>
                {
                    tracing::debug!(%id, "update skipped, item does not exist");
                    Ok(())
                }
                Err(e) => Err(RentalsError::remote("UpdateItem", DisplayErrorContext(&e))),
            }
        })
    }

    fn delete_item(&self, table: &str, id: &str) -> StoreFuture<'_, ()> {
        let table = table.to_owned();
        let id = id.to_owned();
        Box::pin(async move {
            self.client
                .delete_item()
                .table_name(table)
                .key(ATTR_ID, AttributeValue::S(id))
                .send()
                .await
                .map_err(|e| RentalsError::remote("DeleteItem", DisplayErrorContext(&e)))?;
            Ok(())
        })
    }
}
