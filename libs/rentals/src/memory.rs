use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use tokio::sync::RwLock;

use crate::error::RentalsError;
use crate::record::{ATTR_QUANTITY, Item, ItemKey};
use crate::store::{RentalStore, StoreFuture, TableSpec};

struct MemoryTable {
    spec: TableSpec,
    items: BTreeMap<String, Item>,
}

/// In-process store with the same contract as [`crate::DynamoStore`]:
/// duplicate create fails, unknown table fails, update/delete of a
/// missing key is a no-op.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, MemoryTable>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared spec of `table`, if it exists.
    pub async fn table_spec(&self, table: &str) -> Option<TableSpec> {
        self.tables.read().await.get(table).map(|t| t.spec.clone())
    }
}

fn not_found(op: &'static str, table: &str) -> RentalsError {
    RentalsError::remote(op, format!("requested resource not found: table {table}"))
}

impl RentalStore for MemoryStore {
    fn create_table(&self, spec: &TableSpec) -> StoreFuture<'_, ()> {
        let spec = spec.clone();
        Box::pin(async move {
            spec.validate()
                .map_err(|e| RentalsError::remote("CreateTable", e))?;
            let mut tables = self.tables.write().await;
            if tables.contains_key(&spec.name) {
                return Err(RentalsError::remote(
                    "CreateTable",
                    format!("table already exists: {}", spec.name),
                ));
            }
            tables.insert(
                spec.name.clone(),
                MemoryTable { spec, items: BTreeMap::new() },
            );
            Ok(())
        })
    }

    fn put_item(&self, table: &str, item: Item) -> StoreFuture<'_, ()> {
        let table = table.to_owned();
        Box::pin(async move {
            let id = ItemKey::from_item(&item)
                .map_err(|e| RentalsError::remote("PutItem", e))?
                .id;
            let mut tables = self.tables.write().await;
            let t = tables.get_mut(&table).ok_or_else(|| not_found("PutItem", &table))?;
            t.items.insert(id, item);
            Ok(())
        })
    }

    fn scan(&self, table: &str, projection: Option<&str>) -> StoreFuture<'_, Vec<Item>> {
        let table = table.to_owned();
        let projection: Option<Vec<String>> =
            projection.map(|p| p.split(',').map(|a| a.trim().to_string()).collect());
        Box::pin(async move {
            let tables = self.tables.read().await;
            let t = tables.get(&table).ok_or_else(|| not_found("Scan", &table))?;
            let items = t
                .items
                .values()
                .map(|item| match &projection {
                    Some(attrs) => item
                        .iter()
                        .filter(|(k, _)| attrs.contains(k))
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                    None => item.clone(),
                })
                .collect();
            Ok(items)
        })
    }

    fn update_quantity(&self, table: &str, id: &str, quantity: i64) -> StoreFuture<'_, ()> {
        let table = table.to_owned();
        let id = id.to_owned();
        Box::pin(async move {
            let mut tables = self.tables.write().await;
            let t = tables.get_mut(&table).ok_or_else(|| not_found("UpdateItem", &table))?;
            if let Some(item) = t.items.get_mut(&id) {
                item.insert(ATTR_QUANTITY.to_string(), AttributeValue::N(quantity.to_string()));
            }
            Ok(())
        })
    }

    fn delete_item(&self, table: &str, id: &str) -> StoreFuture<'_, ()> {
        let table = table.to_owned();
        let id = id.to_owned();
        Box::pin(async move {
            let mut tables = self.tables.write().await;
            let t = tables.get_mut(&table).ok_or_else(|| not_found("DeleteItem", &table))?;
            t.items.remove(&id);
            Ok(())
        })
    }
}
