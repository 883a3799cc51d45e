use std::sync::Arc;

use crate::error::RentalsError;
use crate::record::{ATTR_ID, ItemKey, RentalItem, seed_items};
use crate::store::{RentalStore, TableSpec};

/// Owns the store handle and the table declaration, and runs the
/// provisioning operations against them. Every call goes straight to the
/// store; there is no local state between calls.
pub struct TableManager {
    store: Arc<dyn RentalStore>,
    spec: TableSpec,
}

impl TableManager {
    pub fn new(store: Arc<dyn RentalStore>, spec: TableSpec) -> Self {
        Self { store, spec }
    }

    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    pub async fn create_table(&self) -> Result<(), RentalsError> {
        self.spec.validate()?;
        self.store.create_table(&self.spec).await?;
        tracing::info!(
            table = %self.spec.name,
            read_capacity = self.spec.read_capacity,
            write_capacity = self.spec.write_capacity,
            "created table"
        );
        Ok(())
    }

    /// Writes the seed dataset one item at a time. Stops at the first
    /// failure and leaves whatever was already written.
    pub async fn populate_table(&self) -> Result<(), RentalsError> {
        let items = seed_items();
        for item in &items {
            self.store.put_item(&self.spec.name, item.to_item()?).await?;
            tracing::debug!(id = %item.id, "put item");
        }
        tracing::info!(table = %self.spec.name, count = items.len(), "populated table");
        Ok(())
    }

    pub async fn get_items(&self) -> Result<Vec<RentalItem>, RentalsError> {
        let rows = self.store.scan(&self.spec.name, None).await?;
        rows.iter().map(RentalItem::from_item).collect()
    }

    pub async fn update_quantity(&self, id: &str, quantity: i64) -> Result<(), RentalsError> {
        self.store.update_quantity(&self.spec.name, id, quantity).await?;
        tracing::info!(%id, quantity, "updated quantity");
        Ok(())
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), RentalsError> {
        self.store.delete_item(&self.spec.name, id).await?;
        tracing::info!(%id, "deleted item");
        Ok(())
    }

    /// Deletes every item, one request per id. Not atomic. Returns the
    /// number of delete requests issued.
    pub async fn clear_table(&self) -> Result<usize, RentalsError> {
        let rows = self.store.scan(&self.spec.name, Some(ATTR_ID)).await?;
        for row in &rows {
            let key = ItemKey::from_item(row)?;
            self.store.delete_item(&self.spec.name, &key.id).await?;
        }
        tracing::info!(table = %self.spec.name, deleted = rows.len(), "cleared table");
        Ok(rows.len())
    }
}
