use std::future::Future;
use std::pin::Pin;

use crate::error::RentalsError;
use crate::record::Item;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RentalsError>> + Send + 'a>>;

/// Table declaration: hash key `id`, fixed provisioned throughput.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub name: String,
    pub read_capacity: i64,
    pub write_capacity: i64,
}

impl TableSpec {
    pub const DEFAULT_NAME: &'static str = "RentalsTable";
    pub const DEFAULT_CAPACITY: i64 = 5;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            read_capacity: Self::DEFAULT_CAPACITY,
            write_capacity: Self::DEFAULT_CAPACITY,
        }
    }

    pub fn with_capacity(mut self, read: i64, write: i64) -> Self {
        self.read_capacity = read;
        self.write_capacity = write;
        self
    }

    /// Name must be non-empty, capacity units positive. DynamoDB rejects
    /// anything else at CreateTable.
    pub fn validate(&self) -> Result<(), RentalsError> {
        if self.name.trim().is_empty() {
            return Err(RentalsError::InvalidSpec("table name is empty".into()));
        }
        if self.read_capacity <= 0 || self.write_capacity <= 0 {
            return Err(RentalsError::InvalidSpec(format!(
                "capacity units must be positive (read={}, write={})",
                self.read_capacity, self.write_capacity
            )));
        }
        Ok(())
    }
}

impl Default for TableSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

/// Key-value store backend.
///
/// Each method is exactly one remote call. Errors are returned as-is,
/// nothing is retried.
pub trait RentalStore: Send + Sync {
    /// Fails if the table already exists.
    fn create_table(&self, spec: &TableSpec) -> StoreFuture<'_, ()>;

    /// Insert or overwrite by `id`.
    fn put_item(&self, table: &str, item: Item) -> StoreFuture<'_, ()>;

    /// Single unbounded scan, first page only. `projection` is a
    /// comma-separated list of attribute names.
    fn scan(&self, table: &str, projection: Option<&str>) -> StoreFuture<'_, Vec<Item>>;

    /// Set `quantity` on an existing item. Missing `id` is a no-op.
    fn update_quantity(&self, table: &str, id: &str, quantity: i64) -> StoreFuture<'_, ()>;

    /// Missing `id` is a no-op.
    fn delete_item(&self, table: &str, id: &str) -> StoreFuture<'_, ()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid() {
        assert!(TableSpec::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_capacity_and_empty_name() {
        for spec in [
            TableSpec::default().with_capacity(0, 5),
            TableSpec::default().with_capacity(5, -1),
            TableSpec::new(" "),
        ] {
            assert!(matches!(spec.validate(), Err(RentalsError::InvalidSpec(_))), "{spec:?}");
        }
    }
}
