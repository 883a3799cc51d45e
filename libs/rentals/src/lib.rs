//! Rentals table: record model, store backends and the table manager
//! that drives the provisioning scenario.

pub mod dynamo;
pub mod error;
pub mod manager;
pub mod memory;
pub mod record;
pub mod store;

pub use dynamo::DynamoStore;
pub use error::RentalsError;
pub use manager::TableManager;
pub use memory::MemoryStore;
pub use record::{Item, ItemKey, RentalItem, seed_items};
pub use store::{RentalStore, StoreFuture, TableSpec};
