use std::sync::Arc;

use aws_sdk_dynamodb::config::Region;

use rentals::{DynamoStore, MemoryStore, RentalStore, TableManager};

use super::config::{Backend, Effective};
use super::error::CliError;
use super::render::print_listing;

// ═══════════════════════════════════════════════════════════════
//  Store construction
// ═══════════════════════════════════════════════════════════════

async fn dynamo_client(eff: &Effective) -> aws_sdk_dynamodb::Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &eff.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &eff.endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;
    aws_sdk_dynamodb::Client::new(&sdk_config)
}

pub async fn open_store(eff: &Effective) -> Arc<dyn RentalStore> {
    match eff.backend {
        Backend::Dynamo => {
            let client = dynamo_client(eff).await;
            tracing::info!(
                region = eff.region.as_deref().unwrap_or("<sdk default>"),
                endpoint = eff.endpoint.as_deref().unwrap_or("<sdk default>"),
                "dynamodb client ready"
            );
            Arc::new(DynamoStore::new(client).with_table_wait(eff.table_wait))
        }
        Backend::Memory => {
            tracing::info!("using in-memory store");
            Arc::new(MemoryStore::new())
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Scenario
// ═══════════════════════════════════════════════════════════════

pub async fn run(eff: &Effective) -> Result<(), CliError> {
    let store = open_store(eff).await;
    scenario(&TableManager::new(store, eff.table.clone()), eff).await
}

/// create → populate → list → update → delete → list → clear → list.
/// Stops at the first error.
pub async fn scenario(manager: &TableManager, eff: &Effective) -> Result<(), CliError> {
    manager.create_table().await?;
    manager.populate_table().await?;
    print_listing("Initial data:", &manager.get_items().await?)?;

    manager.update_quantity(&eff.update_id, eff.update_qty).await?;
    manager.delete_item(&eff.delete_id).await?;
    print_listing("\nAfter updates:", &manager.get_items().await?)?;

    manager.clear_table().await?;
    print_listing("\nAfter clearing:", &manager.get_items().await?)?;

    tracing::info!(table = %manager.spec().name, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rentals::{RentalsError, TableSpec};

    use super::*;

    fn memory_eff() -> Effective {
        Effective {
            region: None,
            endpoint: None,
            table: TableSpec::default(),
            table_wait: Duration::ZERO,
            backend: Backend::Memory,
            update_id: "001".into(),
            update_qty: 5,
            delete_id: "007".into(),
        }
    }

    #[tokio::test]
    async fn scenario_runs_to_completion_and_leaves_table_empty() {
        let store = Arc::new(MemoryStore::new());
        let eff = memory_eff();
        let manager = TableManager::new(store.clone(), eff.table.clone());

        scenario(&manager, &eff).await.unwrap();

        assert!(manager.get_items().await.unwrap().is_empty());
        assert!(store.table_spec("RentalsTable").await.is_some());
    }

    #[tokio::test]
    async fn scenario_aborts_when_table_exists() {
        let store = Arc::new(MemoryStore::new());
        let eff = memory_eff();
        store.create_table(&eff.table).await.unwrap();
        let manager = TableManager::new(store, eff.table.clone());

        let err = scenario(&manager, &eff).await.unwrap_err();
        assert!(matches!(err, CliError::Rentals(RentalsError::Remote { op: "CreateTable", .. })));
        assert!(manager.get_items().await.unwrap().is_empty());
    }
}
