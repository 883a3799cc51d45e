use std::sync::Arc;

use rentals::{MemoryStore, RentalItem, RentalStore, RentalsError, TableManager, TableSpec, seed_items};

async fn seeded() -> (Arc<MemoryStore>, TableManager) {
    let store = Arc::new(MemoryStore::new());
    let manager = TableManager::new(store.clone(), TableSpec::default());
    manager.create_table().await.expect("create");
    manager.populate_table().await.expect("populate");
    (store, manager)
}

fn sorted(mut items: Vec<RentalItem>) -> Vec<RentalItem> {
    items.sort_by(|a, b| a.id.cmp(&b.id));
    items
}

fn find<'a>(items: &'a [RentalItem], id: &str) -> Option<&'a RentalItem> {
    items.iter().find(|i| i.id == id)
}

#[tokio::test]
async fn populate_returns_exactly_the_seed() {
    let (_, manager) = seeded().await;
    let items = manager.get_items().await.expect("scan");
    assert_eq!(sorted(items), sorted(seed_items()));
}

#[tokio::test]
async fn create_declares_fixed_throughput() {
    let store = Arc::new(MemoryStore::new());
    let spec = TableSpec::new("Rentals2").with_capacity(10, 2);
    let manager = TableManager::new(store.clone(), spec.clone());
    manager.create_table().await.expect("create");
    assert_eq!(store.table_spec("Rentals2").await, Some(spec));
}

#[tokio::test]
async fn create_on_existing_table_fails() {
    let (_, manager) = seeded().await;
    let err = manager.create_table().await.unwrap_err();
    assert!(matches!(err, RentalsError::Remote { op: "CreateTable", .. }));
}

#[tokio::test]
async fn create_rejects_invalid_spec_before_calling_the_store() {
    let store = Arc::new(MemoryStore::new());
    let manager = TableManager::new(store.clone(), TableSpec::default().with_capacity(5, 0));
    let err = manager.create_table().await.unwrap_err();
    assert!(matches!(err, RentalsError::InvalidSpec(_)));
    assert_eq!(store.table_spec("RentalsTable").await, None);
}

#[tokio::test]
async fn operations_on_missing_table_fail() {
    let store = Arc::new(MemoryStore::new());
    let manager = TableManager::new(store, TableSpec::default());
    assert!(manager.populate_table().await.is_err());
    assert!(manager.get_items().await.is_err());
    assert!(manager.clear_table().await.is_err());
}

#[tokio::test]
async fn update_changes_only_the_target() {
    let (_, manager) = seeded().await;
    manager.update_quantity("003", 42).await.expect("update");

    let items = manager.get_items().await.expect("scan");
    assert_eq!(items.len(), 7);
    for seed in seed_items() {
        let got = find(&items, &seed.id).expect("present");
        if seed.id == "003" {
            assert_eq!(got.quantity, 42);
            assert_eq!(got.price, seed.price);
            assert_eq!(got.name, seed.name);
        } else {
            assert_eq!(got, &seed);
        }
    }
}

#[tokio::test]
async fn update_of_missing_id_is_noop() {
    let (_, manager) = seeded().await;
    manager.update_quantity("999", 1).await.expect("no error");
    let items = manager.get_items().await.expect("scan");
    assert_eq!(sorted(items), sorted(seed_items()));
}

#[tokio::test]
async fn delete_removes_one_record() {
    let (_, manager) = seeded().await;
    manager.delete_item("004").await.expect("delete");
    let items = manager.get_items().await.expect("scan");
    assert_eq!(items.len(), 6);
    assert!(find(&items, "004").is_none());

    manager.delete_item("004").await.expect("second delete is a no-op");
    assert_eq!(manager.get_items().await.expect("scan").len(), 6);
}

#[tokio::test]
async fn clear_empties_the_table() {
    let (store, manager) = seeded().await;
    let deleted = manager.clear_table().await.expect("clear");
    assert_eq!(deleted, 7);
    assert!(manager.get_items().await.expect("scan").is_empty());
    assert!(store.scan("RentalsTable", None).await.expect("raw scan").is_empty());

    assert_eq!(manager.clear_table().await.expect("clear empty"), 0);
}

#[tokio::test]
async fn scan_fails_on_malformed_row() {
    let (store, manager) = seeded().await;
    let mut broken = RentalItem::new("100", "Пылесос", "Советский", 1, 1).to_item().unwrap();
    broken.remove("price");
    store.put_item("RentalsTable", broken).await.expect("raw put");

    let err = manager.get_items().await.unwrap_err();
    assert!(matches!(err, RentalsError::Decode(_)));
}

#[tokio::test]
async fn full_scenario() {
    let (_, manager) = seeded().await;
    assert_eq!(manager.get_items().await.expect("scan").len(), 7);

    manager.update_quantity("001", 5).await.expect("update");
    manager.delete_item("007").await.expect("delete");

    let items = manager.get_items().await.expect("scan");
    assert_eq!(items.len(), 6);
    assert_eq!(find(&items, "001").map(|i| i.quantity), Some(5));
    assert!(find(&items, "007").is_none());

    manager.clear_table().await.expect("clear");
    assert!(manager.get_items().await.expect("scan").is_empty());
}
