use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};

use crate::error::RentalsError;

pub const ATTR_ID: &str = "id";
pub const ATTR_QUANTITY: &str = "quantity";

/// Raw store item: attribute name → typed value.
pub type Item = HashMap<String, AttributeValue>;

// ═══════════════════════════════════════════════════════════════
//  RentalItem
// ═══════════════════════════════════════════════════════════════

/// One row of the rentals table, keyed by `id`.
///
/// Strings map to `S` attributes, integers to `N`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalItem {
    pub id: String,
    pub name: String,
    pub warehouse: String,
    pub quantity: i64,
    pub price: i64,
}

impl RentalItem {
    pub fn new(id: &str, name: &str, warehouse: &str, quantity: i64, price: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            warehouse: warehouse.to_string(),
            quantity,
            price,
        }
    }

    pub fn to_item(&self) -> Result<Item, RentalsError> {
        Ok(serde_dynamo::to_item(self)?)
    }

    pub fn from_item(item: &Item) -> Result<Self, RentalsError> {
        Ok(serde_dynamo::from_item(item.clone())?)
    }
}

/// Key projection of a row: what a scan with `ProjectionExpression = "id"`
/// returns.
#[derive(Debug, Deserialize)]
pub struct ItemKey {
    pub id: String,
}

impl ItemKey {
    pub fn from_item(item: &Item) -> Result<Self, RentalsError> {
        Ok(serde_dynamo::from_item(item.clone())?)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Seed dataset
// ═══════════════════════════════════════════════════════════════

pub fn seed_items() -> Vec<RentalItem> {
    vec![
        RentalItem::new("001", "Телевизор", "Нижегородский", 7, 10000),
        RentalItem::new("002", "Часы напольные", "Советский", 6, 5000),
        RentalItem::new("003", "Радиоприемник", "Нижегородский", 10, 7000),
        RentalItem::new("004", "Часы настенные", "Приокский", 20, 3000),
        RentalItem::new("005", "Холодильник", "Сормовский", 6, 12000),
        RentalItem::new("006", "Утюг", "Нижегородский", 30, 2000),
        RentalItem::new("007", "Весы детские", "Нижегородский", 15, 1500),
    ]
}
