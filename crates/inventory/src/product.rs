use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockpulse_core::ProductId;

/// One recorded sale: the calendar day it was processed and the units sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub quantity: u64,
}

impl SaleRecord {
    pub fn new(date: NaiveDate, quantity: u64) -> Self {
        Self { date, quantity }
    }
}

/// A stocked product.
///
/// Optional attributes follow the inventory document format: a missing
/// `quantity` reads as zero, a missing `reorder_point` falls back to the alert
/// thresholds, and `sales_history` starts empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub quantity: u64,
    #[serde(
        default,
        deserialize_with = "non_negative::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub reorder_point: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Append-only; insertion order is processing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sales_history: Vec<SaleRecord>,

    // Descriptive attributes, carried through untouched.
    #[serde(default, alias = "leadTimeDays", skip_serializing_if = "Option::is_none")]
    pub lead_time_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, alias = "safetyStock", skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<u64>,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
            reorder_point: None,
            last_updated: None,
            sales_history: Vec::new(),
            lead_time_days: None,
            location: None,
            safety_stock: None,
        }
    }

    pub fn with_reorder_point(mut self, reorder_point: f64) -> Self {
        self.reorder_point = Some(reorder_point);
        self
    }

    pub fn with_sale(mut self, date: NaiveDate, quantity: u64) -> Self {
        self.sales_history.push(SaleRecord::new(date, quantity));
        self
    }

    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_safety_stock(mut self, safety_stock: u64) -> Self {
        self.safety_stock = Some(safety_stock);
        self
    }
}

/// Inventory snapshot: product ID → product, iterated in insertion order
/// (document order when deserialized).
///
/// Snapshots are plain values. `Clone` is a deep copy (products and their
/// sales histories), so a clone never aliases the original.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    products: IndexMap<ProductId, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, id: impl Into<ProductId>, product: Product) -> Self {
        self.insert(id, product);
        self
    }

    /// Insert or replace a product, returning the previous record if any.
    /// A replaced product keeps its original position.
    pub fn insert(&mut self, id: impl Into<ProductId>, product: Product) -> Option<Product> {
        self.products.insert(id.into(), product)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &Product)> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<(ProductId, Product)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (ProductId, Product)>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

/// Serde helper for optional thresholds such as reorder points: accepts any
/// JSON number, rejects negatives.
pub mod non_negative {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<f64>::deserialize(deserializer)? {
            Some(value) if value < 0.0 => Err(D::Error::custom(format!(
                "expected a non-negative number, found {value}"
            ))),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{"products": {"SKU001": {"name": "Product A"}}}"#;
        let inventory: Inventory = serde_json::from_str(json).unwrap();

        let product = inventory.get("SKU001").unwrap();
        assert_eq!(product.quantity, 0);
        assert_eq!(product.reorder_point, None);
        assert_eq!(product.last_updated, None);
        assert!(product.sales_history.is_empty());
    }

    #[test]
    fn accepts_camel_case_descriptive_attributes() {
        let json = r#"{"products": {"SKU001": {
            "name": "Product A", "quantity": 150, "reorder_point": 50,
            "leadTimeDays": 7, "location": "Zone-A", "safetyStock": 30
        }}}"#;
        let inventory: Inventory = serde_json::from_str(json).unwrap();

        let product = inventory.get("SKU001").unwrap();
        assert_eq!(product.quantity, 150);
        assert_eq!(product.reorder_point, Some(50.0));
        assert_eq!(product.lead_time_days, Some(7));
        assert_eq!(product.location.as_deref(), Some("Zone-A"));
        assert_eq!(product.safety_stock, Some(30));
    }

    #[test]
    fn sales_history_dates_are_iso_days() {
        let day = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let product = Product::new("Product A", 5).with_sale(day, 3);

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["sales_history"][0]["date"], "2024-11-01");
        assert_eq!(value["sales_history"][0]["quantity"], 3);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let inventory = Inventory::new()
            .with_product("SKU003", Product::new("C", 1))
            .with_product("SKU001", Product::new("A", 1))
            .with_product("SKU002", Product::new("B", 1));

        let keys: Vec<&str> = inventory.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(keys, ["SKU003", "SKU001", "SKU002"]);
    }

    #[test]
    fn deserialized_inventory_keeps_document_order() {
        let json = r#"{"products": {
            "SKU010": {"name": "J", "quantity": 5},
            "SKU002": {"name": "B", "quantity": 5}
        }}"#;
        let inventory: Inventory = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = inventory.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(keys, ["SKU010", "SKU002"]);
    }

    #[test]
    fn replacing_a_product_keeps_its_position() {
        let mut inventory = Inventory::new()
            .with_product("SKU002", Product::new("B", 1))
            .with_product("SKU001", Product::new("A", 1));

        let previous = inventory.insert("SKU002", Product::new("B2", 9));

        assert_eq!(previous.map(|p| p.quantity), Some(1));
        let keys: Vec<&str> = inventory.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(keys, ["SKU002", "SKU001"]);
    }

    #[test]
    fn fractional_reorder_point_is_accepted() {
        let json = r#"{"products": {"SKU001": {"name": "A", "quantity": 3, "reorder_point": 12.5}}}"#;
        let inventory: Inventory = serde_json::from_str(json).unwrap();

        assert_eq!(inventory.get("SKU001").unwrap().reorder_point, Some(12.5));
    }

    #[test]
    fn negative_reorder_point_is_rejected() {
        let json = r#"{"products": {"SKU001": {"name": "A", "reorder_point": -1}}}"#;
        let err = serde_json::from_str::<Inventory>(json).unwrap_err();

        assert!(err.to_string().contains("non-negative"), "unexpected error: {err}");
    }

    #[test]
    fn clone_does_not_alias_sales_history() {
        let day = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let original = Inventory::new().with_product("SKU001", Product::new("A", 10).with_sale(day, 1));

        let mut copy = original.clone();
        copy.get_mut("SKU001").unwrap().sales_history.push(SaleRecord::new(day, 2));

        assert_eq!(original.get("SKU001").unwrap().sales_history.len(), 1);
        assert_eq!(copy.get("SKU001").unwrap().sales_history.len(), 2);
    }
}
