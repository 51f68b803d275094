//! Domain Layer - Order records.
//!
//! Orders are plain value objects. The catalog holding them is created once
//! and never mutated afterwards.

use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// A single order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: u64,
    /// Description of the ordered item.
    pub item: String,
}

impl Order {
    /// Create a new order.
    #[must_use]
    pub fn new(id: u64, item: impl Into<String>) -> Self {
        Self {
            id,
            item: item.into(),
        }
    }
}

/// Immutable, cheaply cloneable collection of orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCatalog {
    orders: Arc<[Order]>,
}

impl OrderCatalog {
    /// Build a catalog from the given orders, keeping their order.
    #[must_use]
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: orders.into(),
        }
    }

    /// The fixed catalog the service serves.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![Order::new(1, "Book"), Order::new(2, "Laptop")])
    }

    /// All orders in insertion order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the catalog has no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Serializes as a plain JSON array of records.
impl Serialize for OrderCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.orders().serialize(serializer)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_has_book_then_laptop() {
        let catalog = OrderCatalog::seeded();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.orders()[0], Order::new(1, "Book"));
        assert_eq!(catalog.orders()[1], Order::new(2, "Laptop"));
    }

    #[test]
    fn order_serializes_id_before_item() {
        let json = serde_json::to_string(&Order::new(1, "Book")).unwrap();
        assert_eq!(json, r#"{"id":1,"item":"Book"}"#);
    }

    #[test]
    fn order_round_trips_from_wire_shape() {
        let order: Order = serde_json::from_str(r#"{"id":2,"item":"Laptop"}"#).unwrap();
        assert_eq!(order, Order::new(2, "Laptop"));
    }

    #[test]
    fn catalog_serializes_as_plain_array() {
        let json = serde_json::to_string(&OrderCatalog::seeded()).unwrap();
        assert_eq!(json, r#"[{"id":1,"item":"Book"},{"id":2,"item":"Laptop"}]"#);
    }

    #[test]
    fn clones_share_the_same_records() {
        let catalog = OrderCatalog::seeded();
        let cloned = catalog.clone();

        assert!(std::ptr::eq(catalog.orders(), cloned.orders()));
    }

    #[test]
    fn empty_catalog() {
        let catalog = OrderCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(serde_json::to_string(catalog.orders()).unwrap(), "[]");
    }
}
