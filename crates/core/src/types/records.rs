//! Opaque records fetched verbatim from the backend.
//!
//! This layer stores these collections without interpreting their fields;
//! the transparent wrappers keep the wire shape byte-for-byte.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A customer order, stored as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(pub Value);

/// A payment transaction, stored as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction(pub Value);

/// An end-of-day cash closure, stored as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashClosure(pub Value);

/// Store-wide settings singleton.
///
/// The backend exposes it as a one-element collection; an empty collection
/// yields [`StoreConfig::empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreConfig(pub Value);

impl StoreConfig {
    /// The configuration used when the backend has none: an empty object.
    #[must_use]
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_round_trips_verbatim() {
        let raw = json!({"id": "o1", "items": [{"menu_item_id": "m1", "qty": 2}], "total": 124_000});
        let order: Order = serde_json::from_value(raw.clone()).expect("deserialize");
        assert_eq!(serde_json::to_value(&order).expect("serialize"), raw);
    }

    #[test]
    fn test_empty_config_is_an_object() {
        let config = StoreConfig::default();
        assert_eq!(serde_json::to_value(&config).expect("serialize"), json!({}));
    }
}
