//! Generic record as stored and returned by every resource endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of any resource
///
/// Serialized flat: `{"id": .., <declared fields>.., "created_at": .., "updated_at": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Convert into one of the typed models
    pub fn into_model<T: serde::de::DeserializeOwned>(self) -> serde_json::Result<T> {
        serde_json::to_value(self).and_then(serde_json::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_flat() {
        let record: Record = serde_json::from_value(json!({
            "id": "m1",
            "name": "Burger",
            "price": 9.5,
            "restaurant_id": null,
            "created_at": "2025-01-01T00:00:00.000Z",
            "updated_at": "2025-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(record.id, "m1");
        assert_eq!(record.get("name"), Some(&json!("Burger")));
        assert_eq!(record.get("restaurant_id"), Some(&Value::Null));
        assert!(!record.fields.contains_key("id"));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["price"], json!(9.5));
        assert!(back.get("fields").is_none());
    }

    #[test]
    fn test_into_model() {
        let record: Record = serde_json::from_value(json!({
            "id": "oi1",
            "quantity": 3,
            "order_id": "o1",
            "menu_item_id": null,
            "created_at": "2025-01-01T00:00:00.000Z",
            "updated_at": "2025-01-01T00:00:00.000Z"
        }))
        .unwrap();

        let item: crate::models::OrderItem = record.into_model().unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.order_id.as_deref(), Some("o1"));
        assert!(item.menu_item_id.is_none());
    }
}
