//! Order Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order item entity (订单项)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order_id: Option<String>,
    pub menu_item_id: Option<String>,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub order_id: Option<String>,
    pub menu_item_id: Option<String>,
    pub quantity: i64,
}
