//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation entity (预订)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub date: DateTime<Utc>,
    pub time: DateTime<Utc>,
    pub number_of_guests: i64,
    pub table_status: String,
    pub customer_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub date: DateTime<Utc>,
    pub time: DateTime<Utc>,
    pub number_of_guests: i64,
    pub table_status: String,
    pub customer_id: Option<String>,
    pub restaurant_id: Option<String>,
}
