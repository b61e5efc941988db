//! Data models
//!
//! Typed views of the rows served by `/api/<resource>`. Every row is also
//! available untyped as a [`Record`]. IDs are UUID strings, timestamps are
//! UTC.

pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod record;
pub mod reservation;
pub mod restaurant;
pub mod user;

// Re-exports
pub use menu_item::*;
pub use order::*;
pub use order_item::*;
pub use record::*;
pub use reservation::*;
pub use restaurant::*;
pub use user::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::catalog::{MENU_ITEMS, ORDERS, RESERVATIONS, RESTAURANTS, USERS};
    use crate::util::today_utc;

    fn to_json<T: serde::Serialize>(payload: &T) -> serde_json::Value {
        serde_json::to_value(payload).unwrap()
    }

    #[test]
    fn test_create_payloads_match_catalog() {
        let user = UserCreate {
            email: "a@b.c".into(),
            first_name: None,
            last_name: Some("Doe".into()),
        };
        assert!(USERS.validate(&to_json(&user)).is_ok());

        let restaurant = RestaurantCreate {
            name: "Bistro".into(),
            description: None,
            address: None,
            user_id: Some("u1".into()),
        };
        assert!(RESTAURANTS.validate(&to_json(&restaurant)).is_ok());

        let item = MenuItemCreate {
            name: "Burger".into(),
            description: "Beef".into(),
            price: 9.5,
            image_url: None,
            restaurant_id: None,
        };
        assert!(MENU_ITEMS.validate(&to_json(&item)).is_ok());

        let order = OrderCreate {
            status: "pending".into(),
            total_price: 19.0,
            customer_id: None,
            restaurant_id: None,
        };
        assert!(ORDERS.validate(&to_json(&order)).is_ok());

        let reservation = ReservationCreate {
            date: today_utc(),
            time: today_utc(),
            number_of_guests: 2,
            table_status: "booked".into(),
            customer_id: None,
            restaurant_id: None,
        };
        assert!(RESERVATIONS.validate(&to_json(&reservation)).is_ok());
    }
}
