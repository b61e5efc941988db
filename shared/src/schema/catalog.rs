//! Resource catalog (用户、餐厅、菜品、订单、订单项、预订)

use super::{FieldSpec, ResourceSchema};

pub static USERS: ResourceSchema = ResourceSchema {
    name: "users",
    table: "users",
    title: "Users",
    fields: &[
        FieldSpec::text("email", "Email").required(),
        FieldSpec::text("first_name", "First Name"),
        FieldSpec::text("last_name", "Last Name"),
    ],
};

pub static RESTAURANTS: ResourceSchema = ResourceSchema {
    name: "restaurants",
    table: "restaurants",
    title: "Restaurants",
    fields: &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("description", "Description"),
        FieldSpec::text("address", "Address"),
        FieldSpec::relation("user_id", "User", "users"),
    ],
};

pub static MENU_ITEMS: ResourceSchema = ResourceSchema {
    name: "menu-items",
    table: "menu_items",
    title: "Menu Items",
    fields: &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("description", "Description").required(),
        FieldSpec::number("price", "Price").required(),
        FieldSpec::text("image_url", "Image URL"),
        FieldSpec::relation("restaurant_id", "Restaurant", "restaurants"),
    ],
};

pub static ORDERS: ResourceSchema = ResourceSchema {
    name: "orders",
    table: "orders",
    title: "Orders",
    fields: &[
        FieldSpec::text("status", "Status").required(),
        FieldSpec::number("total_price", "Total Price").required(),
        FieldSpec::relation("customer_id", "Customer", "users"),
        FieldSpec::relation("restaurant_id", "Restaurant", "restaurants"),
    ],
};

pub static ORDER_ITEMS: ResourceSchema = ResourceSchema {
    name: "order-items",
    table: "order_items",
    title: "Order Items",
    fields: &[
        FieldSpec::integer("quantity", "Quantity").required(),
        FieldSpec::relation("order_id", "Order", "orders"),
        FieldSpec::relation("menu_item_id", "Menu Item", "menu-items"),
    ],
};

pub static RESERVATIONS: ResourceSchema = ResourceSchema {
    name: "reservations",
    table: "reservations",
    title: "Reservations",
    fields: &[
        FieldSpec::date("date", "Date").required(),
        FieldSpec::date("time", "Time").required(),
        FieldSpec::integer("number_of_guests", "Number of Guests").required(),
        FieldSpec::text("table_status", "Table Status").required(),
        FieldSpec::relation("customer_id", "Customer", "users"),
        FieldSpec::relation("restaurant_id", "Restaurant", "restaurants"),
    ],
};

/// Every resource, referenced ones first
pub static RESOURCES: [&ResourceSchema; 6] = [
    &USERS,
    &RESTAURANTS,
    &MENU_ITEMS,
    &ORDERS,
    &ORDER_ITEMS,
    &RESERVATIONS,
];

/// Look up a resource by endpoint name
pub fn find(name: &str) -> Option<&'static ResourceSchema> {
    RESOURCES.iter().copied().find(|r| r.name == name)
}

/// Look up a resource by SQL table name
pub fn find_by_table(table: &str) -> Option<&'static ResourceSchema> {
    RESOURCES.iter().copied().find(|r| r.table == table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    #[test]
    fn test_find() {
        assert_eq!(find("menu-items").map(|r| r.table), Some("menu_items"));
        assert!(find("menu_items").is_none());
        assert!(find("payments").is_none());
        assert_eq!(find_by_table("order_items").map(|r| r.name), Some("order-items"));
    }

    #[test]
    fn test_relation_targets_exist() {
        for resource in RESOURCES {
            for field in resource.relation_fields() {
                let FieldKind::Relation { target } = field.kind else {
                    unreachable!();
                };
                assert!(
                    find(target).is_some(),
                    "{}.{} points at unknown resource {target}",
                    resource.name,
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_relations_are_never_required() {
        for resource in RESOURCES {
            assert!(resource.relation_fields().all(|f| !f.required));
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(ORDER_ITEMS.api_path(), "/api/order-items");
        assert_eq!(RESERVATIONS.list_path(), "/reservations");
    }
}
