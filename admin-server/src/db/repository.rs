//! Resource Repository
//!
//! One repository serves every resource: the SQL is built from the
//! resource's [`ResourceSchema`]. Table and column names only ever come from
//! the static catalog, values are always bound.

use serde_json::{Map, Value};
use shared::models::Record;
use shared::util::{format_timestamp, new_record_id, now_utc, parse_timestamp};
use shared::{AppError, FieldKind, FieldValue, NewRecord, ResourceSchema};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepoError::ForeignKey(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => {
                tracing::debug!(error = %msg, "Rejected duplicate id");
                AppError::already_exists("A record with this id already exists")
            }
            RepoError::ForeignKey(msg) => {
                tracing::debug!(error = %msg, "Rejected dangling reference");
                AppError::reference_not_found("Referenced record does not exist")
            }
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::database("Database error")
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Clone)]
pub struct ResourceRepository {
    pool: SqlitePool,
}

impl ResourceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every row of the resource, in insertion order
    pub async fn find_all(&self, schema: &ResourceSchema) -> RepoResult<Vec<Record>> {
        let sql = format!(
            "SELECT {} FROM \"{}\" ORDER BY rowid",
            select_columns(schema),
            schema.table
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| decode_record(schema, row)).collect()
    }

    /// Insert one validated record
    ///
    /// A single `INSERT ... RETURNING` statement, so the row is either
    /// written whole or not at all. The id is generated unless the caller
    /// supplied one.
    pub async fn create(&self, schema: &ResourceSchema, data: NewRecord) -> RepoResult<Record> {
        let now = format_timestamp(&now_utc());
        let id = data.id.unwrap_or_else(new_record_id);

        let mut columns = vec!["\"id\"".to_string()];
        columns.extend(data.values.iter().map(|(spec, _)| format!("\"{}\"", spec.name)));
        columns.push("\"created_at\"".into());
        columns.push("\"updated_at\"".into());
        let placeholders = vec!["?"; columns.len()].join(", ");

        let sql = format!(
            "INSERT INTO \"{}\" ({}) VALUES ({}) RETURNING {}",
            schema.table,
            columns.join(", "),
            placeholders,
            select_columns(schema)
        );

        let mut query = sqlx::query(&sql).bind(id);
        for (_, value) in data.values {
            query = match value {
                FieldValue::Null => query.bind(None::<String>),
                FieldValue::Text(s) => query.bind(s),
                FieldValue::Number(n) => query.bind(n),
                FieldValue::Integer(n) => query.bind(n),
                FieldValue::Boolean(b) => query.bind(b),
                FieldValue::Date(d) => query.bind(format_timestamp(&d)),
            };
        }
        let row = query
            .bind(now.clone())
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        decode_record(schema, &row)
    }
}

fn select_columns(schema: &ResourceSchema) -> String {
    let mut columns = vec!["\"id\"".to_string()];
    columns.extend(schema.fields.iter().map(|f| format!("\"{}\"", f.name)));
    columns.push("\"created_at\"".into());
    columns.push("\"updated_at\"".into());
    columns.join(", ")
}

fn decode_record(schema: &ResourceSchema, row: &SqliteRow) -> RepoResult<Record> {
    let mut fields = Map::new();
    for spec in schema.fields {
        let value = match spec.kind {
            FieldKind::Text | FieldKind::Date | FieldKind::Relation { .. } => row
                .try_get::<Option<String>, _>(spec.name)?
                .map(Value::String),
            FieldKind::Number => row
                .try_get::<Option<f64>, _>(spec.name)?
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
            FieldKind::Integer => row.try_get::<Option<i64>, _>(spec.name)?.map(Value::from),
            FieldKind::Boolean => row.try_get::<Option<bool>, _>(spec.name)?.map(Value::Bool),
        };
        fields.insert(spec.name.to_string(), value.unwrap_or(Value::Null));
    }

    Ok(Record {
        id: row.try_get("id")?,
        fields,
        created_at: decode_timestamp(row, "created_at")?,
        updated_at: decode_timestamp(row, "updated_at")?,
    })
}

fn decode_timestamp(row: &SqliteRow, column: &str) -> RepoResult<chrono::DateTime<chrono::Utc>> {
    let raw: String = row.try_get(column)?;
    parse_timestamp(&raw)
        .ok_or_else(|| RepoError::Database(format!("Invalid timestamp in {column}: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use serde_json::json;
    use shared::catalog::{MENU_ITEMS, ORDER_ITEMS, RESERVATIONS, RESTAURANTS};

    async fn test_repo() -> ResourceRepository {
        DbService::in_memory().await.unwrap().repository()
    }

    async fn seed_restaurant(repo: &ResourceRepository) -> Record {
        let data = RESTAURANTS.validate(&json!({"name": "Bistro"})).unwrap();
        repo.create(&RESTAURANTS, data).await.unwrap()
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = test_repo().await;
        let rows = repo.find_all(&MENU_ITEMS).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_generated_columns() {
        let repo = test_repo().await;
        let restaurant = seed_restaurant(&repo).await;

        let data = MENU_ITEMS
            .validate(&json!({
                "name": "Burger",
                "description": "Beef",
                "price": 9.5,
                "image_url": "u",
                "restaurant_id": restaurant.id.clone()
            }))
            .unwrap();
        let item = repo.create(&MENU_ITEMS, data).await.unwrap();

        assert!(uuid::Uuid::parse_str(&item.id).is_ok());
        assert_eq!(item.get("name"), Some(&json!("Burger")));
        assert_eq!(item.get("price"), Some(&json!(9.5)));
        assert_eq!(item.get("restaurant_id"), Some(&json!(restaurant.id)));
        assert_eq!(item.created_at, item.updated_at);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = test_repo().await;
        for quantity in [3, 1, 2] {
            let data = ORDER_ITEMS.validate(&json!({"quantity": quantity})).unwrap();
            repo.create(&ORDER_ITEMS, data).await.unwrap();
        }

        let rows = repo.find_all(&ORDER_ITEMS).await.unwrap();
        let quantities: Vec<_> = rows.iter().map(|r| r.get("quantity").cloned()).collect();
        assert_eq!(
            quantities,
            vec![Some(json!(3)), Some(json!(1)), Some(json!(2))]
        );
        assert_eq!(rows[0].get("order_id"), Some(&Value::Null));
    }

    #[tokio::test]
    async fn test_dangling_reference_is_rejected() {
        let repo = test_repo().await;
        let data = MENU_ITEMS
            .validate(&json!({
                "name": "Burger",
                "description": "Beef",
                "price": 9.5,
                "restaurant_id": "missing"
            }))
            .unwrap();

        let err = repo.create(&MENU_ITEMS, data).await.unwrap_err();
        assert!(matches!(err, RepoError::ForeignKey(_)));
        assert!(repo.find_all(&MENU_ITEMS).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_supplied_id_is_kept() {
        let repo = test_repo().await;
        let data = RESTAURANTS
            .validate(&json!({"id": "r1", "name": "Bistro"}))
            .unwrap();
        let restaurant = repo.create(&RESTAURANTS, data).await.unwrap();
        assert_eq!(restaurant.id, "r1");

        let again = RESTAURANTS
            .validate(&json!({"id": "r1", "name": "Other"}))
            .unwrap();
        let err = repo.create(&RESTAURANTS, again).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(repo.find_all(&RESTAURANTS).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dates_are_stored_normalized() {
        let repo = test_repo().await;
        let data = RESERVATIONS
            .validate(&json!({
                "date": "2025-03-01",
                "time": "2025-03-01T19:30:00+01:00",
                "number_of_guests": 4,
                "table_status": "booked"
            }))
            .unwrap();
        let reservation = repo.create(&RESERVATIONS, data).await.unwrap();

        assert_eq!(reservation.get("date"), Some(&json!("2025-03-01T00:00:00.000Z")));
        assert_eq!(reservation.get("time"), Some(&json!("2025-03-01T18:30:00.000Z")));
    }
}
