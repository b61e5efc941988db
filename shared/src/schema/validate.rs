//! Payload validation against a [`ResourceSchema`]

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Number, Value};

use super::{FieldKind, FieldSpec, ResourceSchema};

/// Field name -> message. Ordered so responses are stable.
pub type FieldErrors = BTreeMap<String, String>;

/// A validated, typed field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Date(DateTime<Utc>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// JSON form, as returned to clients
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Null => Value::Null,
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Number(n) => Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
            FieldValue::Integer(n) => Value::from(*n),
            FieldValue::Boolean(b) => Value::Bool(*b),
            FieldValue::Date(d) => Value::String(crate::util::format_timestamp(d)),
        }
    }
}

/// Values of every declared field, in schema order, ready for insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    /// Caller-chosen id; generated on insert when absent
    pub id: Option<String>,
    pub values: Vec<(&'static FieldSpec, FieldValue)>,
}

impl NewRecord {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, v)| v)
    }
}

impl ResourceSchema {
    /// Validate a request body
    ///
    /// Collects every failing field instead of stopping at the first one.
    /// Keys not declared by the schema are rejected, except an optional
    /// non-empty string `id`. The server-generated `created_at` and
    /// `updated_at` are rejected.
    pub fn validate(&self, body: &Value) -> Result<NewRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        let Some(object) = body.as_object() else {
            errors.insert("body".into(), "body must be a JSON object".into());
            return Err(errors);
        };

        let id = match object.get(ID_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(_) => {
                errors.insert(ID_FIELD.into(), "id must be a non-empty string".into());
                None
            }
        };

        for key in object.keys() {
            if key != ID_FIELD && self.field(key).is_none() {
                errors.insert(key.clone(), format!("{key} is not a field of {}", self.name));
            }
        }

        let mut values = Vec::with_capacity(self.fields.len());
        for spec in self.fields {
            match coerce(spec, object.get(spec.name)) {
                Ok(value) => values.push((spec, value)),
                Err(msg) => {
                    errors.insert(spec.name.to_string(), msg);
                }
            }
        }

        if errors.is_empty() {
            Ok(NewRecord { id, values })
        } else {
            Err(errors)
        }
    }
}

const ID_FIELD: &str = "id";

fn required_message(spec: &FieldSpec) -> String {
    format!("{} is a required field", spec.name)
}

fn type_message(spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Date => format!("{} must be a valid date", spec.name),
        FieldKind::Integer => format!("{} must be an integer", spec.name),
        kind => format!("{} must be a {}", spec.name, kind.type_name()),
    }
}

fn coerce(spec: &FieldSpec, raw: Option<&Value>) -> Result<FieldValue, String> {
    let value = match raw {
        None | Some(Value::Null) => None,
        // An unselected relation arrives as an empty string
        Some(Value::String(s)) if s.is_empty() && spec.kind.is_relation() => None,
        Some(v) => Some(v),
    };

    let Some(value) = value else {
        return if spec.required {
            Err(required_message(spec))
        } else {
            Ok(FieldValue::Null)
        };
    };

    match spec.kind {
        FieldKind::Text => match value {
            Value::String(s) if s.is_empty() && spec.required => Err(required_message(spec)),
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            _ => Err(type_message(spec)),
        },
        FieldKind::Relation { .. } => match value {
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            _ => Err(type_message(spec)),
        },
        FieldKind::Number => as_f64(value)
            .map(FieldValue::Number)
            .ok_or_else(|| type_message(spec)),
        FieldKind::Integer => as_i64(value)
            .map(FieldValue::Integer)
            .ok_or_else(|| type_message(spec)),
        FieldKind::Boolean => match value {
            Value::Bool(b) => Ok(FieldValue::Boolean(*b)),
            Value::String(s) if s == "true" => Ok(FieldValue::Boolean(true)),
            Value::String(s) if s == "false" => Ok(FieldValue::Boolean(false)),
            _ => Err(type_message(spec)),
        },
        FieldKind::Date => value
            .as_str()
            .and_then(parse_date)
            .map(FieldValue::Date)
            .ok_or_else(|| type_message(spec)),
    }
}

/// Numbers pass through, numeric strings are cast
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn as_i64(value: &Value) -> Option<i64> {
    if let Value::Number(n) = value
        && let Some(i) = n.as_i64()
    {
        return Some(i);
    }
    exact_i64(as_f64(value)?)
}

/// `n` as an `i64` when it is whole and in range
///
/// `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
pub fn exact_i64(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64).then_some(n as i64)
}

/// RFC 3339 timestamps, or a bare `YYYY-MM-DD` taken as midnight UTC
pub(crate) fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
