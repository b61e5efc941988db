//! Generic create-form binding
//!
//! A [`CreateForm`] holds the editable values of one new record of any
//! catalog resource. It validates with the same [`ResourceSchema`] rules as
//! the server, loads the dropdown options of relation fields and submits
//! through a [`ResourceApi`].
//!
//! ```text
//! Idle ──submit (valid)──▶ Submitting ──ok──▶ Navigate("/<resource>")
//!   ▲                          │
//!   └────────error (kept)──────┘
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde_json::{Map, Value};
use shared::models::Record;
use shared::schema::exact_i64;
use shared::util::today_utc;
use shared::{FieldErrors, FieldKind, FieldSpec, FieldValue, ResourceSchema, catalog};

use crate::{ClientError, ClientResult, ResourceApi};

/// Submission state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
}

/// Result of [`CreateForm::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record created; go to the resource's list page
    Navigate(String),
    /// Client-side validation failed, see [`CreateForm::errors`]
    Invalid,
    /// The create call failed, see [`CreateForm::submit_error`]
    Failed,
    /// A submission is already in flight
    Busy,
}

/// One entry of a relation dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Referenced record id
    pub value: String,
    pub label: String,
}

impl From<&Record> for SelectOption {
    fn from(record: &Record) -> Self {
        Self {
            value: record.id.clone(),
            label: record.id.clone(),
        }
    }
}

/// Options of one relation dropdown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RelationOptions {
    #[default]
    NotLoaded,
    Loaded(Vec<SelectOption>),
    /// Fetch failed; the dropdown stays empty
    Failed(String),
}

impl RelationOptions {
    pub fn options(&self) -> &[SelectOption] {
        match self {
            RelationOptions::Loaded(options) => options,
            _ => &[],
        }
    }
}

/// Widget rendering one field
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    TextInput,
    NumberInput,
    Switch,
    DatePicker,
    Select {
        placeholder: String,
        options: RelationOptions,
    },
}

/// View model of one form control
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    /// Current value, JSON encoded as it would be submitted
    pub value: Value,
    /// Inline error message
    pub error: Option<String>,
}

/// Create form for one resource
#[derive(Debug, Clone)]
pub struct CreateForm {
    schema: &'static ResourceSchema,
    values: BTreeMap<&'static str, FieldValue>,
    options: BTreeMap<&'static str, RelationOptions>,
    errors: FieldErrors,
    submit_error: Option<String>,
    status: FormStatus,
}

impl CreateForm {
    pub fn new(schema: &'static ResourceSchema) -> Self {
        Self {
            schema,
            values: initial_values(schema),
            options: schema
                .relation_fields()
                .map(|f| (f.name, RelationOptions::NotLoaded))
                .collect(),
            errors: FieldErrors::new(),
            submit_error: None,
            status: FormStatus::Idle,
        }
    }

    pub fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Inline field errors from the last submit attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error of the last failed create call, shown above the form
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn relation_options(&self, field: &str) -> Option<&RelationOptions> {
        self.options.get(field)
    }

    // ========== Setters ==========

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) -> ClientResult<()> {
        let spec = self.field_of(field, |k| matches!(k, FieldKind::Text))?;
        self.set(spec, FieldValue::Text(value.into()));
        Ok(())
    }

    /// Raw text of a number input
    ///
    /// Input that does not parse as a number becomes 0.
    pub fn set_number_input(&mut self, field: &str, raw: &str) -> ClientResult<()> {
        let spec = self.field_of(field, |k| {
            matches!(k, FieldKind::Number | FieldKind::Integer)
        })?;
        let n = raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0);
        let value = match (spec.kind, exact_i64(n)) {
            (FieldKind::Integer, Some(i)) => FieldValue::Integer(i),
            // Fractional or out of range: validation reports "must be an integer"
            _ => FieldValue::Number(n),
        };
        self.set(spec, value);
        Ok(())
    }

    pub fn set_bool(&mut self, field: &str, value: bool) -> ClientResult<()> {
        let spec = self.field_of(field, |k| matches!(k, FieldKind::Boolean))?;
        self.set(spec, FieldValue::Boolean(value));
        Ok(())
    }

    pub fn set_date(&mut self, field: &str, value: DateTime<Utc>) -> ClientResult<()> {
        let spec = self.field_of(field, |k| matches!(k, FieldKind::Date))?;
        self.set(spec, FieldValue::Date(value));
        Ok(())
    }

    /// Pick a related record, or clear the selection with `None`
    pub fn select_relation(&mut self, field: &str, id: Option<String>) -> ClientResult<()> {
        let spec = self.field_of(field, FieldKind::is_relation)?;
        self.set(spec, id.map_or(FieldValue::Null, FieldValue::Text));
        Ok(())
    }

    fn field_of(
        &self,
        field: &str,
        accepts: impl Fn(&FieldKind) -> bool,
    ) -> ClientResult<&'static FieldSpec> {
        let spec = self.schema.field(field).ok_or_else(|| {
            ClientError::InvalidField(format!("{} has no field {field}", self.schema.name))
        })?;
        if !accepts(&spec.kind) {
            return Err(ClientError::InvalidField(format!(
                "{field} is a {} field",
                spec.kind.type_name()
            )));
        }
        Ok(spec)
    }

    fn set(&mut self, spec: &'static FieldSpec, value: FieldValue) {
        self.values.insert(spec.name, value);
        self.errors.remove(spec.name);
    }

    // ========== View model ==========

    /// Controls in field order: scalar inputs first, then relation selects
    pub fn controls(&self) -> Vec<Control> {
        self.schema
            .scalar_fields()
            .chain(self.schema.relation_fields())
            .map(|spec| Control {
                name: spec.name,
                label: spec.label,
                widget: self.widget(spec),
                value: self
                    .values
                    .get(spec.name)
                    .map(FieldValue::to_json)
                    .unwrap_or(Value::Null),
                error: self.errors.get(spec.name).cloned(),
            })
            .collect()
    }

    fn widget(&self, spec: &FieldSpec) -> Widget {
        match spec.kind {
            FieldKind::Text => Widget::TextInput,
            FieldKind::Number | FieldKind::Integer => Widget::NumberInput,
            FieldKind::Boolean => Widget::Switch,
            FieldKind::Date => Widget::DatePicker,
            FieldKind::Relation { target } => Widget::Select {
                placeholder: format!(
                    "Select {}",
                    catalog::find(target).map_or(target, |r| r.title)
                ),
                options: self.options.get(spec.name).cloned().unwrap_or_default(),
            },
        }
    }

    /// Body that [`submit`](Self::submit) would send
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_json()))
            .collect();
        Value::Object(map)
    }

    // ========== Remote ==========

    /// Fetch the dropdown options of every relation field
    ///
    /// Runs the list requests concurrently. A failed request leaves its
    /// dropdown empty and marked as failed; the form stays usable.
    pub async fn load_relation_options(&mut self, api: &dyn ResourceApi) {
        let targets: Vec<(&'static str, &'static ResourceSchema)> = self
            .schema
            .relation_fields()
            .filter_map(|spec| match spec.kind {
                FieldKind::Relation { target } => catalog::find(target).map(|t| (spec.name, t)),
                _ => None,
            })
            .collect();

        let results = join_all(targets.iter().map(|(_, target)| api.list(target))).await;

        for ((field, target), result) in targets.into_iter().zip(results) {
            let options = match result {
                Ok(records) => {
                    RelationOptions::Loaded(records.iter().map(SelectOption::from).collect())
                }
                Err(e) => {
                    tracing::warn!(
                        resource = self.schema.name,
                        field,
                        target = target.name,
                        error = %e,
                        "Failed to load relation options"
                    );
                    RelationOptions::Failed(e.to_string())
                }
            };
            self.options.insert(field, options);
        }
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Idle && self.schema.validate(&self.to_json()).is_ok()
    }

    /// Validate and create the record
    pub async fn submit(&mut self, api: &dyn ResourceApi) -> SubmitOutcome {
        if self.status != FormStatus::Idle {
            return SubmitOutcome::Busy;
        }

        let body = self.to_json();
        if let Err(errors) = self.schema.validate(&body) {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.errors.clear();
        self.submit_error = None;

        let schema = self.schema;
        let result = {
            let _submitting = SubmitGuard::enter(&mut self.status);
            api.create(schema, &body).await
        };

        match result {
            Ok(record) => {
                tracing::info!(resource = self.schema.name, id = %record.id, "Record created");
                self.reset();
                SubmitOutcome::Navigate(self.schema.list_path())
            }
            Err(e) => {
                if let Some(errors) = e.field_errors() {
                    self.errors = errors;
                }
                self.submit_error = Some(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Back to initial values; loaded options are kept
    pub fn reset(&mut self) {
        self.status = FormStatus::Idle;
        self.values = initial_values(self.schema);
        self.errors.clear();
        self.submit_error = None;
    }
}

/// Holds the form in `Submitting` and puts it back to `Idle` on drop,
/// including when the submit future is cancelled mid-request
struct SubmitGuard<'a>(&'a mut FormStatus);

impl<'a> SubmitGuard<'a> {
    fn enter(status: &'a mut FormStatus) -> Self {
        *status = FormStatus::Submitting;
        Self(status)
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        *self.0 = FormStatus::Idle;
    }
}

fn initial_values(schema: &ResourceSchema) -> BTreeMap<&'static str, FieldValue> {
    schema
        .fields
        .iter()
        .map(|spec| {
            let value = match spec.kind {
                FieldKind::Text => FieldValue::Text(String::new()),
                FieldKind::Number => FieldValue::Number(0.0),
                FieldKind::Integer => FieldValue::Integer(0),
                FieldKind::Boolean => FieldValue::Boolean(false),
                FieldKind::Date => FieldValue::Date(today_utc()),
                FieldKind::Relation { .. } => FieldValue::Null,
            };
            (spec.name, value)
        })
        .collect()
}
