//! Resource schema descriptors
//!
//! A [`ResourceSchema`] declares everything the admin service knows about one
//! business entity: its endpoint name, its table, and the ordered list of
//! fields with kind, nullability and relation target. The same descriptor is
//! used by the server handler (validation + SQL) and by the client form
//! binding (initial state + inline validation).

pub mod catalog;
mod validate;

pub(crate) use validate::parse_date;

pub use validate::{FieldErrors, FieldValue, NewRecord, exact_i64};

/// Kind of a resource field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text (`TEXT`)
    Text,
    /// Floating point number (`REAL`)
    Number,
    /// Whole number (`INTEGER`)
    Integer,
    /// Boolean flag (`INTEGER` 0/1)
    Boolean,
    /// Point in time, RFC 3339 in UTC (`TEXT`)
    Date,
    /// Nullable reference to the `id` of another resource
    Relation {
        /// Endpoint name of the referenced resource (e.g. `restaurants`)
        target: &'static str,
    },
}

impl FieldKind {
    pub fn is_relation(&self) -> bool {
        matches!(self, FieldKind::Relation { .. })
    }

    /// Word used in type mismatch messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Relation { .. } => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
        }
    }
}

/// One declared field of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column / JSON key
    pub name: &'static str,
    /// Form label
    pub label: &'static str,
    pub kind: FieldKind,
    /// Rejects missing and null values (and empty strings for text)
    pub required: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    pub const fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Boolean)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    /// Relation fields are always nullable
    pub const fn relation(name: &'static str, label: &'static str, target: &'static str) -> Self {
        Self::new(name, label, FieldKind::Relation { target })
    }

    pub const fn required(mut self) -> Self {
        if !matches!(self.kind, FieldKind::Relation { .. }) {
            self.required = true;
        }
        self
    }
}

/// Declarative description of one resource
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Endpoint name, `/api/<name>` and list page `/<name>`
    pub name: &'static str,
    /// SQL table name
    pub table: &'static str,
    /// Plural display title ("Menu Items")
    pub title: &'static str,
    /// Declared fields in form order (id and timestamps excluded)
    pub fields: &'static [FieldSpec],
}

impl ResourceSchema {
    /// Look up a declared field
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Scalar (non-relation) fields in order
    pub fn scalar_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| !f.kind.is_relation())
    }

    /// Relation fields in order
    pub fn relation_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.kind.is_relation())
    }

    /// `/api/<name>`
    pub fn api_path(&self) -> String {
        format!("/api/{}", self.name)
    }

    /// `/<name>`, the list page a successful create navigates to
    pub fn list_path(&self) -> String {
        format!("/{}", self.name)
    }
}
