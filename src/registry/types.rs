use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix that marks a column as a reference to another resource.
///
/// A column named `host_id` is documented as an ID reference whatever its
/// declared SQL type, exactly like the primary key column.
pub const FOREIGN_KEY_SUFFIX: &str = "_id";

/// Opaque identifier of a backing model, resolved through a
/// [`ModelResolver`](super::ModelResolver).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::new(name)
    }
}

/// One API resource group.
///
/// `verbs` keeps declaration order; each verb becomes an empty operation
/// stub under `/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub backing_model: Option<TypeRef>,
    pub verbs: Vec<String>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Collection {
            name: name.into(),
            backing_model: None,
            verbs: Vec::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<TypeRef>) -> Self {
        self.backing_model = Some(model.into());
        self
    }

    pub fn with_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verbs = verbs.into_iter().map(Into::into).collect();
        self
    }

    /// Path key of this collection in the document (`"/" + name`).
    pub fn path(&self) -> String {
        format!("/{}", self.name)
    }
}

/// Semantic SQL type of a column.
///
/// Closed set of the types the document distinguishes. Anything else is kept
/// verbatim in [`SqlType::Other`] and documented as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    Datetime,
    Integer,
    Float,
    Boolean,
    Jsonb,
    Other(String),
}

impl SqlType {
    /// Match a raw type tag, ignoring surrounding whitespace and ASCII case.
    /// Unknown tags keep their original spelling.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "datetime" => SqlType::Datetime,
            "integer" => SqlType::Integer,
            "float" => SqlType::Float,
            "boolean" => SqlType::Boolean,
            "jsonb" => SqlType::Jsonb,
            _ => SqlType::Other(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SqlType::Datetime => "datetime",
            SqlType::Integer => "integer",
            SqlType::Float => "float",
            SqlType::Boolean => "boolean",
            SqlType::Jsonb => "jsonb",
            SqlType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SqlType {
    fn from(tag: &str) -> Self {
        SqlType::parse(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub sql_type: SqlType,
    pub is_primary_key: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, sql_type: impl Into<SqlType>) -> Self {
        ColumnDescriptor {
            name: name.into(),
            sql_type: sql_type.into(),
            is_primary_key: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Whether the column name follows the `_id` reference convention.
    pub fn is_foreign_key(&self) -> bool {
        self.name.ends_with(FOREIGN_KEY_SUFFIX)
    }
}

/// Resolved column metadata of a backing model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub name: String,
    pub primary_key_column_name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl ModelDescriptor {
    pub fn new(
        name: impl Into<String>,
        primary_key_column_name: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
    ) -> Self {
        ModelDescriptor {
            name: name.into(),
            primary_key_column_name: primary_key_column_name.into(),
            columns,
        }
    }

    /// Whether the column is documented as an ID reference rather than by its
    /// SQL type: the primary key, or any `_id`-suffixed column.
    pub fn is_id_reference(&self, column: &ColumnDescriptor) -> bool {
        column.name == self.primary_key_column_name || column.is_foreign_key()
    }
}
