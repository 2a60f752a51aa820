use crate::registry::SqlType;
use serde::Serialize;

/// JSON Schema `type` keyword values emitted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
}

/// JSON Schema `format` keyword values emitted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Format {
    #[serde(rename = "date-time")]
    DateTime,
}

/// `{type, format?}` pair describing a plain column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeMapping {
    #[serde(rename = "type")]
    pub schema_type: JsonType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

impl TypeMapping {
    pub const fn of(schema_type: JsonType) -> Self {
        TypeMapping {
            schema_type,
            format: None,
        }
    }
}

impl Default for TypeMapping {
    fn default() -> Self {
        TypeMapping::of(JsonType::String)
    }
}

/// Map a column's SQL type to its JSON Schema type.
///
/// Total: unrecognised types fall back to a bare `string`.
pub fn map_sql_type(sql_type: &SqlType) -> TypeMapping {
    let mut mapping = TypeMapping::default();
    match sql_type {
        SqlType::Datetime => mapping.format = Some(Format::DateTime),
        SqlType::Integer => mapping.schema_type = JsonType::Integer,
        SqlType::Float => mapping.schema_type = JsonType::Number,
        SqlType::Boolean => mapping.schema_type = JsonType::Boolean,
        SqlType::Jsonb => mapping.schema_type = JsonType::Object,
        SqlType::Other(tag) => {
            tracing::debug!(sql_type = %tag, "unmapped SQL type, documenting as string");
        }
    }
    mapping
}
