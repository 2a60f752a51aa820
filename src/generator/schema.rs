use super::context::BuildContext;
use super::type_map::{map_sql_type, JsonType, TypeMapping};
use crate::registry::{ColumnDescriptor, ModelDescriptor};
use indexmap::IndexMap;
use serde::Serialize;

/// JSON pointer prefix of component schemas.
pub const SCHEMAS_PATH: &str = "#/components/schemas";

/// Reserved name of the shared ID reference schema.
pub const ID_SCHEMA_NAME: &str = "ID";

/// Component schemas keyed by model name, in build order.
pub type Schemas = IndexMap<String, Schema>;

/// An entry under `components.schemas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Schema {
    Identifier(IdSchema),
    Object(ObjectSchema),
}

/// The built-in schema every ID reference points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdSchema {
    #[serde(rename = "type")]
    pub schema_type: JsonType,
    pub description: &'static str,
    pub pattern: &'static str,
    pub read_only: bool,
}

impl IdSchema {
    pub const fn new() -> Self {
        IdSchema {
            schema_type: JsonType::String,
            description: "ID of the resource",
            pattern: r"^\d+$",
            read_only: true,
        }
    }
}

impl Default for IdSchema {
    fn default() -> Self {
        IdSchema::new()
    }
}

/// Closed object schema derived from a model's columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    #[serde(rename = "type")]
    pub schema_type: JsonType,
    pub properties: IndexMap<String, PropertySchema>,
    pub additional_properties: bool,
}

/// Schema of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertySchema {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Typed(TypeMapping),
}

impl PropertySchema {
    /// `{"$ref": "#/components/schemas/ID"}`
    pub fn id_reference() -> Self {
        PropertySchema::Reference {
            reference: format!("{SCHEMAS_PATH}/{ID_SCHEMA_NAME}"),
        }
    }
}

/// Schema of one column of `model`.
///
/// The primary key and `_id`-suffixed columns reference the ID schema
/// regardless of their SQL type.
pub fn property_schema(model: &ModelDescriptor, column: &ColumnDescriptor) -> PropertySchema {
    if model.is_id_reference(column) {
        PropertySchema::id_reference()
    } else {
        PropertySchema::Typed(map_sql_type(&column.sql_type))
    }
}

/// Object schema with one property per column, in column order.
pub fn object_schema(model: &ModelDescriptor) -> ObjectSchema {
    let properties = model
        .columns
        .iter()
        .map(|column| (column.name.clone(), property_schema(model, column)))
        .collect();

    ObjectSchema {
        schema_type: JsonType::Object,
        properties,
        additional_properties: false,
    }
}

/// Add the schema of `model` to the context unless one with the same name
/// is already present. Returns whether a schema was inserted.
pub fn build_schema(ctx: &mut BuildContext, model: &ModelDescriptor) -> bool {
    if ctx.has_schema(&model.name) {
        if model.name == ID_SCHEMA_NAME {
            tracing::warn!(
                model = %model.name,
                "model name collides with the reserved ID schema, skipping"
            );
        }
        return false;
    }

    let schema = object_schema(model);
    tracing::debug!(
        model = %model.name,
        properties = schema.properties.len(),
        "built schema"
    );
    ctx.insert_schema(model.name.clone(), Schema::Object(schema));
    true
}
