use super::document::{Document, DocumentOptions, Paths};
use super::parameters::Parameters;
use super::schema::{IdSchema, Schema, Schemas, ID_SCHEMA_NAME};
use indexmap::IndexMap;
use serde_json::Value;

/// State of a single generator run.
///
/// Holds the document skeleton and the schema and parameter tables the
/// builders fill in. Created per run and consumed by
/// [`BuildContext::into_document`]; never shared between runs.
#[derive(Debug, Clone)]
pub struct BuildContext {
    document: Document,
    schemas: Schemas,
    parameters: IndexMap<String, Value>,
}

impl BuildContext {
    /// Fresh context whose schema table holds only the ID schema.
    pub fn new(options: &DocumentOptions) -> Self {
        let mut schemas = Schemas::new();
        schemas.insert(
            ID_SCHEMA_NAME.to_string(),
            Schema::Identifier(IdSchema::new()),
        );
        BuildContext {
            document: Document::skeleton(options),
            schemas,
            parameters: IndexMap::new(),
        }
    }

    pub fn schemas(&self) -> &Schemas {
        &self.schemas
    }

    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub(crate) fn insert_schema(&mut self, name: String, schema: Schema) {
        self.schemas.insert(name, schema);
    }

    /// Parameters registered so far, in registration order.
    pub fn parameters(&self) -> &IndexMap<String, Value> {
        &self.parameters
    }

    /// Register a named parameter definition, replacing any previous one.
    pub fn insert_parameter(&mut self, name: impl Into<String>, definition: Value) -> Option<Value> {
        self.parameters.insert(name.into(), definition)
    }

    /// Merge the builders' output into the skeleton.
    pub fn into_document(self, paths: Paths, parameters: Parameters) -> Document {
        let mut document = self.document;
        document.paths = paths;
        document.components.schemas = self.schemas;
        document.components.parameters = parameters;
        document
    }
}
