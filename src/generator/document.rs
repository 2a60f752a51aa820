use super::context::BuildContext;
use super::parameters::{build_parameters, Parameters};
use super::paths::build_paths;
use super::schema::Schemas;
use crate::error::Result;
use crate::registry::{Collection, ModelResolver};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Version literal of the `openapi` field.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Empty operation definition. Serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Operation {}

/// Operations of one path, keyed by HTTP verb.
pub type PathItem = IndexMap<String, Operation>;

/// Path entries keyed by `"/" + collection name`.
pub type Paths = IndexMap<String, PathItem>;

/// Spelling of the top-level security key.
///
/// Earlier generator releases wrote `secuirty`. [`SecurityKey::Legacy`]
/// keeps that spelling for consumers that still read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecurityKey {
    #[default]
    Standard,
    Legacy,
}

impl SecurityKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityKey::Standard => "security",
            SecurityKey::Legacy => "secuirty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub openapi_version: String,
    pub security_key: SecurityKey,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            openapi_version: OPENAPI_VERSION.to_string(),
            security_key: SecurityKey::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Components {
    pub parameters: Parameters,
    pub schemas: Schemas,
}

/// The API description document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub openapi: String,
    pub info: Map<String, Value>,
    pub security_key: SecurityKey,
    pub security: Vec<Value>,
    pub paths: Paths,
    pub servers: Vec<Value>,
    pub components: Components,
}

impl Document {
    /// Document with every section present and empty.
    pub fn skeleton(options: &DocumentOptions) -> Self {
        Document {
            openapi: options.openapi_version.clone(),
            info: Map::new(),
            security_key: options.security_key,
            security: Vec::new(),
            paths: Paths::new(),
            servers: Vec::new(),
            components: Components::default(),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("openapi", &self.openapi)?;
        map.serialize_entry("info", &self.info)?;
        map.serialize_entry(self.security_key.as_str(), &self.security)?;
        map.serialize_entry("paths", &self.paths)?;
        map.serialize_entry("servers", &self.servers)?;
        map.serialize_entry("components", &self.components)?;
        map.end()
    }
}

/// Build the document for `collections` with default options.
pub fn generate<R>(collections: &[Collection], resolver: &R) -> Result<Document>
where
    R: ModelResolver + ?Sized,
{
    generate_with_options(collections, resolver, &DocumentOptions::default())
}

/// Build the document for `collections`.
///
/// Single pass over the registry with a fresh [`BuildContext`]. Any
/// resolution failure aborts the build and no document is returned.
pub fn generate_with_options<R>(
    collections: &[Collection],
    resolver: &R,
    options: &DocumentOptions,
) -> Result<Document>
where
    R: ModelResolver + ?Sized,
{
    let mut ctx = BuildContext::new(options);
    let paths = build_paths(&mut ctx, collections, resolver)?;
    let parameters = build_parameters(&ctx);
    let document = ctx.into_document(paths, parameters);
    tracing::info!(
        paths = document.paths.len(),
        schemas = document.components.schemas.len(),
        "generated API document"
    );
    Ok(document)
}
