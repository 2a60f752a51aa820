use super::resolver::ModelCatalog;
use super::types::{Collection, ColumnDescriptor, ModelDescriptor, SqlType, TypeRef};
use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Primary key assumed when a model neither names nor flags one.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Collections in declaration order plus the models they may reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pub collections: Vec<Collection>,
    pub models: ModelCatalog,
}

#[derive(Debug, Default, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    collections: IndexMap<String, Option<CollectionEntry>>,
    #[serde(default)]
    models: IndexMap<String, ModelEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct CollectionEntry {
    #[serde(default, alias = "model")]
    klass: Option<String>,
    #[serde(default)]
    verbs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    #[serde(default)]
    primary_key: Option<String>,
    #[serde(default)]
    columns: Vec<ColumnEntry>,
}

#[derive(Debug, Deserialize)]
struct ColumnEntry {
    name: String,
    #[serde(rename = "type")]
    sql_type: String,
    #[serde(default)]
    primary_key: bool,
}

impl ModelEntry {
    fn into_descriptor(self, name: String) -> anyhow::Result<ModelDescriptor> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            anyhow::ensure!(
                seen.insert(column.name.as_str()),
                "duplicate column `{}`",
                column.name
            );
        }

        let mut flagged = self.columns.iter().filter(|c| c.primary_key).map(|c| c.name.as_str());
        let first_flagged = flagged.next();
        if let (Some(first), Some(second)) = (first_flagged, flagged.next()) {
            anyhow::bail!("columns `{first}` and `{second}` are both flagged as primary key");
        }

        let primary_key = match (self.primary_key, first_flagged) {
            (Some(explicit), flagged) => {
                anyhow::ensure!(
                    seen.contains(explicit.as_str()),
                    "primary key `{explicit}` names no column"
                );
                if let Some(flagged) = flagged {
                    anyhow::ensure!(
                        flagged == explicit,
                        "primary key `{explicit}` conflicts with flagged column `{flagged}`"
                    );
                }
                explicit
            }
            (None, Some(flagged)) => flagged.to_string(),
            (None, None) => DEFAULT_PRIMARY_KEY.to_string(),
        };

        let columns = self
            .columns
            .into_iter()
            .map(|c| ColumnDescriptor {
                is_primary_key: c.name == primary_key,
                sql_type: SqlType::parse(&c.sql_type),
                name: c.name,
            })
            .collect();

        Ok(ModelDescriptor::new(name, primary_key, columns))
    }
}

impl RegistryFile {
    fn into_registry(self) -> anyhow::Result<Registry> {
        let collections = self
            .collections
            .into_iter()
            .map(|(name, entry)| {
                let entry = entry.unwrap_or_default();
                Collection {
                    name,
                    backing_model: entry
                        .klass
                        .filter(|k| !k.trim().is_empty())
                        .map(TypeRef::new),
                    verbs: entry.verbs,
                }
            })
            .collect();

        let models = self
            .models
            .into_iter()
            .map(|(name, entry)| {
                let context = format!("Invalid model `{name}`");
                entry.into_descriptor(name).context(context)
            })
            .collect::<anyhow::Result<ModelCatalog>>()?;

        Ok(Registry {
            collections,
            models,
        })
    }
}

/// Parse a registry from YAML text.
///
/// An empty document is an empty registry.
pub fn parse_registry(content: &str) -> anyhow::Result<Registry> {
    if content.trim().is_empty() {
        return Ok(Registry::default());
    }
    let file: RegistryFile =
        serde_yaml::from_str(content).context("Failed to parse collection registry")?;
    file.into_registry()
}

/// Load the collection registry and model catalog from a YAML file.
pub fn load_registry(path: &Path) -> anyhow::Result<Registry> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read collection registry: {}", path.display()))?;
    let registry = parse_registry(&content)
        .with_context(|| format!("Invalid collection registry: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        collections = registry.collections.len(),
        models = registry.models.len(),
        "loaded collection registry"
    );
    Ok(registry)
}
