use super::types::{ModelDescriptor, TypeRef};
use crate::error::ResolutionError;
use indexmap::IndexMap;

/// Resolves a backing model identifier to its column metadata.
///
/// Injected into the path builder so lookups stay explicit. Implementations
/// return [`ResolutionError`] when the identifier names no known model.
pub trait ModelResolver {
    fn resolve(&self, type_ref: &TypeRef) -> Result<ModelDescriptor, ResolutionError>;
}

/// In-memory [`ModelResolver`] keyed by model identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    models: IndexMap<TypeRef, ModelDescriptor>,
}

impl ModelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under its own name.
    pub fn insert(&mut self, model: ModelDescriptor) {
        self.models.insert(TypeRef::new(model.name.clone()), model);
    }

    pub fn with_model(mut self, model: ModelDescriptor) -> Self {
        self.insert(model);
        self
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<ModelDescriptor> for ModelCatalog {
    fn from_iter<I: IntoIterator<Item = ModelDescriptor>>(iter: I) -> Self {
        let mut catalog = ModelCatalog::new();
        for model in iter {
            catalog.insert(model);
        }
        catalog
    }
}

impl ModelResolver for ModelCatalog {
    fn resolve(&self, type_ref: &TypeRef) -> Result<ModelDescriptor, ResolutionError> {
        self.models
            .get(type_ref)
            .cloned()
            .ok_or_else(|| ResolutionError::new(type_ref.clone()))
    }
}
