//! Error types for document generation.
//!
//! Every error is fatal to the run: the generator never emits a partial
//! document.

use crate::registry::TypeRef;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A backing model identifier could not be resolved to a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown backing model `{model}`")]
pub struct ResolutionError {
    pub model: TypeRef,
}

impl ResolutionError {
    pub fn new(model: TypeRef) -> Self {
        ResolutionError { model }
    }
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A collection names a backing model the resolver does not know.
    #[error("collection `{collection}` cannot be documented")]
    Resolution {
        collection: String,
        #[source]
        source: ResolutionError,
    },

    #[error("failed to serialize API document")]
    Serialize(#[from] serde_json::Error),

    /// An existing document could not be read back for comparison.
    #[error("failed to read API document at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be persisted.
    #[error("failed to write API document to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GeneratorError::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;
