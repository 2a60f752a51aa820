//! # apispec-gen
//!
//! **apispec-gen** turns a registry of API resource collections and the column metadata of their
//! backing data models into a static, versionable API description document (OpenAPI 3.0 shaped:
//! `paths`, `components.schemas`, `components.parameters`). Documentation tooling and client
//! generators consume the file without talking to the live service.
//!
//! ## Architecture
//!
//! The library is organized into a few modules:
//!
//! - **[`registry`]** - Collections, model/column descriptors, the [`ModelResolver`] capability
//!   and the YAML registry loader
//! - **[`generator`]** - Type mapping, schema/path/parameter builders, document assembly and the
//!   document writer
//! - **[`config`]** - Optional `apispec.toml` project configuration
//! - **[`logging`]** - `tracing` subscriber setup for the binary
//! - **[`cli`]** - The `apispec-gen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(apispec-gen)
//!     participant Load as registry::load_registry
//!     participant Gen as generator::generate
//!     participant Paths as generator::build_paths
//!     participant Schema as generator::build_schema
//!     participant Params as generator::build_parameters
//!     participant FS as File System
//!
//!     CLI->>Load: load_registry("config/api.yml")
//!     Load-->>CLI: Registry { collections, models }
//!     CLI->>Gen: generate(collections, models)
//!     Gen->>Gen: BuildContext::new (skeleton + ID schema)
//!     Gen->>Paths: build_paths(ctx, collections, resolver)
//!     loop each collection, in registry order
//!         Paths->>Paths: resolve backing model
//!         Paths->>Schema: build_schema(ctx, model) once per model name
//!         Paths->>Paths: "/" + name -> { verb: {} }
//!     end
//!     Gen->>Params: build_parameters(ctx)
//!     Gen-->>CLI: Document
//!     CLI->>FS: write_document (temp file + rename)
//! ```
//!
//! A run is a single synchronous pass with its own [`generator::BuildContext`]; nothing is cached
//! between runs, and unchanged input renders byte-identical output.
//!
//! ## Quick Start
//!
//! ```no_run
//! use apispec_gen::generator::{generate, write_document};
//! use apispec_gen::registry::load_registry;
//! use std::path::Path;
//!
//! let registry = load_registry(Path::new("config/api.yml"))?;
//! let document = generate(&registry.collections, &registry.models)?;
//! write_document(&document, Path::new("config/openapi.json"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Failures are fatal. A collection whose backing model cannot be resolved aborts the build
//! ([`GeneratorError::Resolution`]) and the output file is left untouched. Unrecognised SQL
//! types are not errors; they are documented as plain strings.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod registry;

pub use error::{GeneratorError, ResolutionError};
pub use generator::{generate, generate_with_options, Document, DocumentOptions};
pub use registry::{
    load_registry, Collection, ColumnDescriptor, ModelCatalog, ModelDescriptor, ModelResolver,
    SqlType, TypeRef,
};
