//! # Generator Module
//!
//! The generator module turns a collection registry and the column metadata of
//! its backing models into an OpenAPI-shaped API description document.
//!
//! ## Overview
//!
//! A run produces one document with:
//! - **Paths** - one entry per collection (`/<name>`), with an empty operation
//!   stub per declared verb
//! - **Schemas** - one closed object schema per distinct backing model, plus the
//!   shared `ID` reference schema
//! - **Parameters** - the named parameter table, sorted by name
//!
//! ## Architecture
//!
//! ```text
//! generate ─┬─ build_paths ── build_schema ── map_sql_type
//!           ├─ build_parameters
//!           └─ BuildContext::into_document ── write_document
//! ```
//!
//! 1. **BuildContext** - per-run state: document skeleton, schema and parameter tables
//! 2. **build_paths** - walks the registry in order, resolving each backing model
//!    through a [`ModelResolver`](crate::registry::ModelResolver)
//! 3. **build_schema** - derives a model's schema from its columns, once per model name
//! 4. **map_sql_type** - maps a column's SQL type to `{type, format?}`
//! 5. **build_parameters** - sorts the parameter table
//! 6. **write_document** - renders pretty JSON and replaces the output file
//!
//! ## Column Mapping
//!
//! | Column                       | Property                               |
//! |------------------------------|----------------------------------------|
//! | primary key, or `*_id`       | `{"$ref": "#/components/schemas/ID"}`  |
//! | `datetime`                   | `{"type": "string", "format": "date-time"}` |
//! | `integer`                    | `{"type": "integer"}`                  |
//! | `float`                      | `{"type": "number"}`                   |
//! | `boolean`                    | `{"type": "boolean"}`                  |
//! | `jsonb`                      | `{"type": "object"}`                   |
//! | anything else                | `{"type": "string"}`                   |
//!
//! ## Usage
//!
//! ```rust
//! use apispec_gen::generator::{generate, render_document};
//! use apispec_gen::registry::{Collection, ColumnDescriptor, ModelCatalog, ModelDescriptor};
//!
//! let models = ModelCatalog::new().with_model(ModelDescriptor::new(
//!     "Vm",
//!     "id",
//!     vec![
//!         ColumnDescriptor::new("id", "integer").primary_key(),
//!         ColumnDescriptor::new("created_on", "datetime"),
//!     ],
//! ));
//! let collections = vec![Collection::new("vms").with_model("Vm").with_verbs(["get", "post"])];
//!
//! let document = generate(&collections, &models)?;
//! assert!(document.components.schemas.contains_key("Vm"));
//! let _json = render_document(&document)?;
//! # Ok::<(), apispec_gen::GeneratorError>(())
//! ```
//!
//! Every run is a full rebuild. Unchanged input renders byte-identical output.

mod context;
mod document;
mod parameters;
mod paths;
mod schema;
mod type_map;
mod writer;

pub use context::*;
pub use document::*;
pub use parameters::*;
pub use paths::*;
pub use schema::*;
pub use type_map::*;
pub use writer::*;
