//! # Registry Module
//!
//! The registry module describes the input of the generator: the collections
//! an API exposes and the data models backing them.
//!
//! ## Overview
//!
//! - [`Collection`] - one API resource group, its optional backing model and verbs
//! - [`ModelDescriptor`] / [`ColumnDescriptor`] - column metadata of a backing model
//! - [`ModelResolver`] - capability that resolves a [`TypeRef`] to a model
//! - [`ModelCatalog`] - in-memory resolver
//! - [`load_registry`] - reads collections and models from a YAML file
//!
//! ## Registry File
//!
//! ```yaml
//! collections:
//!   vms:
//!     klass: Vm
//!     verbs: [get, post]
//! models:
//!   Vm:
//!     columns:
//!       - { name: id, type: integer, primary_key: true }
//!       - { name: created_on, type: datetime }
//! ```
//!
//! Both mappings are read in declaration order, which is the order paths and
//! schemas appear in the generated document.

mod load;
mod resolver;
mod types;

pub use load::*;
pub use resolver::*;
pub use types::*;
