//! # CLI Module
//!
//! Command-line front end of the API document generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Rebuild the document from the collection registry and replace the output file:
//!
//! ```bash
//! apispec-gen generate
//! apispec-gen generate --registry config/api.yml --output config/openapi.json
//! ```
//!
//! ### `check`
//!
//! Rebuild in memory and fail when the committed document differs, for CI:
//!
//! ```bash
//! apispec-gen check
//! ```
//!
//! ### `print`
//!
//! Write the document to stdout instead of a file:
//!
//! ```bash
//! apispec-gen print --registry config/api.yml | jq '.paths | keys'
//! ```
//!
//! All commands read `./apispec.toml` when present (see [`crate::config`]);
//! `--config`, `--registry`, `--output` and `--legacy-security-key` override it.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands, SourceArgs};
