//! Generator configuration
//!
//! Projects can pin the registry location, output path and document options in
//! an `apispec.toml` file. Every key is optional; command line flags override
//! values from the file.
//!
//! ```toml
//! registry = "config/api.yml"
//! output = "config/openapi.json"
//! openapi_version = "3.0.0"
//! legacy_security_key = false
//! ```

use crate::generator::{DocumentOptions, SecurityKey, OPENAPI_VERSION};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = "apispec.toml";

pub const DEFAULT_REGISTRY_PATH: &str = "config/api.yml";
pub const DEFAULT_OUTPUT_PATH: &str = "config/openapi.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Collection registry (YAML)
    pub registry: PathBuf,
    /// Generated document (JSON)
    pub output: PathBuf,
    pub openapi_version: String,
    /// Emit the historical `secuirty` key instead of `security`
    pub legacy_security_key: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            registry: PathBuf::from(DEFAULT_REGISTRY_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            openapi_version: OPENAPI_VERSION.to_string(),
            legacy_security_key: false,
        }
    }
}

impl GeneratorConfig {
    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            openapi_version: self.openapi_version.clone(),
            security_key: if self.legacy_security_key {
                SecurityKey::Legacy
            } else {
                SecurityKey::Standard
            },
        }
    }

    /// Relative paths in the config are taken relative to the config file.
    fn rebase(mut self, base: &Path) -> Self {
        if self.registry.is_relative() {
            self.registry = base.join(&self.registry);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        self
    }
}

/// Load a generator config from a TOML file.
pub fn load_config(config_path: &Path) -> anyhow::Result<GeneratorConfig> {
    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read generator config: {}", config_path.display()))?;

    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse generator config: {}", config_path.display()))?;

    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.rebase(base))
}

/// Resolve the effective config.
///
/// Priority:
/// 1. Explicitly provided path (must exist)
/// 2. `apispec.toml` in `working_dir`
/// 3. Defaults
pub fn resolve_config(explicit_path: Option<&Path>, working_dir: &Path) -> anyhow::Result<GeneratorConfig> {
    if let Some(path) = explicit_path {
        return load_config(path);
    }

    let detected = working_dir.join(CONFIG_FILE_NAME);
    if detected.exists() {
        tracing::debug!(path = %detected.display(), "using detected generator config");
        return load_config(&detected);
    }

    Ok(GeneratorConfig::default())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.registry, PathBuf::from("config/api.yml"));
        assert_eq!(config.output, PathBuf::from("config/openapi.json"));
        assert_eq!(config.document_options(), DocumentOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: GeneratorConfig = toml::from_str("legacy_security_key = true").unwrap();
        assert_eq!(config.openapi_version, "3.0.0");
        assert_eq!(config.document_options().security_key, SecurityKey::Legacy);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<GeneratorConfig>("outptu = \"x.json\"").is_err());
    }

    #[test]
    fn test_load_config_rebases_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "registry = \"api.yml\"\noutput = \"/abs/openapi.json\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.registry, dir.path().join("api.yml"));
        assert_eq!(config.output, PathBuf::from("/abs/openapi.json"));
    }

    #[test]
    fn test_resolve_config_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config(None, dir.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_resolve_config_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_config(Some(dir.path().join("nope.toml").as_path()), dir.path()).is_err());
    }
}
