//! ConfigLoader: assembles sources in precedence order and deserializes the result.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::ConciergeConfig;
use crate::error::ApiError;
use config::{Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Order (later wins): defaults, global file, workspace files, environment.
    pub fn load(workspace_root: &Path) -> Result<ConciergeConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder.add_source(env_source()).build()?;

        let loaded: ConciergeConfig = config.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            provider = loaded.provider.provider_type.slug(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Load configuration from a single explicit file (plus defaults and environment).
    pub fn load_from_file(path: &Path) -> Result<ConciergeConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .add_source(env_source())
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Write a default configuration file into the workspace.
    ///
    /// Returns the written path. Refuses to overwrite unless `force` is set.
    pub fn write_default(workspace_root: &Path, force: bool) -> Result<PathBuf, ApiError> {
        let path = workspace_file::workspace_config_path(workspace_root);
        if path.exists() && !force {
            return Err(ApiError::ConfigError(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }
        std::fs::write(&path, Self::default_toml()?)
            .map_err(|e| ApiError::ConfigError(format!("Failed to write config: {}", e)))?;
        Ok(path)
    }

    /// Default configuration rendered as TOML with a short header.
    pub fn default_toml() -> Result<String, ApiError> {
        let body = toml::to_string_pretty(&ConciergeConfig::default())
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))?;
        Ok(format!(
            "# Concierge configuration\n\
             # API keys are read from GEMINI_API_KEY / OPENAI_API_KEY unless provider.api_key_env is set.\n\n{}",
            body
        ))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CONCIERGE")
        .prefix_separator("__")
        .separator("__")
}
