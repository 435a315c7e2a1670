//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global config file, workspace
//! config files, then `CONCIERGE__*` environment variables.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use crate::provider::{ProviderConfig, ProviderType};

mod facade;
mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod global_file;
    pub mod workspace_file;
}

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConciergeConfig {
    /// Content generation backend
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Catalog cache storage
    #[serde(default)]
    pub cache: CacheConfig,

    /// Who the celebration is for
    #[serde(default)]
    pub celebration: CelebrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Sled database directory, relative paths resolve against the workspace root
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".concierge/cache")
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

impl CacheConfig {
    pub fn resolve_store_path(&self, workspace_root: &Path) -> PathBuf {
        if self.store_path.is_absolute() {
            self.store_path.clone()
        } else {
            workspace_root.join(&self.store_path)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrationConfig {
    /// Subject of the personal message
    #[serde(default = "default_honoree")]
    pub honoree: String,

    /// Signature on the personal message
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_honoree() -> String {
    "Olivia".to_string()
}

fn default_host() -> String {
    "Rob".to_string()
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            honoree: default_honoree(),
            host: default_host(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Provider(String),
    Cache(String),
    Celebration(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Provider(msg) => write!(f, "Provider: {}", msg),
            ValidationError::Cache(msg) => write!(f, "Cache: {}", msg),
            ValidationError::Celebration(msg) => write!(f, "Celebration: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ConciergeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.provider.validate() {
            errors.push(ValidationError::Provider(e));
        }
        if self.cache.store_path.as_os_str().is_empty() {
            errors.push(ValidationError::Cache(
                "Store path cannot be empty".to_string(),
            ));
        }
        if self.celebration.honoree.trim().is_empty() {
            errors.push(ValidationError::Celebration(
                "Honoree name cannot be empty".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
