//! Provider profile: the configured backend for content generation.

use super::ModelProvider;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Gemini,
    OpenAI,
    Ollama,
    #[serde(rename = "local")]
    LocalCustom,
}

impl ProviderType {
    pub fn slug(self) -> &'static str {
        match self {
            ProviderType::Gemini => "gemini",
            ProviderType::OpenAI => "openai",
            ProviderType::Ollama => "ollama",
            ProviderType::LocalCustom => "local",
        }
    }

    /// Environment variable consulted when no key is configured.
    pub fn default_api_key_env(self) -> Option<&'static str> {
        match self {
            ProviderType::Gemini => Some("GEMINI_API_KEY"),
            ProviderType::OpenAI => Some("OPENAI_API_KEY"),
            ProviderType::Ollama | ProviderType::LocalCustom => None,
        }
    }

    fn requires_api_key(self) -> bool {
        matches!(self, ProviderType::Gemini | ProviderType::OpenAI)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(rename = "type", default = "default_provider_type")]
    pub provider_type: ProviderType,

    #[serde(default = "default_model")]
    pub model: String,

    /// Inline API key; prefer `api_key_env` in shared config files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Name of the environment variable holding the API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,

    /// Endpoint override (base URL for gemini/openai/ollama, full URL for local)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

fn default_provider_type() -> ProviderType {
    ProviderType::Gemini
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            model: default_model(),
            api_key: None,
            api_key_env: None,
            endpoint: None,
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }
        if let Some(endpoint) = &self.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(format!("Endpoint must be an http(s) URL: {}", endpoint));
            }
        }
        if self.provider_type == ProviderType::LocalCustom && self.endpoint.is_none() {
            return Err("Local provider requires an endpoint".to_string());
        }
        Ok(())
    }

    /// Resolve the API key: inline value, then `api_key_env`, then the type's default variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Some(key.clone());
        }
        self.api_key_env
            .as_deref()
            .or_else(|| self.provider_type.default_api_key_env())
            .and_then(|var| std::env::var(var).ok())
            .filter(|k| !k.is_empty())
    }

    pub fn to_model_provider(&self) -> Result<ModelProvider, ApiError> {
        self.validate().map_err(ApiError::ConfigError)?;

        let api_key = self.resolve_api_key();
        if self.provider_type.requires_api_key() && api_key.is_none() {
            let hint = self
                .api_key_env
                .as_deref()
                .or_else(|| self.provider_type.default_api_key_env())
                .unwrap_or("api_key");
            return Err(ApiError::ProviderNotConfigured(format!(
                "{} provider requires an API key (set {})",
                self.provider_type.slug(),
                hint
            )));
        }

        let model = self.model.clone();
        let endpoint = self.endpoint.clone();
        Ok(match self.provider_type {
            ProviderType::Gemini => ModelProvider::Gemini {
                model,
                api_key: api_key.unwrap_or_default(),
                base_url: endpoint,
            },
            ProviderType::OpenAI => ModelProvider::OpenAI {
                model,
                api_key: api_key.unwrap_or_default(),
                base_url: endpoint,
            },
            ProviderType::Ollama => ModelProvider::Ollama {
                model,
                base_url: endpoint,
            },
            ProviderType::LocalCustom => ModelProvider::LocalCustom {
                model,
                endpoint: endpoint.unwrap_or_default(),
                api_key,
            },
        })
    }
}
