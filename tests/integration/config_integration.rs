//! Integration tests for the configuration system

use concierge::config::{ConciergeConfig, ConfigLoader, ProviderType};
use parking_lot::Mutex;
use tempfile::TempDir;

/// Serializes tests that touch process environment variables.
static ENV_MUTEX: Mutex<()> = parking_lot::const_mutex(());

#[test]
fn test_load_from_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("concierge.toml");
    std::fs::write(
        &config_file,
        r#"
[provider]
type = "ollama"
model = "llama3"
endpoint = "http://localhost:11434"

[celebration]
honoree = "Ada"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.provider.provider_type, ProviderType::Ollama);
    assert_eq!(config.provider.model, "llama3");
    assert_eq!(config.celebration.honoree, "Ada");
    assert_eq!(config.celebration.host, "Rob");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.output, "stderr");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp_dir.path().join("nope.toml")).is_err());
}

#[test]
fn test_workspace_env_file_layers_over_base() {
    let _guard = ENV_MUTEX.lock();
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[celebration]\nhonoree = \"Grace\"\nhost = \"Alan\"\n",
    )
    .unwrap();
    std::fs::write(
        config_dir.join("staging.toml"),
        "[celebration]\nhost = \"Edsger\"\n",
    )
    .unwrap();

    std::env::set_var("CONCIERGE_ENV", "staging");
    let config = ConfigLoader::load(temp_dir.path());
    std::env::remove_var("CONCIERGE_ENV");

    let config = config.unwrap();
    assert_eq!(config.celebration.honoree, "Grace");
    assert_eq!(config.celebration.host, "Edsger");
}

#[test]
fn test_environment_overrides_files() {
    let _guard = ENV_MUTEX.lock();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("CONCIERGE__CELEBRATION__HONOREE", "Barbara");
    let config = ConfigLoader::load(temp_dir.path());
    std::env::remove_var("CONCIERGE__CELEBRATION__HONOREE");

    assert_eq!(config.unwrap().celebration.honoree, "Barbara");
}

#[test]
fn test_written_default_loads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = ConfigLoader::write_default(temp_dir.path(), false).unwrap();
    assert!(path.ends_with("config/config.toml"));

    let loaded = ConfigLoader::load_from_file(&path).unwrap();
    let defaults = ConciergeConfig::default();
    assert_eq!(loaded.provider.model, defaults.provider.model);
    assert_eq!(loaded.cache.store_path, defaults.cache.store_path);
    assert_eq!(loaded.celebration.honoree, defaults.celebration.honoree);
}

#[test]
fn test_validation_reports_every_problem() {
    let mut config = ConciergeConfig::default();
    config.provider.model = String::new();
    config.celebration.honoree = "  ".to_string();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
}
