//! Merge rules: defaults applied before any file or environment source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("provider.type", "gemini")?
        .set_default("provider.model", "gemini-3-flash-preview")?
        .set_default("cache.store_path", ".concierge/cache")?
        .set_default("celebration.honoree", "Olivia")?
        .set_default("celebration.host", "Rob")
}
