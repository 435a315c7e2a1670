//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cache::{
    inspect, CacheStore, Clock, MemoryCacheStore, SledCacheStore, SystemClock, CATALOG_CACHE_KEY,
    CATALOG_TTL_MS,
};
use crate::catalog::CatalogProvider;
use crate::config::{ConciergeConfig, ConfigLoader};
use crate::error::{ApiError, StorageError};
use crate::flow::SelectionFlowController;
use crate::provider::ProviderFactory;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::cli::parse::{CacheCommands, Commands};
use crate::cli::presentation::{
    format_cache_status, format_catalog_json, format_catalog_text, format_init_summary,
    format_summary_json, format_summary_text,
};
use crate::cli::wizard;

/// Runtime context for CLI execution: workspace, loaded config, and cache policy.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ConciergeConfig,
    no_cache: bool,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        no_cache: bool,
    ) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self {
            workspace_root,
            config,
            no_cache,
        })
    }

    pub fn config(&self) -> &ConciergeConfig {
        &self.config
    }

    fn cache_store(&self) -> Result<Arc<dyn CacheStore>, ApiError> {
        if self.no_cache {
            return Ok(Arc::new(MemoryCacheStore::new()));
        }
        let path = self.config.cache.resolve_store_path(&self.workspace_root);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::StorageError(StorageError::IoError(e)))?;
        }
        Ok(Arc::new(SledCacheStore::new(&path)?))
    }

    fn catalog_provider(&self) -> Result<Arc<CatalogProvider>, ApiError> {
        if let Err(errors) = self.config.validate() {
            let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(ApiError::ConfigError(joined.join("; ")));
        }
        let model = self.config.provider.to_model_provider()?;
        let client = ProviderFactory::create_client(&model)?;
        Ok(Arc::new(CatalogProvider::new(
            client,
            self.cache_store()?,
            self.config.celebration.clone(),
        )))
    }

    fn runtime() -> Result<tokio::runtime::Runtime, ApiError> {
        tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::ProviderError(format!("Failed to create runtime: {}", e)))
    }

    /// Execute a command and return its output string.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Plan => self.handle_plan(),
            Commands::Catalog { format, refresh } => self.handle_catalog(format, *refresh),
            Commands::Select {
                event,
                lodging,
                cuisine,
                dining,
                format,
            } => self.handle_select(event, lodging, cuisine, dining, format),
            Commands::Cache { command } => match command {
                CacheCommands::Status { format } => self.handle_cache_status(format),
                CacheCommands::Clear => self.handle_cache_clear(),
            },
            Commands::Init { force } => self.handle_init(*force),
        }
    }

    fn handle_plan(&self) -> Result<String, ApiError> {
        let provider = self.catalog_provider()?;
        let runtime = Self::runtime()?;
        wizard::run(&runtime, provider)
    }

    fn handle_catalog(&self, format: &str, refresh: bool) -> Result<String, ApiError> {
        let provider = self.catalog_provider()?;
        if refresh {
            provider.clear_cache()?;
        }
        let runtime = Self::runtime()?;
        let catalog = runtime.block_on(provider.get_catalog());
        info!(events = catalog.len(), "catalog resolved");
        if format == "json" {
            format_catalog_json(&catalog)
        } else {
            Ok(format_catalog_text(&catalog))
        }
    }

    fn handle_select(
        &self,
        event: &str,
        lodging: &str,
        cuisine: &str,
        dining: &str,
        format: &str,
    ) -> Result<String, ApiError> {
        let provider = self.catalog_provider()?;
        let runtime = Self::runtime()?;
        runtime.block_on(async {
            let mut flow = SelectionFlowController::new();
            flow.start(provider.as_ref()).await?;
            flow.choose_event(event)?;
            flow.choose_lodging(lodging)?;
            flow.choose_cuisine(cuisine)?;
            flow.choose_dining(dining)?;
            let message = flow.generate_message(provider.as_ref()).await?;

            let complete = flow
                .selection()
                .complete()
                .ok_or(crate::error::FlowError::IncompleteSelection("dining"))?;
            if format == "json" {
                format_summary_json(&complete, Some(&message))
            } else {
                Ok(format_summary_text(&complete, Some(&message)))
            }
        })
    }

    fn handle_cache_status(&self, format: &str) -> Result<String, ApiError> {
        let store = self.cache_store()?;
        let status = inspect(store.as_ref(), SystemClock.now_millis(), CATALOG_TTL_MS);
        format_cache_status(&status, format)
    }

    fn handle_cache_clear(&self) -> Result<String, ApiError> {
        let store = self.cache_store()?;
        store.clear(CATALOG_CACHE_KEY)?;
        info!("catalog cache cleared");
        Ok("Catalog cache cleared.".to_string())
    }

    fn handle_init(&self, force: bool) -> Result<String, ApiError> {
        let path = ConfigLoader::write_default(&self.workspace_root, force)?;
        Ok(format_init_summary(&path, force))
    }
}
