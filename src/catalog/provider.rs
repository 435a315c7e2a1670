//! Cached catalog provider.
//!
//! Resolves the catalog from the cache when a fresh entry exists, otherwise generates it
//! through the configured [`ModelProviderClient`], validates and enriches the result, and
//! writes it back. Neither operation surfaces an error to callers: catalog resolution
//! degrades to an empty catalog, message generation to a fixed fallback text.

use super::enrich::enrich;
use super::prompt::{catalog_request, catalog_system_instruction, fallback_message, message_prompt};
use super::schema::{catalog_schema, parse_generated};
use super::types::{Catalog, DiningOption, EventOption, LodgingOption};
use crate::cache::{CacheEntry, CacheStore, Clock, SystemClock, CATALOG_CACHE_KEY, CATALOG_TTL_MS};
use crate::config::CelebrationConfig;
use crate::error::ApiError;
use crate::provider::{ChatMessage, CompletionOptions, ModelProviderClient};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Thinking budget granted to catalog generation.
pub const CATALOG_THINKING_BUDGET: u32 = 4000;

/// What the selection flow needs from a catalog backend.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn get_catalog(&self) -> Catalog;

    async fn generate_personal_message(
        &self,
        event: &EventOption,
        lodging: &LodgingOption,
        dining: &DiningOption,
    ) -> String;
}

pub struct CatalogProvider {
    client: Arc<dyn ModelProviderClient>,
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    celebration: CelebrationConfig,
    ttl_ms: i64,
}

impl CatalogProvider {
    pub fn new(
        client: Arc<dyn ModelProviderClient>,
        store: Arc<dyn CacheStore>,
        celebration: CelebrationConfig,
    ) -> Self {
        Self::with_clock(client, store, Arc::new(SystemClock), celebration)
    }

    pub fn with_clock(
        client: Arc<dyn ModelProviderClient>,
        store: Arc<dyn CacheStore>,
        clock: Arc<dyn Clock>,
        celebration: CelebrationConfig,
    ) -> Self {
        Self {
            client,
            store,
            clock,
            celebration,
            ttl_ms: CATALOG_TTL_MS,
        }
    }

    pub fn celebration(&self) -> &CelebrationConfig {
        &self.celebration
    }

    /// Fresh cached catalog, if any. Corrupt and expired entries count as misses.
    fn cached(&self) -> Option<Catalog> {
        let raw = match self.store.get(CATALOG_CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "catalog cache read failed");
                return None;
            }
        };
        let entry = match CacheEntry::from_json(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "ignoring corrupt catalog cache entry");
                return None;
            }
        };
        match entry.age_ms(self.clock.now_millis()) {
            Some(age_ms) if age_ms < self.ttl_ms => {
                debug!(age_ms, events = entry.data.len(), "catalog cache hit");
                Some(entry.data)
            }
            Some(age_ms) => {
                debug!(age_ms, "catalog cache expired");
                None
            }
            None => {
                warn!(
                    timestamp = entry.timestamp,
                    "ignoring catalog cache entry with out-of-range timestamp"
                );
                None
            }
        }
    }

    /// Generate, validate, enrich and cache a catalog.
    pub async fn try_generate_catalog(&self) -> Result<Catalog, ApiError> {
        let messages = vec![
            ChatMessage::system(catalog_system_instruction(&self.celebration.honoree)),
            ChatMessage::user(catalog_request(&self.celebration.honoree)),
        ];
        let options = CompletionOptions {
            response_schema: Some(catalog_schema()),
            web_search: true,
            thinking_budget: Some(CATALOG_THINKING_BUDGET),
            ..CompletionOptions::default()
        };

        info!(
            provider = self.client.provider_name(),
            model = self.client.model_name(),
            "generating catalog"
        );
        let response = self.client.complete(messages, options).await?;
        let raw = parse_generated(&response.content)?;
        let catalog = enrich(raw);

        let entry = CacheEntry::new(self.clock.now_millis(), catalog);
        self.store.set(CATALOG_CACHE_KEY, &entry.to_json()?)?;
        info!(
            events = entry.data.len(),
            lodgings = entry.data.lodging_count(),
            dining = entry.data.dining_count(),
            "catalog generated and cached"
        );
        Ok(entry.data)
    }

    /// Resolve the catalog. Never fails; an empty catalog signals nothing is available.
    pub async fn get_catalog(&self) -> Catalog {
        if let Some(catalog) = self.cached() {
            return catalog;
        }
        match self.try_generate_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "catalog generation failed, continuing with empty catalog");
                Catalog::empty()
            }
        }
    }

    /// Celebratory message for a complete selection, or the fallback text.
    pub async fn generate_personal_message(
        &self,
        event: &EventOption,
        lodging: &LodgingOption,
        dining: &DiningOption,
    ) -> String {
        let honoree = &self.celebration.honoree;
        let host = &self.celebration.host;
        let messages = vec![ChatMessage::user(message_prompt(
            honoree, host, event, lodging, dining,
        ))];

        match self.client.complete(messages, CompletionOptions::default()).await {
            Ok(response) if !response.content.trim().is_empty() => {
                response.content.trim().to_string()
            }
            Ok(_) => {
                warn!("empty personal message, using fallback");
                fallback_message(honoree, host, event, lodging, dining)
            }
            Err(e) => {
                warn!(error = %e, "personal message generation failed, using fallback");
                fallback_message(honoree, host, event, lodging, dining)
            }
        }
    }

    pub fn clear_cache(&self) -> Result<(), ApiError> {
        self.store.clear(CATALOG_CACHE_KEY)?;
        info!("catalog cache cleared");
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for CatalogProvider {
    async fn get_catalog(&self) -> Catalog {
        CatalogProvider::get_catalog(self).await
    }

    async fn generate_personal_message(
        &self,
        event: &EventOption,
        lodging: &LodgingOption,
        dining: &DiningOption,
    ) -> String {
        CatalogProvider::generate_personal_message(self, event, lodging, dining).await
    }
}
