//! Catalog resolution through the cache, generation, and degradation paths

use super::test_utils::{generated_payload, provider_with, ScriptedProvider, TestClock, SHOWS};
use concierge::cache::{
    inspect, CacheEntry, CacheStatus, CacheStore, MemoryCacheStore, SledCacheStore,
    CATALOG_CACHE_KEY, CATALOG_TTL_MS,
};
use concierge::catalog::enrich::{event_image, DEFAULT_EVENT_IMAGE};
use concierge::catalog::{Catalog, CatalogProvider};
use concierge::config::CelebrationConfig;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_fresh_entry_is_served_without_generation() {
    let store = Arc::new(MemoryCacheStore::new());
    let clock = TestClock::at(1_000_000);
    let client = ScriptedProvider::new(vec![Ok(generated_payload(&SHOWS))]);
    let provider = provider_with(client.clone(), store.clone(), clock.clone());

    let generated = provider.get_catalog().await;
    assert_eq!(generated.len(), 3);
    assert_eq!(client.calls(), 1);

    clock.set(1_000_000 + CATALOG_TTL_MS - 1);
    assert_eq!(provider.get_catalog().await, generated);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_entry_at_ttl_triggers_generation() {
    let store = Arc::new(MemoryCacheStore::new());
    let clock = TestClock::at(0);
    let client = ScriptedProvider::new(vec![
        Ok(generated_payload(&SHOWS)),
        Ok(generated_payload(&["My Brilliant Career"])),
    ]);
    let provider = provider_with(client.clone(), store.clone(), clock.clone());

    provider.get_catalog().await;
    clock.set(CATALOG_TTL_MS);
    let regenerated = provider.get_catalog().await;
    assert_eq!(client.calls(), 2);
    assert_eq!(regenerated.len(), 1);

    let raw = store.get(CATALOG_CACHE_KEY).unwrap().unwrap();
    let entry = CacheEntry::from_json(&raw).unwrap();
    assert_eq!(entry.timestamp, CATALOG_TTL_MS);
    assert_eq!(entry.data, regenerated);
}

#[tokio::test]
async fn test_post_processing() {
    let store = Arc::new(MemoryCacheStore::new());
    let client = ScriptedProvider::new(vec![Ok(generated_payload(&SHOWS))]);
    let provider = provider_with(client, store, TestClock::at(0));

    let catalog = provider.get_catalog().await;
    let names: Vec<&str> = catalog.events().iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec!["Heathers The Musical", "The Pirates of Penzance", "Piper's Playhouse"]
    );

    let heathers = &catalog.events()[0];
    assert_eq!(heathers.base.image, event_image("heathers"));
    assert_ne!(heathers.base.image, DEFAULT_EVENT_IMAGE);
    let restaurant = &heathers.hotels[0].restaurants[0];
    assert_eq!(restaurant.base.description, format!("Vibe of {}", restaurant.id()));
    assert!(restaurant.base.image.contains(restaurant.id()));
    assert!(heathers.hotels[1].base.image.contains(heathers.hotels[1].id()));
}

#[tokio::test]
async fn test_generation_failure_degrades_to_empty() {
    let store = Arc::new(MemoryCacheStore::new());
    let client = ScriptedProvider::new(vec![Err("network down".to_string())]);
    let provider = provider_with(client, store.clone(), TestClock::at(0));

    assert_eq!(provider.get_catalog().await, Catalog::empty());
    assert_eq!(inspect(store.as_ref(), 0, CATALOG_TTL_MS), CacheStatus::Missing);
}

#[tokio::test]
async fn test_schema_violation_degrades_to_empty() {
    let store = Arc::new(MemoryCacheStore::new());
    let no_hotels = r#"[{"id":"e0","name":"A","venue":"V","dates":"D","description":"x",
        "criticRating":"5","priceRange":"$","hotels":[]}]"#;
    let client = ScriptedProvider::new(vec![Ok(no_hotels.to_string())]);
    let provider = provider_with(client, store.clone(), TestClock::at(0));

    assert!(provider.get_catalog().await.is_empty());
    assert_eq!(store.get(CATALOG_CACHE_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_cache_is_regenerated() {
    let store = Arc::new(MemoryCacheStore::new());
    store.set(CATALOG_CACHE_KEY, "{\"timestamp\": \"yesterday\"}").unwrap();
    let client = ScriptedProvider::new(vec![Ok(generated_payload(&SHOWS))]);
    let provider = provider_with(client.clone(), store, TestClock::at(0));

    assert_eq!(provider.get_catalog().await.len(), 3);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_min_timestamp_envelope_is_regenerated() {
    let store = Arc::new(MemoryCacheStore::new());
    store
        .set(CATALOG_CACHE_KEY, r#"{"timestamp":-9223372036854775808,"data":[]}"#)
        .unwrap();
    let client = ScriptedProvider::new(vec![Ok(generated_payload(&SHOWS))]);
    let provider = provider_with(client.clone(), store.clone(), TestClock::at(5_000));

    assert_eq!(provider.get_catalog().await.len(), 3);
    assert_eq!(client.calls(), 1);
    assert!(matches!(
        inspect(store.as_ref(), 5_000, CATALOG_TTL_MS),
        CacheStatus::Fresh { events: 3, .. }
    ));
}

#[tokio::test]
async fn test_concurrent_fetches_resolve_to_full_catalog() {
    let store = Arc::new(MemoryCacheStore::new());
    let client = ScriptedProvider::new(vec![
        Ok(generated_payload(&SHOWS)),
        Ok(generated_payload(&SHOWS)),
    ]);
    let provider = provider_with(client.clone(), store.clone(), TestClock::at(0));

    let (prefetch, user) =
        futures::future::join(provider.get_catalog(), provider.get_catalog()).await;
    assert_eq!(prefetch, user);
    assert_eq!(prefetch.len(), 3);
    assert!(client.calls() >= 1 && client.calls() <= 2);
    assert!(matches!(
        inspect(store.as_ref(), 0, CATALOG_TTL_MS),
        CacheStatus::Fresh { events: 3, .. }
    ));
}

#[tokio::test]
async fn test_personal_message_fallback_names_choices() {
    let store = Arc::new(MemoryCacheStore::new());
    let client = ScriptedProvider::new(vec![
        Ok(generated_payload(&SHOWS)),
        Err("quota".to_string()),
    ]);
    let provider = provider_with(client.clone(), store, TestClock::at(0));
    let catalog = provider.get_catalog().await;
    let event = &catalog.events()[0];
    let lodging = &event.hotels[0];
    let dining = &lodging.restaurants[0];

    let message = provider.generate_personal_message(event, lodging, dining).await;
    assert!(!message.is_empty());
    assert!(message.contains(event.name()));
    assert!(message.contains(lodging.name()));
    assert!(message.contains(dining.name()));

    let prompt = &client.prompts()[1][0].content;
    assert!(prompt.contains(&event.venue));
    assert!(prompt.contains(&dining.signature_dish));
}

#[tokio::test]
async fn test_sled_cache_survives_provider_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cache");
    let clock = TestClock::at(42);

    {
        let store = Arc::new(SledCacheStore::new(&path).unwrap());
        let client = ScriptedProvider::new(vec![Ok(generated_payload(&SHOWS))]);
        let provider = CatalogProvider::with_clock(
            client,
            store,
            clock.clone(),
            CelebrationConfig::default(),
        );
        assert_eq!(provider.get_catalog().await.len(), 3);
    }

    let store = Arc::new(SledCacheStore::new(&path).unwrap());
    let client = ScriptedProvider::new(vec![]);
    let provider =
        CatalogProvider::with_clock(client.clone(), store, clock, CelebrationConfig::default());
    assert_eq!(provider.get_catalog().await.len(), 3);
    assert_eq!(client.calls(), 0);
}
