//! Shared test utilities for integration tests
//!
//! A scripted content provider, a controllable clock, and generated-payload builders.

use async_trait::async_trait;
use concierge::cache::{Clock, MemoryCacheStore};
use concierge::catalog::CatalogProvider;
use concierge::config::CelebrationConfig;
use concierge::error::ApiError;
use concierge::provider::{
    ChatMessage, CompletionOptions, CompletionResponse, ModelProviderClient, TokenUsage,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Serves queued responses in order; an exhausted script fails every call.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<String, String>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<String, String>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<Vec<ChatMessage>> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ModelProviderClient for ScriptedProvider {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        _options: CompletionOptions,
    ) -> Result<CompletionResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(messages);
        let next = self
            .script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err("script exhausted".to_string()));
        next.map(|content| CompletionResponse {
            content,
            model: "scripted".to_string(),
            usage: TokenUsage::default(),
            finish_reason: Some("stop".to_string()),
        })
        .map_err(ApiError::ProviderRequestFailed)
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

pub struct TestClock(AtomicI64);

impl TestClock {
    pub fn at(ms: i64) -> Arc<Self> {
        Arc::new(Self(AtomicI64::new(ms)))
    }

    pub fn set(&self, ms: i64) {
        self.0.store(ms, Ordering::SeqCst);
    }
}

impl Clock for TestClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn provider_with(
    client: Arc<ScriptedProvider>,
    store: Arc<MemoryCacheStore>,
    clock: Arc<TestClock>,
) -> CatalogProvider {
    CatalogProvider::with_clock(client, store, clock, CelebrationConfig::default())
}

fn dining(id: &str, cuisine: &str) -> Value {
    json!({
        "id": id,
        "cuisine": cuisine,
        "name": format!("Restaurant {}", id),
        "summary": format!("Vibe of {}", id),
        "signatureDish": format!("Dish {}", id),
        "priceRange": "$$$$"
    })
}

/// Generated catalog text: one event per name, two hotels each. The first hotel carries
/// two Italian and one French restaurant; the second only French.
pub fn generated_payload(names: &[&str]) -> String {
    let events: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let eid = format!("e{}", i);
            let hotel = |suffix: &str, restaurants: Vec<Value>| {
                json!({
                    "id": format!("{}-{}", eid, suffix),
                    "name": format!("Hotel {}-{}", eid, suffix),
                    "description": "Five stars",
                    "location": "Southbank",
                    "priceRange": "$$$$$",
                    "topFeatures": ["Spa"],
                    "restaurants": restaurants
                })
            };
            json!({
                "id": eid,
                "name": name,
                "venue": format!("{} Theatre", name),
                "dates": "Oct 10 - Oct 31, 2026",
                "description": "A night out",
                "criticRating": "5 stars",
                "priceRange": "$$$",
                "hotels": [
                    hotel("h1", vec![
                        dining(&format!("{}-h1-r1", eid), "Italian"),
                        dining(&format!("{}-h1-r2", eid), "French"),
                        dining(&format!("{}-h1-r3", eid), "Italian"),
                    ]),
                    hotel("h2", vec![dining(&format!("{}-h2-r1", eid), "French")]),
                ]
            })
        })
        .collect();
    Value::Array(events).to_string()
}

pub const SHOWS: [&str; 3] = [
    "Piper's Playhouse",
    "Heathers The Musical",
    "The Pirates of Penzance",
];
