//! End-to-end selection flow over a generated catalog

use super::test_utils::{generated_payload, provider_with, ScriptedProvider, TestClock, SHOWS};
use concierge::cache::MemoryCacheStore;
use concierge::error::FlowError;
use concierge::flow::{MessageState, SelectionFlowController, Step, StepView};
use std::sync::Arc;

fn scripted(
    extra: Vec<Result<String, String>>,
) -> (concierge::catalog::CatalogProvider, Arc<ScriptedProvider>) {
    let mut script = vec![Ok(generated_payload(&SHOWS))];
    script.extend(extra);
    let client = ScriptedProvider::new(script);
    let provider = provider_with(
        client.clone(),
        Arc::new(MemoryCacheStore::new()),
        TestClock::at(0),
    );
    (provider, client)
}

#[tokio::test]
async fn test_full_journey_with_generated_message() {
    let (provider, client) = scripted(vec![Ok("Happy 50th, my love.".to_string())]);
    let mut flow = SelectionFlowController::new();

    flow.start(&provider).await.unwrap();
    assert_eq!(flow.step(), Step::Event);
    flow.choose_event("e1").unwrap();
    flow.choose_lodging("e1-h1").unwrap();
    flow.choose_cuisine("Italian").unwrap();
    let ids: Vec<&str> = flow.available_dining().iter().map(|d| d.id()).collect();
    assert_eq!(ids, vec!["e1-h1-r1", "e1-h1-r3"]);
    flow.choose_dining("e1-h1-r3").unwrap();
    assert_eq!(flow.step(), Step::Summary);

    let message = flow.generate_message(&provider).await.unwrap();
    assert_eq!(message, "Happy 50th, my love.");
    assert_eq!(flow.message_state(), &MessageState::Ready(message));
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_message_failure_uses_fallback() {
    let (provider, _) = scripted(vec![Err("timeout".to_string())]);
    let mut flow = SelectionFlowController::new();
    flow.start(&provider).await.unwrap();
    flow.choose_event("e0").unwrap();
    flow.choose_lodging("e0-h2").unwrap();
    flow.choose_cuisine("French").unwrap();
    flow.choose_dining("e0-h2-r1").unwrap();

    let message = flow.generate_message(&provider).await.unwrap();
    let selection = flow.selection().complete().unwrap();
    assert!(message.contains(selection.event.name()));
    assert!(message.contains(selection.lodging.name()));
}

#[tokio::test]
async fn test_degraded_catalog_permits_event_step() {
    let client = ScriptedProvider::new(vec![Err("offline".to_string())]);
    let provider = provider_with(
        client,
        Arc::new(MemoryCacheStore::new()),
        TestClock::at(0),
    );
    let mut flow = SelectionFlowController::new();
    flow.start(&provider).await.unwrap();
    assert_eq!(flow.step(), Step::Event);
    match flow.view() {
        StepView::Event { options } => assert!(options.is_empty()),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_prefetched_catalog_skips_generation() {
    let (provider, client) = scripted(vec![]);
    let prefetched = provider.get_catalog().await;
    let mut flow = SelectionFlowController::new();
    assert!(flow.install_catalog(prefetched));
    flow.start(&provider).await.unwrap();
    assert_eq!(client.calls(), 1);
    assert_eq!(flow.catalog().map(|c| c.len()), Some(3));
}

#[tokio::test]
async fn test_cascading_reset_on_upstream_change() {
    let (provider, _) = scripted(vec![]);
    let mut flow = SelectionFlowController::new();
    flow.start(&provider).await.unwrap();
    flow.choose_event("e0").unwrap();
    flow.choose_lodging("e0-h1").unwrap();
    flow.choose_cuisine("Italian").unwrap();
    flow.choose_dining("e0-h1-r1").unwrap();

    // back to lodging, pick the other hotel
    flow.back();
    flow.back();
    flow.back();
    flow.choose_lodging("e0-h2").unwrap();
    assert!(flow.selection().dining.is_none());
    assert_eq!(flow.selection().cuisine.as_deref(), Some("Italian"));

    flow.back();
    flow.back();
    flow.choose_event("e2").unwrap();
    assert!(flow.selection().lodging.is_none());
    assert!(flow.selection().dining.is_none());
}

#[tokio::test]
async fn test_empty_dining_is_navigable() {
    let (provider, _) = scripted(vec![]);
    let mut flow = SelectionFlowController::new();
    flow.start(&provider).await.unwrap();
    flow.choose_event("e0").unwrap();
    flow.choose_lodging("e0-h2").unwrap();
    flow.choose_cuisine("Mexican").unwrap();
    assert!(flow.available_dining().is_empty());
    assert!(flow.view().is_empty_state());
    assert_eq!(
        flow.choose_dining("e0-h1-r1"),
        Err(FlowError::UnknownOption {
            kind: "dining",
            id: "e0-h1-r1".to_string()
        })
    );
    flow.back();
    assert_eq!(flow.step(), Step::Cuisine);
}

#[tokio::test]
async fn test_restart_then_independent_second_journey() {
    let (provider, client) = scripted(vec![Ok("one".to_string())]);
    let mut flow = SelectionFlowController::new();
    flow.start(&provider).await.unwrap();
    flow.choose_event("e0").unwrap();
    flow.choose_lodging("e0-h1").unwrap();
    flow.choose_cuisine("French").unwrap();
    flow.choose_dining("e0-h1-r2").unwrap();
    flow.generate_message(&provider).await.unwrap();

    flow.restart().unwrap();
    assert_eq!(flow.step(), Step::Landing);
    assert!(flow.selection().is_empty());

    flow.start(&provider).await.unwrap();
    flow.choose_event("e2").unwrap();
    flow.choose_lodging("e2-h1").unwrap();
    flow.choose_cuisine("Italian").unwrap();
    flow.choose_dining("e2-h1-r3").unwrap();
    assert_eq!(flow.step(), Step::Summary);
    assert_eq!(flow.selection().event.as_ref().map(|e| e.id()), Some("e2"));
    assert_eq!(flow.message_state(), &MessageState::Idle);
    assert_eq!(client.calls(), 2);
}
