//! End-to-end fan-out tests: real adapters over wiremock, driven through
//! the dispatch coordinator and credential store.

use fanout_chat::{
    CredentialStore, DispatchCoordinator, ProviderFactory, ProviderId, Speaker, Turn,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Route coordinator tracing through the test harness; repeated calls are
/// fine, only the first init wins.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn fan_out_with_mixed_success_and_failure() {
    init_tracing();
    let anthropic_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "pong1"}]
        })))
        .mount(&anthropic_server)
        .await;

    let gemini_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "bad key"}
        })))
        .mount(&gemini_server)
        .await;

    let mut coordinator = DispatchCoordinator::new(vec![
        ProviderFactory::create_with_base_url(ProviderId::Anthropic, anthropic_server.uri()),
        ProviderFactory::create_with_base_url(ProviderId::Gemini, gemini_server.uri()),
        ProviderFactory::create(ProviderId::Mistral),
        ProviderFactory::create(ProviderId::OpenAI),
    ]);

    let mut credentials = CredentialStore::new();
    credentials.edit(ProviderId::Anthropic, "key-1");
    credentials.edit(ProviderId::Gemini, "key-3");
    credentials.commit();

    assert!(coordinator.submit("ping", credentials.committed()));
    coordinator.await_round().await;

    let store = coordinator.store();
    assert_eq!(
        store.transcript(ProviderId::Anthropic),
        vec![Turn::user("ping"), Turn::assistant("pong1")]
    );
    assert_eq!(store.last_error(ProviderId::Anthropic), None);

    assert_eq!(store.transcript(ProviderId::Gemini), vec![Turn::user("ping")]);
    assert_eq!(
        store.last_error(ProviderId::Gemini),
        Some("HTTP 401: bad key".to_string())
    );

    // Unconfigured providers were never touched.
    for id in [ProviderId::Mistral, ProviderId::OpenAI] {
        assert!(store.transcript(id).is_empty());
        assert_eq!(store.last_error(id), None);
        assert!(!store.is_in_flight(id));
    }
    assert!(!store.any_in_flight());
}

#[tokio::test]
async fn slow_provider_blocks_submission_but_not_siblings() {
    init_tracing();
    let fast_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "quick"}}]
        })))
        .mount(&fast_server)
        .await;

    let slow_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(json!({
                    "output": [{"content": [{"text": "eventually"}]}]
                })),
        )
        .mount(&slow_server)
        .await;

    let mut coordinator = DispatchCoordinator::new(vec![
        ProviderFactory::create_with_base_url(ProviderId::Mistral, fast_server.uri()),
        ProviderFactory::create_with_base_url(ProviderId::OpenAI, slow_server.uri()),
    ]);

    let mut credentials = CredentialStore::new();
    credentials.edit(ProviderId::Mistral, "key-2");
    credentials.edit(ProviderId::OpenAI, "key-4");
    credentials.commit();

    assert!(coordinator.submit("hello", credentials.committed()));

    // Give the fast provider time to resolve while the slow one hangs.
    tokio::time::sleep(Duration::from_millis(100)).await;
    let store = coordinator.store();
    assert_eq!(store.transcript(ProviderId::Mistral).len(), 2);
    assert!(store.is_in_flight(ProviderId::OpenAI));

    // One round at a time: the outstanding dispatch blocks a new submission.
    assert!(!coordinator.submit("too soon", credentials.committed()));

    coordinator.await_round().await;
    let store = coordinator.store();
    assert_eq!(
        store.transcript(ProviderId::OpenAI),
        vec![Turn::user("hello"), Turn::assistant("eventually")]
    );
    assert!(!store.any_in_flight());

    // And afterwards the next round goes through.
    assert!(coordinator.submit("hello again", credentials.committed()));
    coordinator.await_round().await;
    let transcript = coordinator.store().transcript(ProviderId::Mistral);
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[3].speaker, Speaker::Assistant);
}
