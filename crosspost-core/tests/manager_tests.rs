// File: crosspost-core/tests/manager_tests.rs

use std::sync::Arc;

use crosspost_common::models::Platform;
use crosspost_core::accounts::{ConnectOutcome, ConnectionManager, LinkState};
use crosspost_core::config::ApiConfig;
use crosspost_core::status::StatusKind;
use crosspost_core::test_utils::RecordingHttpClient;
use crosspost_core::token::StaticTokenProvider;
use crosspost_core::HttpClient;

const BASE: &str = "http://localhost:8080";
const FACEBOOK_ACCOUNT: &str =
    r#"[{"platform":"facebook","profilePictureUrl":"https://x/y.png","profileName":"Acme"}]"#;

fn manager_with(http: &Arc<RecordingHttpClient>, token: StaticTokenProvider) -> ConnectionManager {
    let client: Arc<dyn HttpClient> = Arc::clone(http) as _;
    ConnectionManager::new(client, Arc::new(token), &ApiConfig::new(BASE))
}

/// Manager with a valid token and Facebook already linked.
async fn loaded_manager(http: &Arc<RecordingHttpClient>) -> ConnectionManager {
    http.push_response(200, FACEBOOK_ACCOUNT);
    let mut manager = manager_with(http, StaticTokenProvider::new("tok-abc"));
    manager.refresh().await;
    manager
}

#[tokio::test]
async fn views_cover_the_catalog_before_first_fetch() {
    let http = Arc::new(RecordingHttpClient::new());
    let manager = manager_with(&http, StaticTokenProvider::new("tok"));

    assert_eq!(manager.views().len(), 8);
    assert!(manager.views().iter().all(|v| !v.connected));
    assert!(!manager.is_loaded());
}

#[tokio::test]
async fn refresh_populates_views_and_states() {
    let http = Arc::new(RecordingHttpClient::new());
    let manager = loaded_manager(&http).await;

    assert!(manager.is_loaded());
    assert_eq!(manager.link_state(Platform::Facebook), LinkState::Connected);
    assert_eq!(manager.link_state(Platform::Instagram), LinkState::Disconnected);
    let facebook = manager.view(Platform::Facebook).unwrap();
    assert_eq!(facebook.avatar_url.as_deref(), Some("https://x/y.png"));
    assert_eq!(facebook.account_name, "Acme");
}

#[tokio::test]
async fn refresh_failure_keeps_prior_views_and_surfaces_a_message() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;

    http.push_transport_error("connection refused");
    manager.refresh().await;

    assert_eq!(
        manager.status().unwrap().text,
        "Failed to fetch social accounts."
    );
    // Last known-good state survives the failed refresh.
    assert!(manager.view(Platform::Facebook).unwrap().connected);
}

#[tokio::test]
async fn connect_without_token_sets_message_and_makes_no_call() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = manager_with(&http, StaticTokenProvider::missing());

    let outcome = manager.connect(Platform::Facebook).await;

    assert_eq!(outcome, ConnectOutcome::Rejected);
    assert_eq!(manager.status().unwrap().text, "You must be logged in.");
    assert_eq!(http.call_count(), 0);
}

#[tokio::test]
async fn instagram_requires_facebook_first_with_zero_network_calls() {
    let http = Arc::new(RecordingHttpClient::new());
    http.push_response(200, "[]");
    let mut manager = manager_with(&http, StaticTokenProvider::new("tok"));
    manager.refresh().await;
    let calls_after_refresh = http.call_count();

    let outcome = manager.connect(Platform::Instagram).await;

    assert_eq!(outcome, ConnectOutcome::Rejected);
    assert_eq!(
        manager.status().unwrap().text,
        "Please connect your Facebook Page first before connecting Instagram."
    );
    assert_eq!(http.call_count(), calls_after_refresh);
    assert_eq!(manager.link_state(Platform::Instagram), LinkState::Disconnected);
}

#[tokio::test]
async fn redirect_platforms_return_the_login_url() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = manager_with(&http, StaticTokenProvider::new("tok-abc"));

    let outcome = manager.connect(Platform::Facebook).await;

    assert_eq!(
        outcome,
        ConnectOutcome::Redirect(format!("{}/auth/facebook/login?token=tok-abc", BASE))
    );
    assert_eq!(manager.link_state(Platform::Facebook), LinkState::Pending);
    assert_eq!(http.call_count(), 0);
}

#[tokio::test]
async fn mastodon_redirect_carries_the_instance_parameter() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = manager_with(&http, StaticTokenProvider::new("tok-abc"));

    let outcome = manager.connect(Platform::Mastodon).await;

    assert_eq!(
        outcome,
        ConnectOutcome::Redirect(format!(
            "{}/auth/mastodon/login?instance=mastodon.social&token=tok-abc",
            BASE
        ))
    );
}

#[tokio::test]
async fn instagram_direct_link_posts_then_refreshes() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;

    http.push_response(200, "{}");
    http.push_response(
        200,
        r#"[{"platform":"facebook","profileName":"Acme"},{"platform":"instagram","profileName":"acme_gram"}]"#,
    );
    let outcome = manager.connect(Platform::Instagram).await;

    assert_eq!(outcome, ConnectOutcome::Linked);
    let calls = http.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1].method, "POST");
    assert_eq!(calls[1].url, format!("{}/connect/instagram", BASE));
    assert_eq!(calls[1].bearer.as_deref(), Some("tok-abc"));
    assert_eq!(calls[2].method, "GET");

    assert!(manager.view(Platform::Instagram).unwrap().connected);
    assert_eq!(manager.link_state(Platform::Instagram), LinkState::Connected);
}

#[tokio::test]
async fn instagram_direct_link_failure_surfaces_backend_message() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;

    http.push_response(400, r#"{"error":"No Facebook Page linked to this account."}"#);
    let outcome = manager.connect(Platform::Instagram).await;

    assert_eq!(outcome, ConnectOutcome::Rejected);
    let status = manager.status().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "No Facebook Page linked to this account.");
    assert_eq!(manager.link_state(Platform::Instagram), LinkState::Disconnected);
    // Failure does not trigger the refresh.
    assert_eq!(http.call_count(), 2);
}

#[tokio::test]
async fn instagram_direct_link_failure_without_body_uses_fallback_message() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;

    http.push_response(500, "");
    manager.connect(Platform::Instagram).await;

    assert_eq!(manager.status().unwrap().text, "Failed to connect Instagram.");
}

#[tokio::test]
async fn disconnect_is_gated_behind_confirmation() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;
    let calls_after_refresh = http.call_count();

    let outcome = manager.connect(Platform::Facebook).await;

    assert_eq!(outcome, ConnectOutcome::ConfirmRequested);
    assert_eq!(manager.pending_disconnect(), Some(Platform::Facebook));
    assert_eq!(manager.link_state(Platform::Facebook), LinkState::ConfirmPending);
    // Nothing is deleted until the user confirms.
    assert_eq!(http.call_count(), calls_after_refresh);
}

#[tokio::test]
async fn confirmed_disconnect_patches_only_the_target_entry() {
    let http = Arc::new(RecordingHttpClient::new());
    http.push_response(
        200,
        r#"[{"platform":"facebook","profilePictureUrl":"https://x/y.png","profileName":"Acme"},
            {"platform":"telegram","profilePictureUrl":"https://x/t.png","profileName":"acme_channel"}]"#,
    );
    let mut manager = manager_with(&http, StaticTokenProvider::new("tok-abc"));
    manager.refresh().await;

    let others_before: Vec<_> = manager
        .views()
        .iter()
        .filter(|v| v.platform != Platform::Facebook)
        .cloned()
        .collect();

    manager.request_disconnect(Platform::Facebook);
    http.push_response(204, "");
    let disconnected = manager.confirm_disconnect().await;
    assert!(disconnected);

    let calls = http.calls();
    assert_eq!(calls.last().unwrap().method, "DELETE");
    assert_eq!(
        calls.last().unwrap().url,
        format!("{}/api/social-accounts/facebook", BASE)
    );

    let facebook = manager.view(Platform::Facebook).unwrap();
    assert!(!facebook.connected);
    assert_eq!(facebook.avatar_url, None);
    assert_eq!(facebook.account_name, "");

    let others_after: Vec<_> = manager
        .views()
        .iter()
        .filter(|v| v.platform != Platform::Facebook)
        .cloned()
        .collect();
    assert_eq!(others_before, others_after);

    assert_eq!(manager.pending_disconnect(), None);
    assert_eq!(
        manager.status().unwrap().text,
        "Facebook disconnected successfully."
    );
}

#[tokio::test]
async fn failed_disconnect_leaves_the_view_untouched() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;

    manager.request_disconnect(Platform::Facebook);
    http.push_response(500, r#"{"error":"Platform session expired."}"#);
    let disconnected = manager.confirm_disconnect().await;

    assert!(!disconnected);
    assert!(manager.view(Platform::Facebook).unwrap().connected);
    assert_eq!(manager.link_state(Platform::Facebook), LinkState::Connected);
    assert_eq!(manager.pending_disconnect(), None);
    assert_eq!(manager.status().unwrap().text, "Platform session expired.");
}

#[tokio::test]
async fn cancelling_clears_the_pending_target_without_network() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;
    let calls_after_refresh = http.call_count();

    manager.request_disconnect(Platform::Facebook);
    manager.cancel_disconnect();

    assert_eq!(manager.pending_disconnect(), None);
    assert_eq!(manager.link_state(Platform::Facebook), LinkState::Connected);
    assert_eq!(http.call_count(), calls_after_refresh);
}

#[tokio::test]
async fn confirm_without_pending_target_is_a_no_op() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;
    let calls_after_refresh = http.call_count();

    let disconnected = manager.confirm_disconnect().await;

    assert!(!disconnected);
    assert_eq!(http.call_count(), calls_after_refresh);
}

#[tokio::test]
async fn disconnect_request_on_unconnected_platform_is_ignored() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = loaded_manager(&http).await;

    manager.request_disconnect(Platform::TikTok);

    assert_eq!(manager.pending_disconnect(), None);
    assert_eq!(manager.link_state(Platform::TikTok), LinkState::Disconnected);
}

#[tokio::test(start_paused = true)]
async fn status_message_expires_after_five_seconds() {
    let http = Arc::new(RecordingHttpClient::new());
    let mut manager = manager_with(&http, StaticTokenProvider::missing());

    manager.connect(Platform::Facebook).await;
    assert!(manager.status().is_some());

    tokio::time::sleep(std::time::Duration::from_millis(4900)).await;
    assert!(manager.status().is_some());

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert!(manager.status().is_none());
}
