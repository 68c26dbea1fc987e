// File: crosspost-core/src/accounts/manager.rs
//
// Connect/disconnect orchestration. Per platform the lifecycle is
//
//   Disconnected -> Pending -> Connected        (connect)
//   Connected -> ConfirmPending -> Disconnected (disconnect, confirmed)
//   ConfirmPending -> Connected                 (disconnect, cancelled)
//
// Disconnect never reaches the backend without the explicit confirm step.
// User-facing failures land on the status banner; none of them tear down
// the manager or its last known-good view state.

use std::collections::HashMap;
use std::sync::Arc;

use crosspost_common::models::{AccountView, ConnectStrategy, Platform, PlatformDefinition};
use crosspost_common::traits::TokenProvider;
use serde_json::Value;
use tracing::{info, warn};

use crate::accounts::fetcher::AccountFetcher;
use crate::accounts::reconcile::reconcile;
use crate::catalog;
use crate::config::ApiConfig;
use crate::http::HttpClient;
use crate::status::{StatusBanner, StatusMessage};
use crate::Error;

const MSG_LOGIN_REQUIRED: &str = "You must be logged in.";
const MSG_FACEBOOK_FIRST: &str = "Please connect your Facebook Page first before connecting Instagram.";
const MSG_TOKEN_MISSING: &str = "Access token not found.";
const MSG_FETCH_FAILED: &str = "Failed to fetch social accounts.";

/// Explicit per-platform connection state. `ConfirmPending` is only
/// reachable from `Connected`, so a confirmation can never be pending for a
/// platform that is not linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Disconnected,
    Pending,
    Connected,
    ConfirmPending,
}

/// What a connect attempt asks of the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// Navigate the browser to this authorization URL.
    Redirect(String),
    /// In-app link completed and the account list was refreshed.
    Linked,
    /// The platform was already connected; confirmation is now pending.
    ConfirmRequested,
    /// Nothing happened; the banner carries the reason.
    Rejected,
}

pub struct ConnectionManager {
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenProvider>,
    base_url: String,
    fetcher: AccountFetcher,
    views: Vec<AccountView>,
    states: HashMap<Platform, LinkState>,
    pending_disconnect: Option<Platform>,
    banner: StatusBanner,
    loaded: bool,
}

impl ConnectionManager {
    pub fn new(http: Arc<dyn HttpClient>, tokens: Arc<dyn TokenProvider>, config: &ApiConfig) -> Self {
        let fetcher = AccountFetcher::new(Arc::clone(&http), Arc::clone(&tokens), config.base_url());
        let views = reconcile(catalog::catalog(), &[]);
        let states = views
            .iter()
            .map(|view| (view.platform, LinkState::Disconnected))
            .collect();
        Self {
            http,
            tokens,
            base_url: config.base_url().to_string(),
            fetcher,
            views,
            states,
            pending_disconnect: None,
            banner: StatusBanner::new(),
            loaded: false,
        }
    }

    /// Re-reads the connected accounts and rebuilds the view list wholesale.
    /// On failure the previous views survive; on an initial-load failure the
    /// catalog stays rendered with nothing connected.
    pub async fn refresh(&mut self) {
        match self.fetcher.fetch_connected_accounts().await {
            Ok(accounts) => {
                self.views = reconcile(catalog::catalog(), &accounts);
                self.loaded = true;
                self.sync_states();
            }
            Err(Error::Auth(_)) => {
                self.banner.error(MSG_TOKEN_MISSING);
            }
            Err(e) => {
                warn!("account refresh failed: {}", e);
                self.banner.error(MSG_FETCH_FAILED);
            }
        }
    }

    /// Drives the card action for one platform. Connecting an
    /// already-connected platform opens the disconnect confirmation instead.
    pub async fn connect(&mut self, platform: Platform) -> ConnectOutcome {
        let token = match self.tokens.access_token() {
            Ok(token) => token,
            Err(_) => {
                self.banner.error(MSG_LOGIN_REQUIRED);
                return ConnectOutcome::Rejected;
            }
        };

        if self.is_connected(platform) {
            self.request_disconnect(platform);
            return ConnectOutcome::ConfirmRequested;
        }

        // Instagram linking piggybacks on the Facebook Page credential, so
        // it is rejected up front while Facebook is unlinked.
        if platform == Platform::Instagram && !self.is_connected(Platform::Facebook) {
            self.banner.error(MSG_FACEBOOK_FIRST);
            return ConnectOutcome::Rejected;
        }

        let def = catalog::definition(platform);
        match &def.strategy {
            ConnectStrategy::DirectLink => {
                self.states.insert(platform, LinkState::Pending);
                match self.post_connect(def, &token).await {
                    Ok(()) => {
                        info!("linked {} via direct connect", platform);
                        self.banner
                            .success(format!("{} account connected successfully!", def.display_name));
                        self.refresh().await;
                        ConnectOutcome::Linked
                    }
                    Err(e) => {
                        self.states.insert(platform, LinkState::Disconnected);
                        self.banner.error(message_text(e));
                        ConnectOutcome::Rejected
                    }
                }
            }
            strategy => match login_redirect(&self.base_url, platform, strategy, &token) {
                Some(url) => {
                    self.states.insert(platform, LinkState::Pending);
                    ConnectOutcome::Redirect(url)
                }
                None => {
                    self.banner
                        .error(format!("Connect to {} is not yet implemented.", def.display_name));
                    ConnectOutcome::Rejected
                }
            },
        }
    }

    /// Records the confirmation target. No network traffic until
    /// `confirm_disconnect`.
    pub fn request_disconnect(&mut self, platform: Platform) {
        if !self.is_connected(platform) {
            return;
        }
        self.pending_disconnect = Some(platform);
        self.states.insert(platform, LinkState::ConfirmPending);
    }

    /// Issues the DELETE for the pending target. On success only that
    /// platform's view is patched; no full re-fetch. Always leaves no
    /// pending target behind.
    pub async fn confirm_disconnect(&mut self) -> bool {
        let Some(platform) = self.pending_disconnect.take() else {
            return false;
        };
        let def = catalog::definition(platform);

        let token = match self.tokens.access_token() {
            Ok(token) => token,
            Err(_) => {
                self.states.insert(platform, LinkState::Connected);
                self.banner.error(MSG_LOGIN_REQUIRED);
                return false;
            }
        };

        match self.delete_account(def, &token).await {
            Ok(()) => {
                if let Some(view) = self.views.iter_mut().find(|v| v.platform == platform) {
                    view.clear_connection();
                }
                self.states.insert(platform, LinkState::Disconnected);
                info!("disconnected {}", platform);
                self.banner
                    .success(format!("{} disconnected successfully.", def.display_name));
                true
            }
            Err(e) => {
                self.states.insert(platform, LinkState::Connected);
                self.banner.error(message_text(e));
                false
            }
        }
    }

    /// Drops the confirmation target without touching the backend.
    pub fn cancel_disconnect(&mut self) {
        if let Some(platform) = self.pending_disconnect.take() {
            self.states.insert(platform, LinkState::Connected);
        }
    }

    pub fn views(&self) -> &[AccountView] {
        &self.views
    }

    pub fn view(&self, platform: Platform) -> Option<&AccountView> {
        self.views.iter().find(|v| v.platform == platform)
    }

    pub fn link_state(&self, platform: Platform) -> LinkState {
        self.states
            .get(&platform)
            .copied()
            .unwrap_or(LinkState::Disconnected)
    }

    pub fn pending_disconnect(&self) -> Option<Platform> {
        self.pending_disconnect
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.banner.current()
    }

    /// True once an account fetch has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn is_connected(&self, platform: Platform) -> bool {
        self.view(platform).is_some_and(|v| v.connected)
    }

    /// Rebuilds the state map from the freshly reconciled views, keeping a
    /// still-valid confirmation target alive across the refresh.
    fn sync_states(&mut self) {
        self.states = self
            .views
            .iter()
            .map(|view| {
                let state = if view.connected {
                    LinkState::Connected
                } else {
                    LinkState::Disconnected
                };
                (view.platform, state)
            })
            .collect();
        if let Some(platform) = self.pending_disconnect {
            if self.is_connected(platform) {
                self.states.insert(platform, LinkState::ConfirmPending);
            } else {
                self.pending_disconnect = None;
            }
        }
    }

    async fn post_connect(&self, def: &PlatformDefinition, token: &str) -> Result<(), Error> {
        let url = format!("{}/connect/{}", self.base_url, def.platform.backend_key());
        let fallback = format!("Failed to connect {}.", def.display_name);
        let response = match self.http.post(url, Some(token.to_string()), String::new()).await {
            Ok(response) => response,
            Err(e) => {
                warn!("connect request for {} failed: {}", def.platform, e);
                return Err(Error::Mutation(fallback));
            }
        };
        if response.is_success() {
            Ok(())
        } else {
            Err(Error::Mutation(backend_error(&response.body).unwrap_or(fallback)))
        }
    }

    async fn delete_account(&self, def: &PlatformDefinition, token: &str) -> Result<(), Error> {
        let url = format!(
            "{}/api/social-accounts/{}",
            self.base_url,
            def.platform.backend_key()
        );
        let fallback = format!("Failed to disconnect {}.", def.display_name);
        let response = match self.http.delete(url, Some(token.to_string())).await {
            Ok(response) => response,
            Err(e) => {
                warn!("disconnect request for {} failed: {}", def.platform, e);
                return Err(Error::Mutation(fallback));
            }
        };
        if response.is_success() {
            Ok(())
        } else {
            Err(Error::Mutation(backend_error(&response.body).unwrap_or(fallback)))
        }
    }
}

/// Authorization URL for browser-driven connect flows. `None` for
/// strategies that have no login redirect wired up.
fn login_redirect(base_url: &str, platform: Platform, strategy: &ConnectStrategy, token: &str) -> Option<String> {
    match strategy {
        ConnectStrategy::Redirect => Some(format!(
            "{}/auth/{}/login?token={}",
            base_url,
            platform.backend_key(),
            token
        )),
        ConnectStrategy::RedirectWithInstance { instance } => Some(format!(
            "{}/auth/{}/login?instance={}&token={}",
            base_url,
            platform.backend_key(),
            urlencoding::encode(instance),
            token
        )),
        ConnectStrategy::DirectLink | ConnectStrategy::Unsupported => None,
    }
}

/// The backend reports mutation failures as `{"error": "..."}`.
fn backend_error(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

fn message_text(e: Error) -> String {
    match e {
        Error::Mutation(msg) | Error::Auth(msg) | Error::Fetch(msg) => msg,
        other => other.to_string(),
    }
}
