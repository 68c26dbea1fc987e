// File: crosspost-core/src/accounts/fetcher.rs

use std::sync::Arc;

use crosspost_common::models::ConnectedAccount;
use crosspost_common::traits::TokenProvider;
use serde_json::Value;
use tracing::warn;

use crate::http::HttpClient;
use crate::Error;

/// Reads the current user's connected accounts from the backend. Idempotent;
/// used for the initial load and for the refresh after an in-app connect.
pub struct AccountFetcher {
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenProvider>,
    base_url: String,
}

impl AccountFetcher {
    pub fn new(http: Arc<dyn HttpClient>, tokens: Arc<dyn TokenProvider>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            tokens,
            base_url: base_url.into(),
        }
    }

    /// `GET /api/social-accounts` with bearer auth.
    ///
    /// A missing token fails with `Error::Auth` before any request is made.
    /// Transport failures and non-2xx statuses are `Error::Fetch`. A body
    /// that is valid JSON but not an array deserializes to an empty list
    /// rather than an error, matching the backend's loose contract.
    pub async fn fetch_connected_accounts(&self) -> Result<Vec<ConnectedAccount>, Error> {
        let token = self.tokens.access_token()?;
        let url = format!("{}/api/social-accounts", self.base_url);

        let response = self
            .http
            .get(url, Some(token))
            .await
            .map_err(|e| Error::Fetch(format!("social-accounts request failed: {}", e)))?;

        if !response.is_success() {
            return Err(Error::Fetch(format!(
                "social-accounts request returned status {}",
                response.status
            )));
        }

        let value: Value = serde_json::from_str(&response.body).unwrap_or(Value::Null);
        let accounts = match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<ConnectedAccount>(item) {
                    Ok(account) => Some(account),
                    Err(e) => {
                        warn!("skipping malformed connected-account entry: {}", e);
                        None
                    }
                })
                .collect(),
            _ => {
                warn!("social-accounts response was not an array; treating as no accounts");
                Vec::new()
            }
        };

        Ok(accounts)
    }
}
