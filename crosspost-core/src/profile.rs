// File: crosspost-core/src/profile.rs

use std::sync::Arc;

use crosspost_common::models::UserProfile;
use crosspost_common::traits::TokenProvider;

use crate::http::HttpClient;
use crate::Error;

/// Reads the current user's profile (`GET /api/profile`).
pub struct ProfileFetcher {
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenProvider>,
    base_url: String,
}

impl ProfileFetcher {
    pub fn new(http: Arc<dyn HttpClient>, tokens: Arc<dyn TokenProvider>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            tokens,
            base_url: base_url.into(),
        }
    }

    /// A 401 means the stored token is invalid or expired; that is an auth
    /// failure for the caller to surface, not a fetch failure.
    pub async fn fetch_profile(&self) -> Result<UserProfile, Error> {
        let token = self.tokens.access_token()?;
        let url = format!("{}/api/profile", self.base_url);

        let response = self
            .http
            .get(url, Some(token))
            .await
            .map_err(|e| Error::Fetch(format!("profile request failed: {}", e)))?;

        if response.status == 401 {
            return Err(Error::Auth("access token is invalid or expired".into()));
        }
        if !response.is_success() {
            return Err(Error::Fetch(format!(
                "profile request returned status {}",
                response.status
            )));
        }

        let profile = serde_json::from_str(&response.body)?;
        Ok(profile)
    }
}
