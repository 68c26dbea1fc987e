// File: crosspost-core/src/analytics.rs

use std::sync::Arc;

use crosspost_common::traits::TokenProvider;
use serde_json::Value;

use crate::http::HttpClient;
use crate::Error;

/// Per-post analytics as the backend reports them: opaque metric names with
/// values still JSON (counts, nested breakdowns).
pub type PostAnalytics = Vec<(String, Value)>;

/// Reads aggregated analytics for one published Facebook post.
pub struct AnalyticsFetcher {
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenProvider>,
    base_url: String,
}

impl AnalyticsFetcher {
    pub fn new(http: Arc<dyn HttpClient>, tokens: Arc<dyn TokenProvider>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            tokens,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_post_analytics(&self, post_id: &str) -> Result<PostAnalytics, Error> {
        let token = self.tokens.access_token()?;
        let url = format!(
            "{}/api/facebook/analytics?post_id={}",
            self.base_url,
            urlencoding::encode(post_id)
        );

        let response = self
            .http
            .get(url, Some(token))
            .await
            .map_err(|e| Error::Fetch(format!("analytics request failed: {}", e)))?;

        if !response.is_success() {
            return Err(Error::Fetch(format!(
                "analytics request returned status {}",
                response.status
            )));
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
            _ => Err(Error::Fetch("analytics not available".into())),
        }
    }
}
