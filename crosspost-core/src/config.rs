// File: crosspost-core/src/config.rs

use tracing::warn;

/// Environment variable that overrides the backend origin.
pub const BASE_URL_ENV: &str = "CROSSPOST_API_URL";

/// Backend origin used when no override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Builds a config from an explicit origin. Trailing slashes are
    /// stripped so joining with request paths stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        if url::Url::parse(&base_url).is_err() {
            warn!("'{}' does not parse as a URL; backend calls will likely fail", base_url);
        }
        Self { base_url }
    }

    /// Reads `CROSSPOST_API_URL`, falling back to the localhost default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
