// File: crosspost-common/src/models/platform.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    YouTube,
    Twitter,
    Mastodon,
    Threads,
    Telegram,
    TikTok,
}

impl Platform {
    /// All supported platforms, in catalog (display) order.
    pub const ALL: [Platform; 8] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::YouTube,
        Platform::Twitter,
        Platform::Mastodon,
        Platform::Threads,
        Platform::Telegram,
        Platform::TikTok,
    ];

    /// The lower-cased key the backend uses in URLs and account records.
    pub fn backend_key(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::YouTube => "youtube",
            Platform::Twitter => "twitter",
            Platform::Mastodon => "mastodon",
            Platform::Threads => "threads",
            Platform::Telegram => "telegram",
            Platform::TikTok => "tiktok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.backend_key())
    }
}

impl FromStr for Platform {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "youtube" => Ok(Platform::YouTube),
            "twitter" => Ok(Platform::Twitter),
            "mastodon" => Ok(Platform::Mastodon),
            "threads" => Ok(Platform::Threads),
            "telegram" => Ok(Platform::Telegram),
            "tiktok" => Ok(Platform::TikTok),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

/// How a platform's connect flow is driven. Adding a platform is a catalog
/// data change, not a new code path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectStrategy {
    /// Browser navigation to `{base}/auth/{key}/login?token={token}`.
    Redirect,
    /// Same as `Redirect`, with a federated-instance query parameter.
    RedirectWithInstance { instance: &'static str },
    /// Authenticated empty-body POST to `{base}/connect/{key}`, then re-fetch.
    DirectLink,
    /// No connect flow wired up yet.
    Unsupported,
}

/// One static catalog entry. The set is fixed at build time.
#[derive(Debug, Clone)]
pub struct PlatformDefinition {
    pub platform: Platform,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub strategy: ConnectStrategy,
}
