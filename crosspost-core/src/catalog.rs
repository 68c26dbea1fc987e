// File: crosspost-core/src/catalog.rs

use crosspost_common::models::{ConnectStrategy, Platform, PlatformDefinition};

/// Default Mastodon instance for the federated login redirect.
pub const DEFAULT_MASTODON_INSTANCE: &str = "mastodon.social";

/// The supported platforms, in display order. Connect behavior is data on
/// the entry, so wiring up a new platform is a change here and nowhere else.
static CATALOG: [PlatformDefinition; 8] = [
    PlatformDefinition {
        platform: Platform::Facebook,
        display_name: "Facebook",
        icon: "fb",
        strategy: ConnectStrategy::Redirect,
    },
    PlatformDefinition {
        platform: Platform::Instagram,
        display_name: "Instagram",
        icon: "ig",
        strategy: ConnectStrategy::DirectLink,
    },
    PlatformDefinition {
        platform: Platform::YouTube,
        display_name: "YouTube",
        icon: "yt",
        strategy: ConnectStrategy::Redirect,
    },
    PlatformDefinition {
        platform: Platform::Twitter,
        display_name: "Twitter (X)",
        icon: "tw",
        strategy: ConnectStrategy::Redirect,
    },
    PlatformDefinition {
        platform: Platform::Mastodon,
        display_name: "Mastodon",
        icon: "ma",
        strategy: ConnectStrategy::RedirectWithInstance { instance: DEFAULT_MASTODON_INSTANCE },
    },
    PlatformDefinition {
        platform: Platform::Threads,
        display_name: "Threads",
        icon: "th",
        strategy: ConnectStrategy::Redirect,
    },
    PlatformDefinition {
        platform: Platform::Telegram,
        display_name: "Telegram",
        icon: "tg",
        strategy: ConnectStrategy::Redirect,
    },
    PlatformDefinition {
        platform: Platform::TikTok,
        display_name: "TikTok",
        icon: "tt",
        strategy: ConnectStrategy::Redirect,
    },
];

pub fn catalog() -> &'static [PlatformDefinition] {
    &CATALOG
}

pub fn definition(platform: Platform) -> &'static PlatformDefinition {
    CATALOG
        .iter()
        .find(|def| def.platform == platform)
        .expect("every platform has a catalog entry")
}
