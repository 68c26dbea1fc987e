// File: crosspost-core/src/accounts/reconcile.rs

use crosspost_common::models::{AccountView, ConnectedAccount, PlatformDefinition};

/// Merges the static catalog with the backend's connected-account list into
/// one view per catalog entry. Pure: no I/O, identical output for identical
/// input.
///
/// Matching is case-insensitive on the backend key. The backend should send
/// at most one record per platform; if it sends duplicates the first one
/// wins (unspecified upstream contract, preserved as-is).
pub fn reconcile(definitions: &[PlatformDefinition], accounts: &[ConnectedAccount]) -> Vec<AccountView> {
    definitions
        .iter()
        .map(|def| {
            let account = accounts
                .iter()
                .find(|acc| acc.platform.to_lowercase() == def.platform.backend_key());

            AccountView {
                platform: def.platform,
                display_name: def.display_name,
                icon: def.icon,
                connected: account.is_some(),
                avatar_url: account.and_then(|acc| normalize_avatar(acc.profile_picture_url.as_deref())),
                account_name: account
                    .and_then(|acc| acc.profile_name.clone())
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// The backend serializes a missing avatar as JSON null, an empty string,
/// or the literal string "null". All of them mean no avatar.
fn normalize_avatar(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(url) if !url.is_empty() && url != "null" => Some(url.to_string()),
        _ => None,
    }
}
