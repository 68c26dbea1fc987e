// File: crosspost-common/src/models/account.rs

use serde::{Deserialize, Serialize};

use crate::models::platform::Platform;

/// One backend-persisted link between the current user and a platform's
/// external identity, as returned by `GET /api/social-accounts`. The backend
/// owns these wholesale; this crate never mutates them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConnectedAccount {
    pub platform: String,
    #[serde(rename = "profilePictureUrl", default)]
    pub profile_picture_url: Option<String>,
    #[serde(rename = "profileName", default)]
    pub profile_name: Option<String>,
}

/// The reconciled, UI-facing representation of one platform's connection
/// status. Exactly one per catalog entry, rebuilt wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub platform: Platform,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub connected: bool,
    pub avatar_url: Option<String>,
    pub account_name: String,
}

impl AccountView {
    /// Clears the connection fields in place, leaving identity fields alone.
    /// Used for the optimistic patch after a confirmed disconnect.
    pub fn clear_connection(&mut self) {
        self.connected = false;
        self.avatar_url = None;
        self.account_name = String::new();
    }
}
