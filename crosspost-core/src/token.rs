// File: crosspost-core/src/token.rs
//
// The bearer token is written by the login flow and only read here. The
// production provider keeps it in the OS keyring under a fixed
// service/account pair; tests inject a static provider instead.

use crosspost_common::traits::TokenProvider;
use crate::Error;

pub const KEYRING_SERVICE: &str = "crosspost";
pub const KEYRING_ACCOUNT: &str = "access-token";

/// Reads the session token from the OS keyring.
pub struct KeyringTokenProvider {
    entry: keyring::Entry,
}

impl KeyringTokenProvider {
    pub fn new() -> Result<Self, Error> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_ACCOUNT)?;
        Ok(Self { entry })
    }
}

impl TokenProvider for KeyringTokenProvider {
    fn access_token(&self) -> Result<String, Error> {
        match self.entry.get_password() {
            Ok(token) if !token.is_empty() => Ok(token),
            Ok(_) => Err(Error::Auth("access token not found".into())),
            Err(keyring::Error::NoEntry) => Err(Error::Auth("access token not found".into())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Fixed token (or fixed absence of one). Used by tests and by the
/// `--token` override on the TUI binary.
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    pub fn missing() -> Self {
        Self { token: None }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Result<String, Error> {
        self.token
            .clone()
            .ok_or_else(|| Error::Auth("access token not found".into()))
    }
}
