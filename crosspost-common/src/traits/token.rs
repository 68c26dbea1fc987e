// File: crosspost-common/src/traits/token.rs

use crate::Error;

/// Source of the opaque bearer token proving the current user's session.
///
/// The token lives in durable local storage owned by the login flow; this
/// crate only reads it. `access_token` returns `Error::Auth` when no token
/// is stored, and callers must not attempt the network call in that case.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> Result<String, Error>;
}
