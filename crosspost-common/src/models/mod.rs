// File: crosspost-common/src/models/mod.rs
pub mod account;
pub mod platform;
pub mod user;

pub use account::{AccountView, ConnectedAccount};
pub use platform::{ConnectStrategy, Platform, PlatformDefinition};
pub use user::UserProfile;
