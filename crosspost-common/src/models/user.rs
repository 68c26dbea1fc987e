// File: crosspost-common/src/models/user.rs

use serde::{Deserialize, Serialize};

/// The current user's profile as served by `GET /api/profile`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "profilePictureUrl", default)]
    pub profile_picture_url: Option<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}
