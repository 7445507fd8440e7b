//! Account information (`action=index`).

use crate::client::GazelleClient;
use crate::error::Result;
use serde::Deserialize;

/// The logged-in user's account summary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountResponse {
    pub username: String,
    pub id: i64,
    pub auth_key: String,
    pub pass_key: String,
    pub notifications: AccountNotifications,
    #[serde(rename = "userstats")]
    pub user_stats: UserStats,
}

/// Unread counters shown on the index page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountNotifications {
    pub messages: i64,
    pub notifications: i64,
    // The API misspells this field; mirror it on the wire.
    #[serde(rename = "newAnnouncment")]
    pub new_announcement: bool,
    pub new_blog: bool,
}

/// Upload/download statistics for the logged-in user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub uploaded: i64,
    pub downloaded: i64,
    pub ratio: f64,
    pub required_ratio: f64,
    pub class: String,
}

impl GazelleClient {
    /// Fetch the logged-in user's account summary.
    ///
    /// This is also the call that populates the session identity right after
    /// login.
    pub async fn account(&self) -> Result<AccountResponse> {
        self.ajax("index", &[]).await
    }
}
