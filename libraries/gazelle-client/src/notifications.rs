//! Torrent notifications, site announcements, and forum subscriptions
//! (`action=notifications` / `announcements` / `subscriptions`).

use crate::client::GazelleClient;
use crate::envelope::owned_params;
use crate::error::Result;
use serde::Deserialize;

/// One page of torrent notifications.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationsResponse {
    pub current_pages: i64,
    pub pages: i64,
    pub num_new: i64,
    pub results: Vec<NotificationTorrent>,
}

/// A torrent that matched one of the user's notification filters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationTorrent {
    pub id: i64,
    pub unread: bool,
    pub torrent_id: i64,
    pub group_id: i64,
    pub group_name: String,
    pub group_category_id: i64,
    pub torrent_tags: String,
    pub size: i64,
    pub file_count: i64,
    pub format: String,
    pub encoding: String,
    pub media: String,
    pub scene: bool,
    pub group_year: i64,
    pub remaster_year: i64,
    pub remaster_title: String,
    pub snatched: i64,
    pub seeders: i64,
    pub leechers: i64,
    pub notification_time: String,
    pub has_log: bool,
    pub has_cue: bool,
    pub log_score: i64,
    pub free_torrent: bool,
    pub log_in_db: bool,
    pub reported: bool,
}

/// News posts and blog posts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnouncementsResponse {
    pub announcements: Vec<Announcement>,
    pub blog_posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Announcement {
    pub news_id: i64,
    pub title: String,
    pub bb_body: String,
    pub body: String,
    pub news_time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub blog_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub blog_time: String,
    pub thread_id: i64,
}

/// Forum threads the user is subscribed to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionsResponse {
    pub threads: Vec<SubscribedThread>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscribedThread {
    pub forum_id: i64,
    pub forum_name: String,
    pub thread_id: i64,
    pub thread_title: String,
    pub post_id: i64,
    pub last_post_id: i64,
    pub locked: bool,
    pub new: bool,
}

impl GazelleClient {
    /// List torrent notifications. Accepts extra params such as `page`.
    pub async fn notifications(&self, params: &[(&str, &str)]) -> Result<NotificationsResponse> {
        self.ajax("notifications", &owned_params(params)).await
    }

    /// Fetch site news and blog posts.
    pub async fn announcements(&self) -> Result<AnnouncementsResponse> {
        self.ajax("announcements", &[]).await
    }

    /// List subscribed forum threads. Accepts `showunread` as an extra param.
    pub async fn subscriptions(&self, params: &[(&str, &str)]) -> Result<SubscriptionsResponse> {
        self.ajax("subscriptions", &owned_params(params)).await
    }
}
