//! Gazelle Tracker Client
//!
//! HTTP client library for the JSON API exposed by Gazelle-style private
//! music trackers.
//!
//! # Features
//!
//! - **Session lifecycle**: cookie-backed login/logout, identity capture
//!   (username, auth key, pass key)
//! - **Typed endpoints**: account, mailbox, forums, bookmarks, artists,
//!   torrents, requests, search, top-10 listings
//! - **One pipeline**: every operation is the same generic
//!   build-query → fetch → decode-envelope → validate-status cycle,
//!   parameterized per endpoint
//!
//! # Example
//!
//! ```ignore
//! use gazelle_client::{GazelleClient, TrackerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GazelleClient::new(TrackerConfig::new("https://tracker.example.com"))?;
//!     client.login("user", "password").await?;
//!
//!     let group = client.torrent_group(42, &[]).await?;
//!     println!("{} has {} torrents", group.group.name, group.torrents.len());
//!
//!     let link = client.download_url(group.torrents[0].id).await?;
//!     println!("Download: {link}");
//!
//!     client.logout().await;
//!     Ok(())
//! }
//! ```

mod account;
mod artist;
mod bookmarks;
mod client;
mod envelope;
mod error;
mod forum;
mod mailbox;
mod notifications;
mod search;
mod top10;
mod torrents;
mod types;

// Re-export main types
pub use client::GazelleClient;
pub use envelope::{Envelope, StatusMode};
pub use error::{Result, TrackerClientError};
pub use types::{ArtistCredit, Group, Identity, MusicInfo, Torrent, TrackerConfig};

// Re-export endpoint payload types
pub use account::{AccountNotifications, AccountResponse, UserStats};
pub use artist::{
    ArtistRelease, ArtistRequest, ArtistResponse, ArtistSimilar, ArtistStatistics, ArtistTag,
    SimilarArtist,
};
pub use bookmarks::{
    ArtistBookmark, ArtistBookmarksResponse, TorrentBookmark, TorrentBookmarksResponse,
};
pub use forum::{
    ForumCategoriesResponse, ForumCategory, ForumPost, ForumResponse, ForumRule, ForumSummary,
    ForumThreadSummary, PollAnswer, PostAuthor, ThreadPoll, ThreadResponse,
};
pub use mailbox::{ConversationMessage, ConversationResponse, MailboxMessage, MailboxResponse};
pub use notifications::{
    Announcement, AnnouncementsResponse, BlogPost, NotificationTorrent, NotificationsResponse,
    SubscribedThread, SubscriptionsResponse,
};
pub use search::{
    RequestSearchEntry, RequestSearchResponse, TorrentSearchEntry, TorrentSearchGroup,
    TorrentSearchResponse, UserSearchEntry, UserSearchResponse,
};
pub use top10::{TopSection, TopTag, TopTorrent, TopUser};
pub use torrents::{RequestContributor, RequestResponse, TorrentGroupResponse, TorrentResponse};
