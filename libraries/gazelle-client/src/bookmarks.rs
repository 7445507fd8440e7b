//! Bookmarked artists and torrent groups (`action=bookmarks`).

use crate::client::GazelleClient;
use crate::error::Result;
use crate::types::Torrent;
use serde::Deserialize;

/// Bookmarked artists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistBookmarksResponse {
    pub artists: Vec<ArtistBookmark>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistBookmark {
    pub artist_id: i64,
    pub artist_name: String,
}

/// Bookmarked torrent groups with their torrents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorrentBookmarksResponse {
    pub bookmarks: Vec<TorrentBookmark>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorrentBookmark {
    pub id: i64,
    pub name: String,
    pub year: i64,
    pub record_label: String,
    pub catalogue_number: String,
    pub tag_list: String,
    // The API misspells this field; mirror it on the wire.
    #[serde(rename = "releastType")]
    pub release_type: String,
    pub vanity_house: bool,
    pub image: String,
    pub torrents: Vec<Torrent>,
}

impl GazelleClient {
    /// List bookmarked artists.
    pub async fn artist_bookmarks(&self) -> Result<ArtistBookmarksResponse> {
        self.ajax("bookmarks", &[("type", "artists".to_string())])
            .await
    }

    /// List bookmarked torrent groups.
    pub async fn torrent_bookmarks(&self) -> Result<TorrentBookmarksResponse> {
        self.ajax("bookmarks", &[("type", "torrents".to_string())])
            .await
    }
}
