//! Torrent, request, and user search (`action=browse` / `requests` /
//! `usersearch`).

use crate::client::GazelleClient;
use crate::envelope::owned_params;
use crate::error::Result;
use crate::types::ArtistCredit;
use serde::Deserialize;

/// One page of torrent search results, grouped by release.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorrentSearchResponse {
    pub current_page: i64,
    pub pages: i64,
    pub results: Vec<TorrentSearchGroup>,
}

/// A release group matching a torrent search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorrentSearchGroup {
    pub group_id: i64,
    pub group_name: String,
    pub artist: String,
    pub tags: Vec<String>,
    pub bookmarked: bool,
    pub vanity_house: bool,
    pub group_year: i64,
    pub release_type: String,
    pub group_time: String,
    pub max_size: i64,
    pub total_snatched: i64,
    pub total_seeders: i64,
    pub total_leechers: i64,
    pub torrents: Vec<TorrentSearchEntry>,
}

/// A torrent within a search result group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorrentSearchEntry {
    pub torrent_id: i64,
    pub edition_id: i64,
    pub artists: Vec<ArtistCredit>,
    pub remastered: bool,
    pub remaster_year: i64,
    pub remaster_catalogue_number: String,
    pub remaster_title: String,
    pub media: String,
    pub encoding: String,
    pub format: String,
    pub has_log: bool,
    pub log_score: i64,
    pub has_cue: bool,
    pub scene: bool,
    pub vanity_house: bool,
    pub file_count: i64,
    pub time: String,
    pub size: i64,
    pub snatches: i64,
    pub seeders: i64,
    pub leechers: i64,
    pub is_freeleech: bool,
    pub is_neutral_leech: bool,
    pub is_personal_freeleech: bool,
    pub can_use_token: bool,
}

/// One page of request search results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestSearchResponse {
    pub current_page: i64,
    pub pages: i64,
    pub results: Vec<RequestSearchEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestSearchEntry {
    pub request_id: i64,
    pub requestor_id: i64,
    pub requestor_name: String,
    pub time_added: String,
    pub last_vote: String,
    pub vote_count: i64,
    pub bounty: i64,
    pub category_id: i64,
    pub category_name: String,
    pub artists: Vec<Vec<ArtistCredit>>,
    pub title: String,
    pub year: i64,
    pub image: String,
    pub description: String,
    pub catalogue_number: String,
    pub release_type: String,
    pub bitrate_list: String,
    pub format_list: String,
    pub media_list: String,
    pub log_cue: String,
    pub is_filled: bool,
    pub filler_id: i64,
    pub filler_name: String,
    pub torrent_id: i64,
    pub time_filled: String,
}

/// One page of user search results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSearchResponse {
    pub current_page: i64,
    pub pages: i64,
    pub results: Vec<UserSearchEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSearchEntry {
    pub user_id: i64,
    pub username: String,
    pub donor: bool,
    pub warned: bool,
    pub enabled: bool,
    pub class: String,
}

impl GazelleClient {
    /// Search torrents. Extra params are the browse filters (`year`,
    /// `format`, `page`, ...).
    pub async fn search_torrents(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<TorrentSearchResponse> {
        let mut pairs = owned_params(params);
        pairs.push(("searchstr", query.to_string()));
        self.ajax("browse", &pairs).await
    }

    /// Search requests.
    pub async fn search_requests(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<RequestSearchResponse> {
        let mut pairs = owned_params(params);
        pairs.push(("search", query.to_string()));
        self.ajax("requests", &pairs).await
    }

    /// Search users by name.
    pub async fn search_users(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<UserSearchResponse> {
        let mut pairs = owned_params(params);
        pairs.push(("search", query.to_string()));
        self.ajax("usersearch", &pairs).await
    }
}
