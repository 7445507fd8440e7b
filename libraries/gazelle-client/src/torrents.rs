//! Torrent, torrent-group, and request lookups (`action=torrent` /
//! `torrentgroup` / `request`).

use crate::client::GazelleClient;
use crate::envelope::owned_params;
use crate::error::Result;
use crate::types::{Group, Torrent};
use serde::Deserialize;

/// A single torrent with its release group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorrentResponse {
    pub group: Group,
    pub torrent: Torrent,
}

/// A release group with all of its torrents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorrentGroupResponse {
    pub group: Group,
    pub torrents: Vec<Torrent>,
}

/// A request page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestResponse {
    pub request_id: i64,
    pub requestor_id: i64,
    pub requestor_name: String,
    pub time_added: String,
    pub can_edit: bool,
    pub can_vote: bool,
    pub minimum_vote: i64,
    pub vote_count: i64,
    pub last_vote: String,
    pub top_contributors: Vec<RequestContributor>,
    pub total_bounty: i64,
    pub category_id: i64,
    pub category_name: String,
    pub title: String,
    pub year: i64,
    pub image: String,
    pub description: String,
    pub catalogue_number: String,
    pub release_type: i64,
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

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContributor {
    pub user_id: i64,
    pub user_name: String,
    pub bounty: i64,
}

impl GazelleClient {
    /// Fetch a single torrent by ID.
    pub async fn torrent(&self, id: i64, params: &[(&str, &str)]) -> Result<TorrentResponse> {
        let mut query = owned_params(params);
        query.push(("id", id.to_string()));
        self.ajax("torrent", &query).await
    }

    /// Fetch a release group and all of its torrents.
    pub async fn torrent_group(
        &self,
        id: i64,
        params: &[(&str, &str)],
    ) -> Result<TorrentGroupResponse> {
        let mut query = owned_params(params);
        query.push(("id", id.to_string()));
        self.ajax("torrentgroup", &query).await
    }

    /// Fetch a request page. Accepts `page` for the comment listing.
    pub async fn request(&self, id: i64, params: &[(&str, &str)]) -> Result<RequestResponse> {
        let mut query = owned_params(params);
        query.push(("id", id.to_string()));
        self.ajax("request", &query).await
    }
}
