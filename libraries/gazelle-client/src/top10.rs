//! Top-10 listings (`action=top10` with `type=torrents` / `tags` / `users`).

use crate::client::GazelleClient;
use crate::envelope::owned_params;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One captioned section of a top-10 listing.
///
/// The `response` payload of `action=top10` is an array of these sections
/// (e.g. "Most Active Torrents Uploaded in the Past Day", "... Week").
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopSection<T> {
    pub caption: String,
    pub tag: String,
    pub limit: i64,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopTorrent {
    pub torrent_id: i64,
    pub group_id: i64,
    pub artist: String,
    pub group_name: String,
    pub group_category: i64,
    pub group_year: i64,
    pub remaster_title: String,
    pub format: String,
    pub encoding: String,
    pub has_log: bool,
    pub has_cue: bool,
    pub media: String,
    pub scene: bool,
    pub year: i64,
    pub tags: Vec<String>,
    pub snatched: i64,
    pub seeders: i64,
    pub leechers: i64,
    pub data: i64,
    pub size: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopTag {
    pub name: String,
    pub uses: i64,
    pub pos_votes: i64,
    pub neg_votes: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopUser {
    pub id: i64,
    pub username: String,
    pub uploaded: i64,
    pub up_speed: f64,
    pub downloaded: i64,
    pub down_speed: f64,
    pub num_uploads: i64,
    pub join_date: String,
}

impl GazelleClient {
    async fn top10<T>(&self, kind: &str, params: &[(&str, &str)]) -> Result<Vec<TopSection<T>>>
    where
        T: DeserializeOwned + Default,
    {
        let mut query = owned_params(params);
        query.push(("type", kind.to_string()));
        self.ajax("top10", &query).await
    }

    /// Fetch the top-10 torrent sections. Accepts `limit` as an extra param.
    pub async fn top_torrents(&self, params: &[(&str, &str)]) -> Result<Vec<TopSection<TopTorrent>>> {
        self.top10("torrents", params).await
    }

    /// Fetch the top-10 tag sections.
    pub async fn top_tags(&self, params: &[(&str, &str)]) -> Result<Vec<TopSection<TopTag>>> {
        self.top10("tags", params).await
    }

    /// Fetch the top-10 user sections.
    pub async fn top_users(&self, params: &[(&str, &str)]) -> Result<Vec<TopSection<TopUser>>> {
        self.top10("users", params).await
    }
}
