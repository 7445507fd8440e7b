//! Artist pages (`action=artist`) and the similar-artists map
//! (`action=similar_artists`).

use crate::client::GazelleClient;
use crate::envelope::owned_params;
use crate::error::Result;
use crate::types::Torrent;
use serde::Deserialize;

/// A full artist page: metadata, statistics, and every release group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistResponse {
    pub id: i64,
    pub name: String,
    pub notifications_enabled: bool,
    pub has_bookmarked: bool,
    pub image: String,
    pub body: String,
    pub vanity_house: bool,
    pub tags: Vec<ArtistTag>,
    pub similar_artists: Vec<ArtistSimilar>,
    pub statistics: ArtistStatistics,
    #[serde(rename = "torrentgroup")]
    pub torrent_groups: Vec<ArtistRelease>,
    pub requests: Vec<ArtistRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistTag {
    pub name: String,
    pub count: i64,
}

/// A similar artist as embedded in the artist page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistSimilar {
    pub artist_id: i64,
    pub name: String,
    pub score: i64,
    pub similar_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistStatistics {
    pub num_groups: i64,
    pub num_torrents: i64,
    pub num_seeders: i64,
    pub num_leechers: i64,
    pub num_snatches: i64,
}

/// One release group on the artist page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistRelease {
    pub group_id: i64,
    pub group_name: String,
    pub group_year: i64,
    pub group_record_label: String,
    pub group_catalogue_number: String,
    pub tags: Vec<String>,
    pub release_type: i64,
    pub group_vanity_house: bool,
    pub has_bookmarked: bool,
    #[serde(rename = "torrent")]
    pub torrents: Vec<Torrent>,
}

/// An open request naming this artist.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistRequest {
    pub request_id: i64,
    pub category_id: i64,
    pub title: String,
    pub year: i64,
    pub time_added: String,
    pub votes: i64,
    pub bounty: i64,
}

/// An entry of the standalone similar-artists listing.
///
/// Unlike every other operation, `action=similar_artists` answers with a bare
/// JSON array instead of the `{status, error, response}` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimilarArtist {
    pub id: i64,
    pub name: String,
    pub score: i64,
}

impl GazelleClient {
    /// Fetch an artist page. Accepts `artistreleases` as an extra param.
    pub async fn artist(&self, id: i64, params: &[(&str, &str)]) -> Result<ArtistResponse> {
        let mut query = owned_params(params);
        query.push(("id", id.to_string()));
        self.ajax("artist", &query).await
    }

    /// Fetch up to `limit` artists similar to the given one.
    pub async fn similar_artists(&self, id: i64, limit: i64) -> Result<Vec<SimilarArtist>> {
        self.ajax_unwrapped(
            "similar_artists",
            &[("id", id.to_string()), ("limit", limit.to_string())],
        )
        .await
    }
}
