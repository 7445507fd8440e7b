//! Configuration, session identity, and the torrent data model shared by
//! several endpoint payloads.

use crate::envelope::StatusMode;
use serde::Deserialize;

/// Configuration for connecting to a Gazelle tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Base URL of the tracker (e.g., "https://tracker.example.com")
    pub url: String,
    /// How envelope-level failures are surfaced. Defaults to
    /// [`StatusMode::Strict`].
    pub status_mode: StatusMode,
}

impl TrackerConfig {
    /// Create a new tracker config with just the base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_mode: StatusMode::default(),
        }
    }

    /// Override how envelope-level failures are surfaced.
    pub fn with_status_mode(mut self, status_mode: StatusMode) -> Self {
        self.status_mode = status_mode;
        self
    }
}

/// The credentials derived from logging in, required to authorize later
/// calls and to construct download links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub auth_key: String,
    pub pass_key: String,
}

// =============================================================================
// Shared torrent data model
// =============================================================================

/// A release group as returned by `torrent` and `torrentgroup` lookups.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub wiki_body: String,
    pub wiki_image: String,
    pub id: i64,
    pub name: String,
    pub year: i64,
    pub record_label: String,
    pub catalogue_number: String,
    pub release_type: i64,
    pub category_id: i64,
    pub category_name: String,
    pub time: String,
    pub vanity_house: bool,
    pub music_info: MusicInfo,
}

/// Artist credits attached to a release group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicInfo {
    pub composers: Vec<ArtistCredit>,
    pub dj: Vec<ArtistCredit>,
    pub artists: Vec<ArtistCredit>,
    pub with: Vec<ArtistCredit>,
    pub conductor: Vec<ArtistCredit>,
    pub remixed_by: Vec<ArtistCredit>,
    pub producer: Vec<ArtistCredit>,
}

/// One artist credit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistCredit {
    pub id: i64,
    pub name: String,
    #[serde(rename = "aliasid")]
    pub alias_id: i64,
}

/// A single torrent within a release group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Torrent {
    pub id: i64,
    pub media: String,
    pub format: String,
    pub encoding: String,
    pub remastered: bool,
    pub remaster_year: i64,
    pub remaster_title: String,
    pub remaster_record_label: String,
    pub remaster_catalogue_number: String,
    pub scene: bool,
    pub has_log: bool,
    pub has_cue: bool,
    pub log_score: i64,
    pub file_count: i64,
    pub size: i64,
    pub seeders: i64,
    pub leechers: i64,
    pub snatched: i64,
    pub free_torrent: bool,
    pub time: String,
    pub description: String,
    pub file_list: String,
    pub file_path: String,
    pub user_id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_strict_status_handling() {
        let config = TrackerConfig::new("https://tracker.example.com");
        assert_eq!(config.url, "https://tracker.example.com");
        assert_eq!(config.status_mode, StatusMode::Strict);
    }

    #[test]
    fn config_status_mode_override() {
        let config =
            TrackerConfig::new("https://tracker.example.com").with_status_mode(StatusMode::Loose);
        assert_eq!(config.status_mode, StatusMode::Loose);
    }
}
