#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Vigilio streaming and panel API.
//!
//! Every optional field the backend may omit is modelled as `Option` (or
//! defaulted) so views can render exhaustively instead of probing JSON shapes.
//! Request bodies serialise with the camelCase keys the panel endpoints expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

mod files;
mod tasks;

pub use files::{FileCommand, FileNode, FilesRequest, FilesResponse};
pub use tasks::{BackgroundTask, CancelTaskRequest, CeleryResponse, ReservedTask, ScheduledTask};

/// Identifier of a movie record.
pub type MovieId = i64;

/// Encoded video stream attached to a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MovieContent {
    /// Horizontal resolution in pixels, `0` when unknown.
    #[serde(default)]
    pub resolution_width: u32,
    /// Creation timestamp used as a stable render key.
    #[serde(default)]
    pub created_at: String,
}

/// Marker present when a movie is on the user's list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MyListEntry {
    /// RFC3339 timestamp of when the movie was added.
    pub created_at: String,
}

impl MyListEntry {
    /// Parse the entry timestamp; malformed values sort as the oldest.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|value| value.with_timezone(&Utc))
    }
}

/// Movie as returned by `/api/movies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Movie {
    /// Movie identifier.
    pub id: MovieId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Overview text.
    #[serde(default)]
    pub description: Option<String>,
    /// Release date (`YYYY-MM-DD`).
    #[serde(default)]
    pub release_date: Option<String>,
    /// IMDB score.
    #[serde(default)]
    pub imdb_score: Option<f64>,
    /// Runtime in seconds.
    #[serde(default)]
    pub duration: Option<u64>,
    /// Small poster URL.
    #[serde(default)]
    pub poster_path_small: Option<String>,
    /// Large poster URL.
    #[serde(default)]
    pub poster_path_big: Option<String>,
    /// Large backdrop URL.
    #[serde(default)]
    pub backdrop_path_big: Option<String>,
    /// Present when the movie is on the user's list.
    #[serde(default)]
    pub my_list: Option<MyListEntry>,
    /// Available encodings.
    #[serde(default)]
    pub movie_content: Vec<MovieContent>,
}

impl Movie {
    /// Four-digit release year, when a release date is present.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
    }

    /// Largest known horizontal resolution across encodings.
    #[must_use]
    pub fn max_resolution_width(&self) -> u32 {
        self.movie_content
            .iter()
            .map(|content| content.resolution_width)
            .max()
            .unwrap_or(0)
    }
}

/// Response of `GET /api/movies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MoviesResponse {
    /// Matching movies.
    #[serde(default)]
    pub movies: Vec<Movie>,
    /// Prefix used to build watch links.
    #[serde(default)]
    pub relative_watch_path: Option<String>,
}

/// Named group of movies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Category {
    /// Category name, also used as an anchor id.
    pub name: String,
    /// Movies in the category.
    #[serde(default)]
    pub movies: Vec<Movie>,
}

/// Response of `GET /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CategoriesResponse {
    /// Categories in display order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Prefix used to build watch links.
    #[serde(default)]
    pub relative_watch_path: Option<String>,
}

/// Playback position of a partially watched movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContinueEntry {
    /// Movie being watched.
    pub movie: Movie,
    /// Playback position in seconds.
    #[serde(default)]
    pub current_second: u64,
    /// Seconds left until the end.
    #[serde(default)]
    pub remaining_seconds: u64,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
    /// Owning user id.
    #[serde(default)]
    pub user: i64,
}

impl ContinueEntry {
    /// Watched share of the movie as a whole percentage.
    #[must_use]
    pub fn watched_percent(&self) -> u64 {
        let total = self.current_second + self.remaining_seconds;
        if total == 0 {
            0
        } else {
            self.current_second * 100 / total
        }
    }
}

/// Response of `GET /api/continue-movie-list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContinueResponse {
    /// Continue-watching entries.
    #[serde(default, rename = "continue")]
    pub entries: Vec<ContinueEntry>,
    /// Prefix used to build watch links.
    #[serde(default)]
    pub relative_watch_path: Option<String>,
}

/// My-list mutation command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MyListCommand {
    /// Add the movie to the list.
    AddToMyList,
    /// Remove the movie from the list.
    RemoveFromMyList,
}

/// Body of `POST /api/movies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MyListRequest {
    /// Target movie.
    pub movie_id: MovieId,
    /// Mutation to apply.
    pub command: MyListCommand,
}

/// Row of the torrent status table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TorrentStatus {
    /// Info hash, unique per torrent.
    pub hash: String,
    /// Torrent name.
    #[serde(default)]
    pub name: String,
    /// Client-reported state label.
    #[serde(default)]
    pub state: String,
    /// Completion ratio in `[0, 1]`.
    #[serde(default)]
    pub progress: f64,
}

impl TorrentStatus {
    /// Completion as a floored percentage clamped to `0..=100`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        let scaled = (self.progress * 100.0).floor().clamp(0.0, 100.0);
        // Clamped above, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = scaled as u8;
        percent
    }
}

/// Response of `GET /panel/api/t_status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TorrentStatusResponse {
    /// Current torrents; `None` when the backend omitted the list.
    #[serde(default)]
    pub torrents: Option<Vec<TorrentStatus>>,
}

/// Torrent client command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TorrentCommand {
    /// Start ignoring queue limits.
    ForceStart,
    /// Resume a paused torrent.
    Resume,
    /// Pause the torrent.
    Pause,
    /// Remove the torrent, keeping data.
    Delete,
    /// Remove the torrent and its data.
    DeletePermanent,
}

impl TorrentCommand {
    /// Wire name, also used in success messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForceStart => "force_start",
            Self::Resume => "resume",
            Self::Pause => "pause",
            Self::Delete => "delete",
            Self::DeletePermanent => "delete_permanent",
        }
    }
}

/// Body of `POST /panel/api/t_status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TorrentOperationRequest {
    /// Target torrents.
    pub info_hashes: Vec<String>,
    /// Command to run.
    pub command: TorrentCommand,
}

/// Movie management command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ManagementCommand {
    /// Drop the continue-watching entry.
    DeleteContinue,
    /// Delete the movie and everything related to it.
    DeleteEverything,
}

/// Body of `POST /panel/api/movie-management`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieManagementRequest {
    /// Target movie.
    pub movie_id: MovieId,
    /// Command to run.
    pub command: ManagementCommand,
}

/// Body of `POST /panel/api/add-movie`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieRequest {
    /// IMDB id or IMDB link.
    pub imdb_id: String,
    /// Magnet or torrent link.
    pub source: String,
}

/// Body of `POST /panel/api/user/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Body of `POST /panel/api/redownload-subtitles`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RedownloadSubtitlesRequest {
    /// Movies whose subtitles should be fetched again.
    pub movie_ids: Vec<MovieId>,
}

/// Response of `GET /panel/api/global-settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GlobalSettings {
    /// Environment-style settings.
    #[serde(default)]
    pub dotenv: Option<BTreeMap<String, String>>,
    /// Set while the default admin password is still in use.
    #[serde(default, rename = "forcePasswordChange")]
    pub force_password_change: bool,
    /// Any other top-level keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GlobalSettings {
    /// Read one dotenv value.
    #[must_use]
    pub fn dotenv_value(&self, key: &str) -> Option<&str> {
        self.dotenv.as_ref()?.get(key).map(String::as_str)
    }

    /// True when nothing at all was returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dotenv.is_none() && !self.force_password_change && self.extra.is_empty()
    }
}

/// Body of `POST /panel/api/global-settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SettingsPatch {
    /// Dotenv keys to overwrite.
    pub dotenv: BTreeMap<String, String>,
}

impl SettingsPatch {
    /// Patch a single dotenv key.
    #[must_use]
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut dotenv = BTreeMap::new();
        dotenv.insert(key.into(), value.into());
        Self { dotenv }
    }
}

/// Stored search source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MudSource {
    /// Source id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Schema document as stored (may use single quotes).
    pub source: String,
}

/// Body of `POST /panel/api/mud-sources`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMudSource {
    /// Display name.
    pub name: String,
    /// Schema document.
    pub source: String,
}

/// Torrent offered by a search source.
///
/// Third-party sources disagree on scalar types, so the display columns keep
/// the text of whatever string, number or boolean was sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchSourceEntry {
    /// Quality label (`1080p`, ...).
    #[serde(default, deserialize_with = "display_text")]
    pub quality: Option<String>,
    /// Release type.
    #[serde(default, rename = "type", deserialize_with = "display_text")]
    pub kind: Option<String>,
    /// Seeder count.
    #[serde(default, deserialize_with = "display_text")]
    pub seeds: Option<String>,
    /// Size as sent by the source.
    #[serde(default, deserialize_with = "display_text")]
    pub size: Option<String>,
    /// Magnet or torrent link.
    pub source: String,
}

/// Movie found through a search source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// IMDB id.
    pub imdb_id: String,
    /// Title, when known.
    #[serde(default, deserialize_with = "display_text")]
    pub title: Option<String>,
    /// Release year.
    #[serde(default, deserialize_with = "display_text")]
    pub year: Option<String>,
    /// Thumbnail URL.
    #[serde(default, deserialize_with = "display_text")]
    pub image: Option<String>,
    /// Downloadable torrents.
    #[serde(default)]
    pub sources: Vec<SearchSourceEntry>,
}

/// Display text of a scalar JSON value; `null`, arrays and objects have none.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn display_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(&Value::deserialize(deserializer)?))
}

/// Extract the human-readable outcome of a panel mutation.
///
/// Prefers the `operation` field; falls back to the serialised body.
#[must_use]
pub fn operation_message(body: &Value) -> String {
    match body.get("operation") {
        Some(Value::String(text)) => text.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn my_list_request_uses_camel_case() {
        let body = serde_json::to_value(MyListRequest {
            movie_id: 7,
            command: MyListCommand::RemoveFromMyList,
        })
        .unwrap();
        assert_eq!(body, json!({"movieId": 7, "command": "removeFromMyList"}));
    }

    #[test]
    fn torrent_operation_serialises_snake_case_command() {
        let body = serde_json::to_value(TorrentOperationRequest {
            info_hashes: vec!["abc".into()],
            command: TorrentCommand::DeletePermanent,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"infoHashes": ["abc"], "command": "delete_permanent"})
        );
        assert_eq!(TorrentCommand::ForceStart.as_str(), "force_start");
    }

    #[test]
    fn torrent_percent_floors_and_clamps() {
        let mut row = TorrentStatus {
            hash: "h".into(),
            name: "n".into(),
            state: "downloading".into(),
            progress: 0.129,
        };
        assert_eq!(row.percent(), 12);
        row.progress = 1.7;
        assert_eq!(row.percent(), 100);
        row.progress = -0.2;
        assert_eq!(row.percent(), 0);
    }

    #[test]
    fn missing_torrent_list_is_distinguishable_from_empty() {
        let missing: TorrentStatusResponse = serde_json::from_value(json!({})).unwrap();
        let empty: TorrentStatusResponse =
            serde_json::from_value(json!({"torrents": []})).unwrap();
        assert!(missing.torrents.is_none());
        assert_eq!(empty.torrents, Some(vec![]));
    }

    #[test]
    fn continue_response_reads_reserved_key() {
        let response: ContinueResponse = serde_json::from_value(json!({
            "continue": [{
                "movie": {"id": 3, "title": "Heat"},
                "current_second": 30,
                "remaining_seconds": 90,
                "updated_at": "2024-03-01T10:00:00Z",
                "user": 1
            }],
            "relative_watch_path": "/watch/"
        }))
        .unwrap();
        assert_eq!(response.entries.len(), 1);
        assert_eq!(response.entries[0].watched_percent(), 25);
        assert_eq!(response.relative_watch_path.as_deref(), Some("/watch/"));
    }

    #[test]
    fn settings_expose_dotenv_and_flags() {
        let settings: GlobalSettings = serde_json::from_value(json!({
            "dotenv": {"MOVIEDB_API": "", "SUBTITLE_LANGS": "en,tr"},
            "forcePasswordChange": false
        }))
        .unwrap();
        assert_eq!(settings.dotenv_value("MOVIEDB_API"), Some(""));
        assert_eq!(settings.dotenv_value("SUBTITLE_LANGS"), Some("en,tr"));
        assert!(!settings.is_empty());
        assert!(GlobalSettings::default().is_empty());
    }

    #[test]
    fn operation_message_prefers_operation_field() {
        assert_eq!(operation_message(&json!({"operation": "done"})), "done");
        assert_eq!(
            operation_message(&json!({"dotenv": "success"})),
            r#"{"dotenv":"success"}"#
        );
    }

    #[test]
    fn movie_helpers_read_year_and_resolution() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 1,
            "title": "Alien",
            "release_date": "1979-05-25",
            "my_list": {"created_at": "2024-01-02T03:04:05+00:00"},
            "movie_content": [{"resolution_width": 1280}, {"resolution_width": 1920}]
        }))
        .unwrap();
        assert_eq!(movie.release_year(), Some("1979"));
        assert_eq!(movie.max_resolution_width(), 1920);
        assert!(movie.my_list.unwrap().created_at_utc().is_some());
    }

    #[test]
    fn search_columns_accept_numbers_and_strings() {
        let results: Vec<SearchResult> = serde_json::from_str(
            r#"[{"imdbId":"tt1","year":1999,"sources":[{"source":"magnet:?","seeds":"12","size":1048576,"quality":null}]}]"#,
        )
        .unwrap();
        let entry = &results[0].sources[0];
        assert_eq!(results[0].year.as_deref(), Some("1999"));
        assert_eq!(entry.seeds.as_deref(), Some("12"));
        assert_eq!(entry.size.as_deref(), Some("1048576"));
        assert_eq!(entry.quality, None);
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(scalar_text(&json!([1])), None);
    }
}
