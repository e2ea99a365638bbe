//! Settings flow routing, tab selection, and form validation.
//!
//! # Design
//! - Decide which settings screen to show from the fetched document alone.
//! - Keep subtitle and movie selections as ordered sets so duplicates are impossible.
//! - Validation failures are typed; their `Display` text is what the banner shows.

use std::collections::BTreeSet;
use thiserror::Error;
use vigilio_api_models::{GlobalSettings, Movie, MovieId};

/// Dotenv key holding the MovieDB API key.
pub const MOVIEDB_KEY: &str = "MOVIEDB_API";
/// Dotenv key holding the comma-joined subtitle language codes.
pub const SUBTITLE_LANGS_KEY: &str = "SUBTITLE_LANGS";
/// Stored subtitle value meaning "no language".
pub const NO_LANGUAGE: &str = "-";
/// Password the server ships with; the forced change flow replaces it.
pub const DEFAULT_ADMIN_PASSWORD: &str = "adminadmin";
/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Screen the settings route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsScreen {
    /// Waiting for the first response.
    Loading,
    /// The response was empty.
    Missing,
    /// The default admin password must be replaced.
    ChangePassword,
    /// No MovieDB key is configured yet.
    MovieDbKey,
    /// No subtitle language is configured yet.
    SubtitleLanguages,
    /// Everything is configured.
    Complete,
}

/// Pick the screen for a settings document.
#[must_use]
pub fn route_settings(settings: &GlobalSettings, fetched: bool) -> SettingsScreen {
    if settings.is_empty() {
        return if fetched {
            SettingsScreen::Missing
        } else {
            SettingsScreen::Loading
        };
    }
    if settings.force_password_change {
        SettingsScreen::ChangePassword
    } else if settings.dotenv_value(MOVIEDB_KEY) == Some("") {
        SettingsScreen::MovieDbKey
    } else if settings.dotenv_value(SUBTITLE_LANGS_KEY) == Some("") {
        SettingsScreen::SubtitleLanguages
    } else {
        SettingsScreen::Complete
    }
}

/// Tab of the general settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsTab {
    /// Raw dotenv editor.
    Environment,
    /// Search source management.
    SearchSources,
    /// Subtitle language picker.
    SubtitleLanguages,
    /// Subtitle re-download.
    RedownloadSubtitles,
    /// MovieDB key editor.
    MovieDbKey,
}

impl SettingsTab {
    /// Tab caption, also the persisted preference value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Environment => "Environment Settings",
            Self::SearchSources => "Search Sources",
            Self::SubtitleLanguages => "Subtitle Languages",
            Self::RedownloadSubtitles => "Redownload Subtitles",
            Self::MovieDbKey => "MovieDB Key",
        }
    }

    /// Parse a persisted caption.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [
            Self::Environment,
            Self::SearchSources,
            Self::SubtitleLanguages,
            Self::RedownloadSubtitles,
            Self::MovieDbKey,
        ]
        .into_iter()
        .find(|tab| tab.label() == label)
    }
}

/// Tabs offered for a settings document.
#[must_use]
pub fn available_tabs(settings: &GlobalSettings) -> Vec<SettingsTab> {
    let mut tabs = vec![
        SettingsTab::Environment,
        SettingsTab::SearchSources,
        SettingsTab::SubtitleLanguages,
        SettingsTab::RedownloadSubtitles,
    ];
    if settings.dotenv_value(MOVIEDB_KEY).is_some() {
        tabs.push(SettingsTab::MovieDbKey);
    }
    tabs
}

/// Resolve a stored tab preference against the tabs on offer.
#[must_use]
pub fn initial_tab(stored: Option<&str>, tabs: &[SettingsTab]) -> SettingsTab {
    stored
        .and_then(SettingsTab::from_label)
        .filter(|tab| tabs.contains(tab))
        .unwrap_or(SettingsTab::Environment)
}

/// Info banner after a dotenv key is saved.
#[must_use]
pub fn saved_message(key: &str) -> String {
    format!("{key} setting has been saved.")
}

/// Ordered set of subtitle language codes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubtitleSelection {
    codes: Vec<String>,
}

impl SubtitleSelection {
    /// Parse the stored comma-joined value.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        let mut selection = Self::default();
        for code in value.split(',').map(str::trim).filter(|code| !code.is_empty()) {
            if !selection.contains(code) {
                selection.codes.push(code.to_string());
            }
        }
        selection
    }

    /// Whether the code is selected.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|entry| entry == code)
    }

    /// Add a code; a real code replaces the "none" sentinel. Duplicates are ignored.
    pub fn add(&mut self, code: &str) {
        if self.contains(code) {
            return;
        }
        self.codes.retain(|entry| entry != NO_LANGUAGE);
        self.codes.push(code.to_string());
    }

    /// Remove a code.
    pub fn remove(&mut self, code: &str) {
        self.codes.retain(|entry| entry != code);
    }

    /// Add when absent, remove when present.
    pub fn toggle(&mut self, code: &str) {
        if self.contains(code) {
            self.remove(code);
        } else {
            self.add(code);
        }
    }

    /// Real codes in selection order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes
            .iter()
            .map(String::as_str)
            .filter(|code| *code != NO_LANGUAGE)
    }

    /// Number of real codes.
    #[must_use]
    pub fn count(&self) -> usize {
        self.codes().count()
    }

    /// Value to store: the joined codes, or the sentinel when empty.
    #[must_use]
    pub fn to_setting(&self) -> String {
        if self.codes.is_empty() {
            NO_LANGUAGE.to_string()
        } else {
            self.codes.join(",")
        }
    }
}

/// Set of movies picked for subtitle re-download.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieSelection {
    ids: BTreeSet<MovieId>,
}

impl MovieSelection {
    /// Flip one movie.
    pub fn toggle(&mut self, id: MovieId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Select every listed movie.
    pub fn select_all(&mut self, movies: &[Movie]) {
        self.ids = movies.iter().map(|movie| movie.id).collect();
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether a movie is selected.
    #[must_use]
    pub fn contains(&self, id: MovieId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected movies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<MovieId> {
        self.ids.iter().copied().collect()
    }
}

/// Case-insensitive substring match used by the list filters.
#[must_use]
pub fn matches_filter(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.to_lowercase())
}

/// Rejected password change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// The two entries differ.
    #[error("Passwords do not match.")]
    Mismatch,
    /// The entry is shorter than [`MIN_PASSWORD_LEN`].
    #[error("Password needs to be at least 8 characters.")]
    TooShort,
}

/// Check a new password and its confirmation.
///
/// # Errors
///
/// Returns [`PasswordError`] describing the first failed rule.
pub fn validate_password(password: &str, repeat: &str) -> Result<(), PasswordError> {
    if password != repeat {
        return Err(PasswordError::Mismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

/// Rejected MovieDB key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MovieDbKeyError {
    /// No key was entered.
    #[error("A valid API key is required.")]
    Empty,
}

/// Check a MovieDB key before probing it.
///
/// # Errors
///
/// Returns [`MovieDbKeyError::Empty`] for an empty key.
pub const fn validate_moviedb_key(key: &str) -> Result<(), MovieDbKeyError> {
    if key.is_empty() {
        Err(MovieDbKeyError::Empty)
    } else {
        Ok(())
    }
}

/// URL used to verify a MovieDB key.
#[must_use]
pub fn moviedb_probe_url(key: &str) -> String {
    format!(
        "https://api.themoviedb.org/3/movie/76341?api_key={}",
        urlencoding::encode(key)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(value: serde_json::Value) -> GlobalSettings {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn routing_follows_setup_order() {
        assert_eq!(
            route_settings(&GlobalSettings::default(), false),
            SettingsScreen::Loading
        );
        assert_eq!(
            route_settings(&GlobalSettings::default(), true),
            SettingsScreen::Missing
        );
        let forced = settings(json!({"forcePasswordChange": true, "dotenv": {"MOVIEDB_API": ""}}));
        assert_eq!(route_settings(&forced, true), SettingsScreen::ChangePassword);
        let no_key = settings(json!({"dotenv": {"MOVIEDB_API": "", "SUBTITLE_LANGS": ""}}));
        assert_eq!(route_settings(&no_key, true), SettingsScreen::MovieDbKey);
        let no_subs = settings(json!({"dotenv": {"MOVIEDB_API": "k", "SUBTITLE_LANGS": ""}}));
        assert_eq!(route_settings(&no_subs, true), SettingsScreen::SubtitleLanguages);
        let done = settings(json!({"dotenv": {"MOVIEDB_API": "k", "SUBTITLE_LANGS": "en"}}));
        assert_eq!(route_settings(&done, true), SettingsScreen::Complete);
    }

    #[test]
    fn moviedb_tab_only_when_key_exists() {
        let with_key = settings(json!({"dotenv": {"MOVIEDB_API": "k"}}));
        let without = settings(json!({"dotenv": {"DEBUG": "0"}}));
        assert_eq!(available_tabs(&with_key).len(), 5);
        assert_eq!(available_tabs(&without).len(), 4);
        assert_eq!(
            initial_tab(Some("MovieDB Key"), &available_tabs(&without)),
            SettingsTab::Environment
        );
        assert_eq!(
            initial_tab(Some("Search Sources"), &available_tabs(&without)),
            SettingsTab::SearchSources
        );
    }

    #[test]
    fn duplicate_subtitle_code_is_a_no_op() {
        let mut selection = SubtitleSelection::from_setting("en,tr");
        let before = selection.clone();
        selection.add("en");
        assert_eq!(selection, before);
        assert_eq!(selection.to_setting(), "en,tr");
    }

    #[test]
    fn sentinel_is_replaced_by_first_real_code() {
        let mut selection = SubtitleSelection::from_setting(NO_LANGUAGE);
        assert_eq!(selection.count(), 0);
        assert_eq!(selection.to_setting(), NO_LANGUAGE);
        selection.add("de");
        assert!(!selection.contains(NO_LANGUAGE));
        assert_eq!(selection.to_setting(), "de");
        selection.toggle("de");
        assert_eq!(selection.to_setting(), NO_LANGUAGE);
    }

    #[test]
    fn movie_selection_select_all_and_none() {
        let movies: Vec<Movie> =
            serde_json::from_value(json!([{"id": 2}, {"id": 1}])).unwrap();
        let mut selection = MovieSelection::default();
        selection.toggle(1);
        selection.toggle(1);
        assert!(selection.is_empty());
        selection.select_all(&movies);
        assert_eq!(selection.ids(), [1, 2]);
        selection.clear();
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn password_rules_in_order() {
        assert_eq!(
            validate_password("abcdefgh", "abcdefgX"),
            Err(PasswordError::Mismatch)
        );
        assert_eq!(validate_password("short", "short"), Err(PasswordError::TooShort));
        assert_eq!(validate_password("longenough", "longenough"), Ok(()));
        assert_eq!(
            PasswordError::TooShort.to_string(),
            "Password needs to be at least 8 characters."
        );
    }

    #[test]
    fn moviedb_key_checks() {
        assert_eq!(validate_moviedb_key(""), Err(MovieDbKeyError::Empty));
        assert!(validate_moviedb_key("abc").is_ok());
        assert_eq!(
            moviedb_probe_url("a b"),
            "https://api.themoviedb.org/3/movie/76341?api_key=a%20b"
        );
        assert_eq!(saved_message("DEBUG"), "DEBUG setting has been saved.");
        assert!(matches_filter("Turkish", "tur"));
    }
}
