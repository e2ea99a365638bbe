//! Catalog section derivation.
//!
//! # Design
//! - Derive every section from the raw responses on render; nothing derived is stored.
//! - Keep link formats next to the sections that emit them.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use vigilio_api_models::{Category, ContinueEntry, Movie, MovieId, MyListCommand};

/// Shown when the library has nothing to browse.
pub const NO_MOVIES_MESSAGE: &str = "There are no movies";
/// Shown when a search matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Sections of the home page, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeSections {
    /// Partially watched movies.
    pub continue_watching: Vec<ContinueEntry>,
    /// Movies on the user's list, newest addition first.
    pub my_list: Vec<Movie>,
    /// Movies not being watched.
    pub popular: Vec<Movie>,
    /// Whether to show the empty-library notice.
    pub show_empty: bool,
}

/// Build the home page sections.
#[must_use]
pub fn home_sections(movies: &[Movie], entries: &[ContinueEntry], fetched: bool) -> HomeSections {
    let watching: BTreeSet<MovieId> = entries.iter().map(|entry| entry.movie.id).collect();
    HomeSections {
        continue_watching: entries.to_vec(),
        my_list: my_list(movies),
        popular: movies
            .iter()
            .filter(|movie| !watching.contains(&movie.id))
            .cloned()
            .collect(),
        show_empty: fetched && movies.is_empty() && entries.is_empty(),
    }
}

/// Movies on the list, most recently added first.
#[must_use]
pub fn my_list(movies: &[Movie]) -> Vec<Movie> {
    let mut listed: Vec<Movie> = movies
        .iter()
        .filter(|movie| movie.my_list.is_some())
        .cloned()
        .collect();
    listed.sort_by_key(|movie| {
        Reverse(
            movie
                .my_list
                .as_ref()
                .and_then(vigilio_api_models::MyListEntry::created_at_utc),
        )
    });
    listed
}

/// Names of categories that have at least one movie.
#[must_use]
pub fn jump_targets(categories: &[Category]) -> Vec<&str> {
    categories
        .iter()
        .filter(|category| !category.movies.is_empty())
        .map(|category| category.name.as_str())
        .collect()
}

/// Link opening the movie page.
#[must_use]
pub fn watch_link(relative_watch_path: &str, id: MovieId) -> String {
    format!("{relative_watch_path}{id}")
}

/// Link starting playback.
#[must_use]
pub fn play_link(id: MovieId) -> String {
    format!("/watch/{id}")
}

/// Link to the management panel for a movie.
#[must_use]
pub fn manage_link(id: MovieId) -> String {
    format!("/panel/movie-detail/{id}")
}

/// State of the add-to-list toggle on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListToggle {
    /// Whether the movie is on the list.
    pub on_list: bool,
    /// Whether the success check mark is showing.
    pub show_success: bool,
}

impl ListToggle {
    /// Toggle for a movie with the given list marker.
    #[must_use]
    pub const fn new(on_list: bool) -> Self {
        Self {
            on_list,
            show_success: false,
        }
    }

    /// Command the next click sends.
    #[must_use]
    pub const fn command(self) -> MyListCommand {
        if self.on_list {
            MyListCommand::RemoveFromMyList
        } else {
            MyListCommand::AddToMyList
        }
    }

    /// State after the server accepted the command. Returns whether the
    /// check mark must be hidden later by a timer.
    pub const fn confirm(&mut self) -> bool {
        let added = !self.on_list;
        self.on_list = added;
        self.show_success = added;
        added
    }

    /// Button tooltip.
    #[must_use]
    pub const fn title(self) -> &'static str {
        if self.on_list {
            "Remove from My List"
        } else {
            "Add to My List"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movie(id: MovieId, listed_at: Option<&str>) -> Movie {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Movie {id}"),
            "my_list": listed_at.map(|at| json!({"created_at": at})),
        }))
        .unwrap()
    }

    fn watching(id: MovieId) -> ContinueEntry {
        ContinueEntry {
            movie: movie(id, None),
            current_second: 10,
            remaining_seconds: 30,
            updated_at: "2024-01-01T00:00:00Z".into(),
            user: 1,
        }
    }

    #[test]
    fn my_list_is_sorted_newest_first() {
        let movies = vec![
            movie(1, Some("2024-01-01T00:00:00Z")),
            movie(2, None),
            movie(3, Some("2024-03-01T00:00:00Z")),
        ];
        let ids: Vec<_> = my_list(&movies).iter().map(|movie| movie.id).collect();
        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn popular_excludes_movies_being_watched() {
        let movies = vec![movie(1, None), movie(2, None)];
        let sections = home_sections(&movies, &[watching(1)], true);
        let ids: Vec<_> = sections.popular.iter().map(|movie| movie.id).collect();
        assert_eq!(ids, [2]);
        assert!(!sections.show_empty);
    }

    #[test]
    fn empty_library_notice_waits_for_fetch() {
        assert!(!home_sections(&[], &[], false).show_empty);
        assert!(home_sections(&[], &[], true).show_empty);
        assert!(!home_sections(&[], &[watching(4)], true).show_empty);
    }

    #[test]
    fn jump_list_skips_empty_categories() {
        let categories = vec![
            Category {
                name: "Drama".into(),
                movies: vec![movie(1, None)],
            },
            Category {
                name: "Horror".into(),
                movies: vec![],
            },
        ];
        assert_eq!(jump_targets(&categories), ["Drama"]);
    }

    #[test]
    fn list_toggle_flips_and_reports_timer_need() {
        let mut toggle = ListToggle::new(false);
        assert_eq!(toggle.command(), MyListCommand::AddToMyList);
        assert!(toggle.confirm());
        assert!(toggle.on_list && toggle.show_success);
        assert_eq!(toggle.title(), "Remove from My List");
        assert!(!toggle.confirm());
        assert!(!toggle.show_success);
    }

    #[test]
    fn links() {
        assert_eq!(watch_link("/stream/", 5), "/stream/5");
        assert_eq!(play_link(5), "/watch/5");
        assert_eq!(manage_link(5), "/panel/movie-detail/5");
    }
}
