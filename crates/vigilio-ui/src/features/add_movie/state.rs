//! Add-movie tabs, manual form validation, and search plumbing.
//!
//! # Design
//! - Validate the manual request before any network call; the source is checked first.
//! - Search fires only for new queries of the minimum length; the view owns the idle timer.
//! - Responses are mapped through the source schema; results without an id and
//!   torrents without a link are skipped.
//! - Result tables show an optional column only when the first torrent carries it.

use crate::features::sources::schema::{RESULTS_FIELD, SourceSchema};
use serde_json::Value;
use thiserror::Error;
use vigilio_api_models::{AddMovieRequest, SearchResult, SearchSourceEntry, scalar_text};

/// Placeholder substituted with the search text in a source URL.
pub const SEARCH_INPUT_VAR: &str = "searchInput";

/// Tab of the add-movie page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddMovieTab {
    /// Search through a configured source.
    Search,
    /// Paste an IMDB id and a torrent link.
    Manual,
}

impl AddMovieTab {
    /// Every tab, in header order.
    pub const ALL: [Self; 2] = [Self::Search, Self::Manual];

    /// Tab caption, also the persisted preference value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Manual => "Add manually",
        }
    }

    /// Parse a persisted caption, defaulting to search.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Add manually") => Self::Manual,
            _ => Self::Search,
        }
    }
}

/// Rejected add-movie request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AddMovieError {
    /// No torrent source given.
    #[error("Source cannot be empty.")]
    EmptySource,
    /// No IMDB id or link given.
    #[error("IMDB ID or IMDB link is required.")]
    EmptyImdbId,
}

/// Build a request from form input.
///
/// # Errors
///
/// Returns [`AddMovieError`] for the first empty field, source first.
pub fn build_request(imdb_id: &str, source: &str) -> Result<AddMovieRequest, AddMovieError> {
    if source.is_empty() {
        return Err(AddMovieError::EmptySource);
    }
    if imdb_id.is_empty() {
        return Err(AddMovieError::EmptyImdbId);
    }
    Ok(AddMovieRequest {
        imdb_id: imdb_id.to_string(),
        source: source.to_string(),
    })
}

/// Replace every `${name}` in `template` using `lookup`; unknown names become empty.
#[must_use]
pub fn inject<S: AsRef<str>>(template: &str, lookup: impl Fn(&str) -> Option<S>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        let Some(length) = rest[start + 2..].find('}') else {
            break;
        };
        output.push_str(&rest[..start]);
        let name = &rest[start + 2..start + 2 + length];
        if let Some(value) = lookup(name) {
            output.push_str(value.as_ref());
        }
        rest = &rest[start + 3 + length..];
    }
    output.push_str(rest);
    output
}

/// Search URL for a source template and the user's query.
#[must_use]
pub fn search_url(api_url: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    inject(api_url, |name| (name == SEARCH_INPUT_VAR).then_some(&*encoded))
}

/// Decides when typed input becomes a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchGate {
    min_chars: usize,
    last_sent: Option<String>,
}

impl SearchGate {
    /// Gate requiring `min_chars` characters.
    #[must_use]
    pub const fn new(min_chars: usize) -> Self {
        Self {
            min_chars,
            last_sent: None,
        }
    }

    /// Whether the input is long enough to search.
    #[must_use]
    pub fn long_enough(&self, input: &str) -> bool {
        input.chars().count() >= self.min_chars
    }

    /// Call once the input has been idle; true means send the query now.
    pub fn settle(&mut self, input: &str) -> bool {
        if !self.long_enough(input) || self.last_sent.as_deref() == Some(input) {
            return false;
        }
        self.last_sent = Some(input.to_string());
        true
    }

    /// Forget the last query, e.g. after switching sources.
    pub fn reset(&mut self) {
        self.last_sent = None;
    }
}

/// Search response without a list where the schema points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Search response has no result list at \"{0}\".")]
pub struct NoResultList(pub String);

/// Value at a dot path such as `data.movies.0`; an empty path is the value itself.
#[must_use]
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    let pointer: String = path
        .split('.')
        .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
        .collect();
    value.pointer(&pointer)
}

/// Text of a mapped field: a `${path}` template, or a path to a scalar.
fn mapped_text(item: &Value, spec: &str) -> Option<String> {
    if spec.contains("${") {
        return Some(inject(spec, |path| lookup(item, path).and_then(scalar_text)));
    }
    lookup(item, spec).and_then(scalar_text)
}

/// Map a source response into search results.
///
/// Without a `results` mapping the response may be the list itself or an
/// object holding it under `results`.
///
/// # Errors
///
/// Returns [`NoResultList`] when no list sits at the expected place.
pub fn parse_results(schema: &SourceSchema, payload: &Value) -> Result<Vec<SearchResult>, NoResultList> {
    let list = match schema.results_path() {
        Some(path) => lookup(payload, path),
        None if payload.is_array() => Some(payload),
        None => payload.get(RESULTS_FIELD),
    };
    let Some(Value::Array(items)) = list else {
        let path = schema.results_path().unwrap_or(RESULTS_FIELD);
        return Err(NoResultList(path.to_string()));
    };
    Ok(items
        .iter()
        .filter_map(|item| map_result(schema, item))
        .collect())
}

fn map_result(schema: &SourceSchema, item: &Value) -> Option<SearchResult> {
    let imdb_id = mapped_text(item, schema.field("imdbId")).filter(|id| !id.is_empty())?;
    let sources = match lookup(item, schema.field("sources")) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| map_source(schema, entry))
            .collect(),
        _ => Vec::new(),
    };
    Some(SearchResult {
        imdb_id,
        title: mapped_text(item, schema.field("title")),
        year: mapped_text(item, schema.field("year")),
        image: mapped_text(item, schema.field("image")),
        sources,
    })
}

fn map_source(schema: &SourceSchema, entry: &Value) -> Option<SearchSourceEntry> {
    let source = mapped_text(entry, schema.field("source")).filter(|link| !link.is_empty())?;
    Some(SearchSourceEntry {
        quality: mapped_text(entry, schema.field("quality")),
        kind: mapped_text(entry, schema.field("type")),
        seeds: mapped_text(entry, schema.field("seeds")),
        size: mapped_text(entry, schema.field("size")),
        source,
    })
}

/// Optional columns of a result table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ResultColumns {
    /// Quality column.
    pub quality: bool,
    /// Release type column.
    pub kind: bool,
    /// Seeder column.
    pub seeds: bool,
    /// Size column.
    pub size: bool,
}

impl ResultColumns {
    /// Columns carried by the first torrent of a result.
    #[must_use]
    pub fn for_sources(sources: &[SearchSourceEntry]) -> Self {
        sources.first().map_or_else(Self::default, |first| Self {
            quality: first.quality.is_some(),
            kind: first.kind.is_some(),
            seeds: first.seeds.is_some(),
            size: first.size.is_some(),
        })
    }
}

/// Heading of a result row: title (or id) plus the year in parentheses.
#[must_use]
pub fn result_heading(result: &SearchResult) -> String {
    let title = result.title.as_deref().unwrap_or(&result.imdb_id);
    match result.year.as_deref() {
        Some(year) if !year.is_empty() => format!("{title} ({year})"),
        _ => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sources::schema::parse_schema;
    use serde_json::json;

    #[test]
    fn source_is_validated_before_imdb_id() {
        assert_eq!(build_request("", ""), Err(AddMovieError::EmptySource));
        assert_eq!(build_request("", "magnet:?"), Err(AddMovieError::EmptyImdbId));
        let request = build_request("tt0111161", "magnet:?").unwrap();
        assert_eq!(request.imdb_id, "tt0111161");
        assert_eq!(
            AddMovieError::EmptyImdbId.to_string(),
            "IMDB ID or IMDB link is required."
        );
    }

    #[test]
    fn inject_replaces_known_and_blanks_unknown() {
        let filled = inject("a${x}b${y}c${", |name| (name == "x").then_some("1"));
        assert_eq!(filled, "a1bc${");
        assert_eq!(
            search_url("https://s/?q=${searchInput}&p=1", "the matrix"),
            "https://s/?q=the%20matrix&p=1"
        );
    }

    #[test]
    fn gate_waits_for_length_and_skips_repeats() {
        let mut gate = SearchGate::new(3);
        assert!(!gate.settle("ab"));
        assert!(gate.settle("abc"));
        assert!(!gate.settle("abc"));
        assert!(gate.settle("abcd"));
        gate.reset();
        assert!(gate.settle("abcd"));
    }

    #[test]
    fn results_accept_both_shapes() {
        let schema = parse_schema("{'apiUrl': 'u'}").unwrap();
        let item = json!({"imdbId": "tt1", "sources": [{"quality": "1080p", "source": "m"}]});
        let listed = parse_results(&schema, &json!([item.clone()])).unwrap();
        let wrapped = parse_results(&schema, &json!({"results": [item]})).unwrap();
        assert_eq!(listed, wrapped);
        let columns = ResultColumns::for_sources(&listed[0].sources);
        assert!(columns.quality && !columns.seeds);
        assert_eq!(result_heading(&listed[0]), "tt1");
        assert_eq!(
            parse_results(&schema, &json!({"data": []})),
            Err(NoResultList("results".into()))
        );
    }

    #[test]
    fn schema_maps_foreign_response_shapes() {
        let schema = parse_schema(
            "{'apiUrl': 'u', 'results': 'data.movies', 'imdbId': 'imdb_code', \
             'image': 'cover.small', 'sources': 'torrents', \
             'source': 'magnet:?xt=urn:btih:${hash}', 'seeds': 'peers.seeds', 'size': 'size_bytes'}",
        )
        .unwrap();
        let payload = json!({"data": {"movies": [
            {"imdb_code": "tt0133093", "title": "The Matrix", "year": 1999,
             "cover": {"small": "https://img/m.jpg"},
             "torrents": [
                {"hash": "ABC", "quality": "1080p", "peers": {"seeds": "12"}, "size_bytes": 1_048_576},
                {"quality": "720p", "source": ""}
             ]},
            {"title": "no id"}
        ]}});

        let results = parse_results(&schema, &payload).unwrap();
        assert_eq!(results.len(), 1);
        let matrix = &results[0];
        assert_eq!(result_heading(matrix), "The Matrix (1999)");
        assert_eq!(matrix.image.as_deref(), Some("https://img/m.jpg"));
        assert_eq!(matrix.sources.len(), 2);
        let first = &matrix.sources[0];
        assert_eq!(first.source, "magnet:?xt=urn:btih:ABC");
        assert_eq!(first.seeds.as_deref(), Some("12"));
        assert_eq!(first.size.as_deref(), Some("1048576"));
        assert_eq!(first.kind, None);
        assert_eq!(matrix.sources[1].source, "magnet:?xt=urn:btih:");
    }

    #[test]
    fn lookup_walks_objects_and_arrays() {
        let value = json!({"a": {"b": [10, {"c": "x"}]}});
        assert_eq!(lookup(&value, "a.b.0"), Some(&json!(10)));
        assert_eq!(lookup(&value, "a.b.1.c"), Some(&json!("x")));
        assert_eq!(lookup(&value, "a.z"), None);
        assert_eq!(lookup(&value, ""), Some(&value));
    }

    #[test]
    fn tab_labels_round_trip() {
        for tab in AddMovieTab::ALL {
            assert_eq!(AddMovieTab::from_label(Some(tab.label())), tab);
        }
        assert_eq!(AddMovieTab::from_label(None), AddMovieTab::Search);
    }
}
