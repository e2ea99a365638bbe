//! Search source schema validation and selection.
//!
//! # Design
//! - Sources are stored as text that may use single quotes; normalise before parsing.
//! - A schema is usable only when it is an object with a non-empty `apiUrl` string.
//! - Every other known key maps a result field to a dot path (or a `${path}` template)
//!   in the source's response; unset keys map to the field's own name.
//! - Selection falls back to the first source when the stored id is gone.

use serde_json::{Map, Value};
use thiserror::Error;
use vigilio_api_models::MudSource;

/// Why a schema was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The text is not JSON.
    #[error("Schema is not valid JSON: {0}")]
    Syntax(String),
    /// The JSON is not an object.
    #[error("Schema must be a JSON object.")]
    NotObject,
    /// `apiUrl` is missing, empty, or not a string.
    #[error("Schema requires a non-empty \"apiUrl\" string.")]
    MissingApiUrl,
    /// A field mapping is not a string.
    #[error("Schema field \"{0}\" must be a string path.")]
    FieldNotPath(String),
}

/// Path of the result list inside a response.
pub const RESULTS_FIELD: &str = "results";
/// Result-level mappings.
pub const RESULT_FIELDS: [&str; 5] = ["imdbId", "title", "year", "image", "sources"];
/// Torrent-level mappings, relative to one entry of `sources`.
pub const SOURCE_FIELDS: [&str; 5] = ["source", "quality", "type", "seeds", "size"];

/// Parsed source schema.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceSchema {
    /// Search URL template containing `${searchInput}`.
    pub api_url: String,
    /// Every field of the schema, `apiUrl` included.
    pub fields: Map<String, Value>,
}

/// Parse schema text, accepting single-quoted JSON.
///
/// # Errors
///
/// Returns [`SchemaError`] when the text is not a usable schema.
pub fn parse_schema(text: &str) -> Result<SourceSchema, SchemaError> {
    let normalised = text.replace('\'', "\"");
    let value: Value =
        serde_json::from_str(&normalised).map_err(|err| SchemaError::Syntax(err.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(SchemaError::NotObject);
    };
    let api_url = match fields.get("apiUrl") {
        Some(Value::String(url)) if !url.trim().is_empty() => url.clone(),
        _ => return Err(SchemaError::MissingApiUrl),
    };
    let mapped = std::iter::once(RESULTS_FIELD)
        .chain(RESULT_FIELDS)
        .chain(SOURCE_FIELDS);
    for name in mapped {
        if fields.get(name).is_some_and(|value| !value.is_string()) {
            return Err(SchemaError::FieldNotPath(name.to_string()));
        }
    }
    Ok(SourceSchema { api_url, fields })
}

impl SourceSchema {
    /// Mapping for a result field; unset fields map to their own name.
    #[must_use]
    pub fn field<'a>(&'a self, name: &'a str) -> &'a str {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or(name)
    }

    /// Configured path of the result list, if any.
    #[must_use]
    pub fn results_path(&self) -> Option<&str> {
        self.fields.get(RESULTS_FIELD).and_then(Value::as_str)
    }
}

/// Live state of the add-source form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceForm {
    /// Display name.
    pub name: String,
    /// Schema text.
    pub schema: String,
}

impl SourceForm {
    /// Schema problem to show; an empty schema is not reported yet.
    #[must_use]
    pub fn schema_error(&self) -> Option<SchemaError> {
        if self.schema.is_empty() {
            return None;
        }
        parse_schema(&self.schema).err()
    }

    /// Whether the save button is enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.name.is_empty() && !self.schema.is_empty() && parse_schema(&self.schema).is_ok()
    }
}

/// Pick the stored source, or the first one when it no longer exists.
#[must_use]
pub fn choose_source(sources: &[MudSource], stored: Option<i64>) -> Option<&MudSource> {
    stored
        .and_then(|id| sources.iter().find(|source| source.id == id))
        .or_else(|| sources.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: i64) -> MudSource {
        MudSource {
            id,
            name: format!("source {id}"),
            source: "{'apiUrl': 'https://x/?q=${searchInput}'}".into(),
        }
    }

    #[test]
    fn single_quoted_schema_is_accepted() {
        let schema = parse_schema("{'apiUrl': 'https://x/?q=${searchInput}', 'imdbId': 'id'}")
            .unwrap();
        assert_eq!(schema.api_url, "https://x/?q=${searchInput}");
        assert_eq!(schema.fields.len(), 2);
    }

    #[test]
    fn schema_rules() {
        assert!(matches!(parse_schema("{"), Err(SchemaError::Syntax(_))));
        assert_eq!(parse_schema("[1]"), Err(SchemaError::NotObject));
        assert_eq!(parse_schema("{}"), Err(SchemaError::MissingApiUrl));
        assert_eq!(
            parse_schema(r#"{"apiUrl": ""}"#),
            Err(SchemaError::MissingApiUrl)
        );
        assert_eq!(
            parse_schema(r#"{"apiUrl": 3}"#),
            Err(SchemaError::MissingApiUrl)
        );
        assert_eq!(
            parse_schema(r#"{"apiUrl": "u", "seeds": 2}"#),
            Err(SchemaError::FieldNotPath("seeds".into()))
        );
    }

    #[test]
    fn unset_fields_map_to_their_own_name() {
        let schema =
            parse_schema("{'apiUrl': 'u', 'results': 'data.movies', 'imdbId': 'imdb_code'}").unwrap();
        assert_eq!(schema.field("imdbId"), "imdb_code");
        assert_eq!(schema.field("title"), "title");
        assert_eq!(schema.results_path(), Some("data.movies"));
    }

    #[test]
    fn save_requires_name_and_valid_schema() {
        let mut form = SourceForm::default();
        assert!(!form.can_save());
        assert_eq!(form.schema_error(), None);
        form.schema = "{'apiUrl': 'u'}".into();
        assert!(!form.can_save());
        form.name = "yts".into();
        assert!(form.can_save());
        form.schema = "nope".into();
        assert!(form.schema_error().is_some());
        assert!(!form.can_save());
    }

    #[test]
    fn stored_source_falls_back_to_first() {
        let sources = vec![source(1), source(2)];
        assert_eq!(choose_source(&sources, Some(2)).map(|s| s.id), Some(2));
        assert_eq!(choose_source(&sources, Some(9)).map(|s| s.id), Some(1));
        assert_eq!(choose_source(&sources, None).map(|s| s.id), Some(1));
        assert_eq!(choose_source(&[], Some(1)), None);
    }
}
