//! File listing DTOs for the movie file manager.

use crate::MovieId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// File or folder on disk belonging to a movie.
///
/// A node with `files` present (even empty) is a directory, and so is any
/// node without a `suffix`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FileNode {
    /// Base name.
    pub name: String,
    /// Absolute path; unique across one listing.
    #[serde(default)]
    pub full_path: String,
    /// Extension including the leading dot, absent for folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Modification date as formatted by the backend.
    #[serde(default)]
    pub date: String,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Referenced by the movie record; deleting it breaks playback.
    #[serde(default)]
    pub used: bool,
    /// Children, present for directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileNode>>,
}

impl FileNode {
    /// Whether the node represents a folder.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.files.is_some() || self.suffix.is_none()
    }

    /// Children, empty for plain files.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.files.as_deref().unwrap_or_default()
    }
}

/// Response of `GET /panel/api/files`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilesResponse {
    /// Top-level nodes; the first one is the movie root folder.
    #[serde(default, deserialize_with = "listing_nodes")]
    pub files: Vec<FileNode>,
    /// Paths referenced by the movie record that are gone from disk.
    #[serde(default)]
    pub missing_files: Vec<String>,
    /// Paths referenced by the movie record.
    #[serde(default)]
    pub used_files: Vec<String>,
}

/// Flatten a listing into nodes. The backend wraps the root node in a list
/// and sends `[[]]` when the movie folder is gone; nested lists are flattened
/// and non-object entries carry no nodes.
fn listing_nodes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<FileNode>, D::Error> {
    let mut pending = vec![Value::deserialize(deserializer)?];
    let mut nodes = Vec::new();
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items.into_iter().rev()),
            node @ Value::Object(_) => {
                nodes.push(serde_json::from_value(node).map_err(D::Error::custom)?);
            }
            _ => {}
        }
    }
    Ok(nodes)
}

/// File manager command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FileCommand {
    /// Delete the listed files and folders.
    DeleteFiles,
}

/// Body of `POST /panel/api/files`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilesRequest {
    /// Owning movie.
    pub movie_id: MovieId,
    /// Command to run.
    pub command: FileCommand,
    /// Nodes the command applies to.
    pub files: Vec<FileNode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn directory_detection_follows_files_or_suffix() {
        let folder: FileNode =
            serde_json::from_value(json!({"name": "Movie", "full_path": "/m", "files": []}))
                .unwrap();
        let bare: FileNode =
            serde_json::from_value(json!({"name": "extras", "full_path": "/m/extras"})).unwrap();
        let file: FileNode = serde_json::from_value(
            json!({"name": "a.mp4", "full_path": "/m/a.mp4", "suffix": ".mp4", "size": 10}),
        )
        .unwrap();
        assert!(folder.is_dir());
        assert!(bare.is_dir());
        assert!(!file.is_dir());
        assert!(file.children().is_empty());
    }

    #[test]
    fn missing_movie_folder_decodes_as_empty_listing() {
        let response: FilesResponse = serde_json::from_str(
            r#"{"files": [[]], "missing_files": ["/m/a.mp4"], "used_files": ["/m/a.mp4"]}"#,
        )
        .unwrap();
        assert!(response.files.is_empty());
        assert_eq!(response.missing_files, vec!["/m/a.mp4".to_string()]);

        let null: FilesResponse = serde_json::from_value(json!({"files": null})).unwrap();
        assert!(null.files.is_empty());
    }

    #[test]
    fn wrapped_root_node_is_unwrapped_in_order() {
        let response: FilesResponse = serde_json::from_value(json!({
            "files": [[{"name": "Movie", "full_path": "/m", "files": []}], {"name": "b", "full_path": "/b"}, 3]
        }))
        .unwrap();
        let names: Vec<&str> = response.files.iter().map(|node| node.name.as_str()).collect();
        assert_eq!(names, ["Movie", "b"]);

        let broken = serde_json::from_value::<FilesResponse>(json!({"files": [{"full_path": "/x"}]}));
        assert!(broken.is_err());
    }

    #[test]
    fn delete_request_serialises_nodes() {
        let body = serde_json::to_value(FilesRequest {
            movie_id: 4,
            command: FileCommand::DeleteFiles,
            files: vec![FileNode {
                name: "a.srt".into(),
                full_path: "/m/a.srt".into(),
                suffix: Some(".srt".into()),
                date: "2024-01-01".into(),
                size: None,
                used: false,
                files: None,
            }],
        })
        .unwrap();
        assert_eq!(body["command"], "deleteFiles");
        assert_eq!(body["movieId"], 4);
        assert_eq!(body["files"][0]["full_path"], "/m/a.srt");
        assert!(body["files"][0].get("size").is_none());
    }
}
