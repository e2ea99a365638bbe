//! Arena-backed file tree and path-keyed selection.
//!
//! # Design
//! - Flatten the nested listing into an arena once per fetch; rendering walks indices.
//! - Key every node by `full_path` (`"root"` when the backend leaves it empty).
//! - Selection is a set of keys, so it owns no node data and survives re-fetches.

use std::collections::{BTreeMap, BTreeSet};
use vigilio_api_models::{FileNode, FilesResponse};

/// Key used for a node whose `full_path` is empty.
pub const ROOT_KEY: &str = "root";
/// Error banner for a listing without any node.
pub const NO_FILES_MESSAGE: &str = "Files could not be fetched.";

/// Error to raise for a fetched listing, if any.
#[must_use]
pub fn listing_error(response: &FilesResponse) -> Option<&'static str> {
    response.files.is_empty().then_some(NO_FILES_MESSAGE)
}

/// Selection key of a node.
#[must_use]
pub fn node_key(node: &FileNode) -> String {
    if node.full_path.is_empty() {
        ROOT_KEY.to_string()
    } else {
        node.full_path.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    key: String,
    node: FileNode,
    depth: usize,
    children: Vec<usize>,
}

/// One listing, flattened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileTree {
    entries: Vec<Entry>,
    roots: Vec<usize>,
    by_key: BTreeMap<String, usize>,
}

/// Render-ready table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    /// Selection key.
    pub key: String,
    /// Base name.
    pub name: String,
    /// Extension including the dot.
    pub suffix: Option<String>,
    /// Backend-formatted date.
    pub date: String,
    /// Size in bytes.
    pub size: Option<u64>,
    /// Referenced by the movie record.
    pub used: bool,
    /// Nesting depth, `0` for top-level nodes.
    pub depth: usize,
    /// Whether the row offers a checkbox.
    pub selectable: bool,
}

impl FileTree {
    /// Flatten a listing. Children are kept only for non-empty `files` lists.
    #[must_use]
    pub fn build(nodes: &[FileNode]) -> Self {
        let mut tree = Self::default();
        let mut pending: Vec<(&FileNode, usize, Option<usize>)> =
            nodes.iter().rev().map(|node| (node, 0, None)).collect();
        while let Some((node, depth, parent)) = pending.pop() {
            let index = tree.entries.len();
            let key = node_key(node);
            tree.by_key.entry(key.clone()).or_insert(index);
            tree.entries.push(Entry {
                key,
                node: FileNode {
                    files: node.files.as_ref().map(|_| Vec::new()),
                    ..node.clone()
                },
                depth,
                children: Vec::new(),
            });
            match parent {
                Some(parent) => tree.entries[parent].children.push(index),
                None => tree.roots.push(index),
            }
            pending.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (child, depth + 1, Some(index))),
            );
        }
        tree
    }

    /// Number of nodes at any depth.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the listing had no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the first top-level node, which the file manager protects.
    #[must_use]
    pub fn first_root_name(&self) -> Option<&str> {
        self.roots
            .first()
            .map(|index| self.entries[*index].node.name.as_str())
    }

    /// Whether a key names a node in this listing.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Rows in display order: every parent is followed by its descendants.
    #[must_use]
    pub fn rows(&self, nonselectable: &[String]) -> Vec<FileRow> {
        let mut rows = Vec::with_capacity(self.entries.len());
        let mut pending: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(index) = pending.pop() {
            let entry = &self.entries[index];
            rows.push(FileRow {
                key: entry.key.clone(),
                name: entry.node.name.clone(),
                suffix: entry.node.suffix.clone(),
                date: entry.node.date.clone(),
                size: entry.node.size,
                used: entry.node.used,
                depth: entry.depth,
                selectable: !nonselectable.contains(&entry.node.name),
            });
            pending.extend(entry.children.iter().rev());
        }
        rows
    }

    /// Rebuild the node under `key`, including its subtree.
    #[must_use]
    pub fn node(&self, key: &str) -> Option<FileNode> {
        self.by_key.get(key).map(|index| self.rebuild(*index))
    }

    /// Rebuild every selected node, in display order.
    #[must_use]
    pub fn resolve(&self, selection: &Selection) -> Vec<FileNode> {
        self.rows(&[])
            .iter()
            .filter(|row| selection.contains(&row.key))
            .filter_map(|row| self.node(&row.key))
            .collect()
    }

    fn rebuild(&self, index: usize) -> FileNode {
        let entry = &self.entries[index];
        let mut node = entry.node.clone();
        if let Some(files) = node.files.as_mut() {
            files.extend(entry.children.iter().map(|child| self.rebuild(*child)));
        }
        node
    }
}

/// Checkbox toggle reported by the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// Key of the toggled node.
    pub key: String,
    /// State after the toggle.
    pub is_selected: bool,
}

/// Set of selected node keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    keys: BTreeSet<String>,
}

impl Selection {
    /// Flip a row. Protected rows ignore the toggle and report nothing.
    pub fn toggle(&mut self, row: &FileRow) -> Option<SelectionChange> {
        if !row.selectable {
            return None;
        }
        let is_selected = !self.keys.remove(&row.key);
        if is_selected {
            self.keys.insert(row.key.clone());
        }
        Some(SelectionChange {
            key: row.key.clone(),
            is_selected,
        })
    }

    /// Apply a reported change.
    pub fn apply(&mut self, change: &SelectionChange) {
        if change.is_selected {
            self.keys.insert(change.key.clone());
        } else {
            self.keys.remove(&change.key);
        }
    }

    /// Whether the key is selected.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Drop every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Drop keys that no longer exist in a fresh listing.
    pub fn retain_present(&mut self, tree: &FileTree) {
        self.keys.retain(|key| tree.contains(key));
    }

    /// Whether any selected key is in `critical`.
    #[must_use]
    pub fn touches(&self, critical: &[String]) -> bool {
        critical.iter().any(|path| self.keys.contains(path))
    }
}

/// Background of a checked row under the cursor.
pub const CHECKED_HOVER_BACKGROUND: &str = "linear-gradient(#828282, #68747d)";
/// Background of a checked row at rest.
pub const CHECKED_BACKGROUND: &str = "linear-gradient(#787878, #616c74)";

/// Inline background of a tree row. Unchecked rows are never highlighted;
/// hovering a checked row switches it to the lighter gradient.
#[must_use]
pub fn row_background(checked: bool, hovered: bool) -> Option<String> {
    match (checked, hovered) {
        (false, _) => None,
        (true, true) => Some(format!("background-image: {CHECKED_HOVER_BACKGROUND};")),
        (true, false) => Some(format!("background-image: {CHECKED_BACKGROUND};")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, path: &str, suffix: &str, size: u64) -> FileNode {
        FileNode {
            name: name.into(),
            full_path: path.into(),
            suffix: Some(suffix.into()),
            date: "2024-01-01".into(),
            size: Some(size),
            used: false,
            files: None,
        }
    }

    fn folder(name: &str, path: &str, files: Vec<FileNode>) -> FileNode {
        FileNode {
            name: name.into(),
            full_path: path.into(),
            suffix: None,
            date: "2024-01-01".into(),
            size: None,
            used: false,
            files: Some(files),
        }
    }

    fn sample() -> Vec<FileNode> {
        vec![folder(
            "Movie",
            "/m",
            vec![
                folder(
                    "subs",
                    "/m/subs",
                    vec![file("en.srt", "/m/subs/en.srt", ".srt", 10)],
                ),
                file("a.mp4", "/m/a.mp4", ".mp4", 2_097_152),
                folder("empty", "/m/empty", vec![]),
            ],
        )]
    }

    #[test]
    fn one_row_per_node_in_nested_order() {
        let tree = FileTree::build(&sample());
        let rows = tree.rows(&[]);
        assert_eq!(rows.len(), tree.len());
        let keys: Vec<_> = rows.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(
            keys,
            ["/m", "/m/subs", "/m/subs/en.srt", "/m/a.mp4", "/m/empty"]
        );
        let depths: Vec<_> = rows.iter().map(|row| row.depth).collect();
        assert_eq!(depths, [0, 1, 2, 1, 1]);
    }

    #[test]
    fn only_checked_rows_are_highlighted() {
        assert_eq!(row_background(false, true), None);
        assert_eq!(row_background(false, false), None);
        assert_eq!(
            row_background(true, true).as_deref(),
            Some("background-image: linear-gradient(#828282, #68747d);")
        );
        assert_eq!(
            row_background(true, false).as_deref(),
            Some("background-image: linear-gradient(#787878, #616c74);")
        );
    }

    #[test]
    fn empty_listing_raises_the_no_files_error() {
        let empty = FilesResponse::default();
        assert_eq!(listing_error(&empty), Some(NO_FILES_MESSAGE));
        let listed = FilesResponse {
            files: sample(),
            ..FilesResponse::default()
        };
        assert_eq!(listing_error(&listed), None);
    }

    #[test]
    fn empty_listing_renders_nothing() {
        let tree = FileTree::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.rows(&[]).is_empty());
        assert_eq!(tree.first_root_name(), None);
    }

    #[test]
    fn empty_full_path_is_keyed_as_root() {
        let tree = FileTree::build(&[folder("Movie", "", vec![])]);
        assert!(tree.contains(ROOT_KEY));
        assert_eq!(tree.rows(&[])[0].key, ROOT_KEY);
    }

    #[test]
    fn protected_names_never_enter_the_selection() {
        let tree = FileTree::build(&sample());
        let rows = tree.rows(&["Movie".to_string()]);
        assert!(!rows[0].selectable);
        let mut selection = Selection::default();
        assert_eq!(selection.toggle(&rows[0]), None);
        assert!(selection.is_empty());
    }

    #[test]
    fn double_toggle_is_identity() {
        let tree = FileTree::build(&sample());
        let rows = tree.rows(&[]);
        let mut selection = Selection::default();
        let first = selection.toggle(&rows[3]);
        assert_eq!(
            first,
            Some(SelectionChange {
                key: "/m/a.mp4".into(),
                is_selected: true
            })
        );
        let second = selection.toggle(&rows[3]);
        assert_eq!(second.map(|change| change.is_selected), Some(false));
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn resolve_rebuilds_selected_subtrees() {
        let tree = FileTree::build(&sample());
        let mut selection = Selection::default();
        selection.apply(&SelectionChange {
            key: "/m/subs".into(),
            is_selected: true,
        });
        let nodes = tree.resolve(&selection);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].children().len(), 1);
        assert_eq!(nodes[0].children()[0].full_path, "/m/subs/en.srt");
        assert_eq!(tree.node("/m/empty").and_then(|node| node.files), Some(vec![]));
    }

    #[test]
    fn selection_is_pruned_against_new_listing() {
        let tree = FileTree::build(&sample());
        let mut selection = Selection::default();
        for key in ["/m/a.mp4", "/m/gone.mkv"] {
            selection.apply(&SelectionChange {
                key: key.into(),
                is_selected: true,
            });
        }
        selection.retain_present(&tree);
        assert_eq!(selection.len(), 1);
        assert!(selection.touches(&["/m/a.mp4".to_string()]));
        assert!(!selection.touches(&["/m/subs".to_string()]));
    }
}
