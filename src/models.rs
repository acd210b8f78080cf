use std::collections::{BTreeMap, BTreeSet};

/// Ordered folder names from the root down to one folder.
/// The root is the empty path.
pub type FolderPath = Vec<String>;

/// Direct (non-recursive) URL -> title pairs stored under one folder path.
pub type LinkSet = BTreeMap<String, String>;

/// One bookmark file's contents: folder path -> direct link set.
///
/// Parent/child folder relationships are not stored. They are derived from
/// shared path prefixes when the tree is serialized, so ancestor paths with
/// no direct links need no entry of their own.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookmarkTree {
    folders: BTreeMap<FolderPath, LinkSet>,
}

impl BookmarkTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a link under `path`. The first title seen for a URL under
    /// a given path wins; later duplicates are dropped.
    pub fn add_link(&mut self, path: &[String], url: &str, title: &str) {
        self.folders
            .entry(path.to_vec())
            .or_default()
            .entry(url.to_string())
            .or_insert_with(|| title.to_string());
    }

    /// Links stored directly under `path`, if any.
    pub fn links(&self, path: &[String]) -> Option<&LinkSet> {
        self.folders.get(path)
    }

    /// Number of folder paths holding at least one entry.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FolderPath, &LinkSet)> {
        self.folders.iter()
    }

    /// Distinct folder names sitting immediately below `path`, i.e. the
    /// segment at index `path.len()` of every key that has `path` as a
    /// strict prefix. Sorted case-insensitively, exact string breaking ties.
    ///
    /// Called with the empty path this yields the top-level folders.
    pub fn child_folders(&self, path: &[String]) -> Vec<String> {
        let names: BTreeSet<&String> = self
            .folders
            .keys()
            .filter(|p| p.len() > path.len() && p[..path.len()] == *path)
            .map(|p| &p[path.len()])
            .collect();

        let mut names: Vec<String> = names.into_iter().cloned().collect();
        names.sort_by_key(|n| n.to_lowercase());
        names
    }
}
