//! Remote directory listing types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of a listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A directory
    Dir,
    /// A regular file
    File,
    /// Symlinks, submodules and anything else
    #[serde(other)]
    Other,
}

/// One record of a remote directory listing.
///
/// Field names follow the GitHub contents API so a response body can be
/// decoded directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Entry name (last path component)
    pub name: String,

    /// Entry kind
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Full path inside the repository
    #[serde(default)]
    pub path: String,

    /// Direct download link, when the backend provides one
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RepoEntry {
    /// Create a directory entry.
    pub fn dir(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            path: path.into(),
            download_url: None,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            path: path.into(),
            download_url: None,
        }
    }

    /// Set the direct download link.
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Check if this entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Decode a contents-API JSON array.
    pub fn list_from_json(body: &str) -> Result<Vec<RepoEntry>> {
        serde_json::from_str(body).map_err(|e| Error::Listing(e.to_string()))
    }
}

/// Source of directory listings for the issue locator.
///
/// Implementations return `Err` for any non-success response; the locator
/// treats every error as "not found".
pub trait DirectoryListing {
    /// List the entries directly under `path`.
    fn list_directory(&self, path: &str) -> Result<Vec<RepoEntry>>;
}

impl<T: DirectoryListing + ?Sized> DirectoryListing for &T {
    fn list_directory(&self, path: &str) -> Result<Vec<RepoEntry>> {
        (**self).list_directory(path)
    }
}
