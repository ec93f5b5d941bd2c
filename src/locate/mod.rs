//! Latest-issue resolution over a remote content tree.
//!
//! Issues are published as dated folders under a fixed base path, each
//! holding one or more artifact files. Folder and file names are not
//! uniform, so selection works in two tiers: names carrying a
//! `YYYY-MM-DD` date are ranked by that date, and plain lexicographic
//! order is only a fallback.
//!
//! # Example
//!
//! ```
//! use issuedigest::locate::{resolve_latest_issue, DirectoryListing, LocatorOptions, RepoEntry};
//!
//! struct Fixed;
//!
//! impl DirectoryListing for Fixed {
//!     fn list_directory(&self, path: &str) -> issuedigest::Result<Vec<RepoEntry>> {
//!         Ok(match path {
//!             "TE/2026" => vec![RepoEntry::dir("2026-01-10", "TE/2026/2026-01-10")],
//!             _ => vec![RepoEntry::file("TE_2026-01-10.pdf", "TE/2026/2026-01-10/TE_2026-01-10.pdf")],
//!         })
//!     }
//! }
//!
//! let issue = resolve_latest_issue(&Fixed, &LocatorOptions::default())?;
//! assert_eq!(issue.issue_label, "2026-01-10");
//! # Ok::<(), issuedigest::Error>(())
//! ```

mod date;
mod listing;
mod options;

pub use date::{parse_issue_date, ArtifactKey};
pub use listing::{DirectoryListing, EntryKind, RepoEntry};
pub use options::LocatorOptions;

use date::FolderKey;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// The artifact chosen for the latest issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIssue {
    /// Resolvable download location of the artifact
    pub artifact_url: String,

    /// Issue folder name, used verbatim for display and file names
    pub issue_label: String,
}

impl fmt::Display for ResolvedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.issue_label, self.artifact_url)
    }
}

/// Resolve the most recent issue and its artifact.
///
/// Lists `options.base_path`, picks the latest issue folder, lists that
/// folder and picks the latest artifact. Any listing failure or empty
/// candidate set yields [`Error::NotFound`]; no partial result is returned.
pub fn resolve_latest_issue<L: DirectoryListing + ?Sized>(
    listing: &L,
    options: &LocatorOptions,
) -> Result<ResolvedIssue> {
    log::info!("Checking {}/{}", options.repo, options.base_path);
    let folders = list_or_not_found(listing, &options.base_path)?;
    let folder = select_issue_folder(&folders)?;
    log::info!("Latest issue: {}", folder);

    let folder_path = options.folder_path(&folder);
    let files = list_or_not_found(listing, &folder_path)?;
    let artifact = select_artifact(&files, &options.extension)?;
    log::debug!("Selected artifact {}", artifact.path);

    Ok(ResolvedIssue {
        artifact_url: artifact_url(artifact, options),
        issue_label: folder,
    })
}

fn list_or_not_found<L: DirectoryListing + ?Sized>(
    listing: &L,
    path: &str,
) -> Result<Vec<RepoEntry>> {
    listing.list_directory(path).map_err(|e| {
        log::warn!("Listing {} failed: {}", path, e);
        Error::NotFound(format!("listing of '{}' unavailable: {}", path, e))
    })
}

/// Pick the latest issue folder from a base-path listing.
///
/// Candidates are directories whose name starts with an ASCII digit. If at
/// least one candidate name holds a valid date, the maximum `(date, name)`
/// wins. Only when no candidate has a date does the lexicographically
/// greatest name win.
pub fn select_issue_folder(entries: &[RepoEntry]) -> Result<String> {
    let candidates: Vec<&RepoEntry> = entries
        .iter()
        .filter(|e| e.is_dir() && e.name.starts_with(|c: char| c.is_ascii_digit()))
        .collect();

    if candidates.is_empty() {
        return Err(Error::NotFound("no issue folders published".to_string()));
    }

    let latest_dated = candidates
        .iter()
        .filter_map(|e| {
            parse_issue_date(&e.name).map(|date| FolderKey {
                date,
                name: e.name.as_str(),
            })
        })
        .max();

    let name = match latest_dated {
        Some(key) => key.name,
        None => {
            log::debug!("No dated issue folders, falling back to name order");
            candidates
                .iter()
                .map(|e| e.name.as_str())
                .max()
                .ok_or_else(|| Error::NotFound("no issue folders published".to_string()))?
        }
    };

    Ok(name.to_string())
}

/// Pick the latest artifact from an issue folder listing.
///
/// Candidates are files whose name ends with `.{extension}` (ASCII
/// case-insensitive). The maximum under [`ArtifactKey`] is returned.
pub fn select_artifact<'a>(entries: &'a [RepoEntry], extension: &str) -> Result<&'a RepoEntry> {
    let suffix = format!(".{}", extension.to_ascii_lowercase());

    entries
        .iter()
        .filter(|e| e.is_file() && e.name.to_ascii_lowercase().ends_with(&suffix))
        .max_by_key(|e| ArtifactKey::new(&e.name, &e.path))
        .ok_or_else(|| Error::NotFound(format!("no {} artifact in issue folder", suffix)))
}

/// Download location of an artifact.
///
/// Uses the entry's direct link when present. Otherwise synthesizes
/// `{repo_root}/raw/{default_branch}/{path}`, which is a dead link if the
/// configured branch is not the repository's default branch.
pub fn artifact_url(entry: &RepoEntry, options: &LocatorOptions) -> String {
    match entry.download_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            log::warn!(
                "No download link for {}, assuming branch '{}'",
                entry.path,
                options.default_branch
            );
            format!(
                "{}/raw/{}/{}",
                options.repo_root(),
                options.default_branch,
                entry.path
            )
        }
    }
}
