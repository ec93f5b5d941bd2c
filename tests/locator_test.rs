//! Integration tests for latest-issue resolution.

use std::cell::RefCell;
use std::collections::HashMap;

use issuedigest::error::{Error, Result};
use issuedigest::locate::{
    parse_issue_date, resolve_latest_issue, select_artifact, select_issue_folder, ArtifactKey,
    DirectoryListing, LocatorOptions, RepoEntry,
};

/// Mock listing backed by a path map that records every request.
struct MockListing {
    entries: HashMap<String, Vec<RepoEntry>>,
    requests: RefCell<Vec<String>>,
}

impl MockListing {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn with(mut self, path: &str, entries: Vec<RepoEntry>) -> Self {
        self.entries.insert(path.to_string(), entries);
        self
    }
}

impl DirectoryListing for MockListing {
    fn list_directory(&self, path: &str) -> Result<Vec<RepoEntry>> {
        self.requests.borrow_mut().push(path.to_string());
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| Error::Listing(format!("HTTP 404 for {}", path)))
    }
}

fn folder(name: &str) -> RepoEntry {
    RepoEntry::dir(name, format!("TE/2026/{}", name))
}

fn pdf(folder: &str, name: &str) -> RepoEntry {
    let path = format!("TE/2026/{}/{}", folder, name);
    RepoEntry::file(name, path.clone()).with_download_url(format!("https://raw.example/{}", path))
}

#[test]
fn test_latest_dated_folder_wins() {
    let entries = vec![folder("2026-01-03"), folder("2026-01-17"), folder("README")];
    assert_eq!(select_issue_folder(&entries).unwrap(), "2026-01-17");
}

#[test]
fn test_unordered_listing_same_result() {
    let mut entries = vec![
        folder("2026-01-10"),
        folder("2026-01-03"),
        folder("2026-01-17"),
        folder("2025-12-27"),
    ];
    let expected = select_issue_folder(&entries).unwrap();
    entries.reverse();
    assert_eq!(select_issue_folder(&entries).unwrap(), expected);
    entries.swap(0, 2);
    assert_eq!(select_issue_folder(&entries).unwrap(), expected);
}

#[test]
fn test_no_digit_folders_is_not_found() {
    let entries = vec![folder("README"), folder("docs")];
    assert!(select_issue_folder(&entries).unwrap_err().is_not_found());
}

#[test]
fn test_dated_artifact_beats_undated() {
    let entries = vec![
        RepoEntry::file("zzz.pdf", "TE/2026/x/zzz.pdf"),
        RepoEntry::file("issue-2025-01-05.pdf", "TE/2026/x/issue-2025-01-05.pdf"),
    ];
    assert_eq!(
        select_artifact(&entries, "pdf").unwrap().name,
        "issue-2025-01-05.pdf"
    );
}

#[test]
fn test_artifact_date_from_path() {
    let key = ArtifactKey::new("issue.pdf", "TE/2026/2026-01-10/issue.pdf");
    assert_eq!(key.date(), parse_issue_date("2026-01-10"));

    let entries = vec![
        RepoEntry::file("zzz.pdf", "flat/zzz.pdf"),
        RepoEntry::file("issue.pdf", "TE/2026/2026-01-10/issue.pdf"),
    ];
    assert_eq!(select_artifact(&entries, "pdf").unwrap().name, "issue.pdf");
}

#[test]
fn test_resolve_end_to_end() {
    let listing = MockListing::new()
        .with(
            "TE/2026",
            vec![folder("2026-01-03"), folder("2026-01-10"), folder("assets")],
        )
        .with(
            "TE/2026/2026-01-10",
            vec![
                pdf("2026-01-10", "TE_2026-01-10.pdf"),
                pdf("2026-01-10", "cover.jpg"),
            ],
        );

    let issue = resolve_latest_issue(&listing, &LocatorOptions::default()).unwrap();

    assert_eq!(issue.issue_label, "2026-01-10");
    assert_eq!(
        issue.artifact_url,
        "https://raw.example/TE/2026/2026-01-10/TE_2026-01-10.pdf"
    );
    assert_eq!(
        *listing.requests.borrow(),
        vec!["TE/2026".to_string(), "TE/2026/2026-01-10".to_string()]
    );
}

#[test]
fn test_resolve_empty_folder_is_not_found() {
    let listing = MockListing::new()
        .with("TE/2026", vec![folder("2026-01-10")])
        .with("TE/2026/2026-01-10", vec![pdf("2026-01-10", "notes.txt")]);

    let result = resolve_latest_issue(&listing, &LocatorOptions::default());
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_resolve_custom_base_path() {
    let options = LocatorOptions::new().with_base_path("issues");
    let listing = MockListing::new()
        .with("issues", vec![RepoEntry::dir("12_dec", "issues/12_dec")])
        .with(
            "issues/12_dec",
            vec![RepoEntry::file("final.pdf", "issues/12_dec/final.pdf")],
        );

    let issue = resolve_latest_issue(&listing, &options).unwrap();
    assert_eq!(issue.issue_label, "12_dec");
    assert_eq!(
        issue.artifact_url,
        "https://github.com/Monkfishare/The_Economist/raw/main/issues/12_dec/final.pdf"
    );
}

#[test]
fn test_listing_from_contents_json() {
    let body = r#"[
        {"name": "2026-01-10", "path": "TE/2026/2026-01-10", "type": "dir", "download_url": null},
        {"name": "README.md", "path": "TE/2026/README.md", "type": "file",
         "download_url": "https://raw.example/README.md"},
        {"name": "link", "path": "TE/2026/link", "type": "symlink"}
    ]"#;

    let entries = RepoEntry::list_from_json(body).unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].is_dir());
    assert!(entries[1].is_file());
    assert!(!entries[2].is_dir() && !entries[2].is_file());
    assert_eq!(select_issue_folder(&entries).unwrap(), "2026-01-10");
}
