//! Issue date extraction and artifact ordering.

use std::cmp::Ordering;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

fn issue_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode digits
    RE.get_or_init(|| Regex::new(r"20[0-9]{2}-[0-9]{2}-[0-9]{2}").expect("valid date pattern"))
}

/// Extract a `YYYY-MM-DD` date (year 2000..2099) embedded anywhere in `text`.
///
/// Only the first match is considered. If that match is not a real calendar
/// date (e.g. `2025-13-40`), the result is `None` even when a later match
/// would be valid.
pub fn parse_issue_date(text: &str) -> Option<NaiveDate> {
    let m = issue_date_regex().find(text)?;
    NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok()
}

/// Ranking key for artifact candidates inside an issue folder.
///
/// Any dated artifact outranks any undated one; within a tier the later
/// date wins, then the lexicographically greater name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArtifactKey {
    /// No date in the file name or path
    Undated { name: String },
    /// Date found in the file name, or failing that in its path
    Dated { date: NaiveDate, name: String },
}

impl ArtifactKey {
    /// Build the key for a file name and its repository path.
    pub fn new(name: &str, path: &str) -> Self {
        match parse_issue_date(name).or_else(|| parse_issue_date(path)) {
            Some(date) => ArtifactKey::Dated {
                date,
                name: name.to_string(),
            },
            None => ArtifactKey::Undated {
                name: name.to_string(),
            },
        }
    }

    /// The embedded date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            ArtifactKey::Dated { date, .. } => Some(*date),
            ArtifactKey::Undated { .. } => None,
        }
    }
}

/// Ranking key for issue folders that carry a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FolderKey<'a> {
    pub date: NaiveDate,
    pub name: &'a str,
}

impl Ord for FolderKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.name.cmp(other.name))
    }
}

impl PartialOrd for FolderKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
