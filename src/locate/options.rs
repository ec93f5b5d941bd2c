//! Issue locator configuration.

/// Options for resolving the latest issue.
#[derive(Debug, Clone)]
pub struct LocatorOptions {
    /// Repository in `owner/name` form
    pub repo: String,

    /// Folder that contains one sub-folder per issue
    pub base_path: String,

    /// Branch used when a download link has to be synthesized
    pub default_branch: String,

    /// Artifact file extension, without the leading dot
    pub extension: String,

    /// Host serving raw repository content
    pub raw_host: String,
}

impl LocatorOptions {
    /// Create new locator options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repository (`owner/name`).
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = repo.into();
        self
    }

    /// Set the base path holding issue folders.
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = path.into().trim_matches('/').to_string();
        self
    }

    /// Set the default branch.
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Set the artifact extension.
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into().trim_start_matches('.').to_string();
        self
    }

    /// Set the raw content host.
    pub fn with_raw_host(mut self, host: impl Into<String>) -> Self {
        self.raw_host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Repository root URL on the raw content host.
    pub fn repo_root(&self) -> String {
        format!("{}/{}", self.raw_host, self.repo)
    }

    /// Path of an issue folder below the base path.
    pub fn folder_path(&self, folder: &str) -> String {
        if self.base_path.is_empty() {
            folder.to_string()
        } else {
            format!("{}/{}", self.base_path, folder)
        }
    }
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            repo: "Monkfishare/The_Economist".to_string(),
            base_path: "TE/2026".to_string(),
            default_branch: "main".to_string(),
            extension: "pdf".to_string(),
            raw_host: "https://github.com".to_string(),
        }
    }
}
