//! GitHub contents API access.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;

use issuedigest::{DirectoryListing, Error, RepoEntry};

const API_BASE: &str = "https://api.github.com";

// The contents API rejects requests without a browser-like agent
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Directory listings and downloads from a GitHub repository.
pub struct GitHubContents {
    client: Client,
    repo: String,
    token: Option<String>,
}

impl GitHubContents {
    /// Create a client for `owner/name`, authenticating when a token is given.
    pub fn new(repo: &str, token: Option<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self {
            client,
            repo: repo.to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match self.token {
            Some(ref token) => request.header("Authorization", format!("token {}", token)),
            None => request,
        }
    }

    /// Download a file into memory.
    pub fn download(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        log::debug!("GET {}", url);
        let response = self.get(url).send()?;
        if !response.status().is_success() {
            return Err(format!("download failed: HTTP {} for {}", response.status(), url).into());
        }
        Ok(response.bytes()?.to_vec())
    }
}

impl DirectoryListing for GitHubContents {
    fn list_directory(&self, path: &str) -> issuedigest::Result<Vec<RepoEntry>> {
        let url = format!("{}/repos/{}/contents/{}", API_BASE, self.repo, path);
        log::debug!("GET {}", url);

        let response = self
            .get(&url)
            .send()
            .map_err(|e| Error::Listing(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Listing(format!("HTTP {} for {}", status, path)));
        }

        let body = response
            .text()
            .map_err(|e| Error::Listing(e.to_string()))?;
        RepoEntry::list_from_json(&body)
    }
}
