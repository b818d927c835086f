//! Raw file fetcher for the source repository's branches

use crate::error::FetchError;
use tracing::debug;

/// Fetches raw file contents from the repository's branches.
pub struct GitHubSource {
    client: reqwest::Client,
    base_url: String,
    repo: String,
}

impl GitHubSource {
    /// Creates a source for `repo` (as `owner/name`) served from `base_url`.
    pub fn new(base_url: &str, repo: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("docs-badges")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            repo: repo.to_string(),
        }
    }

    /// Fetches one file from one branch and returns the body as text.
    ///
    /// Any non-200 status is an error carrying the status and URL. There is
    /// no retry; transport timeouts are whatever the client defaults to.
    pub async fn fetch_file(&self, branch: &str, file_path: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}/{}/{}", self.base_url, self.repo, branch, file_path);
        debug!("fetching {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status { status, url });
        }

        Ok(response.text().await?)
    }
}
