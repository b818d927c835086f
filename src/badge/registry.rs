//! Docker Hub repositories API client

use crate::error::FetchError;
use serde::Deserialize;

/// Response from the Docker Hub repositories API. Only the pull count is
/// consumed; it is kept as a raw JSON value so a present-but-non-numeric
/// field can be told apart from a parse failure.
#[derive(Debug, Deserialize)]
struct RepositoryInfo {
    pull_count: Option<serde_json::Value>,
}

/// Fetches repository metadata from the Docker Hub v2 API.
pub struct DockerHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl DockerHubClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("docs-badges")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }

    /// Fetches the pull count for `repository` (as `namespace/name`).
    ///
    /// Returns `Ok(None)` when the response parses but `pull_count` is absent
    /// or not a number; that case is not an error for the caller. Non-success
    /// statuses and unparseable bodies are errors.
    pub async fn pull_count(&self, repository: &str) -> Result<Option<u64>, FetchError> {
        let url = format!("{}/v2/repositories/{}/", self.base_url, repository);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let info: RepositoryInfo = response.json().await?;
        Ok(info.pull_count.as_ref().and_then(serde_json::Value::as_u64))
    }
}
