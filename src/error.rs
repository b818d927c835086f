use thiserror::Error;

/// Failure of a single remote GET, either at the transport level or as a
/// non-2xx status. Callers recover locally (a channel falls back to "not
/// available", the download badge falls back to its fixed text); this never
/// aborts a whole run on its own.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch {url}: {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
