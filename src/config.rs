use std::path::PathBuf;

// =============================================================================
// Fixed remote identifiers
// =============================================================================

/// Repository the version branches live in, as `owner/name`.
pub const GITHUB_REPO: &str = "sparkison/m3u-editor";

/// Host serving raw file contents per branch.
pub const RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// File inside the repository that carries the version assignment.
pub const VERSION_FILE_PATH: &str = "config/dev.php";

/// Docker Hub v2 API host.
pub const REGISTRY_BASE_URL: &str = "https://hub.docker.com";

/// Image whose pull count the download badge shows.
pub const REGISTRY_REPOSITORY: &str = "sparkison/m3u-editor";

/// Immutable run configuration, constructed once in `main` and passed down.
///
/// Remote identifiers and output paths are plain values here rather than
/// module globals so tests can point a run at a mock server and a temp dir.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for raw file fetches (overridden in tests).
    pub raw_base_url: String,
    /// `owner/name` of the source repository.
    pub github_repo: String,
    /// Path of the version-carrying file, relative to the repository root.
    pub version_file_path: String,
    /// Where the aggregated version map is persisted.
    pub versions_path: PathBuf,
    /// The documentation page carrying the version badge block.
    pub intro_path: PathBuf,
    /// Base URL for the Docker Hub API (overridden in tests).
    pub registry_base_url: String,
    /// `namespace/name` of the published image.
    pub registry_repository: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_base_url: RAW_BASE_URL.to_string(),
            github_repo: GITHUB_REPO.to_string(),
            version_file_path: VERSION_FILE_PATH.to_string(),
            versions_path: PathBuf::from("versions.json"),
            intro_path: PathBuf::from("docs/intro.md"),
            registry_base_url: REGISTRY_BASE_URL.to_string(),
            registry_repository: REGISTRY_REPOSITORY.to_string(),
        }
    }
}
