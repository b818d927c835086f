//! Version token extraction
//!
//! The repository publishes its version as a PHP config assignment:
//!
//! ```text
//! 'version' => 'v0.8.1',
//! ```
//!
//! Extraction captures the single-quoted value verbatim. A missing
//! assignment is an ordinary `None`, never an error.

use regex::Regex;

/// Extracts the version token from a fetched config file.
pub struct VersionExtractor {
    version_re: Regex,
}

impl VersionExtractor {
    pub fn new() -> Self {
        Self {
            // Match: 'version' => 'v1.2.3'
            version_re: Regex::new(r"'version'\s*=>\s*'([^']+)'").unwrap(),
        }
    }

    /// Returns the first captured version value, untrimmed and untransformed.
    pub fn extract(&self, content: &str) -> Option<String> {
        self.version_re
            .captures(content)
            .map(|captures| captures[1].to_string())
    }
}

impl Default for VersionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
