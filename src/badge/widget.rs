//! Download badge display state and markup
//!
//! Mirrors the widget on the docs landing page: the display text starts as
//! `Loading...`, a single fetch replaces it with the formatted pull count,
//! and any fetch failure falls back to a fixed figure rather than showing
//! nothing.

use crate::badge::DockerHubClient;

/// Initial display text before the fetch resolves.
const LOADING_TEXT: &str = "Loading...";

/// Shown when the registry is unreachable or answers with an error.
const FALLBACK_TEXT: &str = "120,000+";

/// Download counter badge for a published image.
#[derive(Debug)]
pub struct DownloadBadge {
    repository: String,
    text: String,
    mounted: bool,
}

impl DownloadBadge {
    pub fn new(repository: &str) -> Self {
        Self {
            repository: repository.to_string(),
            text: LOADING_TEXT.to_string(),
            mounted: false,
        }
    }

    /// Current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Performs the one-shot count fetch and updates the display text.
    ///
    /// Runs at most once per badge; later calls are no-ops, matching a
    /// mount-effect that does not re-trigger on re-render. A count that is
    /// absent or non-numeric leaves the text unchanged on purpose; only a
    /// failed request reaches the fallback.
    pub async fn mount(&mut self, client: &DockerHubClient) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        match client.pull_count(&self.repository).await {
            Ok(Some(count)) => {
                self.text = format!("{}+", format_with_separators(count));
            }
            Ok(None) => {}
            Err(_) => {
                self.text = FALLBACK_TEXT.to_string();
            }
        }
    }

    /// Renders the badge as the anchor snippet used on the landing page.
    ///
    /// The live-region attributes make screen readers announce the text once
    /// the count arrives.
    pub fn render(&self) -> String {
        format!(
            "<a href=\"https://hub.docker.com/r/{}\" target=\"_blank\" rel=\"noopener noreferrer\" \
             class=\"downloadBadge\" role=\"status\" aria-live=\"polite\">\
             <span class=\"emoji\" aria-hidden=\"true\">🚀</span>{} Downloads</a>",
            self.repository, self.text
        )
    }
}

/// Groups digits in threes with commas, en-US style: 1234567 -> "1,234,567".
fn format_with_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
