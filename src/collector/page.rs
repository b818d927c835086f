//! Badge block rendering and page rewriting
//!
//! The documentation landing page (`docs/intro.md`) embeds a centered MDX
//! `<div>` listing the three channel versions. On every run the block is
//! rebuilt from scratch and either swapped in for the previous one or, on a
//! page that never had one, inserted right after the shields.io stat badges.

use crate::collector::{Channel, VersionMap};
use regex::{NoExpand, Regex};

/// Placeholder shown for a channel that did not resolve this run.
const NOT_AVAILABLE: &str = "N/A";

/// What happened to the page content during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// An existing badge block was replaced in place.
    Replaced,
    /// No badge block existed; a new one was inserted after the stat badges.
    Inserted,
    /// Neither a badge block nor the insertion anchor was found; the page
    /// was left untouched.
    AnchorMissing,
}

/// Renders the badge block for the page, one line per channel.
///
/// Failed channels render as `N/A` so the page never shows stale data.
pub fn render_badge_block(versions: &VersionMap) -> String {
    let version_or_na =
        |channel: Channel| versions.get(channel).unwrap_or(NOT_AVAILABLE).to_string();

    format!(
        "<div style={{{{ textAlign: 'center', padding: '0.5rem 0 1rem 0', fontSize: '0.9em' }}}}>\n  \
         <strong>Latest:</strong> <code>{}</code>\n  \
         {{' • '}}\n  \
         <strong>Dev:</strong> <code>{}</code>\n  \
         {{' • '}}\n  \
         <strong>Experimental:</strong> <code>{}</code>\n\
         </div>",
        version_or_na(Channel::Latest),
        version_or_na(Channel::Dev),
        version_or_na(Channel::Experimental),
    )
}

/// Locates and rewrites the badge block inside page content.
pub struct PageUpdater {
    /// Shape of an existing badge block: a centered `<div>` whose inline
    /// style mentions `fontSize`, through the nearest closing `</div>`.
    block_re: Regex,
    /// Insertion anchor: the last shields.io `<img>` of the stat-badge group,
    /// through that group's closing `}` and `</div>`.
    anchor_re: Regex,
}

impl PageUpdater {
    pub fn new() -> Self {
        Self {
            block_re: Regex::new(
                r"<div style=\{\{ textAlign: 'center'[^}]+fontSize[^}]+\}\}>(?s:.*?)</div>",
            )
            .unwrap(),
            anchor_re: Regex::new(r#"<img src="https://img\.shields\.io[^>]+>\s*\}\s*</div>"#)
                .unwrap(),
        }
    }

    /// Returns true if the page already carries a badge block.
    ///
    /// Presence is judged by the two label substrings rather than the full
    /// block shape, matching what the update itself replaces.
    fn has_badge_block(&self, content: &str) -> bool {
        content.contains("Latest:") && content.contains("Dev:")
    }

    /// Produces the updated page content and reports what was done.
    ///
    /// On [`UpdateOutcome::AnchorMissing`] the returned content is the input,
    /// byte for byte.
    pub fn update_content(&self, content: &str, versions: &VersionMap) -> (String, UpdateOutcome) {
        let block = render_badge_block(versions);

        if self.has_badge_block(content) {
            let updated = self.block_re.replace(content, NoExpand(&block));
            return (updated.into_owned(), UpdateOutcome::Replaced);
        }

        if let Some(anchor) = self.anchor_re.find(content) {
            let mut updated = String::with_capacity(content.len() + block.len() + 3);
            updated.push_str(&content[..anchor.end()]);
            updated.push_str("\n\n");
            updated.push_str(&block);
            updated.push('\n');
            updated.push_str(&content[anchor.end()..]);
            return (updated, UpdateOutcome::Inserted);
        }

        (content.to_string(), UpdateOutcome::AnchorMissing)
    }
}

impl Default for PageUpdater {
    fn default() -> Self {
        Self::new()
    }
}
