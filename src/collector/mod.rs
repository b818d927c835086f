//! Version Collector
//! - source.rs: raw file fetcher for the GitHub branches
//! - extract.rs: version token extraction from fetched file contents
//! - page.rs: badge block rendering and intro.md rewriting
//! - run.rs: one-shot orchestration and console output

pub mod extract;
pub mod page;
pub mod run;
pub mod source;

pub use extract::VersionExtractor;
pub use run::run;
pub use source::GitHubSource;

use indexmap::IndexMap;

/// A release track, bound to a fixed branch of the source repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Latest,
    Dev,
    Experimental,
}

impl Channel {
    /// All channels, in the order they are fetched and displayed.
    pub const ALL: [Channel; 3] = [Channel::Latest, Channel::Dev, Channel::Experimental];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Latest => "latest",
            Channel::Dev => "dev",
            Channel::Experimental => "experimental",
        }
    }

    pub fn branch(self) -> &'static str {
        match self {
            Channel::Latest => "main",
            Channel::Dev => "dev",
            Channel::Experimental => "experimental",
        }
    }
}

/// Resolved versions per channel for one run.
///
/// `None` marks a channel whose fetch or extraction failed; it renders as
/// `N/A` on the documentation page and is omitted from `versions.json`.
/// Iteration order follows insertion order, which `run` keeps aligned with
/// [`Channel::ALL`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionMap {
    entries: IndexMap<Channel, Option<String>>,
}

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for one channel, replacing any earlier entry.
    pub fn record(&mut self, channel: Channel, version: Option<String>) {
        self.entries.insert(channel, version);
    }

    /// The resolved version for a channel, if that channel succeeded.
    pub fn get(&self, channel: Channel) -> Option<&str> {
        self.entries.get(&channel)?.as_deref()
    }

    /// Channels that resolved to a version, in insertion order.
    pub fn resolved(&self) -> impl Iterator<Item = (Channel, &str)> {
        self.entries
            .iter()
            .filter_map(|(channel, version)| Some((*channel, version.as_deref()?)))
    }

    /// The resolved channels keyed by name, in insertion order, ready for
    /// serialization. Failed channels are omitted entirely.
    pub fn resolved_map(&self) -> IndexMap<&'static str, &str> {
        self.resolved()
            .map(|(channel, version)| (channel.name(), version))
            .collect()
    }
}
