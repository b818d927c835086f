//! One-shot collector run
//!
//! Fetches each channel strictly in declaration order so the console output
//! is deterministic, then persists `versions.json` and rewrites the badge
//! block on the documentation page. Per-channel failures are recorded and
//! reported but never abort the run; only filesystem errors on the run's own
//! outputs do.

use crate::collector::page::{PageUpdater, UpdateOutcome};
use crate::collector::{Channel, GitHubSource, VersionExtractor, VersionMap};
use crate::config::Config;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::warn;

pub async fn run(config: &Config) -> anyhow::Result<()> {
    println!("Fetching version information from GitHub...\n");

    let source = GitHubSource::new(&config.raw_base_url, &config.github_repo);
    let extractor = VersionExtractor::new();
    let mut versions = VersionMap::new();

    for channel in Channel::ALL {
        println!(
            "Fetching {} version from {} branch...",
            channel.name(),
            channel.branch()
        );

        match source
            .fetch_file(channel.branch(), &config.version_file_path)
            .await
        {
            Ok(content) => match extractor.extract(&content) {
                Some(version) => {
                    println!("✓ {}: {}", channel.name(), version);
                    versions.record(channel, Some(version));
                }
                None => {
                    println!("✗ {}: Could not parse version", channel.name());
                    versions.record(channel, None);
                }
            },
            Err(err) => {
                println!("✗ {}: {}", channel.name(), err);
                versions.record(channel, None);
            }
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("Version Summary:");
    println!("{}", "=".repeat(50));
    for (channel, version) in versions.resolved() {
        println!("{:<15}: {}", channel.name(), version);
    }

    save_versions(&config.versions_path, &versions)?;
    update_documentation_page(&config.intro_path, &versions)?;

    Ok(())
}

/// Overwrites the persisted version map. Channels that failed this run are
/// omitted entirely; there is no merging with a previous file.
fn save_versions(path: &Path, versions: &VersionMap) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&versions.resolved_map())?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    let absolute = std::path::absolute(path)?;
    println!("\n✓ Versions saved to {}", absolute.display());
    Ok(())
}

/// Rewrites the badge block on the documentation page.
///
/// A missing page is a notice, not an error. A page with no badge block and
/// no insertion anchor is left untouched and logged.
fn update_documentation_page(path: &Path, versions: &VersionMap) -> anyhow::Result<()> {
    if !path.exists() {
        println!("✗ intro.md not found");
        return Ok(());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let updater = PageUpdater::new();
    let (updated, outcome) = updater.update_content(&content, versions);

    if outcome == UpdateOutcome::AnchorMissing {
        warn!(
            "no badge block or stat-badge anchor found in {}; page left unmodified",
            path.display()
        );
        println!("✗ No badge location found in intro.md");
        return Ok(());
    }

    fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("✓ Updated intro.md with version information");
    Ok(())
}
