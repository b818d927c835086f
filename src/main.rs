use clap::{Parser, Subcommand};
use docs_badges::badge::{DockerHubClient, DownloadBadge};
use docs_badges::collector;
use docs_badges::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docs-badges")]
#[command(version, about = "Documentation site badge utilities")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Source repository as owner/name
    #[arg(long)]
    repo: Option<String>,

    /// Where to write the aggregated versions file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Documentation page carrying the version badge block
    #[arg(long)]
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the download badge markup for the published image
    Downloads,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::default();
    if let Some(repo) = cli.repo {
        config.github_repo = repo;
    }
    if let Some(out) = cli.out {
        config.versions_path = out;
    }
    if let Some(page) = cli.page {
        config.intro_path = page;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        None => runtime.block_on(collector::run(&config)),
        Some(Command::Downloads) => {
            runtime.block_on(async {
                let client = DockerHubClient::new(&config.registry_base_url);
                let mut badge = DownloadBadge::new(&config.registry_repository);
                badge.mount(&client).await;
                println!("{}", badge.render());
            });
            Ok(())
        }
    }
}
