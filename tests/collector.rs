use docs_badges::collector;
use docs_badges::config::Config;
use mockito::{Server, ServerGuard};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INTRO_WITH_ANCHOR: &str = concat!(
    "# Welcome\n",
    "\n",
    "<div style={{ textAlign: 'center' }}>\n",
    "  {\n",
    "    <img src=\"https://img.shields.io/docker/pulls/sparkison/m3u-editor\" alt=\"pulls\" />\n",
    "  }\n",
    "</div>\n",
    "\n",
    "Getting started below.\n",
);

fn test_config(server: &ServerGuard, dir: &Path) -> Config {
    Config {
        raw_base_url: server.url(),
        github_repo: "sparkison/m3u-editor".to_string(),
        version_file_path: "config/dev.php".to_string(),
        versions_path: dir.join("versions.json"),
        intro_path: dir.join("intro.md"),
        ..Config::default()
    }
}

async fn mock_branch(server: &mut ServerGuard, branch: &str, status: usize, body: &str) {
    server
        .mock(
            "GET",
            format!("/sparkison/m3u-editor/{branch}/config/dev.php").as_str(),
        )
        .with_status(status)
        .with_body(body)
        .create_async()
        .await;
}

#[tokio::test]
async fn run_collects_versions_and_updates_both_outputs() {
    let mut server = Server::new_async().await;
    mock_branch(&mut server, "main", 200, "'version' => 'v1.0.0',").await;
    mock_branch(&mut server, "dev", 200, "'version' => 'v1.1.0-dev',").await;
    mock_branch(&mut server, "experimental", 404, "404: Not Found").await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server, dir.path());
    fs::write(&config.intro_path, INTRO_WITH_ANCHOR).unwrap();

    collector::run(&config).await.unwrap();

    // Persisted file holds exactly the two resolved channels, in order.
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.versions_path).unwrap()).unwrap();
    let object = saved.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["latest"], "v1.0.0");
    assert_eq!(object["dev"], "v1.1.0-dev");

    // The page shows all three channels, the failed one as N/A.
    let page = fs::read_to_string(&config.intro_path).unwrap();
    assert!(page.contains("<strong>Latest:</strong> <code>v1.0.0</code>"));
    assert!(page.contains("<strong>Dev:</strong> <code>v1.1.0-dev</code>"));
    assert!(page.contains("<strong>Experimental:</strong> <code>N/A</code>"));
    assert!(page.starts_with("# Welcome\n"));
    assert!(page.ends_with("Getting started below.\n"));
}

#[tokio::test]
async fn second_run_fully_overwrites_first_runs_results() {
    let dir = TempDir::new().unwrap();

    // First run: all three channels resolve.
    {
        let mut server = Server::new_async().await;
        mock_branch(&mut server, "main", 200, "'version' => 'v1.0.0',").await;
        mock_branch(&mut server, "dev", 200, "'version' => 'v1.1.0-dev',").await;
        mock_branch(&mut server, "experimental", 200, "'version' => 'v2.0.0-exp',").await;

        let config = test_config(&server, dir.path());
        fs::write(&config.intro_path, INTRO_WITH_ANCHOR).unwrap();
        collector::run(&config).await.unwrap();
    }

    // Second run: experimental goes away, latest moves forward.
    let mut server = Server::new_async().await;
    mock_branch(&mut server, "main", 200, "'version' => 'v1.2.0',").await;
    mock_branch(&mut server, "dev", 200, "'version' => 'v1.3.0-dev',").await;
    mock_branch(&mut server, "experimental", 404, "gone").await;

    let config = test_config(&server, dir.path());
    collector::run(&config).await.unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.versions_path).unwrap()).unwrap();
    let object = saved.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["latest"], "v1.2.0");
    assert!(!object.contains_key("experimental"));

    let page = fs::read_to_string(&config.intro_path).unwrap();
    assert!(page.contains("<code>v1.2.0</code>"));
    assert!(!page.contains("v1.0.0"));
    assert!(!page.contains("v2.0.0-exp"));
    assert!(page.contains("<strong>Experimental:</strong> <code>N/A</code>"));
    // Still exactly one badge block.
    assert_eq!(page.matches("<strong>Latest:</strong>").count(), 1);
}

#[tokio::test]
async fn one_channel_transport_failure_leaves_others_unaffected() {
    let mut server = Server::new_async().await;
    mock_branch(&mut server, "main", 200, "'version' => 'v1.0.0',").await;
    mock_branch(&mut server, "dev", 500, "boom").await;
    mock_branch(&mut server, "experimental", 200, "'version' => 'v2.0.0-exp',").await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server, dir.path());
    fs::write(&config.intro_path, INTRO_WITH_ANCHOR).unwrap();

    collector::run(&config).await.unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.versions_path).unwrap()).unwrap();
    let object = saved.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["latest"], "v1.0.0");
    assert_eq!(object["experimental"], "v2.0.0-exp");

    let page = fs::read_to_string(&config.intro_path).unwrap();
    assert!(page.contains("<strong>Dev:</strong> <code>N/A</code>"));
}

#[tokio::test]
async fn parse_miss_is_recorded_as_absent_not_error() {
    let mut server = Server::new_async().await;
    mock_branch(&mut server, "main", 200, "'name' => 'm3u editor',").await;
    mock_branch(&mut server, "dev", 200, "'version' => 'v1.1.0-dev',").await;
    mock_branch(&mut server, "experimental", 404, "nope").await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server, dir.path());
    fs::write(&config.intro_path, INTRO_WITH_ANCHOR).unwrap();

    collector::run(&config).await.unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.versions_path).unwrap()).unwrap();
    let object = saved.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["dev"], "v1.1.0-dev");
}

#[tokio::test]
async fn missing_page_is_a_notice_and_versions_are_still_saved() {
    let mut server = Server::new_async().await;
    mock_branch(&mut server, "main", 200, "'version' => 'v1.0.0',").await;
    mock_branch(&mut server, "dev", 404, "nope").await;
    mock_branch(&mut server, "experimental", 404, "nope").await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server, dir.path());
    // No intro.md in the temp dir at all.

    collector::run(&config).await.unwrap();

    assert!(config.versions_path.exists());
    assert!(!config.intro_path.exists());
}

#[tokio::test]
async fn page_without_anchor_is_left_byte_identical() {
    let mut server = Server::new_async().await;
    mock_branch(&mut server, "main", 200, "'version' => 'v1.0.0',").await;
    mock_branch(&mut server, "dev", 404, "nope").await;
    mock_branch(&mut server, "experimental", 404, "nope").await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server, dir.path());
    let plain_page = "# Welcome\n\nNothing badge-like here.\n";
    fs::write(&config.intro_path, plain_page).unwrap();

    collector::run(&config).await.unwrap();

    assert_eq!(fs::read_to_string(&config.intro_path).unwrap(), plain_page);
}
