//! Download Badge
//! - registry.rs: Docker Hub repositories API client
//! - widget.rs: badge display state and markup rendering

pub mod registry;
pub mod widget;

pub use registry::DockerHubClient;
pub use widget::DownloadBadge;
