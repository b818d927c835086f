//! Utilities behind the m3u-editor documentation site.
//!
//! Two independent components live here:
//!
//! - [`collector`]: fetches the version string published on each release
//!   branch of the main repository, saves the result as `versions.json` and
//!   rewrites the version badge block in `docs/intro.md`.
//! - [`badge`]: fetches the image pull count from Docker Hub and renders the
//!   download badge snippet used on the landing page.

pub mod badge;
pub mod collector;
pub mod config;
pub mod error;
