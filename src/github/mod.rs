//! GitHub API module.
pub(crate) mod client;
pub(crate) mod models;

/// Default GitHub API base URL.
pub(crate) const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub API version header.
const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API version.
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Marker substring of GitHub's synthetic noreply addresses.
pub(crate) const NOREPLY_MARKER: &str = "noreply.github.com";
