//! Serde models for the GitHub API responses.
//!
//! Only the fields the resolver reads are declared; everything else in
//! the API payloads is ignored.
use serde::Deserialize;

/// A user profile from `/users/{username}`.
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    /// Login name.
    pub login: String,

    /// Numeric user id.
    pub id: u64,

    /// Display name, when set.
    pub name: Option<String>,

    /// Public profile email, when set.
    pub email: Option<String>,
}

/// One entry of `/users/{username}/events/public`.
#[derive(Deserialize, Debug, Clone)]
pub struct Event {
    /// Event type, `"PushEvent"` for pushes.
    #[serde(rename = "type")]
    pub kind: String,

    /// Event payload; commits are only present on push events.
    #[serde(default)]
    pub payload: EventPayload,
}

/// Payload of an event.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EventPayload {
    /// Commits attached to a push event.
    pub commits: Option<Vec<EventCommit>>,
}

/// A commit as embedded in a push event payload.
#[derive(Deserialize, Debug, Clone)]
pub struct EventCommit {
    /// Author signature.
    pub author: Option<CommitSig>,
}

/// A commit author or committer signature.
#[derive(Deserialize, Debug, Clone)]
pub struct CommitSig {
    /// Signature name.
    pub name: Option<String>,

    /// Signature email.
    pub email: Option<String>,
}

/// One entry of `/users/{username}/repos`.
#[derive(Deserialize, Debug, Clone)]
pub struct RepoSummary {
    /// Repository name.
    pub name: String,

    /// Owner of the repository.
    pub owner: RepoOwner,

    /// Whether the repository is a fork.
    pub fork: bool,
}

/// Owner of a repository.
#[derive(Deserialize, Debug, Clone)]
pub struct RepoOwner {
    /// Owner login name.
    pub login: String,
}

/// One entry of `/repos/{owner}/{repo}/commits`.
#[derive(Deserialize, Debug, Clone)]
pub struct RepoCommit {
    /// The git commit data.
    pub commit: CommitDetail,
}

/// Git data of a listed commit.
#[derive(Deserialize, Debug, Clone)]
pub struct CommitDetail {
    /// Author signature.
    pub author: Option<CommitSig>,
}

/// One entry of `/repos/{owner}/{name}/issues`.
///
/// The listing includes pull requests, which share the same number
/// sequence.
#[derive(Deserialize, Debug, Clone)]
pub struct Issue {
    /// Issue or pull request number.
    pub number: u64,
}
