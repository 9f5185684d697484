//! Commit-email discovery heuristic.
//!
//! Best-effort search for a user's real commit email across two data
//! sources: one page of public events, then commits from up to 10 of
//! the user's repositories. Noreply addresses are never returned.
//! Fetch failures are logged and the search moves on; the heuristic
//! itself never fails.
use log::{debug, warn};

use crate::{
    github::client::GithubClient,
    github::models::{Event, RepoCommit, RepoSummary},
    github::NOREPLY_MARKER,
    identifier::Username,
};

/// Push event type tag in the events listing.
const PUSH_EVENT: &str = "PushEvent";

/// Maximum number of candidate repositories whose commits are fetched.
const MAX_REPOS_TO_CHECK: usize = 10;

/// Whether an email is a GitHub synthetic noreply address.
pub(crate) fn is_noreply(email: &str) -> bool {
    email.contains(NOREPLY_MARKER)
}

/// First non-noreply author email attached to a push event, scanning
/// events in returned order.
pub(crate) fn email_from_events(events: &[Event]) -> Option<String> {
    for event in events {
        if event.kind != PUSH_EVENT {
            continue;
        }
        let Some(commits) = &event.payload.commits else {
            continue;
        };
        for commit in commits {
            if let Some(email) = commit.author.as_ref().and_then(|a| a.email.as_deref()) {
                if !is_noreply(email) {
                    return Some(email.to_string());
                }
            }
        }
    }
    None
}

/// First non-noreply author email in a commit listing, in returned
/// order.
pub(crate) fn email_from_commits(commits: &[RepoCommit]) -> Option<String> {
    for commit in commits {
        if let Some(email) = commit.commit.author.as_ref().and_then(|a| a.email.as_deref()) {
            if !is_noreply(email) {
                return Some(email.to_string());
            }
        }
    }
    None
}

/// Candidate repositories for the commit scan: non-forks are more
/// likely to carry the user's own commits, so they are preferred; the
/// full set is the fallback when every repository is a fork. At most
/// [`MAX_REPOS_TO_CHECK`] candidates are kept.
pub(crate) fn candidate_repos(repos: Vec<RepoSummary>) -> Vec<RepoSummary> {
    let non_forked: Vec<RepoSummary> = repos.iter().filter(|r| !r.fork).cloned().collect();
    let pool = if non_forked.is_empty() {
        repos
    } else {
        non_forked
    };
    pool.into_iter().take(MAX_REPOS_TO_CHECK).collect()
}

/// Find the most likely real commit email for a user, or `None` if
/// nothing usable is discoverable.
///
/// Bounded API cost: one events fetch, one repository listing fetch
/// and at most [`MAX_REPOS_TO_CHECK`] commit listing fetches. No
/// retries. Short-circuits on the first acceptable match.
pub async fn find_commit_email(client: &GithubClient, username: &Username) -> Option<String> {
    match client.get_public_events(username).await {
        Ok(events) => {
            if let Some(email) = email_from_events(&events) {
                return Some(email);
            }
        }
        Err(e) => warn!("Failed to fetch commit email from events: {e}"),
    }

    let repos = match client.get_repos(username).await {
        Ok(repos) => repos,
        Err(e) => {
            warn!("Failed to fetch repos: {e}");
            return None;
        }
    };
    for repo in candidate_repos(repos) {
        let commits = match client
            .get_commits(&repo.owner.login, &repo.name, username)
            .await
        {
            Ok(commits) => commits,
            Err(e) => {
                debug!(
                    "Failed to fetch commits from {}/{}: {e}",
                    repo.owner.login, repo.name
                );
                continue;
            }
        };
        if let Some(email) = email_from_commits(&commits) {
            return Some(email);
        }
    }
    None
}

#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]
    use serde_json::json;

    use super::*;

    /// Parse an events listing fixture.
    fn events(value: serde_json::Value) -> Vec<Event> {
        serde_json::from_value(value).unwrap()
    }

    /// Parse a commit listing fixture.
    fn commits(value: serde_json::Value) -> Vec<RepoCommit> {
        serde_json::from_value(value).unwrap()
    }

    /// Parse a repository listing fixture.
    fn repos(value: serde_json::Value) -> Vec<RepoSummary> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn events_scan_returns_first_real_email() {
        let events = events(json!([
            {"type": "WatchEvent", "payload": {}},
            {"type": "PushEvent", "payload": {"commits": [
                {"author": {"name": "octocat", "email": "1+octocat@users.noreply.github.com"}},
                {"author": {"name": "octocat", "email": "octocat@example.com"}},
            ]}},
            {"type": "PushEvent", "payload": {"commits": [
                {"author": {"name": "octocat", "email": "later@example.com"}},
            ]}},
        ]));
        assert_eq!(
            email_from_events(&events),
            Some("octocat@example.com".to_string())
        );
    }

    #[test]
    fn events_scan_never_returns_noreply() {
        let events = events(json!([
            {"type": "PushEvent", "payload": {"commits": [
                {"author": {"name": "octocat", "email": "1+octocat@users.noreply.github.com"}},
                {"author": {"name": "bot", "email": "49699333+dependabot[bot]@users.noreply.github.com"}},
            ]}},
        ]));
        assert_eq!(email_from_events(&events), None);
    }

    #[test]
    fn events_scan_handles_missing_payload_pieces() {
        let events = events(json!([
            {"type": "PushEvent"},
            {"type": "PushEvent", "payload": {"commits": [{"author": null}, {}]}},
            {"type": "IssuesEvent", "payload": {"action": "opened"}},
        ]));
        assert_eq!(email_from_events(&events), None);
    }

    #[test]
    fn commits_scan_skips_noreply_and_missing_authors() {
        let commits = commits(json!([
            {"commit": {"author": null}},
            {"commit": {"author": {"name": "octocat", "email": "1+octocat@users.noreply.github.com"}}},
            {"commit": {"author": {"name": "octocat", "email": "work@example.com"}}},
        ]));
        assert_eq!(
            email_from_commits(&commits),
            Some("work@example.com".to_string())
        );
    }

    #[test]
    fn commits_scan_empty_listing() {
        assert_eq!(email_from_commits(&commits(json!([]))), None);
    }

    #[test]
    fn candidates_prefer_non_forks() {
        let repos = repos(json!([
            {"name": "a-fork", "fork": true, "owner": {"login": "octocat"}},
            {"name": "own", "fork": false, "owner": {"login": "octocat"}},
        ]));
        let candidates = candidate_repos(repos);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "own");
    }

    #[test]
    fn candidates_fall_back_to_forks_when_nothing_else() {
        let repos = repos(json!([
            {"name": "a-fork", "fork": true, "owner": {"login": "octocat"}},
            {"name": "b-fork", "fork": true, "owner": {"login": "octocat"}},
        ]));
        let candidates = candidate_repos(repos);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn candidates_are_capped() {
        let listing: Vec<serde_json::Value> = (0..30)
            .map(|i| json!({"name": format!("repo-{i}"), "fork": false, "owner": {"login": "octocat"}}))
            .collect();
        let candidates = candidate_repos(repos(json!(listing)));
        assert_eq!(candidates.len(), MAX_REPOS_TO_CHECK);
        // Listing order (most recently updated first) is preserved.
        assert_eq!(candidates[0].name, "repo-0");
    }

    #[test]
    fn noreply_marker_matches_every_synthetic_form() {
        assert!(is_noreply("1+octocat@users.noreply.github.com"));
        assert!(is_noreply("noreply@noreply.github.com"));
        assert!(!is_noreply("octocat@example.com"));
    }
}
