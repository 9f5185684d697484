//! Next issue number prediction.
//!
//! Issues and pull requests share one number sequence, so the next
//! number is the most recently created one plus one, or 1 for a
//! repository with neither.
use crate::{errors::GhLookupError, github::client::GithubClient, identifier::RepoId};

/// Next number in the sequence given the last existing one.
pub(crate) fn next_from_last(last: Option<u64>) -> u64 {
    match last {
        Some(number) => number + 1,
        None => 1,
    }
}

/// Predict the number the next issue or pull request will get.
///
/// # Errors
/// Error if the issue listing fetch fails or the repository does not
/// exist
pub async fn next_number(client: &GithubClient, repo: &RepoId) -> Result<u64, GhLookupError> {
    let last = client.get_last_issue(repo).await?;
    Ok(next_from_last(last.map(|issue| issue.number)))
}

#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]
    use serde_json::json;

    use super::*;
    use crate::github::models::Issue;

    #[test]
    fn empty_listing_predicts_one() {
        assert_eq!(next_from_last(None), 1);
    }

    #[test]
    fn next_is_last_plus_one() {
        assert_eq!(next_from_last(Some(41)), 42);
    }

    #[test]
    fn listing_entry_parses_pull_requests_too() {
        // Pull requests appear in the issues listing with the same
        // number field.
        let issue: Issue = serde_json::from_value(json!({
            "number": 1347,
            "title": "Amazing new feature",
            "pull_request": {"url": "https://api.github.com/repos/octocat/Hello-World/pulls/1347"}
        }))
        .unwrap();
        assert_eq!(next_from_last(Some(issue.number)), 1348);
    }
}
