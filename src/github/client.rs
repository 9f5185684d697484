//! Thin HTTP adapter over the GitHub REST API.
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use urlencoding::encode;

use super::{GITHUB_API_HEADER, GITHUB_API_VERSION};
use crate::{
    errors::{GhLookupError, GhLookupErrorKind},
    github::models::{Event, Issue, RepoCommit, RepoSummary, User},
    identifier::{RepoId, Username},
};

/// GitHub API client.
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// API base URL, without a trailing slash.
    api_url: String,

    /// Bearer token, sent when present.
    token: Option<String>,

    /// Reqwest client.
    client: reqwest::Client,
}

impl GithubClient {
    /// Create a new GithubClient.
    pub fn new(api_url: String, token: Option<String>) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Build a GET request with the standard GitHub API headers.
    fn get(&self, url: String) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "gh-lookup")
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Send a built request and parse the JSON body.
    ///
    /// A non-2xx answer becomes an error of the given kind carrying
    /// the numeric status and the response body text.
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        kind: GhLookupErrorKind,
    ) -> Result<T, GhLookupError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GhLookupError::new(kind)
                .with_status(status.as_u16())
                .with_text(&text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch a user profile.
    ///
    /// # Errors
    /// Error if the request fails or the user does not exist
    pub async fn get_user(&self, username: &Username) -> Result<User, GhLookupError> {
        let url = format!("{}/users/{}", self.api_url, username);
        self.send(self.get(url), GhLookupErrorKind::GetUser).await
    }

    /// Fetch one page of a user's public events.
    ///
    /// # Errors
    /// Error if the request fails
    pub async fn get_public_events(
        &self,
        username: &Username,
    ) -> Result<Vec<Event>, GhLookupError> {
        let url = format!("{}/users/{}/events/public", self.api_url, username);
        self.send(self.get(url), GhLookupErrorKind::GetEvents).await
    }

    /// Fetch up to 30 of a user's repositories, most recently updated
    /// first.
    ///
    /// # Errors
    /// Error if the request fails
    pub async fn get_repos(&self, username: &Username) -> Result<Vec<RepoSummary>, GhLookupError> {
        let url = format!("{}/users/{}/repos", self.api_url, username);
        let request = self
            .get(url)
            .query(&[("sort", "updated"), ("per_page", "30")]);
        self.send(request, GhLookupErrorKind::GetRepos).await
    }

    /// Fetch up to 10 commits of a repository authored by the user.
    ///
    /// # Errors
    /// Error if the request fails
    pub async fn get_commits(
        &self,
        owner: &str,
        repo: &str,
        author: &Username,
    ) -> Result<Vec<RepoCommit>, GhLookupError> {
        let url = format!(
            "{}/repos/{}/{}/commits",
            self.api_url,
            encode(owner),
            encode(repo)
        );
        let request = self
            .get(url)
            .query(&[("author", author.as_str()), ("per_page", "10")]);
        self.send(request, GhLookupErrorKind::GetCommits).await
    }

    /// Fetch the most recently created issue or pull request, if any.
    ///
    /// # Errors
    /// Error if the request fails or the repository does not exist
    pub async fn get_last_issue(&self, repo: &RepoId) -> Result<Option<Issue>, GhLookupError> {
        let url = format!(
            "{}/repos/{}/{}/issues",
            self.api_url,
            encode(&repo.owner),
            encode(&repo.name)
        );
        let request = self.get(url).query(&[
            ("state", "all"),
            ("sort", "created"),
            ("direction", "desc"),
            ("per_page", "1"),
        ]);
        let issues: Vec<Issue> = self.send(request, GhLookupErrorKind::GetIssues).await?;
        Ok(issues.into_iter().next())
    }
}
