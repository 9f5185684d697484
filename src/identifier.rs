//! User-entered identifier validation.
//!
//! Identifiers are validated before any network call: either a bare
//! GitHub username, or a repository given as `owner/name` or as a
//! GitHub URL.
use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use url::Url;

use crate::errors::{GhLookupError, GhLookupErrorKind};

/// A validated GitHub username.
///
/// Usernames are alphanumeric and hyphens, no leading hyphen, no
/// consecutive hyphens, at most 39 characters. Trailing hyphens are
/// accepted, matching GitHub's own signup rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

/// Regex for the username shape (consecutive hyphens checked separately).
#[allow(clippy::expect_used)]
fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]{0,38}$").expect("username regex is valid")
    })
}

/// Regex for a repository name segment.
#[allow(clippy::expect_used)]
fn repo_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("repo name regex is valid"))
}

impl Username {
    /// The username as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = GhLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(GhLookupError::new(GhLookupErrorKind::Validation)
                .with_text("Please enter a GitHub username"));
        }
        if !username_regex().is_match(s) || s.contains("--") {
            return Err(
                GhLookupError::new(GhLookupErrorKind::Validation).with_text("Invalid username")
            );
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated repository identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    /// Repository owner (a username or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepoId {
    /// Split a `github.com` URL into its owner and name segments.
    ///
    /// Extra path segments, query and fragment are ignored, so issue
    /// and pull request URLs resolve to their repository.
    fn from_url(input: &str) -> Option<(String, String)> {
        let url = Url::parse(input).ok()?;
        match url.host_str() {
            Some("github.com") | Some("www.github.com") => {}
            _ => return None,
        }
        let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
        let owner = segments.next()?.to_string();
        let name = segments.next()?.to_string();
        Some((owner, name))
    }
}

impl FromStr for RepoId {
    type Err = GhLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(GhLookupError::new(GhLookupErrorKind::Validation)
                .with_text("Please enter a repository as owner/name or a GitHub URL"));
        }
        let (owner, name) = if s.contains("://") {
            RepoId::from_url(s).ok_or_else(|| {
                GhLookupError::new(GhLookupErrorKind::Validation).with_text("Invalid repository")
            })?
        } else {
            match s.split('/').collect::<Vec<_>>().as_slice() {
                [owner, name] => ((*owner).to_string(), (*name).to_string()),
                _ => {
                    return Err(GhLookupError::new(GhLookupErrorKind::Validation)
                        .with_text("Invalid repository"))
                }
            }
        };
        if owner.parse::<Username>().is_err() || !repo_name_regex().is_match(&name) {
            return Err(
                GhLookupError::new(GhLookupErrorKind::Validation).with_text("Invalid repository")
            );
        }
        Ok(Self { owner, name })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn valid_usernames() {
        for name in ["octocat", "a", "torvalds", "my-user-1", "user-", "A1b2"] {
            assert!(name.parse::<Username>().is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn empty_username_has_its_own_message() {
        let err = "".parse::<Username>().unwrap_err();
        assert_eq!(err.user_message(), "Please enter a GitHub username");
    }

    #[test]
    fn invalid_usernames() {
        let too_long = "a".repeat(40);
        for name in ["-leading", "double--hyphen", too_long.as_str(), "no spaces"] {
            let err = name.parse::<Username>().unwrap_err();
            assert_eq!(err.user_message(), "Invalid username", "{name}");
        }
    }

    #[test]
    fn max_length_username_is_valid() {
        let name = "a".repeat(39);
        assert!(name.parse::<Username>().is_ok());
    }

    #[test]
    fn repo_from_owner_name() {
        let repo: RepoId = "rust-lang/cargo".parse().unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "cargo");
    }

    #[test]
    fn repo_from_url() {
        for url in [
            "https://github.com/rust-lang/cargo",
            "https://github.com/rust-lang/cargo/issues/42",
            "https://www.github.com/rust-lang/cargo?tab=readme-ov-file",
        ] {
            let repo: RepoId = url.parse().unwrap();
            assert_eq!(repo.to_string(), "rust-lang/cargo", "{url}");
        }
    }

    #[test]
    fn repo_rejects_other_hosts_and_shapes() {
        for input in [
            "",
            "justaname",
            "a/b/c",
            "https://gitlab.com/owner/name",
            "-bad/name",
            "owner/na me",
        ] {
            assert!(input.parse::<RepoId>().is_err(), "{input}");
        }
    }
}
