//! Author result assembly.
//!
//! Combines the fetched user profile with the outcome of the
//! commit-email heuristic into the final displayed name and email.
use std::fmt;

use tokio::join;

use crate::{
    email::find_commit_email, errors::GhLookupError, github::client::GithubClient,
    github::models::User, identifier::Username,
};

/// Where the displayed email came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailSource {
    /// Discovered in the user's public commit activity.
    Commit,

    /// The user's public profile email.
    Profile,

    /// Constructed GitHub noreply placeholder; nothing better was
    /// discoverable.
    Noreply,
}

/// Resolved author information for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    /// Display name, the profile name falling back to the login.
    pub name: String,

    /// Chosen email address.
    pub email: String,

    /// Where the email came from.
    pub source: EmailSource,
}

impl AuthorInfo {
    /// Select display name and email from a profile and an optional
    /// discovered commit email.
    ///
    /// Email priority: commit email, then profile email, then the
    /// constructed `{id}+{login}@users.noreply.github.com` placeholder.
    /// A commit email equal to the profile email counts as the profile
    /// one.
    pub(crate) fn assemble(user: User, commit_email: Option<String>) -> Self {
        let name = user
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| user.login.clone());
        let profile_email = user.email.filter(|e| !e.is_empty());
        let (email, source) = match commit_email {
            Some(email) => {
                let source = if profile_email.as_deref() == Some(email.as_str()) {
                    EmailSource::Profile
                } else {
                    EmailSource::Commit
                };
                (email, source)
            }
            None => match profile_email {
                Some(email) => (email, EmailSource::Profile),
                None => (
                    format!("{}+{}@users.noreply.github.com", user.id, user.login),
                    EmailSource::Noreply,
                ),
            },
        };
        Self {
            name,
            email,
            source,
        }
    }

    /// Note explaining the email provenance, when one applies.
    pub fn note(&self) -> Option<&'static str> {
        match self.source {
            EmailSource::Commit => Some("Email address found from recent commits."),
            EmailSource::Profile => None,
            EmailSource::Noreply => Some(
                "No public email address found from recent commits. \
                 Here's their GitHub noreply address.",
            ),
        }
    }

    /// The combined `Name <email>` form, as used in git author lines.
    pub fn signature(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

impl fmt::Display for AuthorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nEmail: {}", self.name, self.email)?;
        if let Some(note) = self.note() {
            write!(f, "\n{note}")?;
        }
        Ok(())
    }
}

/// Resolve a username into author information.
///
/// The profile fetch and the commit-email heuristic run concurrently;
/// the heuristic cannot fail, so only the profile fetch decides
/// success.
///
/// # Errors
/// Error if the profile fetch fails
pub async fn author_info(
    client: &GithubClient,
    username: &Username,
) -> Result<AuthorInfo, GhLookupError> {
    let (user, commit_email) = join!(
        client.get_user(username),
        find_commit_email(client, username)
    );
    Ok(AuthorInfo::assemble(user?, commit_email))
}
