//! Error handling for the gh-lookup crate.
use std::{error::Error as StdError, fmt};

/// Error type for the gh-lookup crate.
#[derive(Debug)]
pub struct GhLookupError {
    /// Inner error.
    inner: Box<Inner>,
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the gh-lookup crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: GhLookupErrorKind,

    /// HTTP status, when the API answered with a non-2xx code.
    status: Option<u16>,

    /// Source error.
    source: Option<BoxError>,
}

/// Kind of failure, one variant per operation or layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GhLookupErrorKind {
    /// Error fetching a user profile.
    GetUser,

    /// Error fetching a user's public events.
    GetEvents,

    /// Error fetching a user's repositories.
    GetRepos,

    /// Error fetching a repository's commits.
    GetCommits,

    /// Error fetching a repository's issue listing.
    GetIssues,

    /// Malformed identifier, rejected before any network call.
    Validation,

    /// Error reading or writing the configuration.
    Config,

    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,
}

impl GhLookupError {
    /// Create a new error.
    pub(crate) fn new(kind: GhLookupErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                status: None,
                source: None,
            }),
        }
    }

    /// Attach a text message as the error source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Attach the HTTP status the API answered with.
    pub(crate) fn with_status(mut self, status: u16) -> Self {
        self.inner.status = Some(status);
        self
    }

    /// HTTP status, when the API answered with a non-2xx code.
    pub fn status(&self) -> Option<u16> {
        self.inner.status
    }

    /// Text of the source error, if any.
    fn source_text(&self) -> Option<String> {
        self.inner.source.as_ref().map(|e| e.to_string())
    }

    /// Classify the error into the message shown to the user.
    ///
    /// Validation messages pass through untouched, a 404 names the
    /// missing entity, a rate-limited 403 gets its own message and
    /// everything else falls back to the raw error text.
    pub fn user_message(&self) -> String {
        if self.inner.kind == GhLookupErrorKind::Validation {
            return self.source_text().unwrap_or_else(|| self.to_string());
        }
        match self.inner.status {
            Some(404) => match self.inner.kind {
                GhLookupErrorKind::GetIssues => {
                    "That repository does not exist. Please check the name and try again."
                        .to_string()
                }
                _ => "That user does not exist. Please check the username and try again."
                    .to_string(),
            },
            Some(403)
                if self
                    .source_text()
                    .is_some_and(|text| text.to_lowercase().contains("api rate limit exceeded")) =>
            {
                "API rate limit exceeded. Please wait and try again later.".to_string()
            }
            _ => format!("unexpected error: {self}"),
        }
    }
}

impl fmt::Display for GhLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.inner.kind)?;
        if let Some(status) = self.inner.status {
            write!(f, " (http {status})")?;
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for GhLookupError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for GhLookupError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhLookupErrorKind::Reqwest,
                status: e.status().map(|s| s.as_u16()),
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<serde_json::Error> for GhLookupError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhLookupErrorKind::Serde,
                status: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl From<std::io::Error> for GhLookupError {
    fn from(e: std::io::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: GhLookupErrorKind::Config,
                status: None,
                source: Some(Box::new(e)),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_for_missing_user() {
        let err = GhLookupError::new(GhLookupErrorKind::GetUser)
            .with_status(404)
            .with_text("Not Found");
        assert_eq!(
            err.user_message(),
            "That user does not exist. Please check the username and try again."
        );
    }

    #[test]
    fn message_for_missing_repository() {
        let err = GhLookupError::new(GhLookupErrorKind::GetIssues)
            .with_status(404)
            .with_text("Not Found");
        assert_eq!(
            err.user_message(),
            "That repository does not exist. Please check the name and try again."
        );
    }

    #[test]
    fn message_for_rate_limit() {
        let err = GhLookupError::new(GhLookupErrorKind::GetUser)
            .with_status(403)
            .with_text("API rate limit exceeded for 203.0.113.5.");
        assert_eq!(
            err.user_message(),
            "API rate limit exceeded. Please wait and try again later."
        );
    }

    #[test]
    fn forbidden_without_rate_limit_text_is_unexpected() {
        let err = GhLookupError::new(GhLookupErrorKind::GetUser)
            .with_status(403)
            .with_text("Resource protected by organization SAML enforcement.");
        assert!(err.user_message().starts_with("unexpected error:"));
    }

    #[test]
    fn validation_message_passes_through() {
        let err =
            GhLookupError::new(GhLookupErrorKind::Validation).with_text("Invalid username");
        assert_eq!(err.user_message(), "Invalid username");
    }
}
