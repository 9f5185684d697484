//! # gh-lookup
//!
//! Look up GitHub commit author info and next issue numbers
//!
//! ## Usage
//!
//! ```txt
//! Usage: gh-lookup [OPTIONS] <COMMAND>
//!
//! Commands:
//!   author       Look up a user's name and most likely commit email
//!   next-number  Predict the number of the next issue or pull request
//!
//! Options:
//!   -c, --config <CONFIG>  Custom configuration file
//!       --api-url <URL>    Override the GitHub API base URL
//!   -v, --verbose...       Verbose mode (-v, -vv)
//!   -h, --help             Print help
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod email;
pub(crate) mod errors;
pub(crate) mod identifier;
pub(crate) mod number;
pub(crate) mod resolve;

mod github;

pub use cli::{gh_lookup_main, Command, GhLookupCli};
pub use config::GhLookupConfig;
pub use errors::GhLookupError;
pub use github::client::GithubClient;
pub use identifier::{RepoId, Username};
pub use resolve::{AuthorInfo, EmailSource};
