//! Command line options for the gh-lookup tool
use clap::{Parser, Subcommand};

use crate::{
    config::GhLookupConfig,
    errors::GhLookupError,
    github::client::GithubClient,
    identifier::{RepoId, Username},
    number::next_number,
    resolve::author_info,
};

/// gh-lookup - Look up GitHub commit author info and next issue numbers
#[derive(Parser, Clone, Debug)]
pub struct GhLookupCli {
    /// What to look up
    #[command(subcommand)]
    pub command: Command,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the GitHub API base URL
    #[arg(long = "api-url")]
    pub api_url: Option<String>,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Lookup subcommands, one per tool
#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Look up a user's name and most likely commit email
    Author {
        /// GitHub username
        username: String,
    },

    /// Predict the number of the next issue or pull request
    NextNumber {
        /// Repository as owner/name or a GitHub URL
        repository: String,
    },
}

/// Run the gh-lookup tool with the provided command line options
/// # Errors
/// Error if the lookup fails
pub async fn gh_lookup_main(args: GhLookupCli) -> Result<(), GhLookupError> {
    let config = GhLookupConfig::try_new(args)?;
    let client = GithubClient::new(config.api_url(), config.token());
    match &config.cli_args.command {
        Command::Author { username } => {
            let username: Username = username.parse()?;
            let info = author_info(&client, &username).await?;
            println!("{info}");
            println!();
            println!("{}", info.signature());
        }
        Command::NextNumber { repository } => {
            let repo: RepoId = repository.parse()?;
            let next = next_number(&client, &repo).await?;
            println!("{next}");
        }
    }
    Ok(())
}
