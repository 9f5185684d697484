//! Configuration handling
use std::{
    fs::{create_dir_all, read_to_string, File},
    io::Write,
    path::PathBuf,
};

use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::{
    cli::GhLookupCli,
    errors::{GhLookupError, GhLookupErrorKind},
    github::GITHUB_API_URL,
};

/// Configuration data
#[derive(Clone, Debug)]
pub struct GhLookupConfig {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,

    /// CLI arguments
    pub cli_args: GhLookupCli,
}

/// Contents of the configuration file
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct ConfigData {
    /// GitHub configuration
    pub github: Option<GithubConfig>,
}

/// GitHub configuration
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct GithubConfig {
    /// API base URL override
    pub api_url: Option<String>,

    /// Personal access token, sent as a bearer token when set
    pub token: Option<String>,
}

impl GhLookupConfig {
    /// Create a new Config object, reading the file named on the
    /// command line or the default one
    /// # Errors
    /// Error if the config file can't be opened or parsed
    pub fn try_new(cli_args: GhLookupCli) -> Result<Self, GhLookupError> {
        let config_path = match cli_args.config.clone() {
            Some(path_str) => PathBuf::from(path_str),
            None => Self::get_config_path()?,
        };
        let contents = read_to_string(&config_path)?;
        let config_data = toml::from_str(&contents).map_err(|e| {
            GhLookupError::new(GhLookupErrorKind::Config).with_text(&e.to_string())
        })?;
        Ok(GhLookupConfig {
            config_path,
            config_data,
            cli_args,
        })
    }

    /// Get the path to the config file, creating an empty one on
    /// first use
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path() -> Result<PathBuf, GhLookupError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                return Err(GhLookupError::new(GhLookupErrorKind::Config)
                    .with_text("Unable to get your home dir! home::home_dir() isn't working"))
            }
        };
        let config_directory = home_dir.join(".config").join(".gh-lookup");
        let config_path = config_directory.join("config.toml");
        create_dir_all(config_directory)?;
        if !config_path.exists() {
            let mut file = File::create(&config_path)?;
            file.write_all(b"")?;
        }
        Ok(config_path)
    }

    /// API base URL: CLI override, then config file, then the default.
    pub fn api_url(&self) -> String {
        if let Some(url) = &self.cli_args.api_url {
            return url.clone();
        }
        self.config_data
            .github
            .as_ref()
            .and_then(|github| github.api_url.clone())
            .unwrap_or_else(|| GITHUB_API_URL.to_string())
    }

    /// Bearer token: `GITHUB_TOKEN` environment variable, then config
    /// file. `None` means unauthenticated requests.
    pub fn token(&self) -> Option<String> {
        std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .or_else(|| {
                self.config_data
                    .github
                    .as_ref()
                    .and_then(|github| github.token.clone())
            })
    }
}
