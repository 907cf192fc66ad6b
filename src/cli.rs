//! Command line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::logging;
use crate::store::{FileUsernameStore, MemoryUsernameStore, UsernameStore};

#[derive(Debug, Parser)]
#[command(
    name = "ghrepos",
    version,
    about = "Browse a GitHub user's public repositories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Save this username before starting
    #[arg(long, global = true, value_name = "NAME")]
    pub user: Option<String>,

    /// Config file (default: <config dir>/ghrepos/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// State file holding the saved username
    #[arg(long, global = true, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Base URL of the GitHub REST API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Keep the username in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Write logs to this file (or set GHREPOS_LOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print `name<TAB>url` for each repository and exit
    List {
        /// GitHub username (default: the saved one)
        #[arg(value_name = "USER")]
        username: Option<String>,
    },
}

impl Cli {
    /// Config from `--config` or the default location, with flag overrides
    /// applied and validated.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(api_url) = &self.api_url {
            config.github.api_url = api_url.clone();
        }
        if let Some(state_file) = &self.state_file {
            config.storage.state_file = Some(state_file.clone());
        }
        config.validate()?;
        Ok(config)
    }

    pub fn username_store(&self, config: &Config) -> Box<dyn UsernameStore> {
        if self.ephemeral {
            Box::new(MemoryUsernameStore::new())
        } else {
            Box::new(FileUsernameStore::new(config.state_file()))
        }
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        logging::log_path(self.log_file.clone())
    }
}
