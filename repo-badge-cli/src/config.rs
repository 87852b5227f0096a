//! Settings layered from defaults, an optional TOML file, the environment and
//! CLI flags (later layers win).

use std::path::{Path, PathBuf};
use std::time::Duration;

use repo_badge::github::{DEFAULT_API_URL, DEFAULT_TIMEOUT, default_user_agent};
use repo_badge::{ClientConfig, DEFAULT_OUTPUT_PATH, Owner};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Args;
use crate::error::{AppError, Result};

/// Checked in order; the first non-empty value wins.
pub const TOKEN_VARS: [&str; 2] = ["GH_API_TOKEN", "GITHUB_TOKEN"];
pub const OWNER_VARS: [&str; 2] = ["GH_USERNAME", "GITHUB_REPOSITORY_OWNER"];

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub output: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl FileConfig {
    /// `<config_dir>/repo-badge/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("repo-badge").join("config.toml"))
    }

    /// Reads `explicit` if given (it must exist), otherwise the default path
    /// if a file is there, otherwise returns an empty config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        debug!(path = %path.display(), "Loading config file");
        let raw = std::fs::read_to_string(&path)
            .map_err(|source| AppError::ConfigRead { path, source })?;
        Ok(toml::from_str(&raw)?)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub owner: Option<Owner>,
    pub token: Option<String>,
    pub api_url: String,
    pub output: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
}

impl AppConfig {
    /// Reads the config file named by `--config` (or the default one) and
    /// layers `env` and `args` over it.
    pub fn load_with(args: &Args, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = FileConfig::load(args.config.as_deref())?;
        Ok(Self::from_sources(args, file, env))
    }

    pub fn from_sources(
        args: &Args,
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let owner = args
            .owner
            .as_deref()
            .and_then(Owner::parse)
            .or_else(|| first_env(&env, &OWNER_VARS).as_deref().and_then(Owner::parse));

        let token = args
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| first_env(&env, &TOKEN_VARS));

        let user_agent = args
            .user_agent
            .clone()
            .or(file.user_agent)
            .unwrap_or_else(|| default_user_agent(owner.as_ref()));

        let timeout = args
            .timeout
            .or(file.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            owner,
            token,
            api_url: args
                .api_url
                .clone()
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            output: args
                .output
                .clone()
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            timeout,
            user_agent,
        }
    }

    /// Fails when `api_url` is not an absolute URL.
    pub fn client_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::new(&self.api_url, self.user_agent.clone())?
            .with_token(self.token.clone())
            .with_timeout(self.timeout))
    }

    pub fn display_name(&self) -> &str {
        self.owner.as_ref().map(Owner::as_str).unwrap_or_default()
    }
}

fn first_env(env: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env(*name))
        .find(|value| !value.trim().is_empty())
}
