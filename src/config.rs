use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Result, UsersError};

const DEFAULT_API_URL: &str = "http://localhost:8040";

#[derive(Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| UsersError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| UsersError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "users")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UsersError::NoConfigDir)
    }

    /// Get the API base URL with env var taking precedence over config file,
    /// falling back to the default local server
    pub fn api_url(&self) -> String {
        if let Ok(url) = std::env::var("USERS_API_URL") {
            return url;
        }

        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}
