use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{Result, UserdeskError};

pub const DEFAULT_BASE_URL: &str = "https://5f82aa3706957200164338d2.mockapi.io/users/userdata/";

#[derive(Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| UserdeskError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| UserdeskError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userdesk")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserdeskError::NoConfigDir)
    }

    /// Collection URL with env var taking precedence over config file
    pub fn collection_url(&self) -> Result<Url> {
        let raw = std::env::var("USERDESK_URL")
            .ok()
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        normalize_collection(&raw)
    }
}

/// Member URLs are built by appending the id, so the collection must end in '/'.
pub fn normalize_collection(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| UserdeskError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(UserdeskError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}
