use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RemoteError;

pub const HOST_ENV: &str = "TCH_ADDR";
pub const PLAYER_KEY_ENV: &str = "TCH_PLAYER_KEY";

/// Optional `~/.config/tchremote/config.toml`, consulted after flags and environment.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    pub addr: Option<String>,
    pub key: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Config::default();
        }

        match fs::read_to_string(config_path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                warn!("Failed to parse config file {}: {}", config_path.display(), e);
                Config::default()
            }),
            Err(e) => {
                warn!("Failed to read config file {}: {}", config_path.display(), e);
                Config::default()
            }
        }
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("tchremote")
            .join("config.toml")
    }

    pub fn resolve_addr<E>(&self, flag: Option<&str>, env: E) -> Result<String, RemoteError>
    where
        E: Fn(&str) -> Option<String>,
    {
        resolve(flag, env(HOST_ENV), self.addr.as_deref()).ok_or(RemoteError::MissingAddr)
    }

    pub fn resolve_key<E>(&self, flag: Option<&str>, env: E) -> Result<String, RemoteError>
    where
        E: Fn(&str) -> Option<String>,
    {
        resolve(flag, env(PLAYER_KEY_ENV), self.key.as_deref()).ok_or(RemoteError::MissingKey)
    }
}

/// Reads a variable from the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// First non-empty of flag, environment, config file.
fn resolve(flag: Option<&str>, env: Option<String>, file: Option<&str>) -> Option<String> {
    flag.filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| env.filter(|s| !s.is_empty()))
        .or_else(|| file.filter(|s| !s.is_empty()).map(str::to_string))
}
