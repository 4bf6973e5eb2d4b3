// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use huddle_core::{APP_NAME, UserProfile};

const HUDDLE_CONFIG_ENV: &str = "HUDDLE_CONFIG";

/// Configuration for the Huddle CLI. Every field is optional; a missing
/// config file yields the defaults.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Directory holding the persisted calendar data. Defaults to the
    /// user data directory.
    pub data_dir: Option<PathBuf>,

    /// Identifier scoping the event list. Defaults to "local".
    pub owner_id: Option<String>,

    /// Name shown for the signed-in user.
    pub display_name: Option<String>,
}

impl Config {
    /// Loads the configuration, trying in order: the explicit `--config`
    /// path, the `HUDDLE_CONFIG` environment variable, the platform config
    /// directory. An explicitly named file must exist and parse; a missing
    /// default file falls back to `Config::default()`.
    pub fn parse(path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let path = if let Some(path) = path {
            path
        } else if let Ok(env_path) = std::env::var(HUDDLE_CONFIG_ENV) {
            PathBuf::from(env_path)
        } else {
            let path = config_dir()?.join(format!("{APP_NAME}/config.toml"));
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            path
        };

        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
            .parse()
    }

    /// The signed-in user this process acts as.
    pub fn user(&self) -> UserProfile {
        let owner_id = self.owner_id.clone().unwrap_or_else(|| "local".to_string());
        let display_name = self.display_name.clone().unwrap_or_else(|| owner_id.clone());
        UserProfile {
            owner_id,
            display_name,
        }
    }

    /// The directory for persisted state, created by the storage layer.
    pub fn data_dir(&self) -> Result<PathBuf, Box<dyn Error>> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(default_data_dir()?.join(APP_NAME)),
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn default_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| "User-specific data directory not found".into())
}
