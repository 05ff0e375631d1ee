//
//  kongo
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Persistent settings for the `kongo` command: which Admin API to talk to
//! and how to build the HTTP client for it. Settings live in a TOML file in
//! the platform configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/kongo/config.toml`
//! - **macOS**: `~/Library/Application Support/kongo/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\kongo\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! admin_url = "http://kong.internal:8001"
//! user_agent = "deploy-bot/1.0"
//! timeout_secs = 10
//! ```
//!
//! ## Admin URL Resolution
//!
//! The command line resolves the Admin API address in this order:
//!
//! 1. `--url` flag or `KONGO_URL` environment variable
//! 2. `admin_url` from the configuration file
//! 3. [`DEFAULT_ADMIN_URL`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kongo::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("admin_url", "http://kong.internal:8001".to_string())?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Admin API address used when nothing else is configured.
pub const DEFAULT_ADMIN_URL: &str = "http://127.0.0.1:8001";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["admin_url", "user_agent", "timeout_secs"];

/// Settings stored in `config.toml`.
///
/// # Fields
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `admin_url` | `http://127.0.0.1:8001` | Admin API base address |
/// | `user_agent` | `kongo/<version>` | `User-Agent` override |
/// | `timeout_secs` | none | Whole-request timeout |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_admin_url")]
    pub admin_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_admin_url() -> String {
    DEFAULT_ADMIN_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_url: default_admin_url(),
            user_agent: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Saves the configuration to the default location, creating the
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Loads the configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    /// Writes the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        write_config_file(path, &content)
    }

    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Reads a setting by key. Unset optional settings return `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "admin_url" => Some(self.admin_url.clone()),
            "user_agent" => self.user_agent.clone(),
            "timeout_secs" => self.timeout_secs.map(|secs| secs.to_string()),
            _ => None,
        }
    }

    /// Updates a setting by key.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys, and for values that do not fit the setting
    /// (an admin URL that is not absolute, a timeout that is not a whole
    /// number of seconds).
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "admin_url" => {
                url::Url::parse(&value)
                    .with_context(|| format!("Invalid admin URL: {value}"))?;
                self.admin_url = value;
            }
            "user_agent" => self.user_agent = Some(value),
            "timeout_secs" => {
                let secs = value
                    .parse::<u64>()
                    .with_context(|| format!("Invalid timeout (seconds): {value}"))?;
                self.timeout_secs = Some(secs);
            }
            _ => bail!("Unknown config key: {key}. Valid keys: {}", CONFIG_KEYS.join(", ")),
        }
        Ok(())
    }

    /// Restores a setting to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "admin_url" => self.admin_url = default_admin_url(),
            "user_agent" => self.user_agent = None,
            "timeout_secs" => self.timeout_secs = None,
            _ => bail!("Unknown config key: {key}. Valid keys: {}", CONFIG_KEYS.join(", ")),
        }
        Ok(())
    }
}
