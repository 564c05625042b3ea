//
//  unsplash-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the client configuration as TOML in the platform config
//! directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/unsplash/config.toml`
//! - **macOS**: `~/Library/Application Support/unsplash/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\unsplash\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [credentials]
//! access_key = "your-access-key"
//! secret_key = "your-secret-key"
//! redirect_uri = "urn:ietf:wg:oauth:2.0:oob"
//! bearer_token = "user-token"
//!
//! [api]
//! base_url = "https://api.unsplash.com"
//! ```
//!
//! ## Precedence
//!
//! Command-line flags, then environment variables, then the file:
//!
//! | Key | Environment variable |
//! |-----|----------------------|
//! | `credentials.access_key` | `UNSPLASH_ACCESS_KEY` |
//! | `credentials.secret_key` | `UNSPLASH_SECRET_KEY` |
//! | `credentials.bearer_token` | `UNSPLASH_BEARER_TOKEN` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use unsplash_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("credentials.access_key", "my-access-key")?;
//! config.save()?;
//!
//! let credentials = config.credentials()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::api::DEFAULT_BASE_URL;
use crate::auth::Credentials;

pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";
pub const SECRET_KEY_ENV: &str = "UNSPLASH_SECRET_KEY";
pub const BEARER_TOKEN_ENV: &str = "UNSPLASH_BEARER_TOKEN";

/// Every key accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &[
    "credentials.access_key",
    "credentials.secret_key",
    "credentials.redirect_uri",
    "credentials.bearer_token",
    "api.base_url",
];

/// Keys whose values are masked when listed.
pub const SECRET_KEYS: &[&str] = &["credentials.secret_key", "credentials.bearer_token"];

/// No access key in the file, the environment or on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No access key configured. Set UNSPLASH_ACCESS_KEY or run `unsplash config set credentials.access_key <KEY>`")]
pub struct MissingAccessKey;

/// Global configuration container.
///
/// # Examples
///
/// ```rust
/// use unsplash_client::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api.base_url, "https://api.unsplash.com");
/// assert!(config.credentials.access_key.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

/// The `[credentials]` table. Every field is optional on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
}

/// The `[api]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Loads the configuration file, if any, and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but is not valid TOML.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Loads the file at `path`, falling back to defaults when it is missing.
    /// Environment variables are not consulted.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "unsplash")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overrides credentials with the variables `lookup` resolves.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(value) = read(ACCESS_KEY_ENV) {
            self.credentials.access_key = Some(value);
        }
        if let Some(value) = read(SECRET_KEY_ENV) {
            self.credentials.secret_key = Some(value);
        }
        if let Some(value) = read(BEARER_TOKEN_ENV) {
            self.credentials.bearer_token = Some(value);
        }
    }

    /// Builds [`Credentials`] from the `[credentials]` table.
    ///
    /// # Errors
    ///
    /// Returns an error if no access key is configured or the redirect URI is
    /// not a valid URL.
    pub fn credentials(&self) -> Result<Credentials> {
        let section = &self.credentials;
        let Some(access_key) = section.access_key.as_deref().filter(|key| !key.is_empty()) else {
            return Err(MissingAccessKey.into());
        };

        let mut credentials = Credentials::new(access_key);
        if let Some(secret) = &section.secret_key {
            credentials = credentials.with_secret_key(secret);
        }
        if let Some(uri) = &section.redirect_uri {
            let uri = Url::parse(uri).with_context(|| format!("Invalid redirect URI: {uri}"))?;
            credentials = credentials.with_redirect_uri(uri);
        }
        if let Some(token) = &section.bearer_token {
            credentials = credentials.with_bearer_token(token);
        }
        Ok(credentials)
    }

    /// Returns the value stored under a dotted key, e.g. `api.base_url`.
    pub fn get(&self, key: &str) -> Option<String> {
        let credentials = &self.credentials;
        match key {
            "credentials.access_key" => credentials.access_key.clone(),
            "credentials.secret_key" => credentials.secret_key.clone(),
            "credentials.redirect_uri" => credentials.redirect_uri.clone(),
            "credentials.bearer_token" => credentials.bearer_token.clone(),
            "api.base_url" => Some(self.api.base_url.clone()),
            _ => None,
        }
    }

    /// Stores `value` under a dotted key.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys and for URLs that do not parse.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match key {
            "credentials.access_key" => self.credentials.access_key = Some(value),
            "credentials.secret_key" => self.credentials.secret_key = Some(value),
            "credentials.redirect_uri" => {
                Url::parse(&value).with_context(|| format!("Invalid redirect URI: {value}"))?;
                self.credentials.redirect_uri = Some(value);
            }
            "credentials.bearer_token" => self.credentials.bearer_token = Some(value),
            "api.base_url" => {
                let url = Url::parse(&value).with_context(|| format!("Invalid URL: {value}"))?;
                if url.cannot_be_a_base() {
                    bail!("Invalid API base URL: {}", value);
                }
                self.api.base_url = value;
            }
            _ => bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }
}
