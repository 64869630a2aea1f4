use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Context, Result};
use buildkite_api::{ApiClient, ClientSettings};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Client configuration stored on disk as YAML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Config {
    /// Load configuration from the provided path or the default config file.
    /// A missing file yields an empty configuration.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or_else(Config::default_path);

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Unable to read config file at {}", path.display()))?;

        serde_yaml::from_str(&raw)
            .with_context(|| format!("Malformed YAML in config file {}", path.display()))
    }

    /// Persist the configuration to disk, creating parent directories if needed.
    pub fn save<P: AsRef<Path>>(&self, path: Option<P>) -> Result<()> {
        let path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or_else(Config::default_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let serialized = serde_yaml::to_string(self)?;
        fs::write(&path, serialized)
            .with_context(|| format!("Unable to write config file {}", path.display()))?;

        Ok(())
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Returns the requested profile, else the default one, else the first
    /// profile found.
    pub fn resolve_profile<'a>(
        &'a self,
        requested: Option<&'a str>,
    ) -> Option<(&'a str, &'a Profile)> {
        if let Some(name) = requested {
            self.profiles.get(name).map(|profile| (name, profile))
        } else if let Some(default_name) = self.default_profile.as_deref() {
            self.profiles
                .get(default_name)
                .map(|profile| (default_name, profile))
        } else if let Some((name, profile)) = self.profiles.iter().next() {
            Some((name.as_str(), profile))
        } else {
            None
        }
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".buildkite-client");
        path.push("config.yaml");
        path
    }
}

/// Connection settings for one Buildkite account. Unset values fall back to
/// the client defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    pub endpoint: Option<String>,
    pub api_token: Option<String>,
    pub api_version: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Profile {
    pub fn settings(&self) -> ClientSettings {
        let defaults = ClientSettings::default();
        ClientSettings {
            endpoint: self.endpoint.clone().unwrap_or(defaults.endpoint),
            api_version: self.api_version.unwrap_or(defaults.api_version),
            timeout: self.timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    /// Builds a client from this profile and its stored token.
    pub fn client(&self) -> Result<ApiClient> {
        let token = self
            .api_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow!("Profile has no api_token"))?;

        ApiClient::from_settings(&self.settings(), token)
            .context("Unable to create Buildkite client from profile")
    }
}
