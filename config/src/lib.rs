//! Configuration for Unitlab.
//!
//! Settings come from `~/.unitlab/config.toml` with environment variables
//! taking precedence, so a deployment can run with no file at all:
//!
//! ```toml
//! [store]
//! url = "https://project.example.co"
//! service_key = "${UNITLAB_STORE_KEY}"
//! ```
//!
//! `${VAR}` references inside string values are expanded from the
//! environment, which keeps credentials out of the file itself.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;
use unitlab_types::{EmptyKeyError, ServiceKey};
use url::Url;

/// Environment variable overriding the store endpoint URL.
pub const ENV_STORE_URL: &str = "UNITLAB_STORE_URL";
/// Environment variable overriding the store service key.
pub const ENV_STORE_KEY: &str = "UNITLAB_STORE_KEY";

#[derive(Debug, Default, Deserialize)]
pub struct UnitlabConfig {
    pub store: Option<StoreFileConfig>,
}

/// The `[store]` table of the config file. All fields optional; resolution
/// fails only when a required value is present in neither file nor
/// environment.
#[derive(Default, Deserialize)]
pub struct StoreFileConfig {
    pub url: Option<String>,
    pub service_key: Option<String>,
}

// Manual Debug impl to prevent leaking the service key in logs.
impl std::fmt::Debug for StoreFileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreFileConfig")
            .field("url", &self.url)
            .field(
                "service_key",
                &self.service_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Fully resolved, validated store settings.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub url: Url,
    pub service_key: ServiceKey,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("store URL is not configured; set [store].url or UNITLAB_STORE_URL")]
    MissingUrl,
    #[error("store service key is not configured; set [store].service_key or UNITLAB_STORE_KEY")]
    MissingKey,
    #[error("invalid store URL '{raw}'")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    InvalidKey(#[from] EmptyKeyError),
}

impl UnitlabConfig {
    /// Load the config file, if one exists. A missing file is not an error;
    /// resolution can still succeed from the environment alone.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "failed to read config");
            ConfigError::Read {
                path: path.to_path_buf(),
                source: err,
            }
        })?;

        toml::from_str(&content).map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "failed to parse config");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })
    }

    /// Resolve store settings from this config and the environment, the
    /// environment winning on conflicts.
    pub fn store_settings(&self) -> Result<StoreSettings, ConfigError> {
        resolve_store(
            self.store.as_ref(),
            env::var(ENV_STORE_URL).ok(),
            env::var(ENV_STORE_KEY).ok(),
        )
    }
}

fn resolve_store(
    file: Option<&StoreFileConfig>,
    env_url: Option<String>,
    env_key: Option<String>,
) -> Result<StoreSettings, ConfigError> {
    let raw_url = env_url
        .or_else(|| file.and_then(|store| store.url.clone()))
        .map(|value| expand_env_vars(&value))
        .ok_or(ConfigError::MissingUrl)?;

    let url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidUrl {
        raw: raw_url,
        source,
    })?;

    let raw_key = env_key
        .or_else(|| file.and_then(|store| store.service_key.clone()))
        .map(|value| expand_env_vars(&value))
        .ok_or(ConfigError::MissingKey)?;

    Ok(StoreSettings {
        url,
        service_key: ServiceKey::new(raw_key)?,
    })
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".unitlab").join("config.toml"))
}

/// Expand `${VAR}` references from the environment. Unset variables expand
/// to the empty string; malformed references pass through untouched.
fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                let var = &after[..end];
                out.push_str(&env::var(var).unwrap_or_default());
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str("${");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
