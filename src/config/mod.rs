#[cfg(feature = "cli")]
pub mod cli;

use crate::core::{env_or_default, EnvSource, ProcessEnv};
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use url::Url;

pub const API_BASE_URL_KEY: &str = "PUBLIC_API_BASE_URL";
pub const MEDIA_BASE_URL_KEY: &str = "PUBLIC_MEDIA_BASE_URL";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_MEDIA_BASE_URL: &str = "http://localhost:8000/media";

/// Settings the frontend is allowed to see.
///
/// Serialized with the camelCase keys the browser bundle reads
/// (`apiBaseUrl`, `mediaBaseUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub api_base_url: String,
    pub media_base_url: String,
}

impl Default for PublicConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
        }
    }
}

impl PublicConfig {
    /// Resolves both fields from `source`. Each key falls back to its own
    /// default independently.
    pub fn from_source<S: EnvSource + ?Sized>(source: &S) -> Self {
        Self {
            api_base_url: env_or_default(source, API_BASE_URL_KEY, DEFAULT_API_BASE_URL),
            media_base_url: env_or_default(source, MEDIA_BASE_URL_KEY, DEFAULT_MEDIA_BASE_URL),
        }
    }

    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }

    /// `KEY=value` pairs in the same form the environment takes them.
    pub fn env_pairs(&self) -> [(&'static str, &str); 2] {
        [
            (API_BASE_URL_KEY, self.api_base_url.as_str()),
            (MEDIA_BASE_URL_KEY, self.media_base_url.as_str()),
        ]
    }

    /// Builds an API endpoint URL, e.g. `api_url("recipes/")`.
    pub fn api_url(&self, path: &str) -> String {
        join(&self.api_base_url, path)
    }

    /// Builds the public URL of an uploaded file.
    ///
    /// Paths that are already absolute `http(s)` URLs, in any letter case, or
    /// protocol-relative `//host/...` references (files served from object
    /// storage) are returned unchanged.
    pub fn media_url(&self, path: &str) -> String {
        // protocol-relative, e.g. `//cdn.example/x.jpg`
        if path.starts_with("//") {
            return path.to_string();
        }
        if let Ok(url) = Url::parse(path) {
            if matches!(url.scheme(), "http" | "https") {
                return path.to_string();
            }
        }
        join(&self.media_base_url, path)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl Validate for PublicConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_url("media_base_url", &self.media_base_url)?;

        tracing::info!("✅ Public configuration validation passed");
        Ok(())
    }
}

fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

static APP_CONFIG: OnceLock<PublicConfig> = OnceLock::new();

/// The process-wide config, read from the environment on first call.
/// Later changes to the environment are not observed.
pub fn app_config() -> &'static PublicConfig {
    APP_CONFIG.get_or_init(|| {
        let config = PublicConfig::from_env();
        tracing::info!(
            "Public config resolved: api={} media={}",
            config.api_base_url,
            config.media_base_url
        );
        config
    })
}
