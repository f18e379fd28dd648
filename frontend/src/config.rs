//! Store connection settings.
//!
//! Both values are baked in at build time (`SUPABASE_URL`,
//! `SUPABASE_ANON_KEY`) and checked once at startup, so a misconfigured build
//! shows a configuration error instead of failing on the first request.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { name: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "missing required setting `{name}`"),
            Self::Invalid { name, reason } => write!(f, "invalid setting `{name}`: {reason}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project URL without a trailing slash, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    /// Public (anon) API key.
    pub api_key: String,
}

impl StoreConfig {
    /// Reads the settings captured by the compiler from the build environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    pub fn from_values(base_url: Option<&str>, api_key: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = required(URL_VAR, base_url)?;
        let api_key = required(KEY_VAR, api_key)?;
        Self::new(base_url, api_key)
    }

    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let host = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"));
        match host {
            Some(host) if !host.is_empty() => {}
            _ => {
                return Err(ConfigError::Invalid {
                    name: URL_VAR,
                    reason: format!("expected an http(s) URL, got `{base_url}`"),
                })
            }
        }
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::Missing(KEY_VAR));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Root of the table REST API.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.base_url)
    }
}

fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig, KEY_VAR, URL_VAR};

    #[test]
    fn trims_whitespace_and_trailing_slash() {
        let config =
            StoreConfig::new(" https://abc.supabase.co/ ", " anon-key ").expect("valid config");
        assert_eq!(config.base_url, "https://abc.supabase.co");
        assert_eq!(config.api_key, "anon-key");
        assert_eq!(config.rest_url(), "https://abc.supabase.co/rest/v1");
    }

    #[test]
    fn missing_values_fail_fast() {
        assert_eq!(
            StoreConfig::from_values(None, Some("key")),
            Err(ConfigError::Missing(URL_VAR))
        );
        assert_eq!(
            StoreConfig::from_values(Some("https://abc.supabase.co"), Some("  ")),
            Err(ConfigError::Missing(KEY_VAR))
        );
    }

    #[test]
    fn rejects_non_http_url() {
        let error = StoreConfig::new("abc.supabase.co", "key").expect_err("scheme is required");
        assert!(matches!(error, ConfigError::Invalid { name, .. } if name == URL_VAR));
    }
}
