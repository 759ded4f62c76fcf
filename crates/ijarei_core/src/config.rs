//! Site runtime configuration.
//!
//! # Responsibility
//! - Collect API, session, mock-latency and form endpoint settings.
//! - Load overrides from `IJAREI_*` environment variables.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set but unparsable variables are
//!   errors, never silently replaced.

use crate::forms::manuscript::PLACEHOLDER_MANUSCRIPT_ENDPOINT;
use crate::session::admin::SESSION_TTL_MS;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_API_BASE_URL: &str = "IJAREI_API_BASE_URL";
pub const ENV_SESSION_TTL_MS: &str = "IJAREI_SESSION_TTL_MS";
pub const ENV_MOCK_DELAY_MS: &str = "IJAREI_MOCK_DELAY_MS";
pub const ENV_DOWNLOAD_DELAY_MS: &str = "IJAREI_DOWNLOAD_DELAY_MS";
pub const ENV_MANUSCRIPT_ENDPOINT: &str = "IJAREI_MANUSCRIPT_ENDPOINT";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_MOCK_DELAY_MS: u64 = 800;
pub const DEFAULT_DOWNLOAD_DELAY_MS: u64 = 1500;

/// Configuration load errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid {
        key: &'static str,
        value: String,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid {
                key,
                value,
                message,
            } => write!(f, "invalid {key} value `{value}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Backend API client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    pub base_url: String,
    /// Send cookies with every request.
    pub with_credentials: bool,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            with_credentials: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub api: ApiClientConfig,
    pub session_ttl_ms: i64,
    /// Artificial latency of mock archive and form services.
    pub mock_delay: Duration,
    pub download_delay: Duration,
    pub manuscript_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api: ApiClientConfig::default(),
            session_ttl_ms: SESSION_TTL_MS,
            mock_delay: Duration::from_millis(DEFAULT_MOCK_DELAY_MS),
            download_delay: Duration::from_millis(DEFAULT_DOWNLOAD_DELAY_MS),
            manuscript_endpoint: PLACEHOLDER_MANUSCRIPT_ENDPOINT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Loads configuration from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a key to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let session_ttl_ms = load_or(&lookup, ENV_SESSION_TTL_MS, defaults.session_ttl_ms)?;
        if session_ttl_ms <= 0 {
            return Err(ConfigError::Invalid {
                key: ENV_SESSION_TTL_MS,
                value: session_ttl_ms.to_string(),
                message: "must be positive".to_string(),
            });
        }

        Ok(Self {
            api: ApiClientConfig {
                base_url: load_or(&lookup, ENV_API_BASE_URL, defaults.api.base_url)?,
                with_credentials: true,
            },
            session_ttl_ms,
            mock_delay: Duration::from_millis(load_or(
                &lookup,
                ENV_MOCK_DELAY_MS,
                DEFAULT_MOCK_DELAY_MS,
            )?),
            download_delay: Duration::from_millis(load_or(
                &lookup,
                ENV_DOWNLOAD_DELAY_MS,
                DEFAULT_DOWNLOAD_DELAY_MS,
            )?),
            manuscript_endpoint: load_or(
                &lookup,
                ENV_MANUSCRIPT_ENDPOINT,
                defaults.manuscript_endpoint,
            )?,
        })
    }
}

fn load_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("event=config_load module=config status=default key={key} value={default}");
        return Ok(default);
    };

    raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        value: raw.clone(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SiteConfig, ENV_MOCK_DELAY_MS, ENV_SESSION_TTL_MS};
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert!(config.api.with_credentials);
        assert_eq!(config.session_ttl_ms, 86_400_000);
    }

    #[test]
    fn overrides_are_parsed() {
        let config =
            SiteConfig::from_lookup(lookup_from(&[(ENV_MOCK_DELAY_MS, " 0 ")])).unwrap();
        assert_eq!(config.mock_delay, Duration::ZERO);
    }

    #[test]
    fn unparsable_values_are_rejected() {
        let err = SiteConfig::from_lookup(lookup_from(&[(ENV_MOCK_DELAY_MS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key, .. } if key == ENV_MOCK_DELAY_MS));
    }

    #[test]
    fn non_positive_session_ttl_is_rejected() {
        let err = SiteConfig::from_lookup(lookup_from(&[(ENV_SESSION_TTL_MS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key, .. } if key == ENV_SESSION_TTL_MS));
    }
}
