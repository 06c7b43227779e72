//! Environment-driven configuration for the site host.
//!
//! # Design
//! - Every field has a default so a bare `sherpa-site` serves the local build.
//! - Values are validated once at startup; handlers never re-read the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use sherpa_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, log_format_from_str};

use crate::error::{SiteError, SiteResult};

/// Listener address variable.
pub const ENV_BIND: &str = "SHERPA_SITE_BIND";
/// Directory holding the compiled bundle.
pub const ENV_DIST: &str = "SHERPA_SITE_DIST";
/// Rooms API base URL injected into the shell document.
pub const ENV_API_BASE_URL: &str = "SHERPA_API_BASE_URL";
/// Log level directive.
pub const ENV_LOG_LEVEL: &str = "SHERPA_LOG_LEVEL";
/// Log output format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "SHERPA_LOG_FORMAT";

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_DIST: &str = "crates/sherpa-ui/dist";

/// Validated site host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Address the listener binds to.
    pub bind: SocketAddr,
    /// Directory containing `index.html` and the compiled assets.
    pub dist_dir: PathBuf,
    /// Rooms API base URL without a trailing slash; `None` means same origin.
    pub api_base_url: Option<String>,
    /// Log level directive passed to the subscriber.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl SiteConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidConfig`] when a variable is set to an
    /// unusable value.
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidConfig`] when a variable is set to an
    /// unusable value.
    pub fn from_lookup<F>(lookup: F) -> SiteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_raw = read(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| SiteError::InvalidConfig {
                field: ENV_BIND,
                reason: "not_a_socket_address",
                value: Some(bind_raw.clone()),
            })?;

        let dist_dir = PathBuf::from(read(ENV_DIST).unwrap_or_else(|| DEFAULT_DIST.to_string()));
        let api_base_url = read(ENV_API_BASE_URL).map(normalise_base_url).transpose()?;
        let log_level = read(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_format = match read(ENV_LOG_FORMAT) {
            Some(raw) => log_format_from_str(&raw).ok_or(SiteError::InvalidConfig {
                field: ENV_LOG_FORMAT,
                reason: "unknown_format",
                value: Some(raw),
            })?,
            None => LogFormat::infer(),
        };

        Ok(Self {
            bind,
            dist_dir,
            api_base_url,
            log_level,
            log_format,
        })
    }
}

fn normalise_base_url(raw: String) -> SiteResult<String> {
    let trimmed = raw.trim_end_matches('/');
    let acceptable = trimmed.starts_with("https://")
        || trimmed.starts_with("http://")
        || trimmed.starts_with('/')
        || trimmed.is_empty();
    if !acceptable || trimmed.contains(['"', '<', '>', ' ']) {
        return Err(SiteError::InvalidConfig {
            field: ENV_API_BASE_URL,
            reason: "not_an_http_url",
            value: Some(raw),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() -> SiteResult<()> {
        let config = SiteConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST));
        assert_eq!(config.api_base_url, None);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_format, LogFormat::infer());
        Ok(())
    }

    #[test]
    fn explicit_values_are_parsed_and_trimmed() -> SiteResult<()> {
        let config = SiteConfig::from_lookup(lookup(&[
            (ENV_BIND, "0.0.0.0:3000"),
            (ENV_DIST, "/srv/sherpa"),
            (ENV_API_BASE_URL, "https://rooms.example.com/"),
            (ENV_LOG_LEVEL, "sherpa_site=debug"),
            (ENV_LOG_FORMAT, "JSON"),
        ]))?;
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/sherpa"));
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://rooms.example.com")
        );
        assert_eq!(config.log_level, "sherpa_site=debug");
        assert_eq!(config.log_format, LogFormat::Json);
        Ok(())
    }

    #[test]
    fn invalid_values_name_the_offending_variable() {
        let cases = [
            (ENV_BIND, "localhost"),
            (ENV_LOG_FORMAT, "yaml"),
            (ENV_API_BASE_URL, "ftp://rooms"),
            (ENV_API_BASE_URL, "https://x\"><script>"),
        ];
        for (name, value) in cases {
            let err = SiteConfig::from_lookup(lookup(&[(name, value)]))
                .expect_err("invalid value must be rejected");
            assert!(
                matches!(err, SiteError::InvalidConfig { field, .. } if field == name),
                "unexpected error for {name}: {err:?}"
            );
        }
    }
}
