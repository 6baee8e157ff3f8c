//! Application configuration

use std::env;
use std::time::Duration;

use prompt_core::{Error, Result};

/// Server-level settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub rewrite_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            rewrite_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Create configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Configuration(format!("PORT is not a valid port: {}", raw)))?,
            None => defaults.port,
        };

        let environment = lookup("APP_ENV")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or(defaults.environment);

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let rewrite_timeout = match lookup("REWRITE_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map(Duration::from_secs).map_err(|_| {
                Error::Configuration(format!("REWRITE_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => defaults.rewrite_timeout,
        };

        Ok(Self {
            port,
            environment,
            log_level,
            rewrite_timeout,
        })
    }

    /// Whether error details may be returned to clients
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.is_development());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("NODE_ENV", "production"),
            ("LOG_LEVEL", "debug"),
            ("REWRITE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
        assert!(!config.is_development());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.rewrite_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_app_env_wins_over_node_env() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "staging"),
            ("NODE_ENV", "production"),
        ]))
        .unwrap();
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err =
            AppConfig::from_lookup(lookup_from(&[("REWRITE_TIMEOUT_SECS", "-1")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
