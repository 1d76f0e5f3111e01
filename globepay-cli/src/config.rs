//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_RATE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_FILE: &str = ".globepay-session.json";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub rate_timeout: Duration,
    pub session_file: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("GLOBEPAY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let rate_timeout_secs = match lookup("GLOBEPAY_RATE_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!("GLOBEPAY_RATE_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
            })?,
            None => DEFAULT_RATE_TIMEOUT_SECS,
        };
        if rate_timeout_secs == 0 {
            anyhow::bail!("GLOBEPAY_RATE_TIMEOUT_SECS must be greater than zero");
        }

        let session_file = lookup("GLOBEPAY_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        Ok(Self {
            api_url,
            rate_timeout: Duration::from_secs(rate_timeout_secs),
            session_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.rate_timeout, Duration::from_secs(10));
        assert_eq!(config.session_file, PathBuf::from(".globepay-session.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GLOBEPAY_API_URL", "https://api.example.com"),
            ("GLOBEPAY_RATE_TIMEOUT_SECS", "3"),
            ("GLOBEPAY_SESSION_FILE", "/tmp/session.json"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.rate_timeout, Duration::from_secs(3));
        assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(Config::from_lookup(lookup(&[("GLOBEPAY_RATE_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("GLOBEPAY_RATE_TIMEOUT_SECS", "0")])).is_err());
    }
}
