//! Client configuration read from the environment.

use std::time::Duration;

use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "USERS_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "USERS_API_TIMEOUT_SECS";

/// Where the users service lives and how long a call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Whole-call timeout applied by the requester. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(BASE_URL_VAR))?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: BASE_URL_VAR,
                value: base_url,
            });
        }

        let mut config = Self::new(&base_url);
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    name: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_base_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "http://phoenix:4000/api/"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://phoenix:4000/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn timeout_is_optional() {
        let config = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "https://users.example")])).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(BASE_URL_VAR));
    }

    #[test]
    fn base_url_needs_http_scheme() {
        let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "phoenix:4000")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: BASE_URL_VAR, .. }));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let config = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "  http://users.example/ \n")])).unwrap();
        assert_eq!(config.base_url, "http://users.example");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "http://localhost:4000"),
            (TIMEOUT_VAR, "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: TIMEOUT_VAR, .. }));
    }
}
