use std::time::Duration;

/// Endpoint of the public user generation service.
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// `None` leaves the transport's default (no explicit timeout).
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            base_url: match lookup("RANDOMUSER_BASE_URL") {
                None => DEFAULT_BASE_URL.to_string(),
                Some(url) => {
                    let url = url.trim().to_string();
                    if url.is_empty() {
                        anyhow::bail!("RANDOMUSER_BASE_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("RANDOMUSER_BASE_URL must start with http:// or https://");
                    }
                    url::Url::parse(&url).map_err(|e| {
                        anyhow::anyhow!("RANDOMUSER_BASE_URL is not a valid URL: {}", e)
                    })?;
                    url
                }
            },
            request_timeout: lookup("RANDOMUSER_TIMEOUT_SECS")
                .filter(|s| !s.trim().is_empty())
                .map(|secs| {
                    secs.trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|n| *n > 0)
                        .map(Duration::from_secs)
                        .ok_or_else(|| {
                            anyhow::anyhow!("RANDOMUSER_TIMEOUT_SECS must be a positive integer")
                        })
                })
                .transpose()?,
        };

        tracing::debug!("Random user base URL: {}", config.base_url);
        if let Some(timeout) = config.request_timeout {
            tracing::debug!("Request timeout: {}s", timeout.as_secs());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "https://randomuser.me/api");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(lookup_from(&[
            ("RANDOMUSER_BASE_URL", "http://localhost:8080/api"),
            ("RANDOMUSER_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(Config::from_vars(lookup_from(&[("RANDOMUSER_BASE_URL", "  ")])).is_err());
        assert!(
            Config::from_vars(lookup_from(&[("RANDOMUSER_BASE_URL", "ftp://example.com")]))
                .is_err()
        );
        assert!(Config::from_vars(lookup_from(&[("RANDOMUSER_BASE_URL", "http://")])).is_err());
        assert!(
            Config::from_vars(lookup_from(&[("RANDOMUSER_BASE_URL", "https://exa mple.com")]))
                .is_err()
        );
    }

    #[test]
    fn test_rejects_bad_timeout() {
        assert!(Config::from_vars(lookup_from(&[("RANDOMUSER_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_vars(lookup_from(&[("RANDOMUSER_TIMEOUT_SECS", "soon")])).is_err());
    }
}
