//! Configuration types for the Konbini client.

use crate::error::{KonbiniError, KonbiniResult};
use std::time::Duration;
use url::Url;

/// Environment variable holding the ShotGrid site URL.
pub const ENV_BASE_URL: &str = "KONBINI_BASE_URL";
/// Environment variable holding the API script name.
pub const ENV_SCRIPT_NAME: &str = "KONBINI_SCRIPT_NAME";
/// Environment variable holding the API script key.
pub const ENV_API_KEY: &str = "KONBINI_API_KEY";

/// Page size used when paging through `read` results.
pub const DEFAULT_ENTITIES_PER_PAGE: usize = 500;

/// Configuration for the Konbini client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// ShotGrid site, e.g. `https://studio.shotgunstudio.com`.
    pub base_url: Url,
    /// API script name.
    pub script_name: String,
    /// API script key.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry_config: RetryConfig,
    /// Accept invalid TLS certificates.
    pub no_ssl_validation: bool,
    /// Page size for `read` calls.
    pub entities_per_page: usize,
}

impl ClientConfig {
    /// Create a new configuration with the given site and script credentials.
    pub fn new(base_url: Url, script_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            script_name: script_name.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
            no_ssl_validation: false,
            entities_per_page: DEFAULT_ENTITIES_PER_PAGE,
        }
    }
}

/// Pick the explicit value if set, otherwise the environment variable.
///
/// Empty strings count as missing on both sides.
pub(crate) fn resolve_value(
    explicit: Option<String>,
    param: &'static str,
    env_var: &'static str,
    lookup: impl Fn(&str) -> Option<String>,
) -> KonbiniResult<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or_else(|| lookup(env_var).filter(|v| !v.is_empty()))
        .ok_or(KonbiniError::MissingValue { param, env_var })
}

/// Configuration for retry behavior.
///
/// The defaults target ShotGrid throttling: `429` while a site is over its
/// request rate, and `502`/`503`/`504` during maintenance or a busy proxy.
/// A plain `500` is not retried since it usually repeats for the same call.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries.
    pub max_retries: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration, also the cap on a server `Retry-After`.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
    /// HTTP status codes to retry on.
    pub retry_on_status_codes: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(60),
            backoff_multiplier: 2.0,
            retry_on_status_codes: vec![429, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Calculate backoff duration for a given attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let backoff_ms = self.initial_backoff.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        let backoff = Duration::from_millis(backoff_ms as u64);
        std::cmp::min(backoff, self.max_backoff)
    }

    /// Delay before the next attempt. A server `Retry-After` wins over the
    /// computed backoff.
    pub fn delay_for_attempt(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        match retry_after {
            Some(delay) => std::cmp::min(delay, self.max_backoff),
            None => self.backoff_for_attempt(attempt),
        }
    }

    /// Check if a status code should trigger a retry.
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_on_status_codes.contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_calculation() {
        let config = RetryConfig::default();

        assert_eq!(config.backoff_for_attempt(0), Duration::from_secs(1));
        assert_eq!(config.backoff_for_attempt(1), Duration::from_secs(2));
        assert_eq!(config.backoff_for_attempt(3), Duration::from_secs(8));
        assert_eq!(config.backoff_for_attempt(8), Duration::from_secs(60));
    }

    #[test]
    fn test_retry_after_overrides_backoff() {
        let config = RetryConfig::default();

        assert_eq!(
            config.delay_for_attempt(0, Some(Duration::from_secs(5))),
            Duration::from_secs(5)
        );
        assert_eq!(
            config.delay_for_attempt(0, Some(Duration::from_secs(600))),
            Duration::from_secs(60)
        );
        assert_eq!(config.delay_for_attempt(2, None), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_capped_at_max() {
        let config = RetryConfig {
            max_backoff: Duration::from_millis(500),
            ..Default::default()
        };

        assert_eq!(config.backoff_for_attempt(10), Duration::from_millis(500));
    }

    #[test]
    fn test_should_retry_status() {
        let config = RetryConfig::default();

        assert!(config.should_retry_status(429));
        assert!(config.should_retry_status(503));
        assert!(!config.should_retry_status(500));
        assert!(!config.should_retry_status(400));
        assert!(!config.should_retry_status(404));
    }

    #[test]
    fn test_client_config_defaults() {
        let url = Url::parse("https://studio.shotgunstudio.com").unwrap();
        let config = ClientConfig::new(url.clone(), "konbini", "secret");

        assert_eq!(config.base_url, url);
        assert_eq!(config.script_name, "konbini");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry_config.max_retries, 4);
        assert_eq!(config.entities_per_page, 500);
        assert!(!config.no_ssl_validation);
    }

    #[test]
    fn test_resolve_prefers_explicit_value() {
        let value = resolve_value(Some("param".to_string()), "api_key", ENV_API_KEY, |_| {
            Some("env".to_string())
        })
        .unwrap();
        assert_eq!(value, "param");
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let value = resolve_value(None, "base_url", ENV_BASE_URL, |var| {
            (var == ENV_BASE_URL).then(|| "https://env.example.com".to_string())
        })
        .unwrap();
        assert_eq!(value, "https://env.example.com");

        let value = resolve_value(Some(String::new()), "script_name", ENV_SCRIPT_NAME, |_| {
            Some("from-env".to_string())
        })
        .unwrap();
        assert_eq!(value, "from-env");
    }

    #[test]
    fn test_resolve_missing_everywhere() {
        let err = resolve_value(None, "script_name", ENV_SCRIPT_NAME, |_| Some(String::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            KonbiniError::MissingValue {
                param: "script_name",
                env_var: "KONBINI_SCRIPT_NAME"
            }
        ));
    }
}
