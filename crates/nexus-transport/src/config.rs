//! HTTP client configuration.
//!
//! Defaults can be adjusted from the environment with the same variables
//! other Globus SDKs read:
//!
//! - `GLOBUS_SDK_HTTP_TIMEOUT`: request timeout in seconds; `-1` disables it
//! - `GLOBUS_SDK_VERIFY_SSL`: `false`, `0`, `no` or `off` disables certificate checks

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable overriding the request timeout (seconds).
pub const HTTP_TIMEOUT_VAR: &str = "GLOBUS_SDK_HTTP_TIMEOUT";

/// Environment variable toggling TLS certificate verification.
pub const VERIFY_SSL_VAR: &str = "GLOBUS_SDK_VERIFY_SSL";

/// Settings for [`GlobusHttpClient`](crate::GlobusHttpClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub user_agent: String,
    /// Accept gzip/deflate compressed responses.
    pub accept_compressed: bool,
    /// Verify TLS certificates. Only disable against test deployments.
    pub verify_ssl: bool,
    /// Emit per-request tracing events.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(60)),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            verify_ssl: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults adjusted by `GLOBUS_SDK_HTTP_TIMEOUT` and `GLOBUS_SDK_VERIFY_SSL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(HTTP_TIMEOUT_VAR) {
            let seconds: f64 = raw.trim().parse().map_err(|_| {
                Error::new(ErrorKind::Config(format!(
                    "{} must be a number of seconds, got {:?}",
                    HTTP_TIMEOUT_VAR, raw
                )))
            })?;
            config.timeout = if seconds == -1.0 {
                None
            } else {
                let timeout = Duration::try_from_secs_f64(seconds).map_err(|e| {
                    Error::with_source(
                        ErrorKind::Config(format!(
                            "{} must be non-negative or -1, got {:?}",
                            HTTP_TIMEOUT_VAR, raw
                        )),
                        e,
                    )
                })?;
                Some(timeout)
            };
        }

        if let Some(raw) = lookup(VERIFY_SSL_VAR) {
            config.verify_ssl = match raw.trim().to_lowercase().as_str() {
                "" | "1" | "yes" | "true" | "on" => true,
                "0" | "no" | "false" | "off" => false,
                _ => {
                    return Err(Error::new(ErrorKind::Config(format!(
                        "{} must be a boolean, got {:?}",
                        VERIFY_SSL_VAR, raw
                    ))))
                }
            };
        }

        Ok(config)
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Start from an existing configuration, e.g. [`ClientConfig::from_env`].
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Wait indefinitely for responses.
    pub fn without_timeout(mut self) -> Self {
        self.config.timeout = None;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    pub fn with_verify_ssl(mut self, verify: bool) -> Self {
        self.config.verify_ssl = verify;
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
