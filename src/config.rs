//! Dashboard Configuration
//!
//! A browser bundle has no runtime environment, so overrides are read at
//! build time:
//! 1. `USER_DASHBOARD_API_URL` / `USER_DASHBOARD_LOG` (highest priority)
//! 2. Built-in defaults (lowest priority)

use std::time::Duration;

/// Remote service used when no override is compiled in
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// How long a success banner stays visible
pub const DEFAULT_SUCCESS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the REST service, without trailing slash
    pub base_url: String,
    pub success_message_ttl: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            success_message_ttl: DEFAULT_SUCCESS_TTL,
        }
    }

    /// Defaults with build-time overrides applied
    pub fn from_build_env() -> Self {
        match option_env!("USER_DASHBOARD_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Success banner lifetime in timer milliseconds, saturating at `u32::MAX`
    pub fn success_ttl_millis(&self) -> u32 {
        u32::try_from(self.success_message_ttl.as_millis()).unwrap_or(u32::MAX)
    }

    /// Absolute URL for a path such as `/users/1`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Log level compiled into the bundle (`info` unless overridden)
pub fn log_level() -> log::LevelFilter {
    option_env!("USER_DASHBOARD_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}
