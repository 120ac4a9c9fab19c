//! Proxy configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! The upstream compliance backend is resolved exactly once at startup into a
//! typed config. Every proxy route shares this single origin value — there is
//! no per-route override.

use crate::backend::BackendError;

/// Env var naming the compliance backend origin, e.g. `http://10.10.10.151:5000`.
pub const BACKEND_URL_VAR: &str = "PYTHON_BACKEND_URL";

pub const DEFAULT_PROXY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Backend origin with no trailing slash.
    pub base_url: String,
    pub timeouts: ProxyTimeouts,
}

impl BackendConfig {
    /// Build typed proxy config from environment variables.
    ///
    /// Required:
    /// - `PYTHON_BACKEND_URL`: origin of the compliance backend
    ///
    /// Optional:
    /// - `PROXY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::MissingBackendUrl`] if the origin env var is
    /// not set.
    pub fn from_env() -> Result<Self, BackendError> {
        let raw = std::env::var(BACKEND_URL_VAR)
            .map_err(|_| BackendError::MissingBackendUrl { var: BACKEND_URL_VAR.into() })?;

        let timeouts = ProxyTimeouts {
            request_secs: env_parse_u64("PROXY_REQUEST_TIMEOUT_SECS", DEFAULT_PROXY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url: normalize_base_url(&raw), timeouts })
    }

    /// Build a config directly from an origin, using default timeouts.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            timeouts: ProxyTimeouts {
                request_secs: DEFAULT_PROXY_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

/// Trim whitespace and any trailing slashes so route paths concatenate cleanly.
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
