//! API client configuration
//!
//! Resolved from environment variables, then overridden by CLI flags:
//! - `GRANTS_API_URL` - Base URL of the admin site (default: `http://localhost:3000`)
//! - `GRANTS_API_KEY` - Bearer token sent with every request (optional)
//! - `GRANTS_API_TIMEOUT_SECS` - Transport timeout in seconds (default: 30)

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Default base URL for local development
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL; API paths (`/api/...`) are appended to it
    pub api_url: Url,
    /// Optional bearer token
    pub api_key: Option<String>,
    /// Transport timeout applied to each request
    pub timeout: Duration,
}

impl Config {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using a custom variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("GRANTS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_key = lookup("GRANTS_API_KEY").filter(|k| !k.trim().is_empty());

        let timeout = match lookup("GRANTS_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("GRANTS_API_TIMEOUT_SECS must be a number, got {raw:?}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: parse_api_url(&api_url)?,
            api_key,
            timeout: Duration::from_secs(timeout),
        })
    }

    /// Apply CLI overrides
    pub fn with_overrides(mut self, api_url: Option<&str>, api_key: Option<&str>) -> Result<Self> {
        if let Some(url) = api_url {
            self.api_url = parse_api_url(url)?;
        }
        if let Some(key) = api_key {
            self.api_key = Some(key.to_string());
        }
        Ok(self)
    }

    /// Absolute URL for an API path such as `/api/projects/1`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.as_str().trim_end_matches('/'), path)
    }
}

fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::Config(format!("invalid API URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "unsupported API URL scheme {other:?}, expected http or https"
        ))),
    }
}
