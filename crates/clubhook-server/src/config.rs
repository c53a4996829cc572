//! Relay configuration
//!
//! Settings are read once at startup through a key lookup; the
//! server passes Shuttle secrets with the process environment (and
//! `.env`) as a fallback.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const CLUBHOUSE_API_TOKEN: &str = "CLUBHOUSE_API_TOKEN";
pub const CLUBHOUSE_WEBHOOK_SECRET: &str = "CLUBHOUSE_WEBHOOK_SECRET";
pub const CLUBHOUSE_API_URL: &str = "CLUBHOUSE_API_URL";
pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

const DEFAULT_CLUBHOUSE_API_URL: &str = "https://api.clubhouse.io";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{0}` is not set")]
    Missing(&'static str),

    #[error("`{key}` is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Process-wide relay settings
#[derive(Clone)]
pub struct RelayConfig {
    /// Discord webhook that receives translated messages
    pub discord_webhook_url: Url,
    /// Token for the Clubhouse member API
    pub clubhouse_api_token: String,
    /// Shared secret for `Clubhouse-Signature`, if signing is enabled
    pub webhook_secret: Option<String>,
    pub clubhouse_api_url: Url,
    /// Timeout applied to every outbound HTTP call
    pub http_timeout: Duration,
}

impl RelayConfig {
    /// Build the configuration from a key lookup
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let discord_webhook_url = non_empty(DISCORD_WEBHOOK_URL)
            .ok_or(ConfigError::Missing(DISCORD_WEBHOOK_URL))
            .and_then(|raw| parse_http_url(DISCORD_WEBHOOK_URL, &raw))?;

        let clubhouse_api_token =
            non_empty(CLUBHOUSE_API_TOKEN).ok_or(ConfigError::Missing(CLUBHOUSE_API_TOKEN))?;

        let webhook_secret = non_empty(CLUBHOUSE_WEBHOOK_SECRET);

        let clubhouse_api_url = match non_empty(CLUBHOUSE_API_URL) {
            Some(raw) => parse_http_url(CLUBHOUSE_API_URL, &raw)?,
            None => parse_http_url(CLUBHOUSE_API_URL, DEFAULT_CLUBHOUSE_API_URL)?,
        };

        let http_timeout = match non_empty(HTTP_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: HTTP_TIMEOUT_SECS,
                        reason: format!("expected a positive number of seconds, got {raw:?}"),
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            discord_webhook_url,
            clubhouse_api_token,
            webhook_secret,
            clubhouse_api_url,
            http_timeout,
        })
    }
}

// Credentials stay out of logs.
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("discord_webhook_url", &"<redacted>")
            .field("clubhouse_api_token", &"<redacted>")
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "<redacted>"))
            .field("clubhouse_api_url", &self.clubhouse_api_url.as_str())
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

fn parse_http_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }
    Ok(url)
}
