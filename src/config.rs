//! Generation-service configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing config: env var {var} not set")]
    Missing { var: String },

    /// An environment variable is set but cannot be used.
    #[error("invalid {var}: {message}")]
    Invalid { var: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Endpoint that accepts the multipart mask upload.
    pub url: String,
    pub timeouts: Timeouts,
}

impl GenerateConfig {
    /// Config for `url` with default timeouts.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), timeouts: Timeouts::default() }
    }

    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `MASKPAINT_GENERATE_URL`: `http://` or `https://` endpoint
    ///
    /// Optional:
    /// - `MASKPAINT_REQUEST_TIMEOUT_SECS`: default 120
    /// - `MASKPAINT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL is missing or malformed, or a
    /// timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MASKPAINT_GENERATE_URL")
            .map_err(|_| ConfigError::Missing { var: "MASKPAINT_GENERATE_URL".into() })?;
        let url = parse_url("MASKPAINT_GENERATE_URL", &url)?;
        let timeouts = Timeouts {
            request_secs: env_parse_secs("MASKPAINT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse_secs("MASKPAINT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };
        Ok(Self { url, timeouts })
    }
}

fn parse_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::Invalid { var: var.into(), message: format!("expected an http(s) URL, got '{url}'") })
    }
}

fn env_parse_secs(var: &str, default: u64) -> Result<u64, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        Ok(_) => Err(ConfigError::Invalid { var: var.into(), message: "must be greater than zero".into() }),
        Err(e) => Err(ConfigError::Invalid { var: var.into(), message: e.to_string() }),
    }
}
