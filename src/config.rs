//! Flow endpoint configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! The endpoint path and bearer token are operational settings, never
//! compiled in. Values come from the process environment (optionally seeded
//! from a `.env` file by the binary) and may be overridden by CLI flags.
//! Parsing goes through a lookup function so tests never touch the real
//! process environment.

pub const DEFAULT_FLOW_BASE_URL: &str = "https://api.langflow.astra.datastax.com";
pub const DEFAULT_FLOW_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const ENV_BASE_URL: &str = "FLOW_BASE_URL";
pub const ENV_RUN_PATH: &str = "FLOW_RUN_PATH";
pub const ENV_API_TOKEN: &str = "FLOW_API_TOKEN";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "FLOW_REQUEST_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "FLOW_CONNECT_TIMEOUT_SECS";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is absent or empty.
    #[error("missing config: {var} not set")]
    Missing { var: &'static str },

    /// A setting is present but could not be parsed.
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

// =============================================================================
// TYPES
// =============================================================================

/// `request_secs` is `None` when requests may wait indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: u64,
}

impl Default for FlowTimeouts {
    fn default() -> Self {
        Self { request_secs: None, connect_secs: DEFAULT_FLOW_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub base_url: String,
    pub run_path: String,
    pub api_token: String,
    pub timeouts: FlowTimeouts,
}

/// Values supplied on the command line. Each one wins over its env var.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub run_path: Option<String>,
    pub api_token: Option<String>,
}

impl FlowConfig {
    /// Build a config from explicit values, normalizing the URL parts.
    #[must_use]
    pub fn new(base_url: &str, run_path: &str, api_token: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            run_path: normalize_run_path(run_path),
            api_token: api_token.into(),
            timeouts: FlowTimeouts::default(),
        }
    }

    /// Build typed flow config from the process environment.
    ///
    /// Required:
    /// - `FLOW_RUN_PATH`: path of the run endpoint, e.g. `/lf/<org>/api/v1/run/<flow>`
    /// - `FLOW_API_TOKEN`: bearer token
    ///
    /// Optional:
    /// - `FLOW_BASE_URL`: default `https://api.langflow.astra.datastax.com`
    /// - `FLOW_REQUEST_TIMEOUT_SECS`: unset means no request timeout
    /// - `FLOW_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required value is missing or a number
    /// does not parse.
    pub fn from_env(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Same as [`FlowConfig::from_env`] with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// See [`FlowConfig::from_env`].
    pub fn from_lookup<F>(overrides: &ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |flag: &Option<String>, var: &str| {
            flag.clone()
                .or_else(|| lookup(var))
                .filter(|value| !value.trim().is_empty())
        };

        let base_url = setting(&overrides.base_url, ENV_BASE_URL).unwrap_or_else(|| DEFAULT_FLOW_BASE_URL.to_string());
        let run_path =
            setting(&overrides.run_path, ENV_RUN_PATH).ok_or(ConfigError::Missing { var: ENV_RUN_PATH })?;
        let api_token =
            setting(&overrides.api_token, ENV_API_TOKEN).ok_or(ConfigError::Missing { var: ENV_API_TOKEN })?;

        let request_secs = match lookup(ENV_REQUEST_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(parse_secs(ENV_REQUEST_TIMEOUT_SECS, &raw)?),
            None => None,
        };
        let connect_secs = match lookup(ENV_CONNECT_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_secs(ENV_CONNECT_TIMEOUT_SECS, &raw)?,
            None => DEFAULT_FLOW_CONNECT_TIMEOUT_SECS,
        };

        let mut config = Self::new(&base_url, &run_path, api_token.trim());
        config.timeouts = FlowTimeouts { request_secs, connect_secs };
        Ok(config)
    }

    /// Full URL of the run endpoint.
    #[must_use]
    pub fn run_url(&self) -> String {
        format!("{}{}", self.base_url, self.run_path)
    }
}

fn parse_secs(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid { var, value: raw.to_string() })
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn normalize_run_path(raw: &str) -> String {
    let path = raw.trim();
    if path.starts_with('/') { path.to_string() } else { format!("/{path}") }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
