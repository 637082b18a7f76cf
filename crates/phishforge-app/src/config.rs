//! Environment-driven runtime configuration.

use std::time::Duration;

use phishforge_client::validate_base_url;

use crate::AppError;

/// Default backend.
pub const DEFAULT_API_BASE_URL: &str = "https://phishforge-lite.onrender.com";

/// Backend base URL variable.
pub const ENV_API_BASE_URL: &str = "PHISHFORGE_API_BASE_URL";
/// Log filter variable, used when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "PHISHFORGE_LOG_LEVEL";
/// Health-probe switch variable.
pub const ENV_HEALTH_CHECK: &str = "PHISHFORGE_HEALTH_CHECK";
/// Request timeout variable, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "PHISHFORGE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Validated backend base URL.
    pub api_base_url: String,
    /// Default tracing filter.
    pub log_level: String,
    /// Whether to probe `/health` before analyzing.
    pub health_check: bool,
    /// Per-request transport timeout.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Reads configuration from process environment.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] for an invalid base URL or timeout.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// when set.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] for an invalid base URL or timeout.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_base_url = lookup(ENV_API_BASE_URL)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        validate_base_url(&api_base_url)
            .map_err(|error| AppError::Config(format!("{ENV_API_BASE_URL}: {error}")))?;

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|error| {
                AppError::Config(format!("{ENV_TIMEOUT_SECS}: invalid value {raw:?}: {error}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or_else(|| "info".to_string()),
            health_check: switch_enabled(lookup(ENV_HEALTH_CHECK).as_deref()),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Reads an on/off switch.
///
/// Semantics:
/// - Unset => enabled.
/// - `0`, `false`, `off` (case-insensitive) => disabled.
/// - Any other value => enabled.
pub fn switch_enabled(value: Option<&str>) -> bool {
    match value {
        Some(value) => {
            let normalized = value.trim().to_ascii_lowercase();
            !(normalized == "0" || normalized == "false" || normalized == "off")
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, "info");
        assert!(config.health_check);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn local_backend_is_accepted() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_API_BASE_URL, "http://localhost:8000"),
            (ENV_HEALTH_CHECK, "OFF"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .expect("local config is valid");
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(!config.health_check);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_plain_http_and_bad_timeout() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_API_BASE_URL, "http://phishforge.example")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])),
            Err(AppError::Config(_))
        ));
    }
}
