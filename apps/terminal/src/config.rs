use std::path::PathBuf;
use std::time::Duration;

use tickerwatch_core::constants::DEFAULT_SEARCH_DEBOUNCE;
use tickerwatch_core::Error;
use tickerwatch_market_data::DEFAULT_BASE_URL;

/// Which quote backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    Live,
    /// Canned offline data
    Preview,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub data_dir: PathBuf,
    pub debounce: Duration,
    pub request_timeout: Duration,
    pub api: ApiMode,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let base_url = var("TICKERWATCH_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let data_dir = var("TICKERWATCH_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));
        let debounce_ms: u64 = var("TICKERWATCH_DEBOUNCE_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE.as_millis() as u64);
        let timeout_ms: u64 = var("TICKERWATCH_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30000);
        let api = match var("TICKERWATCH_API").as_deref() {
            None | Some("live") => ApiMode::Live,
            Some("preview") => ApiMode::Preview,
            Some(other) => {
                return Err(Error::InvalidConfigValue(format!(
                    "TICKERWATCH_API must be `live` or `preview`, got `{}`",
                    other
                )))
            }
        };
        let log_format = var("TICKERWATCH_LOG_FORMAT").unwrap_or_else(|| "text".into());

        Ok(Self {
            base_url,
            data_dir,
            debounce: Duration::from_millis(debounce_ms),
            request_timeout: Duration::from_millis(timeout_ms),
            api,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.debounce, Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.api, ApiMode::Live);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("TICKERWATCH_BASE_URL", "http://localhost:9000"),
            ("TICKERWATCH_DATA_DIR", "/tmp/tw"),
            ("TICKERWATCH_DEBOUNCE_MS", "50"),
            ("TICKERWATCH_REQUEST_TIMEOUT_MS", "not-a-number"),
            ("TICKERWATCH_API", "preview"),
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/tw"));
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.api, ApiMode::Preview);
    }

    #[test]
    fn test_unknown_api_mode_is_rejected() {
        let result = config(&[("TICKERWATCH_API", "sandbox")]);
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }
}
