//! Start-up configuration. Read once in `main` and handed to the service, so
//! request handling never reaches into the process environment.

use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 500;
pub const TOP_P: f32 = 0.9;

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when `GROQ_API_KEY` is unset or empty.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub timeout: Duration,
    pub allow_origin: String,
    pub debug_raw: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            allow_origin: "*".to_string(),
            debug_raw: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let timeout = match get("GROQ_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!("GROQ_TIMEOUT_SECS must be a whole number, got {raw:?}"))
                })?;
                if secs == 0 {
                    return Err(AppError::Config("GROQ_TIMEOUT_SECS must be greater than zero".into()));
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        Ok(Self {
            api_key: get("GROQ_API_KEY"),
            api_url: get("GROQ_API_URL").unwrap_or(defaults.api_url),
            model: get("GROQ_MODEL").unwrap_or(defaults.model),
            timeout,
            allow_origin: get("CORS_ALLOW_ORIGIN").unwrap_or(defaults.allow_origin),
            debug_raw: get("DEBUG_GROQ_RAW").as_deref() == Some("1"),
            ..defaults
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.allow_origin, "*");
        assert!(!config.debug_raw);
    }

    #[test]
    fn empty_api_key_is_treated_as_missing() {
        let config = Config::from_lookup(lookup(&[("GROQ_API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn overrides_are_picked_up() {
        let config = Config::from_lookup(lookup(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_API_URL", "http://127.0.0.1:9000/v1/chat/completions"),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("GROQ_TIMEOUT_SECS", "5"),
            ("CORS_ALLOW_ORIGIN", "https://kaylx.com"),
            ("DEBUG_GROQ_RAW", "1"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.api_url, "http://127.0.0.1:9000/v1/chat/completions");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.allow_origin, "https://kaylx.com");
        assert!(config.debug_raw);
    }

    #[test]
    fn bad_timeout_is_a_startup_error() {
        for raw in ["soon", "0", "-1"] {
            let err = Config::from_lookup(lookup(&[("GROQ_TIMEOUT_SECS", raw)])).unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "{raw}: {err}");
        }
    }
}
