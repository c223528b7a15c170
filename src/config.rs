use std::{env, time::Duration};

use secrecy::SecretString;

use crate::{
    constants::{DEFAULT_COMPLETION_API_BASE, DEFAULT_COMPLETION_MODEL},
    errors::{AppError, AppResult},
};

#[derive(Clone, Debug)]
pub struct Config {
    pub completion_api_key: SecretString,
    pub completion_api_base: String,
    pub completion_model: String,
    pub completion_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// The completion credential has no default: a missing or blank
    /// `GROQ_API_KEY` is a configuration error and the service must not start.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(
                    "GROQ_API_KEY is not set. Export it or add it to .env before starting"
                        .to_string(),
                )
            })?;

        Ok(Self {
            completion_api_key: SecretString::from(api_key),
            completion_api_base: lookup("COMPLETION_API_BASE")
                .unwrap_or_else(|| DEFAULT_COMPLETION_API_BASE.to_string()),
            completion_model: lookup("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
            completion_timeout_secs: lookup("COMPLETION_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "localhost".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            completion_api_key: SecretString::from("test_api_key".to_string()),
            completion_api_base: "http://127.0.0.1:9".to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            completion_timeout_secs: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
