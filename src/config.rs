use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub response_delay: Duration,
    pub max_payload_bytes: usize,
}

impl Config {
    /// Reads configuration from the environment.
    /// Fails when the API key is missing or blank.
    pub fn from_env() -> AppResult<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("GEMINI_API_KEY environment variable is not set".to_string())
            })?;

        let config = Self {
            gemini_api_key: SecretString::from(gemini_api_key),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            response_delay: Duration::from_millis(
                env::var("RESPONSE_DELAY_MS")
                    .ok()
                    .and_then(|ms| ms.parse().ok())
                    .unwrap_or(1000),
            ),
            max_payload_bytes: env::var("MAX_PAYLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(256 * 1024),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.gemini_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "GEMINI_API_KEY must not be empty".to_string(),
            ));
        }

        if self.gemini_model.trim().is_empty() {
            return Err(AppError::ConfigError(
                "GEMINI_MODEL must not be empty".to_string(),
            ));
        }

        if !self.gemini_api_base.starts_with("http://")
            && !self.gemini_api_base.starts_with("https://")
        {
            return Err(AppError::ConfigError(format!(
                "GEMINI_API_BASE must be an http(s) URL, got '{}'",
                self.gemini_api_base
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: "http://127.0.0.1:9".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            response_delay: Duration::ZERO,
            max_payload_bytes: 64 * 1024,
        }
    }
}
