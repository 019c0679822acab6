//! Configuration management for the contact relay.
//!
//! All settings are read once, at start-up, into a [`Config`] that is then
//! passed explicitly to the provider client and the server. Nothing reads
//! the environment after that.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_SENDER: &str = "onboarding@resend.dev";
pub const DEFAULT_RECIPIENT: &str = "b33267748@gmail.com";

/// Configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Email provider base URL
    pub resend_api_url: String,

    /// Email provider API key (bearer token)
    pub resend_api_key: String,

    /// Fixed sender identity for outbound notifications
    pub sender: EmailAddress,

    /// Fixed recipient of outbound notifications (the site owner)
    pub recipient: EmailAddress,

    /// Interface the HTTP server binds to (default: 127.0.0.1)
    pub bind_address: String,

    /// HTTP server port (default: 3000)
    pub port: u16,

    /// Outbound HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Document store endpoint for delivered messages; archiving is off when unset
    pub archive_url: Option<String>,

    pub archive_api_key: Option<String>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RESEND_API_KEY`: provider API key
    ///
    /// Optional environment variables:
    /// - `RESEND_API_URL`: provider base URL (default: https://api.resend.com)
    /// - `CONTACT_SENDER` / `CONTACT_RECIPIENT`: envelope addresses
    /// - `BIND_ADDRESS` / `PORT`: listen address (default: 127.0.0.1:3000)
    /// - `REQUEST_TIMEOUT`: outbound timeout in seconds (default: 10)
    /// - `ARCHIVE_URL` / `ARCHIVE_API_KEY`: optional message archive
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let resend_api_key = env::var("RESEND_API_KEY")
            .map_err(|_| ConfigError::MissingVar("RESEND_API_KEY".to_string()))?;

        if resend_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let resend_api_url =
            env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string());
        Self::require_http_url("RESEND_API_URL", &resend_api_url)?;

        let sender = Self::parse_env_email("CONTACT_SENDER", DEFAULT_SENDER)?;
        let recipient = Self::parse_env_email("CONTACT_RECIPIENT", DEFAULT_RECIPIENT)?;

        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = Self::parse_env_u16("PORT", 3000)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let archive_url = env::var("ARCHIVE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        if let Some(url) = &archive_url {
            Self::require_http_url("ARCHIVE_URL", url)?;
        }
        let archive_api_key = env::var("ARCHIVE_API_KEY").ok();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let config = Config {
            resend_api_url,
            resend_api_key,
            sender,
            recipient,
            bind_address,
            port,
            request_timeout,
            archive_url,
            archive_api_key,
            log_level,
        };
        config.socket_addr()?;

        Ok(config)
    }

    /// Address the HTTP server listens on.
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDRESS".to_string(),
                reason: format!("Not a valid IP address: {}", self.bind_address),
            })
    }

    fn require_http_url(var_name: &str, url: &str) -> ConfigResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as an email address with a default value.
    fn parse_env_email(var_name: &str, default: &str) -> ConfigResult<EmailAddress> {
        let raw = env::var(var_name).unwrap_or_else(|_| default.to_string());
        EmailAddress::new(&raw).map_err(|e| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            resend_api_key: String::new(),
            sender: EmailAddress::new(DEFAULT_SENDER).expect("default sender is a valid address"),
            recipient: EmailAddress::new(DEFAULT_RECIPIENT)
                .expect("default recipient is a valid address"),
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout: 10,
            archive_url: None,
            archive_api_key: None,
            log_level: "info".to_string(),
        }
    }
}
