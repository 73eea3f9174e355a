//! Application configuration module
//!
//! Provides the configuration types consumed by the desktop client.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the auth server
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server base URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(AppConfig {
            server_url: self.server_url,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
