use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .build()
            .unwrap_or_else(|_| AppConfig {
                server_url: Some(DEFAULT_SERVER_URL.to_string()),
            });
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
