/**
 * Authentication Client
 *
 * HTTP client functions for the login and register endpoints. The
 * session store talks to the network only through the [`AuthClient`]
 * trait, so tests can substitute a mock.
 */
use reqwest::Client;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::backend::error::ErrorResponse;
use crate::egui_app::config::Config;

/// Network interface to the auth endpoints
///
/// The error string is what the session store will show the user: the
/// server's rejection message when one was returned, otherwise the
/// transport error's own message.
pub trait AuthClient: Send + Sync {
    /// POST /api/auth/login
    fn login(&self, email: &str, password: &str) -> Result<AuthResponse, String>;

    /// POST /api/auth/register
    fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<AuthResponse, String>;
}

/// reqwest-backed [`AuthClient`]
pub struct HttpAuthClient {
    config: Config,
}

impl HttpAuthClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn post_auth<T: Serialize>(&self, path: &str, request: &T) -> Result<AuthResponse, String> {
        let client = Client::new();
        let url = self.config.api_url(path);

        // Create a runtime for async execution
        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = client
                .post(&url)
                .json(request)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            let status = response.status();
            if !status.is_success() {
                // Surface the server's message verbatim; fall back to the
                // status line when the body is not the expected shape.
                let message = response
                    .json::<ErrorResponse>()
                    .await
                    .map(|body| body.message)
                    .unwrap_or_else(|_| status.to_string());
                return Err(message);
            }

            response
                .json::<AuthResponse>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }
}

impl AuthClient for HttpAuthClient {
    fn login(&self, email: &str, password: &str) -> Result<AuthResponse, String> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_auth("/api/auth/login", &request)
    }

    fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<AuthResponse, String> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        self.post_auth("/api/auth/register", &request)
    }
}
