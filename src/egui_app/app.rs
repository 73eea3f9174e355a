/**
 * Application Shell
 *
 * Owns the session store, drives it once per frame, and switches
 * between the auth form and the dashboard. Field-level validation
 * errors and the error-banner dismissal are presentation state and live
 * here, not in the store.
 */
use std::sync::Arc;

use eframe::egui;

use crate::egui_app::auth::HttpAuthClient;
use crate::egui_app::config::Config;
use crate::egui_app::session::{FileSessionStorage, SessionAction, SessionStore};
use crate::egui_app::views;
use crate::shared::validation::{validate_confirm_password, validate_email, validate_password};

/// Main application state
pub struct AuthApp {
    pub store: SessionStore,
    pub is_signup_mode: bool,
    pub dismissed_error: bool,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub confirm_password_error: Option<String>,
}

impl AuthApp {
    /// App wired to the real HTTP client and file-backed storage
    pub fn new() -> Self {
        let config = Config::new();
        let client = Arc::new(HttpAuthClient::new(config));
        let storage = Box::new(FileSessionStorage::new());
        Self::with_store(SessionStore::new(client, storage))
    }

    /// App around an existing store
    pub fn with_store(mut store: SessionStore) -> Self {
        store.dispatch(SessionAction::Initialize);
        Self {
            store,
            is_signup_mode: false,
            dismissed_error: false,
            email_error: None,
            password_error: None,
            confirm_password_error: None,
        }
    }

    /// Validate the form and dispatch login/register if it passes
    pub fn handle_submit(&mut self) {
        let state = self.store.state();
        self.email_error = validate_email(&state.email).err().map(|e| e.to_string());
        self.password_error = validate_password(&state.password).err().map(|e| e.to_string());
        self.confirm_password_error = if self.is_signup_mode {
            validate_confirm_password(&state.password, &state.confirm_password)
                .err()
                .map(|e| e.to_string())
        } else {
            None
        };

        if self.email_error.is_some()
            || self.password_error.is_some()
            || self.confirm_password_error.is_some()
        {
            return;
        }

        self.dismissed_error = false;
        if self.is_signup_mode {
            self.store.dispatch(SessionAction::Register);
        } else {
            self.store.dispatch(SessionAction::Login);
        }
    }

    /// Switch between sign-in and sign-up, clearing field errors
    pub fn toggle_auth_mode(&mut self) {
        self.is_signup_mode = !self.is_signup_mode;
        self.email_error = None;
        self.password_error = None;
        self.confirm_password_error = None;
        self.dismissed_error = true;
    }

    /// Hide the error banner without touching the store
    pub fn dismiss_error(&mut self) {
        self.dismissed_error = true;
    }
}

impl Default for AuthApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for AuthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.store.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.store.state().is_logged_in {
                views::dashboard_view::render(ui, &mut self.store);
            } else {
                views::auth_view::render(ui, self);
            }
        });

        // Keep polling while a call is in flight
        if self.store.has_pending_request() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::types::AuthResponse;
    use crate::backend::auth::service::PublicUser;
    use crate::egui_app::auth::AuthClient;
    use crate::egui_app::session::MemorySessionStorage;

    struct MockAuthClient;

    impl AuthClient for MockAuthClient {
        fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse, String> {
            Ok(AuthResponse {
                success: true,
                token: "tok".to_string(),
                user: PublicUser {
                    id: 1,
                    email: "test@example.com".to_string(),
                },
                message: "Login successful".to_string(),
            })
        }

        fn register(&self, _e: &str, _p: &str, _c: &str) -> Result<AuthResponse, String> {
            Err("unused".to_string())
        }
    }

    fn test_app() -> AuthApp {
        let store = SessionStore::new(
            Arc::new(MockAuthClient),
            Box::new(MemorySessionStorage::new()),
        );
        AuthApp::with_store(store)
    }

    #[test]
    fn test_submit_blocks_on_invalid_email() {
        let mut app = test_app();
        app.store
            .dispatch(SessionAction::SetEmail("not-an-email".to_string()));
        app.store
            .dispatch(SessionAction::SetPassword("password123".to_string()));

        app.handle_submit();

        assert_eq!(
            app.email_error.as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(!app.store.state().is_loading);
    }

    #[test]
    fn test_submit_requires_confirmation_in_signup_mode() {
        let mut app = test_app();
        app.is_signup_mode = true;
        app.store
            .dispatch(SessionAction::SetEmail("new@example.com".to_string()));
        app.store
            .dispatch(SessionAction::SetPassword("password123".to_string()));

        app.handle_submit();

        assert_eq!(
            app.confirm_password_error.as_deref(),
            Some("Confirm password is required")
        );
        assert!(!app.store.state().is_loading);
    }

    #[test]
    fn test_submit_dispatches_when_valid() {
        let mut app = test_app();
        app.store
            .dispatch(SessionAction::SetEmail("test@example.com".to_string()));
        app.store
            .dispatch(SessionAction::SetPassword("password123".to_string()));

        app.handle_submit();

        assert!(app.email_error.is_none());
        assert!(app.store.state().is_loading);
    }

    #[test]
    fn test_toggle_clears_field_errors() {
        let mut app = test_app();
        app.email_error = Some("Email is required".to_string());

        app.toggle_auth_mode();

        assert!(app.is_signup_mode);
        assert!(app.email_error.is_none());
        assert!(app.dismissed_error);
    }
}
