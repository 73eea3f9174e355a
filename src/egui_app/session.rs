/**
 * Session Store
 *
 * Client-side session state machine. The store holds the credentials
 * being typed, the loading/error flags, and the authenticated session,
 * and it orchestrates the login/register calls against the auth server.
 *
 * # State Machine
 *
 * - Anonymous --login/register--> loading (error cleared)
 * - loading --success--> authenticated (token + user persisted, form cleared)
 * - loading --rejection/transport failure--> anonymous with an error message
 * - authenticated --logout--> anonymous (memory and durable storage cleared)
 * - startup --initialize--> authenticated if durable storage holds a
 *   parseable session, anonymous otherwise (corrupt data is cleared
 *   silently)
 *
 * The store is an explicit, injectable container rather than a global:
 * it is constructed from an [`AuthClient`] and a [`SessionStorage`], and
 * the UI drives it through `state()` / `subscribe()` / `dispatch()`.
 *
 * Network calls run on a spawned worker thread; the UI calls [`SessionStore::poll`]
 * each frame to apply the outcome. Only one call is expected in flight
 * at a time - a newer dispatch replaces the pending one, and there is no
 * timeout or cancellation, so a hung request leaves the store loading
 * until the process exits.
 */
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};

use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::auth::service::PublicUser;
use crate::egui_app::auth::AuthClient;

/// Durable storage key for the raw token string
pub const TOKEN_KEY: &str = "token";
/// Durable storage key for the JSON-serialized user
pub const USER_KEY: &str = "user";

/// Durable client storage: key-value strings surviving restarts
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Everything the presentation layer needs to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Email field contents
    pub email: String,
    /// Password field contents
    pub password: String,
    /// Confirm-password field contents
    pub confirm_password: String,
    /// A login/register call is in flight
    pub is_loading: bool,
    /// True iff both `token` and `user` are present
    pub is_logged_in: bool,
    /// The authenticated user, if any
    pub user: Option<PublicUser>,
    /// The session token, if any
    pub token: Option<String>,
    /// Message from the last failed attempt, if any
    pub error: Option<String>,
}

/// Actions the presentation layer can dispatch
#[derive(Debug, Clone)]
pub enum SessionAction {
    SetEmail(String),
    SetPassword(String),
    SetConfirmPassword(String),
    Login,
    Register,
    Logout,
    Initialize,
}

type AuthOutcome = Result<AuthResponse, String>;

/// The session state container
pub struct SessionStore {
    state: SessionState,
    client: Arc<dyn AuthClient>,
    storage: Box<dyn SessionStorage>,
    subscribers: Vec<Box<dyn Fn(&SessionState)>>,
    pending: Option<Receiver<AuthOutcome>>,
}

impl SessionStore {
    /// Create a store around a network client and durable storage
    pub fn new(client: Arc<dyn AuthClient>, storage: Box<dyn SessionStorage>) -> Self {
        Self {
            state: SessionState::default(),
            client,
            storage,
            subscribers: Vec::new(),
            pending: None,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Register a callback invoked after every state change
    pub fn subscribe(&mut self, callback: impl Fn(&SessionState) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Dispatch an action
    pub fn dispatch(&mut self, action: SessionAction) {
        match action {
            SessionAction::SetEmail(email) => {
                self.state.email = email;
                self.notify();
            }
            SessionAction::SetPassword(password) => {
                self.state.password = password;
                self.notify();
            }
            SessionAction::SetConfirmPassword(confirm) => {
                self.state.confirm_password = confirm;
                self.notify();
            }
            SessionAction::Login => self.login(),
            SessionAction::Register => self.register(),
            SessionAction::Logout => self.logout(),
            SessionAction::Initialize => self.initialize(),
        }
    }

    /// Whether a login/register call is awaiting its outcome
    pub fn has_pending_request(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the outcome of a finished login/register call, if any
    ///
    /// Called by the UI once per frame.
    pub fn poll(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        if let Ok(outcome) = rx.try_recv() {
            self.pending = None;
            self.apply_outcome(outcome);
        }
    }

    fn login(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
        self.notify();

        let client = Arc::clone(&self.client);
        let email = self.state.email.clone();
        let password = self.state.password.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(client.login(&email, &password));
        });

        // A newer request replaces any pending one; the superseded
        // worker's send lands in a dropped channel.
        self.pending = Some(rx);
    }

    fn register(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
        self.notify();

        let client = Arc::clone(&self.client);
        let email = self.state.email.clone();
        let password = self.state.password.clone();
        let confirm_password = self.state.confirm_password.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(client.register(&email, &password, &confirm_password));
        });

        self.pending = Some(rx);
    }

    fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.state = SessionState::default();
        self.notify();
    }

    fn initialize(&mut self) {
        let token = self.storage.get(TOKEN_KEY);
        let user_json = self.storage.get(USER_KEY);

        if let (Some(token), Some(user_json)) = (token, user_json) {
            match serde_json::from_str::<PublicUser>(&user_json) {
                Ok(user) => {
                    self.state.is_logged_in = true;
                    self.state.token = Some(token);
                    self.state.user = Some(user);
                }
                Err(_) => {
                    // Corrupted stored session: clear it, stay anonymous,
                    // show nothing to the user
                    self.storage.remove(TOKEN_KEY);
                    self.storage.remove(USER_KEY);
                    self.state.is_logged_in = false;
                    self.state.token = None;
                    self.state.user = None;
                }
            }
            self.notify();
        }
    }

    fn apply_outcome(&mut self, outcome: AuthOutcome) {
        match outcome {
            Ok(auth) => {
                // Both keys are written together
                self.storage.set(TOKEN_KEY, &auth.token);
                if let Ok(user_json) = serde_json::to_string(&auth.user) {
                    self.storage.set(USER_KEY, &user_json);
                }
                self.state = SessionState {
                    is_logged_in: true,
                    user: Some(auth.user),
                    token: Some(auth.token),
                    ..SessionState::default()
                };
            }
            Err(message) => {
                self.state.is_loading = false;
                self.state.error = Some(message);
                self.state.is_logged_in = false;
                self.state.user = None;
                self.state.token = None;
            }
        }
        self.notify();
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}

/// In-memory [`SessionStorage`]
///
/// Clones share the same backing map, which lets tests keep a handle to
/// the storage they hand the store.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&mut self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// File-backed [`SessionStorage`]
///
/// Persists the key-value map as a JSON file in the platform data
/// directory so the session survives app restarts.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileSessionStorage {
    /// Storage at the default location (`<data dir>/signon/session.json`)
    pub fn new() -> Self {
        let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        Self::with_path(base.join("signon").join("session.json"))
    }

    /// Storage at an explicit path
    pub fn with_path(path: PathBuf) -> Self {
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create session storage directory: {}", e);
                return;
            }
        }
        match serde_json::to_string(&self.entries) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(&self.path, contents) {
                    tracing::warn!("Failed to write session storage: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session storage: {}", e),
        }
    }
}

impl Default for FileSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.persist();
    }
}
