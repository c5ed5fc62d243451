//! Application State
//!
//! `AppState` owns the session, the dashboard, and the auth form
//! inputs, and bridges worker-thread results back onto the UI thread.
//! Results that land after the session phase has moved on are
//! discarded as stale.

use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

use crate::app::api::ApiClient;
use crate::app::config::Config;
use crate::app::dashboard::DashboardState;
use crate::app::error::ApiError;
use crate::app::session::{self, SessionManager, SessionPhase};
use crate::app::types::RegisterRequest;
use crate::app::vault::{self, TokenVault};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthKind {
    Login,
    Register,
}

/// Central application state shared across egui views.
pub struct AppState {
    pub session: SessionManager,
    pub dashboard: DashboardState,
    pub username_input: String,
    pub gmail_input: String,
    pub password_input: String,
    pub birthday_input: String,
    pub is_register_mode: bool,
    pub auth_error: Option<String>,
    pub auth_loading: bool,
    restore_result: Option<Receiver<Option<String>>>,
    auth_result: Option<(AuthKind, Receiver<Result<String, ApiError>>)>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let vault = vault::platform_default(&config);
        Self::with_vault(config, vault)
    }

    /// Build state over an explicit vault backend (used by tests).
    pub fn with_vault(config: Config, vault: Arc<dyn TokenVault>) -> Self {
        let api = ApiClient::new(config);
        let session = SessionManager::new(api, vault);

        let mut state = Self {
            session,
            dashboard: DashboardState::new(),
            username_input: String::new(),
            gmail_input: String::new(),
            password_input: String::new(),
            birthday_input: String::new(),
            is_register_mode: false,
            auth_error: None,
            auth_loading: false,
            restore_result: None,
            auth_result: None,
        };
        state.begin_restore();
        state
    }

    /// Kick off the one-time startup vault read.
    fn begin_restore(&mut self) {
        let vault = self.session.vault();
        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(session::restore_blocking(vault.as_ref()));
        });
        self.restore_result = Some(rx);
    }

    /// Poll worker results; call once per frame before rendering.
    pub fn poll_workers(&mut self) {
        if let Some(ref rx) = self.restore_result {
            if let Ok(stored) = rx.try_recv() {
                self.restore_result = None;
                self.session.complete_restore(stored);
                if self.session.is_authenticated() {
                    self.dashboard.refresh(self.session.api());
                }
            }
        }

        if let Some((kind, ref rx)) = self.auth_result {
            if let Ok(result) = rx.try_recv() {
                self.auth_result = None;
                self.auth_loading = false;

                // A result landing after a phase change is stale
                // (e.g. the session was torn down mid-flight).
                if self.session.phase() != SessionPhase::Anonymous {
                    tracing::warn!("dropping stale authentication result");
                    return;
                }

                match result {
                    Ok(token) => {
                        tracing::info!("authentication successful");
                        self.session.complete_login(token);
                        self.auth_error = None;
                        self.password_input.clear();
                        self.is_register_mode = false;
                        self.dashboard.refresh(self.session.api());
                    }
                    Err(e) => {
                        tracing::error!("authentication failed: {}", e);
                        self.auth_error = Some(match kind {
                            AuthKind::Login => "Usuario o contraseña incorrectos.".to_string(),
                            AuthKind::Register => {
                                "Error al registrar. ¿El email o usuario ya existe?".to_string()
                            }
                        });
                    }
                }
            }
        }

        if self.session.is_authenticated() {
            let api = self.session.api().clone();
            self.dashboard.poll(&api);
        }
    }

    pub fn handle_login(&mut self) {
        if self.username_input.is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Usuario y contraseña son obligatorios.".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let api = self.session.api().clone();
        let vault = self.session.vault();
        let username = self.username_input.clone();
        let password = self.password_input.clone();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(session::login_blocking(
                &api,
                vault.as_ref(),
                &username,
                &password,
            ));
        });

        self.auth_result = Some((AuthKind::Login, rx));
    }

    pub fn handle_register(&mut self) {
        if self.username_input.is_empty()
            || self.gmail_input.is_empty()
            || self.password_input.is_empty()
            || self.birthday_input.is_empty()
        {
            self.auth_error = Some("Todos los campos son obligatorios.".to_string());
            return;
        }

        // Simple email validation
        if !self.gmail_input.contains('@') {
            self.auth_error = Some("Introduce un email válido.".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let api = self.session.api().clone();
        let vault = self.session.vault();
        let request = RegisterRequest {
            username: self.username_input.clone(),
            gmail: self.gmail_input.clone(),
            password: self.password_input.clone(),
            birthday: self.birthday_input.clone(),
        };

        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(session::register_blocking(&api, vault.as_ref(), &request));
        });

        self.auth_result = Some((AuthKind::Register, rx));
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.dashboard = DashboardState::new();
        self.username_input.clear();
        self.gmail_input.clear();
        self.password_input.clear();
        self.birthday_input.clear();
        self.is_register_mode = false;
        self.auth_error = None;
        self.auth_loading = false;
        self.auth_result = None;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.auth_error = None;
        self.password_input.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
