//! Session Manager
//!
//! Owns the current authentication token and the session lifecycle:
//!
//! ```text
//! Initializing ──vault hit──▶ Authenticated
//!      │                          ▲   │
//!      └──vault miss──▶ Anonymous ┘   │ logout()
//!                           ▲─────────┘
//! ```
//!
//! The `Initializing` transition happens exactly once per process and
//! gates all view rendering. There is no token-refresh edge.
//!
//! Transitions mutate the token and the client bearer together, only
//! on the UI thread, so the "Authorization header iff token held"
//! invariant cannot be violated in between.

use std::sync::Arc;

use crate::app::api::{worker_runtime, ApiClient};
use crate::app::error::ApiError;
use crate::app::types::RegisterRequest;
use crate::app::vault::TokenVault;

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Reading the vault at startup; views show a loading indicator
    Initializing,
    /// No token; login/register views render
    Anonymous,
    /// Token held and attached to outgoing requests
    Authenticated,
}

/// Single owner of the session token and phase.
pub struct SessionManager {
    api: ApiClient,
    vault: Arc<dyn TokenVault>,
    token: Option<String>,
    phase: SessionPhase,
}

impl SessionManager {
    pub fn new(api: ApiClient, vault: Arc<dyn TokenVault>) -> Self {
        Self {
            api,
            vault,
            token: None,
            phase: SessionPhase::Initializing,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// The configured API client; workers clone it to snapshot the
    /// current token.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Handle to the token vault for worker threads
    pub fn vault(&self) -> Arc<dyn TokenVault> {
        Arc::clone(&self.vault)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Apply the startup vault read. Runs exactly once per process.
    pub fn complete_restore(&mut self, stored: Option<String>) {
        debug_assert_eq!(self.phase, SessionPhase::Initializing);
        match stored {
            Some(token) => {
                tracing::info!("restored session from stored token");
                self.api.set_token(Some(token.clone()));
                self.token = Some(token);
                self.phase = SessionPhase::Authenticated;
            }
            None => {
                self.phase = SessionPhase::Anonymous;
            }
        }
    }

    /// Apply a successful login or register+login. The worker already
    /// persisted the token to the vault.
    pub fn complete_login(&mut self, token: String) {
        self.api.set_token(Some(token.clone()));
        self.token = Some(token);
        self.phase = SessionPhase::Authenticated;
    }

    /// Clear the in-memory token, the client bearer and the vault
    /// entry. Vault failures are swallowed; logout cannot fail
    /// observably.
    pub fn logout(&mut self) {
        self.token = None;
        self.api.set_token(None);
        self.phase = SessionPhase::Anonymous;

        if let Err(e) = self.vault.delete() {
            tracing::warn!("failed to delete stored token: {}", e);
        }
    }
}

/// Blocking login flow for a worker thread: authenticate, then
/// best-effort persist the token.
pub fn login_blocking(
    api: &ApiClient,
    vault: &dyn TokenVault,
    username: &str,
    password: &str,
) -> Result<String, ApiError> {
    let rt = worker_runtime()?;
    let token = rt.block_on(api.login(username, password))?.token;

    if let Err(e) = vault.save(&token) {
        tracing::warn!("failed to persist token: {}", e);
    }

    Ok(token)
}

/// Blocking registration flow: create the account, then log in with
/// the same credentials (the backend only issues tokens on login).
/// A failed registration makes no login attempt.
pub fn register_blocking(
    api: &ApiClient,
    vault: &dyn TokenVault,
    request: &RegisterRequest,
) -> Result<String, ApiError> {
    let rt = worker_runtime()?;
    let token = rt.block_on(async {
        api.register(request).await?;
        Ok::<_, ApiError>(api.login(&request.username, &request.password).await?.token)
    })?;

    if let Err(e) = vault.save(&token) {
        tracing::warn!("failed to persist token: {}", e);
    }

    Ok(token)
}

/// Blocking startup read. Read failures degrade to "no stored token".
pub fn restore_blocking(vault: &dyn TokenVault) -> Option<String> {
    match vault.read() {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!("failed to read stored token: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::app::vault::MemoryVault;

    fn session_with_vault(vault: Arc<MemoryVault>) -> SessionManager {
        let api = ApiClient::new(Config::with_base_url("http://localhost:3000/api"));
        SessionManager::new(api, vault)
    }

    #[test]
    fn test_starts_initializing() {
        let session = session_with_vault(Arc::new(MemoryVault::new()));
        assert_eq!(session.phase(), SessionPhase::Initializing);
        assert!(session.token().is_none());
        assert!(session.api().token().is_none());
    }

    #[test]
    fn test_restore_with_stored_token() {
        let mut session = session_with_vault(Arc::new(MemoryVault::new()));
        session.complete_restore(Some("stored".to_string()));

        assert_eq!(session.phase(), SessionPhase::Authenticated);
        assert_eq!(session.token(), Some("stored"));
        assert_eq!(session.api().token(), Some("stored"));
    }

    #[test]
    fn test_restore_without_stored_token() {
        let mut session = session_with_vault(Arc::new(MemoryVault::new()));
        session.complete_restore(None);

        assert_eq!(session.phase(), SessionPhase::Anonymous);
        assert!(session.token().is_none());
        assert!(session.api().token().is_none());
    }

    #[test]
    fn test_login_then_logout_keeps_token_and_bearer_in_step() {
        let vault = Arc::new(MemoryVault::new());
        let mut session = session_with_vault(Arc::clone(&vault));
        session.complete_restore(None);

        session.complete_login("tok123".to_string());
        assert_eq!(session.phase(), SessionPhase::Authenticated);
        assert_eq!(session.token(), Some("tok123"));
        assert_eq!(session.api().token(), Some("tok123"));

        session.logout();
        assert_eq!(session.phase(), SessionPhase::Anonymous);
        assert!(session.token().is_none());
        assert!(session.api().token().is_none());
    }

    #[test]
    fn test_logout_deletes_vault_entry() {
        let vault = Arc::new(MemoryVault::with_token("tok123"));
        let mut session = session_with_vault(Arc::clone(&vault));
        session.complete_restore(Some("tok123".to_string()));

        session.logout();
        assert_eq!(vault.read().unwrap(), None);
    }

    #[test]
    fn test_restore_blocking_swallows_read_failures() {
        struct BrokenVault;
        impl TokenVault for BrokenVault {
            fn save(&self, _: &str) -> Result<(), crate::app::error::VaultError> {
                Err(crate::app::error::VaultError::new("store locked"))
            }
            fn read(&self) -> Result<Option<String>, crate::app::error::VaultError> {
                Err(crate::app::error::VaultError::new("store locked"))
            }
            fn delete(&self) -> Result<(), crate::app::error::VaultError> {
                Err(crate::app::error::VaultError::new("store locked"))
            }
        }

        assert_eq!(restore_blocking(&BrokenVault), None);
    }

    #[test]
    fn test_logout_swallows_vault_failures() {
        struct BrokenVault;
        impl TokenVault for BrokenVault {
            fn save(&self, _: &str) -> Result<(), crate::app::error::VaultError> {
                Err(crate::app::error::VaultError::new("store locked"))
            }
            fn read(&self) -> Result<Option<String>, crate::app::error::VaultError> {
                Ok(None)
            }
            fn delete(&self) -> Result<(), crate::app::error::VaultError> {
                Err(crate::app::error::VaultError::new("store locked"))
            }
        }

        let api = ApiClient::new(Config::with_base_url("http://localhost:3000/api"));
        let mut session = SessionManager::new(api, Arc::new(BrokenVault));
        session.complete_restore(None);
        session.complete_login("tok123".to_string());

        // Must not panic or stay authenticated.
        session.logout();
        assert_eq!(session.phase(), SessionPhase::Anonymous);
    }
}
