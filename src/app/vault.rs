//! Token Vault
//!
//! Persistence for the single session token. Backends implement one
//! capability interface (`save`/`read`/`delete`); the rest of the
//! system only sees the trait object picked at startup.
//!
//! Durability is best-effort: callers log vault failures and carry
//! on. A lost token only forces a re-login on the next launch.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::app::config::Config;
use crate::app::error::VaultError;

/// Fixed name of the single stored secret
const TOKEN_KEY: &str = "userToken";

/// Service name used for the OS credential store and config dir
const SERVICE_NAME: &str = "eventdesk";

/// Persistent store for the session token.
pub trait TokenVault: Send + Sync {
    fn save(&self, token: &str) -> Result<(), VaultError>;
    fn read(&self) -> Result<Option<String>, VaultError>;
    fn delete(&self) -> Result<(), VaultError>;
}

/// OS credential store backend (Keychain, Credential Manager,
/// Secret Service).
pub struct KeyringVault;

impl KeyringVault {
    fn entry(&self) -> Result<keyring::Entry, VaultError> {
        keyring::Entry::new(SERVICE_NAME, TOKEN_KEY).map_err(|e| VaultError::new(e.to_string()))
    }
}

impl TokenVault for KeyringVault {
    fn save(&self, token: &str) -> Result<(), VaultError> {
        self.entry()?
            .set_password(token)
            .map_err(|e| VaultError::new(e.to_string()))
    }

    fn read(&self) -> Result<Option<String>, VaultError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(VaultError::new(e.to_string())),
        }
    }

    fn delete(&self) -> Result<(), VaultError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(VaultError::new(e.to_string())),
        }
    }
}

/// Plain-file backend under the user config directory.
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    pub fn new() -> Result<Self, VaultError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| VaultError::new("no config directory on this platform"))?
            .join(SERVICE_NAME);
        Ok(Self {
            path: dir.join(TOKEN_KEY),
        })
    }

    /// Backend rooted at an explicit path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenVault for FileVault {
    fn save(&self, token: &str) -> Result<(), VaultError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| VaultError::new(e.to_string()))?;
        }
        fs::write(&self.path, token).map_err(|e| VaultError::new(e.to_string()))
    }

    fn read(&self) -> Result<Option<String>, VaultError> {
        match fs::read_to_string(&self.path) {
            Ok(token) if token.is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VaultError::new(e.to_string())),
        }
    }

    fn delete(&self) -> Result<(), VaultError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(VaultError::new(e.to_string())),
        }
    }
}

/// In-process backend for tests.
#[derive(Default)]
pub struct MemoryVault {
    token: Mutex<Option<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl MemoryVault {
    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, VaultError> {
        self.token
            .lock()
            .map_err(|_| VaultError::new("vault lock poisoned"))
    }
}

impl TokenVault for MemoryVault {
    fn save(&self, token: &str) -> Result<(), VaultError> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn read(&self) -> Result<Option<String>, VaultError> {
        Ok(self.slot()?.clone())
    }

    fn delete(&self) -> Result<(), VaultError> {
        *self.slot()? = None;
        Ok(())
    }
}

/// Select the storage backend for this platform and configuration.
pub fn platform_default(config: &Config) -> Arc<dyn TokenVault> {
    if config.use_file_vault() {
        match FileVault::new() {
            Ok(vault) => return Arc::new(vault),
            Err(e) => tracing::warn!("file vault unavailable, using keyring: {}", e),
        }
    }
    Arc::new(KeyringVault)
}
