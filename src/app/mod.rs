//! EventDesk Desktop App Module
//!
//! Native desktop client (egui/eframe) for the calendar-events REST
//! backend.
//!
//! # Architecture
//!
//! The app module is organized into focused submodules:
//!
//! - **`config`** - Configuration (API base address, vault selection)
//! - **`error`** - `ApiError` / `VaultError` taxonomy
//! - **`types`** - Wire types for the REST endpoints
//! - **`api`** - Configured HTTP client with per-request bearer auth
//! - **`vault`** - Token persistence backends behind one interface
//! - **`session`** - Session lifecycle state machine
//! - **`dashboard`** - Dashboard data flow (lists, create, delete)
//! - **`state`** - Central `AppState` and worker-result polling
//! - **`views`** - egui view functions
//! - **`theme`** - Colors and styling helpers
//! - **`main`** - Application entry point (binary)
//!
//! All network and vault I/O runs on worker threads reporting back
//! through channels; views only read and mutate `AppState`.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod vault;
pub mod views;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Config;
pub use dashboard::DashboardState;
pub use error::{ApiError, VaultError};
pub use session::{SessionManager, SessionPhase};
pub use state::AppState;
pub use types::{Event, User};
pub use vault::{FileVault, KeyringVault, MemoryVault, TokenVault};
