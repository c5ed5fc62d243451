//! EventDesk - Main Library
//!
//! EventDesk is a native desktop client for a small calendar-events
//! service, built with egui/eframe over a JSON/REST backend.
//!
//! # Overview
//!
//! The library provides:
//! - Session lifecycle management (login, registration with
//!   auto-login, logout, token persistence across launches)
//! - A configured REST client that attaches the bearer token to every
//!   request issued while a session is held
//! - Token vault backends over the OS credential store or a plain
//!   config-dir file
//! - The dashboard data flow: concurrent user/event list fetches,
//!   event creation and confirmed deletion
//!
//! # Concurrency
//!
//! egui is a single-threaded immediate-mode GUI. All I/O runs on
//! worker threads that block on a per-call tokio runtime and report
//! results through `std::sync::mpsc` channels, polled once per frame
//! by `app::AppState::poll_workers`.

/// Desktop application: state, REST client, session, views
pub mod app;
