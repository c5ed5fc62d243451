//! Dashboard State
//!
//! State behind the authenticated view: the user and event lists, the
//! create-event form and the delete-confirmation flow. Network work
//! runs on worker threads and reports back through channels polled
//! once per frame.

use std::sync::mpsc::{channel, Receiver};
use std::thread;

use chrono::{DateTime, Local};

use crate::app::api::{worker_runtime, ApiClient};
use crate::app::error::ApiError;
use crate::app::types::{Event, NewEvent, User};

type FetchResult = Result<(Vec<User>, Vec<Event>), ApiError>;

#[derive(Debug, Clone, Copy)]
enum ActionKind {
    Create,
    Delete,
}

type ActionResult = (ActionKind, Result<(), ApiError>);

/// State for the authenticated dashboard view.
pub struct DashboardState {
    pub users: Vec<User>,
    pub events: Vec<Event>,
    /// True while the joined users+events fetch is in flight
    pub loading: bool,
    /// True while a create/delete action is in flight
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub show_users: bool,
    pub event_name_input: String,
    pub event_schedule_input: String,
    pub event_address_input: String,
    /// Event id awaiting user confirmation before deletion
    pub pending_delete: Option<String>,
    pub last_refreshed: Option<DateTime<Local>>,
    fetch_result: Option<Receiver<FetchResult>>,
    action_result: Option<Receiver<ActionResult>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            events: Vec::new(),
            loading: false,
            busy: false,
            error: None,
            notice: None,
            show_users: false,
            event_name_input: String::new(),
            event_schedule_input: String::new(),
            event_address_input: String::new(),
            pending_delete: None,
            last_refreshed: None,
            fetch_result: None,
            action_result: None,
        }
    }

    /// Fetch the user and event lists concurrently. Either failure
    /// fails the whole refresh; the loading flag clears only when the
    /// joined fetch settles.
    pub fn refresh(&mut self, api: &ApiClient) {
        self.loading = true;
        self.error = None;

        let api = api.clone();
        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(fetch_all_blocking(&api));
        });

        self.fetch_result = Some(rx);
    }

    /// Validate and submit the create-event form. Sends nothing when
    /// name or schedule is empty.
    pub fn handle_create_event(&mut self, api: &ApiClient) {
        if self.event_name_input.trim().is_empty() || self.event_schedule_input.trim().is_empty() {
            self.error = Some("Nombre y Horario son obligatorios.".to_string());
            return;
        }

        let address = self.event_address_input.trim();
        let new_event = NewEvent {
            name: self.event_name_input.trim().to_string(),
            schedule: self.event_schedule_input.trim().to_string(),
            address: if address.is_empty() {
                None
            } else {
                Some(address.to_string())
            },
        };

        self.busy = true;
        self.error = None;
        self.notice = None;

        let api = api.clone();
        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = worker_runtime()
                .and_then(|rt| rt.block_on(api.create_event(&new_event)))
                .map(|_| ());
            let _ = tx.send((ActionKind::Create, result));
        });

        self.action_result = Some(rx);
    }

    /// Start the delete-confirmation flow; no request is sent yet.
    pub fn request_delete(&mut self, id: String) {
        self.pending_delete = Some(id);
    }

    /// Decline the confirmation; zero requests are sent.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// User confirmed: issue the delete request.
    pub fn confirm_delete(&mut self, api: &ApiClient) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        self.busy = true;
        self.error = None;
        self.notice = None;

        let api = api.clone();
        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = worker_runtime().and_then(|rt| rt.block_on(api.delete_event(&id)));
            let _ = tx.send((ActionKind::Delete, result));
        });

        self.action_result = Some(rx);
    }

    /// Poll worker results; call once per frame.
    pub fn poll(&mut self, api: &ApiClient) {
        if let Some(ref rx) = self.fetch_result {
            if let Ok(result) = rx.try_recv() {
                self.fetch_result = None;
                self.loading = false;

                match result {
                    Ok((users, events)) => {
                        self.users = users;
                        self.events = events;
                        self.last_refreshed = Some(Local::now());
                    }
                    Err(e) => {
                        tracing::error!("dashboard refresh failed: {}", e);
                        self.error = Some("Falló la carga de datos.".to_string());
                    }
                }
            }
        }

        if let Some(ref rx) = self.action_result {
            if let Ok((kind, result)) = rx.try_recv() {
                self.action_result = None;
                self.busy = false;

                match (kind, result) {
                    (ActionKind::Create, Ok(())) => {
                        self.event_name_input.clear();
                        self.event_schedule_input.clear();
                        self.event_address_input.clear();
                        self.notice = Some("Evento creado correctamente.".to_string());
                        self.refresh(api);
                    }
                    (ActionKind::Delete, Ok(())) => {
                        self.notice = Some("Evento eliminado.".to_string());
                        self.refresh(api);
                    }
                    (ActionKind::Create, Err(e)) => {
                        tracing::error!("event creation failed: {}", e);
                        self.error = Some("No se pudo crear el evento.".to_string());
                    }
                    (ActionKind::Delete, Err(e)) => {
                        tracing::error!("event deletion failed: {}", e);
                        self.error = Some("No se pudo eliminar el evento.".to_string());
                    }
                }
            }
        }
    }

    /// True while no worker result is pending
    pub fn idle(&self) -> bool {
        self.fetch_result.is_none() && self.action_result.is_none()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue both list fetches concurrently and join them.
fn fetch_all_blocking(api: &ApiClient) -> FetchResult {
    let rt = worker_runtime()?;
    rt.block_on(async { tokio::try_join!(api.fetch_users(), api.fetch_events()) })
}
