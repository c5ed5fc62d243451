/**
 * REST API Client
 *
 * Thin client over the calendar-events backend. Holds the base
 * address and the current bearer token; the token is attached
 * per-request, so the Authorization header is present exactly when a
 * token is held.
 */
use reqwest::{Client, Method, RequestBuilder, Response};
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::app::error::ApiError;
use crate::app::types::{Event, LoginRequest, NewEvent, RegisterRequest, TokenResponse, User};

/// Configured HTTP client for the events backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Config,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
            token: None,
        }
    }

    /// Set or clear the bearer token. Affects requests issued after
    /// this call, not ones already in flight.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// The current bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build a request; attaches `Authorization: Bearer <token>` iff
    /// a token is held.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.http.request(method, self.config.api_url(path));
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send and map non-2xx statuses to `ApiError::Status`
    async fn send_checked(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ApiError::status(status.as_u16(), body));
        }

        Ok(response)
    }

    /// `POST /user/login`
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response =
            Self::send_checked(self.request(Method::POST, "/user/login").json(&request)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// `POST /user` - creates an account; no response fields are consumed
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        Self::send_checked(self.request(Method::POST, "/user").json(request)).await?;
        Ok(())
    }

    /// `GET /user`
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let response = Self::send_checked(self.request(Method::GET, "/user")).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// `GET /event`
    pub async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        let response = Self::send_checked(self.request(Method::GET, "/event")).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// `POST /event` - returns the created event
    pub async fn create_event(&self, event: &NewEvent) -> Result<Event, ApiError> {
        let response =
            Self::send_checked(self.request(Method::POST, "/event").json(event)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// `DELETE /event/{id}`
    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        Self::send_checked(self.request(Method::DELETE, &format!("/event/{}", id))).await?;
        Ok(())
    }
}

/// Create a runtime for async execution on a worker thread
pub(crate) fn worker_runtime() -> Result<Runtime, ApiError> {
    Runtime::new().map_err(|e| ApiError::network(format!("Failed to create runtime: {}", e)))
}
