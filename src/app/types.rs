//! Wire Types
//!
//! Request and response bodies exchanged with the REST backend.
//! Field names follow the backend exactly (`_id`, `gmail`).

use serde::{Deserialize, Serialize};

/// A registered user as returned by `GET /user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub gmail: String,
}

/// A calendar event as returned by `GET /event`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Free-text schedule, e.g. "19:00 - 21:00"
    pub schedule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body of `POST /user/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /user/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body of `POST /user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub gmail: String,
    pub password: String,
    /// Free-text date, e.g. "2000-01-31"
    pub birthday: String,
}

/// Body of `POST /event`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub schedule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_underscore_id() {
        let json = r#"{"_id":"abc123","username":"alice","gmail":"alice@gmail.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "abc123");
        assert_eq!(user.username, "alice");
        assert_eq!(user.gmail, "alice@gmail.com");
    }

    #[test]
    fn test_event_without_address() {
        let json = r#"{"_id":"e1","name":"Cena","schedule":"21:00"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "e1");
        assert_eq!(event.address, None);
    }

    #[test]
    fn test_event_with_address() {
        let json = r#"{"_id":"e2","name":"Reunión","schedule":"10:00","address":"Calle Mayor 1"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.address.as_deref(), Some("Calle Mayor 1"));
    }

    #[test]
    fn test_new_event_omits_missing_address() {
        let event = NewEvent {
            name: "Cena".to_string(),
            schedule: "21:00".to_string(),
            address: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("address"));

        let event = NewEvent {
            address: Some("Calle Mayor 1".to_string()),
            ..event
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Calle Mayor 1"));
    }

    #[test]
    fn test_login_request_serialization() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"username\":\"alice\""));
        assert!(json.contains("\"password\":\"secret\""));
    }

    #[test]
    fn test_token_response_deserialization() {
        let response: TokenResponse = serde_json::from_str(r#"{"token":"tok123"}"#).unwrap();
        assert_eq!(response.token, "tok123");
    }
}
