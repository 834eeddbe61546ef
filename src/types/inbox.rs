use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationResult, require_length};

/// Sandbox inbox with its credentials and counters.
#[derive(Debug, Clone, Deserialize)]
pub struct Inbox {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub max_size: Option<i64>,
    #[serde(default)]
    pub email_username: Option<String>,
    #[serde(default)]
    pub email_username_enabled: Option<bool>,
    #[serde(default)]
    pub emails_count: Option<i64>,
    #[serde(default)]
    pub emails_unread_count: Option<i64>,
    #[serde(default)]
    pub sent_messages_count: Option<i64>,
    #[serde(default)]
    pub forwarded_messages_count: Option<i64>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub pop3_domain: Option<String>,
    #[serde(default)]
    pub email_domain: Option<String>,
}

/// Body of inbox update; sent on the wire as `{"inbox": {...}}`.
///
/// Both fields are optional on the wire, but at least one must be present
/// for the update to mean anything.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInboxRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_username: Option<String>,
}

impl UpdateInboxRequest {
    /// Update carrying only a new display name.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email_username: None,
        }
    }
}

impl Validate for UpdateInboxRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if self.name.is_none() && self.email_username.is_none() {
            result.push("at least one of 'name' and 'email_username' must be set");
        }
        if let Some(name) = &self.name {
            require_length(&mut result, "name", name, 80);
        }
        if let Some(email_username) = &self.email_username {
            require_length(&mut result, "email_username", email_username, 80);
        }
        result
    }
}
