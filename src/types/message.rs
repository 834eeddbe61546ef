use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationResult, require_email};

/// Message captured by a sandbox inbox.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailMessage {
    pub id: i64,
    pub inbox_id: i64,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub from_email: Option<String>,
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub to_email: Option<String>,
    #[serde(default)]
    pub to_name: Option<String>,
    #[serde(default)]
    pub email_size: Option<i64>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub html_path: Option<String>,
    #[serde(default)]
    pub txt_path: Option<String>,
    #[serde(default)]
    pub raw_path: Option<String>,
}

/// Body of message update; sent on the wire as `{"message": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMessageRequest {
    pub is_read: bool,
}

impl Validate for UpdateMessageRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::ok()
    }
}

/// Body of a message forward.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardMessageRequest {
    pub email: String,
}

impl ForwardMessageRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Validate for ForwardMessageRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        require_email(&mut result, "email", &self.email);
        result
    }
}

/// Acknowledgement returned by a message forward.
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardMessageResponse {
    pub message: String,
}

/// Optional filters for a message listing.
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    /// Substring match against subject and addresses.
    pub search: Option<String>,
    /// 1-based page.
    pub page: Option<u32>,
    /// Return messages older than this id.
    pub last_id: Option<i64>,
}
