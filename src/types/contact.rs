use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::enums::{ContactImportStatus, ContactStatus};
use crate::validation::{Validate, ValidationResult, require_email};

/// Upper bound on rows in one bulk contact import.
pub const CONTACT_IMPORT_LIMIT: usize = 50_000;

/// Contact stored in the account's audience.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub list_ids: Vec<i64>,
    #[serde(default)]
    pub status: Option<ContactStatus>,
}

/// Body of contact creation; sent on the wire as `{"contact": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateContactRequest {
    pub email: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_ids: Vec<i64>,
}

impl CreateContactRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            fields: HashMap::new(),
            list_ids: Vec::new(),
        }
    }
}

impl Validate for CreateContactRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        require_email(&mut result, "email", &self.email);
        result
    }
}

/// Body of contact update; sent on the wire as `{"contact": {...}}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_ids_included: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_ids_excluded: Vec<i64>,
}

impl Validate for UpdateContactRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if let Some(email) = &self.email {
            require_email(&mut result, "email", email);
        }
        result
    }
}

/// One row of a bulk import.
#[derive(Debug, Clone, Serialize)]
pub struct ContactImportRow {
    pub email: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_ids_included: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_ids_excluded: Vec<i64>,
}

impl ContactImportRow {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            fields: HashMap::new(),
            list_ids_included: Vec::new(),
            list_ids_excluded: Vec::new(),
        }
    }
}

impl Validate for ContactImportRow {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        require_email(&mut result, "email", &self.email);
        result
    }
}

/// Body of a bulk import: `{"contacts": [...]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportContactsRequest {
    pub contacts: Vec<ContactImportRow>,
}

impl ImportContactsRequest {
    pub fn new(contacts: Vec<ContactImportRow>) -> Self {
        Self { contacts }
    }
}

impl Validate for ImportContactsRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if self.contacts.is_empty() {
            result.push("'contacts' must not be empty");
        } else if self.contacts.len() > CONTACT_IMPORT_LIMIT {
            result.push(format!(
                "'contacts' must have at most {CONTACT_IMPORT_LIMIT} rows"
            ));
        }

        // Row checks cascade: the first failing row is reported and the
        // rest are skipped, so one systematic mistake does not produce
        // fifty thousand errors.
        for (index, row) in self.contacts.iter().enumerate() {
            let row_result = row.validate();
            if !row_result.is_valid() {
                for message in row_result.errors() {
                    result.push(format!("contacts[{index}]: {message}"));
                }
                break;
            }
        }
        result
    }
}

/// State of a bulk import, including its partial-progress counters.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactImport {
    pub id: i64,
    pub status: ContactImportStatus,
    #[serde(default)]
    pub created_contacts_count: Option<i64>,
    #[serde(default)]
    pub updated_contacts_count: Option<i64>,
    #[serde(default)]
    pub contacts_over_limit_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::{CONTACT_IMPORT_LIMIT, ContactImportRow, ImportContactsRequest};
    use crate::validation::Validate;

    #[test]
    fn caps_the_row_count() {
        let rows = vec![ContactImportRow::new("a@example.com"); CONTACT_IMPORT_LIMIT + 1];
        let result = ImportContactsRequest::new(rows).validate();
        assert!(!result.is_valid());
        assert!(result.errors()[0].contains("at most 50000"));
    }

    #[test]
    fn row_validation_stops_at_the_first_failing_row() {
        let rows = vec![
            ContactImportRow::new("ok@example.com"),
            ContactImportRow::new("broken"),
            ContactImportRow::new("also-broken"),
        ];
        let result = ImportContactsRequest::new(rows).validate();
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].starts_with("contacts[1]:"));
    }

    #[test]
    fn a_clean_import_validates() {
        let rows = vec![ContactImportRow::new("a@example.com")];
        assert!(ImportContactsRequest::new(rows).validate().is_valid());
    }
}
