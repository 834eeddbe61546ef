use serde::{Deserialize, Serialize};

use super::account::Permission;
use super::inbox::Inbox;
use crate::validation::{Validate, ValidationResult, require_length};

/// Project grouping a set of inboxes.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub share_links: Option<ShareLinks>,
    #[serde(default)]
    pub inboxes: Vec<Inbox>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Invitation links of a project.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareLinks {
    #[serde(default)]
    pub admin: Option<String>,
    #[serde(default)]
    pub viewer: Option<String>,
}

/// Body of project creation; sent on the wire as `{"project": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
}

impl CreateProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for CreateProjectRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        require_length(&mut result, "name", &self.name, 80);
        result
    }
}

/// Body of project rename; sent on the wire as `{"project": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProjectRequest {
    pub name: String,
}

impl UpdateProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for UpdateProjectRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        require_length(&mut result, "name", &self.name, 80);
        result
    }
}

/// Payload returned by project deletion.
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedProject {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::CreateProjectRequest;
    use crate::validation::Validate;

    #[test]
    fn name_bounds_are_enforced() {
        assert!(CreateProjectRequest::new("Marketing").validate().is_valid());
        assert!(!CreateProjectRequest::new("").validate().is_valid());
        assert!(!CreateProjectRequest::new("x".repeat(81)).validate().is_valid());
    }
}
