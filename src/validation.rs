//! Local request validation, run before anything touches the network.

use crate::Error;

/// Outcome of validating one request object.
///
/// Holds the failed-rule messages in rule order; an empty list means the
/// request is valid.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no errors.
    pub fn ok() -> Self {
        Self::default()
    }

    /// True when no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed-rule messages, in rule order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Records one failed rule.
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Folds another result into this one, keeping message order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Converts a failing result into [`Error::Validation`].
    pub fn ensure_valid(self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::Validation {
                errors: self.errors,
            })
        }
    }
}

/// Implemented by every mutating request type.
///
/// Validators are pure: they read the request and report rule failures,
/// holding no state of their own. The command pipeline calls this for every
/// request body before serialization.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

/// Bodiless commands have nothing to validate.
impl Validate for () {
    fn validate(&self) -> ValidationResult {
        ValidationResult::ok()
    }
}

/// `field` must be non-empty.
pub(crate) fn require(result: &mut ValidationResult, field: &str, value: &str) {
    if value.is_empty() {
        result.push(format!("'{field}' is required"));
    }
}

/// `field` must be non-empty and at most `max` characters.
pub(crate) fn require_length(
    result: &mut ValidationResult,
    field: &str,
    value: &str,
    max: usize,
) {
    if value.is_empty() {
        result.push(format!("'{field}' is required"));
    } else if value.chars().count() > max {
        result.push(format!("'{field}' must be at most {max} characters"));
    }
}

/// `field` must look like an email address and fit the wire bound.
pub(crate) fn require_email(result: &mut ValidationResult, field: &str, value: &str) {
    if value.is_empty() {
        result.push(format!("'{field}' is required"));
    } else if !value.contains('@') {
        result.push(format!("'{field}' must be an email address"));
    } else if value.chars().count() > 255 {
        result.push(format!("'{field}' must be at most 255 characters"));
    }
}

/// Optional `field`, bounded when present.
pub(crate) fn limit_length(
    result: &mut ValidationResult,
    field: &str,
    value: Option<&str>,
    max: usize,
) {
    if let Some(value) = value {
        if value.chars().count() > max {
            result.push(format!("'{field}' must be at most {max} characters"));
        }
    }
}
