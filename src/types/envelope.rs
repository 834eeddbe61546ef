use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::validation::{Validate, ValidationResult};

/// Wraps a request payload under the single wire key the endpoint expects,
/// for example `{"project": {...}}`.
///
/// Validation passes through to the payload, so enveloping never hides a
/// rule failure.
pub(crate) struct Envelope<T> {
    key: &'static str,
    payload: T,
}

impl<T> Envelope<T> {
    pub(crate) fn new(key: &'static str, payload: T) -> Self {
        Self { key, payload }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.payload)?;
        map.end()
    }
}

impl<T: Validate> Validate for Envelope<T> {
    fn validate(&self) -> ValidationResult {
        self.payload.validate()
    }
}
