use reqwest::{Method, StatusCode};
use thiserror::Error;
use url::Url;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Request failed local validation; nothing was sent.
    #[error("invalid request:\n{}", errors.join("\n"))]
    Validation {
        /// One entry per failed rule, in rule order.
        errors: Vec<String>,
    },

    /// Host URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// URL cannot carry path segments (for example `mailto:`).
    #[error("URL '{0}' is not hierarchical")]
    NotHierarchical(Url),

    /// Non-success HTTP status with the response payload.
    #[error("{method} {url} returned status {status}: {}", api_message.as_deref().unwrap_or(body))]
    Http {
        method: Method,
        url: Url,
        status: StatusCode,
        /// Raw response body, kept verbatim for reproduction.
        body: String,
        /// Error message extracted from the JSON error body, when present.
        api_message: Option<String>,
    },

    /// Success status, but the body does not match the expected shape.
    #[error("{method} {url} returned an invalid response: {detail}")]
    InvalidResponse {
        method: Method,
        url: Url,
        detail: String,
    },

    /// Operation attempted on a handle that already performed a delete.
    #[error("resource '{url}' has been deleted")]
    ResourceDeleted { url: Url },

    /// Execution was canceled while waiting on the network.
    #[error("operation canceled")]
    Canceled,

    /// A configured value cannot be carried as an HTTP header.
    #[error("invalid value for the '{name}' header")]
    InvalidHeader { name: &'static str },

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Builds an [`Error::Http`] from a non-success response, extracting the
    /// API error message when the body is the provider's JSON error shape.
    pub(crate) fn http(method: Method, url: Url, status: StatusCode, body: String) -> Self {
        let api_message = extract_api_message(&body);
        Self::Http {
            method,
            url,
            status,
            body,
            api_message,
        }
    }
}

/// Error body shape used by the API: `{"error": "..."}` or
/// `{"errors": "..."}` / `{"errors": ["...", ...]}`.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: Option<serde_json::Value>,
    errors: Option<serde_json::Value>,
}

fn extract_api_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    let value = parsed.error.or(parsed.errors)?;
    match value {
        serde_json::Value::String(message) => Some(message),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries.iter().filter_map(|e| e.as_str()).collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use reqwest::{Method, StatusCode};
    use url::Url;

    fn url() -> Url {
        Url::parse("https://api.mailwire.dev/api/accounts/1").expect("valid url")
    }

    #[test]
    fn http_error_extracts_api_message() {
        let error = Error::http(
            Method::GET,
            url(),
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Incorrect API token"}"#.to_owned(),
        );
        match error {
            Error::Http { api_message, .. } => {
                assert_eq!(api_message.as_deref(), Some("Incorrect API token"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn http_error_joins_error_array() {
        let error = Error::http(
            Method::POST,
            url(),
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors":["name is too short","name is taken"]}"#.to_owned(),
        );
        match error {
            Error::Http { api_message, .. } => {
                assert_eq!(
                    api_message.as_deref(),
                    Some("name is too short; name is taken")
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn http_error_keeps_raw_body_when_not_json() {
        let error = Error::http(
            Method::GET,
            url(),
            StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>".to_owned(),
        );
        match error {
            Error::Http {
                body, api_message, ..
            } => {
                assert_eq!(body, "<html>bad gateway</html>");
                assert!(api_message.is_none());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
