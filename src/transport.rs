//! HTTP-sending abstraction.
//!
//! Commands hand a ready-to-send request to a [`Transport`] and get back a
//! fully buffered response. The trait is the single seam between this crate
//! and the network, which also makes it the natural mock boundary for tests.

use async_trait::async_trait;
use reqwest::{Request, StatusCode};
use std::borrow::Cow;

use crate::Error;

/// A fully buffered HTTP response: status plus body bytes.
///
/// Buffering happens inside the transport, so response interpretation is
/// pure and never suspends.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response from a status and body.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Sends one HTTP request.
///
/// Implementations hold configuration only and are shared behind an `Arc`
/// across every resource handle, so they must be safe for concurrent use.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and buffers the response.
    async fn send(&self, request: Request) -> Result<TransportResponse, Error>;
}

/// Production [`Transport`] backed by a shared `reqwest` client.
///
/// Connection pooling, TLS, and timeouts are reqwest's defaults; this crate
/// adds no policy of its own on top.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default `reqwest` client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport over an existing `reqwest` client.
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<TransportResponse, Error> {
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::TransportResponse;
    use reqwest::StatusCode;

    #[test]
    fn body_text_replaces_invalid_utf8() {
        let response = TransportResponse::new(StatusCode::OK, vec![0x68, 0x69, 0xFF]);
        assert_eq!(response.body_text(), "hi\u{FFFD}");
    }
}
