//! Test doubles shared by module tests.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, StatusCode};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

use crate::Error;
use crate::transport::{Transport, TransportResponse};

/// One request as observed at the transport seam.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Transport double: serves canned replies in order and records every
/// request, including a call counter for zero-network assertions.
#[derive(Default)]
pub(crate) struct MockTransport {
    replies: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one canned reply.
    pub fn reply(self, status: StatusCode, body: &str) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .push_back(TransportResponse::new(status, body));
        self
    }

    /// Number of requests that reached the transport.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request.
    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .expect("requests lock")
            .last()
            .expect("at least one request was sent")
            .clone()
    }

}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<TransportResponse, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let body = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .map(<[u8]>::to_vec);
        self.requests
            .lock()
            .expect("requests lock")
            .push(RecordedRequest {
                method: request.method().clone(),
                url: request.url().clone(),
                headers: request.headers().clone(),
                body,
            });

        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .expect("a canned reply was queued for this request");
        Ok(reply)
    }
}

/// Transport whose send never completes; for cancellation tests.
pub(crate) struct PendingTransport;

#[async_trait]
impl Transport for PendingTransport {
    async fn send(&self, _request: Request) -> Result<TransportResponse, Error> {
        futures::future::pending::<()>().await;
        unreachable!("pending future never resolves")
    }
}
