//! Response interpretation strategies.
//!
//! Each command picks one strategy at construction time: decode a JSON body,
//! report the bare status code, or return the body as plain text. All three
//! require a success status first; a non-2xx response becomes
//! [`Error::Http`] without any attempt to decode the body.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use url::Url;

use crate::Error;
use crate::transport::TransportResponse;

/// Turns a buffered HTTP response into a typed result.
pub trait ResponseHandler {
    /// Result type produced on success.
    type Output;

    /// Interprets `response`; `method` and `url` provide error context.
    fn interpret(
        &self,
        method: &Method,
        url: &Url,
        response: TransportResponse,
    ) -> Result<Self::Output, Error>;
}

fn require_success(
    method: &Method,
    url: &Url,
    response: TransportResponse,
) -> Result<TransportResponse, Error> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(Error::http(
            method.clone(),
            url.clone(),
            response.status(),
            response.body_text().into_owned(),
        ))
    }
}

fn invalid_response(method: &Method, url: &Url, detail: impl Into<String>) -> Error {
    Error::InvalidResponse {
        method: method.clone(),
        url: url.clone(),
        detail: detail.into(),
    }
}

/// Decodes a 2xx body as JSON into `T`.
///
/// An empty or literal-`null` body where a value is required is an invalid
/// response, not a success.
#[derive(Debug)]
pub struct JsonHandler<T> {
    _result: PhantomData<fn() -> T>,
}

impl<T> JsonHandler<T> {
    pub(crate) fn new() -> Self {
        Self {
            _result: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> ResponseHandler for JsonHandler<T> {
    type Output = T;

    fn interpret(
        &self,
        method: &Method,
        url: &Url,
        response: TransportResponse,
    ) -> Result<T, Error> {
        let response = require_success(method, url, response)?;
        let body = response.body();

        let text = response.body_text();
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(invalid_response(
                method,
                url,
                "empty body where a value was expected",
            ));
        }

        serde_json::from_slice(body)
            .map_err(|e| invalid_response(method, url, format!("failed to decode JSON body: {e}")))
    }
}

/// Reports the bare status code of a 2xx response.
///
/// Used for operations whose success is binary and whose body carries no
/// information.
#[derive(Debug)]
pub struct StatusHandler;

impl ResponseHandler for StatusHandler {
    type Output = StatusCode;

    fn interpret(
        &self,
        method: &Method,
        url: &Url,
        response: TransportResponse,
    ) -> Result<StatusCode, Error> {
        let response = require_success(method, url, response)?;
        Ok(response.status())
    }
}

/// Returns the raw body of a 2xx response uninterpreted.
#[derive(Debug)]
pub struct TextHandler;

impl ResponseHandler for TextHandler {
    type Output = String;

    fn interpret(
        &self,
        method: &Method,
        url: &Url,
        response: TransportResponse,
    ) -> Result<String, Error> {
        let response = require_success(method, url, response)?;
        match String::from_utf8(response.body().to_vec()) {
            Ok(text) => Ok(text),
            Err(_) => Err(invalid_response(method, url, "body is not valid UTF-8")),
        }
    }
}
