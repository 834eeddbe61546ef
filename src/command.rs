//! REST resource commands.
//!
//! A [`Command`] is one fully specified HTTP interaction: method, URL,
//! optional body, and a response-interpretation strategy. Executing it runs
//! the whole pipeline — validate, serialize, build, send, interpret — with a
//! single suspension point at the transport call.

use futures::future::{AbortRegistration, Abortable};
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::Error;
use crate::request::RequestFactory;
use crate::response::{JsonHandler, ResponseHandler, StatusHandler, TextHandler};
use crate::transport::Transport;
use crate::validation::Validate;

const NO_EXTRA_ACCEPT: &[&str] = &[];

/// One not-yet-executed HTTP interaction.
///
/// Commands are built by [`CommandFactory`] immediately before use and are
/// consumed by execution, so each runs at most once.
pub struct Command<B, H> {
    method: Method,
    url: Url,
    body: Option<B>,
    extra_accept: &'static [&'static str],
    handler: H,
    requests: RequestFactory,
    transport: Arc<dyn Transport>,
}

impl<B, H> Command<B, H>
where
    B: Serialize + Validate,
    H: ResponseHandler,
{
    /// Runs the command to completion.
    ///
    /// Dropping the returned future cancels the request at the network wait,
    /// the pipeline's only suspension point.
    pub async fn execute(self) -> Result<H::Output, Error> {
        self.dispatch(None).await
    }

    /// Runs the command, honoring an external abort signal.
    ///
    /// An abort observed while waiting on the network surfaces as
    /// [`Error::Canceled`], distinct from HTTP and decoding failures.
    pub async fn execute_abortable(
        self,
        registration: AbortRegistration,
    ) -> Result<H::Output, Error> {
        self.dispatch(Some(registration)).await
    }

    async fn dispatch(self, abort: Option<AbortRegistration>) -> Result<H::Output, Error> {
        let Self {
            method,
            url,
            body,
            extra_accept,
            handler,
            requests,
            transport,
        } = self;

        if let Some(body) = &body {
            body.validate().ensure_valid()?;
        }

        let payload = body.map(|b| serde_json::to_vec(&b)).transpose()?;
        let request = requests.build(method.clone(), url.clone(), payload, extra_accept)?;

        debug!(%method, %url, "executing command");
        let response = match abort {
            None => transport.send(request).await?,
            Some(registration) => {
                match Abortable::new(transport.send(request), registration).await {
                    Ok(sent) => sent?,
                    Err(_aborted) => return Err(Error::Canceled),
                }
            }
        };

        if !response.status().is_success() {
            warn!(%method, %url, status = %response.status(), "command failed");
        }
        handler.interpret(&method, &url, response)
    }
}

/// Builds commands for every verb, body, and response-strategy combination
/// the resource layer needs.
///
/// One factory is shared by every resource handle of a client; it holds
/// configuration only and is safe for concurrent use.
#[derive(Clone)]
pub struct CommandFactory {
    requests: RequestFactory,
    transport: Arc<dyn Transport>,
}

impl CommandFactory {
    /// Creates a factory over a request factory and transport.
    pub fn new(requests: RequestFactory, transport: Arc<dyn Transport>) -> Self {
        Self {
            requests,
            transport,
        }
    }

    fn command<B, H>(
        &self,
        method: Method,
        url: &Url,
        body: Option<B>,
        extra_accept: &'static [&'static str],
        handler: H,
    ) -> Command<B, H> {
        Command {
            method,
            url: url.clone(),
            body,
            extra_accept,
            handler,
            requests: self.requests.clone(),
            transport: Arc::clone(&self.transport),
        }
    }

    /// GET expecting a JSON result.
    pub fn get<T>(&self, url: &Url) -> Command<(), JsonHandler<T>> {
        self.command(Method::GET, url, None, NO_EXTRA_ACCEPT, JsonHandler::new())
    }

    /// POST with a JSON body, expecting a JSON result.
    pub fn post<B, T>(&self, url: &Url, body: B) -> Command<B, JsonHandler<T>> {
        self.command(
            Method::POST,
            url,
            Some(body),
            NO_EXTRA_ACCEPT,
            JsonHandler::new(),
        )
    }

    /// PUT with a JSON body, expecting a JSON result.
    pub fn put<B, T>(&self, url: &Url, body: B) -> Command<B, JsonHandler<T>> {
        self.command(
            Method::PUT,
            url,
            Some(body),
            NO_EXTRA_ACCEPT,
            JsonHandler::new(),
        )
    }

    /// Bodiless PATCH, expecting a JSON result.
    pub fn patch<T>(&self, url: &Url) -> Command<(), JsonHandler<T>> {
        self.command(
            Method::PATCH,
            url,
            None,
            NO_EXTRA_ACCEPT,
            JsonHandler::new(),
        )
    }

    /// PATCH with a JSON body, expecting a JSON result.
    pub fn patch_with_body<B, T>(&self, url: &Url, body: B) -> Command<B, JsonHandler<T>> {
        self.command(
            Method::PATCH,
            url,
            Some(body),
            NO_EXTRA_ACCEPT,
            JsonHandler::new(),
        )
    }

    /// DELETE expecting a JSON result.
    pub fn delete<T>(&self, url: &Url) -> Command<(), JsonHandler<T>> {
        self.command(
            Method::DELETE,
            url,
            None,
            NO_EXTRA_ACCEPT,
            JsonHandler::new(),
        )
    }

    /// POST with a JSON body where the result is the status code itself.
    pub fn post_with_status<B>(&self, url: &Url, body: B) -> Command<B, StatusHandler> {
        self.command(Method::POST, url, Some(body), NO_EXTRA_ACCEPT, StatusHandler)
    }

    /// DELETE where the result is the status code itself.
    pub fn delete_with_status(&self, url: &Url) -> Command<(), StatusHandler> {
        self.command(Method::DELETE, url, None, NO_EXTRA_ACCEPT, StatusHandler)
    }

    /// GET returning the raw body as text.
    ///
    /// `extra_accept` extends the `Accept` header for endpoints serving
    /// non-JSON media types.
    pub fn plain_text(
        &self,
        url: &Url,
        extra_accept: &'static [&'static str],
    ) -> Command<(), TextHandler> {
        self.command(Method::GET, url, None, extra_accept, TextHandler)
    }
}
