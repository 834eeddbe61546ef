//! Root client entry point.

use std::sync::Arc;
use url::Url;

use crate::Error;
use crate::command::CommandFactory;
use crate::config::ClientConfig;
use crate::request::RequestFactory;
use crate::resource::ResourceBase;
use crate::resources::{AccountResource, AccountsResource};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{SendEmailRequest, SendEmailResponse};
use crate::urls;

/// Client for the Mailwire HTTP API.
///
/// Holds the shared command factory; resource handles obtained from it are
/// cheap per-call values that build their addresses by path composition.
pub struct MailwireClient {
    config: ClientConfig,
    commands: Arc<CommandFactory>,
}

impl MailwireClient {
    /// Creates a client backed by a default `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client over a custom transport.
    ///
    /// This is the seam for tests and alternative HTTP backends.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, Error> {
        let requests = RequestFactory::new(config.token())?;
        let commands = Arc::new(CommandFactory::new(requests, transport));
        Ok(Self { config, commands })
    }

    /// Accounts visible to the configured token.
    pub fn accounts(&self) -> AccountsResource {
        AccountsResource::new(self.management_resource(&["api", "accounts"]))
    }

    /// One account node; every management resource nests under it.
    pub fn account(&self, account_id: i64) -> AccountResource {
        AccountResource::new(
            self.management_resource(&["api", "accounts", &account_id.to_string()]),
        )
    }

    /// Sends an email through the host selected by configuration:
    /// transactional by default, bulk when the bulk flag is set, sandbox
    /// when a sandbox inbox id is configured.
    pub async fn send(&self, request: SendEmailRequest) -> Result<SendEmailResponse, Error> {
        let url = self.send_url()?;
        self.commands.post(&url, request).execute().await
    }

    fn management_resource(&self, segments: &[&str]) -> ResourceBase {
        ResourceBase::new(self.config.api_host().clone(), Arc::clone(&self.commands))
            .child(segments)
    }

    fn send_url(&self) -> Result<Url, Error> {
        match (self.config.bulk(), self.config.sandbox_inbox_id()) {
            (true, Some(_)) => Err(Error::Validation {
                errors: vec!["bulk sending cannot be combined with a sandbox inbox".to_owned()],
            }),
            (false, Some(inbox_id)) => urls::append_segments(
                self.config.sandbox_host(),
                &["api", "send", &inbox_id.to_string()],
            ),
            (true, None) => urls::append_segments(self.config.bulk_host(), &["api", "send"]),
            (false, None) => urls::append_segments(self.config.send_host(), &["api", "send"]),
        }
    }
}
