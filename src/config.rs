//! Client configuration.

use url::Url;

use crate::Error;

/// Default management API host.
pub const DEFAULT_API_HOST: &str = "https://api.mailwire.dev";
/// Default transactional-send host.
pub const DEFAULT_SEND_HOST: &str = "https://send.mailwire.dev";
/// Default bulk-send host.
pub const DEFAULT_BULK_HOST: &str = "https://bulk.mailwire.dev";
/// Default sandbox/test-send host.
pub const DEFAULT_SANDBOX_HOST: &str = "https://sandbox.mailwire.dev";

/// Credentials and host selection for a [`crate::MailwireClient`].
///
/// Hosts are validated at construction: they must be absolute http(s) URLs,
/// so every address derived from them can carry path segments.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    token: String,
    api_host: Url,
    send_host: Url,
    bulk_host: Url,
    sandbox_host: Url,
    bulk: bool,
    sandbox_inbox_id: Option<i64>,
}

impl ClientConfig {
    /// Creates a configuration for the given API token, with default hosts.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            token: token.into(),
            api_host: parse_host(DEFAULT_API_HOST)?,
            send_host: parse_host(DEFAULT_SEND_HOST)?,
            bulk_host: parse_host(DEFAULT_BULK_HOST)?,
            sandbox_host: parse_host(DEFAULT_SANDBOX_HOST)?,
            bulk: false,
            sandbox_inbox_id: None,
        })
    }

    /// Replaces the management API host.
    pub fn with_api_host(mut self, host: impl AsRef<str>) -> Result<Self, Error> {
        self.api_host = parse_host(host.as_ref())?;
        Ok(self)
    }

    /// Replaces the transactional-send host.
    pub fn with_send_host(mut self, host: impl AsRef<str>) -> Result<Self, Error> {
        self.send_host = parse_host(host.as_ref())?;
        Ok(self)
    }

    /// Replaces the bulk-send host.
    pub fn with_bulk_host(mut self, host: impl AsRef<str>) -> Result<Self, Error> {
        self.bulk_host = parse_host(host.as_ref())?;
        Ok(self)
    }

    /// Replaces the sandbox-send host.
    pub fn with_sandbox_host(mut self, host: impl AsRef<str>) -> Result<Self, Error> {
        self.sandbox_host = parse_host(host.as_ref())?;
        Ok(self)
    }

    /// Routes email sending through the bulk stream.
    #[must_use]
    pub fn with_bulk(mut self, bulk: bool) -> Self {
        self.bulk = bulk;
        self
    }

    /// Routes email sending into a sandbox inbox instead of real delivery.
    #[must_use]
    pub fn with_sandbox_inbox_id(mut self, inbox_id: i64) -> Self {
        self.sandbox_inbox_id = Some(inbox_id);
        self
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn api_host(&self) -> &Url {
        &self.api_host
    }

    pub(crate) fn send_host(&self) -> &Url {
        &self.send_host
    }

    pub(crate) fn bulk_host(&self) -> &Url {
        &self.bulk_host
    }

    pub(crate) fn sandbox_host(&self) -> &Url {
        &self.sandbox_host
    }

    pub(crate) fn bulk(&self) -> bool {
        self.bulk
    }

    pub(crate) fn sandbox_inbox_id(&self) -> Option<i64> {
        self.sandbox_inbox_id
    }
}

fn parse_host(input: &str) -> Result<Url, Error> {
    let url = Url::parse(input).map_err(|_| Error::InvalidBaseUrl(input.to_owned()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl(input.to_owned()));
    }
    Ok(url)
}
