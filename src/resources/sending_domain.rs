use reqwest::StatusCode;
use url::Url;

use crate::Error;
use crate::resource::ResourceBase;
use crate::types::{
    CreateSendingDomainRequest, Envelope, SendInstructionsRequest, SendingDomain,
};

/// Sending-domain collection of an account.
pub struct SendingDomainsResource {
    base: ResourceBase,
}

impl SendingDomainsResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this collection.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Lists sending domains with their DNS verification state.
    pub async fn list(&self) -> Result<Vec<SendingDomain>, Error> {
        self.base.fetch_list().await
    }

    /// Registers a domain for production sending.
    pub async fn create(
        &self,
        request: CreateSendingDomainRequest,
    ) -> Result<SendingDomain, Error> {
        self.base
            .create(Envelope::new("sending_domain", request))
            .await
    }
}

/// One sending domain.
pub struct SendingDomainResource {
    base: ResourceBase,
}

impl SendingDomainResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this domain.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Fetches the domain with its DNS records.
    pub async fn get(&self) -> Result<SendingDomain, Error> {
        self.base.fetch().await
    }

    /// Emails the DNS setup instructions to a device or registrar admin.
    /// Success carries no body; the result is the status code.
    pub async fn send_setup_instructions(
        &self,
        request: SendInstructionsRequest,
    ) -> Result<StatusCode, Error> {
        self.base
            .post_action_with_status("send_setup_instructions", request)
            .await
    }

    /// Deletes the domain; the result is the status code, and this handle
    /// refuses further use afterwards.
    pub async fn delete(&self) -> Result<StatusCode, Error> {
        self.base.delete_with_status().await
    }
}
