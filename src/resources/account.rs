use url::Url;

use super::contact::{ContactImportsResource, ContactResource, ContactsResource};
use super::inbox::{InboxResource, InboxesResource};
use super::project::{ProjectResource, ProjectsResource};
use super::sending_domain::{SendingDomainResource, SendingDomainsResource};
use crate::Error;
use crate::resource::ResourceBase;
use crate::types::Account;

/// Collection of accounts visible to the API token.
pub struct AccountsResource {
    base: ResourceBase,
}

impl AccountsResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this collection.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Lists accounts.
    pub async fn list(&self) -> Result<Vec<Account>, Error> {
        self.base.fetch_list().await
    }
}

/// One account; every management resource nests under it.
pub struct AccountResource {
    base: ResourceBase,
}

impl AccountResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this account.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Project collection of this account.
    pub fn projects(&self) -> ProjectsResource {
        ProjectsResource::new(self.base.child(&["projects"]))
    }

    /// One project by id.
    pub fn project(&self, project_id: i64) -> ProjectResource {
        ProjectResource::new(self.base.child(&["projects", &project_id.to_string()]))
    }

    /// Inbox collection of this account.
    pub fn inboxes(&self) -> InboxesResource {
        InboxesResource::new(self.base.child(&["inboxes"]))
    }

    /// One inbox by id.
    pub fn inbox(&self, inbox_id: i64) -> InboxResource {
        InboxResource::new(self.base.child(&["inboxes", &inbox_id.to_string()]))
    }

    /// Contact collection of this account.
    pub fn contacts(&self) -> ContactsResource {
        ContactsResource::new(self.base.child(&["contacts"]))
    }

    /// One contact, addressed by id or by email.
    pub fn contact(&self, id_or_email: &str) -> ContactResource {
        ContactResource::new(self.base.child(&["contacts", id_or_email]))
    }

    /// Bulk contact imports of this account.
    pub fn contact_imports(&self) -> ContactImportsResource {
        ContactImportsResource::new(self.base.child(&["contacts", "imports"]))
    }

    /// Sending-domain collection of this account.
    pub fn sending_domains(&self) -> SendingDomainsResource {
        SendingDomainsResource::new(self.base.child(&["sending_domains"]))
    }

    /// One sending domain by id.
    pub fn sending_domain(&self, domain_id: i64) -> SendingDomainResource {
        SendingDomainResource::new(
            self.base.child(&["sending_domains", &domain_id.to_string()]),
        )
    }
}
