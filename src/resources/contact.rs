use url::Url;

use crate::Error;
use crate::resource::ResourceBase;
use crate::types::{
    Contact, ContactImport, CreateContactRequest, Envelope, ImportContactsRequest,
    UpdateContactRequest,
};

/// Contact collection of an account.
pub struct ContactsResource {
    base: ResourceBase,
}

impl ContactsResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this collection.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Creates a contact.
    pub async fn create(&self, request: CreateContactRequest) -> Result<Contact, Error> {
        self.base.create(Envelope::new("contact", request)).await
    }
}

/// One contact, addressed by id or email.
pub struct ContactResource {
    base: ResourceBase,
}

impl ContactResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this contact.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Fetches the contact.
    pub async fn get(&self) -> Result<Contact, Error> {
        self.base.fetch().await
    }

    /// Replaces contact attributes and list memberships.
    pub async fn update(&self, request: UpdateContactRequest) -> Result<Contact, Error> {
        self.base.update_put(Envelope::new("contact", request)).await
    }

    /// Deletes the contact; this handle refuses further use afterwards.
    pub async fn delete(&self) -> Result<Contact, Error> {
        self.base.delete().await
    }
}

/// Bulk imports of an account's contacts.
pub struct ContactImportsResource {
    base: ResourceBase,
}

impl ContactImportsResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this collection.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Starts a bulk import. Rows beyond the per-import cap are rejected
    /// locally; rows the server skips show up in the import counters, not
    /// as an error.
    pub async fn import(&self, request: ImportContactsRequest) -> Result<ContactImport, Error> {
        self.base.create(request).await
    }

    /// Fetches the state and counters of one import.
    pub async fn status(&self, import_id: i64) -> Result<ContactImport, Error> {
        self.base.child(&[&import_id.to_string()]).fetch().await
    }
}
