use url::Url;

use super::message::{MessageResource, MessagesResource};
use crate::Error;
use crate::resource::ResourceBase;
use crate::types::{Envelope, Inbox, UpdateInboxRequest};

/// Inbox collection of an account.
pub struct InboxesResource {
    base: ResourceBase,
}

impl InboxesResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this collection.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Lists inboxes.
    pub async fn list(&self) -> Result<Vec<Inbox>, Error> {
        self.base.fetch_list().await
    }
}

/// One sandbox inbox.
pub struct InboxResource {
    base: ResourceBase,
}

impl InboxResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this inbox.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Fetches the inbox attributes.
    pub async fn get(&self) -> Result<Inbox, Error> {
        self.base.fetch().await
    }

    /// Updates inbox name and/or email username.
    pub async fn update(&self, request: UpdateInboxRequest) -> Result<Inbox, Error> {
        self.base.update_patch(Envelope::new("inbox", request)).await
    }

    /// Deletes every message in the inbox.
    pub async fn clean(&self) -> Result<Inbox, Error> {
        self.base.patch_action("clean").await
    }

    /// Marks every message as read.
    pub async fn mark_read(&self) -> Result<Inbox, Error> {
        self.base.patch_action("all_read").await
    }

    /// Rotates the SMTP credentials.
    pub async fn reset_credentials(&self) -> Result<Inbox, Error> {
        self.base.patch_action("reset_credentials").await
    }

    /// Enables or disables the email address of the inbox.
    pub async fn toggle_email_username(&self) -> Result<Inbox, Error> {
        self.base.patch_action("toggle_email_username").await
    }

    /// Deletes the inbox; this handle refuses further use afterwards.
    pub async fn delete(&self) -> Result<Inbox, Error> {
        self.base.delete().await
    }

    /// Message collection of this inbox.
    pub fn messages(&self) -> MessagesResource {
        MessagesResource::new(self.base.child(&["messages"]))
    }

    /// One message by id.
    pub fn message(&self, message_id: i64) -> MessageResource {
        MessageResource::new(self.base.child(&["messages", &message_id.to_string()]))
    }
}
