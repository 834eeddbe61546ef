//! Concrete API resources.
//!
//! Each resource is a thin handle over [`crate::ResourceBase`]: an absolute
//! URL plus the shared command factory. Handles are cheap per-call values;
//! child accessors compose URLs and never touch the network.

mod account;
mod contact;
mod inbox;
mod message;
mod project;
mod sending_domain;

pub use account::{AccountResource, AccountsResource};
pub use contact::{ContactImportsResource, ContactResource, ContactsResource};
pub use inbox::{InboxResource, InboxesResource};
pub use message::{MessageResource, MessagesResource};
pub use project::{ProjectResource, ProjectsResource};
pub use sending_domain::{SendingDomainResource, SendingDomainsResource};
