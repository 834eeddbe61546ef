//! Wire data shapes.
//!
//! Field names are the API's own, fixed with serde attributes where they
//! differ from Rust naming; optional fields are omitted from request bodies
//! rather than sent as `null`.

mod account;
mod contact;
mod email;
mod enums;
mod envelope;
mod inbox;
mod message;
mod project;
mod sending_domain;

pub use account::{Account, Permission};
pub use contact::{
    CONTACT_IMPORT_LIMIT, Contact, ContactImport, ContactImportRow, CreateContactRequest,
    ImportContactsRequest, UpdateContactRequest,
};
pub use email::{Attachment, EmailAddress, SendEmailRequest, SendEmailResponse};
pub use enums::{
    AccessLevel, ComplianceStatus, ContactImportStatus, ContactStatus, DnsRecordStatus,
    ResourceType,
};
pub(crate) use envelope::Envelope;
pub use inbox::{Inbox, UpdateInboxRequest};
pub use message::{
    EmailMessage, ForwardMessageRequest, ForwardMessageResponse, MessageFilter,
    UpdateMessageRequest,
};
pub use project::{CreateProjectRequest, DeletedProject, Project, ShareLinks, UpdateProjectRequest};
pub use sending_domain::{
    CreateSendingDomainRequest, DnsRecord, SendInstructionsRequest, SendingDomain,
};
