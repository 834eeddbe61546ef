//! Wire vocabularies used across resource payloads.

use crate::wire_enum;

wire_enum! {
    /// Access granted to an account member on a resource.
    pub enum AccessLevel {
        Owner => "owner",
        Admin => "admin",
        ViewerPlus => "viewer+",
        Viewer => "viewer",
        Indeterminate => "indeterminate",
    }
}

wire_enum! {
    /// Kind of resource a permission applies to.
    pub enum ResourceType {
        Account => "account",
        Billing => "billing",
        Project => "project",
        Inbox => "inbox",
        SendingDomain => "mailsend_domain",
    }
}

wire_enum! {
    /// Verification state of one DNS record of a sending domain.
    pub enum DnsRecordStatus {
        Pass => "pass",
        Fail => "fail",
        Missing => "missing",
    }
}

wire_enum! {
    /// Review state of a sending domain.
    pub enum ComplianceStatus {
        Compliant => "compliant",
        PendingReview => "pending_review",
        NonCompliant => "non_compliant",
    }
}

wire_enum! {
    /// Progress of a bulk contact import.
    pub enum ContactImportStatus {
        Created => "created",
        Started => "started",
        Finished => "finished",
        Failed => "failed",
    }
}

wire_enum! {
    /// Subscription state of a contact.
    pub enum ContactStatus {
        Subscribed => "subscribed",
        Unsubscribed => "unsubscribed",
    }
}
