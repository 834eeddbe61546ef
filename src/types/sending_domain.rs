use serde::{Deserialize, Serialize};

use super::enums::{ComplianceStatus, DnsRecordStatus};
use crate::validation::{Validate, ValidationResult, require_email, require_length};

/// Domain verified for production sending.
#[derive(Debug, Clone, Deserialize)]
pub struct SendingDomain {
    pub id: i64,
    pub domain_name: String,
    #[serde(default)]
    pub demo: Option<bool>,
    #[serde(default)]
    pub compliance_status: Option<ComplianceStatus>,
    #[serde(default)]
    pub dns_records: Vec<DnsRecord>,
}

/// One DNS record the domain owner must publish.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    pub status: DnsRecordStatus,
}

/// Body of domain creation; sent on the wire as `{"sending_domain": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSendingDomainRequest {
    pub domain_name: String,
}

impl CreateSendingDomainRequest {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
        }
    }
}

impl Validate for CreateSendingDomainRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        require_length(&mut result, "domain_name", &self.domain_name, 255);
        result
    }
}

/// Body of a setup-instructions mailing.
#[derive(Debug, Clone, Serialize)]
pub struct SendInstructionsRequest {
    pub email: String,
}

impl SendInstructionsRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Validate for SendInstructionsRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        require_email(&mut result, "email", &self.email);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::SendingDomain;
    use crate::types::enums::DnsRecordStatus;

    #[test]
    fn decodes_dns_records_with_the_wire_type_key() {
        let domain: SendingDomain = serde_json::from_str(
            r#"{
                "id": 3,
                "domain_name": "mail.example.com",
                "compliance_status": "compliant",
                "dns_records": [
                    {"type": "CNAME", "domain": "rwmt1._domainkey", "value": "dkim.mailwire.dev", "status": "pass"},
                    {"type": "TXT", "status": "missing"}
                ]
            }"#,
        )
        .expect("decodes");

        assert_eq!(domain.dns_records.len(), 2);
        assert_eq!(domain.dns_records[0].record_type, "CNAME");
        assert_eq!(domain.dns_records[1].status, DnsRecordStatus::Missing);
    }
}
