use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::validation::{Validate, ValidationResult, limit_length, require, require_email};

/// Address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// File attached to an outgoing email; `content` is base64.
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub content: String,
    pub filename: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl Attachment {
    pub fn new(content: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            mime_type: None,
            disposition: None,
            content_id: None,
        }
    }
}

/// Outgoing email.
///
/// Either inline content (`subject` plus `text` and/or `html`) or a stored
/// template (`template_uuid` with `template_variables`) — the two forms are
/// mutually exclusive on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest {
    pub from: EmailAddress,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_variables: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_variables: Option<serde_json::Value>,
}

impl SendEmailRequest {
    pub fn new(from: EmailAddress) -> Self {
        Self {
            from,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: None,
            text: None,
            html: None,
            category: None,
            attachments: Vec::new(),
            headers: HashMap::new(),
            custom_variables: HashMap::new(),
            template_uuid: None,
            template_variables: None,
        }
    }

    /// Adds a `To` recipient.
    #[must_use]
    pub fn to(mut self, address: EmailAddress) -> Self {
        self.to.push(address);
        self
    }

    /// Adds a `Cc` recipient.
    #[must_use]
    pub fn cc(mut self, address: EmailAddress) -> Self {
        self.cc.push(address);
        self
    }

    /// Adds a `Bcc` recipient.
    #[must_use]
    pub fn bcc(mut self, address: EmailAddress) -> Self {
        self.bcc.push(address);
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn custom_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_variables.insert(name.into(), value.into());
        self
    }

    /// Uses a stored template instead of inline content.
    #[must_use]
    pub fn template(mut self, uuid: impl Into<String>, variables: serde_json::Value) -> Self {
        self.template_uuid = Some(uuid.into());
        self.template_variables = Some(variables);
        self
    }
}

impl Validate for SendEmailRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();

        require_email(&mut result, "from.email", &self.from.email);

        if self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty() {
            result.push("at least one recipient is required in 'to', 'cc', or 'bcc'");
        }

        // Recipient checks cascade across the three lists.
        'recipients: for (label, list) in
            [("to", &self.to), ("cc", &self.cc), ("bcc", &self.bcc)]
        {
            for (index, address) in list.iter().enumerate() {
                let mut nested = ValidationResult::ok();
                require_email(&mut nested, "email", &address.email);
                if !nested.is_valid() {
                    for message in nested.errors() {
                        result.push(format!("{label}[{index}]: {message}"));
                    }
                    break 'recipients;
                }
            }
        }

        if self.template_uuid.is_none() {
            if self.subject.as_deref().unwrap_or_default().is_empty() {
                result.push("'subject' is required when no template is used");
            }
            if self.text.is_none() && self.html.is_none() {
                result.push("at least one of 'text' and 'html' is required when no template is used");
            }
        } else if self.subject.is_some() || self.text.is_some() || self.html.is_some() {
            result.push("'subject', 'text', and 'html' cannot be combined with 'template_uuid'");
        }

        limit_length(&mut result, "category", self.category.as_deref(), 255);

        'attachments: for (index, attachment) in self.attachments.iter().enumerate() {
            let mut nested = ValidationResult::ok();
            require(&mut nested, "content", &attachment.content);
            require(&mut nested, "filename", &attachment.filename);
            if !nested.is_valid() {
                for message in nested.errors() {
                    result.push(format!("attachments[{index}]: {message}"));
                }
                break 'attachments;
            }
        }

        result
    }
}

/// Acknowledgement of an accepted send.
#[derive(Debug, Clone, Deserialize)]
pub struct SendEmailResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{EmailAddress, SendEmailRequest};
    use crate::validation::Validate;

    fn valid() -> SendEmailRequest {
        SendEmailRequest::new(EmailAddress::new("sender@example.com"))
            .to(EmailAddress::new("rcpt@example.com"))
            .subject("Welcome")
            .text("Hello!")
    }

    #[test]
    fn a_complete_request_validates() {
        assert!(valid().validate().is_valid());
    }

    #[test]
    fn two_independent_failures_yield_two_errors() {
        let request = SendEmailRequest::new(EmailAddress::new(""))
            .to(EmailAddress::new("rcpt@example.com"))
            .text("Hello!");
        let result = request.validate();
        assert!(!result.is_valid());
        // Missing sender and missing subject are independent rules.
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn requires_at_least_one_recipient() {
        let request = SendEmailRequest::new(EmailAddress::new("sender@example.com"))
            .subject("Welcome")
            .text("Hello!");
        let result = request.validate();
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("at least one recipient"));
    }

    #[test]
    fn a_template_replaces_inline_content() {
        let request = SendEmailRequest::new(EmailAddress::new("sender@example.com"))
            .to(EmailAddress::new("rcpt@example.com"))
            .template("9c2e-uuid", serde_json::json!({"user_name": "Jo"}));
        assert!(request.validate().is_valid());

        let conflicting = valid().template("9c2e-uuid", serde_json::json!({}));
        assert!(!conflicting.validate().is_valid());
    }

    #[test]
    fn serializes_with_wire_field_names_and_omits_absent_fields() {
        let request = SendEmailRequest::new(EmailAddress::with_name(
            "sender@example.com",
            "Sender",
        ))
        .to(EmailAddress::new("rcpt@example.com"))
        .subject("Welcome")
        .text("Hello!");

        let encoded = serde_json::to_value(&request).expect("encodes");
        assert_eq!(encoded["from"]["email"], "sender@example.com");
        assert_eq!(encoded["from"]["name"], "Sender");
        assert_eq!(encoded["to"][0]["email"], "rcpt@example.com");
        let object = encoded.as_object().expect("object");
        assert!(!object.contains_key("cc"));
        assert!(!object.contains_key("html"));
        assert!(!object.contains_key("template_uuid"));
    }

    #[test]
    fn recipient_errors_cascade_to_the_first_failure() {
        let request = SendEmailRequest::new(EmailAddress::new("sender@example.com"))
            .to(EmailAddress::new("broken"))
            .cc(EmailAddress::new("also-broken"))
            .subject("Welcome")
            .text("Hello!");
        let result = request.validate();
        let recipient_errors: Vec<_> = result
            .errors()
            .iter()
            .filter(|message| message.starts_with("to[") || message.starts_with("cc["))
            .collect();
        assert_eq!(recipient_errors.len(), 1);
    }
}
