use url::Url;

use crate::Error;
use crate::resource::ResourceBase;
use crate::types::{
    EmailMessage, Envelope, ForwardMessageRequest, ForwardMessageResponse, MessageFilter,
    UpdateMessageRequest,
};
use crate::urls;

const RFC822_ACCEPT: &[&str] = &["message/rfc822"];

/// Message collection of an inbox.
pub struct MessagesResource {
    base: ResourceBase,
}

impl MessagesResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this collection.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Lists messages, newest first, narrowed by `filter`.
    pub async fn list(&self, filter: &MessageFilter) -> Result<Vec<EmailMessage>, Error> {
        let mut url = self.base.url().clone();
        if let Some(search) = &filter.search {
            url = urls::set_query_parameter(&url, "search", search);
        }
        if let Some(page) = filter.page {
            url = urls::set_query_parameter(&url, "page", &page.to_string());
        }
        if let Some(last_id) = filter.last_id {
            url = urls::set_query_parameter(&url, "last_id", &last_id.to_string());
        }
        self.base.fetch_url(&url).await
    }
}

/// One captured message.
pub struct MessageResource {
    base: ResourceBase,
}

impl MessageResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this message.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Fetches the message attributes.
    pub async fn get(&self) -> Result<EmailMessage, Error> {
        self.base.fetch().await
    }

    /// Sets the read flag.
    pub async fn update(&self, request: UpdateMessageRequest) -> Result<EmailMessage, Error> {
        self.base
            .update_patch(Envelope::new("message", request))
            .await
    }

    /// Downloads the raw message in RFC 822 form.
    pub async fn raw(&self) -> Result<String, Error> {
        self.base.fetch_text(&["body.eml"], RFC822_ACCEPT).await
    }

    /// Forwards the message to another address.
    pub async fn forward(
        &self,
        request: ForwardMessageRequest,
    ) -> Result<ForwardMessageResponse, Error> {
        self.base.post_action("forward", request).await
    }

    /// Deletes the message; this handle refuses further use afterwards.
    pub async fn delete(&self) -> Result<EmailMessage, Error> {
        self.base.delete().await
    }
}

#[cfg(test)]
mod tests {
    use crate::MailwireClient;
    use crate::config::ClientConfig;
    use crate::testing::MockTransport;
    use crate::types::MessageFilter;
    use reqwest::StatusCode;
    use reqwest::header::ACCEPT;
    use std::sync::Arc;

    fn client(transport: Arc<MockTransport>) -> MailwireClient {
        MailwireClient::with_transport(
            ClientConfig::new("token").expect("valid config"),
            transport,
        )
        .expect("valid client")
    }

    #[tokio::test]
    async fn list_accumulates_distinct_query_parameters() {
        let transport = Arc::new(MockTransport::new().reply(StatusCode::OK, "[]"));
        let client = client(Arc::clone(&transport));

        let filter = MessageFilter {
            search: Some("billing".to_owned()),
            page: Some(2),
            last_id: None,
        };
        client
            .account(5)
            .inbox(9)
            .messages()
            .list(&filter)
            .await
            .expect("lists");

        assert_eq!(
            transport.last_request().url.as_str(),
            "https://api.mailwire.dev/api/accounts/5/inboxes/9/messages?search=billing&page=2"
        );
    }

    #[tokio::test]
    async fn raw_export_extends_accept_and_returns_the_body_verbatim() {
        let eml = "From: a@b.c\r\nSubject: hi\r\n\r\nbody";
        let transport = Arc::new(MockTransport::new().reply(StatusCode::OK, eml));
        let client = client(Arc::clone(&transport));

        let raw = client
            .account(5)
            .inbox(9)
            .message(14)
            .raw()
            .await
            .expect("downloads");
        assert_eq!(raw, eml);

        let sent = transport.last_request();
        assert_eq!(
            sent.url.as_str(),
            "https://api.mailwire.dev/api/accounts/5/inboxes/9/messages/14/body.eml"
        );
        assert_eq!(
            sent.headers[ACCEPT],
            "application/json, message/rfc822"
        );
    }
}
