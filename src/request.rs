//! Outgoing request construction.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Method, Request};
use url::Url;

use crate::Error;

/// Product identifier sent as `User-Agent` on every request.
pub(crate) const PRODUCT_USER_AGENT: &str = concat!("mailwire-rust/", env!("CARGO_PKG_VERSION"));

const BASE_ACCEPT: &str = "application/json";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds ready-to-send requests with the fixed header set: negotiated
/// `Accept`, bearer `Authorization`, and the product `User-Agent`.
///
/// Credential headers are validated once at construction, before any network
/// activity.
#[derive(Clone, Debug)]
pub struct RequestFactory {
    authorization: HeaderValue,
    user_agent: HeaderValue,
}

impl RequestFactory {
    /// Creates a factory for the given API token.
    pub fn new(token: &str) -> Result<Self, Error> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::InvalidHeader {
                name: "Authorization",
            })?;
        authorization.set_sensitive(true);

        Ok(Self {
            authorization,
            user_agent: HeaderValue::from_static(PRODUCT_USER_AGENT),
        })
    }

    /// Builds a request carrying the standard headers and an optional
    /// JSON-serialized body.
    ///
    /// `extra_accept` extends the `Accept` header beyond `application/json`
    /// for endpoints that respond with other media types.
    pub fn build(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        extra_accept: &[&str],
    ) -> Result<Request, Error> {
        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, accept_value(extra_accept)?);
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(USER_AGENT, self.user_agent.clone());

        if let Some(payload) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            *request.body_mut() = Some(payload.into());
        }

        Ok(request)
    }
}

fn accept_value(extra: &[&str]) -> Result<HeaderValue, Error> {
    if extra.is_empty() {
        return Ok(HeaderValue::from_static(BASE_ACCEPT));
    }

    let mut accept = String::from(BASE_ACCEPT);
    for media_type in extra {
        accept.push_str(", ");
        accept.push_str(media_type);
    }
    HeaderValue::from_str(&accept).map_err(|_| Error::InvalidHeader { name: "Accept" })
}

#[cfg(test)]
mod tests {
    use super::RequestFactory;
    use reqwest::Method;
    use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
    use url::Url;

    fn factory() -> RequestFactory {
        RequestFactory::new("token-123").expect("valid token")
    }

    fn url() -> Url {
        Url::parse("https://api.mailwire.dev/api/accounts").expect("valid url")
    }

    #[test]
    fn sets_the_standard_header_set() {
        let request = factory()
            .build(Method::GET, url(), None, &[])
            .expect("builds");

        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer token-123");
        let user_agent = request.headers()[USER_AGENT].to_str().expect("ascii");
        assert!(user_agent.starts_with("mailwire-rust/"));
        assert!(request.body().is_none());
    }

    #[test]
    fn attaches_json_body_with_content_type() {
        let request = factory()
            .build(
                Method::POST,
                url(),
                Some(br#"{"name":"x"}"#.to_vec()),
                &[],
            )
            .expect("builds");

        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        let body = request.body().and_then(reqwest::Body::as_bytes).expect("buffered body");
        assert_eq!(body, br#"{"name":"x"}"#);
    }

    #[test]
    fn extends_accept_with_extra_media_types() {
        let request = factory()
            .build(Method::GET, url(), None, &["message/rfc822"])
            .expect("builds");

        assert_eq!(
            request.headers()[ACCEPT],
            "application/json, message/rfc822"
        );
    }

    #[test]
    fn rejects_a_token_that_cannot_be_a_header() {
        assert!(RequestFactory::new("bad\ntoken").is_err());
    }
}
