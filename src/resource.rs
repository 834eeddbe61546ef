//! Shared base for concrete REST resources.
//!
//! A resource is an addressable endpoint: its own absolute URL plus the
//! shared command factory. Child resources append path segments to the
//! parent's URL, so the object graph mirrors the API's URL hierarchy without
//! any resource holding a reference to its ancestors.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use url::Url;

use crate::Error;
use crate::command::CommandFactory;
use crate::validation::Validate;

/// Base state and protected helpers for every concrete resource.
///
/// Lifecycle is a two-state machine per handle: `Active` until a delete
/// through this handle succeeds, `Deleted` afterwards. Every helper checks
/// the state first and fails locally — no network call — once deleted. The
/// flag belongs to the in-memory handle, not the URL; a fresh handle for the
/// same address starts `Active`.
pub struct ResourceBase {
    url: Url,
    commands: Arc<CommandFactory>,
    deleted: AtomicBool,
}

impl ResourceBase {
    pub(crate) fn new(url: Url, commands: Arc<CommandFactory>) -> Self {
        Self {
            url,
            commands,
            deleted: AtomicBool::new(false),
        }
    }

    /// Absolute address of this resource.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Builds the base for a child resource by appending path segments.
    ///
    /// Construction is pure; no network activity. The child is a fresh
    /// handle with its own lifecycle state.
    pub(crate) fn child(&self, segments: &[&str]) -> ResourceBase {
        let mut url = self.url.clone();
        // Client configuration guarantees a hierarchical http(s) URL, so
        // segments can always be appended.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        ResourceBase::new(url, Arc::clone(&self.commands))
    }

    fn guard(&self) -> Result<(), Error> {
        if self.deleted.load(Ordering::Acquire) {
            Err(Error::ResourceDeleted {
                url: self.url.clone(),
            })
        } else {
            Ok(())
        }
    }

    fn mark_deleted(&self) {
        self.deleted.store(true, Ordering::Release);
    }

    /// GET this resource as `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self) -> Result<T, Error> {
        self.guard()?;
        self.commands.get(&self.url).execute().await
    }

    /// GET this resource as a JSON list.
    pub(crate) async fn fetch_list<T: DeserializeOwned>(&self) -> Result<Vec<T>, Error> {
        self.fetch().await
    }

    /// GET an explicit URL (for query-parameterized listings rooted here).
    pub(crate) async fn fetch_url<T: DeserializeOwned>(&self, url: &Url) -> Result<T, Error> {
        self.guard()?;
        self.commands.get(url).execute().await
    }

    /// GET this resource's raw body as text.
    pub(crate) async fn fetch_text(
        &self,
        segments: &[&str],
        extra_accept: &'static [&'static str],
    ) -> Result<String, Error> {
        self.guard()?;
        let url = self.child(segments).url;
        self.commands.plain_text(&url, extra_accept).execute().await
    }

    /// POST `body` to this resource.
    pub(crate) async fn create<B, T>(&self, body: B) -> Result<T, Error>
    where
        B: Serialize + Validate,
        T: DeserializeOwned,
    {
        self.guard()?;
        self.commands.post(&self.url, body).execute().await
    }

    /// PUT `body` to this resource.
    pub(crate) async fn update_put<B, T>(&self, body: B) -> Result<T, Error>
    where
        B: Serialize + Validate,
        T: DeserializeOwned,
    {
        self.guard()?;
        self.commands.put(&self.url, body).execute().await
    }

    /// PATCH `body` to this resource.
    pub(crate) async fn update_patch<B, T>(&self, body: B) -> Result<T, Error>
    where
        B: Serialize + Validate,
        T: DeserializeOwned,
    {
        self.guard()?;
        self.commands
            .patch_with_body(&self.url, body)
            .execute()
            .await
    }

    /// Bodiless PATCH to a sub-path of this resource.
    pub(crate) async fn patch_action<T: DeserializeOwned>(
        &self,
        segment: &str,
    ) -> Result<T, Error> {
        self.guard()?;
        let url = self.child(&[segment]).url;
        self.commands.patch(&url).execute().await
    }

    /// POST `body` to a sub-path of this resource.
    pub(crate) async fn post_action<B, T>(&self, segment: &str, body: B) -> Result<T, Error>
    where
        B: Serialize + Validate,
        T: DeserializeOwned,
    {
        self.guard()?;
        let url = self.child(&[segment]).url;
        self.commands.post(&url, body).execute().await
    }

    /// POST `body` to a sub-path where the result is the status code.
    pub(crate) async fn post_action_with_status<B>(
        &self,
        segment: &str,
        body: B,
    ) -> Result<StatusCode, Error>
    where
        B: Serialize + Validate,
    {
        self.guard()?;
        let url = self.child(&[segment]).url;
        self.commands.post_with_status(&url, body).execute().await
    }

    /// DELETE this resource, expecting a JSON result.
    ///
    /// On success the handle transitions to `Deleted` and every later
    /// operation on it fails locally.
    pub(crate) async fn delete<T: DeserializeOwned>(&self) -> Result<T, Error> {
        self.guard()?;
        let result = self.commands.delete(&self.url).execute().await?;
        self.mark_deleted();
        Ok(result)
    }

    /// DELETE this resource where the result is the status code.
    pub(crate) async fn delete_with_status(&self) -> Result<StatusCode, Error> {
        self.guard()?;
        let status = self.commands.delete_with_status(&self.url).execute().await?;
        self.mark_deleted();
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceBase;
    use crate::Error;
    use crate::command::CommandFactory;
    use crate::request::RequestFactory;
    use crate::testing::MockTransport;
    use reqwest::StatusCode;
    use std::sync::Arc;
    use url::Url;

    fn base(transport: Arc<MockTransport>) -> ResourceBase {
        let commands = Arc::new(CommandFactory::new(
            RequestFactory::new("token").expect("valid token"),
            transport,
        ));
        let url = Url::parse("https://api.mailwire.dev/api/accounts/1/projects/2")
            .expect("valid url");
        ResourceBase::new(url, commands)
    }

    #[test]
    fn children_append_segments_to_the_parent_url() {
        let resource = base(Arc::new(MockTransport::new()));
        let child = resource.child(&["inboxes", "9"]);
        assert_eq!(
            child.url().as_str(),
            "https://api.mailwire.dev/api/accounts/1/projects/2/inboxes/9"
        );
    }

    #[tokio::test]
    async fn deleted_handle_fails_locally_with_no_network_call() {
        let transport = Arc::new(
            MockTransport::new().reply(StatusCode::OK, r#"{"id":2}"#),
        );
        let resource = base(Arc::clone(&transport));

        let _: serde_json::Value = resource.delete().await.expect("delete succeeds");
        assert_eq!(transport.calls(), 1);

        let error = resource
            .fetch::<serde_json::Value>()
            .await
            .expect_err("guarded");
        assert!(matches!(error, Error::ResourceDeleted { .. }));

        let error = resource
            .delete::<serde_json::Value>()
            .await
            .expect_err("guarded");
        assert!(matches!(error, Error::ResourceDeleted { .. }));

        // Still exactly one network call: the original delete.
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn failed_delete_leaves_the_handle_active() {
        let transport = Arc::new(
            MockTransport::new()
                .reply(StatusCode::FORBIDDEN, r#"{"error":"no"}"#)
                .reply(StatusCode::OK, r#"{"id":2}"#),
        );
        let resource = base(Arc::clone(&transport));

        let error = resource
            .delete::<serde_json::Value>()
            .await
            .expect_err("forbidden");
        assert!(matches!(error, Error::Http { .. }));

        // The handle never transitioned, so a retry still reaches the wire.
        let _: serde_json::Value = resource.delete().await.expect("second attempt");
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn fresh_handle_for_the_same_url_is_not_deleted() {
        let transport = Arc::new(
            MockTransport::new()
                .reply(StatusCode::OK, r#"{"id":2}"#)
                .reply(StatusCode::OK, r#"{"id":2}"#),
        );
        let resource = base(Arc::clone(&transport));
        let _: serde_json::Value = resource.delete().await.expect("delete succeeds");

        let twin = base(transport);
        let _: serde_json::Value = twin.fetch().await.expect("fresh handle is active");
    }
}
