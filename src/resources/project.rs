use url::Url;

use crate::Error;
use crate::resource::ResourceBase;
use crate::types::{
    CreateProjectRequest, DeletedProject, Envelope, Project, UpdateProjectRequest,
};

/// Project collection of an account.
pub struct ProjectsResource {
    base: ResourceBase,
}

impl ProjectsResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this collection.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Lists projects with their inboxes.
    pub async fn list(&self) -> Result<Vec<Project>, Error> {
        self.base.fetch_list().await
    }

    /// Creates a project.
    pub async fn create(&self, request: CreateProjectRequest) -> Result<Project, Error> {
        self.base.create(Envelope::new("project", request)).await
    }
}

/// One project.
pub struct ProjectResource {
    base: ResourceBase,
}

impl ProjectResource {
    pub(crate) fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    /// Address of this project.
    pub fn url(&self) -> &Url {
        self.base.url()
    }

    /// Fetches the project.
    pub async fn get(&self) -> Result<Project, Error> {
        self.base.fetch().await
    }

    /// Renames the project.
    pub async fn update(&self, request: UpdateProjectRequest) -> Result<Project, Error> {
        self.base
            .update_patch(Envelope::new("project", request))
            .await
    }

    /// Deletes the project; this handle refuses further use afterwards.
    pub async fn delete(&self) -> Result<DeletedProject, Error> {
        self.base.delete().await
    }
}

#[cfg(test)]
mod tests {
    use crate::MailwireClient;
    use crate::config::ClientConfig;
    use crate::testing::MockTransport;
    use crate::types::CreateProjectRequest;
    use reqwest::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_posts_an_enveloped_body() {
        let transport = Arc::new(
            MockTransport::new().reply(StatusCode::CREATED, r#"{"id":7,"name":"Marketing"}"#),
        );
        let client = MailwireClient::with_transport(
            ClientConfig::new("token").expect("valid config"),
            transport.clone(),
        )
        .expect("valid client");

        let project = client
            .account(5)
            .projects()
            .create(CreateProjectRequest::new("Marketing"))
            .await
            .expect("creates");
        assert_eq!(project.id, 7);

        let sent = transport.last_request();
        assert_eq!(
            sent.url.as_str(),
            "https://api.mailwire.dev/api/accounts/5/projects"
        );
        assert_eq!(
            sent.body.as_deref(),
            Some(br#"{"project":{"name":"Marketing"}}"#.as_slice())
        );
    }
}
