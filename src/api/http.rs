//! HTTP implementation of the grants API using reqwest

use crate::api::GrantsApi;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::project::NewProject;
use crate::types::{Milestone, NewMilestone, Project, ProjectId};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Grants API client over JSON HTTP
#[derive(Debug, Clone)]
pub struct HttpGrantsApi {
    client: Client,
    config: Config,
}

impl HttpGrantsApi {
    /// Create a client from resolved configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        let mut req = self.client.request(method, url);
        if let Some(ref key) = self.config.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl GrantsApi for HttpGrantsApi {
    async fn get_project(&self, id: ProjectId) -> Result<Project> {
        debug!(project_id = %id, "fetching project");

        let response = self
            .request(Method::GET, &format!("/api/projects/{id}"))
            .send()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))?;

        Self::handle_response(response)
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project> {
        debug!(name = %project.name, "creating project");

        let response = self
            .request(Method::POST, "/api/projects")
            .json(project)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn create_milestone(&self, milestone: &NewMilestone) -> Result<Option<Milestone>> {
        debug!(
            project_id = %milestone.project_id,
            title = %milestone.title,
            "creating milestone"
        );

        let response = self
            .request(Method::POST, "/api/milestones")
            .json(milestone)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Self::handle_response(response).await;
        }

        let body = response.text().await.unwrap_or_default();
        let created = serde_json::from_str::<Milestone>(&body).ok();
        if created.is_none() {
            debug!(status = status.as_u16(), "milestone created, response body not a milestone");
        }
        Ok(created)
    }
}
