use crate::client::Client;
use crate::error::Error;
use crate::query::{DeploymentListOptions, ListOptions};
use crate::types::{Deployment, ListResponse};

/// Recorded deploys of a project.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentsService<'a> {
    client: &'a Client,
}

impl<'a> DeploymentsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// One page of deploys matching `options`, newest first.
    pub async fn list(
        &self,
        project_id: u64,
        options: &DeploymentListOptions,
    ) -> Result<ListResponse<Deployment>, Error> {
        let path = options.apply_to(&format!("/projects/{}/deploys", project_id));
        self.client.get(&path).await
    }

    pub async fn get(&self, project_id: u64, deployment_id: u64) -> Result<Deployment, Error> {
        self.client
            .get(&member_path(project_id, deployment_id))
            .await
    }

    pub async fn delete(&self, project_id: u64, deployment_id: u64) -> Result<(), Error> {
        self.client
            .delete(&member_path(project_id, deployment_id))
            .await
    }
}

fn member_path(project_id: u64, deployment_id: u64) -> String {
    format!("/projects/{}/deploys/{}", project_id, deployment_id)
}
