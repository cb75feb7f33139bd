use reqwest::Method;

use crate::client::Client;
use crate::error::Error;
use crate::types::{Environment, EnvironmentParams, EnvironmentRequest, ListResponse};

#[derive(Debug, Clone, Copy)]
pub struct EnvironmentsService<'a> {
    client: &'a Client,
}

impl<'a> EnvironmentsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: u64) -> Result<ListResponse<Environment>, Error> {
        self.client.get(&collection_path(project_id)).await
    }

    pub async fn get(&self, project_id: u64, environment_id: u64) -> Result<Environment, Error> {
        self.client
            .get(&member_path(project_id, environment_id))
            .await
    }

    pub async fn create(
        &self,
        project_id: u64,
        params: &EnvironmentParams,
    ) -> Result<Environment, Error> {
        let body = EnvironmentRequest {
            environment: params,
        };
        self.client
            .send_json(Method::POST, &collection_path(project_id), &body)
            .await
    }

    /// The server answers 204 No Content.
    pub async fn update(
        &self,
        project_id: u64,
        environment_id: u64,
        params: &EnvironmentParams,
    ) -> Result<(), Error> {
        let body = EnvironmentRequest {
            environment: params,
        };
        self.client
            .send_no_content(Method::PUT, &member_path(project_id, environment_id), &body)
            .await
    }

    pub async fn delete(&self, project_id: u64, environment_id: u64) -> Result<(), Error> {
        self.client
            .delete(&member_path(project_id, environment_id))
            .await
    }
}

fn collection_path(project_id: u64) -> String {
    format!("/projects/{}/environments", project_id)
}

fn member_path(project_id: u64, environment_id: u64) -> String {
    format!("/projects/{}/environments/{}", project_id, environment_id)
}
