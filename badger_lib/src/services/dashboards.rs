use reqwest::Method;

use super::segment;
use crate::client::Client;
use crate::error::Error;
use crate::types::{
    Dashboard, DashboardEnvelope, DashboardRequest, DeleteResult, ListResponse, UpdateResult,
};

/// Insights dashboards of a project.
#[derive(Debug, Clone, Copy)]
pub struct DashboardsService<'a> {
    client: &'a Client,
}

impl<'a> DashboardsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: u64) -> Result<ListResponse<Dashboard>, Error> {
        self.client.get(&collection_path(project_id)).await
    }

    pub async fn get(&self, project_id: u64, dashboard_id: &str) -> Result<Dashboard, Error> {
        self.client
            .get(&member_path(project_id, dashboard_id))
            .await
    }

    pub async fn create(
        &self,
        project_id: u64,
        dashboard: &DashboardRequest,
    ) -> Result<Dashboard, Error> {
        let body = DashboardEnvelope { dashboard };
        self.client
            .send_json(Method::POST, &collection_path(project_id), &body)
            .await
    }

    /// The server answers 204 No Content; the acknowledgement is built locally.
    pub async fn update(
        &self,
        project_id: u64,
        dashboard_id: &str,
        dashboard: &DashboardRequest,
    ) -> Result<UpdateResult, Error> {
        let body = DashboardEnvelope { dashboard };
        self.client
            .send_no_content(Method::PUT, &member_path(project_id, dashboard_id), &body)
            .await?;
        Ok(UpdateResult {
            success: true,
            message: format!("Dashboard {} was successfully updated", dashboard_id),
        })
    }

    pub async fn delete(&self, project_id: u64, dashboard_id: &str) -> Result<DeleteResult, Error> {
        self.client
            .delete(&member_path(project_id, dashboard_id))
            .await?;
        Ok(DeleteResult {
            success: true,
            message: format!("Dashboard {} deleted successfully", dashboard_id),
        })
    }
}

fn collection_path(project_id: u64) -> String {
    format!("/projects/{}/dashboards", project_id)
}

fn member_path(project_id: u64, dashboard_id: &str) -> String {
    format!(
        "/projects/{}/dashboards/{}",
        project_id,
        segment(dashboard_id)
    )
}
