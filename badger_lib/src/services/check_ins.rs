use reqwest::Method;

use super::segment;
use crate::client::Client;
use crate::error::Error;
use crate::types::{
    CheckIn, CheckInBulkRequest, CheckInBulkUpdateResponse, CheckInParams, CheckInRequest,
    ListResponse,
};

/// Scheduled check-ins (heartbeat monitors) of a project.
#[derive(Debug, Clone, Copy)]
pub struct CheckInsService<'a> {
    client: &'a Client,
}

impl<'a> CheckInsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: u64) -> Result<ListResponse<CheckIn>, Error> {
        self.client.get(&collection_path(project_id)).await
    }

    pub async fn get(&self, project_id: u64, check_in_id: &str) -> Result<CheckIn, Error> {
        self.client.get(&member_path(project_id, check_in_id)).await
    }

    pub async fn create(&self, project_id: u64, params: &CheckInParams) -> Result<CheckIn, Error> {
        let body = CheckInRequest { check_in: params };
        self.client
            .send_json(Method::POST, &collection_path(project_id), &body)
            .await
    }

    pub async fn update(
        &self,
        project_id: u64,
        check_in_id: &str,
        params: &CheckInParams,
    ) -> Result<CheckIn, Error> {
        let body = CheckInRequest { check_in: params };
        self.client
            .send_json(Method::PUT, &member_path(project_id, check_in_id), &body)
            .await
    }

    /// Replace the project's whole check-in set in one call.
    ///
    /// Entries matched by slug are updated, new ones created, and every
    /// existing check-in missing from `check_ins` is deleted. An empty slice
    /// therefore deletes all of the project's check-ins.
    pub async fn bulk_update(
        &self,
        project_id: u64,
        check_ins: &[CheckInParams],
    ) -> Result<CheckInBulkUpdateResponse, Error> {
        if check_ins.is_empty() {
            tracing::warn!(
                project_id,
                "bulk check-in update with no entries deletes all check-ins"
            );
        }
        let body = CheckInBulkRequest { check_ins };
        self.client
            .send_json(Method::PUT, &collection_path(project_id), &body)
            .await
    }

    pub async fn delete(&self, project_id: u64, check_in_id: &str) -> Result<(), Error> {
        self.client
            .delete(&member_path(project_id, check_in_id))
            .await
    }
}

fn collection_path(project_id: u64) -> String {
    format!("/projects/{}/check_ins", project_id)
}

fn member_path(project_id: u64, check_in_id: &str) -> String {
    format!("/projects/{}/check_ins/{}", project_id, segment(check_in_id))
}
