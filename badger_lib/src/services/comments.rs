use reqwest::Method;

use crate::client::Client;
use crate::error::Error;
use crate::types::{Comment, CommentBody, CommentRequest, ListResponse};

/// Comments on a fault.
#[derive(Debug, Clone, Copy)]
pub struct CommentsService<'a> {
    client: &'a Client,
}

impl<'a> CommentsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        project_id: u64,
        fault_id: u64,
    ) -> Result<ListResponse<Comment>, Error> {
        self.client.get(&collection_path(project_id, fault_id)).await
    }

    pub async fn get(
        &self,
        project_id: u64,
        fault_id: u64,
        comment_id: u64,
    ) -> Result<Comment, Error> {
        self.client
            .get(&member_path(project_id, fault_id, comment_id))
            .await
    }

    pub async fn create(
        &self,
        project_id: u64,
        fault_id: u64,
        body: &str,
    ) -> Result<Comment, Error> {
        let payload = CommentRequest {
            comment: CommentBody { body },
        };
        self.client
            .send_json(Method::POST, &collection_path(project_id, fault_id), &payload)
            .await
    }

    /// Replace a comment's body. The server answers 204 No Content.
    pub async fn update(
        &self,
        project_id: u64,
        fault_id: u64,
        comment_id: u64,
        body: &str,
    ) -> Result<(), Error> {
        let payload = CommentRequest {
            comment: CommentBody { body },
        };
        self.client
            .send_no_content(
                Method::PUT,
                &member_path(project_id, fault_id, comment_id),
                &payload,
            )
            .await
    }

    pub async fn delete(
        &self,
        project_id: u64,
        fault_id: u64,
        comment_id: u64,
    ) -> Result<(), Error> {
        self.client
            .delete(&member_path(project_id, fault_id, comment_id))
            .await
    }
}

fn collection_path(project_id: u64, fault_id: u64) -> String {
    format!("/projects/{}/faults/{}/comments", project_id, fault_id)
}

fn member_path(project_id: u64, fault_id: u64, comment_id: u64) -> String {
    format!(
        "/projects/{}/faults/{}/comments/{}",
        project_id, fault_id, comment_id
    )
}
