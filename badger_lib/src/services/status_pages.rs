use reqwest::Method;

use super::segment;
use crate::client::Client;
use crate::error::Error;
use crate::types::{ListResponse, StatusPage, StatusPageParams, StatusPageRequest};

/// Status pages belong to an account, not a project.
#[derive(Debug, Clone, Copy)]
pub struct StatusPagesService<'a> {
    client: &'a Client,
}

impl<'a> StatusPagesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, account_id: &str) -> Result<ListResponse<StatusPage>, Error> {
        self.client.get(&collection_path(account_id)).await
    }

    pub async fn get(&self, account_id: &str, status_page_id: &str) -> Result<StatusPage, Error> {
        self.client
            .get(&member_path(account_id, status_page_id))
            .await
    }

    pub async fn create(
        &self,
        account_id: &str,
        params: &StatusPageParams,
    ) -> Result<StatusPage, Error> {
        let body = StatusPageRequest {
            status_page: params,
        };
        self.client
            .send_json(Method::POST, &collection_path(account_id), &body)
            .await
    }

    /// The endpoint takes POST (not PUT) on the member URL and answers 204.
    pub async fn update(
        &self,
        account_id: &str,
        status_page_id: &str,
        params: &StatusPageParams,
    ) -> Result<(), Error> {
        let body = StatusPageRequest {
            status_page: params,
        };
        self.client
            .send_no_content(
                Method::POST,
                &member_path(account_id, status_page_id),
                &body,
            )
            .await
    }

    pub async fn delete(&self, account_id: &str, status_page_id: &str) -> Result<(), Error> {
        self.client
            .delete(&member_path(account_id, status_page_id))
            .await
    }
}

fn collection_path(account_id: &str) -> String {
    format!("/accounts/{}/status_pages", segment(account_id))
}

fn member_path(account_id: &str, status_page_id: &str) -> String {
    format!(
        "/accounts/{}/status_pages/{}",
        segment(account_id),
        segment(status_page_id)
    )
}
