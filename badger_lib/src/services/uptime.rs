use reqwest::Method;

use super::segment;
use crate::client::Client;
use crate::error::Error;
use crate::query::{ListOptions, OutageListOptions, UptimeCheckListOptions};
use crate::types::{Outage, Site, SiteParams, SiteRequest, UptimeCheck};

/// Uptime-monitored sites with their outage and check history.
///
/// These endpoints answer with bare JSON arrays rather than the
/// `{"results": [...]}` envelope, so lists come back as plain `Vec`s.
#[derive(Debug, Clone, Copy)]
pub struct UptimeService<'a> {
    client: &'a Client,
}

impl<'a> UptimeService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, project_id: u64) -> Result<Vec<Site>, Error> {
        self.client.get(&collection_path(project_id)).await
    }

    pub async fn get(&self, project_id: u64, site_id: &str) -> Result<Site, Error> {
        self.client.get(&site_path(project_id, site_id)).await
    }

    pub async fn create(&self, project_id: u64, params: &SiteParams) -> Result<Site, Error> {
        let body = SiteRequest { site: params };
        self.client
            .send_json(Method::POST, &collection_path(project_id), &body)
            .await
    }

    pub async fn update(
        &self,
        project_id: u64,
        site_id: &str,
        params: &SiteParams,
    ) -> Result<Site, Error> {
        let body = SiteRequest { site: params };
        self.client
            .send_json(Method::PUT, &site_path(project_id, site_id), &body)
            .await
    }

    pub async fn delete(&self, project_id: u64, site_id: &str) -> Result<(), Error> {
        self.client.delete(&site_path(project_id, site_id)).await
    }

    pub async fn list_outages(
        &self,
        project_id: u64,
        site_id: &str,
        options: &OutageListOptions,
    ) -> Result<Vec<Outage>, Error> {
        let path = options.apply_to(&format!("{}/outages", site_path(project_id, site_id)));
        self.client.get(&path).await
    }

    pub async fn list_uptime_checks(
        &self,
        project_id: u64,
        site_id: &str,
        options: &UptimeCheckListOptions,
    ) -> Result<Vec<UptimeCheck>, Error> {
        let path = options.apply_to(&format!(
            "{}/uptime_checks",
            site_path(project_id, site_id)
        ));
        self.client.get(&path).await
    }
}

fn collection_path(project_id: u64) -> String {
    format!("/projects/{}/sites", project_id)
}

fn site_path(project_id: u64, site_id: &str) -> String {
    format!("/projects/{}/sites/{}", project_id, segment(site_id))
}
