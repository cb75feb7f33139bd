//! HTTP client for the Honeybadger REST API.
//!
//! Every call is one round trip: [`Client::new_request`] builds an
//! [`ApiRequest`] (URL under `<base>/v2`, Basic auth, JSON body) and
//! [`Client::execute`] sends it and classifies the response. Dropping the
//! returned future aborts the in-flight request.

use std::fmt;
use std::time::Duration;

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ApiError, Error};
use crate::helpers::truncate_body;
use crate::services::{
    AccountsService, CheckInsService, CommentsService, DashboardsService, DeploymentsService,
    EnvironmentsService, StatusPagesService, TeamsService, UptimeService,
};
use crate::types::ListResponse;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://app.honeybadger.io";
const API_VERSION_PREFIX: &str = "/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Honeybadger API client.
///
/// Cheap to clone; clones share one connection pool. Configuration is fixed
/// once built, so a client can be shared across tasks without locking.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    authorization: HeaderValue,
    user_agent: HeaderValue,
    http: HttpClient,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("authorization", &"<redacted>")
            .finish()
    }
}

/// Builder for [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    auth_token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http: Option<HttpClient>,
}

impl ClientBuilder {
    /// API host without the `/v2` prefix, e.g. `https://eu-app.honeybadger.io`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Personal auth token, sent as the Basic auth username.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Whole-request timeout. Ignored when a custom HTTP client is supplied.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Reuse an existing `reqwest::Client` (and its pool, proxy, and TLS settings).
    pub fn with_http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let token = self.auth_token.unwrap_or_default();
        let credentials =
            base64::engine::general_purpose::STANDARD.encode(format!("{}:", token));
        let mut authorization = HeaderValue::from_str(&format!("Basic {}", credentials))
            .map_err(|e| Error::Build(format!("invalid auth token: {}", e)))?;
        authorization.set_sensitive(true);

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("badger/{}", crate::VERSION));
        let user_agent = HeaderValue::from_str(&user_agent)
            .map_err(|e| Error::Build(format!("invalid user agent: {}", e)))?;

        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(|e| Error::Build(format!("failed to build HTTP client: {}", e)))?,
        };

        Ok(Client {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            authorization,
            user_agent,
            http,
        })
    }
}

/// A fully built request, ready for [`Client::execute`].
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Serialized JSON body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Client for the production API with the given auth token.
    pub fn new(auth_token: impl Into<String>) -> Result<Self, Error> {
        Self::builder().with_auth_token(auth_token).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn accounts(&self) -> AccountsService<'_> {
        AccountsService::new(self)
    }

    pub fn check_ins(&self) -> CheckInsService<'_> {
        CheckInsService::new(self)
    }

    pub fn comments(&self) -> CommentsService<'_> {
        CommentsService::new(self)
    }

    pub fn dashboards(&self) -> DashboardsService<'_> {
        DashboardsService::new(self)
    }

    pub fn deployments(&self) -> DeploymentsService<'_> {
        DeploymentsService::new(self)
    }

    pub fn environments(&self) -> EnvironmentsService<'_> {
        EnvironmentsService::new(self)
    }

    pub fn status_pages(&self) -> StatusPagesService<'_> {
        StatusPagesService::new(self)
    }

    pub fn teams(&self) -> TeamsService<'_> {
        TeamsService::new(self)
    }

    pub fn uptime(&self) -> UptimeService<'_> {
        UptimeService::new(self)
    }

    /// Build a request for `path` (relative to `/v2`, may carry a query string).
    ///
    /// No I/O happens here. Fails with [`Error::Build`] when the base URL and
    /// path do not form a valid URL, and [`Error::Encode`] when the body cannot
    /// be serialized.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiRequest, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;
        self.request_for_url(method, url, body)
    }

    /// Send a request and decode a JSON body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        let body = self.round_trip(request).await?;
        serde_json::from_slice(&body).map_err(|source| {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Failed to decode response: {} | body: {}", source, snippet);
            Error::Decode {
                source,
                body: snippet,
            }
        })
    }

    /// Send a request whose success body is ignored (204 updates, deletes).
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<(), Error> {
        self.round_trip(request).await.map(|_| ())
    }

    /// Fetch the page a list response links to (`links.next` / `links.prev`).
    ///
    /// The link must point at the configured API host; credentials are never
    /// sent elsewhere.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        link: &str,
    ) -> Result<ListResponse<T>, Error> {
        let url = Url::parse(link)
            .map_err(|e| Error::Build(format!("invalid page link {:?}: {}", link, e)))?;
        let base = Url::parse(&self.base_url)
            .map_err(|e| Error::Build(format!("invalid base URL {:?}: {}", self.base_url, e)))?;
        if url.origin() != base.origin() {
            return Err(Error::Build(format!(
                "page link {} is not on {}",
                link, self.base_url
            )));
        }
        let request = self.request_for_url(Method::GET, url, None::<&()>)?;
        self.execute(request).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let request = self.new_request(Method::GET, path, None::<&()>)?;
        self.execute(request).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.new_request(method, path, Some(body))?;
        self.execute(request).await
    }

    pub(crate) async fn send_no_content<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let request = self.new_request(method, path, Some(body))?;
        self.execute_empty(request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let request = self.new_request(Method::DELETE, path, None::<&()>)?;
        self.execute_empty(request).await
    }

    fn resolve(&self, path: &str) -> Result<Url, Error> {
        let raw = format!(
            "{}{}{}",
            self.base_url.trim_end_matches('/'),
            API_VERSION_PREFIX,
            path
        );
        let url = Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Build(format!("invalid URL {:?}: {}", raw, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Build(format!(
                "unsupported URL scheme {:?} in base URL {:?}",
                url.scheme(),
                self.base_url
            )));
        }
        Ok(url)
    }

    fn request_for_url<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<ApiRequest, Error>
    where
        B: Serialize + ?Sized,
    {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let body = match body {
            Some(b) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(serde_json::to_vec(b).map_err(Error::Encode)?)
            }
            None => None,
        };

        Ok(ApiRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Execute and return the raw success body; non-2xx becomes [`Error::Api`].
    async fn round_trip(&self, request: ApiRequest) -> Result<Vec<u8>, Error> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;
        tracing::debug!(%method, %url, "sending request");

        let mut req = self.http.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }
        let res = req.send().await.map_err(|e| {
            tracing::debug!(%method, %url, "request failed: {}", e);
            Error::Network(e)
        })?;

        let status = res.status();
        let body = res.bytes().await?;
        tracing::debug!(%method, %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            tracing::warn!(%method, %url, status = err.status_code, "API error: {}", err.message);
            return Err(Error::Api(err));
        }
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::builder()
            .with_base_url("https://api.example.com/")
            .with_auth_token("test-token")
            .build()
            .unwrap()
    }

    #[test]
    fn resolves_paths_under_v2() {
        let req = client()
            .new_request(Method::GET, "/projects/1/deploys?limit=5", None::<&()>)
            .unwrap();
        assert_eq!(*req.method(), Method::GET);
        assert_eq!(
            req.url().as_str(),
            "https://api.example.com/v2/projects/1/deploys?limit=5"
        );
        assert!(req.body().is_none());
        assert!(req.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn basic_auth_uses_token_with_empty_password() {
        let req = client()
            .new_request(Method::GET, "/accounts", None::<&()>)
            .unwrap();
        // base64("test-token:")
        assert_eq!(
            req.headers().get(AUTHORIZATION).unwrap(),
            "Basic dGVzdC10b2tlbjo="
        );
        assert_eq!(req.headers().get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn body_is_json_with_content_type() {
        let body = serde_json::json!({"comment": {"body": "hi"}});
        let req = client()
            .new_request(Method::POST, "/projects/1/faults/2/comments", Some(&body))
            .unwrap();
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        let sent: serde_json::Value = serde_json::from_slice(req.body().unwrap()).unwrap();
        assert_eq!(sent, body);
    }

    #[test]
    fn malformed_base_url_is_a_build_error() {
        let client = Client::builder()
            .with_base_url("not a url")
            .with_auth_token("t")
            .build()
            .unwrap();
        let err = client
            .new_request(Method::GET, "/accounts", None::<&()>)
            .unwrap_err();
        assert!(matches!(err, Error::Build(_)));
    }

    #[test]
    fn unserializable_body_is_an_encode_error() {
        use std::collections::HashMap;
        let mut body = HashMap::new();
        body.insert(vec![1u8], "map keys must be strings");
        let err = client()
            .new_request(Method::POST, "/teams", Some(&body))
            .unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn invalid_user_agent_is_a_build_error() {
        let err = Client::builder()
            .with_user_agent("bad\nagent")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Build(_)));
    }

    #[test]
    fn debug_output_hides_credentials() {
        let out = format!("{:?}", client());
        assert!(!out.contains("dGVzdC10b2tlbjo="));
        assert!(out.contains("redacted"));
    }
}
