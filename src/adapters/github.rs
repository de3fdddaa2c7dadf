// ABOUTME: ReleaseHost implementation for the GitHub releases REST API.
// ABOUTME: Lists releases page by page and creates drafts with a bearer token.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use super::traits::{
    ApiSnafu, CreatedRelease, DecodeSnafu, HostError, ReleaseHost, ReleaseSummary,
    TransportSnafu,
};
use crate::release::DraftRelease;

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PER_PAGE: usize = 100;

/// Client for the releases of one GitHub owner.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    owner: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            owner: owner.into(),
            token: None,
        }
    }

    /// Authenticate requests with a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Point the client at another API endpoint, such as GitHub Enterprise.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Releases collection URL of `project`.
    pub fn releases_url(&self, project: &str) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, self.owner, project)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, concat!("cutter/", env!("CARGO_PKG_VERSION")));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a successful JSON response.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, HostError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .context(TransportSnafu { url })?;

        let status = response.status();
        let body = response.text().await.context(TransportSnafu { url })?;

        if !status.is_success() {
            return ApiSnafu {
                url,
                status: status.as_u16(),
                body,
            }
            .fail();
        }

        serde_json::from_str(&body).context(DecodeSnafu { url })
    }
}

#[async_trait]
impl ReleaseHost for GitHubClient {
    async fn list_releases(&self, project: &str) -> Result<Vec<ReleaseSummary>, HostError> {
        let url = self.releases_url(project);
        let mut releases = Vec::new();

        for page in 1.. {
            tracing::debug!("GET {} page {}", url, page);
            let request = self
                .client
                .get(&url)
                .query(&[("per_page", PER_PAGE), ("page", page)]);
            let batch: Vec<ReleaseSummary> = self.send(request, &url).await?;

            let last_page = batch.len() < PER_PAGE;
            releases.extend(batch);
            if last_page {
                break;
            }
        }

        Ok(releases)
    }

    async fn create_draft(
        &self,
        project: &str,
        draft: &DraftRelease,
    ) -> Result<CreatedRelease, HostError> {
        let url = self.releases_url(project);
        tracing::debug!("POST {} for {}", url, draft.tag_name);

        let request = self.client.post(&url).json(draft);
        self.send(request, &url).await
    }
}
