//! HTTP client for the ALEX REST API.
//!
//! Wraps the subset of the ALEX surface the pipeline drives, providing one
//! typed method per endpoint. A single `reqwest::Client` is built up front
//! and reused; after [`login`](AlexClient::login) every request carries the
//! bearer token.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::models::{Credentials, ImportedGroup, ImportedSymbol, LearnerConfig, TestDefinition};

use super::error::{ApiError, ApiResult};
use super::models::{
    ActiveStatus, CreateProjectRequest, CreatedTest, LearnerResult, LoginResponse, Project,
    TestReport,
};

/// Per-request timeout. Polling wait bounds are enforced separately by the
/// action runners.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one ALEX server.
#[derive(Debug, Clone)]
pub struct AlexClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl AlexClient {
    /// Create a client for the server at `base_url` (without the `/rest`
    /// suffix, which the client appends itself).
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/rest{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!(%method, %url, "request");
        let mut req = self.http.request(method, url);
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        req
    }

    /// Log in and store the bearer token for all subsequent calls.
    pub async fn login(&mut self, credentials: &Credentials) -> ApiResult<()> {
        let resp = self
            .request(Method::POST, "/users/login")
            .json(credentials)
            .send()
            .await?;
        let body: LoginResponse = Self::parse(resp).await?;
        self.token = Some(body.token);
        Ok(())
    }

    /// Create a scratch project.
    pub async fn create_project(&self, request: &CreateProjectRequest) -> ApiResult<Project> {
        let resp = self
            .request(Method::POST, "/projects")
            .json(request)
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// Delete a project. Callers treat failures as non-fatal.
    pub async fn delete_project(&self, project_id: i64) -> ApiResult<()> {
        let resp = self
            .request(Method::DELETE, &format!("/projects/{project_id}"))
            .send()
            .await?;
        Self::check(resp).await.map(|_| ())
    }

    /// Upload one file into the project's file store.
    pub async fn upload_file(
        &self,
        project_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<()> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let resp = self
            .request(Method::POST, &format!("/projects/{project_id}/files/upload"))
            .multipart(form)
            .send()
            .await?;
        Self::check(resp).await.map(|_| ())
    }

    /// Upload a flat symbol list. Definitions are sent verbatim; the
    /// response enriches each symbol with its server-assigned ids.
    pub async fn create_symbols(
        &self,
        project_id: i64,
        symbols: &[Value],
    ) -> ApiResult<Vec<ImportedSymbol>> {
        let resp = self
            .request(Method::POST, &format!("/projects/{project_id}/symbols/batch"))
            .json(symbols)
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// Upload a symbol-group tree. The response mirrors the nesting.
    pub async fn create_symbol_groups(
        &self,
        project_id: i64,
        groups: &[Value],
    ) -> ApiResult<Vec<ImportedGroup>> {
        let resp = self
            .request(Method::POST, &format!("/projects/{project_id}/groups/batch"))
            .json(groups)
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// Batch-create the resolved test tree.
    pub async fn create_tests(
        &self,
        project_id: i64,
        tests: &[TestDefinition],
    ) -> ApiResult<Vec<CreatedTest>> {
        let resp = self
            .request(Method::POST, &format!("/projects/{project_id}/tests/batch"))
            .json(tests)
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// Trigger execution of previously created tests. `config` is the
    /// driver config with test ids, target URL id, and report flag attached.
    pub async fn execute_tests(&self, project_id: i64, config: &Value) -> ApiResult<()> {
        let resp = self
            .request(Method::POST, &format!("/projects/{project_id}/tests/execute"))
            .json(config)
            .send()
            .await?;
        Self::check(resp).await.map(|_| ())
    }

    /// Status of the project's test executor.
    pub async fn test_status(&self, project_id: i64) -> ApiResult<ActiveStatus> {
        let resp = self
            .request(Method::GET, &format!("/projects/{project_id}/tests/status"))
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// The most recent test report.
    pub async fn latest_test_report(&self, project_id: i64) -> ApiResult<TestReport> {
        let resp = self
            .request(
                Method::GET,
                &format!("/projects/{project_id}/tests/reports/latest"),
            )
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// A report in JUnit XML form, returned as the raw body.
    pub async fn junit_report(&self, project_id: i64, report_id: i64) -> ApiResult<String> {
        let resp = self
            .request(
                Method::GET,
                &format!("/projects/{project_id}/tests/reports/{report_id}"),
            )
            .query(&[("format", "junit+xml")])
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        resp.text().await.map_err(ApiError::Transport)
    }

    /// Start an asynchronous learning session for the project.
    pub async fn start_learning(
        &self,
        project_id: i64,
        config: &LearnerConfig,
    ) -> ApiResult<()> {
        let resp = self
            .request(Method::POST, &format!("/learner/{project_id}/start"))
            .json(config)
            .send()
            .await?;
        Self::check(resp).await.map(|_| ())
    }

    /// Whether a learning session is still running for the project.
    pub async fn learner_active(&self, project_id: i64) -> ApiResult<ActiveStatus> {
        let resp = self
            .request(Method::GET, &format!("/learner/{project_id}/active"))
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// The most recent learning result.
    pub async fn latest_learner_result(&self, project_id: i64) -> ApiResult<LearnerResult> {
        let resp = self
            .request(Method::GET, &format!("/projects/{project_id}/results/latest"))
            .send()
            .await?;
        Self::parse(resp).await
    }

    async fn check(resp: Response) -> ApiResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, body))
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
        let resp = Self::check(resp).await?;
        let status = resp.status();
        let body = resp.text().await.map_err(ApiError::Transport)?;
        serde_json::from_str(&body).map_err(|err| {
            ApiError::Decode(format!("{err} (status {status}, body {body:?})"))
        })
    }
}
