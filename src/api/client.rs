//! HTTP Client for the Extraction Service
//!
//! Thin reqwest wrapper implementing [`ExtractionApi`]. Credentials and the
//! base URL are injected at construction; nothing here reads ambient state.

use super::error::ApiError;
use super::types::{
    BundleDetails, CreateBundleRequest, CreateBundleResponse, DocumentRef, Project, UploadSlot,
    DOCX_CONTENT_TYPE,
};
use super::ExtractionApi;
use crate::config::ClientConfig;

use async_trait::async_trait;
use std::time::Duration;

const HEADER_COMPANY_ID: &str = "x-company-id";
const HEADER_API_KEY: &str = "x-api-key";

/// Bound applied to every remote call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Total send attempts per call: the original try plus one bounded retry
/// for transport failures.
const SEND_ATTEMPTS: usize = 2;

/// Authenticated client for the extraction service.
pub struct ExtractionClient {
    http_client: reqwest::Client,
    base_url: String,
    company_id: String,
    api_key: String,
}

impl ExtractionClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            company_id: config.company_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub(crate) fn authed_get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http_client
            .get(url)
            .header(HEADER_COMPANY_ID, &self.company_id)
            .header(HEADER_API_KEY, &self.api_key)
            .timeout(REQUEST_TIMEOUT)
    }

    pub(crate) fn authed_post(&self, url: &str) -> reqwest::RequestBuilder {
        self.http_client
            .post(url)
            .header(HEADER_COMPANY_ID, &self.company_id)
            .header(HEADER_API_KEY, &self.api_key)
            .timeout(REQUEST_TIMEOUT)
    }

    /// PUT of raw document bytes into a pre-signed slot.
    ///
    /// The slot URL encodes the authorization scope. Credential headers must
    /// not be attached; the service rejects uploads that carry them.
    pub(crate) fn upload_request(
        &self,
        slot: &UploadSlot,
        bytes: Vec<u8>,
    ) -> reqwest::RequestBuilder {
        self.http_client
            .put(&slot.url)
            .header(reqwest::header::CONTENT_TYPE, DOCX_CONTENT_TYPE)
            .timeout(REQUEST_TIMEOUT)
            .body(bytes)
    }

    async fn get_with_retry(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let mut delay_ms = 150u64;
        let mut attempt = 0;

        loop {
            match self.authed_get(url).send().await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    attempt += 1;
                    if attempt == SEND_ATTEMPTS {
                        return Err(ApiError::Transport(err));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }
    }

    async fn post_with_retry<T: serde::Serialize>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<reqwest::Response, ApiError> {
        let mut delay_ms = 150u64;
        let mut attempt = 0;

        loop {
            match self.authed_post(url).json(payload).send().await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    attempt += 1;
                    if attempt == SEND_ATTEMPTS {
                        return Err(ApiError::Transport(err));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }
    }
}

/// Turn a non-2xx response into a typed remote error.
fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Remote {
            status,
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl ExtractionApi for ExtractionClient {
    async fn latest_project(&self) -> Result<Project, ApiError> {
        let url = format!("{}/projects", self.base_url);
        let response = expect_success(self.get_with_retry(&url).await?)?;

        let projects: Vec<Project> = response.json().await?;

        // Index 0 is the most recently created project.
        projects.into_iter().next().ok_or(ApiError::NoProjects)
    }

    async fn upload_slots(&self, count: usize) -> Result<Vec<UploadSlot>, ApiError> {
        let url = format!("{}/projects/uploadUrl?count={}", self.base_url, count);
        let response = expect_success(self.get_with_retry(&url).await?)?;

        let slots: Vec<UploadSlot> = response.json().await?;
        Ok(slots)
    }

    async fn upload_document(&self, slot: &UploadSlot, bytes: Vec<u8>) -> Result<(), ApiError> {
        // Single-shot: a failed transfer fails the whole upload step, there
        // is no per-file retry.
        let response = self.upload_request(slot, bytes).send().await?;
        expect_success(response)?;
        Ok(())
    }

    async fn create_bundle(
        &self,
        project_id: &str,
        name: &str,
        documents: &[DocumentRef],
    ) -> Result<String, ApiError> {
        let url = format!("{}/projects/{}", self.base_url, project_id);
        let body = CreateBundleRequest {
            name: name.to_string(),
            documents: documents.to_vec(),
        };

        let response = expect_success(self.post_with_retry(&url, &body).await?)?;

        let created: CreateBundleResponse = response.json().await?;
        Ok(created.id)
    }

    async fn bundle_details(
        &self,
        project_id: &str,
        bundle_id: &str,
    ) -> Result<BundleDetails, ApiError> {
        let url = format!(
            "{}/projects/{}/bundles/{}",
            self.base_url, project_id, bundle_id
        );
        let response = expect_success(self.get_with_retry(&url).await?)?;

        let details: BundleDetails = response.json().await?;
        Ok(details)
    }

    async fn bundle_results(
        &self,
        project_id: &str,
        bundle_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!(
            "{}/projects/{}/bundles/{}/results",
            self.base_url, project_id, bundle_id
        );
        let response = expect_success(self.get_with_retry(&url).await?)?;

        let results = response.json().await?;
        Ok(results)
    }
}
