//! Extraction Service API Module
//!
//! Everything that talks to the remote extraction service lives here. The
//! service is a collaborator, never reimplemented; all substantive work
//! happens on its side. This module only knows its wire contract.
//!
//! ## Endpoints
//! - `GET /projects`: configured workflows, newest first.
//! - `GET /projects/uploadUrl?count=N`: N pre-signed upload URLs.
//! - `PUT <uploadUrl>`: raw document bytes, no credential headers.
//! - `POST /projects/{projectId}`: create a bundle, returns its id.
//! - `GET /projects/{projectId}/bundles/{bundleId}`: bundle status.
//! - `GET /projects/{projectId}/bundles/{bundleId}/results`: results payload.
//!
//! All calls except slot uploads are authenticated with the `x-company-id`
//! and `x-api-key` headers. Every call carries a bounded timeout; reads and
//! the bundle POST get one bounded retry on transport failure.

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use error::ApiError;
use types::{BundleDetails, DocumentRef, Project, UploadSlot};

/// Operations this system needs from the remote extraction service.
///
/// `client::ExtractionClient` is the production implementation; module tests
/// substitute scripted in-process stubs so the flows run without a network.
#[async_trait]
pub trait ExtractionApi: Send + Sync {
    /// Most recently created project (index 0 of `GET /projects`).
    async fn latest_project(&self) -> Result<Project, ApiError>;

    /// Request `count` pre-signed upload slots.
    async fn upload_slots(&self, count: usize) -> Result<Vec<UploadSlot>, ApiError>;

    /// Push raw document bytes into a slot. Single-shot, without credential
    /// headers: the slot URL itself encodes authorization.
    async fn upload_document(&self, slot: &UploadSlot, bytes: Vec<u8>) -> Result<(), ApiError>;

    /// Submit uploaded documents as a named bundle, returning the bundle id
    /// assigned by the service.
    async fn create_bundle(
        &self,
        project_id: &str,
        name: &str,
        documents: &[DocumentRef],
    ) -> Result<String, ApiError>;

    /// Current status of a bundle. The poller only observes status, it
    /// never mutates it.
    async fn bundle_details(
        &self,
        project_id: &str,
        bundle_id: &str,
    ) -> Result<BundleDetails, ApiError>;

    /// Results payload of a finished bundle. The shape is opaque to this
    /// client.
    async fn bundle_results(
        &self,
        project_id: &str,
        bundle_id: &str,
    ) -> Result<serde_json::Value, ApiError>;
}
