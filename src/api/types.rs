//! Extraction Service Wire Types
//!
//! Data Transfer Objects exchanged with the remote extraction service, plus
//! the local classification of bundle statuses. Payload fields this client
//! does not read are left unmodeled; serde ignores them on deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content type declared on every slot upload.
///
/// The demo assumes every file in the documents directory is DOCX. A real
/// integration would detect the MIME type of each document.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Status string marking a bundle whose extraction finished successfully.
pub const STATUS_FINISHED: &str = "FINISHED";
/// Terminal status: the bundle was archived and will not be extracted.
pub const STATUS_ARCHIVED: &str = "ARCHIVED";
/// Terminal status: the bundle was canceled and will not be extracted.
pub const STATUS_CANCELED: &str = "CANCELED";

/// A configured extraction workflow on the remote service.
///
/// Projects are created on the platform, never by this client.
/// `GET /projects` lists them newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "projectId")]
    pub project_id: String,
}

/// A time-limited, pre-signed upload destination.
///
/// Slots stay valid for roughly 30 minutes and are meant to be consumed
/// once; neither property is enforced locally. On the wire a slot is a bare
/// URL string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadSlot {
    pub url: String,
}

/// Pairing of a local file name and the slot URL its bytes were pushed to.
///
/// Built once per successful upload, then passed verbatim to bundle
/// creation; the service matches extraction results back to documents
/// through this pairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
    pub url: String,
}

/// Body of `POST /projects/{projectId}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBundleRequest {
    pub name: String,
    pub documents: Vec<DocumentRef>,
}

/// Response of `POST /projects/{projectId}`: the assigned bundle id.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBundleResponse {
    pub id: String,
}

/// Subset of `GET /projects/{projectId}/bundles/{bundleId}` that this
/// client reads. Only the status drives the poller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleDetails {
    pub status: String,
}

/// Local classification of a bundle status string.
///
/// The service's full status enumeration is not published. Anything that is
/// not a known terminal status is treated as still in progress, with the
/// raw string preserved for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleStatus {
    Finished,
    Archived,
    Canceled,
    InProgress(String),
}

impl BundleStatus {
    pub fn classify(raw: &str) -> Self {
        match raw {
            STATUS_FINISHED => BundleStatus::Finished,
            STATUS_ARCHIVED => BundleStatus::Archived,
            STATUS_CANCELED => BundleStatus::Canceled,
            other => BundleStatus::InProgress(other.to_string()),
        }
    }

    /// Terminal state with results available.
    pub fn is_success(&self) -> bool {
        matches!(self, BundleStatus::Finished)
    }

    /// Terminal state without results. Asking for results of an archived or
    /// canceled bundle is a contract violation.
    pub fn is_failure(&self) -> bool {
        matches!(self, BundleStatus::Archived | BundleStatus::Canceled)
    }
}

impl fmt::Display for BundleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleStatus::Finished => f.write_str(STATUS_FINISHED),
            BundleStatus::Archived => f.write_str(STATUS_ARCHIVED),
            BundleStatus::Canceled => f.write_str(STATUS_CANCELED),
            BundleStatus::InProgress(raw) => f.write_str(raw),
        }
    }
}
