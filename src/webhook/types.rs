use serde::{Deserialize, Serialize};

/// Notification body posted by the extraction service when a bundle
/// completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleNotification {
    pub project_id: String,
    pub bundle_id: String,
}
