use super::types::BundleNotification;
use crate::api::ExtractionApi;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Extension, Json, Router};
use std::sync::Arc;

/// API handle shared with the request handlers.
pub type SharedApi = Arc<dyn ExtractionApi>;

pub fn router(api: SharedApi) -> Router {
    Router::new()
        .route("/", post(handle_notification))
        .layer(Extension(api))
}

/// `POST /`: completion notification from the extraction service.
///
/// Fetches the results for the notified bundle right away. The
/// acknowledgment is fixed: the service gets `200 ok` whether or not the
/// fetch succeeded, so a failed fetch is only visible in the logs.
pub async fn handle_notification(
    Extension(api): Extension<SharedApi>,
    Json(notification): Json<BundleNotification>,
) -> (StatusCode, &'static str) {
    tracing::info!(
        "Completion notification for bundle {} in project {}",
        notification.bundle_id,
        notification.project_id
    );

    match api
        .bundle_results(&notification.project_id, &notification.bundle_id)
        .await
    {
        Ok(results) => {
            tracing::info!("Results are ready for bundle {}", notification.bundle_id);
            tracing::debug!("Results payload: {}", results);
        }
        Err(err) => {
            tracing::error!(
                "Failed to fetch results for bundle {}: {}",
                notification.bundle_id,
                err
            );
        }
    }

    (StatusCode::OK, "ok")
}
