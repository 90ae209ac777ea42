//! Webhook Receiver Module
//!
//! The server-side half of the integration: instead of polling, the
//! extraction service calls back when a bundle completes. The receiver
//! fetches the results immediately (no retry, no queueing) and always
//! acknowledges with `ok` so the service does not re-deliver.
//!
//! ## Submodules
//! - **`types`**: the notification body posted by the service.
//! - **`handlers`**: the axum route and its handler.

pub mod handlers;
pub mod types;
