//! Runtime Configuration
//!
//! Both binaries are driven entirely by environment variables; there are no
//! CLI flags. Credentials (`COMPANY_ID`, `API_KEY`) are required, everything
//! else falls back to demo-friendly defaults.

use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the extraction service.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/external/v1";

const DEFAULT_DOCUMENTS_DIR: &str = "./documents";

/// 60 s keeps the demo responsive. Extractions can take a while on the
/// service side, so a production integration should poll every 10 minutes
/// or more.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Upper bound on status checks for a single bundle. At the default
/// interval this caps the wait at one hour.
const DEFAULT_POLL_MAX_CHECKS: usize = 60;

/// Configuration shared by the one-shot flow and the webhook receiver.
///
/// Constructed once at startup and passed explicitly into each component,
/// so tests can build their own values instead of reading ambient state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Company identifier sent as the `x-company-id` header.
    pub company_id: String,
    /// API key sent as the `x-api-key` header.
    pub api_key: String,
    /// Base URL of the extraction service, without a trailing slash.
    pub base_url: String,
    /// Directory scanned (non-recursively) for documents to upload.
    pub documents_dir: PathBuf,
    /// Optional fixed bundle name; a unique one is generated when absent.
    pub bundle_name: Option<String>,
    /// Delay between bundle status checks.
    pub poll_interval: Duration,
    /// Maximum number of status checks before the poller gives up.
    pub poll_max_checks: usize,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let company_id = std::env::var("COMPANY_ID").context("COMPANY_ID is not set")?;
        let api_key = std::env::var("API_KEY").context("API_KEY is not set")?;

        let base_url = std::env::var("EXTRACTION_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let documents_dir: PathBuf = std::env::var("DOCUMENTS_DIR")
            .unwrap_or_else(|_| DEFAULT_DOCUMENTS_DIR.to_string())
            .into();

        let bundle_name = std::env::var("BUNDLE_NAME").ok();

        let poll_interval = match std::env::var("POLL_INTERVAL_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .context("POLL_INTERVAL_SECS must be a number of seconds")?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        };

        let poll_max_checks = match std::env::var("POLL_MAX_CHECKS") {
            Ok(raw) => raw
                .parse()
                .context("POLL_MAX_CHECKS must be a positive number")?,
            Err(_) => DEFAULT_POLL_MAX_CHECKS,
        };

        Ok(Self {
            company_id,
            api_key,
            base_url,
            documents_dir,
            bundle_name,
            poll_interval,
            poll_max_checks,
        })
    }
}
