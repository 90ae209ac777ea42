//! API Error Taxonomy
//!
//! Every remote-call boundary returns a typed error instead of logging and
//! yielding an absent value, so callers always handle both branches.

use thiserror::Error;

/// Failure of a single call to the extraction service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable HTTP response, either because it
    /// did not complete (connect failure, timeout) or because the body
    /// could not be decoded.
    #[error("request to the extraction service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("extraction service returned {status} for {url}")]
    Remote {
        status: reqwest::StatusCode,
        url: String,
    },

    /// `GET /projects` returned an empty list; there is no workflow to
    /// submit documents to.
    #[error("extraction service has no projects configured")]
    NoProjects,

    /// The slot listing did not line up with the number of files, which
    /// would break the positional file/slot pairing.
    #[error("requested {requested} upload slots but received {received}")]
    SlotCountMismatch { requested: usize, received: usize },
}
