//! Bundle Polling Module
//!
//! The client-side half of the integration: after a bundle is created, its
//! status is checked on a fixed interval until the service reports a
//! terminal state.
//!
//! ## State machine
//! A polling session is an explicit finite state machine:
//!
//! ```text
//! WAITING --(status FINISHED)--------------> DONE   (results fetched once)
//! WAITING --(status ARCHIVED/CANCELED)-----> FAILED (no results fetch)
//! WAITING --(max checks / cancel / error)--> FAILED
//! WAITING --(any other status)-------------> WAITING
//! ```
//!
//! At most one status check is in flight at a time; a slow check delays the
//! next tick instead of overlapping it. The caller gets a cancellation
//! handle that is honored at the top of every tick.
//!
//! ## Submodules
//! - **`types`**: session states, tuning knobs, typed poll errors.
//! - **`poller`**: the timer driver around [`crate::api::ExtractionApi`].

pub mod poller;
pub mod types;
