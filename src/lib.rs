//! Extraction Service Demo Client Library
//!
//! This library crate defines the building blocks of a demonstration client
//! for a third-party document-extraction service. It backs two binaries
//! showing the two integration patterns the service supports: client-side
//! polling (`extraction-client`) and a server-side webhook (`webhook`).
//!
//! ## Architecture Modules
//! - **`api`**: the wire contract with the remote service. Typed DTOs and
//!   errors, plus the authenticated reqwest client behind the
//!   `ExtractionApi` trait.
//! - **`uploader`**: discovers local documents and pushes their bytes into
//!   pre-signed upload slots, preserving the positional file/slot pairing.
//! - **`polling`**: the finite state machine (`WAITING -> DONE | FAILED`)
//!   that watches a bundle until results are available or the session is
//!   stopped.
//! - **`webhook`**: the passive axum endpoint that reacts to completion
//!   notifications by fetching results directly.
//! - **`config`**: environment-driven configuration passed explicitly into
//!   each component.

pub mod api;
pub mod config;
pub mod polling;
pub mod uploader;
pub mod webhook;
