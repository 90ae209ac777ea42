//! Document Uploader Module
//!
//! Moves local documents into the extraction service's cloud storage.
//!
//! ## Workflow
//! 1. **Discovery**: list the documents directory, non-recursively. Every
//!    entry is taken as a candidate document; no content or type validation
//!    is performed (deliberate simplification of the demo).
//! 2. **Slots**: request exactly one pre-signed upload slot per file.
//! 3. **Pairing**: build the file/slot pairs up front, so the positional
//!    contract with the service (slot i belongs to file i) is held in one
//!    structure instead of two parallel arrays.
//! 4. **Transfer**: push all files concurrently. One failed transfer fails
//!    the whole operation; there is no partial success and no retry.

pub mod transfer;
