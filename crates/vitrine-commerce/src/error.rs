//! Catalog boundary error types.
//!
//! Selection, pricing, and message composition are total functions and
//! never fail; errors only arise when decoding provider payloads.

use thiserror::Error;

/// Errors that can occur when consuming catalog provider payloads.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Malformed provider payload.
    #[error("Malformed catalog payload: {0}")]
    Payload(#[from] serde_json::Error),
}
