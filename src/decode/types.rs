//! Decoder types and traits

use serde::{Deserialize, Serialize};

/// Status assigned to an envelope that arrived as a bare list
pub const UNKNOWN_STATUS: &str = "unknown";

/// A `{status, <items>}` response object
///
/// Implemented by responses that the server sometimes sends as just the
/// item list. [`decode_envelope`](super::decode_envelope) uses
/// [`Envelope::from_items`] to rebuild the object in that case.
pub trait Envelope: Sized {
    /// Element type of the item list
    type Item;

    /// Build the envelope from a status and its items
    fn from_items(status: String, items: Vec<Self::Item>) -> Self;
}

/// Structured error body returned by the server on failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorResponse {
    pub custom_code: String,
    pub message: String,
    pub error_id: String,
}
