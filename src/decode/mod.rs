//! Response decoder module
//!
//! Supports: plain JSON, status envelopes, address-check records, server errors
//!
//! # Overview
//!
//! Sourcify does not always answer with the shape it documents. The decoders
//! here take one fully buffered body and absorb the known variations:
//!
//! - File listings may come back as a bare array instead of
//!   `{"status": .., "files": [..]}`.
//! - Address checks may report `chainIds` as strings or as
//!   `{"chainId", "status"}` objects.
//! - Error statuses may carry a `{"errorId", "customCode", "message"}` body.

mod decoders;
mod types;

pub use decoders::{decode_check_records, decode_envelope, decode_json, server_error};
pub use types::{Envelope, ErrorResponse, UNKNOWN_STATUS};
