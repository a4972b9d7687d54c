//! Decoder implementations

use super::types::{Envelope, ErrorResponse, UNKNOWN_STATUS};
use crate::error::{Error, Result};
use crate::models::CheckContractAddress;
use alloy_primitives::Address;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

// ============================================================================
// JSON
// ============================================================================

/// Decode a complete body as JSON
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse JSON: {e}"),
    })
}

// ============================================================================
// Envelopes
// ============================================================================

/// Decode a status envelope, accepting a bare item list as well
///
/// The shape is picked from the first non-whitespace byte: `[` means the
/// server sent only the items, which are wrapped with [`UNKNOWN_STATUS`].
pub fn decode_envelope<E>(body: &[u8]) -> Result<E>
where
    E: Envelope + DeserializeOwned,
    E::Item: DeserializeOwned,
{
    match first_significant_byte(body) {
        Some(b'[') => {
            debug!("Response is a bare list, wrapping with status '{UNKNOWN_STATUS}'");
            let items: Vec<E::Item> = decode_json(body)?;
            Ok(E::from_items(UNKNOWN_STATUS.to_string(), items))
        }
        _ => decode_json(body),
    }
}

fn first_significant_byte(body: &[u8]) -> Option<u8> {
    body.iter().copied().find(|b| !b.is_ascii_whitespace())
}

// ============================================================================
// Address Checks
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCheckRecord {
    address: Address,
    #[serde(default)]
    status: String,
    #[serde(default)]
    chain_ids: Vec<ChainIdEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChainIdEntry {
    Plain(String),
    #[serde(rename_all = "camelCase")]
    Detailed { chain_id: String, status: String },
}

/// Decode an address-check response
///
/// `chainIds` entries may be plain strings or `{chainId, status}` objects.
/// A record with only plain entries is kept as is; otherwise every entry
/// becomes its own record carrying a single chain id.
pub fn decode_check_records(body: &[u8]) -> Result<Vec<CheckContractAddress>> {
    let raw: Vec<RawCheckRecord> = decode_json(body)?;
    let mut records = Vec::with_capacity(raw.len());

    for record in raw {
        let all_plain = record
            .chain_ids
            .iter()
            .all(|entry| matches!(entry, ChainIdEntry::Plain(_)));

        if all_plain {
            let chain_ids = record
                .chain_ids
                .into_iter()
                .filter_map(|entry| match entry {
                    ChainIdEntry::Plain(id) => Some(id),
                    ChainIdEntry::Detailed { .. } => None,
                })
                .collect();
            records.push(CheckContractAddress {
                address: record.address,
                status: record.status,
                chain_ids,
            });
            continue;
        }

        for entry in record.chain_ids {
            let (chain_id, status) = match entry {
                ChainIdEntry::Plain(id) => (id, record.status.clone()),
                ChainIdEntry::Detailed { chain_id, status } => (chain_id, status),
            };
            records.push(CheckContractAddress {
                address: record.address,
                status,
                chain_ids: vec![chain_id],
            });
        }
    }

    Ok(records)
}

// ============================================================================
// Server Errors
// ============================================================================

/// Upgrade an unexpected-status error to a structured server error
///
/// Only applies when the kept body decodes to an [`ErrorResponse`] with a
/// non-empty message. Any other error is returned unchanged.
pub fn server_error(err: Error) -> Error {
    let Error::UnexpectedStatus { status, body } = err else {
        return err;
    };

    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(parsed) if !parsed.message.is_empty() => Error::ServerError {
            status,
            code: parsed.custom_code,
            message: parsed.message,
            error_id: parsed.error_id,
        },
        _ => Error::UnexpectedStatus { status, body },
    }
}
