//! Sourcify API operations
//!
//! Each operation picks an endpoint from the catalog, fills its parameters,
//! dispatches it and decodes the body.

use super::types::ContractListOptions;
use crate::decode::{decode_check_records, decode_envelope, decode_json, server_error};
use crate::endpoint::catalog;
use crate::endpoint::{Endpoint, Param};
use crate::error::{Error, Result};
use crate::http::{ApiResponse, HttpClient};
use crate::models::{
    Chain, CheckContractAddress, ContractResponse, ContractsResponse, FileTree, Metadata,
    SourceCodes, VerifiedContractAddresses,
};
use crate::types::MatchType;
use alloy_primitives::Address;
use bytes::Bytes;
use tracing::debug;

/// Repository path of the compiler metadata file
pub const METADATA_FILE: &str = "metadata.json";

impl HttpClient {
    /// Check whether the server is up
    ///
    /// Any non-200 answer is reported as `Ok(false)`. Only transport
    /// failures are errors.
    pub async fn get_health(&self) -> Result<bool> {
        match self.dispatch(&catalog::HEALTH.call()).await {
            Ok(_) => Ok(true),
            Err(Error::UnexpectedStatus { status, .. }) => {
                debug!("Health check answered {}", status);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// List every chain the server knows about
    pub async fn get_chains(&self) -> Result<Vec<Chain>> {
        let response = self.send(&catalog::CHAINS, Vec::new()).await?;
        response.json().await
    }

    /// Verification status of `addresses` on `chain_ids`
    ///
    /// [`MatchType::Full`] only reports perfect matches; the other match
    /// types also report partial ones.
    pub async fn check_contract_by_addresses(
        &self,
        addresses: &[Address],
        chain_ids: &[u64],
        match_type: MatchType,
    ) -> Result<Vec<CheckContractAddress>> {
        let endpoint = match match_type {
            MatchType::Full => &*catalog::CHECK_BY_ADDRESSES,
            MatchType::Partial | MatchType::Any => &*catalog::CHECK_ALL_BY_ADDRESSES,
        };
        let addresses: Vec<String> = addresses.iter().map(|a| a.to_checksum(None)).collect();

        let params = vec![
            Param::new("addresses", addresses),
            Param::new("chainIds", chain_ids.to_vec()),
        ];
        let body = self.send(endpoint, params).await?.bytes().await?;
        decode_check_records(&body)
    }

    /// Verified contract addresses on a chain, split into full and partial
    pub async fn get_available_contract_addresses(
        &self,
        chain_id: u64,
    ) -> Result<VerifiedContractAddresses> {
        let params = vec![Param::new(":chain", chain_id)];
        let response = self.send(&catalog::CONTRACT_ADDRESSES, params).await?;
        response.json().await
    }

    /// Repository URLs of every file stored for a contract
    pub async fn get_contract_files(
        &self,
        chain_id: u64,
        address: Address,
        match_type: MatchType,
    ) -> Result<FileTree> {
        let endpoint = match match_type {
            MatchType::Full => &*catalog::FILE_TREE_FULL,
            MatchType::Partial | MatchType::Any => &*catalog::FILE_TREE_ANY,
        };
        let body = self
            .send(endpoint, contract_params(chain_id, address))
            .await?
            .bytes()
            .await?;
        decode_envelope(&body)
    }

    /// Source files of a verified contract, metadata.json included
    pub async fn get_contract_source_code(
        &self,
        chain_id: u64,
        address: Address,
        match_type: MatchType,
    ) -> Result<SourceCodes> {
        let endpoint = match match_type {
            MatchType::Full => &*catalog::SOURCE_FILES_FULL,
            MatchType::Partial | MatchType::Any => &*catalog::SOURCE_FILES_ANY,
        };
        let body = self
            .send(endpoint, contract_params(chain_id, address))
            .await?
            .bytes()
            .await?;
        decode_envelope(&body)
    }

    /// Compiler metadata of a verified contract
    ///
    /// The repository stores full and partial matches separately, so
    /// [`MatchType::Any`] is rejected.
    pub async fn get_contract_metadata(
        &self,
        chain_id: u64,
        address: Address,
        match_type: MatchType,
    ) -> Result<Metadata> {
        let endpoint = repository_endpoint(match_type, "get_contract_metadata")?;
        let body = self
            .fetch_repository_file(endpoint, chain_id, address, METADATA_FILE)
            .await?;
        decode_json(&body)
    }

    /// Raw bytes of a contract's metadata.json
    pub async fn get_contract_metadata_bytes(
        &self,
        chain_id: u64,
        address: Address,
        match_type: MatchType,
    ) -> Result<Bytes> {
        let endpoint = repository_endpoint(match_type, "get_contract_metadata_bytes")?;
        self.fetch_repository_file(endpoint, chain_id, address, METADATA_FILE)
            .await
    }

    /// Raw bytes of any file in a contract's repository folder
    ///
    /// `path` is relative to the contract folder, e.g.
    /// `sources/contracts/Token.sol`. Dot segments are rejected; anything
    /// else, percent escapes included, is sent as given.
    pub async fn get_repository_file(
        &self,
        chain_id: u64,
        address: Address,
        path: &str,
        match_type: MatchType,
    ) -> Result<Bytes> {
        let endpoint = repository_endpoint(match_type, "get_repository_file")?;
        self.fetch_repository_file(endpoint, chain_id, address, path)
            .await
    }

    /// Look up one verified contract
    ///
    /// `fields` selects response sections and `omit` excludes them; only one
    /// of the two may be given. With neither, every section is requested.
    pub async fn get_contract(
        &self,
        chain_id: u64,
        address: Address,
        fields: &[&str],
        omit: &[&str],
    ) -> Result<ContractResponse> {
        if !fields.is_empty() && !omit.is_empty() {
            return Err(Error::config("fields and omit cannot be used together"));
        }

        let mut params = contract_params(chain_id, address);
        if fields.is_empty() && omit.is_empty() {
            params.push(Param::new("fields", vec!["all"]));
        } else {
            params.push(Param::new("fields", fields.to_vec()));
            params.push(Param::new("omit", omit.to_vec()));
        }

        let response = self.send(&catalog::CONTRACT, params).await?;
        response.json().await
    }

    /// One page of verified contracts on a chain
    pub async fn get_contracts(
        &self,
        chain_id: u64,
        options: &ContractListOptions,
    ) -> Result<ContractsResponse> {
        let mut params = vec![Param::new(":chain", chain_id)];
        if let Some(sort) = options.sort {
            params.push(Param::new("sort", sort.as_str()));
        }
        if let Some(ref after) = options.after_match_id {
            params.push(Param::new("afterMatchId", after.as_str()));
        }
        if let Some(limit) = options.limit {
            params.push(Param::new("limit", limit));
        }

        let response = self.send(&catalog::CONTRACTS, params).await?;
        response.json().await
    }

    async fn fetch_repository_file(
        &self,
        endpoint: &Endpoint,
        chain_id: u64,
        address: Address,
        path: &str,
    ) -> Result<Bytes> {
        let path = path.trim_start_matches('/');
        if path.split('/').any(is_dot_segment) {
            return Err(Error::InvalidFilePath {
                path: path.to_string(),
            });
        }

        let mut params = contract_params(chain_id, address);
        params.push(Param::new(":filePath", path));
        self.send(endpoint, params).await?.bytes().await
    }

    /// Dispatch `endpoint` with `params`, upgrading error bodies
    async fn send(&self, endpoint: &Endpoint, params: Vec<Param>) -> Result<ApiResponse> {
        let call = endpoint.call().set_params(params);
        self.dispatch(&call).await.map_err(server_error)
    }
}

fn contract_params(chain_id: u64, address: Address) -> Vec<Param> {
    vec![
        Param::new(":chain", chain_id),
        Param::new(":address", address.to_checksum(None)),
    ]
}

/// `.` and `..`, including their percent-encoded forms
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

fn repository_endpoint(match_type: MatchType, operation: &str) -> Result<&'static Endpoint> {
    match match_type {
        MatchType::Full => Ok(&*catalog::REPOSITORY_FILE_FULL),
        MatchType::Partial => Ok(&*catalog::REPOSITORY_FILE_PARTIAL),
        MatchType::Any => Err(Error::UnsupportedMatchType {
            match_type: match_type.to_string(),
            operation: operation.to_string(),
        }),
    }
}
