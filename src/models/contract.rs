//! Contract lookup responses (`/v2/contract`, `/v2/contracts`)

use super::metadata::{AbiEntry, BytecodeHash, DevDoc, Metadata, Optimizer, Settings, UserDoc};
use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Compilation
// ============================================================================

/// Settings passed to the compiler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerSettings {
    pub evm_version: String,
    pub libraries: JsonObject,
    pub metadata: BytecodeHash,
    pub optimizer: Optimizer,
    pub remappings: Vec<JsonValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Compilation {
    pub compiler: String,
    pub compiler_settings: CompilerSettings,
    pub compiler_version: String,
    pub fully_qualified_name: String,
    pub language: String,
    pub name: String,
}

// ============================================================================
// Bytecode
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CborAuxData {
    pub offset: i64,
    pub value: String,
}

/// A change applied to recompiled bytecode to match the chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transformation {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: i64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformationValues {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub cbor_auxdata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub constructor_arguments: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub libraries: BTreeMap<String, String>,
}

/// Creation or runtime bytecode with its match details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bytecode {
    pub cbor_auxdata: BTreeMap<String, CborAuxData>,
    pub link_references: JsonObject,
    pub onchain_bytecode: String,
    pub recompiled_bytecode: String,
    pub source_map: String,
    pub transformation_values: TransformationValues,
    pub transformations: Vec<Transformation>,
    pub immutable_references: JsonObject,
}

// ============================================================================
// Deployment & Proxies
// ============================================================================

/// The transaction that created the contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deployment {
    pub transaction_hash: String,
    pub block_number: String,
    pub transaction_index: String,
    pub deployer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyResolution {
    pub implementations: Vec<JsonValue>,
    pub is_proxy: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy_type: String,
}

// ============================================================================
// Standard JSON
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceContent {
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceIdReference {
    pub id: i64,
}

/// Compiler input in standard JSON form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StdJsonInput {
    pub language: String,
    pub settings: Settings,
    pub sources: BTreeMap<String, SourceContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvmBytecode {
    pub link_references: JsonObject,
    pub object: String,
    pub source_map: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvmDeployedBytecode {
    pub immutable_references: JsonObject,
    pub link_references: JsonObject,
    pub object: String,
    pub source_map: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvmOutput {
    pub bytecode: EvmBytecode,
    pub deployed_bytecode: EvmDeployedBytecode,
}

/// Storage type definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageType {
    pub label: String,
    pub encoding: String,
    pub number_of_bytes: String,
}

/// A storage variable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageEntry {
    pub slot: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ast_id: i64,
    pub label: String,
    pub offset: i64,
    pub contract: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageLayout {
    pub storage: Vec<StorageEntry>,
    pub types: BTreeMap<String, StorageType>,
}

/// Compiled output of one contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractOutput {
    pub abi: Vec<AbiEntry>,
    pub devdoc: DevDoc,
    pub evm: EvmOutput,
    pub metadata: String,
    pub storage_layout: StorageLayout,
    pub userdoc: UserDoc,
}

/// Compiler output in standard JSON form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StdJsonOutput {
    /// Source path to contract name to output
    pub contracts: BTreeMap<String, BTreeMap<String, ContractOutput>>,
    pub sources: BTreeMap<String, SourceIdReference>,
}

// ============================================================================
// Responses
// ============================================================================

/// Full contract record from `/v2/contract/:chain/:address`
///
/// Which sections are populated depends on the `fields`/`omit` selection
/// of the request; unselected sections keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractResponse {
    pub abi: Vec<AbiEntry>,
    pub address: String,
    pub chain_id: String,
    pub compilation: Compilation,
    pub creation_bytecode: Bytecode,
    pub creation_match: Option<String>,
    pub deployment: Deployment,
    pub devdoc: DevDoc,
    #[serde(rename = "match")]
    pub match_status: Option<String>,
    pub match_id: String,
    pub metadata: Metadata,
    pub proxy_resolution: ProxyResolution,
    pub runtime_bytecode: Bytecode,
    pub runtime_match: Option<String>,
    pub source_ids: BTreeMap<String, SourceIdReference>,
    pub sources: BTreeMap<String, SourceContent>,
    pub std_json_input: StdJsonInput,
    pub std_json_output: StdJsonOutput,
    pub storage_layout: Option<StorageLayout>,
    pub userdoc: UserDoc,
    pub verified_at: Option<DateTime<Utc>>,
}

/// Summary row from `/v2/contracts/:chain`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractBaseResponse {
    pub address: String,
    pub chain_id: String,
    pub creation_match: Option<String>,
    #[serde(rename = "match")]
    pub match_status: Option<String>,
    pub match_id: String,
    pub runtime_match: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractsResponse {
    pub results: Vec<ContractBaseResponse>,
}

impl ContractsResponse {
    /// Match id of the last row, for use as the next `after_match_id`
    pub fn last_match_id(&self) -> Option<&str> {
        self.results.last().map(|row| row.match_id.as_str())
    }
}
