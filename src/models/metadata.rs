//! Compiler metadata (`metadata.json`) and ABI types

use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parameter of an ABI function, event or error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbiParameter {
    pub internal_type: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<AbiParameter>,
}

/// A function, event, error, constructor or fallback in an ABI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbiEntry {
    pub inputs: Vec<AbiParameter>,
    pub name: String,
    pub outputs: Vec<AbiParameter>,
    pub state_mutability: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub constant: bool,
    pub payable: bool,
    pub anonymous: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Compiler {
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Optimizer {
    pub enabled: bool,
    pub runs: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BytecodeHash {
    pub bytecode_hash: String,
}

/// Compiler settings recorded in the metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Source path to contract name
    pub compilation_target: BTreeMap<String, String>,
    pub evm_version: String,
    pub libraries: BTreeMap<String, String>,
    pub metadata: BytecodeHash,
    pub optimizer: Optimizer,
    pub remappings: Vec<String>,
}

/// Developer documentation (natspec)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevDoc {
    pub details: String,
    pub kind: String,
    pub methods: JsonObject,
    pub title: String,
    pub version: i64,
}

/// User documentation (natspec)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDoc {
    pub kind: String,
    pub methods: JsonObject,
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    pub abi: Vec<AbiEntry>,
    pub devdoc: DevDoc,
    pub userdoc: UserDoc,
}

/// A source file as listed in the metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataSource {
    pub keccak256: String,
    pub urls: Vec<String>,
    pub license: String,
}

/// Solidity compiler metadata for a verified contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub compiler: Compiler,
    pub language: String,
    pub output: Output,
    pub settings: Settings,
    pub sources: BTreeMap<String, MetadataSource>,
    pub version: i64,
}

impl Metadata {
    /// Fully qualified `path:Name` of the compiled contract, if recorded
    pub fn compilation_target(&self) -> Option<String> {
        self.settings
            .compilation_target
            .iter()
            .next()
            .map(|(path, name)| format!("{path}:{name}"))
    }
}
