//! File listings, source files and address checks

use crate::decode::Envelope;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Repository URLs of every file stored for a contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTree {
    /// Match status, or `"unknown"` when the server sent only the list
    pub status: String,
    pub files: Vec<String>,
}

impl Envelope for FileTree {
    type Item = String;

    fn from_items(status: String, files: Vec<String>) -> Self {
        Self { status, files }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceCode {
    pub name: String,
    pub path: String,
    pub content: String,
}

/// Source files of a verified contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceCodes {
    /// Match status, or `"unknown"` when the server sent only the list
    pub status: String,
    pub files: Vec<SourceCode>,
}

impl SourceCodes {
    /// Find a file by its name
    pub fn file(&self, name: &str) -> Option<&SourceCode> {
        self.files.iter().find(|file| file.name == name)
    }
}

impl Envelope for SourceCodes {
    type Item = SourceCode;

    fn from_items(status: String, files: Vec<SourceCode>) -> Self {
        Self { status, files }
    }
}

/// Verified addresses on one chain, split by match quality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifiedContractAddresses {
    pub full: Vec<Address>,
    pub partial: Vec<Address>,
}

/// Verification status of one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckContractAddress {
    pub address: Address,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub chain_ids: Vec<String>,
}
