//! Chains known to the server (`/chains`)

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainFeature {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainNativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainEns {
    pub registry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainExplorer {
    pub name: String,
    pub url: String,
    pub standard: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainBridge {
    pub url: String,
}

/// Parent chain of an L2 or testnet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainParent {
    #[serde(rename = "type")]
    pub kind: String,
    pub chain: String,
    pub bridges: Vec<ChainBridge>,
}

/// A chain (network) registered with Sourcify
///
/// Includes supported and unsupported chains; check [`Chain::supported`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Chain {
    pub name: String,
    pub chain: String,
    pub icon: Option<String>,
    pub features: Vec<ChainFeature>,
    pub faucets: Vec<JsonValue>,
    pub native_currency: ChainNativeCurrency,
    #[serde(rename = "infoURL")]
    pub info_url: String,
    pub short_name: String,
    pub chain_id: u64,
    pub network_id: u64,
    pub slip44: Option<u64>,
    pub ens: Option<ChainEns>,
    pub explorers: Vec<ChainExplorer>,
    pub supported: bool,
    pub monitored: bool,
    pub contract_fetch_address: Option<String>,
    pub rpc: Vec<String>,
    #[serde(rename = "etherscanAPI")]
    pub etherscan_api: Option<String>,
    pub title: Option<String>,
    pub tx_regex: Option<String>,
    pub red_flags: Vec<String>,
    pub status: Option<String>,
    pub parent: Option<ChainParent>,
}
