//! Tests for response models

use super::*;
use alloy_primitives::address;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Metadata Tests
// ============================================================================

#[test]
fn test_metadata_deserialize() {
    let body = json!({
        "compiler": { "version": "0.8.19+commit.7dd6d404" },
        "language": "Solidity",
        "output": {
            "abi": [{
                "inputs": [{ "internalType": "address", "name": "owner", "type": "address" }],
                "name": "balanceOf",
                "outputs": [{ "internalType": "uint256", "name": "", "type": "uint256" }],
                "stateMutability": "view",
                "type": "function"
            }],
            "devdoc": { "kind": "dev", "methods": {}, "version": 1 },
            "userdoc": { "kind": "user", "methods": {}, "version": 1 }
        },
        "settings": {
            "compilationTarget": { "contracts/Token.sol": "Token" },
            "evmVersion": "paris",
            "libraries": {},
            "metadata": { "bytecodeHash": "ipfs" },
            "optimizer": { "enabled": true, "runs": 200 },
            "remappings": []
        },
        "sources": {
            "contracts/Token.sol": {
                "keccak256": "0x1234",
                "license": "MIT",
                "urls": ["dweb:/ipfs/Qm"]
            }
        },
        "version": 1
    });

    let metadata: Metadata = serde_json::from_value(body).unwrap();

    assert_eq!(metadata.compiler.version, "0.8.19+commit.7dd6d404");
    assert_eq!(metadata.output.abi.len(), 1);
    let entry = &metadata.output.abi[0];
    assert_eq!(entry.name, "balanceOf");
    assert_eq!(entry.kind, "function");
    assert_eq!(entry.inputs[0].kind, "address");
    assert!(metadata.settings.optimizer.enabled);
    assert_eq!(metadata.settings.optimizer.runs, 200);
    assert_eq!(metadata.sources["contracts/Token.sol"].license, "MIT");
    assert_eq!(
        metadata.compilation_target(),
        Some("contracts/Token.sol:Token".to_string())
    );
}

#[test]
fn test_metadata_tolerates_missing_sections() {
    let metadata: Metadata = serde_json::from_value(json!({ "language": "Vyper" })).unwrap();
    assert_eq!(metadata.language, "Vyper");
    assert!(metadata.output.abi.is_empty());
    assert_eq!(metadata.compilation_target(), None);
}

#[test]
fn test_abi_event_parameters() {
    let entry: AbiEntry = serde_json::from_value(json!({
        "anonymous": false,
        "inputs": [
            { "indexed": true, "internalType": "address", "name": "from", "type": "address" },
            { "indexed": false, "internalType": "uint256", "name": "value", "type": "uint256" }
        ],
        "name": "Transfer",
        "type": "event"
    }))
    .unwrap();

    assert_eq!(entry.kind, "event");
    assert_eq!(entry.inputs[0].indexed, Some(true));
    assert_eq!(entry.inputs[1].indexed, Some(false));
    assert!(entry.outputs.is_empty());
}

// ============================================================================
// Contract Tests
// ============================================================================

#[test]
fn test_contract_response_partial_fields() {
    let body = json!({
        "address": "0x00000000219ab540356cBB839Cbe05303d7705Fa",
        "chainId": "1",
        "creationMatch": "match",
        "match": "exact_match",
        "matchId": "3",
        "runtimeMatch": "exact_match",
        "verifiedAt": "2024-07-24T12:00:00Z",
        "deployment": {
            "transactionHash": "0xabc",
            "blockNumber": "11052984",
            "transactionIndex": "4",
            "deployer": "0xb20a608c624Ca5003905aA834De7156C68b2E1d0"
        },
        "proxyResolution": { "isProxy": false, "implementations": [] }
    });

    let contract: ContractResponse = serde_json::from_value(body).unwrap();

    assert_eq!(contract.chain_id, "1");
    assert_eq!(contract.match_status.as_deref(), Some("exact_match"));
    assert_eq!(contract.match_id, "3");
    assert_eq!(contract.deployment.block_number, "11052984");
    assert!(!contract.proxy_resolution.is_proxy);
    assert_eq!(
        contract.verified_at,
        Some(Utc.with_ymd_and_hms(2024, 7, 24, 12, 0, 0).unwrap())
    );
    assert!(contract.abi.is_empty());
    assert!(contract.storage_layout.is_none());
}

#[test]
fn test_contract_response_null_matches() {
    let contract: ContractResponse = serde_json::from_value(json!({
        "match": null,
        "creationMatch": null,
        "runtimeMatch": "match",
        "matchId": "7"
    }))
    .unwrap();

    assert_eq!(contract.match_status, None);
    assert_eq!(contract.creation_match, None);
    assert_eq!(contract.runtime_match.as_deref(), Some("match"));
}

#[test]
fn test_contracts_response() {
    let body = json!({
        "results": [
            {
                "address": "0x1F98431c8aD98523631AE4a59f267346ea31F984",
                "chainId": "1",
                "creationMatch": "exact_match",
                "match": "exact_match",
                "matchId": "100",
                "runtimeMatch": "exact_match",
                "verifiedAt": "2024-01-01T00:00:00Z"
            },
            {
                "address": "0x2F98431c8aD98523631AE4a59f267346ea31F984",
                "chainId": "1",
                "match": "match",
                "matchId": "99"
            }
        ]
    });

    let contracts: ContractsResponse = serde_json::from_value(body).unwrap();

    assert_eq!(contracts.results.len(), 2);
    assert_eq!(contracts.results[1].verified_at, None);
    assert_eq!(contracts.last_match_id(), Some("99"));
    assert_eq!(ContractsResponse::default().last_match_id(), None);
}

// ============================================================================
// Chain Tests
// ============================================================================

#[test]
fn test_chain_deserialize() {
    let body = json!({
        "name": "Ethereum Mainnet",
        "chain": "ETH",
        "rpc": ["https://rpc.example"],
        "features": [{ "name": "EIP155" }],
        "faucets": [],
        "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 },
        "infoURL": "https://ethereum.org",
        "shortName": "eth",
        "chainId": 1,
        "networkId": 1,
        "slip44": 60,
        "ens": { "registry": "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e" },
        "explorers": [{ "name": "etherscan", "url": "https://etherscan.io", "standard": "EIP3091" }],
        "supported": true,
        "monitored": false,
        "etherscanAPI": "https://api.etherscan.io/api"
    });

    let chain: Chain = serde_json::from_value(body).unwrap();

    assert_eq!(chain.chain_id, 1);
    assert_eq!(chain.native_currency.decimals, 18);
    assert_eq!(chain.info_url, "https://ethereum.org");
    assert_eq!(chain.slip44, Some(60));
    assert_eq!(chain.explorers[0].name, "etherscan");
    assert_eq!(
        chain.etherscan_api.as_deref(),
        Some("https://api.etherscan.io/api")
    );
    assert!(chain.supported);
    assert!(chain.parent.is_none());
}

#[test]
fn test_chain_parent() {
    let chain: Chain = serde_json::from_value(json!({
        "name": "Optimism",
        "chainId": 10,
        "parent": {
            "type": "L2",
            "chain": "eip155-1",
            "bridges": [{ "url": "https://app.optimism.io/bridge" }]
        }
    }))
    .unwrap();

    let parent = chain.parent.unwrap();
    assert_eq!(parent.kind, "L2");
    assert_eq!(parent.bridges.len(), 1);
}

// ============================================================================
// File Model Tests
// ============================================================================

#[test]
fn test_verified_contract_addresses() {
    let addresses: VerifiedContractAddresses = serde_json::from_value(json!({
        "full": ["0x00000000219ab540356cBB839Cbe05303d7705Fa"],
        "partial": []
    }))
    .unwrap();

    assert_eq!(
        addresses.full,
        vec![address!("00000000219ab540356cBB839Cbe05303d7705Fa")]
    );
    assert!(addresses.partial.is_empty());
}

#[test]
fn test_source_codes_lookup() {
    let sources = SourceCodes {
        status: "full".to_string(),
        files: vec![SourceCode {
            name: "Token.sol".to_string(),
            path: "/contracts/full_match/1/0x0/sources/Token.sol".to_string(),
            content: "contract Token {}".to_string(),
        }],
    };

    assert_eq!(sources.file("Token.sol").unwrap().content, "contract Token {}");
    assert!(sources.file("Missing.sol").is_none());
}
