//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: YAML settings → client → operations → typed results

use alloy_primitives::{address, Address};
use serde_json::json;
use sourcify::endpoint::catalog;
use sourcify::{
    ClientSettings, ContractListOptions, Endpoint, Error, HttpClient, HttpClientConfig, MatchType,
    Param, RateLimiterConfig,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEPOSIT: Address = address!("00000000219ab540356cBB839Cbe05303d7705Fa");

// ============================================================================
// Settings → Client
// ============================================================================

#[tokio::test]
async fn test_client_from_yaml_settings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/server/health"))
        .and(header("user-agent", "integration/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let yaml = format!(
        "base_url: {}/server\nuser_agent: integration/1.0\ntimeout_ms: 5000\n",
        mock_server.uri()
    );
    let client = ClientSettings::from_yaml_str(&yaml)
        .unwrap()
        .build_client()
        .unwrap();

    assert!(client.get_health().await.unwrap());
}

#[tokio::test]
async fn test_settings_retry_policy_applies() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/chains"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(path("/chains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Ethereum Mainnet", "chainId": 1, "supported": true }
        ])))
        .mount(&mock_server)
        .await;

    let yaml = format!(
        "base_url: {}\nretry:\n  max_retries: 1\n  delay_ms: 10\n",
        mock_server.uri()
    );
    let client = ClientSettings::from_yaml_str(&yaml)
        .unwrap()
        .build_client()
        .unwrap();

    let chains = client.get_chains().await.unwrap();
    assert_eq!(chains[0].name, "Ethereum Mainnet");
}

// ============================================================================
// Operation Flows
// ============================================================================

#[tokio::test]
async fn test_lookup_flow_check_then_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/check-by-addresses"))
        .and(query_param("chainIds", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "address": "0x00000000219ab540356cBB839Cbe05303d7705Fa",
                "status": "perfect",
                "chainIds": ["1"]
            }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(path(
        "/files/tree/1/0x00000000219ab540356cBB839Cbe05303d7705Fa",
    ))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
        "https://repo.sourcify.dev/contracts/full_match/1/0x00000000219ab540356cBB839Cbe05303d7705Fa/metadata.json",
        "https://repo.sourcify.dev/contracts/full_match/1/0x00000000219ab540356cBB839Cbe05303d7705Fa/sources/deposit_contract.sol"
    ])))
    .mount(&mock_server)
    .await;

    Mock::given(path(
        "/repository/contracts/full_match/1/0x00000000219ab540356cBB839Cbe05303d7705Fa/sources/deposit_contract.sol",
    ))
    .respond_with(ResponseTemplate::new(200).set_body_string("pragma solidity 0.6.11;"))
    .mount(&mock_server)
    .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let status = client
        .check_contract_by_addresses(&[DEPOSIT], &[1], MatchType::Full)
        .await
        .unwrap();
    assert_eq!(status[0].status, "perfect");

    let tree = client
        .get_contract_files(1, DEPOSIT, MatchType::Full)
        .await
        .unwrap();
    assert_eq!(tree.status, "unknown");

    let source_url = tree
        .files
        .iter()
        .find(|f| f.ends_with(".sol"))
        .unwrap();
    let relative = source_url.split(&DEPOSIT.to_checksum(None)).nth(1).unwrap();

    let source = client
        .get_repository_file(1, DEPOSIT, relative, MatchType::Full)
        .await
        .unwrap();
    assert_eq!(&source[..], b"pragma solidity 0.6.11;");
}

#[tokio::test]
async fn test_contract_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/v2/contracts/1"))
        .and(query_param("afterMatchId", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&mock_server)
        .await;

    Mock::given(path("/v2/contracts/1"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "address": "0x00000000219ab540356cBB839Cbe05303d7705Fa", "chainId": "1", "matchId": "1" },
                { "address": "0x1F98431c8aD98523631AE4a59f267346ea31F984", "chainId": "1", "matchId": "2" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let mut options = ContractListOptions::new().limit(2);
    let mut seen = Vec::new();
    loop {
        let page = client.get_contracts(1, &options).await.unwrap();
        let Some(last) = page.last_match_id().map(str::to_string) else {
            break;
        };
        seen.extend(page.results.into_iter().map(|r| r.match_id));
        options = options.after_match_id(last);
    }

    assert_eq!(seen, vec!["1", "2"]);
}

// ============================================================================
// Custom Endpoints
// ============================================================================

#[tokio::test]
async fn test_dispatch_endpoint_from_yaml() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/v2/verify/1/0x00000000219ab540356cBB839Cbe05303d7705Fa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isJobCompleted": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let endpoint: Endpoint = serde_yaml::from_str(
        r#"
name: Verification job
uri: /v2/verify/:chain/:address
param_kind: path
required: [":chain", ":address"]
"#,
    )
    .unwrap();

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let call = endpoint.call().set_params([
        Param::new(":chain", 1_i64),
        Param::new(":address", DEPOSIT.to_checksum(None)),
    ]);
    let body: serde_json::Value = client.dispatch(&call).await.unwrap().json().await.unwrap();

    assert_eq!(body["isJobCompleted"], true);
}

#[tokio::test]
async fn test_catalog_call_missing_parameter() {
    let client = HttpClient::new().unwrap();

    let err = client
        .dispatch(&catalog::CONTRACT_ADDRESSES.call())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingParameter { ref name } if name == ":chain"));
}

// ============================================================================
// Sharing
// ============================================================================

#[tokio::test]
async fn test_shared_client_respects_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .rate_limit(RateLimiterConfig::new(2, Duration::from_millis(200)))
        .build();
    let client = Arc::new(HttpClient::with_config(config).unwrap());

    let start = Instant::now();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_health().await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    // Burst of two, then one token per 200ms for the remaining two
    assert!(start.elapsed() >= Duration::from_millis(390));
}
