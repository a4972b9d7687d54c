//! Built-in endpoint catalog for the Sourcify server API
//!
//! Documentation for every route lives at <https://docs.sourcify.dev/docs/api/>.

use super::types::{Endpoint, ParamKind};
use std::sync::LazyLock;

/// Ping the server and see if it is alive and ready for requests
pub static HEALTH: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new("Show Server Status", "/health", ParamKind::Path)
        .more_info("https://docs.sourcify.dev/docs/api/health/")
});

/// Chains (networks) known to Sourcify, supported or not
pub static CHAINS: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new("Get Chains", "/chains", ParamKind::Path)
        .more_info("https://docs.sourcify.dev/docs/api/chains/")
});

/// Verification status of addresses, full matches only
pub static CHECK_BY_ADDRESSES: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new("Check By Addresses", "/check-by-addresses", ParamKind::Query)
        .more_info("https://docs.sourcify.dev/docs/api/server/check-by-addresses/")
        .required(["addresses", "chainIds"])
        .default_param("addresses", Vec::<String>::new())
        .default_param("chainIds", Vec::<i64>::new())
});

/// Verification status of addresses, full or partial matches
pub static CHECK_ALL_BY_ADDRESSES: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Check All By Addresses",
        "/check-all-by-addresses",
        ParamKind::Query,
    )
    .more_info("https://docs.sourcify.dev/docs/api/server/check-all-by-addresses/")
    .required(["addresses", "chainIds"])
    .default_param("addresses", Vec::<String>::new())
    .default_param("chainIds", Vec::<i64>::new())
});

/// Repository URLs of every file in the source tree, full matches only
pub static FILE_TREE_FULL: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Get File Tree Full Match",
        "/files/tree/:chain/:address",
        ParamKind::Path,
    )
    .more_info("https://docs.sourcify.dev/docs/api/server/get-file-tree-full/")
    .required([":chain", ":address"])
});

/// Repository URLs of every file in the source tree, full or partial matches
pub static FILE_TREE_ANY: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Get File Tree Full or Partial Match",
        "/files/tree/any/:chain/:address",
        ParamKind::Path,
    )
    .more_info("https://docs.sourcify.dev/docs/api/server/get-file-tree-all/")
    .required([":chain", ":address"])
});

/// Verified source files including metadata.json, full matches only
pub static SOURCE_FILES_FULL: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Get source files for the address full match",
        "/files/:chain/:address",
        ParamKind::Path,
    )
    .more_info("https://docs.sourcify.dev/docs/api/server/get-source-files-full/")
    .required([":chain", ":address"])
});

/// Verified source files including metadata.json, full or partial matches
pub static SOURCE_FILES_ANY: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Get source files for the address full or partial match",
        "/files/any/:chain/:address",
        ParamKind::Path,
    )
    .more_info("https://docs.sourcify.dev/docs/api/server/get-source-files-all/")
    .required([":chain", ":address"])
});

/// Verified contract addresses on a chain, grouped by match type
pub static CONTRACT_ADDRESSES: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Get verified contract addresses for the chain",
        "/files/contracts/:chain",
        ParamKind::Path,
    )
    .more_info("https://docs.sourcify.dev/docs/api/server/get-contract-addresses-all/")
    .required([":chain"])
});

/// Static repository file for a fully matched contract
pub static REPOSITORY_FILE_FULL: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Retrieve statically served files for full match contract",
        "/repository/contracts/full_match/:chain/:address/:filePath",
        ParamKind::Path,
    )
    .more_info("https://docs.sourcify.dev/docs/api/repository/get-file-static/")
    .required([":chain", ":address", ":filePath"])
});

/// Static repository file for a partially matched contract
pub static REPOSITORY_FILE_PARTIAL: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Retrieve statically served files for partial match contract",
        "/repository/contracts/partial_match/:chain/:address/:filePath",
        ParamKind::Path,
    )
    .more_info("https://docs.sourcify.dev/docs/api/repository/get-file-static/")
    .required([":chain", ":address", ":filePath"])
});

/// Single verified contract lookup (v2)
pub static CONTRACT: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "Get verified contract by chain and address",
        "/v2/contract/:chain/:address",
        ParamKind::PathAndQuery,
    )
    .more_info("https://docs.sourcify.dev/docs/api/#/Contract%20Lookup")
    .required([":chain", ":address"])
    .default_param("fields", "")
    .default_param("omit", "")
});

/// Paginated list of verified contracts on a chain (v2)
pub static CONTRACTS: LazyLock<Endpoint> = LazyLock::new(|| {
    Endpoint::new(
        "List verified contracts for the chain",
        "/v2/contracts/:chain",
        ParamKind::PathAndQuery,
    )
    .more_info("https://docs.sourcify.dev/docs/api/#/Contract%20Lookup")
    .required([":chain"])
    .default_param("sort", "")
    .default_param("afterMatchId", "")
});
