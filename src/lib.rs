// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Sourcify Client
//!
//! A typed async client for the [Sourcify](https://sourcify.dev) contract
//! verification service: given a chain id and a contract address, fetch
//! verification status, ABI, source files and compiler metadata.
//!
//! ## Features
//!
//! - **Endpoint Catalog**: Every server route as an immutable descriptor
//! - **Retries**: Bounded, constant-delay retries on failures and non-200s
//! - **Rate Limiting**: Optional token bucket shared by all calls on a client
//! - **Tolerant Decoding**: Absorbs the known variations in response shapes
//! - **Structured Errors**: Server error bodies surface as typed errors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sourcify::{HttpClient, MatchType, Result};
//! use alloy_primitives::address;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = HttpClient::new()?;
//!
//!     if client.get_health().await? {
//!         let deposit = address!("00000000219ab540356cBB839Cbe05303d7705Fa");
//!         let metadata = client.get_contract_metadata(1, deposit, MatchType::Full).await?;
//!         println!("compiled with {}", metadata.compiler.version);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 Operations (impl HttpClient)                 │
//! │  get_health  get_chains  get_contract  get_contract_files …  │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────────┬────────────────┐
//! │   Endpoint   │             HTTP             │     Decode     │
//! ├──────────────┼──────────────────────────────┼────────────────┤
//! │ Catalog      │ Dispatcher                   │ JSON           │
//! │ Verify       │ Retry                        │ Envelopes      │
//! │ Render       │ Rate Limit                   │ Check records  │
//! │              │ Transport                    │ Server errors  │
//! └──────────────┴──────────────────────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Endpoint descriptors, validation and rendering
pub mod endpoint;

/// HTTP client with retry and rate limiting
pub mod http;

/// Response decoders
pub mod decode;

/// Response models
pub mod models;

/// Typed API operations
pub mod api;

/// File-based client settings
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{ContractListOptions, SortOrder};
pub use config::ClientSettings;
pub use endpoint::{Endpoint, EndpointCall, Param, ParamKind, ParamValue};
pub use http::{HttpClient, HttpClientConfig, RateLimiterConfig, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
