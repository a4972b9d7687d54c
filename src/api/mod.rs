//! Typed Sourcify operations
//!
//! Operations are inherent async methods on [`HttpClient`](crate::HttpClient):
//!
//! ```rust,ignore
//! use sourcify::{HttpClient, MatchType};
//! use alloy_primitives::address;
//!
//! let client = HttpClient::new()?;
//! let tree = client
//!     .get_contract_files(1, address!("00000000219ab540356cBB839Cbe05303d7705Fa"), MatchType::Any)
//!     .await?;
//! ```

mod operations;
mod types;

pub use operations::METADATA_FILE;
pub use types::{ContractListOptions, SortOrder};
