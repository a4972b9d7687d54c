//! Common types used throughout the Sourcify client
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
///
/// The API is read-only, so GET is the only verb an endpoint can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::GET => f.write_str("GET"),
        }
    }
}

// ============================================================================
// Match Type
// ============================================================================

/// How strictly a contract must match its verified sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Full match: metadata hash and bytecode match exactly
    #[default]
    Full,
    /// Partial match: bytecode matches, metadata differs
    Partial,
    /// Either a full or a partial match
    Any,
}

impl MatchType {
    /// Wire name of the match type
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Full => "full",
            MatchType::Partial => "partial",
            MatchType::Any => "any",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "full_match" => Ok(MatchType::Full),
            "partial" | "partial_match" => Ok(MatchType::Partial),
            "any" => Ok(MatchType::Any),
            _ => Err(Error::InvalidMatchType {
                match_type: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_conversion() {
        let get: reqwest::Method = Method::GET.into();
        assert_eq!(reqwest::Method::GET, get);
        assert_eq!(Method::default(), Method::GET);
        assert_eq!(Method::GET.to_string(), "GET");
    }

    #[test]
    fn test_match_type_parse() {
        assert_eq!("full".parse::<MatchType>().unwrap(), MatchType::Full);
        assert_eq!("Partial".parse::<MatchType>().unwrap(), MatchType::Partial);
        assert_eq!("partial_match".parse::<MatchType>().unwrap(), MatchType::Partial);
        assert_eq!(" any ".parse::<MatchType>().unwrap(), MatchType::Any);

        let err = "invalid".parse::<MatchType>().unwrap_err();
        assert!(matches!(err, Error::InvalidMatchType { .. }));
    }

    #[test]
    fn test_match_type_serde() {
        let mt: MatchType = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(mt, MatchType::Partial);

        let json = serde_json::to_string(&MatchType::Any).unwrap();
        assert_eq!(json, "\"any\"");
    }
}
