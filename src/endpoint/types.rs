//! Endpoint descriptor types

use super::render;
use crate::error::{Error, Result};
use crate::types::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Parameter Kind
// ============================================================================

/// How an endpoint's parameters are turned into a URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Parameters substitute `:name` placeholders in the path
    #[default]
    Path,
    /// Parameters become the query string
    Query,
    /// Marker-prefixed parameters fill the path, the rest become the query
    PathAndQuery,
}

impl FromStr for ParamKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "path" | "uri" => Ok(ParamKind::Path),
            "query" | "query_string" => Ok(ParamKind::Query),
            "path_and_query" | "uri_and_query_string" => Ok(ParamKind::PathAndQuery),
            _ => Err(Error::InvalidParamKind {
                kind: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Parameter Values
// ============================================================================

/// Value of a single endpoint parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    StringList(Vec<String>),
    IntegerList(Vec<i64>),
}

impl ParamValue {
    /// Name of the value's shape, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::String(_) => "string",
            ParamValue::Integer(_) => "integer",
            ParamValue::StringList(_) => "string list",
            ParamValue::IntegerList(_) => "integer list",
        }
    }

    /// Empty strings and empty lists are empty; integers never are
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::String(s) => s.is_empty(),
            ParamValue::Integer(_) => false,
            ParamValue::StringList(v) => v.is_empty(),
            ParamValue::IntegerList(v) => v.is_empty(),
        }
    }

    /// Textual form of a scalar value, `None` for lists
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            ParamValue::String(s) => Some(s.clone()),
            ParamValue::Integer(i) => Some(i.to_string()),
            ParamValue::StringList(_) | ParamValue::IntegerList(_) => None,
        }
    }

    /// Query-string form: lists are comma-joined
    pub fn to_query_value(&self) -> String {
        match self {
            ParamValue::String(s) => s.clone(),
            ParamValue::Integer(i) => i.to_string(),
            ParamValue::StringList(v) => v.join(","),
            ParamValue::IntegerList(v) => v
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::StringList(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::StringList(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<i64>> for ParamValue {
    fn from(value: Vec<i64>) -> Self {
        ParamValue::IntegerList(value)
    }
}

impl From<Vec<u64>> for ParamValue {
    fn from(value: Vec<u64>) -> Self {
        ParamValue::IntegerList(value.into_iter().map(|v| v as i64).collect())
    }
}

/// A key-value parameter pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub key: String,
    pub value: ParamValue,
}

impl Param {
    /// Create a new parameter
    pub fn new(key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// Endpoint
// ============================================================================

/// Declarative description of one API operation
///
/// Endpoints are templates. They are never mutated once built; use
/// [`Endpoint::call`] to get a call with its own parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Human label, diagnostic only
    pub name: String,
    /// HTTP verb
    #[serde(default)]
    pub method: Method,
    /// URI template with `:name` placeholders
    pub uri: String,
    /// Link to the upstream documentation
    #[serde(default)]
    pub more_info: String,
    /// Rendering strategy
    #[serde(default)]
    pub param_kind: ParamKind,
    /// Keys that must be present before dispatch, in check order
    #[serde(default)]
    pub required: Vec<String>,
    /// Default parameters copied into every call
    #[serde(default)]
    pub defaults: Vec<Param>,
}

impl Endpoint {
    /// Create a GET endpoint with no parameters
    pub fn new(name: impl Into<String>, uri: impl Into<String>, param_kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            method: Method::GET,
            uri: uri.into(),
            more_info: String::new(),
            param_kind,
            required: Vec::new(),
            defaults: Vec::new(),
        }
    }

    /// Set the documentation link
    #[must_use]
    pub fn more_info(mut self, url: impl Into<String>) -> Self {
        self.more_info = url.into();
        self
    }

    /// Set the required parameter keys
    #[must_use]
    pub fn required<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Add a default parameter
    #[must_use]
    pub fn default_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.defaults.push(Param::new(key, value));
        self
    }

    /// Start a call against this endpoint, seeded with the defaults
    pub fn call(&self) -> EndpointCall<'_> {
        EndpointCall {
            endpoint: self,
            params: self.defaults.clone(),
        }
    }
}

// ============================================================================
// Endpoint Call
// ============================================================================

/// One request against an [`Endpoint`], owning its parameters
#[derive(Debug, Clone)]
pub struct EndpointCall<'a> {
    endpoint: &'a Endpoint,
    params: Vec<Param>,
}

impl<'a> EndpointCall<'a> {
    /// The endpoint template this call targets
    pub fn endpoint(&self) -> &'a Endpoint {
        self.endpoint
    }

    /// Current parameter list
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Replace the parameter list wholesale, dropping any defaults
    #[must_use]
    pub fn set_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = Param>,
    {
        self.params = params.into_iter().collect();
        self
    }

    /// Check that every required key has a matching parameter
    ///
    /// Fails on the first missing key in declaration order. Presence is all
    /// that matters; an empty value still counts.
    pub fn verify(&self) -> Result<()> {
        for name in &self.endpoint.required {
            if !self.params.iter().any(|p| &p.key == name) {
                return Err(Error::missing_param(name.clone()));
            }
        }
        Ok(())
    }

    /// Render the path and query for this call
    pub fn render(&self) -> Result<RenderedUri> {
        render::render(self.endpoint, &self.params)
    }
}

// ============================================================================
// Rendered URI
// ============================================================================

/// Output of rendering: a path and the query pairs in declaration order
///
/// Values are kept unescaped; encoding happens when the pairs are written
/// onto a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedUri {
    /// Path with placeholders substituted
    pub path: String,
    /// Query pairs, empty values already dropped
    pub query: Vec<(String, String)>,
}

impl RenderedUri {
    /// Unescaped `?k=v&...` form of the query, or empty
    pub fn query_string(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        let fragments: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        format!("?{}", fragments.join("&"))
    }
}

impl fmt::Display for RenderedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.query_string())
    }
}
