//! HTTP client module
//!
//! Provides the request dispatcher with retry and rate limiting.
//!
//! # Features
//!
//! - **Automatic Retries**: Bounded retries with a constant delay
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Pluggable Transport**: reqwest by default, replaceable for tests or proxies
//! - **Base Path Prefixing**: rendered paths are appended to the base URL path

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{ApiResponse, BodyStream, ReqwestTransport, Transport};
