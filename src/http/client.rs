//! HTTP dispatcher with retry and rate limiting
//!
//! Turns a rendered [`EndpointCall`] into a GET request against the
//! configured base URL and runs it through:
//! - Optional token-bucket rate limiting before every attempt
//! - A bounded, constant-delay retry loop on transport failures and non-200s
//! - Status classification so the caller always sees the final status code

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::transport::{ApiResponse, ReqwestTransport, Transport};
use crate::endpoint::{EndpointCall, RenderedUri};
use crate::error::{Error, Result};
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Public Sourcify server
pub const DEFAULT_BASE_URL: &str = "https://sourcify.dev/server";

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests; its path is kept as a prefix
    pub base_url: String,
    /// Request timeout for the default transport
    pub timeout: Duration,
    /// Number of retries after the first attempt
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub retry_delay: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string for the default transport
    pub user_agent: String,
    /// Replaces the default reqwest transport
    pub transport: Option<Arc<dyn Transport>>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 0,
            retry_delay: Duration::ZERO,
            rate_limit: None,
            user_agent: format!("sourcify-client/{}", env!("CARGO_PKG_VERSION")),
            transport: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .field("rate_limit", &self.rate_limit)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the delay between retries
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.config.retry_delay = delay;
        self
    }

    /// Set both retry knobs at once
    pub fn retry(self, max_retries: u32, delay: Duration) -> Self {
        self.max_retries(max_retries).retry_delay(delay)
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Replace the transport
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.config.transport = Some(Arc::new(transport));
        self
    }

    /// Replace the transport with a shared one
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.config.transport = Some(transport);
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client with retry and rate limiting
///
/// Configuration is read-only after construction, so one client can be
/// shared between tasks.
pub struct HttpClient {
    base_url: Url,
    config: HttpClientConfig,
    transport: Arc<dyn Transport>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let transport: Arc<dyn Transport> = match &config.transport {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(ReqwestTransport::new(config.timeout, &config.user_agent)?),
        };

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new).transpose()?;

        Ok(Self {
            base_url,
            config,
            transport,
            rate_limiter,
        })
    }

    /// Current base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Point the client at a different server
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        self.base_url = parse_base_url(url)?;
        self.config.base_url = url.to_string();
        Ok(())
    }

    /// Client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Validate, render and execute a call
    ///
    /// Validation and rendering failures return before any request is sent.
    /// On success the response status is always 200 and the body is unread.
    pub async fn dispatch(&self, call: &EndpointCall<'_>) -> Result<ApiResponse> {
        call.verify()?;
        let rendered = call.render()?;
        let url = self.build_url(&rendered);

        debug!("Dispatching {} {} ({})", call.endpoint().method, url, call.endpoint().name);
        self.execute(&url).await
    }

    /// Join a rendered path and query onto the base URL
    pub fn build_url(&self, rendered: &RenderedUri) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            rendered.path.trim_start_matches('/')
        );
        url.set_path(&path);
        url.set_query(None);
        if !rendered.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&rendered.query);
        }
        url
    }

    /// Run the retry loop for a GET to `url`
    async fn execute(&self, url: &Url) -> Result<ApiResponse> {
        let max_retries = self.config.max_retries;
        let delay = self.config.retry_delay;
        let mut attempt: u32 = 0;

        loop {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            attempt += 1;
            match self.transport.get(url).await {
                Ok(response) if response.status() == StatusCode::OK => {
                    debug!("Request succeeded: GET {} (attempt {})", url, attempt);
                    return Ok(response);
                }
                Ok(response) => {
                    let status = response.status();
                    if attempt <= max_retries {
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt,
                            max_retries + 1,
                            delay
                        );
                        drop(response);
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    let body = match response.text().await {
                        Ok(body) => body,
                        Err(e) => {
                            warn!("Failed to read {} response body: {}", status.as_u16(), e);
                            format!("failed to read response body: {e}")
                        }
                    };
                    return Err(Error::unexpected_status(status.as_u16(), body));
                }
                Err(e) => {
                    if attempt <= max_retries {
                        warn!(
                            "Transport error: {}, attempt {}/{}, retrying in {:?}",
                            e,
                            attempt,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(e);
                }
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(Error::config(format!("base URL cannot carry a path: {raw}")));
    }
    Ok(url)
}
