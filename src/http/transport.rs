//! Transport seam between the dispatcher and the network
//!
//! The dispatcher only ever needs "GET this URL, give me a status and a body
//! stream". [`ReqwestTransport`] is the default; any other [`Transport`] can
//! be plugged in through the client config.

use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::stream::{self, Stream, StreamExt};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::pin::Pin;
use std::time::Duration;
use url::Url;

/// Boxed stream of body chunks
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// An HTTP response whose body has not been read yet
///
/// The body is owned by the caller. Dropping the response (on any path)
/// releases the underlying connection.
pub struct ApiResponse {
    status: StatusCode,
    body: BodyStream,
}

impl ApiResponse {
    /// Wrap a status and a body stream
    pub fn new(status: StatusCode, body: BodyStream) -> Self {
        Self { status, body }
    }

    /// Build a response from an in-memory body
    pub fn from_bytes(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let body: Bytes = body.into();
        Self::new(status, Box::pin(stream::once(async move { Ok(body) })))
    }

    /// HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Take the raw body stream
    pub fn into_stream(self) -> BodyStream {
        self.body
    }

    /// Read the whole body into memory
    pub async fn bytes(mut self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }

    /// Read the whole body as (lossy) UTF-8 text
    pub async fn text(self) -> Result<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read the whole body and decode it as JSON
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.bytes().await?;
        crate::decode::decode_json(&bytes)
    }
}

impl std::fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Something that can execute a body-less GET request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET request to `url`
    ///
    /// Network-level failures are returned as errors; any HTTP status,
    /// including error statuses, is a successful response.
    async fn get(&self, url: &Url) -> Result<ApiResponse>;
}

/// Default transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a reqwest client with the given timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Use an already configured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<ApiResponse> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.bytes_stream().map(|chunk| chunk.map_err(Error::Http));
        Ok(ApiResponse::new(status, Box::pin(body)))
    }
}
