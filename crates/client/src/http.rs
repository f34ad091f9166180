//! The transport seam between the dispatcher and the network.

use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

/// Sends a fully built request and returns the fully read response.
///
/// The dispatcher owns everything PrintNode specific (headers, JSON, error
/// mapping); implementations only move bytes.
#[async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// [`HttpSend`] backed by `reqwest`, with reqwest's default pooling and no timeout.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpSend {
    client: reqwest::Client,
}

impl ReqwestHttpSend {
    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, timeouts).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = reqwest::Request::try_from(req)?;
        let resp = self.client.execute(req).await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }
}
