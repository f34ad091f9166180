//! HTTP client for the PrintNode API.

pub mod accounts;
pub mod computers;
pub mod printers;
pub mod printjobs;
pub mod scales;
pub mod states;

use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use printnode_core::{is_delegation_header, Delegation, IdSet};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::credentials::{basic_auth_value, resolve_api_key};
use crate::delegation::{DelegationContext, DelegationGuard};
use crate::error::{ClientError, Result};
use crate::http::{HttpSend, ReqwestHttpSend};
use crate::options::RequestOptions;

/// Header that selects the API version.
pub const ACCEPT_VERSION: &str = "Accept-Version";
/// Pins the major API version; any compatible minor/patch is accepted.
pub const API_VERSION: &str = "~3";

/// Extra request headers, as `(name, value)` pairs.
pub type Headers<'a> = &'a [(&'a str, String)];

/// HTTP client for the PrintNode API.
///
/// Clones share the default API key, the delegation context and the transport.
#[derive(Debug, Clone)]
pub struct PrintNodeClient {
    http: Arc<dyn HttpSend>,
    base_url: String,
    api_key: Arc<RwLock<Option<String>>>,
    delegation: DelegationContext,
}

impl PrintNodeClient {
    /// Create a new client that talks to the network through `reqwest`.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestHttpSend::default())
    }

    /// Create from environment (`PRINTNODE_API_KEY`, `PRINTNODE_BASE_URL`).
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: impl HttpSend) -> Self {
        Self {
            http: Arc::new(transport),
            base_url: config.base_url,
            api_key: Arc::new(RwLock::new(config.api_key)),
            delegation: DelegationContext::new(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the default API key. Takes effect for requests built afterwards.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        *self.api_key.write().unwrap_or_else(PoisonError::into_inner) = Some(api_key.into());
    }

    /// The ambient delegation context shared by this client and its clones.
    pub fn delegation(&self) -> &DelegationContext {
        &self.delegation
    }

    /// Act on behalf of a child account until the guard is dropped.
    pub fn delegate(&self, delegation: Delegation) -> DelegationGuard {
        self.delegation.activate(delegation)
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn resolve_api_key(&self, options: &RequestOptions) -> Result<String> {
        let default = self
            .api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        resolve_api_key(options.api_key.as_deref(), default.as_deref()).map(str::to_owned)
    }

    /// Build the request, send it and return the body text of a 2xx response.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        options: &RequestOptions,
        extra_headers: Headers<'_>,
    ) -> Result<String> {
        let api_key = self.resolve_api_key(options)?;

        let mut builder = http::Request::builder()
            .method(method.clone())
            .uri(self.url(path))
            .header(AUTHORIZATION, basic_auth_value(&api_key))
            .header(ACCEPT_VERSION, API_VERSION);

        // A caller-supplied child account header replaces any other identity.
        let delegation = if extra_headers
            .iter()
            .any(|(name, _)| is_delegation_header(name))
        {
            None
        } else {
            options
                .delegation
                .clone()
                .or_else(|| self.delegation.current())
        };
        if let Some(delegation) = &delegation {
            builder = builder.header(delegation.header_name(), delegation.header_value());
        }
        for (name, value) in extra_headers {
            builder = builder.header(*name, value.as_str());
        }

        let body = match body {
            Some(json) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Bytes::from(json)
            }
            None => Bytes::new(),
        };
        let request = builder.body(body)?;

        tracing::debug!(%method, path, delegated = delegation.is_some(), "sending request");
        let response = self.http.http_send(request).await?;
        let status = response.status();
        let text = String::from_utf8_lossy(response.body()).into_owned();
        tracing::debug!(%method, path, status = status.as_u16(), "received response");

        if status.is_success() {
            Ok(text)
        } else {
            let error = ClientError::from_response(status.as_u16(), &text);
            tracing::warn!(%method, path, error = %error, "request failed");
            Err(error)
        }
    }

    /// GET `path` and return the body.
    pub async fn get(&self, path: &str, options: &RequestOptions) -> Result<String> {
        self.dispatch(Method::GET, path, None, options, &[]).await
    }

    /// POST `body` as JSON to `path` and return the response body.
    pub async fn post<B>(&self, path: &str, body: &B, options: &RequestOptions) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let json = to_json_without_nulls(body)?;
        self.dispatch(Method::POST, path, Some(json), options, &[])
            .await
    }

    /// PATCH `body` as JSON to `path` with extra headers and return the response body.
    pub async fn patch<B>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
        extra_headers: Headers<'_>,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let json = to_json_without_nulls(body)?;
        self.dispatch(Method::PATCH, path, Some(json), options, extra_headers)
            .await
    }

    /// DELETE `path` with extra headers and return the response body.
    pub async fn delete(
        &self,
        path: &str,
        options: &RequestOptions,
        extra_headers: Headers<'_>,
    ) -> Result<String> {
        self.dispatch(Method::DELETE, path, None, options, extra_headers)
            .await
    }

    /// GET `path` and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, options: &RequestOptions) -> Result<T> {
        let body = self.get(path, options).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a single-ID path. The API answers with an array; an empty one means not found.
    async fn get_first<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Option<T>> {
        let items: Vec<T> = self.get_json(path, options).await?;
        Ok(items.into_iter().next())
    }

    /// GET `{collection}/{id,id,...}{suffix}`. An empty set returns nothing without a request.
    async fn get_set<T: DeserializeOwned>(
        &self,
        collection: &str,
        ids: &[i64],
        suffix: &str,
        options: &RequestOptions,
    ) -> Result<Vec<T>> {
        let set = IdSet::from(ids);
        if set.is_empty() {
            return Ok(Vec::new());
        }
        self.get_json(&format!("{collection}/{set}{suffix}"), options)
            .await
    }
}

/// Serializes `body` as JSON, dropping object fields whose value is `null`.
fn to_json_without_nulls<B>(body: &B) -> Result<Vec<u8>>
where
    B: Serialize + ?Sized,
{
    let mut value = serde_json::to_value(body)?;
    strip_nulls(&mut value);
    Ok(serde_json::to_vec(&value)?)
}

fn strip_nulls(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
