//! Connection management for the match authority
//!
//! This module provides the raw JSON-over-HTTP plumbing the typed
//! [`Client`](crate::client::Client) is built on.

use std::time::Duration;

use eyre::Result;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::errors::ClientError;

/// Per-request timeout applied unless the caller supplies its own client.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy)]
enum RequestType {
    Get,
    Post,
}

/// Base URL plus a pooled HTTP client.
#[derive(Clone, Debug)]
pub struct ConnectionInfo {
    pub api_url: Url,
    pub client: Client,
}

impl ConnectionInfo {
    pub fn new(api_url: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS))
            .build()?;

        Ok(Self::with_client(api_url, client))
    }

    pub fn with_client(mut api_url: Url, client: Client) -> Self {
        // request paths are joined relative to the base, which needs a trailing slash
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        Self { api_url, client }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(RequestType::Get, path, None::<()>).await?;

        response.json::<T>().await.map_err(Into::into)
    }

    pub async fn post<I, O>(&self, path: &str, body: I) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let response = self.request(RequestType::Post, path, Some(body)).await?;

        response.json::<O>().await.map_err(Into::into)
    }

    /// Posts `body` and discards whatever the authority answers with, for
    /// endpoints that reply with an empty `200`/`201`.
    pub async fn post_unit<I: Serialize>(&self, path: &str, body: I) -> Result<()> {
        let _response = self.request(RequestType::Post, path, Some(body)).await?;

        Ok(())
    }

    async fn request<I>(&self, req_type: RequestType, path: &str, body: Option<I>) -> Result<Response>
    where
        I: Serialize,
    {
        let url = self.api_url.join(path)?;

        debug!(?req_type, %url, "Sending authority request");

        let builder = match req_type {
            RequestType::Get => self.client.get(url),
            RequestType::Post => self.client.post(url).json(&body),
        };

        let response = builder.send().await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(ClientError {
                status_code: status.as_u16(),
                message,
            }
            .into());
        }

        Ok(response)
    }
}
