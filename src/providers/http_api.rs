use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::RemoteError;
use crate::models::{ResourceKind, SessionToken};
use crate::traits::remote_api::RemoteApi;
use crate::utils::normalize_base_url;

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "x-pt-token";

/// HTTP/JSON client for the portfolio backend
#[derive(Clone)]
pub struct HttpRemoteApi {
    client: Client,
    base_url: String,
}

impl HttpRemoteApi {
    /// Create a new client with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, RemoteError> {
        Self::new(&config.api_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request expecting JSON back, adding the token header when
    /// there is a session
    async fn send_json(
        &self,
        request: RequestBuilder,
        token: &SessionToken,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, RemoteError> {
        let mut request = request.header("Content-Type", "application/json");
        if !token.is_empty() {
            request = request.header(TOKEN_HEADER, token.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            debug!("{} returned {}", response.url(), status);
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&body).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

fn classify(error: reqwest::Error) -> RemoteError {
    if error.is_timeout() {
        RemoteError::Timeout
    } else if error.is_decode() {
        RemoteError::Decode(error.to_string())
    } else {
        RemoteError::Transport(error)
    }
}

#[async_trait]
impl RemoteApi for HttpRemoteApi {
    async fn fetch(
        &self,
        kind: ResourceKind,
        token: &SessionToken,
    ) -> Result<serde_json::Value, RemoteError> {
        debug!("Fetching {} for session {}", kind, token);
        let request = self.client.get(self.url(kind.path()));
        self.send_json(request, token, None).await
    }

    async fn submit(
        &self,
        kind: ResourceKind,
        body: serde_json::Value,
        token: &SessionToken,
    ) -> Result<serde_json::Value, RemoteError> {
        if !kind.is_writable() {
            return Err(RemoteError::ReadOnly(kind));
        }
        debug!("Posting {} for session {}", kind, token);
        let request = self.client.post(self.url(kind.path()));
        self.send_json(request, token, Some(&body)).await
    }

    async fn health(&self) -> Result<(), RemoteError> {
        let request = self.client.get(self.url("/api/health"));
        self.send_json(request, &SessionToken::none(), None).await?;
        Ok(())
    }
}
