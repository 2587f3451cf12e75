/*
[INPUT]:  API key, base URL, optional timeouts or a caller-supplied reqwest client
[OUTPUT]: Authenticated JSON round trips against the CES API
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::future::Future;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::http::{CesError, Result};

/// Public CES endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.cryptoexchangestandard.com";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "CES_API_KEY";

/// HTTP client configuration
///
/// Timeouts are unset by default; deadlines are expected to come from the
/// caller, either by dropping the call or through [`cancellable`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Main HTTP client for the CES API
///
/// Immutable once built; clone it freely to share across tasks.
#[derive(Debug, Clone)]
pub struct CesClient {
    http_client: Client,
    base_url: Url,
    api_key: HeaderValue,
}

impl CesClient {
    /// Create a client for the public endpoint with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        Self::with_http_client(api_key, config, http_client)
    }

    /// Create a client on top of an existing reqwest client.
    ///
    /// Timeouts in `config` are ignored; the supplied client's own settings apply.
    pub fn with_http_client(
        api_key: impl Into<String>,
        config: ClientConfig,
        http_client: Client,
    ) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&api_key.into())
            .map_err(|err| CesError::Config(format!("invalid API key: {err}")))?;
        api_key.set_sensitive(true);

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CesError::Config(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL followed by `endpoint`, keeping any path prefix of the base
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{endpoint}"))?)
    }

    /// Build an authenticated request builder for `endpoint`
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, self.api_key.clone()))
    }

    /// Perform one round trip and return the status with the raw body.
    ///
    /// A JSON content type is declared whenever `body` is present.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<(StatusCode, String)> {
        let mut builder = self.request(method.clone(), endpoint)?;
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        debug!(method = %method, endpoint, "sending CES request");
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "received CES response");

        Ok((status, text))
    }

    /// Perform one round trip and decode a 200 body as `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let (status, text) = self.send(method, endpoint, body).await?;
        if status != StatusCode::OK {
            return Err(CesError::api_error(status, text));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Run a client call until it completes or `token` is cancelled.
///
/// On cancellation the in-flight request is dropped and
/// [`CesError::Cancelled`] is returned.
pub async fn cancellable<T, F>(token: &CancellationToken, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(CesError::Cancelled),
        result = call => result,
    }
}
