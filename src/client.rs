//! HTTP client for the rockets API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};

/// Per-request settings for [`ApiClient::request`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Defaults to `GET`.
    pub method: Method,
    /// Replace default headers of the same name.
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// JSON request wrapper bound to one API base URL.
///
/// No retries, timeouts or caching happen here; callers decide what a failed
/// request means.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(client: Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.api_token.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request against `{base_url}{endpoint}` and decode the JSON body.
    ///
    /// The body is decoded straight into `T`; its shape is the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Transport`] with the status and raw body text when the
    ///   API answers with a non-success status.
    /// - [`CatalogError::Network`] when no response arrives.
    /// - [`CatalogError::Decode`] when a successful body is not the expected JSON.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let headers = self.merge_headers(options.headers);

        tracing::debug!("{} {}", options.method, url);

        let mut req = self.client.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            req = req.json(body);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Failed to read error body from {}: {}", url, e);
                    String::new()
                }
            };
            tracing::debug!("{} answered {}", url, status);
            return Err(CatalogError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(CatalogError::Decode)
    }

    /// `GET` with default options.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(endpoint, RequestOptions::default()).await
    }

    fn merge_headers(&self, overrides: HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => tracing::warn!("Ignoring API token that is not a valid header: {}", e),
            }
        }

        // Caller headers replace defaults with the same name.
        headers.extend(overrides);
        headers
    }
}
