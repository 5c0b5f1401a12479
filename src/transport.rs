//! HTTP transport
//!
//! The controller talks to the REST endpoint through the [`Transport`]
//! trait, so tests drive it with a scripted in-memory implementation and
//! production uses [`HttpTransport`] over `reqwest`.

use async_trait::async_trait;
use serde_json::Value as Json;

use crate::error::ApiError;
use crate::error::Error;

/// The external HTTP collaborator: four JSON calls, failure by `Err`.
///
/// All bodies and responses are `application/json` UTF-8. A non-success
/// status must surface as an error; the controllers upstream never catch
/// transport errors, they propagate to the dispatching caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET the URL, returning the parsed JSON body.
    async fn get(&self, url: &str) -> Result<Json, Error>;

    /// POST a JSON body, returning the parsed JSON response.
    async fn post(&self, url: &str, body: &Json) -> Result<Json, Error>;

    /// PUT a JSON body, returning the parsed JSON response.
    async fn put(&self, url: &str, body: &Json) -> Result<Json, Error>;

    /// DELETE the URL, returning the parsed JSON response.
    async fn delete(&self, url: &str) -> Result<Json, Error>;
}

/// [`Transport`] implementation over a shared `reqwest` client.
///
/// Cheap to clone; no retry policy anywhere — every failure is terminal for
/// its action and retried only by a fresh user-initiated one.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport over a caller-configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn into_json(response: reqwest::Response) -> Result<Json, Error> {
        if response.status().is_success() {
            let body = response.text().await.map_err(ApiError::from)?;
            serde_json::from_str(&body)
                .map_err(|e| ApiError::parse(e.to_string(), body).into())
        } else {
            let status = response.status().as_u16();
            let message = response
                .status()
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| response.status().to_string());
            Err(ApiError::http(status, message).into())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Json, Error> {
        let response = self.client.get(url).send().await.map_err(ApiError::from)?;
        Self::into_json(response).await
    }

    async fn post(&self, url: &str, body: &Json) -> Result<Json, Error> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::into_json(response).await
    }

    async fn put(&self, url: &str, body: &Json) -> Result<Json, Error> {
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::into_json(response).await
    }

    async fn delete(&self, url: &str) -> Result<Json, Error> {
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::into_json(response).await
    }
}
