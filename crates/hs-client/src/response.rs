//! HTTP response handling with HubSpot error decoding.

use serde::de::DeserializeOwned;

use crate::api_error::{decode_api_error, is_error_status};
use crate::error::{Error, Result};

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    ///
    /// An empty body decodes as JSON `null`, so `()` and `Option<T>`
    /// accept `204 No Content`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.bytes().await?;
        if body.is_empty() {
            return serde_json::from_slice(b"null").map_err(Into::into);
        }
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

/// Extension trait for processing HubSpot API responses.
pub trait ResponseExt {
    /// Convert an error status into a decoded [`ApiError`](crate::ApiError).
    fn check_hubspot_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_hubspot_error(self) -> Result<Response> {
        let status = self.status();

        if !is_error_status(status) {
            return Ok(self);
        }

        let body = self.bytes().await.unwrap_or_default();
        Err(Error::api(decode_api_error(status, &body)))
    }
}
