//! HTTP request building.

use std::collections::HashMap;

use bytes::Bytes;
use serde::Serialize;

use crate::error::Result;
use crate::{MIME_FORM_DATA, MIME_JSON};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder for HTTP requests.
///
/// Authenticators receive the builder before dispatch and may add
/// query parameters, headers, or a bearer token.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) bearer_token: Option<String>,
}

/// Request body content.
#[derive(Debug)]
pub enum RequestBody {
    Json(serde_json::Value),
    Bytes(Bytes),
    Form(Vec<(String, String)>),
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            bearer_token: None,
        }
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query parameters appended so far, in order.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Append a query parameter.
    ///
    /// Parameters are appended after any query already present in the URL.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Append every field of a serializable options struct as query parameters.
    pub fn query_struct<Q: Serialize + ?Sized>(mut self, options: &Q) -> Result<Self> {
        let encoded = serde_urlencoded::to_string(options)?;
        self.query_params
            .extend(url::form_urlencoded::parse(encoded.as_bytes()).into_owned());
        Ok(self)
    }

    /// Set JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        self.body = Some(RequestBody::Json(value));
        self.headers
            .insert("Content-Type".to_string(), MIME_JSON.to_string());
        Ok(self)
    }

    /// Set a pre-encoded multipart body.
    pub fn multipart(mut self, boundary: &str, body: impl Into<Bytes>) -> Self {
        self.body = Some(RequestBody::Bytes(body.into()));
        self.headers.insert(
            "Content-Type".to_string(),
            format!("{MIME_FORM_DATA}; boundary={boundary}"),
        );
        self
    }

    /// Set form body.
    pub fn form(mut self, data: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(data));
        self.headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Paging {
        limit: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        after: Option<String>,
    }

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://api.hubapi.com/crm/v3/objects/contacts")
            .bearer_auth("token123")
            .header("X-Custom", "value")
            .query("archived", "true");

        assert_eq!(req.method(), RequestMethod::Get);
        assert_eq!(req.url(), "https://api.hubapi.com/crm/v3/objects/contacts");
        assert_eq!(req.bearer_token(), Some("token123"));
        assert_eq!(req.header_value("X-Custom"), Some("value"));
        assert_eq!(req.query_params().len(), 1);
    }

    #[test]
    fn test_query_struct_appends_in_order() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com")
            .query("hapikey", "k")
            .query_struct(&Paging {
                limit: 10,
                after: Some("abc def".to_string()),
            })
            .unwrap();

        assert_eq!(
            req.query_params(),
            &[
                ("hapikey".to_string(), "k".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("after".to_string(), "abc def".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_body() {
        let data = serde_json::json!({"properties": {"email": "a@example.com"}});
        let req = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .json(&data)
            .unwrap();

        assert!(matches!(req.body, Some(RequestBody::Json(_))));
        assert_eq!(req.header_value("Content-Type"), Some(MIME_JSON));
    }

    #[test]
    fn test_multipart_body() {
        let req = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .header("Content-Type", MIME_JSON)
            .multipart("xyz", Bytes::from_static(b"--xyz--\r\n"));

        assert!(matches!(req.body, Some(RequestBody::Bytes(_))));
        assert_eq!(
            req.header_value("Content-Type"),
            Some("multipart/form-data; boundary=xyz")
        );
    }
}
