//! # hubspot-client
//!
//! Core HTTP client infrastructure for HubSpot APIs.
//!
//! This crate provides:
//! - Scalar wrappers (`HsStr`, `HsBool`, `HsInt`, `HsTime`) that tolerate
//!   HubSpot's mixed JSON encodings
//! - The [`Authenticator`] seam with API key and private app token strategies
//! - A transport that resolves paths, authenticates, and decodes responses
//! - Structured error decoding, including details embedded in error messages
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (hubspot-crm, hubspot-marketing)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HubSpotClient                            │
//! │  - Base URL resolution                                      │
//! │  - Typed JSON methods (get, post, patch, ...)               │
//! │  - One Authenticator applied to every request               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HsHttpClient                             │
//! │  - Raw HTTP, compression, connection pooling                │
//! │  - Error status → ApiError decoding                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use hubspot_client::HubSpotClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hubspot_client::Error> {
//!     let client = HubSpotClient::builder()
//!         .private_app_token(std::env::var("HUBSPOT_PRIVATE_APP_TOKEN").unwrap())
//!         .build()?;
//!
//!     let contact: serde_json::Value = client
//!         .get("crm/v3/objects/contacts/51")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod api_error;
mod auth;
mod client;
mod config;
mod error;
mod hubspot_client;
mod query;
mod request;
mod resource;
mod response;
mod types;

pub use api_error::{
    decode_api_error, is_error_status, mine_error_details, ApiError, ErrContext, ErrDetail,
    ErrLinks, INVALID_EMAIL_ERROR, UNKNOWN_DETAIL_ERROR, VALIDATION_ERROR,
};
pub use auth::{ApiKey, Authenticator, PrivateAppToken, API_KEY_PARAM};
pub use client::HsHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use hubspot_client::{parse_base_url, HubSpotClient, HubSpotClientBuilder};
pub use query::RequestQueryOption;
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use resource::{
    AssociationResult, AssociationResults, Associations, Paging, PagingNext, RequestPayload,
    ResponseResource,
};
pub use response::{Response, ResponseExt};
pub use types::{HsBool, HsInt, HsStr, HsTime, HsValueExt};

/// Re-exported so implementors of [`Authenticator`] need no direct dependency.
pub use async_trait::async_trait;

/// Default HubSpot API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com/";

/// Default HubSpot API version.
pub const DEFAULT_API_VERSION: &str = "v3";

/// Content type for JSON request bodies.
pub const MIME_JSON: &str = "application/json";

/// Content type for multipart request bodies.
pub const MIME_FORM_DATA: &str = "multipart/form-data";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("hubspot-api-rs/", env!("CARGO_PKG_VERSION"));
