//! # hubspot-api
//!
//! A typed HubSpot API client library for Rust.
//!
//! HubSpot encodes the same field as a number, a quoted number, an empty
//! string or `null` depending on the endpoint. The scalar wrappers in
//! [`client`] absorb those differences so resource types stay strongly typed.
//!
//! ## Security
//!
//! - API keys, tokens and client secrets are redacted in Debug output
//! - Tracing spans skip credential parameters and request bodies
//! - Error messages never carry credential values
//!
//! ## Crates
//!
//! - **hubspot-client** - Transport, authentication strategies, scalar codec, error decoding
//! - **hubspot-auth** - OAuth refresh-token flow with a cached access token
//! - **hubspot-crm** - Contacts, companies, deals, notes, tickets, schemas, properties, imports
//! - **hubspot-marketing** - Email statistics, transactional email, visitor identification
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hubspot_api::{AuthMethod, HubSpot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hubspot = HubSpot::new(AuthMethod::from_env()?)?;
//!
//!     let found = hubspot
//!         .crm()
//!         .contacts()
//!         .search_by_email("bh@example.com")
//!         .await?;
//!
//!     for contact in found.results {
//!         println!("{} {:?}", contact.id, contact.properties.firstname);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "auth")]
pub use hubspot_auth as auth;
#[cfg(feature = "client")]
pub use hubspot_client as client;
#[cfg(feature = "crm")]
pub use hubspot_crm as crm;
#[cfg(feature = "marketing")]
pub use hubspot_marketing as marketing;

#[cfg(feature = "auth")]
pub use hubspot_auth::{OAuth, OAuthConfig, OAuthTokenManager};
#[cfg(feature = "client")]
pub use hubspot_client::{
    ClientConfig, Error, ErrorKind, HsBool, HsInt, HsStr, HsTime, HubSpotClient, Result,
};
#[cfg(feature = "crm")]
pub use hubspot_crm::Crm;
#[cfg(feature = "marketing")]
pub use hubspot_marketing::{Conversations, Marketing};

#[cfg(feature = "auth")]
mod hubspot;

#[cfg(feature = "auth")]
pub use hubspot::{AuthMethod, HubSpot};
