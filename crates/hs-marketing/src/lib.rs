//! # hubspot-marketing
//!
//! HubSpot marketing and conversations APIs.
//!
//! - **Marketing email** - Statistics for sent emails (v1 API)
//! - **Transactional** - Single-send transactional email
//! - **Visitor identification** - Chat widget identification tokens
//!
//! ## Example
//!
//! ```rust,ignore
//! use hubspot_client::HubSpotClient;
//! use hubspot_marketing::{Marketing, SendSingleEmailMessage, SendSingleEmailProperties};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hubspot_client::Error> {
//!     let client = HubSpotClient::builder()
//!         .private_app_token(std::env::var("HUBSPOT_PRIVATE_APP_TOKEN").unwrap())
//!         .build()?;
//!     let marketing = Marketing::new(client);
//!
//!     let sent = marketing
//!         .transactional()
//!         .send_single_email(&SendSingleEmailProperties {
//!             email_id: "4126643121".into(),
//!             message: SendSingleEmailMessage {
//!                 to: "jdoe@example.com".into(),
//!                 ..Default::default()
//!             },
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("status: {}", sent.status);
//!
//!     Ok(())
//! }
//! ```

mod email;
mod transactional;
mod visitor;

pub use email::{
    BulkRequestQueryOption, BulkResponse, Counters, DeviceBreakdown, DeviceCounts,
    MarketingEmail, Ratios, Statistics, Stats, STATISTICS_PATH,
};
pub use transactional::{
    SendSingleEmailMessage, SendSingleEmailProperties, SendSingleEmailResponse, Transactional,
};
pub use visitor::{
    IdentificationTokenRequest, IdentificationTokenResponse, VisitorIdentification,
    IDENTIFICATION_TOKEN_PATH,
};

use hubspot_client::HubSpotClient;

/// Marketing services sharing one client.
#[derive(Debug, Clone)]
pub struct Marketing {
    email: MarketingEmail,
    transactional: Transactional,
}

impl Marketing {
    pub fn new(client: HubSpotClient) -> Self {
        Self {
            email: MarketingEmail::new(client.clone()),
            transactional: Transactional::new(client),
        }
    }

    pub fn email(&self) -> &MarketingEmail {
        &self.email
    }

    pub fn transactional(&self) -> &Transactional {
        &self.transactional
    }
}

/// Conversations services sharing one client.
#[derive(Debug, Clone)]
pub struct Conversations {
    visitor_identification: VisitorIdentification,
}

impl Conversations {
    pub fn new(client: HubSpotClient) -> Self {
        Self {
            visitor_identification: VisitorIdentification::new(client),
        }
    }

    pub fn visitor_identification(&self) -> &VisitorIdentification {
        &self.visitor_identification
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use hubspot_client::{ClientConfig, HubSpotClient};
    use wiremock::MockServer;

    pub(crate) fn client_for(server: &MockServer) -> HubSpotClient {
        HubSpotClient::builder()
            .config(ClientConfig::builder().with_tracing(false).build())
            .base_url(server.uri())
            .private_app_token("pat-test")
            .build()
            .unwrap()
    }
}
