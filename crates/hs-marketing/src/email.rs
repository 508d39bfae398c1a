//! Marketing email statistics.
//!
//! HubSpot still serves these from the v1 API, so the path is fixed rather
//! than following the client's API version.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use hubspot_client::{HubSpotClient, RequestQueryOption, Result};

/// Path of the statistics collection.
pub const STATISTICS_PATH: &str = "marketing-emails/v1/emails/with-statistics";

/// Offset paging for the v1 list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkRequestQueryOption {
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// A page of v1 results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResponse<T> {
    #[serde(default)]
    pub limit: i64,
    #[serde(default = "Vec::new")]
    pub objects: Vec<T>,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub total_count: i64,
}

/// Delivery counters of a sent email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counters {
    pub bounce: i64,
    pub click: i64,
    pub contactslost: i64,
    pub delivered: i64,
    pub dropped: i64,
    pub hardbounced: i64,
    pub notsent: i64,
    pub open: i64,
    pub pending: i64,
    pub selected: i64,
    pub sent: i64,
    pub softbounced: i64,
    pub spamreport: i64,
    pub suppressed: i64,
    pub unsubscribed: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ratios {
    pub bounceratio: f64,
    pub clickratio: f64,
    pub clickthroughratio: f64,
    pub contactslostratio: f64,
    pub deliveredratio: f64,
    pub hardbounceratio: f64,
    pub notsentratio: f64,
    pub openratio: f64,
    pub pendingratio: f64,
    pub softbounceratio: f64,
    pub spamreportratio: f64,
    pub unsubscribedratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceCounts {
    pub computer: i64,
    pub mobile: i64,
    pub unknown: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceBreakdown {
    pub click_device_type: DeviceCounts,
    pub open_device_type: DeviceCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub counters: Counters,
    pub device_breakdown: DeviceBreakdown,
    pub failed_to_load: bool,
    pub qualifier_stats: Map<String, Value>,
    pub ratios: Ratios,
}

/// An email together with its send statistics.
///
/// Only the commonly used fields are typed; the rest of the v1 payload is kept
/// in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub ab: bool,
    pub archived: bool,
    pub author_name: String,
    pub created: i64,
    pub current_state: String,
    pub email_type: String,
    pub from_name: String,
    pub is_published: bool,
    #[serde(rename = "portalID")]
    pub portal_id: i64,
    pub publish_date: i64,
    pub reply_to: String,
    pub state: String,
    pub stats: Stats,
    pub updated: i64,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Client for marketing email statistics.
#[derive(Debug, Clone)]
pub struct MarketingEmail {
    client: HubSpotClient,
}

impl MarketingEmail {
    pub fn new(client: HubSpotClient) -> Self {
        Self { client }
    }

    /// Statistics for one email, decoded into the caller's type
    /// (usually [`Statistics`]).
    #[instrument(skip(self, option))]
    pub async fn get_statistics<T: DeserializeOwned>(
        &self,
        email_id: i64,
        option: Option<&RequestQueryOption>,
    ) -> Result<T> {
        let path = format!("{STATISTICS_PATH}/{email_id}");
        let default = RequestQueryOption::default();
        self.client
            .get_with_options(&path, option.unwrap_or(&default))
            .await
    }

    /// A page of email statistics, decoded into the caller's type
    /// (usually `BulkResponse<Statistics>`).
    #[instrument(skip(self, option))]
    pub async fn list_statistics<T: DeserializeOwned>(
        &self,
        option: Option<&BulkRequestQueryOption>,
    ) -> Result<T> {
        let default = BulkRequestQueryOption::default();
        self.client
            .get_with_options(STATISTICS_PATH, option.unwrap_or(&default))
            .await
    }
}
