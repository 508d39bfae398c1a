//! Companies: organizations, associable with contacts and deals.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use hubspot_client::{HsBool, HsStr, HsTime, Result};

use crate::object::{ObjectKind, ObjectService};
use crate::search::{SearchOptions, SearchResponse};

/// Marker for the `companies` object type.
#[derive(Debug, Clone, Copy)]
pub struct CompanyKind;

impl ObjectKind for CompanyKind {
    const NAME: &'static str = "companies";
    const DEFAULT_FIELDS: &'static [&'static str] = DEFAULT_COMPANY_FIELDS;
    type Properties = Company;
}

/// Client for `crm/<version>/objects/companies`.
pub type CompanyService = ObjectService<CompanyKind>;

impl ObjectService<CompanyKind> {
    /// Find companies whose `domain` equals `domain`.
    #[instrument(skip(self))]
    pub async fn search_by_domain(&self, domain: &str) -> Result<SearchResponse<Company>> {
        self.search(&SearchOptions::property_equals("domain", domain))
            .await
    }

    /// Find companies whose `name` equals `name`.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, name: &str) -> Result<SearchResponse<Company>> {
        self.search(&SearchOptions::property_equals("name", name))
            .await
    }
}

/// HubSpot's built-in company properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_us: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annualrevenue: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub createdate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_company_page: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lastmodifieddate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_object_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot_owner_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<HsBool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecyclestage: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_company_page: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_last_contacted: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_last_updated: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_associated_contacts: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_associated_deals: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numberofemployees: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money_raised: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<HsStr>,
}

/// Properties requested by [`CompanyService::get`] unless overridden.
pub const DEFAULT_COMPANY_FIELDS: &[&str] = &[
    "about_us", "address", "address2", "annualrevenue", "city", "country", "createdate",
    "description", "domain", "facebook_company_page", "founded_year", "hs_lastmodifieddate",
    "hs_object_id", "hubspot_owner_id", "industry", "is_public", "lifecyclestage",
    "linkedin_company_page", "name", "notes_last_contacted", "notes_last_updated",
    "num_associated_contacts", "num_associated_deals", "numberofemployees", "phone", "state",
    "timezone", "total_money_raised", "website", "zip",];
