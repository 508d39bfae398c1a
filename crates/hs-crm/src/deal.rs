//! Deals: transactions tracked through a pipeline.

use serde::{Deserialize, Serialize};

use hubspot_client::{HsStr, HsTime};

use crate::object::{ObjectKind, ObjectService};

/// Marker for the `deals` object type.
#[derive(Debug, Clone, Copy)]
pub struct DealKind;

impl ObjectKind for DealKind {
    const NAME: &'static str = "deals";
    const DEFAULT_FIELDS: &'static [&'static str] = DEFAULT_DEAL_FIELDS;
    type Properties = Deal;
}

/// Client for `crm/<version>/objects/deals`.
pub type DealService = ObjectService<DealKind>;

/// HubSpot's built-in deal properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_home_currency: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_acv: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_arr: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_lost_reason: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_won_reason: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealname: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot_owner_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealstage: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealtype: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_forecast_amount: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_forecast_category: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_forecast_probability: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_mrr: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_next_step: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_associated_contacts: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_notes: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_contacted_notes: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_object_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot_team_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_tcv: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub createdate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closedate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_last_updated: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_last_contacted: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lastmodifieddate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_next_activity_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot_owner_assigneddate: Option<HsTime>,
}

/// Properties requested by [`DealService::get`] unless overridden.
pub const DEFAULT_DEAL_FIELDS: &[&str] = &[
    "amount", "amount_in_home_currency", "hs_acv", "hs_arr", "closed_lost_reason",
    "closed_won_reason", "description", "dealname", "hubspot_owner_id", "dealstage", "dealtype",
    "hs_forecast_amount", "hs_forecast_category", "hs_forecast_probability", "hs_mrr",
    "hs_next_step", "num_associated_contacts", "num_notes", "num_contacted_notes", "hs_object_id",
    "hubspot_owner_assigneddate", "pipeline", "hubspot_team_id", "hs_tcv", "createdate",
    "closedate", "notes_last_updated", "notes_last_contacted", "hs_lastmodifieddate",
    "notes_next_activity_date",
];
