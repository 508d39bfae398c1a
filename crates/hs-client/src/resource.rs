//! Envelope types shared by every CRM object service.

use serde::{Deserialize, Serialize};

use crate::types::HsTime;

/// Request body wrapping an object's properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload<P> {
    pub properties: P,
}

impl<P> RequestPayload<P> {
    pub fn new(properties: P) -> Self {
        Self { properties }
    }
}

/// A CRM object as returned by HubSpot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseResource<P> {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associations: Option<Associations>,
    #[serde(default)]
    pub properties: P,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<HsTime>,
}

/// Associated object ids, grouped by object type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Associations {
    pub contacts: AssociationResults,
    pub deals: AssociationResults,
    pub companies: AssociationResults,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociationResults {
    pub results: Vec<AssociationResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociationResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Paging cursor returned by list and search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    pub next: Option<PagingNext>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingNext {
    pub after: String,
    pub link: String,
}
