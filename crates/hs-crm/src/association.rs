//! Association vocabulary for linking CRM objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::segment;

/// Target object type of an association.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    #[serde(rename = "contacts")]
    Contacts,
    #[serde(rename = "deals")]
    Deals,
    #[serde(rename = "company")]
    Company,
    /// A custom object type id or name defined in the portal.
    #[serde(untagged)]
    Custom(String),
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Contacts => "contacts",
            ObjectType::Deals => "deals",
            ObjectType::Company => "company",
            ObjectType::Custom(name) => name,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label of a HubSpot-defined association.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationType {
    ContactToCompany,
    ContactToDeal,
    ContactToEngagement,
    ContactToTicket,
    DealToContact,
    DealToCompany,
    DealToEngagement,
    DealToLineItem,
    DealToTicket,
    CompanyToContact,
    CompanyToDeal,
    /// An association label defined in the portal, such as a custom object link.
    #[serde(untagged)]
    Custom(String),
}

impl AssociationType {
    pub fn as_str(&self) -> &str {
        match self {
            AssociationType::ContactToCompany => "contact_to_company",
            AssociationType::ContactToDeal => "contact_to_deal",
            AssociationType::ContactToEngagement => "contact_to_engagement",
            AssociationType::ContactToTicket => "contact_to_ticket",
            AssociationType::DealToContact => "deal_to_contact",
            AssociationType::DealToCompany => "deal_to_company",
            AssociationType::DealToEngagement => "deal_to_engagement",
            AssociationType::DealToLineItem => "deal_to_line_item",
            AssociationType::DealToTicket => "deal_to_ticket",
            AssociationType::CompanyToContact => "company_to_contact",
            AssociationType::CompanyToDeal => "company_to_deal",
            AssociationType::Custom(label) => label,
        }
    }
}

impl fmt::Display for AssociationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which object an association PUT links to, and under which label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationConfig {
    pub to_object: ObjectType,
    pub to_object_id: String,
    pub kind: AssociationType,
}

impl AssociationConfig {
    pub fn new(
        to_object: ObjectType,
        to_object_id: impl Into<String>,
        kind: AssociationType,
    ) -> Self {
        Self {
            to_object,
            to_object_id: to_object_id.into(),
            kind,
        }
    }

    /// Path segment appended to an object's path:
    /// `associations/<toObject>/<toObjectId>/<type>`.
    pub fn path(&self) -> String {
        format!(
            "associations/{}/{}/{}",
            self.to_object,
            segment(&self.to_object_id),
            self.kind
        )
    }
}
