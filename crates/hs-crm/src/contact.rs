//! Contacts: people the portal interacts with.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use hubspot_client::{HsBool, HsStr, HsTime, Result};

use crate::object::{ObjectKind, ObjectService};
use crate::search::{SearchOptions, SearchResponse};

/// Marker for the `contacts` object type.
#[derive(Debug, Clone, Copy)]
pub struct ContactKind;

impl ObjectKind for ContactKind {
    const NAME: &'static str = "contacts";
    const DEFAULT_FIELDS: &'static [&'static str] = DEFAULT_CONTACT_FIELDS;
    type Properties = Contact;
}

/// Client for `crm/<version>/objects/contacts`.
pub type ContactService = ObjectService<ContactKind>;

impl ObjectService<ContactKind> {
    /// Find contacts whose `email` equals `email`.
    #[instrument(skip(self, email))]
    pub async fn search_by_email(&self, email: &str) -> Result<SearchResponse<Contact>> {
        self.search(&SearchOptions::property_equals("email", email))
            .await
    }
}

/// HubSpot's built-in contact properties.
///
/// Embed it with `#[serde(flatten)]` in a struct of your own to read or write
/// custom properties alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annualrevenue: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closedate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub createdate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currentlyinworkflow: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_close: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagements_last_meeting_booked: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagements_last_meeting_booked_campaign: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagements_last_meeting_booked_medium: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagements_last_meeting_booked_source: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_conversion_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_conversion_event_name: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_deal_created_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_average_page_views: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_first_referrer: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_first_timestamp: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_first_touch_converting_campaign: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_first_url: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_first_visit_timestamp: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_last_referrer: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_last_timestamp: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_last_touch_converting_campaign: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_last_url: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_last_visit_timestamp: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_num_event_completions: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_num_page_views: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_num_visits: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_revenue: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_source: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_source_data_1: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_analytics_source_data_2: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_buying_role: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_content_membership_email_confirmed: Option<HsBool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_content_membership_notes: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_content_membership_registered_at: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_content_membership_registration_domain_sent_to: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_content_membership_registration_email_sent_at: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_content_membership_status: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_createdate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_bad_address: Option<HsBool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_bounce: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_click: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_first_click_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_delivered: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_domain: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_first_open_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_first_send_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_hard_bounce_reason_enum: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_last_click_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_last_email_name: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_last_open_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_last_send_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_open: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_open_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_optout: Option<HsBool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_optout_6766004: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_optout_6766098: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_optout_6766099: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_optout_6766130: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_quarantined: Option<HsBool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_sends_since_last_engagement: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_emailconfirmationstatus: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_feedback_last_nps_follow_up: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_feedback_last_nps_rating: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_feedback_last_survey_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_ip_timezone: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_is_unworked: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_language: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_last_sales_activity_timestamp: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lead_status: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lifecyclestage_customer_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lifecyclestage_evangelist_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lifecyclestage_lead_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lifecyclestage_marketingqualifiedlead_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lifecyclestage_opportunity_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lifecyclestage_other_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lifecyclestage_salesqualifiedlead_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lifecyclestage_subscriber_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_marketable_reason_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_marketable_reason_type: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_marketable_status: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_marketable_until_renewal: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_object_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_persona: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_predictivecontactscore_v2: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_predictivescoringtier: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_sales_email_last_clicked: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_sales_email_last_opened: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_sales_email_last_replied: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_sequences_is_enrolled: Option<HsBool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot_owner_assigneddate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot_owner_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot_team_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspotscore: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_city: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_country: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_country_code: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_state: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_state_code: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_function: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobtitle: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmodifieddate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecyclestage: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub military_status: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobilephone: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_last_contacted: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_last_updated: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_next_activity_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_associated_deals: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_contacted_notes: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_notes: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_unique_conversion_events: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numemployees: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_conversion_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_conversion_event_name: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_deal_amount: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_deal_close_date: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_email: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<HsStr>,
}

/// Properties requested by [`ContactService::get`] unless overridden.
pub const DEFAULT_CONTACT_FIELDS: &[&str] = &[
    "address", "annualrevenue", "city", "closedate", "company", "company_size", "country",
    "createdate", "currentlyinworkflow", "date_of_birth", "days_to_close", "degree", "email",
    "engagements_last_meeting_booked", "engagements_last_meeting_booked_campaign",
    "engagements_last_meeting_booked_medium", "engagements_last_meeting_booked_source", "fax",
    "field_of_study", "first_conversion_date", "first_conversion_event_name",
    "first_deal_created_date", "firstname", "gender", "graduation_date",
    "hs_analytics_average_page_views", "hs_analytics_first_referrer",
    "hs_analytics_first_timestamp", "hs_analytics_first_touch_converting_campaign",
    "hs_analytics_first_url", "hs_analytics_first_visit_timestamp", "hs_analytics_last_referrer",
    "hs_analytics_last_timestamp", "hs_analytics_last_touch_converting_campaign",
    "hs_analytics_last_url", "hs_analytics_last_visit_timestamp",
    "hs_analytics_num_event_completions", "hs_analytics_num_page_views", "hs_analytics_num_visits",
    "hs_analytics_revenue", "hs_analytics_source", "hs_analytics_source_data_1",
    "hs_analytics_source_data_2", "hs_buying_role", "hs_content_membership_email_confirmed",
    "hs_content_membership_notes", "hs_content_membership_registered_at",
    "hs_content_membership_registration_domain_sent_to",
    "hs_content_membership_registration_email_sent_at", "hs_content_membership_status",
    "hs_createdate", "hs_email_bad_address", "hs_email_bounce", "hs_email_click",
    "hs_email_first_click_date", "hs_email_delivered", "hs_email_domain",
    "hs_email_first_open_date", "hs_email_first_send_date", "hs_email_hard_bounce_reason_enum",
    "hs_email_last_click_date", "hs_email_last_email_name", "hs_email_last_open_date",
    "hs_email_last_send_date", "hs_email_open", "hs_email_open_date", "hs_email_optout",
    "hs_email_optout_6766004", "hs_email_optout_6766098", "hs_email_optout_6766099",
    "hs_email_optout_6766130", "hs_email_quarantined", "hs_email_sends_since_last_engagement",
    "hs_emailconfirmationstatus", "hs_feedback_last_nps_follow_up", "hs_feedback_last_nps_rating",
    "hs_feedback_last_survey_date", "hs_ip_timezone", "hs_is_unworked", "hs_language",
    "hs_last_sales_activity_timestamp", "hs_lead_status", "hs_lifecyclestage_customer_date",
    "hs_lifecyclestage_evangelist_date", "hs_lifecyclestage_lead_date",
    "hs_lifecyclestage_marketingqualifiedlead_date", "hs_lifecyclestage_opportunity_date",
    "hs_lifecyclestage_other_date", "hs_lifecyclestage_salesqualifiedlead_date",
    "hs_lifecyclestage_subscriber_date", "hs_marketable_reason_id", "hs_marketable_reason_type",
    "hs_marketable_status", "hs_marketable_until_renewal", "hs_object_id", "hs_persona",
    "hs_predictivecontactscore_v2", "hs_predictivescoringtier", "hs_sales_email_last_clicked",
    "hs_sales_email_last_opened", "hs_sales_email_last_replied", "hs_sequences_is_enrolled",
    "hubspot_owner_assigneddate", "hubspot_owner_id", "hubspot_team_id", "hubspotscore",
    "industry", "ip_city", "ip_country", "ip_country_code", "ip_state", "ip_state_code",
    "job_function", "jobtitle", "lastmodifieddate", "lastname", "lifecyclestage", "marital_status",
    "message", "military_status", "mobilephone", "notes_last_contacted", "notes_last_updated",
    "notes_next_activity_date", "num_associated_deals", "num_contacted_notes", "num_notes",
    "num_unique_conversion_events", "numemployees", "recent_conversion_date",
    "recent_conversion_event_name", "recent_deal_amount", "recent_deal_close_date",
    "relationship_status", "salutation", "school", "seniority", "start_date", "state",
    "total_revenue", "website", "work_email", "zip",
];
