//! Notes: free-text engagements attached to other records.

use serde::{Deserialize, Serialize};

use hubspot_client::{HsStr, HsTime};

use crate::object::{ObjectKind, ObjectService};

/// Marker for the `notes` object type.
#[derive(Debug, Clone, Copy)]
pub struct NoteKind;

impl ObjectKind for NoteKind {
    const NAME: &'static str = "notes";
    const DEFAULT_FIELDS: &'static [&'static str] = DEFAULT_NOTE_FIELDS;
    type Properties = Note;
}

/// Client for `crm/<version>/objects/notes`.
pub type NoteService = ObjectService<NoteKind>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_createdate: Option<HsTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_object_id: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_note_body: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_note_title: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<HsStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot_owner_id: Option<HsStr>,
}

/// Properties requested by [`NoteService::get`] unless overridden.
pub const DEFAULT_NOTE_FIELDS: &[&str] = &[
    "hs_all_accessible_team_ids", "hs_all_assigned_business_unit_ids", "hs_all_owner_ids",
    "hs_all_team_ids", "hs_at_mentioned_owner_ids", "hs_attachment_ids", "hs_body_preview",
    "hs_body_preview_html", "hs_body_preview_is_truncated", "hs_created_by",
    "hs_created_by_user_id", "hs_createdate", "hs_engagement_source", "hs_engagement_source_id",
    "hs_follow_up_action", "hs_gdpr_deleted", "hs_hd_ticket_ids", "hs_lastmodifieddate",
    "hs_merged_object_ids", "hs_modified_by", "hs_note_body", "hs_note_ms_teams_payload",
    "hs_object_id", "hs_object_source", "hs_object_source_detail_1", "hs_object_source_detail_2",
    "hs_object_source_detail_3", "hs_object_source_id", "hs_object_source_label",
    "hs_object_source_user_id", "hs_product_name", "hs_queue_membership_ids", "hs_read_only",
    "hs_shared_team_ids", "hs_shared_user_ids", "hs_timestamp", "hs_unique_creation_key",
    "hs_unique_id", "hs_updated_by_user_id", "hs_user_ids_of_all_notification_followers",
    "hs_user_ids_of_all_notification_unfollowers", "hs_user_ids_of_all_owners", "hs_was_imported",
    "hubspot_owner_assigneddate", "hubspot_owner_id", "hubspot_team_id",
];
