//! Tickets: customer support requests.
//!
//! Ticket properties vary by portal and pipeline, so they are carried as a
//! JSON map rather than a typed struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use hubspot_client::{HsBool, HsInt, HsStr, HsTime, HubSpotClient, Paging, RequestQueryOption, Result};

use crate::search::SearchOptions;
use crate::segment;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties_with_history: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<HsTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<HsBool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<HsTime>,
}

/// A page of tickets from `list` or `search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<HsInt>,
    #[serde(default)]
    pub results: Vec<Ticket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketAssociationTarget {
    pub id: HsStr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAssociationSpec {
    /// `HUBSPOT_DEFINED`, `USER_DEFINED` or `INTEGRATOR_DEFINED`.
    pub association_category: HsStr,
    pub association_type_id: HsInt,
}

/// An association created together with the ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketAssociation {
    pub to: TicketAssociationTarget,
    #[serde(default)]
    pub types: Vec<TicketAssociationSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketCreateRequest {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<TicketAssociation>,
}

impl TicketCreateRequest {
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_association(mut self, association: TicketAssociation) -> Self {
        self.associations.push(association);
        self
    }
}

pub type TicketUpdateRequest = TicketCreateRequest;

/// Client for `crm/<version>/objects/tickets`.
#[derive(Debug, Clone)]
pub struct TicketService {
    client: HubSpotClient,
    path: String,
}

impl TicketService {
    pub fn new(client: HubSpotClient) -> Self {
        let path = client.api_path("crm", "objects/tickets");
        Self { client, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn ticket_path(&self, ticket_id: &str) -> String {
        format!("{}/{}", self.path, segment(ticket_id))
    }

    /// List tickets, one page at a time.
    #[instrument(skip(self, option))]
    pub async fn list(&self, option: Option<&RequestQueryOption>) -> Result<TicketList> {
        let default = RequestQueryOption::default();
        self.client
            .get_with_options(&self.path, option.unwrap_or(&default))
            .await
    }

    #[instrument(skip(self, option))]
    pub async fn get(&self, ticket_id: &str, option: Option<&RequestQueryOption>) -> Result<Ticket> {
        let default = RequestQueryOption::default();
        self.client
            .get_with_options(&self.ticket_path(ticket_id), option.unwrap_or(&default))
            .await
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: &TicketCreateRequest) -> Result<Ticket> {
        self.client.post(&self.path, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, ticket_id: &str, request: &TicketUpdateRequest) -> Result<Ticket> {
        self.client.patch(&self.ticket_path(ticket_id), request).await
    }

    /// Move a ticket to the recycling bin.
    #[instrument(skip(self))]
    pub async fn archive(&self, ticket_id: &str) -> Result<()> {
        self.client.delete(&self.ticket_path(ticket_id)).await
    }

    #[instrument(skip(self, options))]
    pub async fn search(&self, options: &SearchOptions) -> Result<TicketList> {
        let path = format!("{}/search", self.path);
        self.client.post(&path, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Filter, FilterGroup, Operator};
    use crate::test_support::client_for;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ticket_body() -> Value {
        json!({
            "id": "512",
            "properties": {
                "subject": "Printer on fire",
                "hs_pipeline": "0",
                "hs_pipeline_stage": "1",
                "hs_ticket_priority": "HIGH"
            },
            "createdAt": "2024-03-01T09:15:00.000Z",
            "updatedAt": "2024-03-01T09:20:00.000Z",
            "archived": false
        })
    }

    #[tokio::test]
    async fn test_list_tickets() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/crm/v3/objects/tickets"))
            .and(query_param("properties", "subject,hs_pipeline"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [ticket_body()],
                "paging": {"next": {"after": "513", "link": "https://api.hubapi.com/crm/v3/objects/tickets?after=513"}}
            })))
            .mount(&server)
            .await;

        let tickets = TicketService::new(client_for(&server));
        let option = RequestQueryOption {
            properties: vec!["subject".into(), "hs_pipeline".into()],
            ..Default::default()
        };
        let page = tickets.list(Some(&option)).await.expect("list should succeed");

        assert_eq!(page.total, None);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].properties["subject"], "Printer on fire");
        assert_eq!(page.paging.unwrap().next.unwrap().after, "513");
    }

    #[tokio::test]
    async fn test_get_ticket() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/crm/v3/objects/tickets/512"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ticket_body()))
            .mount(&server)
            .await;

        let tickets = TicketService::new(client_for(&server));
        let ticket = tickets.get("512", None).await.expect("get should succeed");

        assert_eq!(ticket.id, Some(HsStr::new("512")));
        assert_eq!(ticket.archived, Some(HsBool::new(false)));
        assert!(ticket.archived_at.is_none());
    }

    #[tokio::test]
    async fn test_create_ticket_with_association() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/crm/v3/objects/tickets"))
            .and(body_json(json!({
                "properties": {"subject": "Printer on fire", "hs_pipeline": "0", "hs_pipeline_stage": "1"},
                "associations": [{
                    "to": {"id": "201"},
                    "types": [{"associationCategory": "HUBSPOT_DEFINED", "associationTypeId": 16}]
                }]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(ticket_body()))
            .mount(&server)
            .await;

        let tickets = TicketService::new(client_for(&server));
        let request = TicketCreateRequest::default()
            .with_property("subject", "Printer on fire")
            .with_property("hs_pipeline", "0")
            .with_property("hs_pipeline_stage", "1")
            .with_association(TicketAssociation {
                to: TicketAssociationTarget { id: "201".into() },
                types: vec![TicketAssociationSpec {
                    association_category: "HUBSPOT_DEFINED".into(),
                    association_type_id: HsInt::new(16),
                }],
            });
        let ticket = tickets.create(&request).await.expect("create should succeed");
        assert_eq!(ticket.properties["hs_ticket_priority"], "HIGH");
    }

    #[tokio::test]
    async fn test_update_and_archive_ticket() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/crm/v3/objects/tickets/512"))
            .and(body_json(json!({"properties": {"hs_ticket_priority": "LOW"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(ticket_body()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/crm/v3/objects/tickets/512"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let tickets = TicketService::new(client_for(&server));
        let request = TicketUpdateRequest::default().with_property("hs_ticket_priority", "LOW");
        tickets.update("512", &request).await.unwrap();
        tickets.archive("512").await.unwrap();
    }

    #[tokio::test]
    async fn test_search_tickets() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/crm/v3/objects/tickets/search"))
            .and(body_json(json!({
                "filterGroups": [{
                    "filters": [{"propertyName": "hs_ticket_priority", "operator": "IN", "values": ["high", "medium"]}]
                }],
                "limit": 20
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 1,
                "results": [ticket_body()]
            })))
            .mount(&server)
            .await;

        let tickets = TicketService::new(client_for(&server));
        let options = SearchOptions::default()
            .with_filter_group(FilterGroup::new(vec![
                Filter::new("hs_ticket_priority", Operator::In).with_values(["high", "medium"]),
            ]))
            .with_limit(20);
        let found = tickets.search(&options).await.expect("search should succeed");

        assert_eq!(found.total, Some(HsInt::new(1)));
        assert_eq!(found.results.len(), 1);
    }
}
