//! CRM flows through the facade, including HubSpot's mixed scalar encodings.

use super::common::hubspot_for;
use hubspot_api::client::{HsValueExt, RequestQueryOption};
use hubspot_api::crm::{
    AssociationConfig, AssociationType, Contact, Deal, ObjectType, SearchOptions, Sort,
    SortDirection,
};
use hubspot_api::{AuthMethod, HsBool, HsStr, HsTime};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pat() -> AuthMethod {
    AuthMethod::PrivateAppToken("pat-test".into())
}

#[tokio::test]
async fn test_contact_three_state_decoding() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/51"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "51",
            "properties": {
                "email": "bh@example.com",
                "firstname": "",
                "lastname": null,
                "createdate": "2019-10-30T03:30:17.883Z",
                "lastmodifieddate": "1572406217883",
                "hs_email_optout": "true",
                "hs_email_bad_address": "maybe",
                "notes_last_contacted": ""
            },
            "createdAt": "2019-10-30T03:30:17.883Z",
            "updatedAt": 1572406217883_i64,
            "archived": false
        })))
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let contact = hubspot
        .crm()
        .contacts()
        .get::<Contact>("51", None)
        .await
        .expect("get should succeed");
    let props = &contact.properties;

    assert_eq!(props.email, Some(HsStr::new("bh@example.com")));
    assert_eq!(props.firstname, Some(HsStr::blank()));
    assert_eq!(props.lastname, None);
    assert_eq!(props.lastname.to_hs_string(), "");
    assert_eq!(props.hs_email_optout, Some(HsBool::new(true)));
    assert_eq!(props.hs_email_bad_address, Some(HsBool::new(false)));
    assert_eq!(props.notes_last_contacted, Some(HsTime::zero()));
    assert_eq!(props.createdate, props.lastmodifieddate);
    assert_eq!(props.createdate, contact.created_at);
    assert_eq!(contact.created_at, contact.updated_at);
    assert_eq!(
        props.createdate.to_hs_string(),
        "2019-10-30 03:30:17.883 +0000 UTC"
    );
    assert_eq!(contact.archived_at.to_hs_string(), "nil");
}

#[tokio::test]
async fn test_contact_write_omits_absent_and_keeps_blank() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/crm/v3/objects/contacts/51"))
        .and(body_json(json!({
            "properties": {"firstname": "Brian", "lastname": ""}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "51",
            "properties": {"firstname": "Brian", "lastname": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let updated = hubspot
        .crm()
        .contacts()
        .update(
            "51",
            &Contact {
                firstname: Some(HsStr::new("Brian")),
                lastname: Some(HsStr::blank()),
                ..Default::default()
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.properties.lastname, Some(HsStr::blank()));
}

#[tokio::test]
async fn test_deal_lifecycle_with_custom_properties() {
    #[derive(Debug, Default, Deserialize)]
    struct DealWithRegion {
        #[serde(flatten)]
        deal: Deal,
        region: Option<HsStr>,
    }

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/deals/9"))
        .and(query_param("associations", "contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9",
            "properties": {"dealname": "Renewal", "amount": "1500", "region": "EMEA"},
            "associations": {
                "contacts": {"results": [{"id": "51", "type": "deal_to_contact"}]}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/crm/v3/objects/deals/9/associations/contacts/51/deal_to_contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "9"})))
        .expect(1)
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let deals = hubspot.crm().deals();

    let option = RequestQueryOption::default()
        .with_custom_properties(["region"])
        .with_associations(["contacts"]);
    let deal = deals
        .get::<DealWithRegion>("9", Some(&option))
        .await
        .expect("get should succeed");
    assert_eq!(deal.properties.deal.dealname, Some(HsStr::new("Renewal")));
    assert_eq!(deal.properties.region, Some(HsStr::new("EMEA")));
    let associations = deal.associations.expect("associations requested");
    assert_eq!(associations.contacts.results[0].id, "51");

    let config = AssociationConfig::new(ObjectType::Contacts, "51", AssociationType::DealToContact);
    let associated = deals.associate("9", &config).await.expect("associate should succeed");
    assert_eq!(associated.id, "9");
}

#[tokio::test]
async fn test_search_with_sort_and_paging() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/companies/search"))
        .and(body_json(json!({
            "filterGroups": [{
                "filters": [{"propertyName": "domain", "operator": "EQ", "value": "biglytics.net"}]
            }],
            "sorts": [{"propertyName": "createdate", "direction": "DESCENDING"}],
            "limit": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": "6",
            "results": [{"id": "512", "properties": {"name": "Biglytics", "is_public": true}}],
            "paging": {"next": {"after": "5", "link": "?after=5"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hubspot = hubspot_for(&server, pat());
    let options = SearchOptions::property_equals("domain", "biglytics.net")
        .with_sort(Sort::new("createdate", SortDirection::Descending))
        .with_limit(5);
    let found = hubspot
        .crm()
        .companies()
        .search::<hubspot_api::crm::Company>(&options)
        .await
        .expect("search should succeed");

    assert_eq!(found.total.get(), 6);
    assert_eq!(found.results[0].properties.is_public, Some(HsBool::new(true)));
    let next = found.paging.and_then(|p| p.next).expect("next page");
    assert_eq!(next.after, "5");
}
