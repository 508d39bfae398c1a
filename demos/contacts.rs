//! Contact CRUD and search
//!
//! Creates a contact, reads it back with a custom property, searches for it
//! by email, then deletes it.
//!
//! Run with:
//!   HUBSPOT_PRIVATE_APP_TOKEN=... cargo run --example contacts

use hubspot_api::client::{HsStr, HsValueExt, RequestQueryOption};
use hubspot_api::crm::Contact;
use hubspot_api::{AuthMethod, HubSpot};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Built-in contact properties plus one portal-specific property.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ContactWithFood {
    #[serde(flatten)]
    contact: Contact,
    #[serde(skip_serializing_if = "Option::is_none")]
    favorite_food: Option<HsStr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hubspot_client=debug,hubspot_crm=debug")),
        )
        .init();

    let hubspot = HubSpot::new(AuthMethod::from_env()?)?;
    let contacts = hubspot.crm().contacts();

    let created = contacts
        .create(&Contact {
            email: Some(HsStr::new("demo.contact@example.com")),
            firstname: Some(HsStr::new("Demo")),
            lastname: Some(HsStr::new("Contact")),
            ..Default::default()
        })
        .await?;
    println!("Created contact {}", created.id);

    let option = RequestQueryOption::default().with_custom_properties(["favorite_food"]);
    let fetched = contacts
        .get::<ContactWithFood>(&created.id, Some(&option))
        .await?;
    println!(
        "Fetched {} {} (favorite food: {:?}, created {})",
        fetched.properties.contact.firstname.to_hs_string(),
        fetched.properties.contact.lastname.to_hs_string(),
        fetched.properties.favorite_food,
        fetched.properties.contact.createdate.to_hs_string(),
    );

    let found = contacts.search_by_email("demo.contact@example.com").await?;
    println!("Search matched {} contact(s)", found.total);

    contacts.delete(&created.id).await?;
    println!("Deleted contact {}", created.id);

    Ok(())
}
