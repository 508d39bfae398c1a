//! Error handling
//!
//! Shows how remote failures surface as structured `ApiError`s, including the
//! details HubSpot embeds inside validation messages.
//!
//! Run with:
//!   HUBSPOT_PRIVATE_APP_TOKEN=... cargo run --example error_handling

use hubspot_api::client::{ErrorKind, HsStr, INVALID_EMAIL_ERROR};
use hubspot_api::crm::Contact;
use hubspot_api::{AuthMethod, HubSpot};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== HubSpot Error Handling ===\n");

    let hubspot = HubSpot::new(AuthMethod::from_env()?)?;

    println!("1. Missing object");
    match hubspot.crm().contacts().get::<Contact>("0", None).await {
        Ok(contact) => println!("  unexpectedly found {}", contact.id),
        Err(e) => {
            println!("  status: {:?}", e.status());
            if let Some(api) = e.as_api_error() {
                println!("  category: {} ({})", api.category, api.message);
                println!("  correlation id: {}", api.correlation_id);
            }
        }
    }

    println!("\n2. Validation failure with embedded details");
    let invalid = Contact {
        email: Some(HsStr::new("not-an-email")),
        ..Default::default()
    };
    match hubspot.crm().contacts().create(&invalid).await {
        Ok(created) => println!("  unexpectedly created {}", created.id),
        Err(e) if e.is_validation_error() => {
            let api = e.as_api_error().ok_or("validation errors carry an ApiError")?;
            for detail in &api.details {
                println!("  {} on {}: {}", detail.error, detail.name, detail.message);
            }
            if api.has_detail(INVALID_EMAIL_ERROR) {
                println!("  -> the email address was rejected");
            }
        }
        Err(e) => println!("  other error: {e}"),
    }

    println!("\n3. Categorizing errors");
    let bad = HubSpot::new(AuthMethod::PrivateAppToken("pat-invalid".into()))?;
    if let Err(e) = bad.crm().deals().delete("1").await {
        match &e.kind {
            _ if e.is_auth_error() || e.status() == Some(401) => {
                println!("  authentication rejected: {e}")
            }
            ErrorKind::Timeout | ErrorKind::Connection(_) => println!("  transient: {e}"),
            _ => println!("  permanent: {e}"),
        }
    }

    Ok(())
}
