//! # hubspot-crm
//!
//! HubSpot CRM API client.
//!
//! ## Features
//!
//! - **Objects** - Get, create, update, delete and associate contacts,
//!   companies, deals and notes
//! - **Search** - Filter groups, sorts and paging for any object type
//! - **Tickets** - Support tickets with free-form properties
//! - **Schemas** - Custom object definitions
//! - **Properties** - Property definitions per object type
//! - **Imports** - Multipart file imports and their status
//!
//! ## Example
//!
//! ```rust,ignore
//! use hubspot_client::{HubSpotClient, HsStr, RequestQueryOption};
//! use hubspot_crm::{Contact, Crm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hubspot_client::Error> {
//!     let client = HubSpotClient::builder()
//!         .private_app_token(std::env::var("HUBSPOT_PRIVATE_APP_TOKEN").unwrap())
//!         .build()?;
//!     let crm = Crm::new(client);
//!
//!     let created = crm
//!         .contacts()
//!         .create(&Contact {
//!             email: Some(HsStr::new("bh@example.com")),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     let option = RequestQueryOption::default().with_custom_properties(["favorite_food"]);
//!     let contact = crm
//!         .contacts()
//!         .get::<Contact>(&created.id, Some(&option))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod association;
mod company;
mod contact;
mod deal;
mod imports;
mod note;
mod object;
mod properties;
mod schemas;
mod search;
mod tickets;

pub use association::{AssociationConfig, AssociationType, ObjectType};
pub use company::{Company, CompanyKind, CompanyService, DEFAULT_COMPANY_FIELDS};
pub use contact::{Contact, ContactKind, ContactService, DEFAULT_CONTACT_FIELDS};
pub use deal::{Deal, DealKind, DealService, DEFAULT_DEAL_FIELDS};
pub use imports::{
    encode_multipart, ActiveImportOptions, ImportColumnMapping, ImportConfig,
    ImportErrorsOptions, ImportFileConfig, ImportFilePageConfig, ImportResponse, ImportService,
};
pub use note::{Note, NoteKind, NoteService, DEFAULT_NOTE_FIELDS};
pub use object::{ObjectKind, ObjectService};
pub use properties::{
    Property, PropertyList, PropertyModificationMetadata, PropertyOption, PropertyService,
};
pub use schemas::{Schema, SchemaAssociation, SchemaLabels, SchemaList, SchemaService};
pub use search::{
    Filter, FilterGroup, Operator, SearchOptions, SearchResponse, Sort, SortDirection,
};
pub use tickets::{
    Ticket, TicketAssociation, TicketAssociationSpec, TicketAssociationTarget,
    TicketCreateRequest, TicketList, TicketService, TicketUpdateRequest,
};

use std::borrow::Cow;

use hubspot_client::HubSpotClient;

/// Percent-encode a caller-supplied path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// All CRM services, sharing one client.
///
/// Paths follow the client's API version: `crm/<version>/objects/<kind>`,
/// `crm/<version>/imports`, `crm/<version>/schemas`, `crm/<version>/properties`.
#[derive(Debug, Clone)]
pub struct Crm {
    contacts: ContactService,
    companies: CompanyService,
    deals: DealService,
    notes: NoteService,
    tickets: TicketService,
    schemas: SchemaService,
    properties: PropertyService,
    imports: ImportService,
}

impl Crm {
    pub fn new(client: HubSpotClient) -> Self {
        Self {
            contacts: ContactService::new(client.clone()),
            companies: CompanyService::new(client.clone()),
            deals: DealService::new(client.clone()),
            notes: NoteService::new(client.clone()),
            tickets: TicketService::new(client.clone()),
            schemas: SchemaService::new(client.clone()),
            properties: PropertyService::new(client.clone()),
            imports: ImportService::new(client),
        }
    }

    pub fn contacts(&self) -> &ContactService {
        &self.contacts
    }

    pub fn companies(&self) -> &CompanyService {
        &self.companies
    }

    pub fn deals(&self) -> &DealService {
        &self.deals
    }

    pub fn notes(&self) -> &NoteService {
        &self.notes
    }

    pub fn tickets(&self) -> &TicketService {
        &self.tickets
    }

    pub fn schemas(&self) -> &SchemaService {
        &self.schemas
    }

    pub fn properties(&self) -> &PropertyService {
        &self.properties
    }

    pub fn imports(&self) -> &ImportService {
        &self.imports
    }
}
