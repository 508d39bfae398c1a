//! Generic service for CRM object endpoints (`crm/<version>/objects/<kind>`).
//!
//! Contacts, companies, deals and notes share one wire shape: properties are
//! wrapped in a `{"properties": …}` payload on write and returned inside a
//! [`ResponseResource`] on read. [`ObjectService`] implements that shape once;
//! each object type is a marker implementing [`ObjectKind`].

use std::fmt;
use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use hubspot_client::{HubSpotClient, RequestPayload, RequestQueryOption, ResponseResource, Result};

use crate::association::AssociationConfig;
use crate::search::{SearchOptions, SearchResponse};
use crate::segment;

/// A CRM object type served under `crm/<version>/objects/`.
pub trait ObjectKind: Send + Sync + 'static {
    /// Path segment, e.g. `contacts`.
    const NAME: &'static str;

    /// Properties requested on every read, before any custom properties.
    const DEFAULT_FIELDS: &'static [&'static str];

    /// Property type returned by association calls.
    type Properties: DeserializeOwned + Default;
}

/// Client for one CRM object type.
///
/// Reads and writes are generic over the property type so callers can bind a
/// struct that embeds the typed properties (e.g. [`Contact`](crate::Contact))
/// next to their own custom fields with `#[serde(flatten)]`.
pub struct ObjectService<K> {
    client: HubSpotClient,
    path: String,
    kind: PhantomData<fn() -> K>,
}

impl<K> Clone for ObjectService<K> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: ObjectKind> fmt::Debug for ObjectService<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectService")
            .field("kind", &K::NAME)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl<K: ObjectKind> ObjectService<K> {
    pub fn new(client: HubSpotClient) -> Self {
        let path = client.api_path("crm", &format!("objects/{}", K::NAME));
        Self {
            client,
            path,
            kind: PhantomData,
        }
    }

    /// Collection path relative to the base URL, e.g. `crm/v3/objects/contacts`.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn object_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, segment(id))
    }

    /// Get an object by id.
    ///
    /// The requested properties are the type's defaults followed by
    /// `option.custom_properties`. Unknown property names are ignored by HubSpot.
    #[instrument(skip(self, option), fields(kind = K::NAME))]
    pub async fn get<P>(
        &self,
        id: &str,
        option: Option<&RequestQueryOption>,
    ) -> Result<ResponseResource<P>>
    where
        P: DeserializeOwned + Default,
    {
        let query = RequestQueryOption::setup_properties(option, K::DEFAULT_FIELDS);
        self.client
            .get_with_options(&self.object_path(id), &query)
            .await
    }

    /// Create an object from its properties.
    #[instrument(skip(self, properties), fields(kind = K::NAME))]
    pub async fn create<P>(&self, properties: &P) -> Result<ResponseResource<P>>
    where
        P: Serialize + DeserializeOwned + Default,
    {
        self.client
            .post(&self.path, &RequestPayload::new(properties))
            .await
    }

    /// Update an object's properties. Absent properties are left untouched.
    #[instrument(skip(self, properties), fields(kind = K::NAME))]
    pub async fn update<P>(&self, id: &str, properties: &P) -> Result<ResponseResource<P>>
    where
        P: Serialize + DeserializeOwned + Default,
    {
        self.client
            .patch(&self.object_path(id), &RequestPayload::new(properties))
            .await
    }

    /// Archive an object.
    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&self.object_path(id)).await
    }

    /// Associate an object with another object.
    ///
    /// Custom objects use [`ObjectType::Custom`](crate::ObjectType::Custom) and
    /// [`AssociationType::Custom`](crate::AssociationType::Custom) with the
    /// values defined in the portal.
    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn associate(
        &self,
        id: &str,
        config: &AssociationConfig,
    ) -> Result<ResponseResource<K::Properties>> {
        let path = format!("{}/{}", self.object_path(id), config.path());
        self.client.put_empty(&path).await
    }

    /// Run a search against this object type.
    #[instrument(skip(self, options), fields(kind = K::NAME))]
    pub async fn search<P>(&self, options: &SearchOptions) -> Result<SearchResponse<P>>
    where
        P: DeserializeOwned + Default,
    {
        let path = format!("{}/search", self.path);
        self.client.post(&path, options).await
    }
}
