//! Request and response types for the CRM search endpoints.

use serde::{Deserialize, Serialize};

use hubspot_client::{HsInt, HsStr, Paging, ResponseResource};

/// Comparison applied by a [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
    /// Within `value..=high_value`.
    Between,
    /// Exact match against `values`; string values must be lowercase.
    In,
    NotIn,
    HasProperty,
    NotHasProperty,
    /// Token match; `*` wildcards are allowed, e.g. `*@hubspot.com`.
    ContainsToken,
    NotContainsToken,
}

/// A single property condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub property_name: String,
    pub operator: Operator,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<HsStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_value: Option<HsStr>,
}

impl Filter {
    pub fn new(property_name: impl Into<String>, operator: Operator) -> Self {
        Self {
            property_name: property_name.into(),
            operator,
            values: Vec::new(),
            value: None,
            high_value: None,
        }
    }

    /// `property_name == value`.
    pub fn equals(property_name: impl Into<String>, value: impl Into<HsStr>) -> Self {
        Self::new(property_name, Operator::Eq).with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<HsStr>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<HsStr>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_high_value(mut self, high_value: impl Into<HsStr>) -> Self {
        self.high_value = Some(high_value.into());
        self
    }
}

/// Filters combined with AND. Groups are combined with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

impl FilterGroup {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASCENDING")]
    Ascending,
    #[serde(rename = "DESCENDING")]
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub property_name: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(property_name: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property_name: property_name.into(),
            direction,
        }
    }
}

/// Body of a `POST …/search` request. Empty fields are omitted.
///
/// HubSpot caps `limit` at 200 per page and defaults to 10.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_groups: Vec<FilterGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub after: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl SearchOptions {
    /// Search for a single property equal to `value`.
    pub fn property_equals(property_name: &str, value: &str) -> Self {
        Self {
            filter_groups: vec![FilterGroup::new(vec![Filter::equals(property_name, value)])],
            ..Default::default()
        }
    }

    pub fn with_filter_group(mut self, group: FilterGroup) -> Self {
        self.filter_groups.push(group);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_after(mut self, after: u32) -> Self {
        self.after = after;
        self
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de> + Default"))]
pub struct SearchResponse<P> {
    #[serde(default)]
    pub total: HsInt,
    #[serde(default = "Vec::new")]
    pub results: Vec<ResponseResource<P>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}
