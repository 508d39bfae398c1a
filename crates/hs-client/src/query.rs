//! Query options shared by CRM object endpoints.

use serde::{Serialize, Serializer};

/// Options for reading CRM objects.
///
/// `properties` is filled by [`RequestQueryOption::setup_properties`] from the
/// service's default field list plus `custom_properties`; the latter is never
/// sent on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQueryOption {
    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
    #[serde(skip)]
    pub custom_properties: Vec<String>,
    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub paginate_associations: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub archived: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id_property: String,
}

impl RequestQueryOption {
    /// Merge caller options with a service's default property names.
    ///
    /// The resulting `properties` are the defaults followed by the caller's
    /// custom properties. Every other field is kept from the caller.
    pub fn setup_properties(option: Option<&Self>, default_fields: &[&str]) -> Self {
        let mut opts = option.cloned().unwrap_or_default();
        opts.properties = default_fields
            .iter()
            .map(|field| field.to_string())
            .chain(opts.custom_properties.iter().cloned())
            .collect();
        opts
    }

    pub fn with_custom_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_associations<I, S>(mut self, associations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.associations = associations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Look objects up by a unique property instead of the record id.
    pub fn with_id_property(mut self, property: impl Into<String>) -> Self {
        self.id_property = property.into();
        self
    }
}

fn comma_separated<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&values.join(","))
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_properties_defaults_then_custom() {
        let caller = RequestQueryOption::default()
            .with_custom_properties(["hs_lead_status"])
            .with_archived(true);
        let opts = RequestQueryOption::setup_properties(Some(&caller), &["email", "firstname"]);

        assert_eq!(opts.properties, vec!["email", "firstname", "hs_lead_status"]);
        assert!(opts.archived);
    }

    #[test]
    fn test_setup_properties_without_caller_options() {
        let opts = RequestQueryOption::setup_properties(None, &["name"]);
        assert_eq!(opts.properties, vec!["name"]);
        assert!(opts.custom_properties.is_empty());
    }

    #[test]
    fn test_encoding() {
        let opts = RequestQueryOption::setup_properties(
            Some(
                &RequestQueryOption::default()
                    .with_custom_properties(["x"])
                    .with_associations(["contacts", "deals"])
                    .with_id_property("email"),
            ),
            &["email", "firstname"],
        );

        assert_eq!(
            serde_urlencoded::to_string(&opts).unwrap(),
            "properties=email%2Cfirstname%2Cx&associations=contacts%2Cdeals&idProperty=email"
        );
    }

    #[test]
    fn test_zero_values_are_omitted() {
        assert_eq!(
            serde_urlencoded::to_string(RequestQueryOption::default()).unwrap(),
            ""
        );

        let opts = RequestQueryOption {
            paginate_associations: true,
            archived: true,
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&opts).unwrap(),
            "paginateAssociations=true&archived=true"
        );
    }
}
