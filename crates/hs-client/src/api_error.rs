//! HubSpot error response decoding.
//!
//! Validation failures often carry their per-field details as JSON fragments
//! embedded in the human-readable `message` rather than in `details`. The
//! decoder mines those fragments and appends them to `details`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Error category for validation failures.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Detail error code for an invalid email address.
pub const INVALID_EMAIL_ERROR: &str = "INVALID_EMAIL";

/// Detail error code for a fragment that could not be decoded.
pub const UNKNOWN_DETAIL_ERROR: &str = "UNKNOWN_DETAIL";

static DETAIL_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*?\}").expect("detail fragment pattern is valid"));

/// A structured HubSpot API error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{http_status_code}: {message}")]
#[serde(rename_all = "camelCase", default)]
pub struct ApiError {
    /// HTTP status code of the response.
    #[serde(skip)]
    pub http_status_code: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub correlation_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub context: ErrContext,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub links: ErrLinks,
    #[serde(deserialize_with = "null_as_default")]
    pub details: Vec<ErrDetail>,
}

impl ApiError {
    /// Returns true if this is a validation failure.
    pub fn is_validation_error(&self) -> bool {
        self.category == VALIDATION_ERROR
    }

    /// Returns true if any detail carries the given error code.
    pub fn has_detail(&self, code: &str) -> bool {
        self.details.iter().any(|d| d.error == code)
    }
}

/// Identifiers of the objects an error refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrContext {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Vec<String>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub object_type: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub from_object_type: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub to_object_type: Vec<String>,
    /// Context keys not modelled above.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// Documentation links attached to an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrLinks {
    #[serde(rename = "api key", deserialize_with = "null_as_default")]
    pub api_key: String,
    #[serde(rename = "knowledge-base", deserialize_with = "null_as_default")]
    pub knowledge_base: String,
}

/// A single per-field error detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub is_valid: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

impl ErrDetail {
    fn unreadable(fragment: &str, err: &serde_json::Error) -> Self {
        Self {
            is_valid: false,
            message: format!("unable to read error detail {fragment}: {err}"),
            error: UNKNOWN_DETAIL_ERROR.to_string(),
            name: "unknown".to_string(),
        }
    }
}

/// Explicit `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns true for status codes that carry an error body.
pub fn is_error_status(status: u16) -> bool {
    status >= 400
}

/// Decode an error response body.
///
/// Never fails: an unreadable body yields an `ApiError` whose message
/// describes the decode failure.
pub fn decode_api_error(status: u16, body: &[u8]) -> ApiError {
    let mut api_error = match serde_json::from_slice::<ApiError>(body) {
        Ok(api_error) => api_error,
        Err(err) => {
            return ApiError {
                http_status_code: status,
                message: format!("unable to read response from hubspot: {err}"),
                ..Default::default()
            };
        }
    };
    api_error.http_status_code = status;
    let mined = mine_error_details(&api_error.message);
    api_error.details.extend(mined);
    api_error
}

/// Extract error details embedded as JSON objects in a message.
///
/// Each non-greedy `{...}` span yields one detail, in order of appearance.
/// Spans that fail to decode yield an `UNKNOWN_DETAIL` placeholder.
pub fn mine_error_details(message: &str) -> Vec<ErrDetail> {
    DETAIL_FRAGMENT
        .find_iter(message)
        .map(|m| {
            let fragment = m.as_str();
            serde_json::from_str(fragment).unwrap_or_else(|err| ErrDetail::unreadable(fragment, &err))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EMBEDDED: &str = r#"Property values were not valid: [{"isValid":false,"message":"Email address abc is invalid","error":"INVALID_EMAIL","name":"email"},{"isValid":false,"message":"zz was not a valid number","error":"INVALID_INTEGER","name":"age"}]"#;

    #[test]
    fn test_decode_full_error() {
        let body = json!({
            "status": "error",
            "message": "Object not found",
            "correlationId": "a1b2",
            "category": "OBJECT_NOT_FOUND",
            "subCategory": "missing",
            "context": {"id": ["123"], "type": ["contact"], "objectType": ["CONTACT"]},
            "links": {"api key": "https://app.hubspot.com/keys", "knowledge-base": "https://kb"},
            "details": [{"isValid": false, "message": "m", "error": "E", "name": "n"}]
        });
        let err = decode_api_error(404, &serde_json::to_vec(&body).unwrap());

        assert_eq!(err.http_status_code, 404);
        assert_eq!(err.correlation_id, "a1b2");
        assert_eq!(err.sub_category, "missing");
        assert_eq!(err.context.id, vec!["123"]);
        assert_eq!(err.context.kind, vec!["contact"]);
        assert_eq!(err.links.api_key, "https://app.hubspot.com/keys");
        assert_eq!(err.links.knowledge_base, "https://kb");
        assert_eq!(err.details.len(), 1);
        assert_eq!(err.to_string(), "404: Object not found");
    }

    #[test]
    fn test_decode_mines_embedded_details() {
        let body = json!({
            "status": "error",
            "message": EMBEDDED,
            "category": "VALIDATION_ERROR"
        });
        let err = decode_api_error(400, &serde_json::to_vec(&body).unwrap());

        assert!(err.is_validation_error());
        assert_eq!(err.details.len(), 2);
        assert_eq!(err.details[0].error, INVALID_EMAIL_ERROR);
        assert_eq!(err.details[0].name, "email");
        assert_eq!(err.details[1].error, "INVALID_INTEGER");
        assert!(err.has_detail(INVALID_EMAIL_ERROR));
    }

    #[test]
    fn test_mined_details_follow_body_details() {
        let body = json!({
            "message": r#"bad: {"isValid":false,"message":"x","error":"INVALID_EMAIL","name":"email"}"#,
            "details": [{"isValid": false, "message": "first", "error": "FIRST", "name": "a"}]
        });
        let err = decode_api_error(400, &serde_json::to_vec(&body).unwrap());

        let codes: Vec<&str> = err.details.iter().map(|d| d.error.as_str()).collect();
        assert_eq!(codes, vec!["FIRST", INVALID_EMAIL_ERROR]);
    }

    #[test]
    fn test_malformed_fragment_yields_unknown_detail() {
        let message = r#"Invalid: [{"isValid":false,"message":"bad","error":"INVALID_EMAIL","name":"email"},{not json}]"#;
        let details = mine_error_details(message);

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].error, INVALID_EMAIL_ERROR);
        assert_eq!(details[1].error, UNKNOWN_DETAIL_ERROR);
        assert_eq!(details[1].name, "unknown");
        assert!(!details[1].is_valid);
        assert!(
            details[1]
                .message
                .starts_with("unable to read error detail {not json}: ")
        );
    }

    #[test]
    fn test_message_without_fragments() {
        assert!(mine_error_details("Contact already exists").is_empty());
    }

    #[test]
    fn test_null_fields_keep_error_structured() {
        let body = json!({
            "status": "error",
            "message": "Object not found",
            "correlationId": null,
            "category": "OBJECT_NOT_FOUND",
            "subCategory": null,
            "context": null,
            "links": null,
            "details": null
        });
        let err = decode_api_error(404, &serde_json::to_vec(&body).unwrap());

        assert_eq!(err.category, "OBJECT_NOT_FOUND");
        assert_eq!(err.message, "Object not found");
        assert_eq!(err.correlation_id, "");
        assert_eq!(err.context, ErrContext::default());
        assert_eq!(err.links, ErrLinks::default());
        assert!(err.details.is_empty());
    }

    #[test]
    fn test_null_message_and_nested_nulls() {
        let body = json!({
            "message": null,
            "category": "VALIDATION_ERROR",
            "context": {"id": null, "type": ["contact"]},
            "links": {"api key": null, "knowledge-base": "https://kb"},
            "details": [{"isValid": null, "message": null, "error": "E", "name": "n"}]
        });
        let err = decode_api_error(400, &serde_json::to_vec(&body).unwrap());

        assert!(err.is_validation_error());
        assert_eq!(err.message, "");
        assert!(err.context.id.is_empty());
        assert_eq!(err.context.kind, vec!["contact"]);
        assert_eq!(err.links.knowledge_base, "https://kb");
        assert_eq!(err.details.len(), 1);
        assert_eq!(err.details[0].error, "E");
        assert!(!err.details[0].is_valid);
    }

    #[test]
    fn test_unreadable_body() {
        let err = decode_api_error(502, b"<html>Bad Gateway</html>");

        assert_eq!(err.http_status_code, 502);
        assert!(err.message.starts_with("unable to read response from hubspot: "));
        assert!(err.details.is_empty());
    }

    #[test]
    fn test_is_error_status() {
        assert!(!is_error_status(200));
        assert!(!is_error_status(204));
        assert!(!is_error_status(399));
        assert!(is_error_status(400));
        assert!(is_error_status(500));
    }
}
