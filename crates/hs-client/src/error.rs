//! Error types for hubspot-client.

use crate::api_error::ApiError;

/// Result type alias for hubspot-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hubspot-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Wrap a decoded HubSpot error response.
    pub fn api(err: ApiError) -> Self {
        Self::new(ErrorKind::Api(Box::new(err)))
    }

    /// The HubSpot error response, if this error came from one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The HTTP status code of the HubSpot error response.
    pub fn status(&self) -> Option<u16> {
        self.as_api_error().map(|err| err.http_status_code)
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication(_))
    }

    /// Returns true if HubSpot rejected the request as invalid input.
    pub fn is_validation_error(&self) -> bool {
        self.as_api_error()
            .is_some_and(|err| err.is_validation_error())
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// HubSpot returned an error response.
    #[error("HubSpot API error: {0}")]
    Api(Box<ApiError>),

    /// Credentials could not be obtained or applied.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Query string serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_builder() {
            ErrorKind::InvalidUrl(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_error::{ErrDetail, VALIDATION_ERROR};

    #[test]
    fn test_api_error_accessors() {
        let err = Error::api(ApiError {
            http_status_code: 400,
            message: "Property values were not valid".to_string(),
            category: VALIDATION_ERROR.to_string(),
            details: vec![ErrDetail::default()],
            ..Default::default()
        });

        assert_eq!(err.status(), Some(400));
        assert!(err.is_validation_error());
        assert!(!err.is_auth_error());
        assert_eq!(
            err.to_string(),
            "HubSpot API error: 400: Property values were not valid"
        );
    }

    #[test]
    fn test_error_is_auth_error() {
        let err = Error::new(ErrorKind::Authentication("missing authorization token".into()));
        assert!(err.is_auth_error());
        assert_eq!(err.status(), None);
        assert!(err.as_api_error().is_none());
    }

    #[test]
    fn test_error_kind_display_messages() {
        let cases: Vec<(ErrorKind, &str)> = vec![
            (
                ErrorKind::Authentication("invalid authorization token".into()),
                "Authentication error: invalid authorization token",
            ),
            (ErrorKind::Timeout, "Request timeout"),
            (
                ErrorKind::Connection("refused".into()),
                "Connection error: refused",
            ),
            (
                ErrorKind::Json("unexpected EOF".into()),
                "JSON error: unexpected EOF",
            ),
            (
                ErrorKind::InvalidUrl("no scheme".into()),
                "Invalid URL: no scheme",
            ),
            (
                ErrorKind::Serialization("not a map".into()),
                "Serialization error: not a map",
            ),
            (
                ErrorKind::Config("the authentication method is not set".into()),
                "Configuration error: the authentication method is not set",
            ),
            (ErrorKind::Other("something else".into()), "something else"),
        ];

        for (kind, expected) in cases {
            assert_eq!(kind.to_string(), expected);
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)));
    }
}
