//! Error types for hubspot-auth.
//!
//! Error messages never include client secrets or token values.

/// Result type alias for hubspot-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hubspot-auth operations.
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
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Required OAuth configuration fields are empty.
    #[error("missing required options: {0}")]
    MissingOptions(String),

    /// The token endpoint answered with an error status.
    #[error("failed to authorize: {0}")]
    Authorize(String),

    /// The token endpoint answered with an empty body.
    #[error("missing authorization token")]
    MissingToken,

    /// The refreshed token lacks an access or refresh token, or is already stale.
    #[error("invalid authorization token")]
    InvalidToken,

    /// HTTP error talking to the token endpoint.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::with_source(ErrorKind::Http(err.to_string()), err)
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
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {err}")), err)
    }
}

impl From<Error> for hubspot_client::Error {
    fn from(err: Error) -> Self {
        hubspot_client::Error::with_source(
            hubspot_client::ErrorKind::Authentication(err.to_string()),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(
            ErrorKind::MissingOptions("client_id,refresh_token".into()).to_string(),
            "missing required options: client_id,refresh_token"
        );
        assert_eq!(
            ErrorKind::Authorize("{\"status\":\"BAD_REFRESH_TOKEN\"}".into()).to_string(),
            "failed to authorize: {\"status\":\"BAD_REFRESH_TOKEN\"}"
        );
        assert_eq!(ErrorKind::MissingToken.to_string(), "missing authorization token");
        assert_eq!(ErrorKind::InvalidToken.to_string(), "invalid authorization token");
    }

    #[test]
    fn test_converts_to_client_authentication_error() {
        let err: hubspot_client::Error = Error::new(ErrorKind::InvalidToken).into();
        assert!(err.is_auth_error());
        assert_eq!(
            err.to_string(),
            "Authentication error: invalid authorization token"
        );
        assert!(err.source.is_some());
    }
}
