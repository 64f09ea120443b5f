//! Error types for the client crate.

use std::time::Duration;

use roster_core::CoreError;

/// Errors that can occur while talking to the student API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The API answered with a non-2xx status.
    ///
    /// Displayed the way users of the roster have always seen it,
    /// e.g. `Erro 404 - Not Found`.
    #[error("Erro {status} - {reason}")]
    Status { status: u16, reason: String },

    /// Connection, TLS, or request-building failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] CoreError),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The id cannot be placed in a request path as-is.
    #[error("invalid student id '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    /// The client configuration is unusable.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Builds a [`ClientError::Status`] from a response status code.
    #[must_use]
    pub fn from_status(status: hyper::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
        }
    }

    /// HTTP status returned by the API, if the failure was a status error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_matches_user_format() {
        let err = ClientError::from_status(hyper::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Erro 404 - Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn unknown_status_has_empty_reason() {
        let status = match hyper::StatusCode::from_u16(599) {
            Ok(s) => s,
            Err(e) => panic!("599 must be a valid status: {e}"),
        };
        assert_eq!(ClientError::from_status(status).to_string(), "Erro 599 - ");
    }

    #[test]
    fn timeout_display_includes_seconds() {
        let err = ClientError::Timeout(Duration::from_secs(10));
        assert!(err.to_string().contains("10s"));
        assert!(err.status().is_none());
    }

    #[test]
    fn sub_second_timeout_display_keeps_milliseconds() {
        let err = ClientError::Timeout(Duration::from_millis(200));
        assert_eq!(err.to_string(), "request timed out after 200ms");
    }
}
