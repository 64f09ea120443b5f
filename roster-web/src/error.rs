//! Error types for the web crate.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use roster_client::ClientError;

use crate::view::render_error;

/// Errors that can occur during request handling or startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WebError {
    /// A student id in the URL or form could not be used.
    #[error("invalid request: {0}")]
    InvalidId(#[from] roster_core::CoreError),

    /// The environment does not describe a usable configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The student API failed or answered with an error.
    #[error("upstream error: {0}")]
    Upstream(ClientError),
}

impl From<ClientError> for WebError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidConfig(msg) => WebError::Config(msg),
            other => WebError::Upstream(other),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::InvalidId(_) => StatusCode::BAD_REQUEST,
            WebError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Html(render_error(status.as_u16(), &self.to_string()))).into_response()
    }
}
