#[cfg(feature = "server")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Body of a failed `/api-docs` request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable snake_case code, e.g. `serialization_error`
    pub error: &'static str,
    /// Summary safe to show in a browser; internal details stay in the logs
    pub message: &'static str,
}

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Security scheme `{0}` registered twice with conflicting definitions")]
    DuplicateSecurityScheme(String),

    #[error("Security requirement references unknown scheme `{0}`")]
    UnknownSecurityScheme(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DocsError {
    fn code(&self) -> &'static str {
        match self {
            DocsError::DuplicateSecurityScheme(_) => "duplicate_security_scheme",
            DocsError::UnknownSecurityScheme(_) => "unknown_security_scheme",
            DocsError::Serialization(_) => "serialization_error",
            DocsError::Config(_) => "config_error",
            DocsError::Io(_) => "io_error",
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            DocsError::DuplicateSecurityScheme(_) | DocsError::UnknownSecurityScheme(_) => {
                "API documentation is misconfigured"
            }
            DocsError::Serialization(_) => "Failed to render API documentation",
            DocsError::Config(_) => "Invalid documentation configuration",
            DocsError::Io(_) => "I/O error",
        }
    }
}

#[cfg(feature = "server")]
impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to serve API documentation");

        let error_response = ErrorResponse {
            error: self.code(),
            message: self.public_message(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(error_response)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            DocsError::DuplicateSecurityScheme("BearerAuth".into()).code(),
            "duplicate_security_scheme"
        );
        assert_eq!(
            DocsError::Serialization("boom".into()).code(),
            "serialization_error"
        );
    }

    #[test]
    fn display_names_the_scheme() {
        let err = DocsError::UnknownSecurityScheme("ApiKey".into());
        assert_eq!(
            err.to_string(),
            "Security requirement references unknown scheme `ApiKey`"
        );
    }

    #[cfg(feature = "server")]
    #[test]
    fn into_response_is_internal_server_error() {
        let response = DocsError::Serialization("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
