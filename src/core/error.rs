use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure kinds surfaced by the province sync pipeline.
///
/// The variants stay free of HTTP concerns; status codes are chosen in
/// [`IntoResponse`] only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl AppError {
    /// Short machine-readable label, used as a tracing field
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database",
            AppError::ExternalServiceError(_) => "external_service",
            AppError::Parse(_) => "parse",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            // Remote outages, bad payloads and store failures all collapse to 500
            AppError::Database(_) | AppError::ExternalServiceError(_) | AppError::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        tracing::error!(kind = self.kind(), "Request failed: {}", message);

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_maps_to_internal_server_error() {
        let errors = [
            AppError::Database(sqlx::Error::RowNotFound),
            AppError::ExternalServiceError("connection refused".to_string()),
            AppError::Parse("invalid province id 'abc'".to_string()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_message_keeps_underlying_description() {
        let error = AppError::Parse("invalid province id 'abc'".to_string());
        assert_eq!(error.kind(), "parse");
        assert_eq!(error.to_string(), "Parse error: invalid province id 'abc'");
    }

    #[test]
    fn test_response_is_plain_text() {
        let response =
            AppError::ExternalServiceError("province source returned 503".to_string())
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
