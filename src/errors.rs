use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::Value;
use thiserror::Error;

use crate::models::dto::response::ErrorResponse;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Server Error: API key not configured.")]
    ApiKeyMissing,

    #[error("Failed to parse AI response. It might not have returned valid JSON. Try generating again.")]
    MalformedResponse { raw: String, reason: String },

    #[error("AI generated questions in an unexpected format. Please try again.")]
    UnexpectedFormat { generated: Value, reason: String },

    #[error("Failed to generate quiz questions.")]
    Generation(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ApiKeyMissing => "API_KEY_MISSING",
            AppError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            AppError::UnexpectedFormat { .. } => "UNEXPECTED_FORMAT",
            AppError::Generation(_) => "GENERATION_FAILED",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        let mut response = ErrorResponse::new(self.to_string());
        match self {
            AppError::ApiKeyMissing => {}
            AppError::MalformedResponse { raw, .. } => response.raw_response = Some(raw.clone()),
            AppError::UnexpectedFormat { generated, .. } => {
                response.generated_data = Some(generated.clone())
            }
            AppError::Generation(details) => response.details = Some(details.clone()),
        }
        response
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ApiKeyMissing
            | AppError::MalformedResponse { .. }
            | AppError::UnexpectedFormat { .. }
            | AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_error_response())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Generation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_status_codes() {
        let errors = [
            AppError::ApiKeyMissing,
            AppError::MalformedResponse {
                raw: "nope".into(),
                reason: "expected value".into(),
            },
            AppError::UnexpectedFormat {
                generated: json!({}),
                reason: "not an array".into(),
            },
            AppError::Generation("boom".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::ApiKeyMissing;
        assert_eq!(err.to_string(), "Server Error: API key not configured.");
        assert_eq!(err.error_code(), "API_KEY_MISSING");
    }

    #[test]
    fn test_error_response_carries_diagnostics() {
        let malformed = AppError::MalformedResponse {
            raw: "I cannot help with that".into(),
            reason: "expected value at line 1 column 1".into(),
        }
        .to_error_response();
        assert_eq!(malformed.raw_response.as_deref(), Some("I cannot help with that"));
        assert!(malformed.generated_data.is_none());

        let generation = AppError::Generation("connection refused".into()).to_error_response();
        assert_eq!(generation.error, "Failed to generate quiz questions.");
        assert_eq!(generation.details.as_deref(), Some("connection refused"));
    }
}
