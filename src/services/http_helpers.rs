use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use serde_json::Value;

use crate::{errors::AppResult, models::domain::QuizQuestionSet};

pub const CORS_ALLOWED_METHODS: &str = "GET, POST";
pub const CORS_ALLOWED_HEADERS: &str = "Content-Type";
pub const CORS_MAX_AGE_SECONDS: &str = "3600";

/// Decides status and JSON body for a generation outcome.
pub fn format_outcome(result: AppResult<QuizQuestionSet>) -> (StatusCode, Value) {
    match result {
        Ok(questions) => match serde_json::to_value(questions) {
            Ok(body) => (StatusCode::OK, body),
            Err(e) => internal_error(e),
        },
        Err(err) => match serde_json::to_value(err.to_error_response()) {
            Ok(body) => (err.status_code(), body),
            Err(e) => internal_error(e),
        },
    }
}

/// Creates the HTTP response for a generation outcome
pub fn quiz_response(result: AppResult<QuizQuestionSet>) -> HttpResponse {
    let (status, body) = format_outcome(result);
    HttpResponse::build(status).json(body)
}

/// Creates the empty 204 answer to a CORS preflight
pub fn preflight() -> HttpResponse {
    HttpResponse::NoContent()
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOWED_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOWED_HEADERS))
        .insert_header((header::ACCESS_CONTROL_MAX_AGE, CORS_MAX_AGE_SECONDS))
        .finish()
}

fn internal_error(err: impl std::fmt::Display) -> (StatusCode, Value) {
    log::error!("Failed to serialize response body: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({ "error": err.to_string() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError, services::shape_validator::validate_questions,
        test_utils::fixtures::valid_question_array,
    };
    use serde_json::json;

    #[test]
    fn test_success_is_200_with_the_array() {
        let value = valid_question_array(2);
        let set = validate_questions(value.clone()).unwrap();

        let (status, body) = format_outcome(Ok(set));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, value);
    }

    #[test]
    fn test_three_options_is_500_with_the_parsed_structure() {
        let mut value = valid_question_array(2);
        value[0]["options"] = json!(["a", "b", "c"]);
        let result = validate_questions(value.clone());

        let (status, body) = format_outcome(result);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["generatedData"], value);
        assert_eq!(
            body["error"],
            "AI generated questions in an unexpected format. Please try again."
        );
    }

    #[test]
    fn test_missing_key_is_500() {
        let (status, body) = format_outcome(Err(AppError::ApiKeyMissing));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Server Error: API key not configured." }));
    }

    #[test]
    fn test_preflight() {
        let response = preflight();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, POST"
        );
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_MAX_AGE).unwrap(),
            "3600"
        );
    }
}
