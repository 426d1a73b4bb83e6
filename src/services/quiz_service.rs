use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizQuestionSet, QuizRequest},
    services::{
        generator::QuizGenerator, prompt_builder::build_prompt, response_parser::parse_response,
        shape_validator::validate_questions,
    },
};

pub struct QuizService {
    generator: Option<Arc<dyn QuizGenerator>>,
    uniqueness_nonce: bool,
}

impl QuizService {
    /// `generator` is `None` when no API key is configured; every call then
    /// fails before anything is sent.
    pub fn new(generator: Option<Arc<dyn QuizGenerator>>, uniqueness_nonce: bool) -> Self {
        Self {
            generator,
            uniqueness_nonce,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn generate_questions(&self, request: &QuizRequest) -> AppResult<QuizQuestionSet> {
        let generator = self.generator.as_ref().ok_or_else(|| {
            log::error!("GEMINI_API_KEY is not set.");
            AppError::ApiKeyMissing
        })?;

        let nonce = self
            .uniqueness_nonce
            .then(|| Utc::now().timestamp_millis());
        let prompt = build_prompt(request, nonce);
        log::info!("Sending prompt to Gemini: {}", prompt);

        let text = generator.generate(&prompt).await.map_err(|e| {
            log::error!("Error generating quiz questions: {:?}", e);
            e
        })?;
        log::debug!("Raw AI response: {}", text);

        let questions = validate_questions(parse_response(&text)?)?;

        if let Some(expected) = request.num_questions.as_exact() {
            if questions.len() as i64 != expected {
                log::warn!(
                    "Requested {} questions about '{}' but received {}",
                    expected,
                    request.category,
                    questions.len()
                );
            }
        }

        log::info!(
            "Generated {} {} questions about '{}'",
            questions.len(),
            request.difficulty,
            request.category
        );
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::QuestionCount,
        services::generator::MockQuizGenerator,
        test_utils::fixtures::valid_question_array,
    };
    use serde_json::json;

    fn service_with(mock: MockQuizGenerator) -> QuizService {
        QuizService::new(Some(Arc::new(mock)), false)
    }

    fn history_request() -> QuizRequest {
        QuizRequest {
            category: "history".to_string(),
            num_questions: QuestionCount::Exact(2),
            ..QuizRequest::default()
        }
    }

    #[tokio::test]
    async fn returns_validated_questions() {
        let expected = valid_question_array(2);
        let body = format!("```json\n{}\n```", expected);

        let mut mock = MockQuizGenerator::new();
        mock.expect_generate()
            .withf(|prompt: &str| {
                prompt.contains("Generate exactly 2") && prompt.contains("\"history\"")
            })
            .times(1)
            .returning(move |_| Ok(body.clone()));

        let questions = service_with(mock)
            .generate_questions(&history_request())
            .await
            .unwrap();
        assert_eq!(serde_json::to_value(&questions).unwrap(), expected);
    }

    #[tokio::test]
    async fn missing_generator_fails_before_any_call() {
        let service = QuizService::new(None, true);
        assert!(!service.is_configured());

        let err = service
            .generate_questions(&QuizRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiKeyMissing));
    }

    #[tokio::test]
    async fn unparseable_output_is_reported_with_raw_text() {
        let mut mock = MockQuizGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok("Here are your questions!".to_string()));

        let err = service_with(mock)
            .generate_questions(&history_request())
            .await
            .unwrap_err();
        match err {
            AppError::MalformedResponse { raw, .. } => assert_eq!(raw, "Here are your questions!"),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_shape_is_reported_with_parsed_value() {
        let mut bad = valid_question_array(2);
        bad[0]["options"] = json!(["a", "b", "c"]);
        let text = bad.to_string();

        let mut mock = MockQuizGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(move |_| Ok(text.clone()));

        let err = service_with(mock)
            .generate_questions(&history_request())
            .await
            .unwrap_err();
        match err {
            AppError::UnexpectedFormat { generated, .. } => assert_eq!(generated, bad),
            other => panic!("expected UnexpectedFormat, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn generator_failure_is_not_retried() {
        let mut mock = MockQuizGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Err(AppError::Generation("quota exceeded".to_string())));

        let err = service_with(mock)
            .generate_questions(&history_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(ref msg) if msg == "quota exceeded"));
    }

    #[tokio::test]
    async fn nonce_is_added_when_enabled() {
        let mut mock = MockQuizGenerator::new();
        mock.expect_generate()
            .withf(|prompt: &str| prompt.contains("Timestamp for uniqueness: "))
            .times(1)
            .returning(|_| Ok("[]".to_string()));

        let service = QuizService::new(Some(Arc::new(mock)), true);
        let questions = service.generate_questions(&QuizRequest::default()).await.unwrap();
        assert!(questions.is_empty());
    }
}
