#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// Creates one well-formed generated question
    pub fn question_json(text: &str, correct_answer_index: i64) -> Value {
        json!({
            "question": text,
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer_index": correct_answer_index
        })
    }

    /// Creates a well-formed array of `count` generated questions
    pub fn valid_question_array(count: usize) -> Value {
        Value::Array(
            (0..count)
                .map(|i| question_json(&format!("Question text {}?", i + 1), (i % 4) as i64))
                .collect(),
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;

    #[test]
    fn test_fixtures_question_json() {
        let question = question_json("Why?", 2);
        assert_eq!(question["question"], "Why?");
        assert_eq!(question["options"].as_array().unwrap().len(), 4);
        assert_eq!(question["correct_answer_index"], 2);
    }

    #[test]
    fn test_fixtures_valid_question_array() {
        let questions = valid_question_array(5);
        let items = questions.as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["question"], "Question text 1?");
        assert_eq!(items[4]["correct_answer_index"], 0);
    }

    #[test]
    fn test_status_helpers() {
        assert_success_status(actix_web::http::StatusCode::OK);
        assert_error_status(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
