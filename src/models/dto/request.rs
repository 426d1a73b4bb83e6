use serde_json::Value;

use crate::models::domain::quiz_request::{
    Difficulty, QuestionCount, QuizRequest, DEFAULT_CATEGORY, DEFAULT_NUM_QUESTIONS,
};

/// Loosely-typed quiz parameters as they arrive in a body or a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizParams {
    pub category: Option<String>,
    pub num_questions: Option<String>,
    pub difficulty: Option<String>,
}

impl QuizParams {
    /// Picks the fields out of a JSON body. Strings and numbers are accepted;
    /// any other type counts as absent, as does a body that is not an object.
    pub fn from_json(body: &Value) -> Self {
        Self {
            category: json_text(body, "category"),
            num_questions: json_text(body, "numQuestions"),
            difficulty: json_text(body, "difficulty"),
        }
    }

    /// Lenient body parsing: empty or malformed bodies yield empty params.
    pub fn from_body(raw: &[u8]) -> Self {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }

        match serde_json::from_slice::<Value>(raw) {
            Ok(body) => Self::from_json(&body),
            Err(e) => {
                log::error!(
                    "Error parsing JSON body: {}. Raw body was: {}",
                    e,
                    String::from_utf8_lossy(raw)
                );
                Self::default()
            }
        }
    }

    /// Lenient query-string parsing. Unknown keys are ignored and a repeated
    /// key keeps its first value.
    pub fn from_query(query: &str) -> Self {
        let pairs = match actix_web::web::Query::<Vec<(String, String)>>::from_query(query) {
            Ok(pairs) => pairs.into_inner(),
            Err(e) => {
                log::warn!("Ignoring unreadable query string '{}': {}", query, e);
                return Self::default();
            }
        };

        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut params.category,
                "numQuestions" => &mut params.num_questions,
                "difficulty" => &mut params.difficulty,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Builds the request, taking each field from the body first, then the
    /// query, then the default.
    pub fn normalize(body: &QuizParams, query: &QuizParams) -> QuizRequest {
        let category = first_non_empty(&body.category, &query.category)
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();
        let num_questions = QuestionCount::parse(
            first_non_empty(&body.num_questions, &query.num_questions)
                .unwrap_or(DEFAULT_NUM_QUESTIONS),
        );
        let difficulty = first_non_empty(&body.difficulty, &query.difficulty)
            .map(Difficulty::parse)
            .unwrap_or_default();

        QuizRequest {
            category,
            num_questions,
            difficulty,
        }
    }
}

fn first_non_empty<'a>(primary: &'a Option<String>, fallback: &'a Option<String>) -> Option<&'a str> {
    [primary, fallback]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .find(|v| !v.is_empty())
}

// A numeric zero is falsy for the body-then-query fallback; the string "0" is not.
fn json_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
