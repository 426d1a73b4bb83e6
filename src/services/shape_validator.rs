use serde_json::{Map, Value};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        quiz_question::{MAX_ANSWER_INDEX, OPTION_COUNT},
        QuizQuestion, QuizQuestionSet,
    },
};

/// Checks that `value` is an array of well-formed questions. One bad element
/// rejects the whole set; the error carries the value as received.
pub fn validate_questions(value: Value) -> AppResult<QuizQuestionSet> {
    match check_shape(&value) {
        Ok(questions) => Ok(QuizQuestionSet(questions)),
        Err(reason) => {
            log::error!(
                "AI generated questions in an unexpected format ({}): {}",
                reason,
                value
            );
            Err(AppError::UnexpectedFormat {
                generated: value,
                reason,
            })
        }
    }
}

fn check_shape(value: &Value) -> Result<Vec<QuizQuestion>, String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("expected a JSON array, got {}", type_name(value)))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| check_question(item).map_err(|reason| format!("question {}: {}", i, reason)))
        .collect()
}

fn check_question(item: &Value) -> Result<QuizQuestion, String> {
    let fields = item
        .as_object()
        .ok_or_else(|| format!("expected an object, got {}", type_name(item)))?;

    let question = fields
        .get("question")
        .and_then(Value::as_str)
        .ok_or("\"question\" must be a string")?
        .to_string();

    let options = fields
        .get("options")
        .and_then(Value::as_array)
        .ok_or("\"options\" must be an array")?;
    if options.len() != OPTION_COUNT {
        return Err(format!(
            "\"options\" must have exactly {} entries, found {}",
            OPTION_COUNT,
            options.len()
        ));
    }
    let options = options
        .iter()
        .map(|o| o.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or("\"options\" must contain only strings")?;

    let correct_answer_index = fields
        .get("correct_answer_index")
        .and_then(answer_index)
        .ok_or_else(|| {
            format!(
                "\"correct_answer_index\" must be an integer between 0 and {}",
                MAX_ANSWER_INDEX
            )
        })?;

    let extra: Map<String, Value> = fields
        .iter()
        .filter(|(key, _)| {
            !matches!(key.as_str(), "question" | "options" | "correct_answer_index")
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(QuizQuestion {
        question,
        options,
        correct_answer_index,
        extra,
    })
}

/// Accepts any JSON number with an integral value in range, so `2.0` counts.
fn answer_index(value: &Value) -> Option<u8> {
    let n = value.as_f64()?;
    if n.fract() != 0.0 || n < 0.0 || n > f64::from(MAX_ANSWER_INDEX) {
        return None;
    }
    Some(n as u8)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
