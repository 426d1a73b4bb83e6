use once_cell::sync::Lazy;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

static CODE_FENCE_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"```json\s*|```").expect("CODE_FENCE_REGEX is a valid regex pattern")
});

/// Strips markdown code fences anywhere in the text, then trims.
pub fn clean_response(text: &str) -> String {
    CODE_FENCE_REGEX.replace_all(text, "").trim().to_string()
}

/// Cleans and parses generator output. The error keeps the untouched text.
pub fn parse_response(text: &str) -> AppResult<Value> {
    let cleaned = clean_response(text);
    serde_json::from_str(&cleaned).map_err(|e| {
        log::error!("Failed to parse AI response as JSON: {}", e);
        log::error!("Problematic AI response was: {}", text);
        AppError::MalformedResponse {
            raw: text.to_string(),
            reason: e.to_string(),
        }
    })
}
