use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState, models::dto::request::QuizParams, services::http_helpers::format_outcome,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionEvent {
    fn query_params(&self) -> QuizParams {
        let query = self.query_string_parameters.as_ref();
        let get = |key: &str| query.and_then(|q| q.get(key)).cloned();

        QuizParams {
            category: get("category"),
            num_questions: get("numQuestions"),
            difficulty: get("difficulty"),
        }
    }
}

/// Handles one API-gateway style event (AWS Lambda proxy integration,
/// Netlify Functions).
pub async fn handle_event(state: &AppState, event: FunctionEvent) -> FunctionResponse {
    log::debug!("Received HTTP method: {}", event.http_method);
    log::debug!("Raw event body: {:?}", event.body);

    let body = event
        .body
        .as_deref()
        .map(|raw| QuizParams::from_body(raw.as_bytes()))
        .unwrap_or_default();
    log::debug!("Parsed body parameters: {:?}", body);

    let request = QuizParams::normalize(&body, &event.query_params());
    let result = state.quiz_service.generate_questions(&request).await;
    if let Err(e) = &result {
        log::error!("Quiz generation failed: {} ({})", e, e.error_code());
    }

    let (status, body) = format_outcome(result);
    FunctionResponse {
        status_code: status.as_u16(),
        headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        body: body.to_string(),
    }
}
