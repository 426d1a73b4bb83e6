use actix_web::{options, route, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::dto::request::QuizParams,
    services::http_helpers::{preflight, quiz_response},
};

#[route("/api/quiz", method = "GET", method = "POST")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    let request_id = get_request_id(&req).unwrap_or_default();
    let query = QuizParams::from_query(req.query_string());
    let body = QuizParams::from_body(&body);
    let request = QuizParams::normalize(&body, &query);

    log::info!(
        "[{}] {} quiz request: {} question(s) about '{}' ({})",
        request_id,
        req.method(),
        request.num_questions,
        request.category,
        request.difficulty
    );

    let result = state.quiz_service.generate_questions(&request).await;
    if let Err(e) = &result {
        log::error!("[{}] Quiz generation failed: {} ({})", request_id, e, e.error_code());
    }
    quiz_response(result)
}

#[options("/api/quiz")]
pub async fn quiz_preflight() -> HttpResponse {
    preflight()
}
