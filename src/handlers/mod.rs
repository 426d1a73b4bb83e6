use actix_web::web;

pub mod health_handler;
pub mod quiz_handler;

pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{generate_quiz, quiz_preflight};

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_ready)
        .service(generate_quiz)
        .service(quiz_preflight);
}
