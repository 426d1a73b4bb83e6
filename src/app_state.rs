use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        generator::{GeminiGenerator, QuizGenerator},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = GeminiGenerator::from_config(&config).map(|generator| {
            log::info!("Using Gemini endpoint {}", generator.endpoint());
            Arc::new(generator) as Arc<dyn QuizGenerator>
        });
        if generator.is_none() {
            log::error!("GEMINI_API_KEY is not set; every quiz request will fail.");
        }

        Self::with_generator(config, generator)
    }

    /// Wires the service around an explicit generator, or none at all.
    pub fn with_generator(config: Config, generator: Option<Arc<dyn QuizGenerator>>) -> Self {
        let quiz_service = Arc::new(QuizService::new(generator, config.uniqueness_nonce));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
