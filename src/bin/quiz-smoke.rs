use clap::Parser;
use quiz_gen_server::{
    app_state::AppState,
    config::Config,
    models::domain::{Difficulty, QuestionCount, QuizRequest},
};

/// Runs one quiz generation against the configured Gemini model
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Topic of the questions
    #[arg(short, long, default_value = "history")]
    category: String,

    /// Number of questions to ask for
    #[arg(short, long, default_value = "2")]
    num_questions: String,

    /// easy, medium, hard or any
    #[arg(short, long, default_value = "any")]
    difficulty: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let request = QuizRequest {
        category: args.category,
        num_questions: QuestionCount::parse(&args.num_questions),
        difficulty: Difficulty::parse(&args.difficulty),
    };

    let state = AppState::new(Config::from_env());
    match state.quiz_service.generate_questions(&request).await {
        Ok(questions) => match serde_json::to_string_pretty(&questions) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error printing questions: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            let details = serde_json::to_string_pretty(&e.to_error_response())
                .unwrap_or_else(|_| e.to_string());
            eprintln!("Error during generation: {}", details);
            std::process::exit(1);
        }
    }
}
