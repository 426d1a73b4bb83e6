use lambda_runtime::{service_fn, Error, LambdaEvent};
use quiz_gen_server::{
    app_state::AppState,
    config::Config,
    serverless::{handle_event, FunctionEvent, FunctionResponse},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let state = AppState::new(Config::from_env());

    lambda_runtime::run(service_fn(move |event: LambdaEvent<FunctionEvent>| {
        let state = state.clone();
        async move { Ok::<FunctionResponse, Error>(handle_event(&state, event.payload).await) }
    }))
    .await
}
