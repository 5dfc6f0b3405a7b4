use std::sync::Arc;

use kai_chat::{
    clients::groq::GroqClient, http::handler::ChatHandler, logging, services::chat::ChatService, Config,
};
use vercel_runtime::{run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; every chat request will fail");
    }
    let client = GroqClient::new(&config)?;
    let handler = Arc::new(ChatHandler::new(ChatService::new(config, client)));

    run(move |req| {
        let handler = Arc::clone(&handler);
        async move { handler.handle(req).await }
    })
    .await
}
